use sdl2::rect::Rect;

use crate::constants::{GOAL_LINE, WINDOW_HEIGHT, WINDOW_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }
}

pub struct Vehicle {
    pub position: Vec2,
    pub speed: f32,
    pub is_human: bool,
    pub alive: bool,
    pub won: bool,
}

impl Vehicle {
    pub const SIZE: u32 = 50;

    // Pixels per second; the human is slightly slower than the AI pack.
    pub const HUMAN_SPEED: f32 = 42.0;
    pub const AI_SPEED: f32 = 48.0;

    pub fn new_human(x: f32, y: f32) -> Self {
        Vehicle {
            position: Vec2::new(x, y),
            speed: Self::HUMAN_SPEED,
            is_human: true,
            alive: true,
            won: false,
        }
    }

    pub fn new_ai(x: f32, y: f32) -> Self {
        Vehicle {
            position: Vec2::new(x, y),
            speed: Self::AI_SPEED,
            is_human: false,
            alive: true,
            won: false,
        }
    }

    // Applies a displacement, keeping the full bounding box inside the
    // playfield. Finished and non-alive vehicles no longer move.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        if !self.alive || self.won {
            return;
        }
        self.position.x = (self.position.x + dx).clamp(0.0, (WINDOW_WIDTH - Self::SIZE) as f32);
        self.position.y = (self.position.y + dy).clamp(0.0, (WINDOW_HEIGHT - Self::SIZE) as f32);
    }

    // The top edge is the leading edge; crossing means reaching the goal row.
    pub fn has_crossed_goal(&self) -> bool {
        self.position.y <= GOAL_LINE
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            self.position.x as i32,
            self.position.y as i32,
            Self::SIZE,
            Self::SIZE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MAX_X: f32 = (WINDOW_WIDTH - Vehicle::SIZE) as f32;
    const MAX_Y: f32 = (WINDOW_HEIGHT - Vehicle::SIZE) as f32;

    #[test]
    fn movement_is_clamped_to_playfield() {
        let mut vehicle = Vehicle::new_human(375.0, 500.0);

        vehicle.move_by(-10_000.0, -10_000.0);
        assert_eq!(vehicle.position.x, 0.0);
        assert_eq!(vehicle.position.y, 0.0);

        vehicle.move_by(10_000.0, 10_000.0);
        assert_eq!(vehicle.position.x, MAX_X);
        assert_eq!(vehicle.position.y, MAX_Y);
    }

    #[test]
    fn finished_vehicle_no_longer_moves() {
        let mut vehicle = Vehicle::new_ai(100.0, 200.0);
        vehicle.won = true;

        vehicle.move_by(5.0, -5.0);
        assert_eq!(vehicle.position, Vec2::new(100.0, 200.0));
    }

    #[test]
    fn goal_crossing_uses_top_edge() {
        let mut vehicle = Vehicle::new_human(375.0, GOAL_LINE + 0.5);
        assert!(!vehicle.has_crossed_goal());

        vehicle.move_by(0.0, -1.0);
        assert!(vehicle.has_crossed_goal());
    }

    proptest! {
        #[test]
        fn position_stays_in_bounds(
            steps in proptest::collection::vec((-200.0f32..200.0, -200.0f32..200.0), 0..100)
        ) {
            let mut vehicle = Vehicle::new_human(375.0, 500.0);
            for (dx, dy) in steps {
                vehicle.move_by(dx, dy);
                prop_assert!(vehicle.position.x >= 0.0 && vehicle.position.x <= MAX_X);
                prop_assert!(vehicle.position.y >= 0.0 && vehicle.position.y <= MAX_Y);
            }
        }
    }
}
