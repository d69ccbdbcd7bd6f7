use rand::Rng;

use crate::constants::{GREEN_LIGHT_SECS, RED_LIGHT_SECS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightState {
    Green,
    Red,
}

// Round-level state: the light phase timer plus the human's terminal
// flags. The light keeps cycling after a terminal flag is set; only the
// human is frozen.
pub struct Round {
    pub light: LightState,
    pub timer: f32,
    pub duration: f32,
    pub lost: bool,
    pub won: bool,
}

impl Round {
    pub fn new(rng: &mut impl Rng) -> Self {
        Round {
            light: LightState::Green,
            timer: 0.0,
            duration: rng.gen_range(GREEN_LIGHT_SECS),
            lost: false,
            won: false,
        }
    }

    // Advances the phase timer and toggles the light when the current
    // duration has elapsed. A fresh duration is drawn for the new phase.
    pub fn advance(&mut self, delta_time: f32, rng: &mut impl Rng) {
        self.timer += delta_time;
        if self.timer >= self.duration {
            self.light = match self.light {
                LightState::Green => LightState::Red,
                LightState::Red => LightState::Green,
            };
            self.timer = 0.0;
            self.duration = match self.light {
                LightState::Green => rng.gen_range(GREEN_LIGHT_SECS),
                LightState::Red => rng.gen_range(RED_LIGHT_SECS),
            };
            log::debug!("Light switched to {:?} for {:.2}s", self.light, self.duration);
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.lost || self.won
    }

    // lost and won are mutually exclusive; whichever is set first wins.
    // Returns whether the flag was actually set.
    pub fn mark_lost(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.lost = true;
        true
    }

    pub fn mark_won(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.won = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn starts_green_with_duration_in_range() {
        let round = Round::new(&mut rng());
        assert_eq!(round.light, LightState::Green);
        assert_eq!(round.timer, 0.0);
        assert!(GREEN_LIGHT_SECS.contains(&round.duration));
        assert!(!round.lost);
        assert!(!round.won);
    }

    #[test]
    fn light_holds_until_duration_elapses() {
        let mut rng = rng();
        let mut round = Round::new(&mut rng);
        round.duration = 2.0;

        round.advance(1.9, &mut rng);
        assert_eq!(round.light, LightState::Green);
        assert_eq!(round.timer, 1.9);
    }

    // Accumulating 1/60s frames up to the phase duration flips the light
    // on the frame that reaches it, resets the timer, and resamples the
    // duration from the red range.
    #[test]
    fn frame_accumulation_flips_light_at_duration() {
        let mut rng = rng();
        let mut round = Round::new(&mut rng);
        round.duration = 2.0;

        let step = 1.0 / 60.0;
        for _ in 0..119 {
            round.advance(step, &mut rng);
        }
        assert_eq!(round.light, LightState::Green);

        round.advance(step, &mut rng);
        assert_eq!(round.light, LightState::Red);
        assert_eq!(round.timer, 0.0);
        assert!(RED_LIGHT_SECS.contains(&round.duration));
    }

    #[test]
    fn light_toggles_back_to_green() {
        let mut rng = rng();
        let mut round = Round::new(&mut rng);

        round.advance(round.duration, &mut rng);
        assert_eq!(round.light, LightState::Red);

        round.advance(round.duration, &mut rng);
        assert_eq!(round.light, LightState::Green);
        assert!(GREEN_LIGHT_SECS.contains(&round.duration));
    }

    #[test]
    fn terminal_flags_are_mutually_exclusive() {
        let mut round = Round::new(&mut rng());

        assert!(round.mark_lost());
        assert!(!round.mark_won());
        assert!(round.lost);
        assert!(!round.won);

        let mut round = Round::new(&mut rng());
        assert!(round.mark_won());
        assert!(!round.mark_lost());
        assert!(round.won);
        assert!(!round.lost);
    }

    #[test]
    fn light_keeps_cycling_after_terminal() {
        let mut rng = rng();
        let mut round = Round::new(&mut rng);
        round.mark_lost();

        round.advance(round.duration, &mut rng);
        assert_eq!(round.light, LightState::Red);
        assert!(round.lost);
    }
}
