use sdl2::event::Event;
use sdl2::keyboard::Keycode;

// Actions that can be triggered by discrete key presses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    None,
    Reset,
    TogglePause,
    Exit,
}

// Tracks which movement keys are held so the game can poll a movement
// axis every frame, and translates one-shot keys into InputActions.
pub struct InputHandler {
    key_states: [bool; 4], // Up, Down, Left, Right
}

impl InputHandler {
    pub fn new() -> Self {
        InputHandler {
            key_states: [false; 4],
        }
    }

    pub fn process_event(&mut self, event: &Event) -> InputAction {
        match event {
            Event::KeyDown {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => match keycode {
                Keycode::Up => {
                    self.key_states[0] = true;
                    InputAction::None
                }
                Keycode::Down => {
                    self.key_states[1] = true;
                    InputAction::None
                }
                Keycode::Left => {
                    self.key_states[2] = true;
                    InputAction::None
                }
                Keycode::Right => {
                    self.key_states[3] = true;
                    InputAction::None
                }
                Keycode::R => InputAction::Reset,
                Keycode::P => InputAction::TogglePause,
                Keycode::Escape => InputAction::Exit,
                _ => InputAction::None,
            },
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => {
                match keycode {
                    Keycode::Up => self.key_states[0] = false,
                    Keycode::Down => self.key_states[1] = false,
                    Keycode::Left => self.key_states[2] = false,
                    Keycode::Right => self.key_states[3] = false,
                    _ => {}
                }
                InputAction::None
            }
            _ => InputAction::None,
        }
    }

    // Movement axis from the held keys; each component is -1, 0 or 1.
    // Opposite keys cancel.
    pub fn movement(&self) -> (f32, f32) {
        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.key_states[0] {
            dy -= 1.0;
        }
        if self.key_states[1] {
            dy += 1.0;
        }
        if self.key_states[2] {
            dx -= 1.0;
        }
        if self.key_states[3] {
            dx += 1.0;
        }
        (dx, dy)
    }

    pub fn is_any_movement_key_pressed(&self) -> bool {
        self.key_states.iter().any(|&pressed| pressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn key_down(keycode: Keycode) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    fn key_up(keycode: Keycode) -> Event {
        Event::KeyUp {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat: false,
        }
    }

    #[test]
    fn held_keys_produce_movement_axes() {
        let mut input = InputHandler::new();
        assert_eq!(input.movement(), (0.0, 0.0));

        input.process_event(&key_down(Keycode::Up));
        input.process_event(&key_down(Keycode::Right));
        assert_eq!(input.movement(), (1.0, -1.0));
        assert!(input.is_any_movement_key_pressed());

        input.process_event(&key_up(Keycode::Up));
        assert_eq!(input.movement(), (1.0, 0.0));
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut input = InputHandler::new();
        input.process_event(&key_down(Keycode::Left));
        input.process_event(&key_down(Keycode::Right));
        assert_eq!(input.movement(), (0.0, 0.0));
    }

    #[test]
    fn one_shot_keys_map_to_actions() {
        let mut input = InputHandler::new();
        assert_eq!(input.process_event(&key_down(Keycode::R)), InputAction::Reset);
        assert_eq!(
            input.process_event(&key_down(Keycode::P)),
            InputAction::TogglePause
        );
        assert_eq!(
            input.process_event(&key_down(Keycode::Escape)),
            InputAction::Exit
        );
        assert_eq!(input.process_event(&key_down(Keycode::Space)), InputAction::None);
    }
}
