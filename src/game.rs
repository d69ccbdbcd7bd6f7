use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{AI_MOVE_CHANCE, BASELINE_Y, NUM_AI, WINDOW_WIDTH};
use crate::input::{InputAction, InputHandler};
use crate::round::{LightState, Round};
use crate::statistics::Statistics;
use crate::vehicle::Vehicle;

// Game state for one session: the current round, the vehicles on the
// road, the random source, and the session statistics. Rendering lives
// in the Renderer; this struct never touches SDL.
pub struct Game {
    pub round: Round,
    pub vehicles: Vec<Vehicle>,
    pub paused: bool,
    pub statistics: Statistics,
    // Per-frame Bernoulli probability for AI movement; adjustable for
    // difficulty tuning.
    pub ai_move_chance: f64,
    rng: StdRng,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let round = Round::new(&mut rng);
        let mut statistics = Statistics::new();
        statistics.record_round_start();

        Game {
            round,
            vehicles: starting_grid(),
            paused: false,
            statistics,
            ai_move_chance: AI_MOVE_CHANCE,
            rng,
        }
    }

    pub fn human(&self) -> &Vehicle {
        &self.vehicles[0]
    }

    pub fn handle_action(&mut self, action: InputAction) {
        match action {
            InputAction::Reset => {
                if self.round.is_terminal() {
                    self.reset();
                } else {
                    log::debug!("Reset ignored: round still running");
                }
            }
            InputAction::TogglePause => {
                self.paused = !self.paused;
                log::info!("Pause: {}", if self.paused { "ON" } else { "OFF" });
            }
            _ => {}
        }
    }

    // One frame of game logic: human movement, AI movement, finish
    // checks, then the light timer. Paused frames change nothing.
    pub fn update(&mut self, delta_time: f32, input: &InputHandler) {
        if self.paused {
            return;
        }

        self.update_human(delta_time, input);
        self.update_ai(delta_time);
        self.check_finish();
        self.round.advance(delta_time, &mut self.rng);
    }

    // Recreates the whole starting grid and a fresh round. No state
    // from the previous round survives except the session statistics.
    pub fn reset(&mut self) {
        self.vehicles = starting_grid();
        self.round = Round::new(&mut self.rng);
        self.paused = false;
        self.statistics.record_round_start();
        log::info!("Round {} started", self.statistics.rounds_started);
    }

    fn update_human(&mut self, delta_time: f32, input: &InputHandler) {
        if self.round.is_terminal() || !self.vehicles[0].alive {
            return;
        }

        let (axis_x, axis_y) = input.movement();
        let dx = axis_x * self.vehicles[0].speed * delta_time;
        let dy = axis_y * self.vehicles[0].speed * delta_time;

        if (dx != 0.0 || dy != 0.0) && self.round.light == LightState::Red {
            if self.round.mark_lost() {
                self.statistics.record_loss();
                log::info!("Caught moving on a red light");
            }
        }

        // The displacement is still applied on the losing frame; the
        // terminal gate above freezes the human from the next frame on.
        self.vehicles[0].move_by(dx, dy);
    }

    fn update_ai(&mut self, delta_time: f32) {
        if self.round.light != LightState::Green {
            return;
        }

        // One independent trial per AI per frame; no shared timer.
        for vehicle in self.vehicles.iter_mut().skip(1) {
            if vehicle.alive && self.rng.gen_bool(self.ai_move_chance) {
                vehicle.move_by(0.0, -vehicle.speed * delta_time);
            }
        }
    }

    fn check_finish(&mut self) {
        for vehicle in &mut self.vehicles {
            if vehicle.has_crossed_goal() && !vehicle.won {
                vehicle.won = true;
                if vehicle.is_human {
                    if self.round.mark_won() {
                        self.statistics.record_win();
                        log::info!("Human reached the finish line");
                    }
                } else {
                    self.statistics.record_ai_finish();
                    log::debug!("AI vehicle reached the finish line");
                }
            }
        }
    }
}

// Human centered on the baseline row, AI vehicles evenly spaced across
// the full playfield width on the same row.
fn starting_grid() -> Vec<Vehicle> {
    let size = Vehicle::SIZE as f32;
    let width = WINDOW_WIDTH as f32;

    let mut vehicles = Vec::with_capacity(NUM_AI + 1);
    vehicles.push(Vehicle::new_human(width / 2.0 - size / 2.0, BASELINE_Y));

    let spacing = width / (NUM_AI + 1) as f32;
    for i in 0..NUM_AI {
        let x = (spacing * (i + 1) as f32 - size / 2.0).clamp(size / 2.0, width - size / 2.0);
        vehicles.push(Vehicle::new_ai(x, BASELINE_Y));
    }

    vehicles
}
