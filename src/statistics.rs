use std::time::Instant;

// Session-level counters. These survive round resets and are printed
// once on exit.
pub struct Statistics {
    pub rounds_started: u32,
    pub rounds_won: u32,
    pub rounds_lost: u32,
    pub ai_finishes: u32,
    session_start: Instant,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics {
            rounds_started: 0,
            rounds_won: 0,
            rounds_lost: 0,
            ai_finishes: 0,
            session_start: Instant::now(),
        }
    }

    pub fn record_round_start(&mut self) {
        self.rounds_started += 1;
    }

    pub fn record_win(&mut self) {
        self.rounds_won += 1;
    }

    pub fn record_loss(&mut self) {
        self.rounds_lost += 1;
    }

    pub fn record_ai_finish(&mut self) {
        self.ai_finishes += 1;
    }

    pub fn rounds_finished(&self) -> u32 {
        self.rounds_won + self.rounds_lost
    }

    pub fn win_rate(&self) -> f32 {
        let finished = self.rounds_finished();
        if finished == 0 {
            return 0.0;
        }
        self.rounds_won as f32 / finished as f32 * 100.0
    }

    pub fn display(&self) {
        let elapsed = self.session_start.elapsed().as_secs_f32();

        println!("\n╔══════════════════════════════════════╗");
        println!("║          SESSION STATISTICS          ║");
        println!("╠══════════════════════════════════════╣");
        println!("║ Session time: {:>16.1}s       ║", elapsed);
        println!("║ Rounds started: {:>16}       ║", self.rounds_started);
        println!("║ Rounds won: {:>20}       ║", self.rounds_won);
        println!("║ Rounds lost: {:>19}       ║", self.rounds_lost);
        println!("║ Win rate: {:>20.1}%       ║", self.win_rate());
        println!("║ AI finishers: {:>18}       ║", self.ai_finishes);
        println!("╚══════════════════════════════════════╝");
    }
}
