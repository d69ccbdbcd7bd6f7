use std::ops::Range;
use std::time::Duration;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const FPS: u32 = 60;
pub const FRAME_DURATION: Duration = Duration::from_millis((1000 / FPS) as u64);

// Y coordinate a vehicle's top edge must reach to finish.
pub const GOAL_LINE: f32 = 10.0;

// Starting row shared by every vehicle.
pub const BASELINE_Y: f32 = WINDOW_HEIGHT as f32 - 100.0;

pub const NUM_AI: usize = 8;

// Bernoulli trial probability per AI vehicle per frame during green.
pub const AI_MOVE_CHANCE: f64 = 0.03;

// Phase lengths are resampled on every light flip. The ranges are
// intentionally asymmetric.
pub const GREEN_LIGHT_SECS: Range<f32> = 2.0..4.0;
pub const RED_LIGHT_SECS: Range<f32> = 1.5..3.5;
