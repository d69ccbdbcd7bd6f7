use std::time::Instant;

use rand::Rng;
use sdl2::event::Event;

mod constants;
mod game;
mod input;
mod renderer;
mod round;
mod statistics;
mod vehicle;

use constants::{FRAME_DURATION, WINDOW_HEIGHT, WINDOW_WIDTH};
use game::Game;
use input::{InputAction, InputHandler};
use renderer::Renderer;

fn main() -> Result<(), String> {
    env_logger::init();

    let seed: u64 = rand::thread_rng().gen();
    log::info!("Red Light Green Light starting (seed {})", seed);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let ttf_context = sdl2::ttf::init().map_err(|e| e.to_string())?;

    let window = video_subsystem
        .window(
            "Red Light Green Light - Road Edition",
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
        )
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .build()
        .map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();

    let renderer = Renderer::new(&texture_creator, &ttf_context)?;
    let mut game = Game::new(seed);
    let mut input = InputHandler::new();
    let mut event_pump = sdl_context.event_pump()?;
    let mut running = true;
    let mut last_frame = Instant::now();

    print_controls();

    while running {
        let now = Instant::now();
        let delta_time = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => running = false,
                _ => match input.process_event(&event) {
                    InputAction::Exit => running = false,
                    action => game.handle_action(action),
                },
            }
        }

        game.update(delta_time, &input);
        renderer.render(&mut canvas, &game)?;

        let frame_time = now.elapsed();
        if frame_time < FRAME_DURATION {
            std::thread::sleep(FRAME_DURATION - frame_time);
        }
    }

    game.statistics.display();
    Ok(())
}

fn print_controls() {
    println!("╔══════════════════════════════════════╗");
    println!("║            GAME CONTROLS             ║");
    println!("╠══════════════════════════════════════╣");
    println!("║ Arrow keys    │ Drive the blue car   ║");
    println!("║ R             │ Restart after a      ║");
    println!("║               │ crash or a win       ║");
    println!("║ P             │ Toggle pause         ║");
    println!("║ Esc           │ Exit                 ║");
    println!("╚══════════════════════════════════════╝");
    println!("Move only while the light is GREEN!");
}
