use std::time::Instant;

mod collision;
mod game;
mod geometry;
mod input_system;
mod maze;
mod particles;
mod player;
mod pursuer;
mod render;
mod save;
mod torch;

use game::{GameState, GameWorld, WorldConfig};
use input_system::{GameAction, InputSystem};
use save::BestTimeStore;

// Debug view resolution; the maze is square so the window is too.
const WINDOW_WIDTH: u32 = 900;
const WINDOW_HEIGHT: u32 = 900;

fn main() -> Result<(), String> {
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(
            "Maze Escape | WASD move, Shift run, Space jump, F mouse, R restart, Esc quit",
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
        )
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .present_vsync()
        .build()
        .map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;
    let mouse_util = sdl_context.mouse();
    mouse_util.set_relative_mouse_mode(true);

    // Best-time persistence
    let save_dir = dirs::home_dir()
        .map(|p| p.join(".maze-escape/saves"))
        .unwrap_or_else(|| std::path::PathBuf::from("./saves"));
    let best_times = BestTimeStore::new(&save_dir)
        .map_err(|e| format!("Failed to create best-time store: {}", e))?;

    match best_times.load() {
        Ok(Some(best)) => println!(
            "Best time to beat: {:.2}s (set {})",
            best.best_seconds, best.recorded_at
        ),
        Ok(None) => println!("No best time recorded yet"),
        Err(e) => eprintln!("Could not read best time: {}", e),
    }

    let mut rng = rand::thread_rng();
    let mut world = GameWorld::new(WorldConfig::new(), &mut rng)?;
    let mut input = InputSystem::new();
    let mut last_frame = Instant::now();

    'running: loop {
        let now = Instant::now();
        // Clamp pathological frame times (window drags, breakpoints) so a
        // single giant step can't teleport anything through a wall.
        let dt = (now - last_frame).as_secs_f32().min(0.1);
        last_frame = now;

        for action in input.poll_events(&mut event_pump) {
            match action {
                GameAction::Quit => break 'running,
                GameAction::Restart => {
                    let config = world.config().clone();
                    world = GameWorld::new(config, &mut rng)?;
                    println!("New maze generated");
                }
                GameAction::ToggleMouseCapture => {
                    input.mouse_captured = !input.mouse_captured;
                    mouse_util.set_relative_mouse_mode(input.mouse_captured);
                }
            }
        }

        let intent = input.gather_intent(&event_pump, world.state);
        let previous_state = world.state;

        if let Some(seconds) = world.update(&intent, dt, &mut rng) {
            // The world emits the completion time exactly once, on the
            // frame the session is won; the store decides if it's a record.
            match best_times.submit(seconds) {
                Ok(true) => println!("✓ New best time: {:.2}s!", seconds),
                Ok(false) => println!("Finished in {:.2}s (best still stands)", seconds),
                Err(e) => eprintln!("Failed to store best time: {}", e),
            }
        }

        if previous_state == GameState::Playing && world.state == GameState::Lost {
            println!(
                "You were caught after {:.2}s. Press R to try a new maze.",
                world.elapsed()
            );
        }

        render::render_world(&mut canvas, &world)?;
        canvas.present();
    }

    Ok(())
}
