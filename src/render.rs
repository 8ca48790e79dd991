//! Top-down debug renderer
//!
//! Draws the session state as a 2D overhead view: wall segments, the exit
//! cell, torches (brightness follows their flicker), flame particles,
//! pursuers and the player. Everything here reads the core through its
//! public accessors; no game logic lives in this module.

use crate::game::{GameState, GameWorld};
use crate::geometry::cell_to_world;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Maps world XZ coordinates into window pixels, maze centered.
struct Viewport {
    half_width: f32,
    half_height: f32,
    scale: f32,
}

impl Viewport {
    fn new(canvas: &Canvas<Window>, world: &GameWorld) -> Result<Self, String> {
        let (window_width, window_height) = canvas.output_size()?;
        let extent_x = world.maze.width() as f32 * world.maze.cell_size();
        let extent_z = world.maze.height() as f32 * world.maze.cell_size();

        // Fit the maze with a small margin, preserving aspect.
        let scale =
            (window_width as f32 / extent_x).min(window_height as f32 / extent_z) * 0.92;

        Ok(Viewport {
            half_width: window_width as f32 * 0.5,
            half_height: window_height as f32 * 0.5,
            scale,
        })
    }

    fn to_screen(&self, world_x: f32, world_z: f32) -> (i32, i32) {
        (
            (self.half_width + world_x * self.scale) as i32,
            (self.half_height + world_z * self.scale) as i32,
        )
    }

    /// A world-space rectangle as a pixel Rect, at least one pixel thick.
    fn world_rect(&self, x: f32, z: f32, width: f32, depth: f32) -> Rect {
        let (sx, sz) = self.to_screen(x, z);
        Rect::new(
            sx,
            sz,
            ((width * self.scale) as u32).max(1),
            ((depth * self.scale) as u32).max(1),
        )
    }

    /// A square centered on a world point, for entities and particles.
    fn centered_square(&self, world_x: f32, world_z: f32, world_size: f32) -> Rect {
        let (sx, sz) = self.to_screen(world_x, world_z);
        let size = ((world_size * self.scale) as u32).max(2);
        Rect::new(sx - size as i32 / 2, sz - size as i32 / 2, size, size)
    }
}

/// Renders one frame of the world.
pub fn render_world(canvas: &mut Canvas<Window>, world: &GameWorld) -> Result<(), String> {
    canvas.set_draw_color(Color::RGB(8, 8, 12));
    canvas.clear();

    let viewport = Viewport::new(canvas, world)?;

    // Exit cell, highlighted under everything else.
    let (exit_x, exit_y) = world.maze.exit();
    let (exit_world_x, exit_world_z) = cell_to_world(&world.maze, exit_x as i32, exit_y as i32);
    canvas.set_draw_color(Color::RGB(0, 110, 0));
    canvas.fill_rect(viewport.centered_square(
        exit_world_x,
        exit_world_z,
        world.maze.cell_size() * 0.8,
    ))?;

    // Walls, tinted by orientation so the topology is easier to read.
    for segment in &world.wall_segments {
        if segment.vertical {
            canvas.set_draw_color(Color::RGB(104, 104, 118));
        } else {
            canvas.set_draw_color(Color::RGB(118, 118, 110));
        }
        canvas.fill_rect(viewport.world_rect(
            segment.x,
            segment.z,
            segment.width,
            segment.depth,
        ))?;
    }

    // Torches: the bracket sits back against the wall, the glowing head
    // hangs out along the wall normal with flicker-driven brightness.
    for torch in &world.torches {
        canvas.set_draw_color(Color::RGB(60, 40, 20));
        canvas.fill_rect(viewport.centered_square(
            torch.position.x - torch.normal.x * 0.15,
            torch.position.z - torch.normal.z * 0.15,
            0.25,
        ))?;

        let intensity = torch.intensity().clamp(0.0, 1.0);
        canvas.set_draw_color(Color::RGB(
            (220.0 * intensity) as u8,
            (150.0 * intensity) as u8,
            (80.0 * intensity) as u8,
        ));
        canvas.fill_rect(viewport.centered_square(torch.position.x, torch.position.z, 0.4))?;
    }

    // Flame particles fade out with remaining life.
    canvas.set_blend_mode(BlendMode::Blend);
    for system in &world.particle_systems {
        if system.active_count() == 0 {
            continue;
        }
        for particle in system.particles() {
            let alpha = (particle.life / particle.max_life).clamp(0.0, 1.0);
            let mut color = particle.color;
            color.a = (alpha * 255.0) as u8;
            canvas.set_draw_color(color);
            canvas.fill_rect(viewport.centered_square(
                particle.position.x,
                particle.position.z,
                particle.size * 4.0,
            ))?;
        }
    }
    canvas.set_blend_mode(BlendMode::None);

    // Pursuers: dark red, barely visible against the floor on purpose.
    canvas.set_draw_color(Color::RGB(120, 10, 10));
    for pursuer in &world.pursuers {
        canvas.fill_rect(viewport.centered_square(
            pursuer.position.x,
            pursuer.position.z,
            pursuer.radius * 2.0,
        ))?;
    }

    // Player.
    canvas.set_draw_color(Color::RGB(235, 235, 235));
    canvas.fill_rect(viewport.centered_square(
        world.player.position.x,
        world.player.position.z,
        world.player.radius * 2.0,
    ))?;

    // End-state tint over the whole view.
    match world.state {
        GameState::Won => overlay(canvas, Color::RGBA(0, 130, 0, 110))?,
        GameState::Lost => overlay(canvas, Color::RGBA(130, 0, 0, 130))?,
        GameState::Playing => {}
    }

    Ok(())
}

fn overlay(canvas: &mut Canvas<Window>, color: Color) -> Result<(), String> {
    canvas.set_blend_mode(BlendMode::Blend);
    canvas.set_draw_color(color);
    canvas.fill_rect(None)?;
    canvas.set_blend_mode(BlendMode::None);
    Ok(())
}
