// GameWorld struct and per-frame orchestration
//
// This module owns every piece of session state (maze, derived collision
// geometry, player, pursuers, torches, particle pools, the clock and the
// win/lose state) and runs the fixed per-frame update order. Restarting
// means dropping the whole struct and building a new one; no partial
// restart state is ever observable.

use crate::collision;
use crate::geometry::{self, WallSegment, Vec3};
use crate::maze::MazeGrid;
use crate::particles::ParticleSystem;
use crate::player::Player;
use crate::pursuer::{self, Pursuer, PursuerConfig};
use crate::torch::Torch;
use rand::Rng;

use super::types::{FrameIntent, GameState, WorldConfig};

/// Everything a running session owns.
///
/// The maze and the wall segment list are immutable once built; player,
/// pursuers, torches and particles mutate every frame.
pub struct GameWorld {
    pub maze: MazeGrid,
    pub wall_segments: Vec<WallSegment>,
    pub player: Player,
    pub pursuers: Vec<Pursuer>,
    pub torches: Vec<Torch>,
    /// One flame pool per torch, same index.
    pub particle_systems: Vec<ParticleSystem>,
    pub state: GameState,
    config: WorldConfig,
    elapsed: f32,
}

impl GameWorld {
    /// Builds a fresh session: generates the maze, derives the collision
    /// geometry, places the player at the start cell, spawns pursuers and
    /// scatters torches.
    ///
    /// # Returns
    ///
    /// Err only for invalid configuration (zero-sized maze or
    /// non-positive cell size); no partially-built world is returned.
    pub fn new(config: WorldConfig, rng: &mut impl Rng) -> Result<Self, String> {
        let mut maze = MazeGrid::new(config.maze_width, config.maze_height, config.cell_size)?;
        maze.generate(rng);

        let wall_segments = geometry::build_wall_segments(&maze);

        let (start_x, start_y) = maze.start();
        let (world_x, world_z) = geometry::cell_to_world(&maze, start_x as i32, start_y as i32);
        let player = Player::new(world_x, world_z);

        let pursuer_config = PursuerConfig {
            speed: config.pursuer_speed,
            radius: config.pursuer_radius,
            height: config.pursuer_height,
            randomness: config.pursuer_randomness,
            min_spawn_distance: config.pursuer_min_spawn_distance,
        };
        let pursuers = pursuer::spawn_pursuers(&maze, config.pursuer_count, &pursuer_config, rng);

        let torches = Torch::generate(&maze, rng);
        let particle_systems = torches
            .iter()
            .map(|_| ParticleSystem::new(config.particles_per_torch, config.particle_emit_rate))
            .collect();

        Ok(GameWorld {
            maze,
            wall_segments,
            player,
            pursuers,
            torches,
            particle_systems,
            state: GameState::Playing,
            config,
            elapsed: 0.0,
        })
    }

    /// The config this world was built with, for restarts.
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Seconds spent in the `Playing` state.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Steps the whole world by one frame.
    ///
    /// Update order is fixed: torch flicker, then particle pools, then
    /// (only while `Playing`) player movement, pursuer steering with the
    /// capture check, and finally the exit check. Torches and flames keep
    /// animating after the session ends; everything that moves on the
    /// floor freezes.
    ///
    /// # Returns
    ///
    /// The completion time in seconds on the single frame where the state
    /// transitions to `Won` (the record candidate for the persistence
    /// collaborator); None on every other frame.
    pub fn update(&mut self, intent: &FrameIntent, dt: f32, rng: &mut impl Rng) -> Option<f32> {
        for torch in self.torches.iter_mut() {
            torch.update(dt);
        }
        for (torch, system) in self.torches.iter().zip(self.particle_systems.iter_mut()) {
            // The flame hovers just above the torch mount.
            let emitter = Vec3::new(
                torch.position.x,
                torch.position.y + 0.25,
                torch.position.z,
            );
            system.update(emitter, dt, rng);
        }

        if self.state != GameState::Playing {
            return None;
        }

        self.elapsed += dt;
        self.player
            .update(intent, &self.wall_segments, self.config.wall_height, dt);

        let (player_x, player_z) = (self.player.position.x, self.player.position.z);
        for pursuer in self.pursuers.iter_mut() {
            pursuer.update(player_x, player_z, &self.wall_segments, dt, rng);

            if collision::colliders_intersect(&self.player, pursuer) {
                self.state = GameState::Lost;
                // One catch is enough; skip the rest this frame.
                break;
            }
        }

        if self.state == GameState::Playing {
            let (cell_x, cell_y) =
                geometry::world_to_cell(&self.maze, self.player.position.x, self.player.position.z);
            if self.maze.is_exit(cell_x, cell_y) {
                self.state = GameState::Won;
                return Some(self.elapsed);
            }
        }

        None
    }
}
