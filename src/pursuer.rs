//! Pursuers: the things that hunt the player
//!
//! A pursuer has no pathfinding and no state machine of its own. Every
//! frame it steers roughly toward the player with a randomized wobble and
//! lets the shared wall-sliding movement rule sort out the maze. That is
//! deliberate: an erratic hunter that can be shaken off around corners
//! plays better than a perfect-information chaser, and it costs one
//! vector normalize per frame instead of a graph search.
//!
//! Whether pursuers update at all is gated by the session state in
//! `game::world`; this module only knows how to place, steer and test
//! capture.

use crate::collision::{self, CircleCollider};
use crate::geometry::{cell_to_world, Vec3, WallSegment};
use crate::maze::MazeGrid;
use rand::Rng;
use std::f32::consts::TAU;

/// Placement attempts under the full constraint set before relaxing.
const SPAWN_ATTEMPTS: usize = 200;

/// Further attempts under the distance-only constraint before giving up
/// and taking any cell.
const RELAXED_ATTEMPTS: usize = 50;

/// An AI hunter. `position.y` stays at ground level; collision happens
/// entirely in the XZ plane, `height` only matters to the renderer.
pub struct Pursuer {
    pub position: Vec3,
    pub speed: f32,
    pub radius: f32,
    /// Visual height of the character. The top-down debug view has no use
    /// for it; a first-person renderer scales the model by it.
    #[allow(dead_code)]
    pub height: f32,
    /// 0.0 = dead-straight seek, 1.0 = fully random wander. Controls both
    /// the size of the per-frame heading perturbation and how strongly it
    /// is blended over the direct pursuit direction.
    pub randomness: f32,
}

/// Per-instance tuning shared by every pursuer of a session.
#[derive(Debug, Clone, Copy)]
pub struct PursuerConfig {
    pub speed: f32,
    pub radius: f32,
    pub height: f32,
    pub randomness: f32,
    /// Spawn cells closer than this (world units) to the player start are
    /// rejected while constraints hold.
    pub min_spawn_distance: f32,
}

impl Pursuer {
    /// Steers toward the player and moves through the shared collision rule.
    ///
    /// The seek direction is perturbed by a rotation drawn uniformly from
    /// `[0, 2*pi*randomness]`, the perturbed and direct headings are
    /// blended with weight `randomness`, and the blend is renormalized
    /// before scaling by speed and frame time.
    pub fn update(
        &mut self,
        player_x: f32,
        player_z: f32,
        segments: &[WallSegment],
        dt: f32,
        rng: &mut impl Rng,
    ) {
        let to_player_x = player_x - self.position.x;
        let to_player_z = player_z - self.position.z;
        let distance = (to_player_x * to_player_x + to_player_z * to_player_z).sqrt();
        if distance < 0.001 {
            return;
        }

        let direct_x = to_player_x / distance;
        let direct_z = to_player_z / distance;

        let (mut heading_x, mut heading_z) = (direct_x, direct_z);
        if self.randomness > 0.0 {
            let angle = rng.gen_range(0.0..TAU * self.randomness);
            let (sin_a, cos_a) = angle.sin_cos();
            let perturbed_x = direct_x * cos_a - direct_z * sin_a;
            let perturbed_z = direct_x * sin_a + direct_z * cos_a;

            heading_x = direct_x * (1.0 - self.randomness) + perturbed_x * self.randomness;
            heading_z = direct_z * (1.0 - self.randomness) + perturbed_z * self.randomness;
            let length = (heading_x * heading_x + heading_z * heading_z).sqrt();
            if length > 0.0001 {
                heading_x /= length;
                heading_z /= length;
            } else {
                // Perturbation cancelled the blend out; fall back to the
                // direct heading rather than standing still.
                heading_x = direct_x;
                heading_z = direct_z;
            }
        }

        let step_x = heading_x * self.speed * dt;
        let step_z = heading_z * self.speed * dt;
        let (x, z) = collision::resolve_movement(
            self.position.x,
            self.position.z,
            step_x,
            step_z,
            self.radius,
            segments,
        );
        self.position.x = x;
        self.position.z = z;
    }
}

impl CircleCollider for Pursuer {
    fn center(&self) -> (f32, f32) {
        (self.position.x, self.position.z)
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

/// Places `count` pursuers on the maze.
///
/// For each pursuer, up to `SPAWN_ATTEMPTS` random cells are drawn and
/// rejected if they are the start cell, the exit cell, a cell already
/// claimed by an earlier pursuer, or within `min_spawn_distance` of the
/// player start in world space. If that budget runs dry, another
/// `RELAXED_ATTEMPTS` draws keep only the distance constraint, and as a
/// last resort an unconstrained cell is accepted. The fallback trades the
/// distance guarantee for guaranteed termination; on any maze big enough
/// to be playable it never triggers.
pub fn spawn_pursuers(
    grid: &MazeGrid,
    count: usize,
    config: &PursuerConfig,
    rng: &mut impl Rng,
) -> Vec<Pursuer> {
    let start = grid.start();
    let exit = grid.exit();
    let (start_world_x, start_world_z) = cell_to_world(grid, start.0 as i32, start.1 as i32);

    let mut claimed: Vec<(usize, usize)> = Vec::with_capacity(count);
    let mut pursuers = Vec::with_capacity(count);

    for _ in 0..count {
        let mut chosen: Option<(usize, usize)> = None;

        for _ in 0..SPAWN_ATTEMPTS {
            let cell = (rng.gen_range(0..grid.width()), rng.gen_range(0..grid.height()));
            if cell == start || cell == exit || claimed.contains(&cell) {
                continue;
            }
            if !far_enough(grid, cell, start_world_x, start_world_z, config.min_spawn_distance) {
                continue;
            }
            chosen = Some(cell);
            break;
        }

        if chosen.is_none() {
            for _ in 0..RELAXED_ATTEMPTS {
                let cell = (rng.gen_range(0..grid.width()), rng.gen_range(0..grid.height()));
                if far_enough(grid, cell, start_world_x, start_world_z, config.min_spawn_distance) {
                    chosen = Some(cell);
                    break;
                }
            }
        }

        let cell = chosen
            .unwrap_or_else(|| (rng.gen_range(0..grid.width()), rng.gen_range(0..grid.height())));

        claimed.push(cell);
        let (world_x, world_z) = cell_to_world(grid, cell.0 as i32, cell.1 as i32);
        pursuers.push(Pursuer {
            position: Vec3::new(world_x, 0.0, world_z),
            speed: config.speed,
            radius: config.radius,
            height: config.height,
            randomness: config.randomness,
        });
    }

    pursuers
}

fn far_enough(
    grid: &MazeGrid,
    cell: (usize, usize),
    from_x: f32,
    from_z: f32,
    min_distance: f32,
) -> bool {
    let (x, z) = cell_to_world(grid, cell.0 as i32, cell.1 as i32);
    let dx = x - from_x;
    let dz = z - from_z;
    dx * dx + dz * dz >= min_distance * min_distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_config() -> PursuerConfig {
        PursuerConfig {
            speed: 3.5,
            radius: 0.35,
            height: 2.2,
            randomness: 0.35,
            min_spawn_distance: 9.0,
        }
    }

    fn generated_maze() -> MazeGrid {
        let mut grid = MazeGrid::new(12, 12, 3.0).unwrap();
        grid.generate(&mut StdRng::seed_from_u64(8));
        grid
    }

    #[test]
    fn test_spawn_respects_placement_constraints() {
        let grid = generated_maze();
        let config = test_config();
        let mut rng = StdRng::seed_from_u64(17);
        let pursuers = spawn_pursuers(&grid, 3, &config, &mut rng);

        assert_eq!(pursuers.len(), 3);
        let (start_x, start_z) = cell_to_world(&grid, 0, 0);

        let mut cells = Vec::new();
        for pursuer in &pursuers {
            let cell = crate::geometry::world_to_cell(&grid, pursuer.position.x, pursuer.position.z);
            assert_ne!(cell, (0, 0), "pursuer on start cell");
            assert_ne!(cell, (11, 11), "pursuer on exit cell");
            assert!(!cells.contains(&cell), "two pursuers share a cell");
            cells.push(cell);

            let dx = pursuer.position.x - start_x;
            let dz = pursuer.position.z - start_z;
            assert!(
                (dx * dx + dz * dz).sqrt() >= config.min_spawn_distance,
                "pursuer spawned too close to the player start"
            );
        }
    }

    #[test]
    fn test_spawn_fallback_still_terminates() {
        // A 1x2 maze cannot satisfy the constraints (both cells are start
        // or exit); placement must still produce a pursuer somewhere.
        let mut grid = MazeGrid::new(1, 2, 3.0).unwrap();
        grid.generate(&mut StdRng::seed_from_u64(1));

        let config = test_config();
        let pursuers = spawn_pursuers(&grid, 2, &config, &mut StdRng::seed_from_u64(5));
        assert_eq!(pursuers.len(), 2);
    }

    #[test]
    fn test_straight_seek_closes_distance() {
        let mut pursuer = Pursuer {
            position: Vec3::new(0.0, 0.0, 0.0),
            speed: 2.0,
            radius: 0.35,
            height: 2.2,
            randomness: 0.0,
        };
        let mut rng = StdRng::seed_from_u64(0);

        // No walls, no randomness: one second of updates at speed 2 moves
        // two units straight toward the player.
        for _ in 0..60 {
            pursuer.update(10.0, 0.0, &[], 1.0 / 60.0, &mut rng);
        }
        assert!((pursuer.position.x - 2.0).abs() < 0.01);
        assert!(pursuer.position.z.abs() < 0.001);
    }

    #[test]
    fn test_wobbly_seek_still_closes_distance() {
        let mut pursuer = Pursuer {
            position: Vec3::new(0.0, 0.0, 0.0),
            speed: 3.5,
            radius: 0.35,
            height: 2.2,
            randomness: 0.35,
        };
        let mut rng = StdRng::seed_from_u64(77);

        // Ten seconds of wobbly pursuit in an open field must still close
        // most of the ten-unit gap, even though individual frames wander.
        for _ in 0..600 {
            pursuer.update(10.0, 0.0, &[], 1.0 / 60.0, &mut rng);
        }
        let dx = 10.0 - pursuer.position.x;
        let dz = -pursuer.position.z;
        let distance = (dx * dx + dz * dz).sqrt();
        assert!(
            distance < 5.0,
            "pursuer failed to make net progress toward the player (still {distance} away)"
        );
    }

    #[test]
    fn test_update_is_stable_on_top_of_player() {
        let mut pursuer = Pursuer {
            position: Vec3::new(1.0, 0.0, 1.0),
            speed: 3.5,
            radius: 0.35,
            height: 2.2,
            randomness: 0.5,
        };
        let mut rng = StdRng::seed_from_u64(4);

        // Standing exactly on the player must not divide by zero.
        pursuer.update(1.0, 1.0, &[], 1.0 / 60.0, &mut rng);
        assert_eq!((pursuer.position.x, pursuer.position.z), (1.0, 1.0));
    }
}
