//! Wall-mounted torches
//!
//! Torches are scattered sparsely over the maze walls at session init and
//! flicker every frame. Each torch feeds one particle system (the flame)
//! and exposes a read-only light intensity for the renderer; nothing in
//! here draws.

use crate::geometry::{cell_to_world, Vec3};
use crate::maze::{Direction, MazeGrid};
use rand::Rng;
use std::f32::consts::TAU;

/// Hard cap on torches per session, independent of maze size.
pub const MAX_TORCHES: usize = 25;

/// Chance for any single wall face to carry a torch. Kept low on purpose:
/// most corridors stay dark.
const PLACEMENT_CHANCE: f64 = 0.08;

/// Height of the torch mount above the floor.
const MOUNT_HEIGHT: f32 = 2.0;

/// Distance the torch sticks out from the wall plane, along its normal.
const WALL_OFFSET: f32 = 0.11;

/// Torches sit at least this far from either end of their wall.
const END_INSET: f32 = 0.25;

/// A single wall torch: a fixed mount point plus a flicker phase that
/// advances at a varying rate, making the light stutter unevenly.
pub struct Torch {
    pub position: Vec3,
    /// Outward wall normal, pointing into the corridor the torch lights.
    pub normal: Vec3,
    flicker_phase: f32,
    base_intensity: f32,
}

impl Torch {
    /// Scatters torches over the walls of a generated maze.
    ///
    /// Every wall face of every cell is a candidate (shared walls are
    /// candidates from both sides, which matches torches being mounted on
    /// one face or the other). Each face rolls `PLACEMENT_CHANCE`, and
    /// placement stops at `MAX_TORCHES`.
    pub fn generate(grid: &MazeGrid, rng: &mut impl Rng) -> Vec<Torch> {
        let mut torches = Vec::new();
        let half_cell = grid.cell_size() * 0.5;

        'cells: for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                let (center_x, center_z) = cell_to_world(grid, x, y);

                for direction in Direction::ALL {
                    if !grid.has_wall(x, y, direction) {
                        continue;
                    }
                    if !rng.gen_bool(PLACEMENT_CHANCE) {
                        continue;
                    }

                    // Random mount point along the wall, inset from the
                    // corners where walls meet.
                    let span = (grid.cell_size() - 2.0 * END_INSET).max(0.0);
                    let along = -half_cell + END_INSET + rng.gen_range(0.0..1.0) * span;

                    let (position, normal) = match direction {
                        Direction::North => (
                            Vec3::new(center_x + along, MOUNT_HEIGHT, center_z - half_cell + WALL_OFFSET),
                            Vec3::new(0.0, 0.0, 1.0),
                        ),
                        Direction::South => (
                            Vec3::new(center_x + along, MOUNT_HEIGHT, center_z + half_cell - WALL_OFFSET),
                            Vec3::new(0.0, 0.0, -1.0),
                        ),
                        Direction::West => (
                            Vec3::new(center_x - half_cell + WALL_OFFSET, MOUNT_HEIGHT, center_z + along),
                            Vec3::new(1.0, 0.0, 0.0),
                        ),
                        Direction::East => (
                            Vec3::new(center_x + half_cell - WALL_OFFSET, MOUNT_HEIGHT, center_z + along),
                            Vec3::new(-1.0, 0.0, 0.0),
                        ),
                    };

                    torches.push(Torch {
                        position,
                        normal,
                        flicker_phase: rng.gen_range(0.0..TAU),
                        base_intensity: rng.gen_range(0.6..0.9),
                    });

                    if torches.len() >= MAX_TORCHES {
                        break 'cells;
                    }
                }
            }
        }

        torches
    }

    /// Advances the flicker phase.
    ///
    /// The phase speed itself oscillates, so the flicker never settles
    /// into a visible loop.
    pub fn update(&mut self, dt: f32) {
        let speed = 6.0 + 4.0 * (self.flicker_phase * 0.5).sin();
        self.flicker_phase += dt * speed;
        if self.flicker_phase > TAU {
            self.flicker_phase -= TAU;
        }
    }

    /// Current light intensity for the renderer.
    ///
    /// Layered sine waves at unrelated frequencies, with an occasional
    /// sharp dip when the phase crosses certain buckets. Can dip slightly
    /// below zero at the waveform troughs; renderers clamp.
    pub fn intensity(&self) -> f32 {
        let t = self.flicker_phase;
        let mut flicker = 0.5 + 0.4 * t.sin() + 0.15 * (t * 3.5).sin() + 0.1 * (t * 7.0).sin();
        if (t * 10.0) as i32 % 23 == 0 {
            flicker *= 0.3;
        }
        self.base_intensity * flicker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generated_maze(width: usize, height: usize) -> MazeGrid {
        let mut grid = MazeGrid::new(width, height, 3.0).unwrap();
        grid.generate(&mut StdRng::seed_from_u64(42));
        grid
    }

    #[test]
    fn test_torch_cap_is_respected() {
        // A 30x30 maze has far more than enough wall faces that the 8%
        // roll hits the cap.
        let grid = generated_maze(30, 30);
        let torches = Torch::generate(&grid, &mut StdRng::seed_from_u64(7));
        assert_eq!(torches.len(), MAX_TORCHES);
    }

    #[test]
    fn test_torches_sit_on_walls_inside_the_maze() {
        let grid = generated_maze(10, 10);
        let torches = Torch::generate(&grid, &mut StdRng::seed_from_u64(3));
        assert!(!torches.is_empty());

        let half_extent_x = 10.0 * 3.0 * 0.5;
        let half_extent_z = 10.0 * 3.0 * 0.5;
        for torch in &torches {
            assert_eq!(torch.position.y, 2.0);
            assert!(torch.position.x.abs() <= half_extent_x + WALL_OFFSET);
            assert!(torch.position.z.abs() <= half_extent_z + WALL_OFFSET);
            // Normal is a unit axis vector in the XZ plane.
            let len = torch.normal.x.abs() + torch.normal.z.abs();
            assert_eq!(len, 1.0);
            assert_eq!(torch.normal.y, 0.0);
        }
    }

    #[test]
    fn test_flicker_phase_stays_bounded() {
        let grid = generated_maze(12, 12);
        let mut torches = Torch::generate(&grid, &mut StdRng::seed_from_u64(12));
        assert!(!torches.is_empty());

        for _ in 0..1000 {
            for torch in torches.iter_mut() {
                torch.update(1.0 / 60.0);
                assert!(torch.flicker_phase >= 0.0);
                assert!(torch.flicker_phase < TAU + 1.0);
            }
        }
    }

    #[test]
    fn test_intensity_stays_within_waveform_bounds() {
        let grid = generated_maze(12, 12);
        let mut torches = Torch::generate(&grid, &mut StdRng::seed_from_u64(12));

        for _ in 0..500 {
            for torch in torches.iter_mut() {
                torch.update(0.016);
                // Waveform peaks at 0.5 + 0.4 + 0.15 + 0.1 = 1.15 times
                // the base intensity (which is below 0.9).
                assert!(torch.intensity() <= 0.9 * 1.15);
                assert!(torch.intensity() >= -0.9 * 0.15 - 0.001);
            }
        }
    }
}
