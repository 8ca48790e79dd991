//! World-coordinate mapping and derived collision geometry
//!
//! Pure, stateless helpers that turn maze topology into world-space data:
//! cell <-> world coordinate conversion and the wall rectangles the
//! collision system queries every frame. Nothing in here mutates the grid.
//!
//! The maze lives in the XZ plane and is centered on the world origin, so
//! cell (0,0) sits in the negative-X/negative-Z corner.

use crate::maze::{Direction, MazeGrid};

/// Collision rectangles extend this far past the wall centerline on each
/// side. Segments from adjacent walls overlap slightly at corners, which
/// closes the gaps a circle could otherwise squeeze through diagonally.
pub const WALL_THICKNESS: f32 = 0.1;

/// A world-space 3D point or direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }
}

/// An axis-aligned collision rectangle in the XZ plane, derived from one
/// wall of the maze.
///
/// `vertical` walls run along Z (west/east cell sides) and block motion in
/// X; horizontal walls run along X (north/south sides) and block motion in
/// Z. The segment list is rebuilt whenever a new maze is generated and is
/// read-only for the rest of the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    /// Minimum-X corner of the rectangle.
    pub x: f32,
    /// Minimum-Z corner of the rectangle.
    pub z: f32,
    /// Extent along X.
    pub width: f32,
    /// Extent along Z.
    pub depth: f32,
    /// True for west/east walls (long axis is Z).
    pub vertical: bool,
}

/// Converts cell coordinates to the world-space center of that cell.
///
/// The mapping offsets by half the maze extent so the whole maze is
/// centered at the world origin: `(c - extent/2 + 0.5) * cell_size`.
pub fn cell_to_world(grid: &MazeGrid, cell_x: i32, cell_y: i32) -> (f32, f32) {
    let x = (cell_x as f32 - grid.width() as f32 * 0.5 + 0.5) * grid.cell_size();
    let z = (cell_y as f32 - grid.height() as f32 * 0.5 + 0.5) * grid.cell_size();
    (x, z)
}

/// Converts a world-space XZ position to the cell containing it.
///
/// Exact algebraic inverse of `cell_to_world` for cell centers. The result
/// is truncated, not rounded, and is not bounds-checked; callers that need
/// the boundary-as-solid behavior go through `MazeGrid::has_wall`.
pub fn world_to_cell(grid: &MazeGrid, world_x: f32, world_z: f32) -> (i32, i32) {
    let cell_x = (world_x / grid.cell_size() + grid.width() as f32 * 0.5) as i32;
    let cell_y = (world_z / grid.cell_size() + grid.height() as f32 * 0.5) as i32;
    (cell_x, cell_y)
}

/// Builds the collision rectangle list for a generated maze.
///
/// Interior walls are shared by two cells, so each cell only emits its
/// North and West walls; that covers every shared wall exactly once. The
/// boundary walls on the east and south edges of the maze have no neighbor
/// cell to claim them, so the last column emits East walls and the last
/// row emits South walls as well.
pub fn build_wall_segments(grid: &MazeGrid) -> Vec<WallSegment> {
    let mut segments = Vec::new();
    let half_cell = grid.cell_size() * 0.5;
    let half_thick = WALL_THICKNESS * 0.5;

    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let (center_x, center_z) = cell_to_world(grid, x, y);

            if grid.has_wall(x, y, Direction::North) {
                segments.push(WallSegment {
                    x: center_x - half_cell - half_thick,
                    z: center_z - half_cell - half_thick,
                    width: grid.cell_size() + WALL_THICKNESS,
                    depth: WALL_THICKNESS,
                    vertical: false,
                });
            }

            if grid.has_wall(x, y, Direction::West) {
                segments.push(WallSegment {
                    x: center_x - half_cell - half_thick,
                    z: center_z - half_cell - half_thick,
                    width: WALL_THICKNESS,
                    depth: grid.cell_size() + WALL_THICKNESS,
                    vertical: true,
                });
            }

            // East/south boundary walls, claimed only by the outermost cells.
            if x == grid.width() as i32 - 1 && grid.has_wall(x, y, Direction::East) {
                segments.push(WallSegment {
                    x: center_x + half_cell - half_thick,
                    z: center_z - half_cell - half_thick,
                    width: WALL_THICKNESS,
                    depth: grid.cell_size() + WALL_THICKNESS,
                    vertical: true,
                });
            }

            if y == grid.height() as i32 - 1 && grid.has_wall(x, y, Direction::South) {
                segments.push(WallSegment {
                    x: center_x - half_cell - half_thick,
                    z: center_z + half_cell - half_thick,
                    width: grid.cell_size() + WALL_THICKNESS,
                    depth: WALL_THICKNESS,
                    vertical: false,
                });
            }
        }
    }

    segments
}
