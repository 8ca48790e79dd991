// Shared enums and helper structs used throughout the game

/// Session state. Pursuers and the player only move while `Playing`;
/// both end states freeze the world until a restart replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// One frame of translated player input.
///
/// Produced by the input collaborator each frame; the core never reads
/// input devices itself. Axes are already signed and combined (e.g. W and
/// S cancelling out), look deltas are in radians.
#[derive(Debug, Clone, Default)]
pub struct FrameIntent {
    /// Forward/backward axis, -1..=1.
    pub move_forward: f32,
    /// Strafe axis, -1..=1.
    pub strafe: f32,
    /// Horizontal look delta in radians.
    pub yaw_delta: f32,
    /// Vertical look delta in radians.
    pub pitch_delta: f32,
    pub jump: bool,
    pub sprint: bool,
}

/// Tuning for a whole session. One of these is kept around so a restart
/// can rebuild the world with identical settings.
#[derive(Debug, Clone)]
pub struct WorldConfig {
    pub maze_width: usize,
    pub maze_height: usize,
    pub cell_size: f32,
    pub wall_height: f32,
    pub pursuer_count: usize,
    pub pursuer_speed: f32,
    pub pursuer_radius: f32,
    pub pursuer_height: f32,
    /// Heading wobble factor for pursuers, 0..=1.
    pub pursuer_randomness: f32,
    /// Minimum world distance between a pursuer spawn and the player start.
    pub pursuer_min_spawn_distance: f32,
    /// Flame particle pool size per torch.
    pub particles_per_torch: usize,
    /// Flame particles emitted per second per torch.
    pub particle_emit_rate: f32,
}

impl WorldConfig {
    pub fn new() -> Self {
        WorldConfig {
            maze_width: 15,
            maze_height: 15,
            cell_size: 3.0,
            wall_height: 4.0,
            pursuer_count: 3,
            // Slightly slower than the player's walk so escape is always
            // possible, but only just.
            pursuer_speed: 3.5,
            pursuer_radius: 0.35,
            pursuer_height: 2.2,
            pursuer_randomness: 0.35,
            pursuer_min_spawn_distance: 12.0,
            particles_per_torch: 20,
            particle_emit_rate: 15.0,
        }
    }
}
