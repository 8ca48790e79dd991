// Game module - session state and per-frame orchestration
//
// This module contains:
// - world.rs: GameWorld struct owning all session state and the frame
//   update order
// - types.rs: Shared enums and config structs (GameState, FrameIntent,
//   WorldConfig)

// Module declarations
pub mod types;
pub mod world;

// Re-export types for convenience
pub use types::*;
pub use world::GameWorld;
