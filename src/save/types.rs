//! Best-time data types
//!
//! This module defines the on-disk structure for the fastest maze
//! completion and the error type for load/store operations. Serde handles
//! serialization to JSON format.

use serde::{Deserialize, Serialize};

/// Current best-time file version.
pub const CURRENT_BEST_TIME_VERSION: u32 = 1;

/// The root best-time file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestTimeFile {
    pub version: u32,
    /// Fastest completion in seconds.
    pub best_seconds: f32,
    /// Human-readable local timestamp of when the record was set.
    pub recorded_at: String,
}

/// Error types for best-time load/store operations.
#[derive(Debug)]
pub enum BestTimeError {
    IoError(std::io::Error),
    SerializationError(serde_json::Error),
    InvalidVersion(u32),
}

impl std::fmt::Display for BestTimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BestTimeError::IoError(e) => write!(f, "IO error: {}", e),
            BestTimeError::SerializationError(e) => write!(f, "Serialization error: {}", e),
            BestTimeError::InvalidVersion(v) => write!(f, "Invalid best-time file version: {}", v),
        }
    }
}

impl std::error::Error for BestTimeError {}

impl From<std::io::Error> for BestTimeError {
    fn from(err: std::io::Error) -> Self {
        BestTimeError::IoError(err)
    }
}

impl From<serde_json::Error> for BestTimeError {
    fn from(err: serde_json::Error) -> Self {
        BestTimeError::SerializationError(err)
    }
}
