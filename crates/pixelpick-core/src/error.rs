//! Error types for PixelPick Core

use thiserror::Error;

/// Result type for PixelPick Core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// A color specification could not be parsed
    #[error("Invalid color format: {0:?}")]
    InvalidColorFormat(String),

    /// Neither palette entries nor an eraser color were given
    #[error("Palette must contain at least one color")]
    EmptyPalette,

    /// Cell pitch must be a positive number of pixels
    #[error("Invalid cell size: {0}")]
    InvalidPitch(u32),

    /// A cell index that does not exist in the grid
    #[error("Cell index {index} out of range (grid has {len} cells)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Serializing the cell map for a mirror target failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
