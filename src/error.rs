//! Error types for GameShelf
//!
//! Filtering and screen transitions are total; errors only come from
//! loading a catalog file and from driving the terminal.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for GameShelf operations
#[derive(Error, Debug)]
pub enum GameShelfError {
    #[error("Failed to read catalog '{}': {}", .0.display(), .1)]
    CatalogRead(PathBuf, std::io::Error),

    #[error("Failed to parse catalog '{}': {}", .0.display(), .1)]
    CatalogParse(PathBuf, serde_json::Error),

    #[error("Catalog '{}' contains no games", .0.display())]
    EmptyCatalog(PathBuf),

    #[error("Duplicate game id {0} in catalog")]
    DuplicateId(u32),

    #[error("Failed to serialize games: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for GameShelf operations
pub type Result<T> = std::result::Result<T, GameShelfError>;

impl GameShelfError {
    /// Check if this error came from the catalog source (as opposed to the terminal)
    pub fn is_catalog_error(&self) -> bool {
        matches!(
            self,
            GameShelfError::CatalogRead(_, _)
                | GameShelfError::CatalogParse(_, _)
                | GameShelfError::EmptyCatalog(_)
                | GameShelfError::DuplicateId(_)
        )
    }
}
