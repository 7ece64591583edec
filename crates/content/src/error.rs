//! Error types for everymode-content

use thiserror::Error;

/// Result type alias for content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the page boundary or while loading a registry
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The page has no element with this id
    #[error("mounting point not found: {id}")]
    MountNotFound { id: String },

    /// The hosting environment rejected a mutation
    #[error("host error: {0}")]
    Host(String),

    /// Registry or config JSON could not be parsed
    #[error("invalid registry: {0}")]
    Registry(#[from] serde_json::Error),
}

impl Error {
    pub fn mount_not_found(id: impl Into<String>) -> Self {
        Self::MountNotFound { id: id.into() }
    }

    pub const fn is_missing_mount(&self) -> bool {
        matches!(self, Self::MountNotFound { .. })
    }
}
