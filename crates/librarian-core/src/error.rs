//! Error types.

use thiserror::Error;

/// Errors raised while assembling a node tree.
#[derive(Debug, Error)]
pub enum NodeError {
    /// A select statement was built without any select core.
    #[error("select statement requires at least one select core")]
    EmptyStatement,
}

/// Errors raised while loading a renderer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be deserialized.
    #[error("invalid render configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for node construction.
pub type Result<T> = std::result::Result<T, NodeError>;
