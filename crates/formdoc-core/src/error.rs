//! Error types for rendering

use formdoc_schema::SchemaError;
use thiserror::Error;

/// Result type for render operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that stop a render before any node is produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The definition failed structural validation
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The requested variant is not declared by the definition
    #[error("Unknown template variant: {0}")]
    UnknownVariant(String),
}
