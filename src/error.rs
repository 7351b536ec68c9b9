use thiserror::Error;

/// Main error type that aggregates domain-specific errors
#[derive(Error, Debug)]
pub enum Error {
    /// Model construction/validation errors
    #[error(transparent)]
    Validation(#[from] crate::model::error::ValidationError),

    /// Schema export errors
    #[error(transparent)]
    Schema(#[from] crate::schema::error::SchemaError),

    /// Serialization errors not covered by a specific layer
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic I/O errors not covered by a specific layer
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for lsp-structures operations
pub type Result<T> = std::result::Result<T, Error>;
