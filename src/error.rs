//! Error types for the plane-stress solver

use thiserror::Error;

/// Main error type for solver operations
#[derive(Error, Debug)]
pub enum CstError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid material: {0}")]
    InvalidMaterial(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Singular stiffness matrix - structure may be under-constrained or have rigid-body modes")]
    SingularMatrix,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for solver operations
pub type CstResult<T> = Result<T, CstError>;
