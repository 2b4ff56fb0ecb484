//! Error types for compiling a flat mapping

use thiserror::Error;

/// Result type alias for compile operations
pub type CompileResult<T> = Result<T, CompileError>;

/// Error type for compile operations
#[derive(Error, Debug)]
pub enum CompileError {
    /// An endpoint would replace a namespace that already has children
    #[error("endpoint \"{path}\" collides with an existing namespace")]
    LeafOverBranch { path: String },

    /// An endpoint would nest under a segment that is already an endpoint
    #[error("endpoint \"{path}\" nests under existing endpoint \"{endpoint}\"")]
    BranchThroughLeaf { path: String, endpoint: String },

    /// Two endpoints reduce to the same short path
    #[error("short path \"{path}\" defined by both \"{first}\" and \"{second}\"")]
    DuplicateEndpoint {
        path: String,
        first: String,
        second: String,
    },

    /// Two endpoints synthesize the same identifier
    #[error("identifier \"{identifier}\" synthesized for both \"{first}\" and \"{second}\"")]
    IdentifierCollision {
        identifier: String,
        first: String,
        second: String,
    },

    /// Interchange document could not be read or written
    #[error("interchange error: {0}")]
    Interchange(#[from] serde_json::Error),
}

impl CompileError {
    /// Whether the error comes from the shape of the namespace tree
    pub fn is_shape_conflict(&self) -> bool {
        matches!(
            self,
            CompileError::LeafOverBranch { .. }
                | CompileError::BranchThroughLeaf { .. }
                | CompileError::DuplicateEndpoint { .. }
        )
    }
}
