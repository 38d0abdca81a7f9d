//! Error types for the shim generator

use thiserror::Error;

/// Result type alias for generator operations
pub type ShimResult<T> = Result<T, ShimError>;

/// Error type for generator operations
///
/// Walking a schema tree and emitting text cannot fail; these errors all come
/// from the request surrounding it.
#[derive(Error, Debug)]
pub enum ShimError {
    /// The plugin parameter string could not be understood
    #[error("invalid plugin parameter: {0}")]
    InvalidParameter(String),

    /// A file listed in `file_to_generate` has no descriptor in the request
    #[error("no descriptor for file to generate: {0}")]
    UnknownFile(String),

    /// A generated filename falls outside the configured `module` prefix
    #[error("{file}: generated file does not match prefix {module:?}")]
    ModulePrefix { file: String, module: String },

    /// The request bytes were not a valid `CodeGeneratorRequest`
    #[error("decode error: {0}")]
    Decode(#[from] prost::DecodeError),
}

impl From<serde_json::Error> for ShimError {
    fn from(err: serde_json::Error) -> Self {
        ShimError::InvalidParameter(err.to_string())
    }
}
