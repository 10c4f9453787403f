//! Error types for rocdeploy
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use thiserror::Error;

use crate::domain::value_objects::StepKind;

/// Result type alias for deploy operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Main error type for deploy operations
#[derive(Error, Debug)]
pub enum DeployError {
    /// Two inventory entries share a name
    #[error("duplicate inventory entry '{name}'")]
    DuplicateEntry { name: String },

    /// A step failed while running under the fail-fast policy
    #[error("{step} step for {name} failed: {detail}")]
    StepFailed {
        name: String,
        step: StepKind,
        detail: String,
    },

    /// The external tool could not be started at all
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
