//! Style variable resolution errors.

use thiserror::Error;

/// Error returned when a style variable cannot be resolved to a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The requested variable is not defined on the root.
    #[error("style variable '{name}' is not defined")]
    Undefined { name: String },
    /// A variable references another variable that doesn't exist
    #[error("style variable '{from}' references undefined variable '{to}'")]
    UnresolvedReference { from: String, to: String },
    /// A cycle was detected while following references
    #[error("cycle detected in style variables: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}
