//! Error types for structure lookups.

use thiserror::Error;

/// Errors raised when querying a parsed play structure.
///
/// Parsing itself never fails — malformed input degrades to empty
/// structures. These errors distinguish "you asked for something that is
/// not there" from "the text parsed to nothing".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("act '{act}' not found")]
    ActNotFound { act: String },

    #[error("scene '{scene}' not found in '{act}'")]
    SceneNotFound { act: String, scene: String },
}
