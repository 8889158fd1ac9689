//! Error types and exit codes for treepath
//!
//! Errors fall into four kinds:
//! - invalid input: unknown node ids, malformed parameters
//! - structural violation: a non-tree was supplied where a tree is required
//! - search exhaustion: no walk exists within the explored space
//! - consistency violation: a node sequence that is not a walk in the tree
//!
//! Exit codes for the CLI:
//! - 0: Success
//! - 1: Search exhaustion or generic failure
//! - 2: Usage error (bad flags/args, invalid input)
//! - 3: Structural or consistency violation

mod macros;

use thiserror::Error;

use crate::tree::NodeId;

/// Exit codes used by the `treepath` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Search exhaustion or generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args, unknown node (2)
    Usage = 2,
    /// Structural or consistency violation (3)
    Violation = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Classification of an error, independent of its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    StructuralViolation,
    SearchExhaustion,
    ConsistencyViolation,
    Other,
}

/// Errors that can occur during treepath operations
#[derive(Error, Debug)]
pub enum TreePathError {
    // Invalid input (exit code 2)
    #[error("unknown node: {id}")]
    UnknownNode { id: NodeId },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{0}")]
    UsageError(String),

    // Structural violations (exit code 3)
    #[error("the graph is not a tree, it contains cycles")]
    NotATree,

    #[error("the graph is empty")]
    EmptyGraph,

    // Search exhaustion (exit code 1)
    #[error("path not found from {from} to {to}")]
    PathNotFound { from: NodeId, to: NodeId },

    // Consistency violations (exit code 3)
    #[error("no edge {{{from}, {to}}}")]
    MissingEdge { from: NodeId, to: NodeId },

    #[error("node sequence is not a walk: {from} and {to} are not adjacent")]
    NotAWalk { from: NodeId, to: NodeId },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl TreePathError {
    /// Create an error for an invalid value or parameter
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TreePathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a search that exhausted its space
    pub fn path_not_found(from: NodeId, to: NodeId) -> Self {
        TreePathError::PathNotFound { from, to }
    }

    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TreePathError::UnknownNode { .. }
            | TreePathError::InvalidValue { .. }
            | TreePathError::UsageError(_) => ErrorKind::InvalidInput,

            TreePathError::NotATree | TreePathError::EmptyGraph => ErrorKind::StructuralViolation,

            TreePathError::PathNotFound { .. } => ErrorKind::SearchExhaustion,

            TreePathError::MissingEdge { .. } | TreePathError::NotAWalk { .. } => {
                ErrorKind::ConsistencyViolation
            }

            TreePathError::Io(_)
            | TreePathError::Json(_)
            | TreePathError::Toml(_)
            | TreePathError::TomlSer(_) => ErrorKind::Other,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self.kind() {
            ErrorKind::InvalidInput => ExitCode::Usage,
            ErrorKind::StructuralViolation | ErrorKind::ConsistencyViolation => {
                ExitCode::Violation
            }
            ErrorKind::SearchExhaustion | ErrorKind::Other => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TreePathError::UnknownNode { .. } => "unknown_node",
            TreePathError::InvalidValue { .. } => "invalid_value",
            TreePathError::UsageError(_) => "usage_error",
            TreePathError::NotATree => "not_a_tree",
            TreePathError::EmptyGraph => "empty_graph",
            TreePathError::PathNotFound { .. } => "path_not_found",
            TreePathError::MissingEdge { .. } => "missing_edge",
            TreePathError::NotAWalk { .. } => "not_a_walk",
            TreePathError::Io(_) => "io_error",
            TreePathError::Json(_) => "json_error",
            TreePathError::Toml(_) | TreePathError::TomlSer(_) => "toml_error",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for treepath operations
pub type Result<T> = std::result::Result<T, TreePathError>;
