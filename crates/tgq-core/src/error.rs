//! Error types and exit codes for tgq
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing graph file, malformed snapshot)
//!
//! Note that query outcomes like "no path found" or "unknown node" are
//! results, not errors: queries return empty results or not-found flags
//! and the process exits 0.

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes per tgq specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or malformed graph file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during tgq operations
#[derive(Error, Debug)]
pub enum TgqError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("graph file not found: {path:?}")]
    GraphNotFound { path: PathBuf },

    #[error("invalid graph snapshot: {reason}")]
    InvalidGraph { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl TgqError {
    /// Create an error for a malformed or inconsistent graph snapshot
    pub fn invalid_graph(reason: impl Into<String>) -> Self {
        TgqError::InvalidGraph {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TgqError::UnknownFormat(_) | TgqError::UsageError(_) => ExitCode::Usage,
            TgqError::GraphNotFound { .. } | TgqError::InvalidGraph { .. } => ExitCode::Data,
            TgqError::Io(_) | TgqError::Json(_) | TgqError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TgqError::UnknownFormat(_) => "unknown_format",
            TgqError::UsageError(_) => "usage_error",
            TgqError::GraphNotFound { .. } => "graph_not_found",
            TgqError::InvalidGraph { .. } => "invalid_graph",
            TgqError::Io(_) => "io_error",
            TgqError::Json(_) => "json_error",
            TgqError::Other(_) => "other",
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

/// Result type alias for tgq operations
pub type Result<T> = std::result::Result<T, TgqError>;
