use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the kassa workspace.
///
/// The engine itself only fails on contract violations (unknown selectors,
/// zero forecast horizon); the remaining variants describe failures of the
/// order source that feeds it.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum KassaError {
    /// Invalid input argument or selector.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with the supplied snapshot data (malformed payloads, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// A resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "order source".
        what: String,
    },

    /// The order source returned an error.
    #[error("{name} failed: {msg}")]
    Source {
        /// Name of the order source that failed.
        name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Fetching a snapshot from the order source exceeded the configured timeout.
    #[error("order source timed out: {name}")]
    SourceTimeout {
        /// Name of the order source that timed out.
        name: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl KassaError {
    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source_failed(name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            name: name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `SourceTimeout` error.
    pub fn source_timeout(name: impl Into<String>) -> Self {
        Self::SourceTimeout { name: name.into() }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// A missing resource is benign (e.g. no source configured yet); everything
    /// else points at a caller bug or a failing data source.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }
}

impl From<serde_json::Error> for KassaError {
    fn from(e: serde_json::Error) -> Self {
        Self::Data(e.to_string())
    }
}
