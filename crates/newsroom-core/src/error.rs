//! Error types for newsroom-core.

use thiserror::Error;

use crate::status::ArticleStatus;

/// Configuration could not be assembled from its sources.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A file or `NEWSROOM_*` variable held a value of the wrong shape.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised when an article cannot change status.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatusError {
    /// The requested transition is not allowed from the current status.
    #[error("cannot move article from {from} to {to}")]
    InvalidTransition {
        /// Status the article is currently in.
        from: ArticleStatus,
        /// Status that was requested.
        to: ArticleStatus,
    },

    /// The publishing gate refused the draft.
    #[error("publishing blocked: {}", .blockers.join("; "))]
    Blocked {
        /// One entry per unmet threshold.
        blockers: Vec<String>,
    },
}

/// Result type alias using [`StatusError`].
pub type StatusResult<T> = Result<T, StatusError>;
