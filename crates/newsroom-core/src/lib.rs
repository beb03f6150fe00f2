//! Core library for newsroom.
//!
//! Scores article drafts and decides whether they may be published. Used by
//! the `newsroom` CLI and its MCP server; every analysis function here is
//! pure and synchronous.
//!
//! # Modules
//!
//! - [`analyzer`] - Structural metrics and the composite content score
//! - [`readability`] - Flesch Reading Ease and reading levels
//! - [`sentiment`] - Keyword sentiment labels
//! - [`gate`] - Publishing gate (SEO score + content score)
//! - [`status`] - Draft/published/archived transitions
//! - [`markdown`] - HTML preview rendering
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use newsroom_core::{analyzer, gate};
//!
//! let metrics = analyzer::analyze("# Budget vote\n\nThe council met today.");
//! assert_eq!(metrics.heading_count, 1);
//!
//! let decision = gate::PublishingGate::default().evaluate(72, i32::from(metrics.content_score));
//! assert!(!decision.can_publish);
//! ```
#![deny(unsafe_code)]

pub mod analyzer;
pub mod config;
pub mod error;
pub mod gate;
pub mod markdown;
pub mod readability;
pub mod sentiment;
pub mod status;
pub mod syllables;
pub mod text;

pub use analyzer::{AnalysisInput, ContentMetrics, analyze};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, StatusError, StatusResult};
pub use gate::{PublishingDecision, PublishingGate, can_publish};
pub use status::ArticleStatus;

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
