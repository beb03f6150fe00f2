//! `newsroom` command-line front end.
//!
//! The binary in `main.rs` parses [`Cli`], loads configuration and hands the
//! selected [`Commands`] variant to its handler in [`commands`]. With the
//! `mcp` feature the same core operations are also served as MCP tools by
//! [`server`].

pub mod commands;
pub mod observability;

#[cfg(feature = "mcp")]
pub mod server;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// When to emit ANSI colours.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Let owo-colors decide.
    #[default]
    Auto,
    /// Force colours on, even when piped.
    Always,
    /// Plain text only.
    Never,
}

impl ColorChoice {
    /// Install this choice as the process-wide owo-colors override.
    pub fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                    Log filter (e.g., debug, newsroom=trace)
    NEWSROOM_LOG_PATH           Write JSONL logs to this file
    NEWSROOM_LOG_DIR            Write daily JSONL logs into this directory
    NEWSROOM_MIN_SEO_SCORE      Publishing gate SEO threshold (default 60)
    NEWSROOM_MIN_CONTENT_SCORE  Publishing gate content threshold (default 60)
    NEWSROOM_MAX_INPUT_BYTES    Largest accepted draft (default 5 MiB)
";

/// Score article drafts and gate them before publishing.
#[derive(Parser)]
#[command(name = "newsroom", version, about, long_about = None)]
#[command(arg_required_else_help = true, after_long_help = ENV_HELP)]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the bare version number and exit
    #[arg(long)]
    pub version_only: bool,

    /// Read this config file after the discovered ones
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Change to DIR before discovering config and reading drafts
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub chdir: Option<PathBuf>,

    /// Log errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colour output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Report metrics and the content score for a draft
    Analyze(commands::analyze::AnalyzeArgs),

    /// Check whether a draft may move from draft to published
    Gate(commands::gate::GateArgs),

    /// Render a draft to an HTML preview
    Preview(commands::preview::PreviewArgs),

    /// Show version and effective configuration
    Info(commands::info::InfoArgs),

    /// Serve the newsroom tools over MCP on stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}
