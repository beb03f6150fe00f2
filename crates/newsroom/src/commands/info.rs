//! Info command: version and the configuration a run would use.

use clap::Args;
use newsroom_core::config::{Config, ConfigSources};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {}

#[derive(Serialize)]
struct InfoReport {
    name: &'static str,
    version: &'static str,
    description: &'static str,
    config: EffectiveConfig,
}

/// Resolved settings, with defaults filled in.
#[derive(Serialize)]
struct EffectiveConfig {
    config_file: Option<String>,
    log_level: &'static str,
    log_dir: Option<String>,
    min_seo_score: i32,
    min_content_score: i32,
    /// `null` when the limit is disabled.
    max_input_bytes: Option<usize>,
}

impl InfoReport {
    fn new(config: &Config, sources: &ConfigSources) -> Self {
        let gate = config.gate();
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            config: EffectiveConfig {
                config_file: sources.primary_file().map(ToString::to_string),
                log_level: config.log_level.as_str(),
                log_dir: config.log_dir.as_ref().map(ToString::to_string),
                min_seo_score: gate.min_seo_score,
                min_content_score: gate.min_content_score,
                max_input_bytes: config.input_limit(),
            },
        }
    }

    fn print(&self) {
        let c = &self.config;
        println!("{} {}", self.name.bold(), self.version.green());
        println!("{}\n", self.description);

        println!("{}", "Configuration".bold().underline());
        row(
            "Config file",
            c.config_file
                .as_deref()
                .map_or_else(|| "none loaded".yellow().to_string(), |p| p.cyan().to_string()),
        );
        row("Log level", c.log_level);
        row("Log directory", c.log_dir.as_deref().unwrap_or("-"));
        row(
            "Input limit",
            c.max_input_bytes
                .map_or_else(|| "disabled".yellow().to_string(), |n| format!("{n} bytes")),
        );

        println!("\n{}", "Publishing Gate".bold().underline());
        row("Min SEO score", c.min_seo_score);
        row("Min content score", c.min_content_score);
    }
}

fn row(label: &str, value: impl std::fmt::Display) {
    println!("  {}: {value}", label.dimmed());
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");
    let report = InfoReport::new(config, sources);
    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }
    Ok(())
}
