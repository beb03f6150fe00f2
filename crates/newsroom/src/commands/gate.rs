//! Gate command: decide whether a draft may be published.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, info, instrument};

use newsroom_core::analyzer::{self, ContentMetrics};
use newsroom_core::gate::{PublishingDecision, PublishingGate};
use newsroom_core::status::ArticleStatus;

/// Arguments for the `gate` subcommand.
#[derive(Args, Debug)]
pub struct GateArgs {
    /// Article file to check (markdown).
    pub file: Utf8PathBuf,

    /// SEO score from the SEO analyzer.
    #[arg(long, allow_negative_numbers = true)]
    pub seo_score: i32,

    /// Minimum SEO score (overrides config).
    #[arg(long)]
    pub min_seo: Option<i32>,

    /// Minimum content score (overrides config).
    #[arg(long)]
    pub min_content: Option<i32>,

    /// Current status of the article.
    #[arg(long, value_enum, default_value_t)]
    pub status: ArticleStatus,
}

#[derive(Serialize)]
struct GateReport {
    file: String,
    status: ArticleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_status: Option<ArticleStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    decision: PublishingDecision,
    metrics: ContentMetrics,
}

/// Analyze a draft, run it through the gate, and attempt to publish it.
///
/// Fails (non-zero exit) when the gate or the status transition refuses.
#[instrument(name = "cmd_gate", skip_all, fields(file = %args.file, seo_score = args.seo_score))]
pub fn cmd_gate(
    args: GateArgs,
    global_json: bool,
    config_gate: PublishingGate,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, status = %args.status, "executing gate command");

    let content = super::read_input_file(&args.file, max_input_bytes)?;
    let metrics = analyzer::analyze(&content);

    let gate = PublishingGate {
        min_seo_score: args.min_seo.unwrap_or(config_gate.min_seo_score),
        min_content_score: args.min_content.unwrap_or(config_gate.min_content_score),
    };
    let decision = gate.evaluate(args.seo_score, i32::from(metrics.content_score));
    let outcome = args.status.publish(&decision);

    if global_json {
        let report = GateReport {
            file: args.file.to_string(),
            status: args.status,
            new_status: outcome.as_ref().ok().copied(),
            error: outcome.as_ref().err().map(ToString::to_string),
            decision,
            metrics,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", args.file.bold());
        super::analyze::print_metrics(&metrics, decision.min_content_score);
        println!(
            "  {} {} (min {})",
            "SEO score:".bold(),
            decision.seo_score,
            decision.min_seo_score,
        );
        println!();
        match outcome {
            Ok(ref status) => println!("{} {} -> {}", "PASS".green().bold(), args.status, status),
            Err(ref e) => {
                println!("{} {}", "FAIL".red().bold(), args.status);
                if decision.blockers.is_empty() {
                    println!("  {} {}", "-".dimmed(), e);
                }
                for blocker in &decision.blockers {
                    println!("  {} {}", "-".dimmed(), blocker);
                }
            }
        }
    }

    match outcome {
        Ok(status) => {
            info!(%status, "article may be published");
            Ok(())
        }
        Err(e) => bail!("{}: {e}", args.file),
    }
}
