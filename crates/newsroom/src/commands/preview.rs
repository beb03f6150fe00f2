//! Preview command: render a draft to HTML.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use newsroom_core::markdown;

/// Arguments for the `preview` subcommand.
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Article file to render (markdown).
    pub file: Utf8PathBuf,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct PreviewReport<'a> {
    file: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<&'a str>,
    html: &'a str,
}

/// Render a draft's markdown preview.
#[instrument(name = "cmd_preview", skip_all, fields(file = %args.file))]
pub fn cmd_preview(
    args: PreviewArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, output = ?args.output, "executing preview command");

    let content = super::read_input_file(&args.file, max_input_bytes)?;
    let html = markdown::render_preview(&content);

    if let Some(ref out) = args.output {
        std::fs::write(out.as_std_path(), &html)
            .with_context(|| format!("failed to write {out}"))?;
    }

    if global_json {
        let report = PreviewReport {
            file: args.file.as_str(),
            output: args.output.as_ref().map(|p| p.as_str()),
            html: &html,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if args.output.is_none() {
        print!("{html}");
    }

    Ok(())
}
