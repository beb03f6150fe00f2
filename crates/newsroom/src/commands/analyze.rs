//! Analyze command: structural metrics and content score for a draft.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use newsroom_core::analyzer::{self, AnalysisInput, ContentMetrics};
use newsroom_core::sentiment::Sentiment;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Article file to analyze (markdown).
    pub file: Utf8PathBuf,

    /// Article headline (recorded in logs; does not affect the score).
    #[arg(long, default_value = "")]
    pub title: String,

    /// Article category (recorded in logs; does not affect the score).
    #[arg(long, default_value = "")]
    pub category: String,
}

/// Analyze a draft and print its metrics.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    min_content_score: i32,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min_content_score, "executing analyze command");

    let content = super::read_input_file(&args.file, max_input_bytes)?;
    let input = AnalysisInput {
        content,
        title: args.title,
        category: args.category,
    };
    let metrics = analyzer::analyze_input(&input);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
        return Ok(());
    }

    println!("{}", args.file.bold());
    print_metrics(&metrics, min_content_score);
    Ok(())
}

/// Text rendering shared with the `gate` command. The content score is
/// green when it meets `min_content_score`.
pub(crate) fn print_metrics(m: &ContentMetrics, min_content_score: i32) {
    println!(
        "\n  {} {} words, {} sentences, {} paragraphs",
        "Structure:".cyan(),
        m.word_count,
        m.sentence_count,
        m.paragraph_count,
    );
    println!(
        "  {} {} headings, {} images, {} links",
        "Media:".cyan(),
        m.heading_count,
        m.image_count,
        m.link_count,
    );
    println!(
        "  {} Flesch {} ({}), avg {:.1} words/sentence, {} difficult words",
        "Readability:".cyan(),
        m.readability.flesch_score,
        m.readability.reading_level,
        m.readability.avg_sentence_length,
        m.readability.difficult_words,
    );
    println!(
        "  {} ~{} min",
        "Reading time:".cyan(),
        m.readability.reading_time_minutes,
    );
    let sentiment = match m.sentiment {
        Sentiment::Positive => m.sentiment.green().to_string(),
        Sentiment::Negative => m.sentiment.red().to_string(),
        Sentiment::Neutral => m.sentiment.to_string(),
    };
    println!("  {} {}", "Sentiment:".cyan(), sentiment);

    let score = format!("{}/{}", m.content_score, analyzer::MAX_CONTENT_SCORE);
    if i32::from(m.content_score) >= min_content_score {
        println!("\n  {} {}", "Content score:".bold(), score.green());
    } else {
        println!("\n  {} {}", "Content score:".bold(), score.yellow());
    }
}
