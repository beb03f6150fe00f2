//! Markdown preview rendering.
//!
//! Uses pulldown-cmark for proper CommonMark parsing rather than regex-based
//! substitution. This handles edge cases (nested emphasis, code spans
//! containing markup, reference links) that regex approaches miss.

use pulldown_cmark::{Event, Options, Parser, html};

/// Render an article draft to an HTML fragment for the editor preview.
///
/// - YAML frontmatter is dropped
/// - Tables, strikethrough and footnotes are enabled
/// - Raw HTML in the draft is escaped and shown as text
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn render_preview(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Strip YAML front matter: a leading `---` line, directly followed by a
/// non-blank line, up to the next `---` line.
///
/// A `---` followed by a blank line is a thematic break and is kept.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(rest) = trimmed
        .strip_prefix("---\n")
        .or_else(|| trimmed.strip_prefix("---\r\n"))
    else {
        return text;
    };
    if rest.lines().next().is_none_or(|line| line.trim().is_empty()) {
        return text;
    }
    let Some(close) = rest.find("\n---") else {
        return text;
    };
    let body = &rest[close + 4..];
    body.strip_prefix("\r\n")
        .or_else(|| body.strip_prefix('\n'))
        .unwrap_or(body)
}
