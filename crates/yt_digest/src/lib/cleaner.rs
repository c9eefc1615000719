//! Post-processing of raw model output into a summary and a list of highlights.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static STAR_BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\*[ \t]*").unwrap());
static STRAY_STAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*").unwrap());
static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
static DASH_BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^- (.+)").unwrap());
static WRAPPED_HIGHLIGHTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bkey[ \t]*\n\s*highlights\b").unwrap());
static HIGHLIGHTS_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bkey\s+highlights\b[ \t]*[:\-]?").unwrap());
static SUMMARY_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^summary[ \t]*(?:[:\-]|\n)\s*").unwrap());

/// Shape the model is asked to answer in, and how its answer is cleaned up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown with headers, returned as one cleaned block of text
    #[default]
    Markdown,
    /// Summary paragraph followed by `- ` bullets
    Bullets,
    /// Plain text with a `Key Highlights` section
    Plain,
}

impl OutputFormat {
    /// Plain output is built from a transcript that keeps caption timestamps.
    pub fn uses_timestamps(&self) -> bool {
        matches!(self, OutputFormat::Plain)
    }

    pub fn fetches_metadata(&self) -> bool {
        matches!(self, OutputFormat::Plain)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanedOutput {
    pub summary: String,
    pub highlights: Vec<String>,
}

pub fn clean(format: OutputFormat, raw: &str) -> CleanedOutput {
    let raw = raw.replace("\r\n", "\n");

    match format {
        OutputFormat::Markdown => CleanedOutput {
            summary: clean_markdown(&raw),
            highlights: Vec::new(),
        },
        OutputFormat::Bullets => extract_bullet_highlights(&clean_markdown(&raw)),
        OutputFormat::Plain => split_key_highlights(&raw),
    }
}

/// Uppercases `**bold**` spans, turns `*` bullets into `- `, drops stray asterisks
/// and collapses runs of blank lines. Applying it twice gives the same text.
pub fn clean_markdown(raw: &str) -> String {
    let cleaned = BOLD_RE.replace_all(raw, |cap: &Captures| cap[1].to_uppercase());
    let cleaned = STAR_BULLET_RE.replace_all(&cleaned, "- ");
    let cleaned = STRAY_STAR_RE.replace_all(&cleaned, "");

    BLANK_RUN_RE
        .replace_all(&cleaned, "\n\n")
        .trim()
        .to_string()
}

/// Moves every `- ` line of already cleaned text into the highlights.
fn extract_bullet_highlights(cleaned: &str) -> CleanedOutput {
    let mut highlights = Vec::new();
    let mut body = Vec::new();

    for line in cleaned.lines() {
        match DASH_BULLET_RE.captures(line) {
            Some(cap) => highlights.push(cap[1].trim().to_string()),
            None => body.push(line),
        }
    }

    let summary = BLANK_RUN_RE
        .replace_all(&body.join("\n"), "\n\n")
        .trim()
        .to_string();

    CleanedOutput {
        summary,
        highlights,
    }
}

/// Splits plain text at the first `Key Highlights` marker.
fn split_key_highlights(raw: &str) -> CleanedOutput {
    let text = WRAPPED_HIGHLIGHTS_RE.replace_all(raw, "Key Highlights");
    let text = BOLD_RE.replace_all(&text, "$1");

    let Some(marker) = HIGHLIGHTS_MARKER_RE.find(&text) else {
        return CleanedOutput {
            summary: strip_summary_label(&text),
            highlights: Vec::new(),
        };
    };

    let highlights = text[marker.end()..]
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_prefix('-').or_else(|| line.strip_prefix('•')))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect();

    CleanedOutput {
        summary: strip_summary_label(&text[..marker.start()]),
        highlights,
    }
}

fn strip_summary_label(text: &str) -> String {
    SUMMARY_LABEL_RE.replace(text.trim(), "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_bold_is_uppercased_and_bullets_normalized() {
        let cleaned = clean_markdown("**HELLO** world\n\n\n\n* one\n* two");
        assert_eq!(cleaned, "HELLO world\n\n- one\n- two");
    }

    #[test]
    fn markdown_uppercases_mixed_case_bold() {
        assert_eq!(
            clean_markdown("**Key Takeaways**\n\n  *   first\n*second*"),
            "KEY TAKEAWAYS\n\n- first\n- second"
        );
    }

    #[test]
    fn markdown_cleaning_is_idempotent() {
        for raw in [
            "**HELLO** world\n\n\n\n* one\n* two",
            "## Summary\n\nSome **bold** text\n\n\n\n\n* a\n  * b\n- c",
            "already clean\n\n- x",
            "",
        ] {
            let once = clean_markdown(raw);
            assert_eq!(clean_markdown(&once), once, "raw: {raw:?}");
        }
    }

    #[test]
    fn markdown_format_keeps_everything_in_the_summary() {
        let out = clean(OutputFormat::Markdown, "Intro\n* point");
        assert_eq!(out.summary, "Intro\n- point");
        assert!(out.highlights.is_empty());
    }

    #[test]
    fn bullets_are_pulled_out_of_the_summary() {
        let out = clean(
            OutputFormat::Bullets,
            "Intro line\n- First point\n- Second point",
        );
        assert_eq!(out.summary, "Intro line");
        assert_eq!(out.highlights, vec!["First point", "Second point"]);
    }

    #[test]
    fn bullets_are_extracted_after_cleaning() {
        let raw = "**Summary**\nThe video covers rust.\n\n\n\n* **Ownership** matters\n* Borrowing\n* Borrowing";
        let out = clean(OutputFormat::Bullets, raw);
        assert_eq!(out.summary, "SUMMARY\nThe video covers rust.");
        // duplicates are kept as-is
        assert_eq!(
            out.highlights,
            vec!["OWNERSHIP matters", "Borrowing", "Borrowing"]
        );
    }

    #[test]
    fn plain_marker_needs_whole_words() {
        let out = clean(
            OutputFormat::Plain,
            "The monkey\nhighlights how tools work.\nKey Highlights:\n- A",
        );
        assert_eq!(out.summary, "The monkey\nhighlights how tools work.");
        assert_eq!(out.highlights, vec!["A"]);

        let out = clean(OutputFormat::Plain, "Turkey highlights: none\n- A");
        assert_eq!(out.summary, "Turkey highlights: none\n- A");
        assert!(out.highlights.is_empty());
    }

    #[test]
    fn plain_marker_allows_extra_spacing() {
        let out = clean(OutputFormat::Plain, "Intro.\nKey  Highlights:\n- A\n- B");
        assert_eq!(out.summary, "Intro.");
        assert_eq!(out.highlights, vec!["A", "B"]);

        let out = clean(OutputFormat::Plain, "Intro.\nKey\tHighlights -\n- A");
        assert_eq!(out.summary, "Intro.");
        assert_eq!(out.highlights, vec!["A"]);
    }

    #[test]
    fn plain_text_splits_at_key_highlights() {
        let out = clean(
            OutputFormat::Plain,
            "Some summary text.\nKey Highlights:\n- A\n- B",
        );
        assert_eq!(out.summary, "Some summary text.");
        assert_eq!(out.highlights, vec!["A", "B"]);
    }

    #[test]
    fn plain_marker_is_case_insensitive_with_optional_punctuation() {
        for marker in ["KEY HIGHLIGHTS", "key highlights -", "Key Highlights:"] {
            let raw = format!("Intro.\n{marker}\n• First\n-Second\nnot a bullet");
            let out = clean(OutputFormat::Plain, &raw);
            assert_eq!(out.summary, "Intro.", "marker: {marker}");
            assert_eq!(out.highlights, vec!["First", "Second"], "marker: {marker}");
        }
    }

    #[test]
    fn plain_joins_a_wrapped_header_and_strips_bold() {
        let raw = "Summary: A **talk** about caching.\n\n**Key\nHighlights**\n- Hit rates\n- Eviction";
        let out = clean(OutputFormat::Plain, raw);
        assert_eq!(out.summary, "A talk about caching.");
        assert_eq!(out.highlights, vec!["Hit rates", "Eviction"]);
    }

    #[test]
    fn plain_without_marker_has_no_highlights() {
        let out = clean(OutputFormat::Plain, "Just a paragraph.\n- dangling");
        assert_eq!(out.summary, "Just a paragraph.\n- dangling");
        assert!(out.highlights.is_empty());
    }

    #[test]
    fn plain_splits_only_at_the_first_marker() {
        let raw = "Intro.\nKey highlights:\n- one\nKey highlights:\n- two";
        let out = clean(OutputFormat::Plain, raw);
        assert_eq!(out.summary, "Intro.");
        assert_eq!(out.highlights, vec!["one", "two"]);
    }
}
