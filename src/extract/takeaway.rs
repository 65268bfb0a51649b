//! Takeaway extraction
//!
//! An ordered chain of strategies, first accepted candidate wins: labeled
//! sections ("Key Takeaways:", "Executive Summary", …) are tried before the
//! generic first-prose-paragraph fallback. ORDER MATTERS in the label list:
//! specific labels ("Key Takeaways", "Executive Summary") come before the
//! generic ones ("Summary", "Gold") so a labeled section is not shadowed by a
//! shorter label matching inside it.
//!
//! Cleanup is best-effort textual replacement, not a markdown parser:
//! unterminated bold markers and stray pipes must never break extraction.

use crate::domain::{TAKEAWAY_MAX_CHARS, TAKEAWAY_MIN_CHARS};
use once_cell::sync::Lazy;
use regex::Regex;

/// Labels that introduce a takeaway, in priority order.
const TAKEAWAY_LABELS: &[&str] = &[
    "Key Takeaways",
    "Key Takeaway",
    "Executive Summary",
    "Summary",
    "Main Findings",
    "Main Finding",
    "The Gold",
    "Gold",
    "Key Insight",
    "Main Insight",
];

/// Label, separator run, then a 50-200 char window of trailing text.
static LABEL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    TAKEAWAY_LABELS
        .iter()
        .map(|label| {
            Regex::new(&format!(r"(?i){}[:\s]+([\s\S]{{50,200}})", regex::escape(label)))
                .expect("valid regex")
        })
        .collect()
});

static HEADING_MARKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"#{1,6}\s+").expect("valid regex"));
static NEWLINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n]+").expect("valid regex"));
static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));
static TABLE_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\|.*\|").expect("valid regex"));
static SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\s\-|]+$").expect("valid regex"));

/// Paragraphs opening with these labels are dashboard/table scaffolding, not prose.
const STRUCTURAL_LABELS: &[&str] =
    &["category", "status", "observation", "recommended action", "executive dashboard"];

/// Minimum trimmed length for a fallback paragraph to qualify as a preview.
const PARAGRAPH_MIN_CHARS: usize = 50;

pub fn extract_takeaway(report: &str) -> Option<String> {
    from_labels(report).or_else(|| from_paragraphs(report))
}

/// Labeled-section strategy: first label whose cleaned capture is long enough.
fn from_labels(report: &str) -> Option<String> {
    for pattern in LABEL_PATTERNS.iter() {
        let Some(caps) = pattern.captures(report) else {
            continue;
        };
        let candidate = clean_candidate(caps.get(1).map_or("", |m| m.as_str()));
        if candidate.chars().count() > TAKEAWAY_MIN_CHARS {
            return Some(candidate);
        }
    }
    None
}

/// Generic fallback: the first prose paragraph that survives the structural
/// filters (table rows, dashboard headers, separator artifacts).
fn from_paragraphs(report: &str) -> Option<String> {
    let mut kept = Vec::new();
    for line in report.lines() {
        if TABLE_ROW.is_match(line.trim()) {
            continue;
        }
        let line = HEADING_MARKS.replace_all(line, "");
        if line.trim().to_lowercase().starts_with("executive dashboard") {
            continue;
        }
        kept.push(line.into_owned());
    }
    let stripped = kept.join("\n").replace("**", "").replace('*', "");

    for paragraph in PARAGRAPH_BREAK.split(&stripped) {
        let candidate = paragraph.trim();
        if candidate.chars().count() <= PARAGRAPH_MIN_CHARS {
            continue;
        }
        if SEPARATOR_RUN.is_match(candidate) {
            continue;
        }
        let lower = candidate.to_lowercase();
        if STRUCTURAL_LABELS.iter().any(|label| lower.starts_with(label)) {
            continue;
        }
        let collapsed = NEWLINE_RUNS.replace_all(candidate, " ");
        return Some(truncate_chars(collapsed.trim(), TAKEAWAY_MAX_CHARS));
    }
    None
}

/// Strip heading/bold/italic markers, collapse newline runs to one space,
/// trim, and cap the length.
fn clean_candidate(raw: &str) -> String {
    let without_headings = HEADING_MARKS.replace_all(raw, "");
    let without_emphasis = without_headings.replace("**", "").replace('*', "");
    let collapsed = NEWLINE_RUNS.replace_all(&without_emphasis, " ");
    truncate_chars(collapsed.trim(), TAKEAWAY_MAX_CHARS)
}

/// Truncate to at most `max` Unicode scalar values. Slicing by bytes could
/// split a multi-byte character; `chars()` cannot.
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
