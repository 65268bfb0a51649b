//! Display-layer helpers for report list entries.
//!
//! The extractor never appends an ellipsis; a takeaway that filled the
//! 150-char cap is the truncation signal, and this layer is the one place
//! that turns it into "…".

use crate::domain::{ReportMetrics, NO_PREVIEW_FALLBACK, TAKEAWAY_MAX_CHARS};
use console::style;
use unicode_width::UnicodeWidthStr;

/// Preview text for a report list entry: the extracted takeaway, else the
/// fallback title, else the "No preview available" literal.
pub fn preview_text(metrics: &ReportMetrics, fallback_title: Option<&str>) -> String {
    match metrics.key_takeaway.as_deref() {
        Some(takeaway) if takeaway.chars().count() == TAKEAWAY_MAX_CHARS => {
            format!("{takeaway}…")
        }
        Some(takeaway) => takeaway.to_string(),
        None => fallback_title
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| NO_PREVIEW_FALLBACK.to_string()),
    }
}

/// Badge line for the counts: actionable always shown; findings and strategic
/// only when non-zero; roast/gold as presence flags.
pub fn badge_line(metrics: &ReportMetrics) -> String {
    let mut badges =
        vec![style(format!("{} actions", metrics.actionable_suggestions)).green().to_string()];
    if metrics.key_findings > 0 {
        badges.push(style(format!("{} findings", metrics.key_findings)).cyan().to_string());
    }
    if metrics.strategic_insights > 0 {
        badges.push(style(format!("{} strategic", metrics.strategic_insights)).magenta().to_string());
    }
    if metrics.has_roast {
        badges.push(style("roast").red().to_string());
    }
    if metrics.has_gold {
        badges.push(style("gold").yellow().to_string());
    }
    badges.join("  ")
}

/// Terminal display width of a string (wide characters count double).
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Pad with spaces to the given display width.
pub fn pad_display(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReportMetrics;

    fn with_takeaway(takeaway: Option<String>) -> ReportMetrics {
        ReportMetrics { key_takeaway: takeaway, ..ReportMetrics::default() }
    }

    #[test]
    fn preview_appends_ellipsis_only_at_cap() {
        let capped = with_takeaway(Some("x".repeat(TAKEAWAY_MAX_CHARS)));
        assert!(preview_text(&capped, None).ends_with('…'));

        let short = with_takeaway(Some("x".repeat(TAKEAWAY_MAX_CHARS - 1)));
        assert!(!preview_text(&short, None).ends_with('…'));
    }

    #[test]
    fn preview_falls_back_to_title_then_literal() {
        let none = with_takeaway(None);
        assert_eq!(preview_text(&none, Some("Q3 board review")), "Q3 board review");
        assert_eq!(preview_text(&none, Some("   ")), NO_PREVIEW_FALLBACK);
        assert_eq!(preview_text(&none, None), NO_PREVIEW_FALLBACK);
    }

    #[test]
    fn badge_line_hides_zero_findings_and_strategic() {
        let metrics = ReportMetrics { actionable_suggestions: 3, ..ReportMetrics::default() };
        let line = badge_line(&metrics);
        assert!(line.contains("3 actions"), "got: {line}");
        assert!(!line.contains("findings"), "got: {line}");
        assert!(!line.contains("strategic"), "got: {line}");
    }

    #[test]
    fn badge_line_shows_flags_when_set() {
        let metrics = ReportMetrics {
            key_findings: 2,
            has_roast: true,
            has_gold: true,
            ..ReportMetrics::default()
        };
        let line = badge_line(&metrics);
        assert!(line.contains("2 findings"), "got: {line}");
        assert!(line.contains("roast"), "got: {line}");
        assert!(line.contains("gold"), "got: {line}");
    }

    #[test]
    fn pad_display_accounts_for_wide_characters() {
        assert_eq!(pad_display("ab", 4), "ab  ");
        // two wide chars already fill the width
        assert_eq!(pad_display("日本", 4), "日本");
        assert_eq!(display_width("日本"), 4);
    }
}
