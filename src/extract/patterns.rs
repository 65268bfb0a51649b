//! Metric pattern tables
//!
//! Each row pairs a category with one scan pattern; a row's non-overlapping
//! match count is summed into its category total. Rows within a category run
//! independently, so text that several rows hit is counted by each of them:
//! "Strategic Recommendation" adds 2 to the strategic count (the "strategic"
//! row plus the "strategic recommendation" row). The report list renders
//! these numbers as badges, so changing the rows changes displayed counts.

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Actionable,
    Findings,
    Strategic,
}

pub struct MetricPattern {
    pub category: Category,
    pub pattern: Regex,
}

fn ci(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).expect("valid regex")
}

pub static METRIC_PATTERNS: Lazy<Vec<MetricPattern>> = Lazy::new(|| {
    vec![
        // ── Actionable ───────────────────────────────────────────────────────
        MetricPattern {
            category: Category::Actionable,
            pattern: ci("recommended action|action:|suggestion:|recommendation:|next steps|actionable"),
        },
        // ── Findings ─────────────────────────────────────────────────────────
        MetricPattern {
            category: Category::Findings,
            pattern: ci("key finding|finding:|insight:|key insight"),
        },
        // ── Strategic ────────────────────────────────────────────────────────
        MetricPattern { category: Category::Strategic, pattern: ci("strategic") },
        MetricPattern { category: Category::Strategic, pattern: ci("competitive insight|market insight") },
        MetricPattern { category: Category::Strategic, pattern: ci("strategic recommendation") },
    ]
});

/// Section markers, matched case-sensitively. "Roast" and "Gold" subsume the
/// "The …" forms; both stay listed because the generator emits either heading.
pub const ROAST_MARKERS: &[&str] = &["The Roast", "Roast"];
pub const GOLD_MARKERS: &[&str] = &["The Gold", "Gold"];

pub fn contains_marker(text: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| text.contains(marker))
}
