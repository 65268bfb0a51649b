//! Core data types shared by the extractor, scanner, and renderers.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::path::PathBuf;

pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Maximum takeaway length, counted in Unicode scalar values.
pub const TAKEAWAY_MAX_CHARS: usize = 150;

/// Minimum cleaned length for a label-matched takeaway to be accepted.
pub const TAKEAWAY_MIN_CHARS: usize = 30;

/// Shown by the display layer when neither a takeaway nor a fallback title exists.
pub const NO_PREVIEW_FALLBACK: &str = "No preview available";

/// Display metrics mined from one report body.
///
/// Counts are summed per pattern-table row and never deduplicated across rows,
/// so they have no upper bound beyond input length. `key_takeaway`, when
/// present, is trimmed, stripped of markdown markers, newline-collapsed, and
/// at most [`TAKEAWAY_MAX_CHARS`] long.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetrics {
    pub actionable_suggestions: usize,
    pub key_findings: usize,
    pub strategic_insights: usize,
    pub has_roast: bool,
    pub has_gold: bool,
    pub key_takeaway: Option<String>,
}

/// A report file discovered by the scanner, before extraction.
#[derive(Debug, Clone)]
pub struct ReportFile {
    pub path: PathBuf,
    pub relative_path: String,
    pub size_bytes: u64,
}

/// One scanned report with its extracted metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Stable 16-hex-char id derived from path and content.
    pub id: String,
    /// Relative path, `/`-normalized.
    pub path: String,
    /// Display title derived from the file stem; the preview fallback.
    pub title: String,
    pub metrics: ReportMetrics,
}

/// Counters accumulated across one batch scan.
#[derive(Debug, Clone, Default)]
pub struct BatchStats {
    pub files_scanned: usize,
    pub files_included: usize,
    pub files_skipped_glob: usize,
    pub files_skipped_size: usize,
    pub files_skipped_unreadable: usize,
    pub total_bytes_included: u64,
    pub total_actionable: usize,
    pub total_findings: usize,
    pub total_strategic: usize,
    pub reports_with_roast: usize,
    pub reports_with_gold: usize,
    pub reports_with_takeaway: usize,
}

impl BatchStats {
    /// Fold one extracted record into the corpus aggregates.
    pub fn observe(&mut self, metrics: &ReportMetrics) {
        self.total_actionable += metrics.actionable_suggestions;
        self.total_findings += metrics.key_findings;
        self.total_strategic += metrics.strategic_insights;
        if metrics.has_roast {
            self.reports_with_roast += 1;
        }
        if metrics.has_gold {
            self.reports_with_gold += 1;
        }
        if metrics.key_takeaway.is_some() {
            self.reports_with_takeaway += 1;
        }
    }

    /// Render the `stats` object for report.json. Skip counts nest under
    /// `files_skipped`, not as flat top-level integers.
    pub fn to_report_value(&self) -> Value {
        json!({
            "files_scanned": self.files_scanned,
            "files_included": self.files_included,
            "files_skipped": {
                "glob": self.files_skipped_glob,
                "size": self.files_skipped_size,
                "unreadable": self.files_skipped_unreadable,
            },
            "total_bytes_included": self.total_bytes_included,
            "totals": {
                "actionable_suggestions": self.total_actionable,
                "key_findings": self.total_findings,
                "strategic_insights": self.total_strategic,
            },
            "reports_with": {
                "roast": self.reports_with_roast,
                "gold": self.reports_with_gold,
                "takeaway": self.reports_with_takeaway,
            },
        })
    }
}

pub fn default_include_globs() -> &'static [&'static str] {
    &["*.md", "*.markdown", "*.mdx", "*.txt"]
}

/// File-loadable defaults for the scan CLI. Precedence is CLI > File > Defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(deserialize_with = "glob_list")]
    pub include_globs: Vec<String>,
    #[serde(deserialize_with = "glob_list")]
    pub exclude_globs: Vec<String>,
    pub max_file_bytes: u64,
    pub respect_gitignore: bool,
    pub follow_symlinks: bool,
    pub output_dir: Option<PathBuf>,
    pub no_timestamp: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_globs: default_include_globs().iter().map(|s| s.to_string()).collect(),
            exclude_globs: Vec::new(),
            max_file_bytes: 1_048_576, // 1MB
            respect_gitignore: true,
            follow_symlinks: false,
            output_dir: None,
            no_timestamp: false,
        }
    }
}

/// Accept either a list of globs or a single comma-separated string.
fn glob_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum GlobList {
        List(Vec<String>),
        Csv(String),
    }

    let raw = GlobList::deserialize(deserializer)?;
    let items = match raw {
        GlobList::List(items) => items,
        GlobList::Csv(csv) => csv.split(',').map(str::to_string).collect(),
    };
    Ok(items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect())
}
