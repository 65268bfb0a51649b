//! Report discovery and batch extraction

pub mod scanner;

pub use scanner::{ReportScanner, ScanError};

use crate::domain::{BatchStats, ReportFile, ReportRecord};
use crate::extract::extract_metrics;
use crate::utils::stable_report_id;
use indicatif::ProgressBar;
use rayon::prelude::*;
use std::path::Path;

/// Run the extractor over candidate files in parallel.
///
/// Unreadable or non-UTF-8 files are counted and skipped, never fatal.
/// Records come back in deterministic sorted order by relative path.
pub fn extract_batch(
    files: &[ReportFile],
    stats: &mut BatchStats,
    progress: Option<&ProgressBar>,
) -> Vec<ReportRecord> {
    let results: Vec<Option<ReportRecord>> = files
        .par_iter()
        .map(|file| {
            let record = match std::fs::read_to_string(&file.path) {
                Ok(content) => {
                    let metrics = extract_metrics(&content);
                    Some(ReportRecord {
                        id: stable_report_id(&file.relative_path, &content),
                        path: file.relative_path.clone(),
                        title: display_title(&file.relative_path),
                        metrics,
                    })
                }
                Err(err) => {
                    tracing::debug!("skipping unreadable report {}: {err}", file.path.display());
                    None
                }
            };
            if let Some(pb) = progress {
                pb.inc(1);
            }
            record
        })
        .collect();

    let mut records = Vec::with_capacity(results.len());
    for (file, result) in files.iter().zip(results) {
        match result {
            Some(record) => {
                stats.files_included += 1;
                stats.total_bytes_included += file.size_bytes;
                stats.observe(&record.metrics);
                records.push(record);
            }
            None => stats.files_skipped_unreadable += 1,
        }
    }
    records.sort_by(|a, b| a.path.cmp(&b.path));
    records
}

/// Display title for a report file: the stem with separators spaced out.
pub fn display_title(relative_path: &str) -> String {
    let stem = Path::new(relative_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(relative_path);
    stem.replace(['-', '_'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn extract_batch_builds_sorted_records_and_stats() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("beta.md"), "Key Finding: churn is up.").expect("write");
        fs::write(tmp.path().join("alpha.md"), "Recommended Action: ship the fix.")
            .expect("write");

        let mut scanner = ReportScanner::new(tmp.path().to_path_buf());
        let files = scanner.scan().expect("scan");
        let mut stats = scanner.stats().clone();

        let records = extract_batch(&files, &mut stats, None);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].path, "alpha.md");
        assert_eq!(records[1].path, "beta.md");
        assert_eq!(records[0].id.len(), 16);

        assert_eq!(stats.files_included, 2);
        assert_eq!(stats.files_skipped_unreadable, 0);
        assert!(stats.total_actionable >= 1);
        assert!(stats.total_findings >= 1);
        assert!(stats.total_bytes_included > 0);
    }

    #[test]
    fn extract_batch_counts_non_utf8_as_unreadable() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("good.md"), "plain report").expect("write");
        fs::write(tmp.path().join("bad.md"), [0xff, 0xfe, 0x00, 0x41]).expect("write");

        let mut scanner = ReportScanner::new(tmp.path().to_path_buf());
        let files = scanner.scan().expect("scan");
        let mut stats = scanner.stats().clone();

        let records = extract_batch(&files, &mut stats, None);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "good.md");
        assert_eq!(stats.files_skipped_unreadable, 1);
    }

    #[test]
    fn display_title_spaces_out_separators() {
        assert_eq!(display_title("reports/q3_board-review.md"), "q3 board review");
        assert_eq!(display_title("plain.md"), "plain");
    }
}
