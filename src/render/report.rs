//! Batch report JSON generation.

use crate::domain::{BatchStats, ReportRecord, REPORT_SCHEMA_VERSION};
use anyhow::Result;
use chrono::Utc;
use serde_json::{json, Map, Value};
use std::path::Path;

pub fn write_report(
    report_path: &Path,
    stats: &BatchStats,
    records: &[ReportRecord],
    output_files: &[String],
    config: &Value,
    include_timestamp: bool,
) -> Result<()> {
    let mut sorted_output_files = output_files.to_vec();
    sorted_output_files.sort();

    let mut sorted_records: Vec<&ReportRecord> = records.iter().collect();
    sorted_records.sort_by(|a, b| a.path.cmp(&b.path));

    let manifest = sorted_records
        .iter()
        .map(|r| {
            json!({
                "id": r.id,
                "path": r.path,
                "actionable_suggestions": r.metrics.actionable_suggestions,
                "key_findings": r.metrics.key_findings,
                "strategic_insights": r.metrics.strategic_insights,
            })
        })
        .collect::<Vec<_>>();

    let mut report = Map::new();
    report.insert(
        "schema_version".to_string(),
        Value::String(REPORT_SCHEMA_VERSION.to_string()),
    );
    if include_timestamp {
        report.insert(
            "generated_at".to_string(),
            Value::String(Utc::now().format("%Y-%m-%dT%H:%M:%S+00:00").to_string()),
        );
    }
    report.insert("stats".to_string(), stats.to_report_value());
    report.insert("config".to_string(), config.clone());
    report.insert("output_files".to_string(), serde_json::to_value(sorted_output_files)?);
    if !manifest.is_empty() {
        report.insert("records".to_string(), serde_json::to_value(manifest)?);
    }

    if let Some(parent) = report_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(report_path, serde_json::to_string_pretty(&Value::Object(report))?)?;
    Ok(())
}
