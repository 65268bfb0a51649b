//! JSONL rendering of report records

use crate::domain::ReportRecord;
use serde_json::Value;
use std::collections::BTreeMap;

pub fn render_jsonl(records: &[ReportRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len());
    for record in records {
        // Use BTreeMap so keys are serialized in alphabetical order and the
        // output stays diffable across runs.
        let mut entry: BTreeMap<&str, Value> = BTreeMap::new();
        entry.insert(
            "actionable_suggestions",
            Value::from(record.metrics.actionable_suggestions as u64),
        );
        entry.insert("has_gold", Value::Bool(record.metrics.has_gold));
        entry.insert("has_roast", Value::Bool(record.metrics.has_roast));
        entry.insert("id", Value::String(record.id.clone()));
        entry.insert("key_findings", Value::from(record.metrics.key_findings as u64));
        entry.insert(
            "key_takeaway",
            record
                .metrics
                .key_takeaway
                .as_ref()
                .map_or(Value::Null, |t| Value::String(t.clone())),
        );
        entry.insert("path", Value::String(record.path.clone()));
        entry.insert("strategic_insights", Value::from(record.metrics.strategic_insights as u64));
        entry.insert("title", Value::String(record.title.clone()));

        if let Ok(line) = serde_json::to_string(&entry) {
            lines.push(line);
        }
    }
    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::render_jsonl;
    use crate::domain::{ReportMetrics, ReportRecord};

    fn record() -> ReportRecord {
        ReportRecord {
            id: "abcd1234abcd1234".to_string(),
            path: "reports/q3.md".to_string(),
            title: "q3".to_string(),
            metrics: ReportMetrics {
                actionable_suggestions: 2,
                key_findings: 1,
                strategic_insights: 0,
                has_roast: true,
                has_gold: false,
                key_takeaway: Some("churn dominates".to_string()),
            },
        }
    }

    #[test]
    fn renders_one_line_per_record_with_sorted_keys() {
        let out = render_jsonl(&[record()]);
        assert!(out.starts_with("{\"actionable_suggestions\":2,"), "got: {out}");
        assert!(out.ends_with("\"title\":\"q3\"}\n"), "got: {out}");
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn full_line_shape_is_stable() {
        let out = render_jsonl(&[record()]);
        similar_asserts::assert_eq!(
            out,
            "{\"actionable_suggestions\":2,\"has_gold\":false,\"has_roast\":true,\
             \"id\":\"abcd1234abcd1234\",\"key_findings\":1,\
             \"key_takeaway\":\"churn dominates\",\"path\":\"reports/q3.md\",\
             \"strategic_insights\":0,\"title\":\"q3\"}\n"
        );
    }

    #[test]
    fn missing_takeaway_serializes_as_null() {
        let mut rec = record();
        rec.metrics.key_takeaway = None;
        let out = render_jsonl(&[rec]);
        assert!(out.contains("\"key_takeaway\":null"), "got: {out}");
    }

    #[test]
    fn empty_input_renders_empty_string() {
        assert_eq!(render_jsonl(&[]), "");
    }
}
