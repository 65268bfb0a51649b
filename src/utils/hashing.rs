//! Stable hashing for report record IDs

use sha2::{Digest, Sha256};

/// 16-hex-char id derived from the report's relative path and a content
/// prefix. The prefix is sliced by characters so multi-byte content cannot
/// split mid-code-point.
pub fn stable_report_id(path: &str, content: &str) -> String {
    let content_prefix: String = content.chars().take(1000).collect();
    let mut hasher = Sha256::new();
    hasher.update(format!("{path}:{content_prefix}").as_bytes());
    let digest = hasher.finalize();
    format!("{digest:x}")[..16].to_string()
}

#[cfg(test)]
mod tests {
    use super::stable_report_id;

    #[test]
    fn id_is_stable_and_16_hex_chars() {
        let a = stable_report_id("reports/q3.md", "body text");
        let b = stable_report_id("reports/q3.md", "body text");
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn id_changes_with_path_or_content() {
        let base = stable_report_id("a.md", "body");
        assert_ne!(base, stable_report_id("b.md", "body"));
        assert_ne!(base, stable_report_id("a.md", "other"));
    }

    #[test]
    fn long_multibyte_content_hashes_without_panicking() {
        let content = "é".repeat(5000);
        let id = stable_report_id("a.md", &content);
        assert_eq!(id.len(), 16);
    }
}
