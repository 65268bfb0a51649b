//! report-metrics: Extract display metrics from advisory report markdown
//!
//! This tool mines AI-generated advisory reports for the counts, section
//! flags, and preview takeaways a report list UI displays.

use anyhow::Result;

fn main() -> Result<()> {
    report_metrics::cli::run()
}
