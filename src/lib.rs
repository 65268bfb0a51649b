//! report-metrics: Extract display metrics from advisory report markdown
//!
//! Mines an AI-generated advisory report for the numbers and preview text a
//! report list renders: counts of actionable suggestions, key findings, and
//! strategic insights, presence flags for the roast/gold sections, and a short
//! takeaway excerpt. The extractor itself is a pure function over one string;
//! the scan and render layers wrap it for batch use from the CLI.

pub mod cli;
pub mod config;
pub mod domain;
pub mod extract;
pub mod render;
pub mod scan;
pub mod utils;

pub use domain::ReportMetrics;
pub use extract::extract_metrics;
