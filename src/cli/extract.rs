//! Extract command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::extract::extract_metrics;
use crate::render::preview::{badge_line, preview_text};

#[derive(Args)]
pub struct ExtractArgs {
    /// Report file to read ("-" or omitted reads stdin)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Output format: json or summary
    #[arg(long, value_name = "FORMAT", default_value = "summary")]
    pub format: String,

    /// Fallback display title used when no takeaway can be extracted
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,
}

pub fn run(args: ExtractArgs) -> Result<()> {
    let report = match args.path.as_deref() {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed reading report file: {}", path.display()))?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed reading report from stdin")?;
            buffer
        }
    };

    let metrics = extract_metrics(&report);

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&metrics)?),
        "summary" => {
            println!("{}", badge_line(&metrics));
            println!("{}", preview_text(&metrics, args.title.as_deref()));
        }
        other => anyhow::bail!("Invalid output format: {other} (expected json or summary)"),
    }
    Ok(())
}
