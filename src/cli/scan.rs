//! Scan command implementation

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

use super::utils::parse_csv;
use crate::config::load_config;
use crate::render::jsonl::render_jsonl;
use crate::render::preview::{badge_line, display_width, pad_display, preview_text};
use crate::render::report::write_report;
use crate::scan::{extract_batch, ReportScanner};
use crate::utils::format_with_commas;

#[derive(Args)]
pub struct ScanArgs {
    /// Directory of report files to scan
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Include only files matching these globs (comma-separated)
    #[arg(short = 'i', long, value_name = "GLOBS")]
    pub include_glob: Option<String>,

    /// Exclude paths matching these globs (comma-separated)
    #[arg(short = 'e', long, value_name = "GLOBS")]
    pub exclude_glob: Option<String>,

    /// Skip files larger than this (bytes)
    #[arg(long, value_name = "BYTES")]
    pub max_file_bytes: Option<u64>,

    /// Ignore .gitignore rules
    #[arg(long)]
    pub no_gitignore: bool,

    /// Follow symbolic links when scanning
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Directory for metrics.jsonl and report.json
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Config file path (TOML or YAML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Omit the generated_at timestamp from report.json
    #[arg(long)]
    pub no_timestamp: bool,

    /// Suppress the progress bar and the per-report table
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: ScanArgs) -> Result<()> {
    let root = args
        .path
        .canonicalize()
        .with_context(|| format!("Failed resolving path: {}", args.path.display()))?;
    if !root.is_dir() {
        anyhow::bail!("Path is not a directory: {}", root.display());
    }

    let mut config = load_config(&root, args.config.as_deref())?;
    // CLI > File > Defaults
    if let Some(globs) = parse_csv(&args.include_glob) {
        config.include_globs = globs;
    }
    if let Some(globs) = parse_csv(&args.exclude_glob) {
        config.exclude_globs = globs;
    }
    if let Some(max) = args.max_file_bytes {
        config.max_file_bytes = max;
    }
    if args.no_gitignore {
        config.respect_gitignore = false;
    }
    if args.follow_symlinks {
        config.follow_symlinks = true;
    }
    if args.no_timestamp {
        config.no_timestamp = true;
    }
    if let Some(dir) = args.output_dir.clone() {
        config.output_dir = Some(dir);
    }
    let output_dir = config.output_dir.clone().unwrap_or_else(|| PathBuf::from("metrics-out"));

    let mut scanner = ReportScanner::new(root.clone())
        .include_globs(config.include_globs.clone())
        .exclude_globs(config.exclude_globs.clone())
        .max_file_bytes(config.max_file_bytes)
        .respect_gitignore(config.respect_gitignore)
        .follow_symlinks(config.follow_symlinks);

    let files = scanner.scan()?;
    let mut stats = scanner.stats().clone();
    tracing::debug!("scanning {} candidate report files", files.len());

    let progress = if args.quiet || files.is_empty() {
        None
    } else {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}").expect("valid template"),
        );
        Some(pb)
    };
    let records = extract_batch(&files, &mut stats, progress.as_ref());
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed creating output dir: {}", output_dir.display()))?;
    let jsonl_path = output_dir.join("metrics.jsonl");
    std::fs::write(&jsonl_path, render_jsonl(&records))
        .with_context(|| format!("Failed writing {}", jsonl_path.display()))?;

    let report_path = output_dir.join("report.json");
    let output_files = vec!["metrics.jsonl".to_string(), "report.json".to_string()];
    let config_value = serde_json::to_value(&config)?;
    write_report(&report_path, &stats, &records, &output_files, &config_value, !config.no_timestamp)?;

    if !args.quiet && !records.is_empty() {
        let path_width = records.iter().map(|r| display_width(&r.path)).max().unwrap_or(0);
        for record in &records {
            println!("{}  {}", pad_display(&record.path, path_width), badge_line(&record.metrics));
            println!(
                "{}  {}",
                " ".repeat(path_width),
                preview_text(&record.metrics, Some(&record.title))
            );
        }
        println!();
    }

    println!("Statistics:");
    println!("  Total files scanned: {}", stats.files_scanned);
    println!("  Reports included: {}", stats.files_included);
    println!("  Files skipped (glob): {}", stats.files_skipped_glob);
    println!("  Files skipped (size): {}", stats.files_skipped_size);
    println!("  Files skipped (unreadable): {}", stats.files_skipped_unreadable);
    println!("  Total bytes: {}", format_with_commas(stats.total_bytes_included));
    println!("  Actionable suggestions: {}", stats.total_actionable);
    println!("  Key findings: {}", stats.total_findings);
    println!("  Strategic insights: {}", stats.total_strategic);
    println!("  Reports with takeaway: {}", stats.reports_with_takeaway);
    println!("\nWrote {}", jsonl_path.display());
    println!("Wrote {}", report_path.display());

    Ok(())
}
