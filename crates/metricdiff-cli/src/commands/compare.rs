//! Compare command
//!
//! Loads both catalogs, diffs them and writes the report to stdout.
//!
//! ## Logging Ownership
//!
//! This layer owns lifecycle logging (`log_op_start!` / `log_op_end!` /
//! `log_op_error!`) for catalog loading, comparison and rendering.

use clap::{Args, ValueEnum};
use metricdiff_core::errors::ExError;
use metricdiff_core::logging_facility::{self, Profile};
use metricdiff_core::render::{render_json, render_markdown, ReportOptions};
use metricdiff_core::{compare_snapshots, IndexMode, Snapshot};
use metricdiff_core::{log_op_end, log_op_error, log_op_start};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown report with summary, table and detail blocks
    Markdown,
    /// Ordered diff list as JSON
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable log lines
    Text,
    /// JSON log lines
    Json,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Catalog for the older version (YAML)
    pub old: PathBuf,

    /// Catalog for the newer version (YAML)
    pub new: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Omit the per-metric detail blocks from the markdown report
    #[arg(long)]
    pub no_details: bool,

    /// Reject catalogs that define the same metric twice
    #[arg(long)]
    pub strict: bool,

    /// Log output format (logs go to stderr; filter with RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Execute compare command
pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    logging_facility::init(match args.log_format {
        LogFormat::Text => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let mode = if args.strict {
        IndexMode::Strict
    } else {
        IndexMode::Lenient
    };

    let old = load(&args.old, mode)?;
    let new = load(&args.new, mode)?;

    log_op_start!("compare_snapshots", old_len = old.len(), new_len = new.len());
    let start = Instant::now();
    let diffs = compare_snapshots(&old, &new);
    log_op_end!(
        "compare_snapshots",
        duration_ms = start.elapsed().as_millis() as u64,
        diff_count = diffs.len()
    );

    log_op_start!("render_report", format = ?args.format);
    let start = Instant::now();
    let rendered = match args.format {
        OutputFormat::Markdown => {
            let options = ReportOptions::new(
                metricdiff_store::version_from_path(&args.old),
                metricdiff_store::version_from_path(&args.new),
            )
            .with_details(!args.no_details);
            render_markdown(&diffs, &options)
        }
        OutputFormat::Json => render_json(&diffs).map(|json| json + "\n"),
    }
    .map_err(|e| {
        log_op_error!(
            "render_report",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        ExError::from(e)
    })?;
    log_op_end!(
        "render_report",
        duration_ms = start.elapsed().as_millis() as u64
    );

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Load and index one catalog with boundary logging
fn load(path: &Path, mode: IndexMode) -> Result<Snapshot, ExError> {
    log_op_start!("load_catalog", path = %path.display());
    let start = Instant::now();

    let snapshot = metricdiff_store::load_snapshot(path, mode).map_err(|e| {
        log_op_error!(
            "load_catalog",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "load_catalog",
        duration_ms = start.elapsed().as_millis() as u64,
        path = %path.display(),
        metric_count = snapshot.len()
    );
    Ok(snapshot)
}
