//! Report discovery: locate report files and decode them into [`Report`]s
//!
//! A report file is a JSON array of per-commit records, newest commit first.
//! Functional-test directories hold one file per test run; microbenchmark
//! results come as a single file that may cover several benchmarks.

use crate::report::Report;
use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// List the JSON report files directly inside `dir`, sorted by path
pub fn find_report_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("Report directory not found: {}", dir.display());
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)
        .with_context(|| format!("Failed to read report directory: {}", dir.display()))?
    {
        let path = entry
            .with_context(|| format!("Failed to read entry in {}", dir.display()))?
            .path();
        if path.is_file() && is_json(&path) {
            files.push(path);
        }
    }
    files.sort();

    tracing::info!(dir = %dir.display(), files = files.len(), "Discovered report files");
    Ok(files)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a functional-test report file
pub fn load_functional_reports(path: &Path) -> Result<Vec<Report>> {
    load_reports(path, Report::functional_from_value)
}

/// Load a microbenchmark (JMH) report file
pub fn load_microbenchmark_reports(path: &Path) -> Result<Vec<Report>> {
    load_reports(path, Report::microbenchmark_from_value)
}

/// Load every functional-test report file in `dir`, one list per file
pub fn load_functional_dir(dir: &Path) -> Result<Vec<Vec<Report>>> {
    let files = find_report_files(dir)?;
    if files.is_empty() {
        bail!("No report files found in {}", dir.display());
    }

    files
        .iter()
        .map(|path| load_functional_reports(path))
        .collect()
}

fn load_reports<F>(path: &Path, convert: F) -> Result<Vec<Report>>
where
    F: Fn(&Value) -> crate::error::Result<Report>,
{
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read report file: {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;

    let Value::Array(records) = value else {
        bail!(
            "Expected a JSON array of commit reports in {}",
            path.display()
        );
    };

    let reports = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            convert(record)
                .with_context(|| format!("Invalid record #{} in {}", index, path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(file = %path.display(), reports = reports.len(), "Loaded reports");
    Ok(reports)
}
