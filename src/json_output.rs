//! JSON output for analysis results
//!
//! Console output (`--format json`) and the files written to `--output-dir`:
//! - `statistics.json`: array of per-test series statistics
//! - `salient_commits.json`: salient records keyed by commit id

use crate::analysis::{Analysis, SalientCommitMap, SeriesStatistics};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name for persisted series statistics
pub const STATISTICS_FILE: &str = "statistics.json";

/// File name for the persisted salient-commit map
pub const SALIENT_COMMITS_FILE: &str = "salient_commits.json";

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Per-test series statistics
    pub statistics: Vec<SeriesStatistics>,
    /// Salient records keyed by commit id
    pub salient_commits: SalientCommitMap,
}

impl JsonOutput {
    pub fn new(analysis: &Analysis) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "benchsift-json-v1".to_string(),
            statistics: analysis.statistics.clone(),
            salient_commits: analysis.salient_commits.clone(),
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Persist statistics and salient commits into `dir`, creating it if needed
///
/// Returns the paths written.
pub fn write_output_dir(dir: &Path, analysis: &Analysis) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let statistics_path = dir.join(STATISTICS_FILE);
    write_json(&statistics_path, &analysis.statistics)?;

    let salient_path = dir.join(SALIENT_COMMITS_FILE);
    write_json(&salient_path, &analysis.salient_commits)?;

    tracing::info!(dir = %dir.display(), "Wrote analysis results");
    Ok(vec![statistics_path, salient_path])
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    fs::write(path, json + "\n").with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze, AnalyzerConfig};
    use crate::report::Report;
    use tempfile::TempDir;

    fn sample_analysis() -> Analysis {
        let reports = vec![
            Report::functional("c1", "T", 10.0).unwrap(),
            Report::functional("c2", "T", 9.5).unwrap(),
            Report::functional("c3", "T", 5.0).unwrap(),
        ];
        analyze(vec![reports], &AnalyzerConfig::default()).unwrap()
    }

    #[test]
    fn test_json_output_structure() {
        let output = JsonOutput::new(&sample_analysis());
        let json: serde_json::Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();

        assert_eq!(json["format"], "benchsift-json-v1");
        assert_eq!(json["statistics"][0]["test_name"], "T");
        assert_eq!(json["statistics"][0]["commits"].as_array().unwrap().len(), 2);
        assert_eq!(json["salient_commits"]["c2"][0]["runtime"], 9.5);
    }

    #[test]
    fn test_json_output_roundtrip_salient_map() {
        let analysis = sample_analysis();
        let text = JsonOutput::new(&analysis).to_json().unwrap();
        let parsed: JsonOutput = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.salient_commits, analysis.salient_commits);
    }

    #[test]
    fn test_write_output_dir() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("results");

        let written = write_output_dir(&out, &sample_analysis()).unwrap();
        assert_eq!(written.len(), 2);

        let stats: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join(STATISTICS_FILE)).unwrap())
                .unwrap();
        assert!(stats.is_array());
        assert_eq!(stats[0]["delta_threshold"], 2.0);

        let salient: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.join(SALIENT_COMMITS_FILE)).unwrap())
                .unwrap();
        assert_eq!(salient["c2"][0]["delta"], 4.5);
        assert!(salient.get("c1").is_none());
    }

    #[test]
    fn test_write_empty_analysis() {
        let dir = TempDir::new().unwrap();
        write_output_dir(dir.path(), &Analysis::default()).unwrap();

        let salient = fs::read_to_string(dir.path().join(SALIENT_COMMITS_FILE)).unwrap();
        assert_eq!(salient.trim(), "{}");
    }
}
