// Benchmark series analysis: per-commit statistics and salient-commit detection
//
// Pipeline:
// - Reports are grouped into one series per test and mode (input order preserved)
// - Each series yields variance plus adjacent-commit deltas and speedups
// - Each commit statistic is classified against its series' thresholds
// - Salient statistics are collected per commit across all tests
//
// Everything here is pure computation over already-loaded reports; discovery
// and output live in `discovery` and the `*_output` modules.

mod aggregate;
mod config;
mod salience;
mod statistics;

pub use aggregate::{aggregate, SalientCommitMap};
pub use config::{AnalyzerConfig, DEFAULT_DELTA_THRESHOLD, DEFAULT_SPEEDUP_THRESHOLD};
pub use salience::{is_salient, SalienceRecord};
pub use statistics::{
    compute_series, speedup_ratio, std_deviation, CommitStatistic, Measurement, SeriesStatistics,
};

use crate::error::Result;
use crate::report::Report;
use std::collections::HashMap;

/// Result of analysing a set of test series
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    /// One entry per analysed test series, in input order
    pub statistics: Vec<SeriesStatistics>,

    /// Salient commits across every series
    pub salient_commits: SalientCommitMap,
}

/// Split reports into per-test series
///
/// A microbenchmark run in several modes (`thrpt`, `avgt`, ...) yields one
/// series per mode, since scores of different modes are not comparable.
/// Series appear in order of first occurrence; reports within a series keep
/// their input order.
pub fn group_by_test(reports: Vec<Report>) -> Vec<Vec<Report>> {
    let mut index: HashMap<(String, Option<String>), usize> = HashMap::new();
    let mut groups: Vec<Vec<Report>> = Vec::new();

    for report in reports {
        let key = (
            report.test_name().to_string(),
            report.mode().map(str::to_string),
        );
        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                index.insert(key, groups.len());
                groups.push(Vec::new());
                groups.len() - 1
            }
        };
        groups[slot].push(report);
    }

    groups
}

/// Compute statistics for every series and aggregate salient commits
///
/// Fails on the first empty or mixed series, or on invalid thresholds.
pub fn analyze<I>(series: I, config: &AnalyzerConfig) -> Result<Analysis>
where
    I: IntoIterator<Item = Vec<Report>>,
{
    config.validate()?;

    let statistics = series
        .into_iter()
        .map(|reports| compute_series(&reports, config))
        .collect::<Result<Vec<_>>>()?;

    let salient_commits = aggregate(&statistics);

    Ok(Analysis {
        statistics,
        salient_commits,
    })
}
