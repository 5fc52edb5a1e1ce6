// Series statistics: variance and adjacent-commit deltas/speedups
//
// A series is the ordered list of reports for one test, newest commit first.
// Commit i is compared against commit i+1, its next-older baseline.

use crate::analysis::config::AnalyzerConfig;
use crate::error::{AnalysisError, Result};
use crate::report::{Report, ReportKind};
use serde::{Deserialize, Serialize};

/// Raw measurement of the current commit, named after its report kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Measurement {
    /// Functional-test runtime (seconds)
    #[serde(rename = "runtime")]
    Runtime(f64),
    /// Microbenchmark score
    #[serde(rename = "score")]
    Score(f64),
}

impl Measurement {
    fn of(report: &Report) -> Self {
        match report.kind() {
            ReportKind::Functional => Measurement::Runtime(report.measurement()),
            ReportKind::Microbenchmark => Measurement::Score(report.measurement()),
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Measurement::Runtime(v) | Measurement::Score(v) => *v,
        }
    }
}

/// Comparison of one commit against its next-older neighbour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitStatistic {
    pub commit_id: String,

    #[serde(flatten)]
    pub measurement: Measurement,

    /// `current - next`; positive means the measurement grew
    pub delta: f64,

    /// `current / next`, or 0.0 when `next` is zero
    pub speedup: f64,
}

/// Statistics for one test across its whole commit series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStatistics {
    pub test_name: String,

    pub kind: ReportKind,

    /// Measurement mode of microbenchmark series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Score unit of microbenchmark series, as reported by the newest commit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_unit: Option<String>,

    /// Sample standard deviation of every measurement in the series
    pub std_dev: f64,

    /// Thresholds active when the series was computed
    pub delta_threshold: f64,
    pub speedup_threshold: f64,

    /// One entry per adjacent pair, in series order
    pub commits: Vec<CommitStatistic>,
}

/// Compute statistics for one test's series
///
/// `reports` must share one test name, report kind and mode, ordered so that
/// each report is followed by its chronologically earlier baseline.
///
/// # Errors
/// - `AnalysisError::EmptySeries` for an empty slice
/// - `AnalysisError::MixedSeries` when test names, report kinds or modes differ
///
/// # Example
/// ```
/// use benchsift::analysis::{compute_series, AnalyzerConfig};
/// use benchsift::report::Report;
///
/// let reports = vec![
///     Report::functional("c1", "T", 10.0).unwrap(),
///     Report::functional("c2", "T", 9.5).unwrap(),
///     Report::functional("c3", "T", 5.0).unwrap(),
/// ];
/// let stats = compute_series(&reports, &AnalyzerConfig::default()).unwrap();
///
/// assert_eq!(stats.commits.len(), 2);
/// assert_eq!(stats.commits[1].delta, 4.5);
/// assert!((stats.std_dev - 2.754).abs() < 1e-3);
/// ```
pub fn compute_series(reports: &[Report], config: &AnalyzerConfig) -> Result<SeriesStatistics> {
    let first = reports.first().ok_or(AnalysisError::EmptySeries)?;
    let test_name = first.test_name();
    let kind = first.kind();
    let mode = first.mode();

    for report in &reports[1..] {
        if report.test_name() != test_name {
            return Err(AnalysisError::MixedSeries {
                expected: format!("test `{}`", test_name),
                found: format!("test `{}`", report.test_name()),
            });
        }
        if report.kind() != kind {
            return Err(AnalysisError::MixedSeries {
                expected: format!("{} reports", kind),
                found: format!("{} report for commit `{}`", report.kind(), report.commit_id()),
            });
        }
        if report.mode() != mode {
            return Err(AnalysisError::MixedSeries {
                expected: format!("mode `{}`", mode.unwrap_or_default()),
                found: format!(
                    "mode `{}` for commit `{}`",
                    report.mode().unwrap_or_default(),
                    report.commit_id()
                ),
            });
        }
    }

    let measurements: Vec<f64> = reports.iter().map(Report::measurement).collect();
    let std_dev = std_deviation(&measurements);

    let commits: Vec<CommitStatistic> = reports
        .windows(2)
        .map(|pair| {
            let (current, next) = (&pair[0], &pair[1]);
            let current_value = current.measurement();
            let next_value = next.measurement();

            if next_value == 0.0 {
                tracing::warn!(
                    test = test_name,
                    commit = current.commit_id(),
                    baseline = next.commit_id(),
                    "Zero baseline measurement, speedup reported as 0"
                );
            }

            CommitStatistic {
                commit_id: current.commit_id().to_string(),
                measurement: Measurement::of(current),
                delta: current_value - next_value,
                speedup: speedup_ratio(current_value, next_value),
            }
        })
        .collect();

    tracing::debug!(
        test = test_name,
        points = reports.len(),
        pairs = commits.len(),
        std_dev,
        "Computed series statistics"
    );

    Ok(SeriesStatistics {
        test_name: test_name.to_string(),
        kind,
        mode: mode.map(str::to_string),
        score_unit: first.score_unit().map(str::to_string),
        std_dev,
        delta_threshold: config.delta_threshold,
        speedup_threshold: config.speedup_threshold,
        commits,
    })
}

/// Ratio `current / next`; a zero baseline yields 0.0 instead of infinity
///
/// A ratio that overflows (subnormal baseline) saturates at `f64::MAX`.
pub fn speedup_ratio(current: f64, next: f64) -> f64 {
    if next == 0.0 {
        return 0.0;
    }

    let ratio = current / next;
    if ratio.is_finite() {
        ratio
    } else {
        f64::MAX
    }
}

/// Sample standard deviation (n - 1 denominator)
///
/// Returns 0.0 for fewer than two values.
pub fn std_deviation(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    // Scale into [0, 1] so squared deviations cannot overflow
    let scale = values.iter().fold(0.0f64, |max, &x| max.max(x.abs()));
    if scale == 0.0 {
        return 0.0;
    }

    // Incremental mean stays exact for constant series
    let mean = values
        .iter()
        .enumerate()
        .fold(0.0, |mean, (i, &x)| mean + (x / scale - mean) / (i + 1) as f64);

    let sum_sq: f64 = values.iter().map(|&x| (x / scale - mean).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt() * scale
}
