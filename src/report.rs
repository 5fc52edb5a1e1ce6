//! Report model: one benchmark measurement for one commit
//!
//! Two report kinds feed the analysis pipeline:
//! - Functional-test timing reports (`time_elapsed`, seconds)
//! - Microbenchmark reports in JMH layout (`primaryMetric.score` plus `mode`)
//!
//! Both share the minimal interface the statistics engine needs: commit id,
//! test name and a single non-negative measurement.

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which kind of report a measurement came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// Functional-test timing (`time_elapsed`)
    Functional,
    /// Microbenchmark throughput/latency (`score`)
    Microbenchmark,
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportKind::Functional => write!(f, "functional"),
            ReportKind::Microbenchmark => write!(f, "microbenchmark"),
        }
    }
}

/// Functional-test timing for one commit
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionalReport {
    commit_id: String,
    test_name: String,
    time_elapsed: f64,
}

impl FunctionalReport {
    pub fn commit_id(&self) -> &str {
        &self.commit_id
    }

    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    /// Wall-clock runtime in seconds
    pub fn time_elapsed(&self) -> f64 {
        self.time_elapsed
    }
}

/// Microbenchmark result for one commit
#[derive(Debug, Clone, PartialEq)]
pub struct MicrobenchmarkReport {
    commit_id: String,
    test_name: String,
    mode: String,
    score: f64,
    score_unit: Option<String>,
}

impl MicrobenchmarkReport {
    pub fn commit_id(&self) -> &str {
        &self.commit_id
    }

    pub fn test_name(&self) -> &str {
        &self.test_name
    }

    /// Measurement semantics (e.g. `avgt` = average time per operation)
    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn score_unit(&self) -> Option<&str> {
        self.score_unit.as_deref()
    }

    /// Attach the unit reported alongside the score (e.g. `s/op`)
    pub fn with_score_unit(mut self, unit: impl Into<String>) -> Self {
        self.score_unit = Some(unit.into());
        self
    }
}

/// One commit's measurement, tagged by report kind
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Functional(FunctionalReport),
    Microbenchmark(MicrobenchmarkReport),
}

impl Report {
    /// Build a validated functional-test report
    pub fn functional(
        commit_id: impl Into<String>,
        test_name: impl Into<String>,
        time_elapsed: f64,
    ) -> Result<Self> {
        let commit_id = non_empty("commit_id", commit_id.into())?;
        let test_name = non_blank("test_name", test_name.into())?;
        let time_elapsed = non_negative("time_elapsed", time_elapsed)?;

        Ok(Report::Functional(FunctionalReport {
            commit_id,
            test_name,
            time_elapsed,
        }))
    }

    /// Build a validated microbenchmark report
    pub fn microbenchmark(
        commit_id: impl Into<String>,
        test_name: impl Into<String>,
        mode: impl Into<String>,
        score: f64,
    ) -> Result<Self> {
        let commit_id = non_empty("commit_id", commit_id.into())?;
        let test_name = non_blank("benchmark", test_name.into())?;
        let mode = non_blank("mode", mode.into())?;
        let score = non_negative("score", score)?;

        Ok(Report::Microbenchmark(MicrobenchmarkReport {
            commit_id,
            test_name,
            mode,
            score,
            score_unit: None,
        }))
    }

    /// Convert a decoded functional-test record
    ///
    /// Expected layout:
    /// ```json
    /// { "commit_id": "c1", "report": { "test_name": "T", "time_elapsed": 10.0 } }
    /// ```
    /// `hexsha` is accepted in place of `commit_id`.
    pub fn functional_from_value(value: &Value) -> Result<Self> {
        let raw = RawFunctionalRecord::deserialize(value)
            .map_err(|e| AnalysisError::MalformedReport(e.to_string()))?;

        Self::functional(raw.commit_id, raw.report.test_name, raw.report.time_elapsed)
    }

    /// Convert a decoded microbenchmark record (JMH result layout)
    ///
    /// # Example
    /// ```
    /// use benchsift::report::Report;
    ///
    /// let value = serde_json::json!({
    ///     "commit_id": "a1b2c3",
    ///     "jmh_report": {
    ///         "benchmark": "org.example.Bench.run",
    ///         "mode": "avgt",
    ///         "primaryMetric": { "score": 1.5, "scoreUnit": "s/op" }
    ///     }
    /// });
    /// let report = Report::microbenchmark_from_value(&value).unwrap();
    /// assert_eq!(report.measurement(), 1.5);
    /// assert_eq!(report.mode(), Some("avgt"));
    /// ```
    pub fn microbenchmark_from_value(value: &Value) -> Result<Self> {
        let raw = RawMicrobenchmarkRecord::deserialize(value)
            .map_err(|e| AnalysisError::MalformedReport(e.to_string()))?;

        let jmh = raw.jmh_report;
        let report = Self::microbenchmark(
            raw.commit_id,
            jmh.benchmark,
            jmh.mode,
            jmh.primary_metric.score,
        )?;

        Ok(match (report, jmh.primary_metric.score_unit) {
            (Report::Microbenchmark(r), Some(unit)) => {
                Report::Microbenchmark(r.with_score_unit(unit))
            }
            (report, _) => report,
        })
    }

    pub fn commit_id(&self) -> &str {
        match self {
            Report::Functional(r) => r.commit_id(),
            Report::Microbenchmark(r) => r.commit_id(),
        }
    }

    pub fn test_name(&self) -> &str {
        match self {
            Report::Functional(r) => r.test_name(),
            Report::Microbenchmark(r) => r.test_name(),
        }
    }

    /// The raw measurement: `time_elapsed` or `score`
    pub fn measurement(&self) -> f64 {
        match self {
            Report::Functional(r) => r.time_elapsed(),
            Report::Microbenchmark(r) => r.score(),
        }
    }

    pub fn kind(&self) -> ReportKind {
        match self {
            Report::Functional(_) => ReportKind::Functional,
            Report::Microbenchmark(_) => ReportKind::Microbenchmark,
        }
    }

    /// Measurement mode, only carried by microbenchmarks
    pub fn mode(&self) -> Option<&str> {
        match self {
            Report::Functional(_) => None,
            Report::Microbenchmark(r) => Some(r.mode()),
        }
    }

    /// Unit of the score, when the microbenchmark reported one
    pub fn score_unit(&self) -> Option<&str> {
        match self {
            Report::Functional(_) => None,
            Report::Microbenchmark(r) => r.score_unit(),
        }
    }
}

/// Commit ids are opaque: any non-empty string is accepted
fn non_empty(field: &str, value: String) -> Result<String> {
    if value.is_empty() {
        return Err(AnalysisError::MalformedReport(format!(
            "field `{}` must not be empty",
            field
        )));
    }
    Ok(value)
}

/// Test names and modes must contain something besides whitespace
fn non_blank(field: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(AnalysisError::MalformedReport(format!(
            "field `{}` must not be blank",
            field
        )));
    }
    Ok(value)
}

fn non_negative(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(AnalysisError::MalformedReport(format!(
            "field `{}` must be a finite non-negative number, got {}",
            field, value
        )));
    }
    Ok(value)
}

#[derive(Deserialize)]
struct RawFunctionalRecord {
    #[serde(alias = "hexsha")]
    commit_id: String,
    report: RawFunctionalBody,
}

#[derive(Deserialize)]
struct RawFunctionalBody {
    test_name: String,
    time_elapsed: f64,
}

#[derive(Deserialize)]
struct RawMicrobenchmarkRecord {
    #[serde(alias = "hexsha")]
    commit_id: String,
    jmh_report: RawJmhReport,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawJmhReport {
    benchmark: String,
    mode: String,
    primary_metric: RawPrimaryMetric,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPrimaryMetric {
    score: f64,
    #[serde(default)]
    score_unit: Option<String>,
}
