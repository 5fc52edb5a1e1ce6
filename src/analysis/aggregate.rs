// Salient-commit aggregation across test series

use crate::analysis::salience::{is_salient, SalienceRecord};
use crate::analysis::statistics::SeriesStatistics;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Salience records keyed by commit id
///
/// A commit flagged by several tests keeps one record per test; records are
/// never merged or deduplicated. Within one test, records keep input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalientCommitMap {
    commits: BTreeMap<String, Vec<SalienceRecord>>,
}

impl SalientCommitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record under `commit_id`
    pub fn insert(&mut self, commit_id: impl Into<String>, record: SalienceRecord) {
        self.commits.entry(commit_id.into()).or_default().push(record);
    }

    pub fn get(&self, commit_id: &str) -> Option<&[SalienceRecord]> {
        self.commits.get(commit_id).map(Vec::as_slice)
    }

    pub fn contains(&self, commit_id: &str) -> bool {
        self.commits.contains_key(commit_id)
    }

    /// Number of distinct salient commits
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Number of records across all commits
    pub fn total_records(&self) -> usize {
        self.commits.values().map(Vec::len).sum()
    }

    /// Iterate commits in id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SalienceRecord])> {
        self.commits
            .iter()
            .map(|(id, records)| (id.as_str(), records.as_slice()))
    }
}

/// Collect every salient commit statistic across `statistics`
///
/// Each series is classified with its own recorded thresholds.
///
/// # Example
/// ```
/// use benchsift::analysis::{aggregate, compute_series, AnalyzerConfig};
/// use benchsift::report::Report;
///
/// let reports = vec![
///     Report::functional("c1", "T", 10.0).unwrap(),
///     Report::functional("c2", "T", 9.5).unwrap(),
///     Report::functional("c3", "T", 5.0).unwrap(),
/// ];
/// let stats = compute_series(&reports, &AnalyzerConfig::default()).unwrap();
/// let salient = aggregate(&[stats]);
///
/// assert_eq!(salient.len(), 1);
/// assert_eq!(salient.get("c2").unwrap()[0].delta, 4.5);
/// ```
pub fn aggregate(statistics: &[SeriesStatistics]) -> SalientCommitMap {
    let mut salient = SalientCommitMap::new();

    for series in statistics {
        for stat in &series.commits {
            if is_salient(stat, series.delta_threshold, series.speedup_threshold) {
                tracing::trace!(
                    test = %series.test_name,
                    commit = %stat.commit_id,
                    delta = stat.delta,
                    speedup = stat.speedup,
                    "Salient commit"
                );
                salient.insert(
                    stat.commit_id.clone(),
                    SalienceRecord::new(series.test_name.clone(), stat),
                );
            }
        }
    }

    tracing::debug!(
        series = statistics.len(),
        commits = salient.len(),
        records = salient.total_records(),
        "Aggregated salient commits"
    );

    salient
}
