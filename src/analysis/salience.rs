// Salience classification of individual commit statistics
//
// Both rules are one-sided: only growth (regression direction for time-based
// measurements) is flagged, improvements never are.

use crate::analysis::statistics::{CommitStatistic, Measurement};
use serde::{Deserialize, Serialize};

/// Decide whether a commit statistic warrants attention
///
/// Salient iff `delta > delta_threshold` or `speedup > speedup_threshold`.
///
/// # Example
/// ```
/// use benchsift::analysis::{is_salient, CommitStatistic, Measurement};
///
/// let stat = CommitStatistic {
///     commit_id: "c2".to_string(),
///     measurement: Measurement::Runtime(9.5),
///     delta: 4.5,
///     speedup: 1.9,
/// };
/// assert!(is_salient(&stat, 2.0, 2.0));
/// assert!(!is_salient(&stat, 5.0, 2.0));
/// ```
pub fn is_salient(stat: &CommitStatistic, delta_threshold: f64, speedup_threshold: f64) -> bool {
    stat.delta > delta_threshold || stat.speedup > speedup_threshold
}

/// A salient commit statistic attributed to its test
///
/// The commit id is not part of the record; it keys the
/// [`SalientCommitMap`](crate::analysis::SalientCommitMap).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalienceRecord {
    pub test_name: String,

    #[serde(flatten)]
    pub measurement: Measurement,

    pub delta: f64,
    pub speedup: f64,
}

impl SalienceRecord {
    pub fn new(test_name: impl Into<String>, stat: &CommitStatistic) -> Self {
        Self {
            test_name: test_name.into(),
            measurement: stat.measurement,
            delta: stat.delta,
            speedup: stat.speedup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(delta: f64, speedup: f64) -> CommitStatistic {
        CommitStatistic {
            commit_id: "c1".to_string(),
            measurement: Measurement::Runtime(1.0),
            delta,
            speedup,
        }
    }

    #[test]
    fn test_salient_by_delta() {
        assert!(is_salient(&stat(4.5, 1.9), 2.0, 2.0));
    }

    #[test]
    fn test_salient_by_speedup() {
        assert!(is_salient(&stat(0.5, 2.5), 2.0, 2.0));
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert!(!is_salient(&stat(2.0, 2.0), 2.0, 2.0));
    }

    #[test]
    fn test_improvements_never_flagged() {
        assert!(!is_salient(&stat(-100.0, 0.01), 2.0, 2.0));
        assert!(!is_salient(&stat(-2.0, 0.5), 2.0, 2.0));
    }

    #[test]
    fn test_zero_statistic() {
        assert!(!is_salient(&stat(0.0, 0.0), 2.0, 2.0));
        assert!(is_salient(&stat(0.0, 0.0), -1.0, 2.0));
    }

    #[test]
    fn test_record_drops_commit_id() {
        let record = SalienceRecord::new(
            "T",
            &CommitStatistic {
                commit_id: "c2".to_string(),
                measurement: Measurement::Runtime(9.5),
                delta: 4.5,
                speedup: 1.9,
            },
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"test_name": "T", "runtime": 9.5, "delta": 4.5, "speedup": 1.9})
        );
    }

    #[test]
    fn test_record_score_field() {
        let record = SalienceRecord::new(
            "B",
            &CommitStatistic {
                commit_id: "c2".to_string(),
                measurement: Measurement::Score(0.25),
                delta: 0.1,
                speedup: 2.5,
            },
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["score"], 0.25);
        assert!(json.get("runtime").is_none());
    }
}
