//! CSV output for per-commit statistics
//!
//! One row per adjacent-commit comparison, for spreadsheet analysis.

use crate::analysis::{is_salient, Analysis, SeriesStatistics};

/// CSV formatter for series statistics
#[derive(Debug, Default)]
pub struct CsvOutput<'a> {
    series: Vec<&'a SeriesStatistics>,
}

impl<'a> CsvOutput<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every series of an analysis
    pub fn from_analysis(analysis: &'a Analysis) -> Self {
        Self {
            series: analysis.statistics.iter().collect(),
        }
    }

    fn header() -> &'static str {
        "test_name,commit_id,measurement,delta,speedup,salient"
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();
        output.push_str(Self::header());
        output.push('\n');

        for series in &self.series {
            let test_name = Self::escape_field(&series.test_name);
            for stat in &series.commits {
                let salient = is_salient(stat, series.delta_threshold, series.speedup_threshold);
                output.push_str(&format!(
                    "{},{},{},{},{},{}\n",
                    test_name,
                    Self::escape_field(&stat.commit_id),
                    stat.measurement.value(),
                    stat.delta,
                    stat.speedup,
                    salient
                ));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze, AnalyzerConfig};
    use crate::report::Report;

    #[test]
    fn test_header_only_when_empty() {
        let csv = CsvOutput::new().to_csv();
        assert_eq!(csv, "test_name,commit_id,measurement,delta,speedup,salient\n");
    }

    #[test]
    fn test_rows_per_commit_statistic() {
        let reports = vec![
            Report::functional("c1", "T", 10.0).unwrap(),
            Report::functional("c2", "T", 9.5).unwrap(),
            Report::functional("c3", "T", 5.0).unwrap(),
        ];
        let analysis = analyze(vec![reports], &AnalyzerConfig::default()).unwrap();
        let csv = CsvOutput::from_analysis(&analysis).to_csv();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("T,c1,10,0.5,"));
        assert!(lines[1].ends_with(",false"));
        assert_eq!(lines[2], "T,c2,9.5,4.5,1.9,true");
    }

    #[test]
    fn test_escapes_test_names() {
        let reports = vec![
            Report::functional("c1", "suite,\"quoted\"", 1.0).unwrap(),
            Report::functional("c2", "suite,\"quoted\"", 1.0).unwrap(),
        ];
        let analysis = analyze(vec![reports], &AnalyzerConfig::default()).unwrap();
        let csv = CsvOutput::from_analysis(&analysis).to_csv();
        assert!(csv.contains("\"suite,\"\"quoted\"\"\",c1,1,0,1,false"));
    }
}
