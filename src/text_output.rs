//! Human-readable console report

use crate::analysis::{is_salient, Analysis, Measurement, SeriesStatistics};
use std::fmt::{self, Write};

/// Render the full analysis: one table per test, then the salient summary
pub fn render(analysis: &Analysis) -> Result<String, fmt::Error> {
    let mut out = String::new();

    for series in &analysis.statistics {
        render_series(&mut out, series)?;
        out.push('\n');
    }

    render_salient(&mut out, analysis)?;
    Ok(out)
}

fn render_series(out: &mut String, series: &SeriesStatistics) -> fmt::Result {
    writeln!(out, "=== {} ({}) ===", series.test_name, series.kind)?;
    match (&series.mode, &series.score_unit) {
        (Some(mode), Some(unit)) => writeln!(out, "Mode: {} ({})", mode, unit)?,
        (Some(mode), None) => writeln!(out, "Mode: {}", mode)?,
        _ => {}
    }
    writeln!(
        out,
        "Std dev: {:.4}  Thresholds: delta > {}, speedup > {}",
        series.std_dev, series.delta_threshold, series.speedup_threshold
    )?;

    if series.commits.is_empty() {
        return writeln!(out, "(fewer than two commits, nothing to compare)");
    }

    let label = match series.commits[0].measurement {
        Measurement::Runtime(_) => "runtime",
        Measurement::Score(_) => "score",
    };
    writeln!(
        out,
        "  {:<42} {:>12} {:>12} {:>9}",
        "commit", label, "delta", "speedup"
    )?;
    writeln!(out, "─────────────────────────────────────────────────────────────────────────────────")?;

    for stat in &series.commits {
        let marker = if is_salient(stat, series.delta_threshold, series.speedup_threshold) {
            '*'
        } else {
            ' '
        };
        writeln!(
            out,
            "{} {:<42} {:>12.4} {:>+12.4} {:>9.3}",
            marker,
            stat.commit_id,
            stat.measurement.value(),
            stat.delta,
            stat.speedup
        )?;
    }

    Ok(())
}

fn render_salient(out: &mut String, analysis: &Analysis) -> fmt::Result {
    let salient = &analysis.salient_commits;
    if salient.is_empty() {
        return writeln!(out, "No salient commits");
    }

    writeln!(
        out,
        "Salient commits ({} commits, {} records):",
        salient.len(),
        salient.total_records()
    )?;
    for (commit_id, records) in salient.iter() {
        writeln!(out, "  {}", commit_id)?;
        for record in records {
            writeln!(
                out,
                "    - {} (delta={:+.4}, speedup={:.3})",
                record.test_name, record.delta, record.speedup
            )?;
        }
    }

    Ok(())
}
