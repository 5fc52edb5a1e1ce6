use anyhow::Result;
use benchsift::analysis::{self, AnalyzerConfig};
use benchsift::cli::{Cli, OutputFormat};
use benchsift::report::Report;
use benchsift::{csv_output, discovery, filter, json_output, text_output};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Resolve thresholds: defaults, then --config file, then explicit flags
fn resolve_config(args: &Cli) -> Result<AnalyzerConfig> {
    let base = match &args.config {
        Some(path) => AnalyzerConfig::from_toml_file(path)?,
        None => AnalyzerConfig::default(),
    };
    let config = base.with_overrides(args.delta_threshold, args.speedup_threshold);
    config.validate()?;
    Ok(config)
}

/// Load every requested report source as per-test series
fn collect_series(args: &Cli, test_filter: &filter::TestFilter) -> Result<Vec<Vec<Report>>> {
    let mut series = Vec::new();

    if let Some(dir) = &args.directory {
        for reports in discovery::load_functional_dir(dir)? {
            series.extend(analysis::group_by_test(reports));
        }
    }

    if let Some(path) = &args.jmh {
        let reports = discovery::load_microbenchmark_reports(path)?;
        series.extend(analysis::group_by_test(reports));
    }

    let total = series.len();
    series.retain(|reports| {
        reports
            .first()
            .is_some_and(|report| test_filter.matches(report.test_name()))
    });

    if series.len() < total {
        tracing::info!(kept = series.len(), total, "Applied test filter");
    }
    if series.is_empty() && total > 0 {
        tracing::warn!("Test filter excluded every series");
    }

    Ok(series)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    if args.directory.is_none() && args.jmh.is_none() {
        anyhow::bail!(
            "Must specify a report DIRECTORY and/or --jmh FILE. Usage: benchsift DIRECTORY [--jmh FILE]"
        );
    }

    let config = resolve_config(&args)?;

    let test_filter = match &args.filter {
        Some(pattern) => filter::TestFilter::from_pattern(pattern)?,
        None => filter::TestFilter::all(),
    };

    let series = collect_series(&args, &test_filter)?;
    let analysis = analysis::analyze(series, &config)?;

    match args.format {
        OutputFormat::Text => print!("{}", text_output::render(&analysis)?),
        OutputFormat::Json => println!("{}", json_output::JsonOutput::new(&analysis).to_json()?),
        OutputFormat::Csv => print!("{}", csv_output::CsvOutput::from_analysis(&analysis).to_csv()),
    }

    if let Some(dir) = &args.output_dir {
        for path in json_output::write_output_dir(dir, &analysis)? {
            eprintln!("Wrote {}", path.display());
        }
    }

    if args.fail_on_salient && !analysis.salient_commits.is_empty() {
        anyhow::bail!(
            "{} salient commit(s) exceed the configured thresholds",
            analysis.salient_commits.len()
        );
    }

    Ok(())
}
