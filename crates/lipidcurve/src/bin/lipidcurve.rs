//! CLI for charting a cholesterol distribution.
//!
//! # Usage
//!
//! ```bash
//! # Reference chart: 200 ± 40 mg/dL, threshold 184, mean ± 4σ
//! cargo run --bin lipidcurve
//!
//! # Fixed 100-300 mg/dL window with a narrower spread
//! cargo run --bin lipidcurve -- --preset fixed-window
//!
//! # Estimate mean and spread from a CSV of readings
//! cargo run --bin lipidcurve -- --readings readings.csv --header --column 1
//!
//! # Numbers only, as JSON
//! cargo run --bin lipidcurve -- --mean 190 --std-dev 30 --no-chart --json
//! ```

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use lipidcurve::output::{format_summary, to_json_pretty};
use lipidcurve::{
    CholesterolChart, DistributionParameters, GridRange, ReadingsCsvSource, SvgRenderer,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
    /// 200 ± 40 mg/dL over mean ± 4σ, percent-of-population axis
    Nhanes,
    /// 200 ± 35 mg/dL over 100-300 mg/dL, raw density axis
    FixedWindow,
}

/// Chart the population distribution of total cholesterol around a threshold
#[derive(Parser, Debug)]
#[command(name = "lipidcurve")]
#[command(about = "Chart the assumed population distribution of total cholesterol")]
#[command(version)]
struct Args {
    /// Starting configuration
    #[arg(short, long, value_enum, default_value = "nhanes")]
    preset: Preset,

    /// Population mean in mg/dL (overrides preset)
    #[arg(long, conflicts_with = "readings")]
    mean: Option<f64>,

    /// Population standard deviation in mg/dL (overrides preset)
    #[arg(long, conflicts_with = "readings")]
    std_dev: Option<f64>,

    /// Threshold in mg/dL (overrides preset)
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Number of grid points
    #[arg(short, long)]
    samples: Option<usize>,

    /// Grid spans mean ± this many standard deviations
    #[arg(long, conflicts_with = "range")]
    range_std_devs: Option<f64>,

    /// Grid spans a literal range in mg/dL, e.g. "100,300"
    #[arg(long, value_parser = parse_range)]
    range: Option<(f64, f64)>,

    /// CSV of total-cholesterol readings to estimate mean and spread from
    #[arg(long)]
    readings: Option<PathBuf>,

    /// First data line of the readings file is a header
    #[arg(long, requires = "readings")]
    header: bool,

    /// Zero-based column holding the reading
    #[arg(long, requires = "readings")]
    column: Option<usize>,

    /// If the readings file cannot be used, warn and keep the preset parameters
    #[arg(long, requires = "readings")]
    fallback: bool,

    /// Chart output path (overrides preset)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the curve as JSON instead of the summary
    #[arg(long)]
    json: bool,

    /// Compute only, do not write a chart
    #[arg(long)]
    no_chart: bool,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_range(s: &str) -> Result<(f64, f64), String> {
    let (lo, hi) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LO,HI, got '{}'", s))?;
    let lo: f64 = lo
        .trim()
        .parse()
        .map_err(|e| format!("invalid lower bound '{}': {}", lo.trim(), e))?;
    let hi: f64 = hi
        .trim()
        .parse()
        .map_err(|e| format!("invalid upper bound '{}': {}", hi.trim(), e))?;
    Ok((lo, hi))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_chart(args: &Args) -> anyhow::Result<CholesterolChart> {
    let mut chart = match args.preset {
        Preset::Nhanes => CholesterolChart::nhanes(),
        Preset::FixedWindow => CholesterolChart::fixed_window(),
    };

    if let Some(path) = &args.readings {
        let source = ReadingsCsvSource::new(path)
            .has_header(args.header)
            .column(args.column.unwrap_or(0));
        chart = if args.fallback {
            chart.with_source_or_fallback(source)
        } else {
            chart
                .with_source(source)
                .with_context(|| format!("reading parameters from {}", path.display()))?
        };
    }

    if args.mean.is_some() || args.std_dev.is_some() {
        let current = chart.config().params;
        chart = chart.params(DistributionParameters::new(
            args.mean.unwrap_or(current.mean()),
            args.std_dev.unwrap_or(current.std_dev()),
            current.threshold(),
        ));
    }
    if let Some(threshold) = args.threshold {
        chart = chart.threshold(threshold);
    }
    if let Some(samples) = args.samples {
        chart = chart.sample_count(samples);
    }
    if let Some(width) = args.range_std_devs {
        chart = chart.grid(GridRange::symmetric(width));
    }
    if let Some((lo, hi)) = args.range {
        chart = chart.grid(GridRange::fixed(lo, hi));
    }
    if let Some(output) = &args.output {
        chart = chart.output(output);
    }

    Ok(chart)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.no_chart && args.output.is_some() {
        bail!("--output has no effect with --no-chart");
    }

    let chart = build_chart(&args)?;

    let curve = if args.no_chart {
        chart.analyze()?
    } else {
        chart.run(&SvgRenderer::new())?
    };

    if args.json {
        println!("{}", to_json_pretty(&curve)?);
    } else {
        println!("{}", format_summary(&curve, chart.sourced()));
        if !args.no_chart {
            println!("\n  Chart: {}", chart.output_path().display());
        }
    }

    Ok(())
}
