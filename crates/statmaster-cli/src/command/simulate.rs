use anyhow::{Context as _, ensure};
use serde::Serialize;
use statmaster_data::generator;
use statmaster_stats::analysis::{AnalysisOptions, SampleAnalysis};

use super::{args::OutputArg, table};
use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SimulateArg {
    /// Mean of the distribution
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    mean: f64,
    /// Standard deviation of the distribution
    #[arg(long, default_value_t = 10.0)]
    std_dev: f64,
    /// Number of values to draw
    #[arg(long, default_value_t = 200)]
    count: usize,
    /// Seed for a reproducible sample
    #[arg(long)]
    seed: Option<u64>,
    /// Also analyze the generated sample
    #[arg(long)]
    analyze: bool,
    #[clap(flatten)]
    output: OutputArg,
}

#[derive(Debug, Serialize)]
struct SimulateReport {
    sample: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    analysis: Option<SampleAnalysis>,
}

pub(crate) fn run(arg: &SimulateArg) -> anyhow::Result<()> {
    ensure!(arg.mean.is_finite(), "Mean must be a finite number");
    ensure!(
        arg.std_dev.is_finite() && arg.std_dev >= 0.0,
        "Standard deviation must be a non-negative number"
    );

    let mut rng = util::rng_from_seed(arg.seed);
    let sample = generator::generate_gaussian_sample_with(&mut rng, arg.mean, arg.std_dev, arg.count);
    let analysis = if arg.analyze {
        let analysis = SampleAnalysis::new(&sample, &AnalysisOptions::default())
            .context("Cannot analyze generated sample")?;
        Some(analysis)
    } else {
        None
    };
    let report = SimulateReport { sample, analysis };

    if arg.output.wants_json() {
        return arg.output.save_json(&report);
    }

    println!("{}", util::join_values(&report.sample));
    if let Some(analysis) = &report.analysis {
        println!();
        table::print_stats(&analysis.stats);
        println!();
        println!("  Outliers: {}", table::format_values(&analysis.outliers));
    }
    Ok(())
}
