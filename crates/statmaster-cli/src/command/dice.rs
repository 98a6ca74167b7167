use serde::Serialize;
use statmaster_data::experiment::{ConvergencePoint, DiceExperiment, FaceCount};

use super::args::OutputArg;
use crate::util;

/// Probability of a six with a fair die, in percent.
const EXPECTED_SIX_PERCENT: f64 = 100.0 / 6.0;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DiceArg {
    /// Number of rolls
    #[arg(long, default_value_t = 100)]
    times: usize,
    /// Seed for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,
    #[clap(flatten)]
    output: OutputArg,
}

#[derive(Debug, Serialize)]
struct DiceReport {
    rolls: usize,
    faces: Vec<FaceCount>,
    convergence: Vec<ConvergencePoint>,
}

pub(crate) fn run(arg: &DiceArg) -> anyhow::Result<()> {
    let mut experiment = DiceExperiment::new();
    experiment.roll(&mut util::rng_from_seed(arg.seed), arg.times);
    let report = DiceReport {
        rolls: experiment.rolls().len(),
        faces: experiment.face_counts(),
        convergence: experiment.convergence(),
    };

    if arg.output.wants_json() {
        return arg.output.save_json(&report);
    }

    println!("{} rolls", report.rolls);
    println!("  {:>4} {:>8} {:>8}", "Face", "Count", "Share");
    for face in &report.faces {
        println!(
            "  {:>4} {:>8} {:>7.1}%",
            face.face, face.count, face.percentage
        );
    }
    if let Some(six) = report.faces.last().filter(|_| report.rolls > 0) {
        println!();
        println!(
            "  Share of sixes: {:.2}% (expected {:.2}%)",
            six.percentage, EXPECTED_SIX_PERCENT
        );
    }
    Ok(())
}
