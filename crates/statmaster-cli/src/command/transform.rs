use anyhow::Context as _;
use statmaster_data::transform;
use statmaster_stats::{analysis::AnalysisOptions, outliers::TUKEY_MULTIPLIER};

use super::args::{InputArg, OutputArg, VarianceArg};
use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct TransformArg {
    #[clap(flatten)]
    input: InputArg,
    #[clap(flatten)]
    operation: Operation,
    #[clap(flatten)]
    variance: VarianceArg,
    /// Seed for the noise position
    #[arg(long)]
    seed: Option<u64>,
    #[clap(flatten)]
    output: OutputArg,
}

#[derive(Debug, Clone, clap::Args)]
#[group(required = true, multiple = false)]
struct Operation {
    /// Add a constant to every value
    #[arg(long, value_name = "CONSTANT", allow_negative_numbers = true)]
    add: Option<f64>,
    /// Multiply every value by a factor
    #[arg(long, value_name = "FACTOR", allow_negative_numbers = true)]
    multiply: Option<f64>,
    /// Convert values to z-scores
    #[arg(long)]
    standardize: bool,
    /// Append the numbers in this text
    #[arg(long, value_name = "VALUES")]
    merge: Option<String>,
    /// Add an amount to one randomly chosen value
    #[arg(long, value_name = "AMOUNT", allow_negative_numbers = true)]
    noise: Option<f64>,
    /// Drop values outside the Tukey fences
    #[arg(long)]
    remove_outliers: bool,
}

pub(crate) fn run(arg: &TransformArg) -> anyhow::Result<()> {
    let values = arg.input.read_numbers()?;
    let op = &arg.operation;
    let result = if let Some(constant) = op.add {
        transform::add_constant(&values, constant)
    } else if let Some(factor) = op.multiply {
        transform::multiply(&values, factor)
    } else if op.standardize {
        transform::standardize(&values, arg.variance.kind()).context("Cannot standardize")?
    } else if let Some(text) = &op.merge {
        transform::merge(&values, text).context("Cannot merge")?
    } else if let Some(amount) = op.noise {
        transform::add_noise(&mut util::rng_from_seed(arg.seed), &values, amount)
    } else {
        let options = AnalysisOptions {
            variance_kind: arg.variance.kind(),
            num_classes: None,
            fence_multiplier: TUKEY_MULTIPLIER,
        };
        let cleaned =
            transform::remove_outliers(&values, &options).context("Cannot remove outliers")?;
        tracing::info!(removed = values.len() - cleaned.len(), "removed outliers");
        cleaned
    };

    if arg.output.wants_json() {
        return arg.output.save_json(&result);
    }
    println!("{}", util::join_values(&result));
    Ok(())
}
