use anyhow::{Context as _, ensure};
use serde::Serialize;
use statmaster_stats::percentiles::{self, Percentiles};

use super::args::{InputArg, OutputArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PercentileArg {
    #[clap(flatten)]
    input: InputArg,
    /// Percentile points to compute, 0 to 100
    #[arg(long = "at", value_name = "P", value_delimiter = ',', default_values_t = [10.0, 25.0, 50.0, 75.0, 90.0])]
    points: Vec<f64>,
    /// Values whose percentile rank to report
    #[arg(long = "rank", value_name = "VALUE", value_delimiter = ',', allow_negative_numbers = true)]
    ranks: Vec<f64>,
    /// Share of the sample inside a closed range
    #[arg(long, num_args = 2, value_names = ["LOW", "HIGH"], allow_negative_numbers = true)]
    range: Option<Vec<f64>>,
    #[clap(flatten)]
    output: OutputArg,
}

#[derive(Debug, Serialize)]
struct RankEntry {
    value: f64,
    percentile_rank: f64,
}

#[derive(Debug, Serialize)]
struct RangeShare {
    low: f64,
    high: f64,
    percent: f64,
}

#[derive(Debug, Serialize)]
struct PercentileReport {
    percentiles: Percentiles,
    ranks: Vec<RankEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<RangeShare>,
}

pub(crate) fn run(arg: &PercentileArg) -> anyhow::Result<()> {
    let mut sorted = arg.input.read_numbers()?;
    ensure!(!sorted.is_empty(), "No numeric values in input");
    sorted.sort_by(f64::total_cmp);

    let percentiles = Percentiles::from_sorted(&sorted, &arg.points)
        .context("Cannot compute percentiles")?;
    let ranks = arg
        .ranks
        .iter()
        .map(|&value| {
            percentiles::percentile_rank(&sorted, value).map(|percentile_rank| RankEntry {
                value,
                percentile_rank,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let range = match arg.range.as_deref() {
        Some(&[low, high]) => Some(RangeShare {
            low,
            high,
            percent: percentiles::share_in_range(&sorted, low, high)?,
        }),
        _ => None,
    };
    let report = PercentileReport {
        percentiles,
        ranks,
        range,
    };

    if arg.output.wants_json() {
        return arg.output.save_json(&report);
    }

    println!("Percentiles (n = {})", sorted.len());
    println!("===========\n");
    println!("  {:>8} {:>12}", "P", "Value");
    for (p, value) in report.percentiles.iter() {
        println!("  {:>8} {:>12.3}", format!("P{p}"), value);
    }
    if !report.ranks.is_empty() {
        println!();
        println!("  {:>12} {:>15}", "Value", "Percentile rank");
        for entry in &report.ranks {
            println!("  {:>12.3} {:>14.1}%", entry.value, entry.percentile_rank);
        }
    }
    if let Some(share) = &report.range {
        println!();
        println!(
            "  {:.1}% of values lie in [{}, {}]",
            share.percent, share.low, share.high
        );
    }
    Ok(())
}
