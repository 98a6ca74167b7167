use anyhow::Context as _;
use serde::Serialize;
use statmaster_stats::{
    descriptive::DescriptiveStats,
    frequency::{FrequencyDistribution, OgivePoint},
};

use super::{
    args::{InputArg, OutputArg, VarianceArg},
    table,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct FrequencyArg {
    #[clap(flatten)]
    input: InputArg,
    /// Number of classes (default: Sturges' rule)
    #[arg(long)]
    classes: Option<usize>,
    /// Replace the frequency of a class, as CLASS=FREQUENCY (repeatable)
    #[arg(long = "set", value_name = "CLASS=FREQUENCY", value_parser = parse_edit)]
    edits: Vec<(usize, u64)>,
    /// Also print the cumulative percentage curve
    #[arg(long)]
    ogive: bool,
    /// Also compute grouped statistics from the class table
    #[arg(long)]
    grouped_stats: bool,
    #[clap(flatten)]
    variance: VarianceArg,
    #[clap(flatten)]
    output: OutputArg,
}

fn parse_edit(s: &str) -> Result<(usize, u64), String> {
    let (class, frequency) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CLASS=FREQUENCY, got `{s}`"))?;
    let class = class
        .trim()
        .parse()
        .map_err(|e| format!("invalid class index `{class}`: {e}"))?;
    let frequency = frequency
        .trim()
        .parse()
        .map_err(|e| format!("invalid frequency `{frequency}`: {e}"))?;
    Ok((class, frequency))
}

#[derive(Debug, Serialize)]
struct FrequencyReport {
    distribution: FrequencyDistribution,
    #[serde(skip_serializing_if = "Option::is_none")]
    ogive: Option<Vec<OgivePoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    grouped_stats: Option<DescriptiveStats>,
}

pub(crate) fn run(arg: &FrequencyArg) -> anyhow::Result<()> {
    let values = arg.input.read_numbers()?;
    let mut distribution = FrequencyDistribution::new(&values, arg.classes)
        .context("Cannot build frequency distribution")?;
    for &(class, frequency) in &arg.edits {
        tracing::debug!(class, frequency, "editing class frequency");
        distribution = distribution
            .with_frequency(class, frequency)
            .with_context(|| format!("Cannot edit class {class}"))?;
    }

    let ogive = arg.ogive.then(|| distribution.ogive());
    let grouped_stats = if arg.grouped_stats {
        let stats = DescriptiveStats::from_grouped(
            &distribution.to_grouped_table(),
            arg.variance.kind(),
        )
        .context("Cannot compute grouped statistics")?;
        Some(stats)
    } else {
        None
    };

    if arg.output.wants_json() {
        return arg.output.save_json(&FrequencyReport {
            distribution,
            ogive,
            grouped_stats,
        });
    }

    println!("Frequency distribution");
    println!("======================\n");
    table::print_frequency_table(&distribution);
    if let Some(points) = &ogive {
        println!();
        println!("Ogive");
        println!("=====\n");
        table::print_ogive(points);
    }
    if let Some(stats) = &grouped_stats {
        println!();
        println!("Grouped statistics");
        println!("==================\n");
        table::print_stats(stats);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edit() {
        assert_eq!(parse_edit("2=7"), Ok((2, 7)));
        assert_eq!(parse_edit(" 0 = 0 "), Ok((0, 0)));
        assert!(parse_edit("2").is_err());
        assert!(parse_edit("a=1").is_err());
        assert!(parse_edit("1=-3").is_err());
    }
}
