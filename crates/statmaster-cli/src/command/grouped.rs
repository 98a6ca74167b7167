use anyhow::Context as _;
use serde::Serialize;
use statmaster_data::parser;
use statmaster_stats::{
    descriptive::DescriptiveStats,
    grouped::GroupedDatum,
    shape::{SkewnessShape, Variability},
};

use super::{
    args::{InputArg, OutputArg, VarianceArg},
    table,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GroupedArg {
    #[clap(flatten)]
    input: InputArg,
    #[clap(flatten)]
    variance: VarianceArg,
    #[clap(flatten)]
    output: OutputArg,
}

#[derive(Debug, Serialize)]
struct GroupedReport<'a> {
    table: &'a [GroupedDatum],
    stats: &'a DescriptiveStats,
    shape: SkewnessShape,
    variability: Variability,
}

pub(crate) fn run(arg: &GroupedArg) -> anyhow::Result<()> {
    let text = arg.input.read_text()?;
    let grouped = parser::parse_grouped_table(&text).context("Invalid grouped table")?;
    let stats = DescriptiveStats::from_grouped(&grouped, arg.variance.kind())
        .context("Cannot analyze grouped table")?;
    let report = GroupedReport {
        table: &grouped,
        stats: &stats,
        shape: SkewnessShape::classify(stats.skewness.value),
        variability: Variability::classify(stats.cv.value),
    };

    if arg.output.wants_json() {
        return arg.output.save_json(&report);
    }

    println!("Grouped table");
    println!("=============\n");
    println!("  {:>21} {:>9} {:>6}", "Limits", "Midpoint", "f");
    for row in &grouped {
        let limits = format!("{:.2} - {:.2}", row.lower, row.upper);
        println!("  {:>21} {:>9.2} {:>6}", limits, row.midpoint(), row.frequency);
    }
    println!();
    println!("Descriptive statistics");
    println!("======================\n");
    table::print_stats(&stats);
    println!();
    println!("  Shape: {}; {}", report.shape, report.variability);
    Ok(())
}
