use anyhow::Context as _;
use serde::Serialize;
use statmaster_stats::{
    analysis::{AnalysisOptions, SampleAnalysis},
    outliers::TUKEY_MULTIPLIER,
    stem_leaf::{self, StemRow},
};

use super::{
    args::{InputArg, OutputArg, VarianceArg},
    table,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DescribeArg {
    #[clap(flatten)]
    input: InputArg,
    #[clap(flatten)]
    variance: VarianceArg,
    /// Number of frequency classes (default: Sturges' rule)
    #[arg(long)]
    classes: Option<usize>,
    /// Tukey fence multiplier for outlier detection
    #[arg(long, default_value_t = TUKEY_MULTIPLIER)]
    fence_multiplier: f64,
    #[clap(flatten)]
    output: OutputArg,
}

#[derive(Debug, Serialize)]
struct DescribeReport<'a> {
    #[serde(flatten)]
    analysis: &'a SampleAnalysis,
    stem_and_leaf: Vec<StemRow>,
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let values = arg.input.read_numbers()?;
    let options = AnalysisOptions {
        variance_kind: arg.variance.kind(),
        num_classes: arg.classes,
        fence_multiplier: arg.fence_multiplier,
    };
    let analysis = SampleAnalysis::new(&values, &options).context("Cannot analyze input")?;
    let stem_and_leaf = stem_leaf::stem_and_leaf(&analysis.sorted)?;

    if arg.output.wants_json() {
        return arg.output.save_json(&DescribeReport {
            analysis: &analysis,
            stem_and_leaf,
        });
    }

    println!("Descriptive statistics");
    println!("======================\n");
    table::print_stats(&analysis.stats);
    println!();
    println!(
        "  Shape: {} (skewness {:.3}); {} (CV {:.2}%)",
        analysis.shape, analysis.stats.skewness.value, analysis.variability, analysis.stats.cv.value
    );
    println!();

    let summary = &analysis.summary;
    println!("Five-number summary");
    println!("===================\n");
    println!(
        "  {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Min", "Q1", "Median", "Q3", "Max"
    );
    println!(
        "  {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
        summary.min, summary.q1, summary.median, summary.q3, summary.max
    );
    println!(
        "  IQR = {:.2}, fences = [{:.2}, {:.2}]",
        analysis.quartiles.iqr, analysis.fences.lower, analysis.fences.upper
    );
    println!("  Outliers: {}", table::format_values(&analysis.outliers));
    println!();

    println!("Frequency distribution");
    println!("======================\n");
    match &analysis.distribution {
        Ok(dist) => table::print_frequency_table(dist),
        Err(err) => println!("  Not available: {err}"),
    }
    println!();

    println!("Stem and leaf");
    println!("=============\n");
    table::print_stem_leaf(&stem_and_leaf);
    Ok(())
}
