use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use self::{
    count::CountArg, describe::DescribeArg, dice::DiceArg, frequency::FrequencyArg,
    grouped::GroupedArg, percentile::PercentileArg, scenario::ScenarioArg,
    simulate::SimulateArg, transform::TransformArg,
};

mod args;
mod count;
mod describe;
mod dice;
mod frequency;
mod grouped;
mod percentile;
mod scenario;
mod simulate;
mod table;
mod transform;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log more detail to stderr (`-v` debug, `-vv` trace); `RUST_LOG` overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Analyze a list of numbers: statistics, quartiles, outliers and frequency table
    Describe(#[clap(flatten)] DescribeArg),
    /// Statistics of a grouped table given as `lower upper frequency` rows separated by newlines or ';'
    Grouped(#[clap(flatten)] GroupedArg),
    /// Build and edit a frequency distribution
    Frequency(#[clap(flatten)] FrequencyArg),
    /// Percentiles, percentile ranks and range shares
    Percentile(#[clap(flatten)] PercentileArg),
    /// Count and list permutations and combinations
    Count(#[clap(flatten)] CountArg),
    /// Generate a normally distributed sample
    Simulate(#[clap(flatten)] SimulateArg),
    /// Load a teaching preset
    Scenario(#[clap(flatten)] ScenarioArg),
    /// Apply an edit to every value of a sample
    Transform(#[clap(flatten)] TransformArg),
    /// Roll a die repeatedly and watch the share of sixes converge
    Dice(#[clap(flatten)] DiceArg),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);
    match args.mode {
        Mode::Describe(arg) => describe::run(&arg)?,
        Mode::Grouped(arg) => grouped::run(&arg)?,
        Mode::Frequency(arg) => frequency::run(&arg)?,
        Mode::Percentile(arg) => percentile::run(&arg)?,
        Mode::Count(arg) => count::run(&arg)?,
        Mode::Simulate(arg) => simulate::run(&arg)?,
        Mode::Scenario(arg) => scenario::run(&arg)?,
        Mode::Transform(arg) => transform::run(&arg)?,
        Mode::Dice(arg) => dice::run(&arg)?,
    }
    Ok(())
}
