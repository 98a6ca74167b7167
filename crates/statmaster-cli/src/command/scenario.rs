use std::fmt::Write as _;

use serde::Serialize;
use statmaster_data::{parser, scenario::Scenario};

use super::args::OutputArg;
use crate::util;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ScenarioArg {
    /// Preset name: outlier, uniform, skewed, normal or grades
    #[arg(required_unless_present = "list")]
    name: Option<Scenario>,
    /// Current data; the outlier preset appends to it instead of replacing it
    #[arg(long)]
    data: Option<String>,
    /// List the available presets
    #[arg(long)]
    list: bool,
    #[clap(flatten)]
    output: OutputArg,
}

#[derive(Debug, Serialize)]
struct ScenarioReport {
    scenario: Scenario,
    tip: &'static str,
    data: Vec<f64>,
}

pub(crate) fn run(arg: &ScenarioArg) -> anyhow::Result<()> {
    let Some(scenario) = arg.name.filter(|_| !arg.list) else {
        let mut listing = String::new();
        for scenario in Scenario::ALL {
            let name = scenario.to_string();
            writeln!(&mut listing, "  {name:<10} {}", scenario.tip())?;
        }
        print!("{listing}");
        return Ok(());
    };

    let current = arg
        .data
        .as_deref()
        .map(parser::parse_numbers)
        .unwrap_or_default();
    let report = ScenarioReport {
        scenario,
        tip: scenario.tip(),
        data: scenario.apply(&current),
    };

    if arg.output.wants_json() {
        return arg.output.save_json(&report);
    }

    eprintln!("{scenario}: {}", report.tip);
    println!("{}", util::join_values(&report.data));
    Ok(())
}
