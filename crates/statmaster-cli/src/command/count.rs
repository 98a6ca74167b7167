use anyhow::Context as _;
use statmaster_combinatorics::{CountingQuery, MAX_ENUMERATION_ITEMS, to_f64_lossy};

use super::args::OutputArg;

/// Digits beyond which counts are also shown in scientific notation.
const MAX_PLAIN_DIGITS: usize = 15;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CountArg {
    /// Size of the pool (at most 170)
    #[arg(allow_negative_numbers = true)]
    n: i64,
    /// Number of items selected
    #[arg(allow_negative_numbers = true)]
    r: i64,
    #[clap(flatten)]
    output: OutputArg,
}

pub(crate) fn run(arg: &CountArg) -> anyhow::Result<()> {
    let query = CountingQuery::new(arg.n, arg.r).context("Invalid counting request")?;
    let report = query.report();

    if arg.output.wants_json() {
        return arg.output.save_json(&report);
    }

    println!("Choosing r = {} from n = {}", report.r, report.n);
    for (label, count) in [
        ("Permutations P(n, r)", &report.permutations),
        ("Combinations C(n, r)", &report.combinations),
    ] {
        let digits = count.to_string();
        if digits.len() > MAX_PLAIN_DIGITS {
            println!("  {label:<22} {digits} (≈ {:.4e})", to_f64_lossy(count));
        } else {
            println!("  {label:<22} {digits}");
        }
    }

    match &report.enumeration {
        Some(listed) => {
            let join = |sets: &[Vec<char>]| {
                sets.iter()
                    .map(|set| set.iter().collect::<String>())
                    .collect::<Vec<_>>()
                    .join(" ")
            };
            println!();
            println!("  Permutations: {}", join(&listed.permutations));
            println!("  Combinations: {}", join(&listed.combinations));
        }
        None => println!("  (listing only for n <= {MAX_ENUMERATION_ITEMS})"),
    }
    Ok(())
}
