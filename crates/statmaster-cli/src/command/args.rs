//! Arguments shared by several subcommands.

use std::path::PathBuf;

use anyhow::bail;
use serde::Serialize;
use statmaster_data::parser;
use statmaster_stats::descriptive::VarianceKind;

use crate::util::{self, ReportTarget};

#[derive(Debug, Clone, Default, clap::Args)]
pub(crate) struct InputArg {
    /// Input text; read from --file or stdin when omitted
    pub values: Option<String>,
    /// Read input from this file
    #[arg(long, conflicts_with = "values")]
    pub file: Option<PathBuf>,
    /// Reject characters other than digits, ',', '.', '-' and whitespace
    #[arg(long)]
    pub strict: bool,
}

impl InputArg {
    pub fn read_text(&self) -> anyhow::Result<String> {
        util::read_input(self.values.as_deref(), self.file.as_deref())
    }

    /// Reads a number list. Unparsable tokens are skipped.
    pub fn read_numbers(&self) -> anyhow::Result<Vec<f64>> {
        let text = self.read_text()?;
        if let Err(err) = parser::validate_input(&text) {
            if self.strict {
                bail!("Invalid input: {err}");
            }
            tracing::warn!("{err}; non-numeric tokens will be skipped");
        }
        let values = parser::parse_numbers(&text);
        tracing::debug!(count = values.len(), "parsed input");
        Ok(values)
    }
}

#[derive(Debug, Clone, Copy, Default, clap::Args)]
pub(crate) struct VarianceArg {
    /// Divide the variance by n - 1 (default: only when 1 < n < 30)
    #[arg(long, conflicts_with = "population")]
    sample: bool,
    /// Divide the variance by n
    #[arg(long)]
    population: bool,
}

impl VarianceArg {
    pub fn kind(self) -> Option<VarianceKind> {
        match (self.sample, self.population) {
            (true, _) => Some(VarianceKind::Sample),
            (_, true) => Some(VarianceKind::Population),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, clap::Args)]
pub(crate) struct OutputArg {
    /// Print JSON instead of tables
    #[arg(long)]
    pub json: bool,
    /// Write JSON to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl OutputArg {
    pub fn wants_json(&self) -> bool {
        self.json || self.output.is_some()
    }

    pub fn save_json<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        ReportTarget::new(self.output.as_deref()).write(value)
    }
}
