use std::{
    fs::{self, File},
    io::{self, BufWriter, Read as _, Write},
    path::Path,
};

use anyhow::Context;
use rand::SeedableRng as _;
use rand_pcg::Pcg32;
use serde::Serialize;

/// Where a JSON report is written: stdout, or the file given with `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTarget<'a> {
    Stdout,
    File(&'a Path),
}

impl<'a> ReportTarget<'a> {
    #[must_use]
    pub fn new(path: Option<&'a Path>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }

    pub fn write<T: Serialize>(self, report: &T) -> anyhow::Result<()> {
        match self {
            Self::Stdout => {
                write_report(io::stdout().lock(), report).context("Failed to write JSON to stdout")
            }
            Self::File(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                write_report(BufWriter::new(file), report)
                    .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
                tracing::info!(path = %path.display(), "wrote JSON report");
                Ok(())
            }
        }
    }
}

/// Pretty JSON followed by a newline, flushed.
fn write_report<W: Write, T: Serialize>(mut writer: W, report: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()
}

/// Input text from the command line, a file, or stdin, in that order of preference.
pub fn read_input(inline: Option<&str>, file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(text) = inline {
        return Ok(text.to_owned());
    }
    if let Some(path) = file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read input from stdin")?;
    Ok(text)
}

/// Generator seeded from `seed`, or from the thread-local generator when absent.
pub fn rng_from_seed(seed: Option<u64>) -> Pcg32 {
    match seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded generator");
            Pcg32::seed_from_u64(seed)
        }
        None => Pcg32::from_rng(&mut rand::rng()),
    }
}

/// Joins values the way they are typed into the input box.
pub fn join_values(values: &[f64]) -> String {
    values
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use rand::Rng as _;

    use super::*;

    #[derive(Serialize)]
    struct Counts {
        n: u64,
        values: Vec<f64>,
    }

    #[test]
    fn test_report_target_from_path() {
        assert_eq!(ReportTarget::new(None), ReportTarget::Stdout);
        let path = Path::new("report.json");
        assert_eq!(ReportTarget::new(Some(path)), ReportTarget::File(path));
    }

    #[test]
    fn test_report_is_pretty_json_line() {
        let mut buf = Vec::new();
        let report = Counts {
            n: 2,
            values: vec![1.5, -2.0],
        };
        write_report(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\n  \"n\": 2"));
        let parsed = serde_json::from_str::<serde_json::Value>(&text).unwrap();
        assert_eq!(parsed["values"][1], -2.0);
    }

    #[test]
    fn test_report_written_to_file() {
        let path = std::env::temp_dir().join(format!("statmaster-report-{}.json", std::process::id()));
        let report = Counts {
            n: 1,
            values: vec![3.0],
        };
        ReportTarget::File(&path).write(&report).unwrap();
        let parsed =
            serde_json::from_str::<serde_json::Value>(&fs::read_to_string(&path).unwrap()).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(parsed["n"], 1);
    }

    #[test]
    fn test_unwritable_report_path_is_reported() {
        let path = Path::new("/nonexistent/statmaster/report.json");
        let err = ReportTarget::File(path).write(&Counts { n: 0, values: vec![] }).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/statmaster/report.json"));
    }

    #[test]
    fn test_inline_input_wins() {
        let text = read_input(Some("1, 2"), Some(Path::new("/nonexistent"))).unwrap();
        assert_eq!(text, "1, 2");
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = read_input(None, Some(Path::new("/nonexistent/statmaster.txt"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/statmaster.txt"));
    }

    #[test]
    fn test_seeded_rng_repeats() {
        let a = rng_from_seed(Some(42)).random::<u64>();
        let b = rng_from_seed(Some(42)).random::<u64>();
        assert_eq!(a, b);
    }

    #[test]
    fn test_join_values() {
        assert_eq!(join_values(&[1.0, 2.5, -3.0]), "1, 2.5, -3");
        assert_eq!(join_values(&[]), "");
    }
}
