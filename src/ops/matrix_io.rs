//! Reading and writing combination lists.
//!
//! The generator hands over a JSON array of combinations; the expanded
//! list is written back in the same shape, or as a table for humans.

use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::core::BuildCombination;

/// Output format for expanded combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON array, same shape as the input
    #[default]
    Json,
    /// One line per combination
    Table,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(format!(
                "invalid output format '{}', valid values: json, table",
                s
            )),
        }
    }
}

/// Parse a JSON array of combinations.
pub fn parse_combinations(contents: &str) -> Result<Vec<BuildCombination>> {
    if contents.trim().is_empty() {
        bail!("combination list is empty; expected a JSON array (use `[]` for no builds)");
    }
    serde_json::from_str(contents).context("failed to parse combination list")
}

/// Read combinations from a file, or from stdin when `path` is `-`.
pub fn read_combinations(path: &Path) -> Result<Vec<BuildCombination>> {
    if path.as_os_str() == "-" {
        let mut contents = String::new();
        std::io::stdin()
            .read_to_string(&mut contents)
            .context("failed to read combinations from stdin")?;
        return parse_combinations(&contents);
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read combinations: {}", path.display()))?;

    parse_combinations(&contents)
        .with_context(|| format!("invalid combination list: {}", path.display()))
}

/// Write combinations in the requested format.
pub fn write_combinations(
    builds: &[BuildCombination],
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, builds)
                .context("failed to serialize combinations")?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            for build in builds {
                writeln!(out, "{}", format_row(build))?;
            }
        }
    }
    Ok(())
}

fn format_row(build: &BuildCombination) -> String {
    let mut row = build.to_string();
    for (key, value) in build.env() {
        row.push_str(&format!(" {}={}", key, value));
    }
    row
}
