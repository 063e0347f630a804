//! `stdmatrix expand` command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::cli::ExpandArgs;
use crate::commands::load_settings;
use stdmatrix::core::VersionParsing;
use stdmatrix::ops::{expand_with_summary, read_combinations, write_combinations, OutputFormat};

pub fn execute(args: ExpandArgs, config_path: Option<&Path>) -> Result<()> {
    let mut config = load_settings(config_path)?;

    // CLI flags override config
    if args.revision.is_some() {
        config.matrix.revision = args.revision;
    }
    if args.std_var.is_some() {
        config.matrix.std_var = args.std_var;
    }
    if args.lenient {
        config.matrix.version_parsing = Some(VersionParsing::Lenient);
    }

    let policy = config.policy()?;
    let format: OutputFormat = args.format.parse().map_err(|e: String| anyhow!(e))?;

    let raw = read_combinations(&args.input)?;
    let (builds, summary) = expand_with_summary(&raw, &policy)?;

    tracing::info!("{}", summary);

    match args.output {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file: {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_combinations(&builds, format, &mut out)?;
            out.flush()
                .with_context(|| format!("failed to write output file: {}", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_combinations(&builds, format, &mut out)?;
        }
    }

    Ok(())
}
