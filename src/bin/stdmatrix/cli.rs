//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// stdmatrix - filter a build matrix and expand it per C++ standard
#[derive(Parser)]
#[command(name = "stdmatrix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use this config file instead of the global and project ones
    #[arg(short, long, global = true, env = "STDMATRIX_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter base combinations and expand them per C++ standard
    Expand(ExpandArgs),

    /// Show the C++ standards a compiler release supports
    Standards(StandardsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct ExpandArgs {
    /// JSON file with the base combinations (`-` for stdin)
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Policy revision (fixed, versioned, latest)
    #[arg(long)]
    pub revision: Option<String>,

    /// Accept compiler versions that are not clean dotted numbers
    #[arg(long)]
    pub lenient: bool,

    /// Environment variable that selects the standard
    #[arg(long)]
    pub std_var: Option<String>,

    /// Output format (json, table)
    #[arg(long, default_value = "json")]
    pub format: String,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct StandardsArgs {
    /// Compiler name (gcc, clang, apple-clang, "Visual Studio", msvc, ...)
    pub compiler: String,

    /// Compiler version (e.g. 7, 3.9, 15)
    pub version: String,

    /// Accept versions that are not clean dotted numbers
    #[arg(long)]
    pub lenient: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
