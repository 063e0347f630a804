//! `stdmatrix standards` command

use std::path::Path;

use anyhow::Result;

use crate::cli::StandardsArgs;
use crate::commands::load_settings;
use stdmatrix::core::{CompilerFamily, CompilerId, VersionParsing};
use stdmatrix::policy::StandardTable;
use stdmatrix::util::diagnostic::{emit, Diagnostic};

pub fn execute(args: StandardsArgs, config_path: Option<&Path>, color: bool) -> Result<()> {
    let config = load_settings(config_path)?;

    let parsing = if args.lenient {
        VersionParsing::Lenient
    } else {
        config.matrix.version_parsing.unwrap_or_default()
    };

    let compiler = CompilerId::new(args.compiler);
    if compiler.family() == CompilerFamily::Other {
        emit(
            &Diagnostic::warning(format!(
                "compiler `{}` is not in the standard table, assuming C++11 only",
                compiler
            )),
            color,
        );
    }

    let standards = StandardTable::Versioned.standards_for_with(&compiler, &args.version, parsing)?;

    for label in standards.labels() {
        println!("{}", label);
    }

    Ok(())
}
