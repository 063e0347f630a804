//! Configuration error types and diagnostics.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::Diagnostic;

/// A misconfigured matrix or policy.
///
/// None of these are retryable: the input or the configuration has to be
/// fixed, and a failure aborts the whole expansion.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum ConfigurationError {
    #[error("invalid version `{version}` for compiler `{compiler}`: {reason}")]
    #[diagnostic(
        code(stdmatrix::config::invalid_version),
        help("versions must be 1 to 3 dot-separated numbers, e.g. `7`, `3.9`, `15.9.2`")
    )]
    InvalidVersion {
        compiler: String,
        version: String,
        reason: String,
    },

    #[error("unknown build type `{0}`")]
    #[diagnostic(
        code(stdmatrix::config::unknown_build_type),
        help("valid build types: Debug, Release, RelWithDebInfo, MinSizeRel")
    )]
    UnknownBuildType(String),

    #[error("unknown C++ standard `{0}`")]
    #[diagnostic(
        code(stdmatrix::config::unknown_standard),
        help("valid standards: 11, 14, 17")
    )]
    UnknownStandard(String),

    #[error("unknown policy revision `{0}`")]
    #[diagnostic(
        code(stdmatrix::config::unknown_revision),
        help("valid revisions: fixed, versioned, latest")
    )]
    UnknownRevision(String),

    #[error("invalid standard-selection variable name `{0}`")]
    #[diagnostic(
        code(stdmatrix::config::invalid_std_var),
        help("use a non-empty name without `=` or whitespace, e.g. CXX_STANDARD")
    )]
    InvalidStandardVar(String),
}

impl ConfigurationError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ConfigurationError::InvalidVersion {
                compiler,
                version,
                reason,
            } => Diagnostic::error(format!(
                "cannot compare version `{}` of compiler `{}`",
                version, compiler
            ))
            .with_context(reason.clone())
            .with_suggestion("Fix the compiler version reported by the matrix generator")
            .with_suggestion("Pass --lenient to accept best-effort version parsing"),

            ConfigurationError::UnknownBuildType(build_type) => {
                Diagnostic::error(format!("unknown build type `{}`", build_type))
                    .with_context("valid build types: Debug, Release, RelWithDebInfo, MinSizeRel")
            }

            ConfigurationError::UnknownStandard(std) => {
                Diagnostic::error(format!("unknown C++ standard `{}`", std))
                    .with_context("valid standards: 11, 14, 17")
            }

            ConfigurationError::UnknownRevision(rev) => {
                Diagnostic::error(format!("unknown policy revision `{}`", rev))
                    .with_context("valid revisions: fixed, versioned, latest")
                    .with_suggestion("Check `revision` under [matrix] in your config.toml")
            }

            ConfigurationError::InvalidStandardVar(var) => {
                Diagnostic::error(format!("invalid standard-selection variable `{}`", var))
                    .with_context("environment variable names cannot be empty or contain `=`")
                    .with_suggestion("Use the default, CXX_STANDARD")
            }
        }
    }
}
