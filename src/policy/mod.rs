//! Matrix policy: which combinations to build and which standards to expand.
//!
//! A [`MatrixPolicy`] pairs a [`StandardTable`] with an [`ExclusionPolicy`].
//! The two are independent, so each historical behaviour of the packaging
//! pipeline is just a named combination of them (see [`PolicyRevision`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::VersionParsing;

mod errors;
mod exclusion;
mod table;

pub use errors::ConfigurationError;
pub use exclusion::ExclusionPolicy;
pub use table::{standards_for, StandardTable};

/// Environment variable the build scripts read the standard from.
pub const DEFAULT_STD_VAR: &str = "CXX_STANDARD";

/// Named policy presets, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyRevision {
    /// Every non-MSVC build gets C++11, 14 and 17; nothing is excluded.
    Fixed,
    /// Standards follow the compiler version; nothing is excluded.
    Versioned,
    /// Standards follow the compiler version; Debug builds are dropped.
    #[default]
    Latest,
}

impl PolicyRevision {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyRevision::Fixed => "fixed",
            PolicyRevision::Versioned => "versioned",
            PolicyRevision::Latest => "latest",
        }
    }

    pub fn policy(self) -> MatrixPolicy {
        let (table, exclusion) = match self {
            PolicyRevision::Fixed => (StandardTable::fixed_all(), ExclusionPolicy::KeepAll),
            PolicyRevision::Versioned => (StandardTable::Versioned, ExclusionPolicy::KeepAll),
            PolicyRevision::Latest => (StandardTable::Versioned, ExclusionPolicy::skip_debug()),
        };

        MatrixPolicy {
            table,
            exclusion,
            std_var: DEFAULT_STD_VAR.to_string(),
            version_parsing: VersionParsing::Strict,
        }
    }
}

impl FromStr for PolicyRevision {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(PolicyRevision::Fixed),
            "versioned" => Ok(PolicyRevision::Versioned),
            "latest" => Ok(PolicyRevision::Latest),
            _ => Err(ConfigurationError::UnknownRevision(s.to_string())),
        }
    }
}

impl fmt::Display for PolicyRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything `expand` needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixPolicy {
    /// Source of the standards each combination expands into
    pub table: StandardTable,
    /// Which base combinations are dropped
    pub exclusion: ExclusionPolicy,
    /// Environment variable set on each variant
    pub std_var: String,
    /// How compiler versions are parsed
    pub version_parsing: VersionParsing,
}

impl Default for MatrixPolicy {
    fn default() -> Self {
        PolicyRevision::default().policy()
    }
}

impl MatrixPolicy {
    pub fn with_exclusion(mut self, exclusion: ExclusionPolicy) -> Self {
        self.exclusion = exclusion;
        self
    }

    pub fn with_version_parsing(mut self, parsing: VersionParsing) -> Self {
        self.version_parsing = parsing;
        self
    }

    /// Use a different standard-selection variable.
    pub fn with_std_var(mut self, var: impl Into<String>) -> Result<Self, ConfigurationError> {
        let var = var.into();
        if var.is_empty() || var.contains('=') || var.chars().any(char::is_whitespace) {
            return Err(ConfigurationError::InvalidStandardVar(var));
        }
        self.std_var = var;
        Ok(self)
    }
}
