//! C++ language standards and ordered standard sets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::policy::ConfigurationError;

/// C++ standard version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CppStandard {
    /// C++11
    #[serde(rename = "11", alias = "c++11", alias = "cpp11")]
    Cpp11,
    /// C++14
    #[serde(rename = "14", alias = "c++14", alias = "cpp14")]
    Cpp14,
    /// C++17
    #[serde(rename = "17", alias = "c++17", alias = "cpp17")]
    Cpp17,
}

impl CppStandard {
    /// The value injected into the standard-selection variable (e.g. "17").
    pub fn label(&self) -> &'static str {
        match self {
            CppStandard::Cpp11 => "11",
            CppStandard::Cpp14 => "14",
            CppStandard::Cpp17 => "17",
        }
    }
}

impl FromStr for CppStandard {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "11" | "c++11" | "cpp11" => Ok(CppStandard::Cpp11),
            "14" | "c++14" | "cpp14" => Ok(CppStandard::Cpp14),
            "17" | "c++17" | "cpp17" => Ok(CppStandard::Cpp17),
            _ => Err(ConfigurationError::UnknownStandard(s.to_string())),
        }
    }
}

impl fmt::Display for CppStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C++{}", self.label())
    }
}

/// A non-empty, strictly ascending set of standards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StandardSet(Vec<CppStandard>);

impl StandardSet {
    /// Build a set from any collection of standards.
    ///
    /// Returns `None` for an empty input; duplicates collapse.
    pub fn new(standards: impl IntoIterator<Item = CppStandard>) -> Option<Self> {
        let mut standards: Vec<_> = standards.into_iter().collect();
        standards.sort();
        standards.dedup();
        if standards.is_empty() {
            None
        } else {
            Some(StandardSet(standards))
        }
    }

    /// The fallback for compilers nobody has classified: C++11 only.
    pub fn minimal() -> Self {
        StandardSet(vec![CppStandard::Cpp11])
    }

    pub(crate) fn from_static(standards: &'static [CppStandard]) -> Self {
        StandardSet::new(standards.iter().copied()).unwrap_or_else(StandardSet::minimal)
    }

    pub fn iter(&self) -> impl Iterator<Item = CppStandard> + '_ {
        self.0.iter().copied()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.0.iter().map(|s| s.label()).collect()
    }
}

impl fmt::Display for StandardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.labels().join(", "))
    }
}
