//! Compiler identities and versions.
//!
//! The build-matrix generator names compilers with free-form strings
//! (`gcc`, `clang`, `apple-clang`, `Visual Studio`, ...). [`CompilerId`]
//! keeps the exact spelling so a combination round-trips unchanged,
//! while [`CompilerFamily`] is what the standard table dispatches on.

use std::fmt;
use std::str::FromStr;

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::policy::ConfigurationError;

/// The family of a compiler, as far as standard selection is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompilerFamily {
    /// GCC (GNU Compiler Collection)
    Gcc,
    /// Clang/LLVM
    Clang,
    /// Apple Clang (macOS)
    AppleClang,
    /// Microsoft Visual C++ named by IDE release (`Visual Studio` 14, 15, ...)
    VisualStudio,
    /// Microsoft Visual C++ named by toolset (`msvc` 190, 191, ...)
    Msvc,
    /// Any compiler the standard table does not know about
    Other,
}

/// A compiler name exactly as the generator spelled it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompilerId(String);

impl CompilerId {
    pub fn new(name: impl Into<String>) -> Self {
        CompilerId(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify this identity. Matching is exact, like the generator's settings.
    pub fn family(&self) -> CompilerFamily {
        match self.0.as_str() {
            "gcc" => CompilerFamily::Gcc,
            "clang" => CompilerFamily::Clang,
            "apple-clang" => CompilerFamily::AppleClang,
            "Visual Studio" => CompilerFamily::VisualStudio,
            "msvc" => CompilerFamily::Msvc,
            _ => CompilerFamily::Other,
        }
    }

    /// Whether this is either spelling of the MSVC family.
    pub fn is_msvc(&self) -> bool {
        matches!(
            self.family(),
            CompilerFamily::VisualStudio | CompilerFamily::Msvc
        )
    }
}

impl From<&str> for CompilerId {
    fn from(s: &str) -> Self {
        CompilerId::new(s)
    }
}

impl fmt::Display for CompilerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How version strings that are not clean dotted numbers are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionParsing {
    /// Reject anything but 1 to 3 all-digit components.
    #[default]
    Strict,
    /// Take the leading digits of each component and never fail.
    Lenient,
}

impl FromStr for VersionParsing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(VersionParsing::Strict),
            "lenient" => Ok(VersionParsing::Lenient),
            _ => Err(format!(
                "invalid version parsing mode '{}', valid values: strict, lenient",
                s
            )),
        }
    }
}

/// A numerically ordered compiler version.
///
/// Missing components are zero, so `7`, `7.0` and `7.0.0` are equal and
/// `10.0` sorts above `5.0`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompilerVersion(Version);

impl CompilerVersion {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        CompilerVersion(Version::new(major, minor, patch))
    }

    /// Parse a version that must be 1 to 3 dot-separated numbers.
    pub fn parse_strict(compiler: &CompilerId, s: &str) -> Result<Self, ConfigurationError> {
        let invalid = |reason: &str| ConfigurationError::InvalidVersion {
            compiler: compiler.to_string(),
            version: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid("version is empty"));
        }

        let parts: Vec<&str> = trimmed.split('.').collect();
        if parts.len() > 3 {
            return Err(invalid("more than three components"));
        }

        let mut numbers = [0u64; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            if part.is_empty() {
                return Err(invalid("empty component"));
            }
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid(&format!("component '{}' is not a number", part)));
            }
            *slot = part
                .parse()
                .map_err(|_| invalid(&format!("component '{}' is out of range", part)))?;
        }

        Ok(CompilerVersion::new(numbers[0], numbers[1], numbers[2]))
    }

    /// Best-effort parse: leading digits of each of the first three components.
    ///
    /// Returns the version and whether the input was anything strict
    /// parsing would reject (empty, empty components, extra components,
    /// stray characters).
    pub fn parse_lenient(s: &str) -> (Self, bool) {
        let mut numbers = [0u64; 3];
        let parts: Vec<&str> = s.trim().split('.').collect();
        let mut lossy = parts.len() > 3;

        for (slot, part) in numbers.iter_mut().zip(&parts) {
            let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
            match digits.parse() {
                Ok(n) if digits.len() == part.len() => *slot = n,
                Ok(n) => {
                    *slot = n;
                    lossy = true;
                }
                Err(_) => lossy = true,
            }
        }

        (CompilerVersion::new(numbers[0], numbers[1], numbers[2]), lossy)
    }

    /// Parse according to `mode`; lenient parsing logs what it dropped.
    pub fn parse(
        compiler: &CompilerId,
        s: &str,
        mode: VersionParsing,
    ) -> Result<Self, ConfigurationError> {
        match mode {
            VersionParsing::Strict => Self::parse_strict(compiler, s),
            VersionParsing::Lenient => {
                let (version, lossy) = Self::parse_lenient(s);
                if lossy {
                    tracing::warn!(
                        "compiler {} version '{}' is not a clean dotted number, using {}",
                        compiler,
                        s,
                        version
                    );
                }
                Ok(version)
            }
        }
    }
}

impl fmt::Display for CompilerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
