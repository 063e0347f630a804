//! Build combinations produced by the build-matrix generator.
//!
//! A [`BuildCombination`] is one cell of the matrix: a compiler release,
//! a build type, generator settings, package options and the environment
//! the build will run with. Everything except the environment is shared
//! behind `Arc` between the variants expanded from one base combination.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::compiler::CompilerId;
use crate::core::standard::CppStandard;
use crate::policy::ConfigurationError;

/// Generator settings, package options and environment all use string maps.
pub type StringMap = BTreeMap<String, String>;

/// CMake-style build type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildType {
    Debug,
    Release,
    RelWithDebInfo,
    MinSizeRel,
}

impl BuildType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
            BuildType::RelWithDebInfo => "RelWithDebInfo",
            BuildType::MinSizeRel => "MinSizeRel",
        }
    }
}

impl FromStr for BuildType {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Debug" => Ok(BuildType::Debug),
            "Release" => Ok(BuildType::Release),
            "RelWithDebInfo" => Ok(BuildType::RelWithDebInfo),
            "MinSizeRel" => Ok(BuildType::MinSizeRel),
            _ => Err(ConfigurationError::UnknownBuildType(s.to_string())),
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One build of the matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildCombination {
    /// Compiler family name, as spelled by the generator
    compiler: CompilerId,

    /// Raw compiler version; parsed when the standard table needs it
    compiler_version: String,

    /// Target architecture (x86, x86_64, armv8, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    arch: Option<String>,

    build_type: BuildType,

    /// Remaining generator settings (runtime, libcxx, ...)
    #[serde(default)]
    settings: Arc<StringMap>,

    #[serde(default)]
    options: Arc<StringMap>,

    /// Environment for this build, owned by each variant
    #[serde(default)]
    env: StringMap,

    /// References of tool packages needed to build
    #[serde(default)]
    build_requires: Arc<Vec<String>>,
}

impl BuildCombination {
    /// Create a combination with empty settings, options, env and requirements.
    pub fn new(
        compiler: impl Into<CompilerId>,
        compiler_version: impl Into<String>,
        build_type: BuildType,
    ) -> Self {
        BuildCombination {
            compiler: compiler.into(),
            compiler_version: compiler_version.into(),
            arch: None,
            build_type,
            settings: Arc::default(),
            options: Arc::default(),
            env: StringMap::new(),
            build_requires: Arc::default(),
        }
    }

    pub fn with_arch(mut self, arch: impl Into<String>) -> Self {
        self.arch = Some(arch.into());
        self
    }

    pub fn with_settings(mut self, settings: StringMap) -> Self {
        self.settings = Arc::new(settings);
        self
    }

    pub fn with_options(mut self, options: StringMap) -> Self {
        self.options = Arc::new(options);
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn with_build_requires(mut self, requires: Vec<String>) -> Self {
        self.build_requires = Arc::new(requires);
        self
    }

    pub fn compiler(&self) -> &CompilerId {
        &self.compiler
    }

    pub fn compiler_version(&self) -> &str {
        &self.compiler_version
    }

    pub fn arch(&self) -> Option<&str> {
        self.arch.as_deref()
    }

    pub fn build_type(&self) -> BuildType {
        self.build_type
    }

    pub fn settings(&self) -> &StringMap {
        &self.settings
    }

    pub fn options(&self) -> &StringMap {
        &self.options
    }

    pub fn env(&self) -> &StringMap {
        &self.env
    }

    /// Mutable access to this combination's own environment.
    pub fn env_mut(&mut self) -> &mut StringMap {
        &mut self.env
    }

    pub fn build_requires(&self) -> &[String] {
        &self.build_requires
    }

    /// Derive a variant that selects `std` through the environment variable `var`.
    ///
    /// The variant gets its own copy of the environment; settings, options
    /// and build requirements stay shared with `self`.
    pub fn variant_for(&self, var: &str, std: CppStandard) -> Self {
        let mut variant = self.clone();
        variant.env.insert(var.to_string(), std.label().to_string());
        variant
    }

    /// Whether `other` shares this combination's read-only parts.
    pub fn shares_base_with(&self, other: &BuildCombination) -> bool {
        Arc::ptr_eq(&self.settings, &other.settings)
            && Arc::ptr_eq(&self.options, &other.options)
            && Arc::ptr_eq(&self.build_requires, &other.build_requires)
    }
}

impl fmt::Display for BuildCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.compiler, self.compiler_version)?;
        if let Some(ref arch) = self.arch {
            write!(f, " {}", arch)?;
        }
        write!(f, " {}", self.build_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gcc7() -> BuildCombination {
        let mut options = StringMap::new();
        options.insert("throwing_ptr:shared".to_string(), "False".to_string());
        let mut settings = StringMap::new();
        settings.insert("compiler.libcxx".to_string(), "libstdc++11".to_string());
        BuildCombination::new("gcc", "7", BuildType::Release)
            .with_arch("x86_64")
            .with_settings(settings)
            .with_options(options)
            .with_env("CONAN_CPU_COUNT", "4")
            .with_build_requires(vec!["catch2/2.1.2@bincrafters/stable".to_string()])
    }

    #[test]
    fn test_variant_copies_environment() {
        let base = gcc7();
        let mut v11 = base.variant_for("CXX_STANDARD", CppStandard::Cpp11);
        let v14 = base.variant_for("CXX_STANDARD", CppStandard::Cpp14);

        v11.env_mut().insert("EXTRA".to_string(), "1".to_string());

        assert_eq!(v11.env().get("CXX_STANDARD").unwrap(), "11");
        assert_eq!(v14.env().get("CXX_STANDARD").unwrap(), "14");
        assert!(!v14.env().contains_key("EXTRA"));
        assert!(!base.env().contains_key("CXX_STANDARD"));
        assert_eq!(v14.env().get("CONAN_CPU_COUNT").unwrap(), "4");
    }

    #[test]
    fn test_variant_shares_read_only_parts() {
        let base = gcc7();
        let variant = base.variant_for("CXX_STANDARD", CppStandard::Cpp17);
        assert!(variant.shares_base_with(&base));
        assert_eq!(variant.compiler(), base.compiler());
        assert_eq!(variant.build_type(), base.build_type());
        assert_eq!(
            variant.settings().get("compiler.libcxx").unwrap(),
            "libstdc++11"
        );
    }

    #[test]
    fn test_deserialize_minimal() {
        let combo: BuildCombination = serde_json::from_str(
            r#"{"compiler": "clang", "compiler_version": "3.9", "build_type": "Debug"}"#,
        )
        .unwrap();
        assert_eq!(combo.compiler().as_str(), "clang");
        assert_eq!(combo.build_type(), BuildType::Debug);
        assert!(combo.arch().is_none());
        assert!(combo.options().is_empty());
        assert!(combo.build_requires().is_empty());
    }

    #[test]
    fn test_deserialize_rejects_unknown_build_type() {
        let result: Result<BuildCombination, _> = serde_json::from_str(
            r#"{"compiler": "gcc", "compiler_version": "7", "build_type": "Fast"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(gcc7().to_string(), "gcc 7 x86_64 Release");
    }

    #[test]
    fn test_build_type_parse() {
        assert_eq!("Debug".parse::<BuildType>().unwrap(), BuildType::Debug);
        assert!("debug".parse::<BuildType>().is_err());
    }
}
