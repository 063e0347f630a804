//! Configuration file support for stdmatrix.
//!
//! stdmatrix supports two configuration file locations:
//! - Global: `~/.stdmatrix/config.toml` - User-wide defaults
//! - Project: `.stdmatrix/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config. An explicit
//! `--config` path replaces both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{BuildType, VersionParsing};
use crate::policy::{ConfigurationError, ExclusionPolicy, MatrixPolicy, PolicyRevision};

/// stdmatrix configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Matrix policy settings
    pub matrix: MatrixConfig,
}

/// Matrix policy settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatrixConfig {
    /// Policy preset (fixed, versioned, latest)
    pub revision: Option<String>,

    /// Environment variable that selects the standard
    pub std_var: Option<String>,

    /// Version parsing mode (strict, lenient)
    pub version_parsing: Option<VersionParsing>,

    /// Build types to drop, replacing the preset's exclusion
    pub exclude_build_types: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.matrix.revision.is_some() {
            self.matrix.revision = other.matrix.revision;
        }
        if other.matrix.std_var.is_some() {
            self.matrix.std_var = other.matrix.std_var;
        }
        if other.matrix.version_parsing.is_some() {
            self.matrix.version_parsing = other.matrix.version_parsing;
        }
        if other.matrix.exclude_build_types.is_some() {
            self.matrix.exclude_build_types = other.matrix.exclude_build_types;
        }
    }

    /// Parse the configured revision, if any.
    pub fn revision(&self) -> Result<Option<PolicyRevision>, ConfigurationError> {
        self.matrix
            .revision
            .as_deref()
            .map(|r| r.parse::<PolicyRevision>())
            .transpose()
    }

    /// Build the matrix policy these settings describe.
    pub fn policy(&self) -> Result<MatrixPolicy, ConfigurationError> {
        let mut policy = self.revision()?.unwrap_or_default().policy();

        if let Some(ref var) = self.matrix.std_var {
            policy = policy.with_std_var(var.clone())?;
        }
        if let Some(parsing) = self.matrix.version_parsing {
            policy = policy.with_version_parsing(parsing);
        }
        if let Some(ref types) = self.matrix.exclude_build_types {
            let types = types
                .iter()
                .map(|t| t.parse::<BuildType>())
                .collect::<Result<Vec<_>, _>>()?;
            policy = policy.with_exclusion(ExclusionPolicy::from_build_types(types));
        }

        Ok(policy)
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.stdmatrix/config.toml)
/// 2. Global config (~/.stdmatrix/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        let global = Config::load_or_default(global_path);
        config.merge(global);
    }

    if project_path.exists() {
        let project = Config::load_or_default(project_path);
        config.merge(project);
    }

    config
}

/// Get the global stdmatrix config directory (~/.stdmatrix).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".stdmatrix"))
}

/// Get the global config path (~/.stdmatrix/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.stdmatrix/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".stdmatrix").join("config.toml")
}
