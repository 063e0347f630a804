//! Exclusion of combinations that should never be built.

use crate::core::{BuildCombination, BuildType};

/// Decides which base combinations are dropped before expansion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExclusionPolicy {
    /// Keep everything.
    #[default]
    KeepAll,
    /// Drop combinations whose build type is listed.
    BuildTypes(Vec<BuildType>),
}

impl ExclusionPolicy {
    /// Drop Debug builds.
    pub fn skip_debug() -> Self {
        ExclusionPolicy::BuildTypes(vec![BuildType::Debug])
    }

    /// Build a policy from a list of build types; an empty list keeps everything.
    pub fn from_build_types(build_types: Vec<BuildType>) -> Self {
        if build_types.is_empty() {
            ExclusionPolicy::KeepAll
        } else {
            ExclusionPolicy::BuildTypes(build_types)
        }
    }

    pub fn excludes(&self, combination: &BuildCombination) -> bool {
        match self {
            ExclusionPolicy::KeepAll => false,
            ExclusionPolicy::BuildTypes(types) => types.contains(&combination.build_type()),
        }
    }
}
