//! Standard compatibility table.
//!
//! Maps a compiler release to the C++ standards it can be asked to compile.
//! Each family has version tiers with inclusive lower bounds; the highest
//! tier the version reaches wins, otherwise the family fallback applies.
//!
//! | family        | version >= | standards    |
//! |---------------|------------|--------------|
//! | apple-clang   | 8.0        | 11, 14, 17   |
//! | apple-clang   | (else)     | 11, 14       |
//! | clang         | 5.0        | 11, 14, 17   |
//! | clang         | 3.9        | 11, 14       |
//! | clang         | (else)     | 11           |
//! | gcc           | 7          | 11, 14, 17   |
//! | gcc           | 5          | 11, 14       |
//! | gcc           | (else)     | 11           |
//! | Visual Studio | 15         | 11, 14, 17   |
//! | Visual Studio | 14         | 11, 14       |
//! | Visual Studio | (else)     | 11           |
//! | msvc          | 191        | 11, 14, 17   |
//! | msvc          | 190        | 11, 14       |
//! | msvc          | (else)     | 11           |
//! | other         | -          | 11           |
//!
//! `Visual Studio` versions are IDE releases (14 is VS2015) while `msvc`
//! versions are toolsets (190 is VS2015, 191 and up VS2017 onwards).

use crate::core::{
    CompilerFamily, CompilerId, CompilerVersion, CppStandard, StandardSet, VersionParsing,
};
use crate::policy::ConfigurationError;

const STD_11: &[CppStandard] = &[CppStandard::Cpp11];
const STD_11_14: &[CppStandard] = &[CppStandard::Cpp11, CppStandard::Cpp14];
const STD_11_14_17: &[CppStandard] =
    &[CppStandard::Cpp11, CppStandard::Cpp14, CppStandard::Cpp17];

/// A version threshold and the standards available from it upwards.
struct Tier {
    min: (u64, u64, u64),
    standards: &'static [CppStandard],
}

/// Version tiers of one family, highest first.
struct FamilyRule {
    tiers: &'static [Tier],
    fallback: &'static [CppStandard],
}

const APPLE_CLANG: FamilyRule = FamilyRule {
    tiers: &[Tier {
        min: (8, 0, 0),
        standards: STD_11_14_17,
    }],
    fallback: STD_11_14,
};

const CLANG: FamilyRule = FamilyRule {
    tiers: &[
        Tier {
            min: (5, 0, 0),
            standards: STD_11_14_17,
        },
        Tier {
            min: (3, 9, 0),
            standards: STD_11_14,
        },
    ],
    fallback: STD_11,
};

const GCC: FamilyRule = FamilyRule {
    tiers: &[
        Tier {
            min: (7, 0, 0),
            standards: STD_11_14_17,
        },
        Tier {
            min: (5, 0, 0),
            standards: STD_11_14,
        },
    ],
    fallback: STD_11,
};

const VISUAL_STUDIO: FamilyRule = FamilyRule {
    tiers: &[
        Tier {
            min: (15, 0, 0),
            standards: STD_11_14_17,
        },
        Tier {
            min: (14, 0, 0),
            standards: STD_11_14,
        },
    ],
    fallback: STD_11,
};

const MSVC_TOOLSET: FamilyRule = FamilyRule {
    tiers: &[
        Tier {
            min: (191, 0, 0),
            standards: STD_11_14_17,
        },
        Tier {
            min: (190, 0, 0),
            standards: STD_11_14,
        },
    ],
    fallback: STD_11,
};

fn rule_for(family: CompilerFamily) -> Option<&'static FamilyRule> {
    match family {
        CompilerFamily::AppleClang => Some(&APPLE_CLANG),
        CompilerFamily::Clang => Some(&CLANG),
        CompilerFamily::Gcc => Some(&GCC),
        CompilerFamily::VisualStudio => Some(&VISUAL_STUDIO),
        CompilerFamily::Msvc => Some(&MSVC_TOOLSET),
        CompilerFamily::Other => None,
    }
}

impl FamilyRule {
    fn select(&self, version: &CompilerVersion) -> &'static [CppStandard] {
        self.tiers
            .iter()
            .find(|tier| {
                let (major, minor, patch) = tier.min;
                *version >= CompilerVersion::new(major, minor, patch)
            })
            .map(|tier| tier.standards)
            .unwrap_or(self.fallback)
    }
}

/// Where a combination's standards come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StandardTable {
    /// Every compiler gets the same set regardless of version.
    Fixed(StandardSet),
    /// Per-family version tiers (see module docs).
    #[default]
    Versioned,
}

impl StandardTable {
    /// The flat list used before version-aware selection existed.
    pub fn fixed_all() -> Self {
        StandardTable::Fixed(StandardSet::from_static(STD_11_14_17))
    }

    /// Standards supported by `compiler` at `version`.
    ///
    /// The version is only parsed when the family has version tiers, so an
    /// unknown compiler resolves to C++11 whatever its version string says.
    pub fn standards_for_with(
        &self,
        compiler: &CompilerId,
        version: &str,
        parsing: VersionParsing,
    ) -> Result<StandardSet, ConfigurationError> {
        match self {
            StandardTable::Fixed(set) => Ok(set.clone()),
            StandardTable::Versioned => {
                let Some(rule) = rule_for(compiler.family()) else {
                    tracing::trace!("compiler {} not in table, using C++11", compiler);
                    return Ok(StandardSet::minimal());
                };
                let parsed = CompilerVersion::parse(compiler, version, parsing)?;
                Ok(StandardSet::from_static(rule.select(&parsed)))
            }
        }
    }

    /// Like [`standards_for_with`](Self::standards_for_with) with strict parsing.
    pub fn standards_for(
        &self,
        compiler: &CompilerId,
        version: &str,
    ) -> Result<StandardSet, ConfigurationError> {
        self.standards_for_with(compiler, version, VersionParsing::Strict)
    }
}

/// Standards supported by a compiler release, per the versioned table.
pub fn standards_for(compiler: &str, version: &str) -> Result<StandardSet, ConfigurationError> {
    StandardTable::Versioned.standards_for(&CompilerId::from(compiler), version)
}
