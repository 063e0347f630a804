//! Implementation of `stdmatrix expand`.
//!
//! Turns the generator's base combinations into the list of builds to run:
//! excluded combinations are dropped, MSVC-family combinations pass through
//! untouched, and every other combination becomes one variant per standard
//! its compiler supports, in ascending order.

use std::fmt;

use crate::core::BuildCombination;
use crate::policy::{ConfigurationError, MatrixPolicy};

/// Counts from one expansion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandSummary {
    /// Base combinations received
    pub base: usize,
    /// Base combinations dropped by the exclusion policy
    pub excluded: usize,
    /// MSVC-family combinations emitted unchanged
    pub passed_through: usize,
    /// Variants produced by standard expansion
    pub variants: usize,
}

impl ExpandSummary {
    /// Total number of output combinations.
    pub fn total(&self) -> usize {
        self.passed_through + self.variants
    }
}

impl fmt::Display for ExpandSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} base combinations -> {} builds ({} excluded, {} passed through, {} standard variants)",
            self.base,
            self.total(),
            self.excluded,
            self.passed_through,
            self.variants
        )
    }
}

/// Expand base combinations into the final build list.
///
/// Order is preserved: each surviving base combination's outputs appear
/// contiguously, where it appeared in the input. A version that cannot be
/// parsed aborts the whole expansion.
pub fn expand(
    raw: &[BuildCombination],
    policy: &MatrixPolicy,
) -> Result<Vec<BuildCombination>, ConfigurationError> {
    expand_with_summary(raw, policy).map(|(builds, _)| builds)
}

/// [`expand`], also returning what happened to each input.
pub fn expand_with_summary(
    raw: &[BuildCombination],
    policy: &MatrixPolicy,
) -> Result<(Vec<BuildCombination>, ExpandSummary), ConfigurationError> {
    let mut summary = ExpandSummary {
        base: raw.len(),
        ..ExpandSummary::default()
    };
    let mut builds = Vec::with_capacity(raw.len());

    for combination in raw {
        if policy.exclusion.excludes(combination) {
            tracing::debug!("excluding {}", combination);
            summary.excluded += 1;
            continue;
        }

        if combination.compiler().is_msvc() {
            tracing::debug!("passing through {}", combination);
            summary.passed_through += 1;
            builds.push(combination.clone());
            continue;
        }

        let standards = policy.table.standards_for_with(
            combination.compiler(),
            combination.compiler_version(),
            policy.version_parsing,
        )?;

        tracing::debug!("expanding {} into C++ {}", combination, standards);

        for std in standards.iter() {
            builds.push(combination.variant_for(&policy.std_var, std));
            summary.variants += 1;
        }
    }

    Ok((builds, summary))
}
