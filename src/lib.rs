//! stdmatrix - build-matrix filtering and C++ standard expansion
//!
//! Given the base combinations produced by a build-matrix generator, this
//! crate decides which ones to build and expands each into one variant per
//! C++ standard its compiler release supports.

pub mod core;
pub mod ops;
pub mod policy;
pub mod util;

pub use crate::core::{BuildCombination, BuildType, CompilerId, CppStandard, StandardSet};
pub use crate::ops::expand;
pub use crate::policy::{standards_for, ConfigurationError, MatrixPolicy, PolicyRevision};
