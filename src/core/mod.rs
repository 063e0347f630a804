//! Core data structures for stdmatrix.
//!
//! This module contains the types the matrix is made of:
//! - Compiler identities and numerically ordered versions
//! - C++ standards and standard sets
//! - Build combinations and build types

pub mod combination;
pub mod compiler;
pub mod standard;

pub use combination::{BuildCombination, BuildType, StringMap};
pub use compiler::{CompilerFamily, CompilerId, CompilerVersion, VersionParsing};
pub use standard::{CppStandard, StandardSet};
