//! High-level operations.
//!
//! This module contains the implementation of stdmatrix commands.

pub mod expand;
pub mod matrix_io;

pub use expand::{expand, expand_with_summary, ExpandSummary};
pub use matrix_io::{parse_combinations, read_combinations, write_combinations, OutputFormat};
