//! Core scoring algorithms
//!
//! Each algorithm is implemented as standalone functions for composability;
//! the cached-scorer layer in [`crate::cached`] wraps the prepared-query
//! variants behind a trait.

pub mod fuzz;
pub mod indel;
pub mod levenshtein;
pub mod normalize;
pub mod tokenize;
