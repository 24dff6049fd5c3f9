//! Common traits
//!
//! This module provides the abstractions the evaluation engine depends on
//! (the reference repository and the clock), kept apart from their
//! implementations.

pub mod traits;

// Re-export common traits for easier imports
pub use traits::*;
