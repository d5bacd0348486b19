//! Lumen Core
//!
//! Shared utilities for the Lumen renderer crates: logging setup, profiling
//! scopes, math re-exports and small geometry types.

pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
