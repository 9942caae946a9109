//! # Config Crate
//!
//! Centralized configuration constants for the zone geometry pipeline.
//! All magic numbers and tunable parameters are defined here so the
//! geometry kernel and the per-frame runtime agree on limits and defaults.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_BOUNDARY_HEIGHT, MIN_BOUNDARY_POINTS};
//!
//! let points = 4;
//! assert!(points >= MIN_BOUNDARY_POINTS);
//! assert!(DEFAULT_BOUNDARY_HEIGHT > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **GPU-Aligned**: Limits follow 16-bit index buffers
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
