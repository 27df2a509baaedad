//! Common utilities for the weld inliner.
//!
//! This crate provides shared infrastructure used by the other weld
//! components:
//! - **Warning System** - colored terminal output for non-fatal anomalies

pub mod warning;
