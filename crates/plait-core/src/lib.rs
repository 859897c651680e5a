#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Helpers shared by the plait engine and its consumers.
//!
//! - `colors` - ANSI palette for tree dumps and parse traces
//! - `utils` - rule-name normalization and text clipping for display

pub mod colors;
pub mod utils;

#[cfg(test)]
mod colors_tests;

pub use colors::Colors;
