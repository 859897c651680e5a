//! Grammar execution: matching, per-call state, tracing.

mod context;
pub mod error;
mod matcher;
pub mod parser;
mod terminals;
pub mod trace;

#[cfg(test)]
mod matcher_tests;

pub use error::ParseError;
pub use parser::{DEFAULT_RECURSION_FUEL, ParseConfig, Parser, parse};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
