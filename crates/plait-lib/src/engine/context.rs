//! Per-call parse state.
//!
//! Everything that changes while a parse runs lives here, never on the
//! grammar: the set of alternations currently in progress (the cycle guard),
//! fuel counters, and the fatal-error slot. A fresh context is created for
//! every top-level call and dropped when it returns.

use std::collections::HashSet;

use super::ParseError;
use crate::grammar::NodeId;

#[derive(Debug)]
pub(crate) struct ParseContext {
    /// (alternation, offset) pairs being tried right now.
    in_progress: HashSet<(NodeId, usize)>,
    depth: u32,
    exec_fuel_remaining: Option<u32>,
    recursion_fuel_limit: Option<u32>,
    fatal_error: Option<ParseError>,
}

impl ParseContext {
    pub(crate) fn new(exec_fuel: Option<u32>, recursion_fuel: Option<u32>) -> Self {
        Self {
            in_progress: HashSet::new(),
            depth: 0,
            exec_fuel_remaining: exec_fuel,
            recursion_fuel_limit: recursion_fuel,
            fatal_error: None,
        }
    }

    /// Account for one combinator invocation. Returns `false` once the call
    /// must unwind.
    pub(crate) fn enter(&mut self) -> bool {
        if self.fatal_error.is_some() {
            return false;
        }
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                self.fatal_error = Some(ParseError::ExecFuelExhausted);
                return false;
            }
            *remaining -= 1;
        }
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            self.fatal_error = Some(ParseError::RecursionLimitExceeded);
            return false;
        }
        self.depth += 1;
        true
    }

    pub(crate) fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Mark an alternation as in progress at `offset`. Returns `false` if it
    /// already is, meaning the grammar re-entered it without consuming input.
    pub(crate) fn claim(&mut self, alternation: NodeId, offset: usize) -> bool {
        self.in_progress.insert((alternation, offset))
    }

    pub(crate) fn release(&mut self, alternation: NodeId, offset: usize) {
        self.in_progress.remove(&(alternation, offset));
    }

    pub(crate) fn is_aborted(&self) -> bool {
        self.fatal_error.is_some()
    }

    pub(crate) fn take_fatal_error(&mut self) -> Option<ParseError> {
        self.fatal_error.take()
    }
}
