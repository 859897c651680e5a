//! Invariant checks excluded from coverage reports.
//!
//! Handle misuse is a grammar-construction bug, not a parse outcome, so these
//! panic instead of returning errors.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::grammar::{Grammar, GrammarBuilder, Lowering, Node, NodeId, RuleEntry, RuleId, RuleSlot};

impl GrammarBuilder {
    pub(crate) fn ensure_slot(&mut self, rule: RuleId) -> &mut RuleSlot {
        let count = self.slots.len();
        self.slots.get_mut(rule.index()).unwrap_or_else(|| {
            panic!(
                "GrammarBuilder: rule {} not found among {count} rules \
                 (handle belongs to another builder)",
                rule.as_u32()
            )
        })
    }
}

impl Lowering {
    pub(crate) fn ensure_rule_handle(&self, rule: RuleId) {
        assert!(
            rule.index() < self.rule_count,
            "GrammarBuilder: reference to rule {} but only {} rules exist \
             (handle belongs to another builder)",
            rule.as_u32(),
            self.rule_count
        );
    }
}

impl Grammar {
    pub(crate) fn ensure_node(&self, node: NodeId) -> &Node {
        self.nodes.get(node.index()).unwrap_or_else(|| {
            panic!(
                "Grammar: node {} not found (node ids are only valid for the grammar that issued them)",
                node.as_u32()
            )
        })
    }

    pub(crate) fn ensure_rule(&self, rule: RuleId) -> &RuleEntry {
        self.rules.get(rule.index()).unwrap_or_else(|| {
            panic!(
                "Grammar: rule {} not found (rule ids are only valid for the grammar that issued them)",
                rule.as_u32()
            )
        })
    }
}
