//! Grammar arena: named rules, indirect references, and the frozen node graph.
//!
//! Rules are registered on a [`GrammarBuilder`]. A rule can be declared first
//! and defined later, which is how self- and mutually-recursive rules are
//! written: the body refers to the rule's own `RuleId`. Option lists of
//! alternation rules can still be extended while the builder is open.
//!
//! [`GrammarBuilder::build`] lowers every rule body into a flat arena of
//! nodes addressed by [`NodeId`]. The resulting [`Grammar`] is immutable,
//! `Send + Sync`, and can serve any number of concurrent parse calls.

use indexmap::IndexMap;
use plait_core::utils::to_pascal_case;

use crate::pattern::{CharClass, Pattern, Until, flatten_options};

/// Handle to a rule registered on a builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(u32);

impl RuleId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identity of one combinator instance in a built grammar.
///
/// Parse nodes record the `NodeId` that produced them; the cycle guard keys
/// on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Errors detected while freezing a builder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("rule `{0}` is declared but never defined")]
    UndefinedRule(String),

    #[error("rule `{0}` is defined more than once")]
    DuplicateRule(String),

    #[error("rule `{0}` is not an alternation, options cannot be added to it")]
    NotAnAlternation(String),

    #[error("rule `{0}` contains an empty literal")]
    EmptyLiteral(String),

    #[error("rule `{0}` contains an empty character class")]
    EmptyClass(String),
}

// ============================================================================
// Builder
// ============================================================================

#[derive(Debug)]
pub(crate) struct RuleSlot {
    pub(crate) name: Option<String>,
    pub(crate) body: Option<Pattern>,
}

impl RuleSlot {
    fn display_name(&self, id: RuleId) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("<anonymous #{}>", id.as_u32()),
        }
    }
}

/// Collects rules; errors are reported by [`GrammarBuilder::build`].
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    pub(crate) slots: Vec<RuleSlot>,
    by_name: IndexMap<String, RuleId>,
    errors: Vec<GrammarError>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a named rule. Declaring an existing name returns its handle.
    pub fn declare(&mut self, name: &str) -> RuleId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = self.push_slot(Some(name.to_string()));
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Supply the body of a declared rule.
    pub fn define(&mut self, rule: RuleId, body: impl Into<Pattern>) {
        let slot = self.ensure_slot(rule);
        if slot.body.is_some() {
            let name = slot.display_name(rule);
            self.errors.push(GrammarError::DuplicateRule(name));
            return;
        }
        slot.body = Some(body.into());
    }

    /// Declare and define in one step.
    pub fn rule(&mut self, name: &str, body: impl Into<Pattern>) -> RuleId {
        let id = self.declare(name);
        self.define(id, body);
        id
    }

    /// Register an unnamed rule. Its nodes are labelled by combinator kind.
    pub fn anonymous(&mut self, body: impl Into<Pattern>) -> RuleId {
        let id = self.push_slot(None);
        self.define(id, body);
        id
    }

    /// Insert options at the front of an alternation rule.
    ///
    /// Only alternation bodies are editable. A rule with any other body,
    /// sequences included, makes [`build`](Self::build) fail with
    /// [`GrammarError::NotAnAlternation`].
    pub fn prepend_options<I, P>(&mut self, rule: RuleId, options: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<Pattern>,
    {
        let added = flatten_options(options);
        self.edit_options(rule, |existing| {
            let tail = std::mem::take(existing);
            existing.extend(added);
            existing.extend(tail);
        });
    }

    /// Add options at the end of an alternation rule.
    ///
    /// Same restriction as [`prepend_options`](Self::prepend_options): sequence
    /// members cannot be extended after the rule is defined.
    pub fn append_options<I, P>(&mut self, rule: RuleId, options: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<Pattern>,
    {
        let added = flatten_options(options);
        self.edit_options(rule, |existing| existing.extend(added));
    }

    fn edit_options(&mut self, rule: RuleId, edit: impl FnOnce(&mut Vec<Pattern>)) {
        let slot = self.ensure_slot(rule);
        if let Some(Pattern::Either(options)) = &mut slot.body {
            edit(options);
            return;
        }
        let name = slot.display_name(rule);
        self.errors.push(GrammarError::NotAnAlternation(name));
    }

    fn push_slot(&mut self, name: Option<String>) -> RuleId {
        let id = RuleId(self.slots.len() as u32);
        self.slots.push(RuleSlot { name, body: None });
        id
    }

    /// Freeze into an immutable grammar.
    pub fn build(self) -> Result<Grammar, GrammarError> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(error);
        }

        let rule_count = self.slots.len();
        let mut lowering = Lowering {
            nodes: Vec::new(),
            rule_count,
        };
        let mut rules = Vec::with_capacity(rule_count);

        for (index, slot) in self.slots.into_iter().enumerate() {
            let id = RuleId(index as u32);
            let name = slot.display_name(id);
            let Some(body) = slot.body else {
                return Err(GrammarError::UndefinedRule(name));
            };
            let root = lowering.lower(body, &name)?;
            let label = slot.name.as_deref().map(to_pascal_case);
            rules.push(RuleEntry {
                name: slot.name,
                label,
                root,
            });
        }

        let mut root_of = vec![None; lowering.nodes.len()];
        for (index, rule) in rules.iter().enumerate() {
            root_of[rule.root.index()] = Some(RuleId(index as u32));
        }

        Ok(Grammar {
            nodes: lowering.nodes,
            root_of,
            rules,
            by_name: self.by_name,
        })
    }
}

/// Flattens pattern trees into the node arena.
pub(crate) struct Lowering {
    nodes: Vec<Node>,
    pub(crate) rule_count: usize,
}

impl Lowering {
    fn lower(&mut self, pattern: Pattern, rule: &str) -> Result<NodeId, GrammarError> {
        let node = match pattern {
            Pattern::Char(c) => Node::Char(c),
            Pattern::Word(word) => {
                if word.is_empty() {
                    return Err(GrammarError::EmptyLiteral(rule.to_string()));
                }
                Node::Word(word)
            }
            Pattern::Class(class) => {
                if class.is_empty() {
                    return Err(GrammarError::EmptyClass(rule.to_string()));
                }
                Node::Class(class)
            }
            Pattern::Nothing => Node::Nothing,
            Pattern::Until(until) => {
                if until.ending.is_empty() {
                    return Err(GrammarError::EmptyLiteral(rule.to_string()));
                }
                Node::Until(until)
            }
            Pattern::Seq(members) => Node::Seq(self.lower_all(members, rule)?),
            Pattern::Either(options) => Node::Either(self.lower_all(options, rule)?),
            Pattern::Repeat { inner, allow_none } => Node::Repeat {
                inner: self.lower(*inner, rule)?,
                allow_none,
            },
            Pattern::Ref(target) => {
                self.ensure_rule_handle(target);
                Node::Ref(target)
            }
        };
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        Ok(id)
    }

    fn lower_all(
        &mut self,
        patterns: Vec<Pattern>,
        rule: &str,
    ) -> Result<Vec<NodeId>, GrammarError> {
        patterns
            .into_iter()
            .map(|pattern| self.lower(pattern, rule))
            .collect()
    }
}

// ============================================================================
// Frozen grammar
// ============================================================================

/// Arena form of a pattern. Children are referenced by id.
#[derive(Debug, Clone)]
pub(crate) enum Node {
    Char(char),
    Word(String),
    Class(CharClass),
    Nothing,
    Until(Until),
    Seq(Vec<NodeId>),
    Either(Vec<NodeId>),
    Repeat { inner: NodeId, allow_none: bool },
    Ref(RuleId),
}

impl Node {
    fn kind_name(&self) -> &'static str {
        match self {
            Node::Char(_) => "Char",
            Node::Word(_) => "Word",
            Node::Class(_) => "Class",
            Node::Nothing => "Nothing",
            Node::Until(_) => "Until",
            Node::Seq(_) => "Seq",
            Node::Either(_) => "Either",
            Node::Repeat { .. } => "Repeat",
            Node::Ref(_) => "Ref",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct RuleEntry {
    pub(crate) name: Option<String>,
    label: Option<String>,
    pub(crate) root: NodeId,
}

/// Immutable combinator graph. Cheap to share across threads.
#[derive(Debug, Clone)]
pub struct Grammar {
    pub(crate) nodes: Vec<Node>,
    /// Rule whose body is rooted at each node, if any.
    root_of: Vec<Option<RuleId>>,
    pub(crate) rules: Vec<RuleEntry>,
    by_name: IndexMap<String, RuleId>,
}

impl Grammar {
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    /// One-rule grammar around an anonymous pattern.
    pub fn from_pattern(pattern: impl Into<Pattern>) -> Result<(Self, RuleId), GrammarError> {
        let mut builder = GrammarBuilder::new();
        let root = builder.anonymous(pattern);
        Ok((builder.build()?, root))
    }

    /// Look up a named rule.
    pub fn rule(&self, name: &str) -> Option<RuleId> {
        self.by_name.get(name).copied()
    }

    pub fn rule_name(&self, rule: RuleId) -> Option<&str> {
        self.ensure_rule(rule).name.as_deref()
    }

    /// Named rules in definition order.
    pub fn rule_names(&self) -> impl Iterator<Item = (&str, RuleId)> {
        self.by_name.iter().map(|(name, &id)| (name.as_str(), id))
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Display label of a node: the PascalCase rule name for named rule
    /// roots, otherwise the combinator kind.
    pub fn label(&self, node: NodeId) -> &str {
        let kind = self.ensure_node(node).kind_name();
        self.root_of[node.index()]
            .and_then(|rule| self.rules[rule.index()].label.as_deref())
            .unwrap_or(kind)
    }

    pub(crate) fn rule_root(&self, rule: RuleId) -> NodeId {
        self.ensure_rule(rule).root
    }
}
