//! Rule arena.
//!
//! Rules are added to a [`GrammarBuilder`], which hands back a [`RuleId`] for
//! each one, so composite rules refer to their children by id and recursive
//! grammars need no reference cycles. Forward references go through
//! placeholders, which must all be defined before [`GrammarBuilder::build`]
//! freezes the arena into an immutable [`Grammar`].

use crate::atomic::Atomic;
use crate::error::GrammarError;
use crate::handler::Action;
use crate::value::Value;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Handle to a rule inside one grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(usize);

impl RuleId {
    pub fn new(index: usize) -> Self {
        RuleId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub type Predicate<E> = Rc<dyn Fn(&E) -> bool>;

pub enum Rule<E> {
    Empty(Value),
    EmptyVector,
    Eoi,
    Any,
    Literal(E),
    Test {
        label: Cow<'static, str>,
        predicate: Predicate<E>,
    },
    /// Fixed run of elements; without a value the matched items are
    /// collected into a vector
    Word {
        items: Rc<[E]>,
        value: Option<Value>,
    },
    Sequence(Vec<RuleId>),
    FirstOf(Vec<RuleId>),
    Repeat {
        item: RuleId,
        min: usize,
        max: Option<usize>,
    },
    Lookahead {
        item: RuleId,
        negate: bool,
    },
    Placeholder(RuleId),
    Handler {
        item: RuleId,
        action: Action,
    },
}

impl<E> Rule<E> {
    pub fn children(&self) -> &[RuleId] {
        match self {
            Rule::Sequence(items) | Rule::FirstOf(items) => items,
            Rule::Repeat { item, .. }
            | Rule::Lookahead { item, .. }
            | Rule::Placeholder(item)
            | Rule::Handler { item, .. } => std::slice::from_ref(item),
            _ => &[],
        }
    }
}

impl<E: fmt::Display> Rule<E> {
    /// Short description of what the rule accepts
    pub fn describe(&self) -> String {
        match self {
            Rule::Empty(_) | Rule::EmptyVector => "nothing".to_string(),
            Rule::Eoi => "end of input".to_string(),
            Rule::Any => "any element".to_string(),
            Rule::Literal(item) => format!("'{}'", item),
            Rule::Test { label, .. } => label.to_string(),
            Rule::Word { items, .. } => {
                let text: String = items.iter().map(|item| item.to_string()).collect();
                format!("\"{}\"", text)
            }
            Rule::Sequence(items) => format!("sequence of {}", items.len()),
            Rule::FirstOf(items) => format!("one of {} alternatives", items.len()),
            Rule::Repeat { item, min, max } => match max {
                Some(max) => format!("{}..{} of {}", min, max, item),
                None => format!("{} or more of {}", min, item),
            },
            Rule::Lookahead { item, negate } => {
                if *negate {
                    format!("not {}", item)
                } else {
                    format!("and {}", item)
                }
            }
            Rule::Placeholder(target) => format!("reference to {}", target),
            Rule::Handler { item, .. } => format!("handler over {}", item),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for Rule<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Empty(value) => f.debug_tuple("Empty").field(value).finish(),
            Rule::EmptyVector => f.write_str("EmptyVector"),
            Rule::Eoi => f.write_str("Eoi"),
            Rule::Any => f.write_str("Any"),
            Rule::Literal(item) => f.debug_tuple("Literal").field(item).finish(),
            Rule::Test { label, .. } => f.debug_struct("Test").field("label", label).finish(),
            Rule::Word { items, value } => f
                .debug_struct("Word")
                .field("items", items)
                .field("value", value)
                .finish(),
            Rule::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Rule::FirstOf(items) => f.debug_tuple("FirstOf").field(items).finish(),
            Rule::Repeat { item, min, max } => f
                .debug_struct("Repeat")
                .field("item", item)
                .field("min", min)
                .field("max", max)
                .finish(),
            Rule::Lookahead { item, negate } => f
                .debug_struct("Lookahead")
                .field("item", item)
                .field("negate", negate)
                .finish(),
            Rule::Placeholder(target) => f.debug_tuple("Placeholder").field(target).finish(),
            Rule::Handler { item, action } => f
                .debug_struct("Handler")
                .field("item", item)
                .field("action", action)
                .finish(),
        }
    }
}

/// Collects rules; undefined placeholders are empty slots.
pub struct GrammarBuilder<E> {
    rules: Vec<Option<Rule<E>>>,
    names: HashMap<RuleId, Cow<'static, str>>,
}

impl<E: Atomic> Default for GrammarBuilder<E> {
    fn default() -> Self {
        GrammarBuilder::new()
    }
}

impl<E: Atomic> GrammarBuilder<E> {
    pub fn new() -> Self {
        GrammarBuilder {
            rules: Vec::new(),
            names: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn push(&mut self, rule: Rule<E>) -> RuleId {
        let id = RuleId(self.rules.len());
        self.rules.push(Some(rule));
        id
    }

    pub(crate) fn push_slot(&mut self) -> RuleId {
        let id = RuleId(self.rules.len());
        self.rules.push(None);
        id
    }

    pub(crate) fn slot_mut(&mut self, id: RuleId) -> Option<&mut Option<Rule<E>>> {
        self.rules.get_mut(id.0)
    }

    /// Attach a name used in diagnostics instead of the derived description
    pub fn name(&mut self, rule: RuleId, name: impl Into<Cow<'static, str>>) -> RuleId {
        self.names.insert(rule, name.into());
        rule
    }

    /// Freeze the arena, checking that every placeholder is defined and every
    /// rule is well formed.
    pub fn build(self) -> Result<Grammar<E>, GrammarError> {
        let count = self.rules.len();
        let mut rules = Vec::with_capacity(count);

        for (index, slot) in self.rules.into_iter().enumerate() {
            let rule = slot.ok_or(GrammarError::UnresolvedPlaceholder(RuleId(index)))?;
            if let Some(&child) = rule.children().iter().find(|child| child.0 >= count) {
                return Err(GrammarError::UnknownRule(child));
            }
            rules.push(rule);
        }

        for (index, rule) in rules.iter().enumerate() {
            let id = RuleId(index);
            match rule {
                Rule::Repeat {
                    min, max: Some(max), ..
                } if min > max => {
                    return Err(GrammarError::InvalidBounds {
                        rule: id,
                        min: *min,
                        max: *max,
                    });
                }
                Rule::Handler {
                    item,
                    action: Action::Extract(position),
                } => {
                    if let Rule::Sequence(items) = &rules[item.0] {
                        if *position >= items.len() {
                            return Err(GrammarError::ExtractOutOfRange {
                                rule: id,
                                index: *position,
                                len: items.len(),
                            });
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(Grammar {
            rules,
            names: self.names,
        })
    }
}

/// An immutable set of rules, shared by any number of parser runs.
pub struct Grammar<E> {
    rules: Vec<Rule<E>>,
    names: HashMap<RuleId, Cow<'static, str>>,
}

impl<E: Atomic> Grammar<E> {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn contains(&self, id: RuleId) -> bool {
        id.0 < self.rules.len()
    }

    pub fn rule(&self, id: RuleId) -> Option<&Rule<E>> {
        self.rules.get(id.0)
    }

    // Ids reaching the interpreter were checked by `build` or `match_rule`
    pub(crate) fn node(&self, id: RuleId) -> &Rule<E> {
        &self.rules[id.0]
    }

    pub fn name(&self, id: RuleId) -> Option<&str> {
        self.names.get(&id).map(|name| name.as_ref())
    }

    /// The rule's name if it has one, otherwise a description of its shape
    pub fn describe(&self, id: RuleId) -> String {
        match (self.name(id), self.rule(id)) {
            (Some(name), _) => name.to_string(),
            (None, Some(rule)) => rule.describe(),
            (None, None) => format!("unknown rule {}", id),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for Grammar<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("rules", &self.rules)
            .field("names", &self.names)
            .finish()
    }
}
