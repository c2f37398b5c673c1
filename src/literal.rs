//! Primitive rules that look at single elements or fixed runs of them.
//!
//! Primitives never advance on failure and record the failure at the cursor
//! they were handed.

use crate::atomic::Atomic;
use crate::cursor::{Cursor, Peek};
use crate::grammar::{GrammarBuilder, Rule, RuleId};
use crate::parser::{Match, Parser};
use crate::value::Value;
use std::borrow::Cow;
use std::rc::Rc;

impl<E: Atomic> GrammarBuilder<E> {
    /// Always succeeds with `value`, consuming nothing
    pub fn empty(&mut self, value: impl Into<Value>) -> RuleId {
        self.push(Rule::Empty(value.into()))
    }

    /// Always succeeds with an empty vector of the run's representation
    pub fn empty_vector(&mut self) -> RuleId {
        self.push(Rule::EmptyVector)
    }

    /// Succeeds with `Value::None` at end of input only
    pub fn eoi(&mut self) -> RuleId {
        self.push(Rule::Eoi)
    }

    /// Any single element
    pub fn any(&mut self) -> RuleId {
        self.push(Rule::Any)
    }

    /// An element equal to `item`
    pub fn literal(&mut self, item: E) -> RuleId {
        self.push(Rule::Literal(item))
    }

    /// An element accepted by `predicate`; `label` names it in diagnostics
    pub fn test(
        &mut self,
        label: impl Into<Cow<'static, str>>,
        predicate: impl Fn(&E) -> bool + 'static,
    ) -> RuleId {
        self.push(Rule::Test {
            label: label.into(),
            predicate: Rc::new(predicate),
        })
    }

    /// The elements of `items` in order, producing a vector of them
    pub fn word(&mut self, items: impl IntoIterator<Item = E>) -> RuleId {
        self.push(Rule::Word {
            items: items.into_iter().collect(),
            value: None,
        })
    }

    /// The elements of `items` in order, producing `value`
    pub fn word_as(&mut self, items: impl IntoIterator<Item = E>, value: impl Into<Value>) -> RuleId {
        self.push(Rule::Word {
            items: items.into_iter().collect(),
            value: Some(value.into()),
        })
    }
}

impl<'g, C: Cursor> Parser<'g, C> {
    pub(crate) fn match_eoi(&mut self, id: RuleId, cursor: C) -> Option<Match<C>> {
        if cursor.eoi() {
            Some(Match::new(cursor, Value::None))
        } else {
            self.record_failure(&cursor, id);
            None
        }
    }

    pub(crate) fn match_element(
        &mut self,
        id: RuleId,
        cursor: C,
        accept: impl Fn(&C::Element) -> bool,
    ) -> Option<Match<C>> {
        match cursor.peek() {
            Peek::Item(item) if accept(&item) => Some(Match::new(cursor.next(), item.into())),
            _ => {
                self.record_failure(&cursor, id);
                None
            }
        }
    }

    pub(crate) fn match_word(
        &mut self,
        id: RuleId,
        items: &[C::Element],
        value: Option<&Value>,
        cursor: C,
    ) -> Option<Match<C>> {
        let mut current = cursor.clone();
        for expected in items {
            match current.peek() {
                Peek::Item(item) if item == *expected => current = current.next(),
                _ => {
                    self.record_failure(&cursor, id);
                    return None;
                }
            }
        }

        let value = match value {
            Some(value) => value.clone(),
            None => Value::Seq(
                self.factory
                    .create(items.iter().cloned().map(Into::into).collect()),
            ),
        };
        Some(Match::new(current, value))
    }
}
