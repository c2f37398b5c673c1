//! Semantic actions applied to the value of a successful match.
//!
//! Handlers never change what input is consumed, only the value handed to the
//! enclosing rule. Besides arbitrary closures ([`GrammarBuilder::map`]) there
//! are built-in reshaping actions for the usual PEG idioms:
//!
//! - [`GrammarBuilder::extract`] picks one element of a sequence, e.g. the
//!   expression between parentheses.
//! - [`GrammarBuilder::first_or_self`] unwraps the first element of a vector.
//! - [`GrammarBuilder::collapse`] flattens the `(element, rest)` pairs produced
//!   by right-recursive rules into one vector, or one string when the rest is
//!   already text.
//! - [`GrammarBuilder::concat`] joins the elements of a vector into a string.
//!
//! Built-in actions that receive a value of the wrong shape log a warning and
//! pass the value through unchanged.

use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::grammar::{GrammarBuilder, Rule, RuleId};
use crate::parser::{Match, Outcome, Parser};
use crate::value::Value;
use crate::vector::{Vector, VectorFactory};
use log::warn;
use std::fmt;
use std::rc::Rc;

pub type MapFn = Rc<dyn Fn(Value, &dyn VectorFactory) -> Value>;

#[derive(Clone)]
pub enum Action {
    Extract(usize),
    FirstOrSelf,
    Collapse,
    Concat,
    Map(MapFn),
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Extract(index) => f.debug_tuple("Extract").field(index).finish(),
            Action::FirstOrSelf => f.write_str("FirstOrSelf"),
            Action::Collapse => f.write_str("Collapse"),
            Action::Concat => f.write_str("Concat"),
            Action::Map(_) => f.write_str("Map(..)"),
        }
    }
}

impl Action {
    pub fn apply(&self, value: Value, factory: &dyn VectorFactory) -> Value {
        match self {
            Action::Extract(index) => extract(*index, value),
            Action::FirstOrSelf => first_or_self(value),
            Action::Collapse => collapse(value, factory),
            Action::Concat => concat(value),
            Action::Map(f) => f(value, factory),
        }
    }
}

fn extract(index: usize, value: Value) -> Value {
    match value.get(index) {
        Some(item) => item.clone(),
        None => {
            warn!("extract: no element {} in {}", index, value);
            value
        }
    }
}

fn first_or_self(value: Value) -> Value {
    match &value {
        Value::Seq(vector) => match vector.get(0) {
            Some(first) => first.clone(),
            None => value,
        },
        _ => {
            warn!("first_or_self: expected a vector, got {}", value);
            value
        }
    }
}

fn collapse(value: Value, factory: &dyn VectorFactory) -> Value {
    let (head, tail) = match &value {
        Value::Seq(items) if items.len() == 2 => (&items[0], &items[1]),
        _ => {
            warn!("collapse: expected an (element, rest) pair, got {}", value);
            return value;
        }
    };

    match tail {
        Value::None => Value::Seq(factory.create(vec![head.clone()])),
        Value::Seq(rest) => Value::Seq(factory.insert_before(head.clone(), rest)),
        Value::Str(rest) => Value::from(format!("{}{}", head.text(), rest)),
        _ => Value::Seq(factory.create(vec![head.clone(), tail.clone()])),
    }
}

fn concat(value: Value) -> Value {
    match &value {
        Value::Seq(_) | Value::Str(_) => Value::from(value.text()),
        _ => {
            warn!("concat: expected a vector, got {}", value);
            value
        }
    }
}

impl<E: Atomic> GrammarBuilder<E> {
    fn handler(&mut self, item: RuleId, action: Action) -> RuleId {
        self.push(Rule::Handler { item, action })
    }

    /// Replace the value of `item` with `f(value, factory)`, where `factory`
    /// builds vectors of the run's representation
    pub fn map(
        &mut self,
        item: RuleId,
        f: impl Fn(Value, &dyn VectorFactory) -> Value + 'static,
    ) -> RuleId {
        self.handler(item, Action::Map(Rc::new(f)))
    }

    /// Element `index` of the vector produced by `item`
    pub fn extract(&mut self, index: usize, item: RuleId) -> RuleId {
        self.handler(item, Action::Extract(index))
    }

    /// The first element of the vector produced by `item`, or the vector
    /// itself when it is empty
    pub fn first_or_self(&mut self, item: RuleId) -> RuleId {
        self.handler(item, Action::FirstOrSelf)
    }

    pub fn collapse(&mut self, item: RuleId) -> RuleId {
        self.handler(item, Action::Collapse)
    }

    pub fn concat(&mut self, item: RuleId) -> RuleId {
        self.handler(item, Action::Concat)
    }
}

impl<'g, C: Cursor> Parser<'g, C> {
    pub(crate) fn match_handler(&mut self, item: RuleId, action: &Action, cursor: C) -> Outcome<C> {
        self.descend(cursor.position(), |parser| {
            let found = parser.apply(item, cursor)?;
            Ok(found.map(|found| {
                let value = action.apply(found.value, parser.factory);
                Match::new(found.cursor, value)
            }))
        })
    }
}

/// Build a vector from `items` with the given factory; shorthand for actions.
pub fn vector_of(factory: &dyn VectorFactory, items: Vec<Value>) -> Value {
    Value::Seq(factory.create(items))
}

/// `Vector::cons` wrapped as a value, for actions building dotted pairs.
pub fn pair(head: Value, tail: Value) -> Value {
    Value::Seq(Vector::cons(head, tail))
}
