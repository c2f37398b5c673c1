use crate::value::Value;
use std::fmt;

/// Trait for the elements a cursor yields.
///
/// Rules compare elements by value, report them in diagnostics through
/// `Display`, and turn matched elements into result values through
/// `Into<Value>`. Every type with those capabilities is an element; custom
/// token records only need a `From<Token> for Value` impl (usually
/// [`Value::custom`]).
pub trait Atomic: Clone + PartialEq + fmt::Debug + fmt::Display + Into<Value> {}

impl<T> Atomic for T where T: Clone + PartialEq + fmt::Debug + fmt::Display + Into<Value> {}
