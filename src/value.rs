//! The untyped value tree produced by matching.
//!
//! Rules return a [`Value`]: literal elements become scalars, combinators
//! collect child values into [`Vector`]s, and handlers are free to build any
//! shape, including user types wrapped as [`Value::Custom`].

use crate::printer::LispPrinter;
use crate::vector::Vector;
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Payload of [`Value::Custom`].
///
/// Implemented for every `'static` type that is `Debug + Display + PartialEq`,
/// so user tokens and AST nodes can travel through the value tree and be
/// recovered with [`Value::downcast_ref`].
pub trait CustomValue: Any + fmt::Debug + fmt::Display {
    /// Name printed by the canonical printer, `#TypeName(display)`
    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn eq_custom(&self, other: &dyn CustomValue) -> bool;
}

impl<T> CustomValue for T
where
    T: Any + fmt::Debug + fmt::Display + PartialEq,
{
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_custom(&self, other: &dyn CustomValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

#[derive(Clone, Debug)]
pub enum Value {
    None,
    Char(char),
    Str(Rc<str>),
    Int(i64),
    Float(f64),
    Seq(Vector),
    Custom(Rc<dyn CustomValue>),
}

impl Value {
    pub fn custom<T: CustomValue>(payload: T) -> Self {
        Value::Custom(Rc::new(payload))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(ch) => Some(*ch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            Value::Seq(vector) => Some(vector),
            _ => None,
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Custom(payload) => payload.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Element `index` when this value is a vector
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.as_vector().and_then(|vector| vector.get(index))
    }

    /// Plain text of the value: scalars as written, vectors as the
    /// concatenation of their elements, `None` as nothing.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Value::None => {}
            Value::Char(ch) => out.push(*ch),
            Value::Str(text) => out.push_str(text),
            Value::Int(number) => out.push_str(&number.to_string()),
            Value::Float(number) => out.push_str(&number.to_string()),
            Value::Seq(vector) => {
                for item in vector.iter() {
                    item.push_text(out);
                }
            }
            Value::Custom(payload) => out.push_str(&payload.to_string()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => a.eq_custom(b.as_ref()),
            _ => false,
        }
    }
}

/// Renders the canonical Lisp form, see [`LispPrinter`].
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        LispPrinter::new().write(f, self)
    }
}

impl From<char> for Value {
    fn from(ch: char) -> Self {
        Value::Char(ch)
    }
}

impl From<u8> for Value {
    fn from(byte: u8) -> Self {
        Value::Int(i64::from(byte))
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::Int(i64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Value::Int(i64::from(number))
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Int(number)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Value::Float(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Str(text.into())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Str(text.into())
    }
}

impl From<Vector> for Value {
    fn from(vector: Vector) -> Self {
        Value::Seq(vector)
    }
}
