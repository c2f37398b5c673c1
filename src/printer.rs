//! Canonical Lisp-like rendering of value trees.
//!
//! | value | printed as |
//! |---|---|
//! | `None` | `#NULL` |
//! | char | `'c'` |
//! | string | `"text"`, with `"` escaped as `\"` |
//! | cons vector | `(a b c)`, `()` when empty, `(a . b)` for an improper tail |
//! | array vector | `#(a b c)`, or `(a b c)` with [`LispPrinter::vectors_as_lists`] |
//! | anything else | `#TypeName(value)`, e.g. `#i64(90)` |

use crate::value::Value;
use crate::vector::{ConsList, ConsNode, Vector};
use std::fmt::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LispPrinter {
    vectors_as_lists: bool,
}

impl LispPrinter {
    pub fn new() -> Self {
        LispPrinter::default()
    }

    /// Print array vectors without the `#` prefix, so both representations
    /// render identically.
    pub fn vectors_as_lists(mut self, enabled: bool) -> Self {
        self.vectors_as_lists = enabled;
        self
    }

    pub fn print(&self, value: &Value) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write(&mut out, value);
        out
    }

    pub fn write<W: Write + ?Sized>(&self, out: &mut W, value: &Value) -> fmt::Result {
        match value {
            Value::None => out.write_str("#NULL"),
            Value::Char(ch) => write!(out, "'{}'", ch),
            Value::Str(text) => write!(out, "\"{}\"", escape(text)),
            Value::Int(number) => write!(out, "#i64({})", number),
            Value::Float(number) => write!(out, "#f64({})", number),
            Value::Seq(Vector::Cons(ConsList::Nil)) => out.write_str("()"),
            Value::Seq(Vector::Cons(ConsList::Node(node))) => {
                out.write_char('(')?;
                self.write_cells(out, node)?;
                out.write_char(')')
            }
            Value::Seq(Vector::Array(items)) => {
                if !self.vectors_as_lists {
                    out.write_char('#')?;
                }
                out.write_char('(')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.write_char(' ')?;
                    }
                    self.write(out, item)?;
                }
                out.write_char(')')
            }
            Value::Custom(payload) => write!(out, "#{}({})", payload.type_name(), payload),
        }
    }

    // Walks the spine iteratively; only heads recurse.
    fn write_cells<W: Write + ?Sized>(&self, out: &mut W, first: &ConsNode) -> fmt::Result {
        let mut node = first;
        loop {
            self.write(out, node.head())?;
            match node.tail() {
                Value::Seq(Vector::Cons(ConsList::Nil)) => return Ok(()),
                Value::Seq(Vector::Cons(ConsList::Node(next))) => {
                    out.write_char(' ')?;
                    node = next.as_ref();
                }
                other => {
                    out.write_str(" . ")?;
                    return self.write(out, other);
                }
            }
        }
    }
}

pub fn escape(text: &str) -> String {
    text.replace('"', "\\\"")
}
