//! # PegComb - PEG Combinator Runtime
//!
//! A parsing-expression-grammar engine. Grammars are assembled at run time
//! from composable rules, matched against any input that implements
//! [`Cursor`], and produce an untyped [`Value`] tree that semantic actions can
//! reshape along the way.
//!
//! - **Any input**: text, byte slices, or lazily pulled streams of user tokens
//! - **Recursive grammars**: rules live in an arena, placeholders allow forward
//!   references without reference cycles
//! - **Furthest-failure diagnostics**: every run remembers the deepest point
//!   the input got to, reported as a [`SyntaxError`]
//! - **Two vector representations**: arrays or persistent cons lists, chosen
//!   per run through [`ParserConfig`]
//!
//! ```
//! use pegcomb::{GrammarBuilder, Parser, Cursor};
//! use pegcomb::cursors::TextCursor;
//!
//! let mut g = GrammarBuilder::new();
//! let digits = g.range('0', '9');
//! let digits = g.one_or_more(digits);
//! let number = g.concat(digits);
//! let grammar = g.build().unwrap();
//!
//! let mut parser = Parser::new(&grammar, number, TextCursor::new("42!"));
//! let found = parser.run().unwrap().unwrap();
//! assert_eq!(found.value.as_str(), Some("42"));
//! assert_eq!(found.cursor.position(), 2);
//! ```

pub mod atomic;
pub mod config;
pub mod cursor;
pub mod cursors;
pub mod error;
pub mod first_of;
pub mod grammar;
pub mod handler;
pub mod literal;
pub mod lookahead;
pub mod parser;
pub mod placeholder;
pub mod printer;
pub mod repeat;
pub mod sequence;
pub mod text;
pub mod value;
pub mod vector;


pub use atomic::Atomic;
pub use config::{DEFAULT_MAX_DEPTH, ParserConfig};
pub use cursor::{Cursor, EOI_MARKER, Peek};
pub use cursors::{SliceCursor, StreamCursor, TextCursor};
pub use error::{Error, GrammarError, ParseError, ReadablePosition, SyntaxError};
pub use grammar::{Grammar, GrammarBuilder, Rule, RuleId};
pub use handler::Action;
pub use parser::{Failure, Match, Outcome, Parser};
pub use printer::LispPrinter;
pub use text::CharClass;
pub use value::{CustomValue, Value};
pub use vector::{Vector, VectorFactory, VectorKind};
