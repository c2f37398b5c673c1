use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::grammar::{GrammarBuilder, Rule, RuleId};
use crate::parser::{Match, Outcome, Parser};
use crate::value::Value;

impl<E: Atomic> GrammarBuilder<E> {
    /// Succeeds without consuming when `item` matches here
    pub fn and(&mut self, item: RuleId) -> RuleId {
        self.push(Rule::Lookahead {
            item,
            negate: false,
        })
    }

    /// Succeeds without consuming when `item` does not match here
    pub fn not(&mut self, item: RuleId) -> RuleId {
        self.push(Rule::Lookahead { item, negate: true })
    }
}

impl<'g, C: Cursor> Parser<'g, C> {
    // Failures inside the probed item are still recorded by the item itself.
    pub(crate) fn match_lookahead(&mut self, item: RuleId, negate: bool, cursor: C) -> Outcome<C> {
        let matched = self.apply(item, cursor.clone())?.is_some();
        if matched != negate {
            Ok(Some(Match::new(cursor, Value::None)))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{StreamCursor, TextCursor};

    #[test]
    fn test_and_does_not_consume() {
        let mut g = GrammarBuilder::new();
        let a = g.literal('a');
        let peek_a = g.and(a);
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, peek_a, TextCursor::new("a"));
        let found = parser.run().unwrap().unwrap();
        assert_eq!(found.cursor.position(), 0);
        assert_eq!(found.value, Value::None);

        assert!(parser.match_rule(peek_a, TextCursor::new("b")).unwrap().is_none());
    }

    #[test]
    fn test_not_inverts() {
        let mut g = GrammarBuilder::new();
        let a = g.literal('a');
        let not_a = g.not(a);
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, not_a, TextCursor::new("b"));
        let found = parser.run().unwrap().unwrap();
        assert_eq!(found.cursor.position(), 0);

        assert!(parser.match_rule(not_a, TextCursor::new("a")).unwrap().is_none());
        assert!(parser.match_rule(not_a, TextCursor::new("")).unwrap().is_some());
    }

    #[test]
    fn test_returns_identical_cursor() {
        let mut g = GrammarBuilder::new();
        let a = g.literal('a');
        let b = g.literal('b');
        let ab = g.sequence([a, b]);
        let peek = g.and(ab);
        let grammar = g.build().unwrap();

        let start = StreamCursor::new("ab".chars());
        let mut parser = Parser::new(&grammar, peek, start.clone());
        let found = parser.run().unwrap().unwrap();
        assert!(found.cursor.same_node(&start));
    }
}
