use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::grammar::{GrammarBuilder, Rule, RuleId};
use crate::parser::{Outcome, Parser};

impl<E: Atomic> GrammarBuilder<E> {
    /// Ordered choice: the first of `items` that matches wins
    pub fn first_of(&mut self, items: impl IntoIterator<Item = RuleId>) -> RuleId {
        self.push(Rule::FirstOf(items.into_iter().collect()))
    }
}

impl<'g, C: Cursor> Parser<'g, C> {
    pub(crate) fn match_first_of(&mut self, items: &[RuleId], cursor: C) -> Outcome<C> {
        self.descend(cursor.position(), |parser| {
            for &item in items {
                if let Some(found) = parser.apply(item, cursor.clone())? {
                    return Ok(Some(found));
                }
            }
            Ok(None)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::TextCursor;
    use crate::value::Value;

    #[test]
    fn test_first_success_wins() {
        let mut g = GrammarBuilder::new();
        let a = g.literal('a');
        let ab = g.word("ab".chars());
        let short_first = g.first_of([a, ab]);
        let long_first = g.first_of([ab, a]);
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, short_first, TextCursor::new("ab"));
        let found = parser.run().unwrap().unwrap();
        assert_eq!(found.cursor.position(), 1);
        assert_eq!(found.value, Value::Char('a'));

        let found = parser
            .match_rule(long_first, TextCursor::new("ab"))
            .unwrap()
            .unwrap();
        assert_eq!(found.cursor.position(), 2);
    }

    #[test]
    fn test_alternatives_restart_at_same_cursor() {
        let mut g = GrammarBuilder::new();
        let x = g.literal('x');
        let a = g.literal('a');
        let b = g.literal('b');
        let xa = g.sequence([x, a]);
        let xb = g.sequence([x, b]);
        let choice = g.first_of([xa, xb]);
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, choice, TextCursor::new("xb"));
        let found = parser.run().unwrap().unwrap();
        assert_eq!(found.cursor.position(), 2);
        assert_eq!(found.value.to_string(), "#('x' 'b')");
    }

    #[test]
    fn test_all_alternatives_fail() {
        let mut g = GrammarBuilder::new();
        let a = g.literal('a');
        let b = g.literal('b');
        let choice = g.first_of([a, b]);
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, choice, TextCursor::new("c"));
        assert!(parser.run().unwrap().is_none());
        // Both fail at position 0, the later one is kept
        assert_eq!(parser.failure().unwrap().rule, b);
        assert_eq!(parser.depth(), 0);
    }
}
