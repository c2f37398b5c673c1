use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::grammar::{GrammarBuilder, Rule, RuleId};
use crate::parser::{Match, Outcome, Parser};
use crate::value::Value;

impl<E: Atomic> GrammarBuilder<E> {
    /// Greedily match `item` between `min` and `max` times (`None` for no
    /// upper bound), producing a vector of the results
    pub fn repeat(&mut self, item: RuleId, min: usize, max: Option<usize>) -> RuleId {
        self.push(Rule::Repeat { item, min, max })
    }

    pub fn zero_or_more(&mut self, item: RuleId) -> RuleId {
        self.repeat(item, 0, None)
    }

    pub fn one_or_more(&mut self, item: RuleId) -> RuleId {
        self.repeat(item, 1, None)
    }

    pub fn optional(&mut self, item: RuleId) -> RuleId {
        self.repeat(item, 0, Some(1))
    }
}

impl<'g, C: Cursor> Parser<'g, C> {
    pub(crate) fn match_repeat(
        &mut self,
        id: RuleId,
        item: RuleId,
        min: usize,
        max: Option<usize>,
        cursor: C,
    ) -> Outcome<C> {
        self.descend(cursor.position(), |parser| {
            let mut values = Vec::new();
            let mut current = cursor;

            while max.is_none_or(|max| values.len() < max) {
                let Some(found) = parser.apply(item, current.clone())? else {
                    if values.len() < min {
                        parser.record_failure(&current, id);
                    }
                    break;
                };

                let progressed = found.cursor.position() > current.position();
                values.push(found.value);
                current = found.cursor;

                // An unbounded loop over an item that consumes nothing would
                // never end; once the minimum is met it would only repeat itself.
                if !progressed && max.is_none() && values.len() >= min {
                    break;
                }
            }

            if values.len() < min {
                return Ok(None);
            }
            let vector = parser.factory.create(values);
            Ok(Some(Match::new(current, Value::Seq(vector))))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::TextCursor;

    fn count(found: &Match<TextCursor>) -> usize {
        found.value.as_vector().unwrap().len()
    }

    #[test]
    fn test_zero_or_more() {
        let mut g = GrammarBuilder::new();
        let a = g.literal('a');
        let many = g.zero_or_more(a);
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, many, TextCursor::new("aaab"));
        let found = parser.run().unwrap().unwrap();
        assert_eq!(found.cursor.position(), 3);
        assert_eq!(count(&found), 3);

        let found = parser.match_rule(many, TextCursor::new("b")).unwrap().unwrap();
        assert_eq!(found.cursor.position(), 0);
        assert_eq!(count(&found), 0);
    }

    #[test]
    fn test_one_or_more_needs_one() {
        let mut g = GrammarBuilder::new();
        let a = g.literal('a');
        let some = g.one_or_more(a);
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, some, TextCursor::new("b"));
        assert!(parser.run().unwrap().is_none());
        assert_eq!(parser.failure().unwrap().rule, some);
        assert_eq!(parser.failure().unwrap().cursor.position(), 0);
    }

    #[test]
    fn test_optional_takes_at_most_one() {
        let mut g = GrammarBuilder::new();
        let a = g.literal('a');
        let maybe = g.optional(a);
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, maybe, TextCursor::new("aa"));
        let found = parser.run().unwrap().unwrap();
        assert_eq!(found.cursor.position(), 1);
        assert_eq!(count(&found), 1);
    }

    #[test]
    fn test_bounds() {
        let mut g = GrammarBuilder::new();
        let a = g.literal('a');
        let two_to_three = g.repeat(a, 2, Some(3));
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, two_to_three, TextCursor::new("a"));
        assert!(parser.run().unwrap().is_none());

        let found = parser
            .match_rule(two_to_three, TextCursor::new("aaaaa"))
            .unwrap()
            .unwrap();
        assert_eq!(found.cursor.position(), 3);
    }

    #[test]
    fn test_below_minimum_recorded_at_last_boundary() {
        let mut g = GrammarBuilder::new();
        let a = g.literal('a');
        let b = g.literal('b');
        let ab = g.sequence([a, b]);
        let three = g.repeat(ab, 3, None);
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, three, TextCursor::new("ababx"));
        assert!(parser.run().unwrap().is_none());

        // The literal inside also failed at 4, but the repetition wrote last
        let failure = parser.failure().unwrap();
        assert_eq!(failure.cursor.position(), 4);
        assert_eq!(failure.rule, three);
    }

    #[test]
    fn test_zero_width_item_terminates() {
        let mut g = GrammarBuilder::new();
        let nothing = g.empty(Value::None);
        let forever = g.zero_or_more(nothing);
        let at_least_two = g.repeat(nothing, 2, None);
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, forever, TextCursor::new("abc"));
        let found = parser.run().unwrap().unwrap();
        assert_eq!(found.cursor.position(), 0);
        assert_eq!(count(&found), 1);

        let found = parser
            .match_rule(at_least_two, TextCursor::new("abc"))
            .unwrap()
            .unwrap();
        assert_eq!(count(&found), 2);
    }
}
