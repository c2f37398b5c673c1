use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::grammar::{GrammarBuilder, Rule, RuleId};
use crate::parser::{Match, Outcome, Parser};
use crate::value::Value;

impl<E: Atomic> GrammarBuilder<E> {
    /// All of `items` in order, producing a vector of their values
    pub fn sequence(&mut self, items: impl IntoIterator<Item = RuleId>) -> RuleId {
        self.push(Rule::Sequence(items.into_iter().collect()))
    }
}

impl<'g, C: Cursor> Parser<'g, C> {
    pub(crate) fn match_sequence(&mut self, items: &[RuleId], cursor: C) -> Outcome<C> {
        self.descend(cursor.position(), |parser| {
            let mut values = Vec::with_capacity(items.len());
            let mut current = cursor;

            for &item in items {
                match parser.apply(item, current)? {
                    Some(found) => {
                        values.push(found.value);
                        current = found.cursor;
                    }
                    None => return Ok(None),
                }
            }

            let vector = parser.factory.create(values);
            Ok(Some(Match::new(current, Value::Seq(vector))))
        })
    }
}
