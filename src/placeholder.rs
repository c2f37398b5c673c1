//! Forward references for recursive grammars.
//!
//! A placeholder is allocated before the rule it stands for exists, used as a
//! child like any other rule, and later bound with
//! [`GrammarBuilder::define`]. Building fails while any placeholder is unbound.

use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::GrammarError;
use crate::grammar::{GrammarBuilder, Rule, RuleId};
use crate::parser::{Outcome, Parser};

impl<E: Atomic> GrammarBuilder<E> {
    pub fn placeholder(&mut self) -> RuleId {
        self.push_slot()
    }

    /// Bind `placeholder` to `target`. Each placeholder is bound exactly once.
    pub fn define(&mut self, placeholder: RuleId, target: RuleId) -> Result<(), GrammarError> {
        if placeholder == target {
            return Err(GrammarError::SelfReference(placeholder));
        }
        if target.index() >= self.len() {
            return Err(GrammarError::UnknownRule(target));
        }
        let slot = self
            .slot_mut(placeholder)
            .ok_or(GrammarError::UnknownRule(placeholder))?;
        match slot {
            Some(Rule::Placeholder(_)) => return Err(GrammarError::AlreadyDefined(placeholder)),
            Some(_) => return Err(GrammarError::NotAPlaceholder(placeholder)),
            None => {}
        }
        *slot = Some(Rule::Placeholder(target));
        Ok(())
    }
}

impl<'g, C: Cursor> Parser<'g, C> {
    pub(crate) fn match_placeholder(&mut self, target: RuleId, cursor: C) -> Outcome<C> {
        self.descend(cursor.position(), |parser| parser.apply(target, cursor))
    }
}
