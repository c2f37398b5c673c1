//! Run context for matching a grammar against one input.
//!
//! A [`Parser`] owns everything that changes while matching: the nesting
//! depth, the deepest depth reached, and the furthest failure seen so far.
//! Rules themselves stay immutable, so one [`Grammar`] can drive any number of
//! runs.

use crate::config::ParserConfig;
use crate::cursor::Cursor;
use crate::error::{ParseError, SyntaxError};
use crate::grammar::{Grammar, Rule, RuleId};
use crate::value::Value;
use crate::vector::VectorFactory;
use log::{debug, trace, warn};

/// A successful match: where matching stopped and what it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<C> {
    pub cursor: C,
    pub value: Value,
}

impl<C> Match<C> {
    pub fn new(cursor: C, value: Value) -> Self {
        Match { cursor, value }
    }
}

/// `Ok(None)` is an ordinary mismatch, `Err` aborts the whole run.
pub type Outcome<C> = Result<Option<Match<C>>, ParseError>;

/// The furthest point at which some rule failed to match.
#[derive(Debug, Clone)]
pub struct Failure<C> {
    pub cursor: C,
    pub rule: RuleId,
    pub depth: usize,
}

pub struct Parser<'g, C: Cursor> {
    grammar: &'g Grammar<C::Element>,
    root: RuleId,
    start: C,
    config: ParserConfig,
    pub(crate) factory: &'static dyn VectorFactory,
    depth: usize,
    max_depth: usize,
    failure: Option<Failure<C>>,
}

impl<'g, C: Cursor> Parser<'g, C> {
    pub fn new(grammar: &'g Grammar<C::Element>, root: RuleId, start: C) -> Self {
        Parser::with_config(grammar, root, start, ParserConfig::default())
    }

    pub fn with_config(
        grammar: &'g Grammar<C::Element>,
        root: RuleId,
        start: C,
        config: ParserConfig,
    ) -> Self {
        Parser {
            grammar,
            root,
            start,
            config,
            factory: config.vector_kind.factory(),
            depth: 0,
            max_depth: 0,
            failure: None,
        }
    }

    pub fn grammar(&self) -> &'g Grammar<C::Element> {
        self.grammar
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Factory building every vector produced by this run
    pub fn factory(&self) -> &'static dyn VectorFactory {
        self.factory
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Deepest nesting reached since the last reset
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn failure(&self) -> Option<&Failure<C>> {
        self.failure.as_ref()
    }

    pub fn reset(&mut self) {
        self.depth = 0;
        self.max_depth = 0;
        self.failure = None;
    }

    /// Match the root rule against the start cursor with fresh run state.
    pub fn run(&mut self) -> Outcome<C> {
        self.reset();
        debug!(
            "parse started: root {} ({}) at position {}",
            self.root,
            self.grammar.describe(self.root),
            self.start.position()
        );

        let outcome = self.match_rule(self.root, self.start.clone());

        match &outcome {
            Ok(Some(found)) => debug!(
                "parse matched up to position {} (max depth {})",
                found.cursor.position(),
                self.max_depth
            ),
            Ok(None) => debug!(
                "parse failed: {} (max depth {})",
                self.describe_error(),
                self.max_depth
            ),
            Err(e) => debug!("parse aborted: {}", e),
        }
        outcome
    }

    /// Match any rule of the grammar at `cursor`, keeping the current run state.
    pub fn match_rule(&mut self, rule: RuleId, cursor: C) -> Outcome<C> {
        if !self.grammar.contains(rule) {
            return Err(ParseError::UnknownRule(rule));
        }
        self.apply(rule, cursor)
    }

    pub(crate) fn apply(&mut self, id: RuleId, cursor: C) -> Outcome<C> {
        let grammar = self.grammar;
        match grammar.node(id) {
            Rule::Empty(value) => Ok(Some(Match::new(cursor, value.clone()))),
            Rule::EmptyVector => Ok(Some(Match::new(cursor, Value::Seq(self.factory.empty())))),
            Rule::Eoi => Ok(self.match_eoi(id, cursor)),
            Rule::Any => Ok(self.match_element(id, cursor, |_| true)),
            Rule::Literal(expected) => Ok(self.match_element(id, cursor, |item| item == expected)),
            Rule::Test { predicate, .. } => Ok(self.match_element(id, cursor, |item| predicate(item))),
            Rule::Word { items, value } => Ok(self.match_word(id, items, value.as_ref(), cursor)),
            Rule::Sequence(items) => self.match_sequence(items, cursor),
            Rule::FirstOf(items) => self.match_first_of(items, cursor),
            Rule::Repeat { item, min, max } => self.match_repeat(id, *item, *min, *max, cursor),
            Rule::Lookahead { item, negate } => self.match_lookahead(*item, *negate, cursor),
            Rule::Placeholder(target) => self.match_placeholder(*target, cursor),
            Rule::Handler { item, action } => self.match_handler(*item, action, cursor),
        }
    }

    /// Run `f` one level deeper, failing when that would exceed the depth limit.
    pub(crate) fn descend<T>(
        &mut self,
        position: usize,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        self.enter(position)?;
        let result = f(self);
        self.leave();
        result
    }

    fn enter(&mut self, position: usize) -> Result<(), ParseError> {
        if let Some(limit) = self.config.max_depth {
            if self.depth >= limit {
                warn!("recursion limit of {} reached at position {}", limit, position);
                return Err(ParseError::RecursionLimit { limit, position });
            }
        }
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Remember `rule` failing at `cursor` unless something already failed
    /// further along. Ties go to the latest caller.
    pub(crate) fn record_failure(&mut self, cursor: &C, rule: RuleId) {
        let position = cursor.position();
        let recorded = self.failure.as_ref().map(|failure| failure.cursor.position());

        if recorded.is_some_and(|recorded| position < recorded) {
            return;
        }
        if recorded.is_none_or(|recorded| position > recorded) {
            trace!(
                "furthest failure moved to position {} by rule {}",
                position,
                rule
            );
        }
        self.failure = Some(Failure {
            cursor: cursor.clone(),
            rule,
            depth: self.depth,
        });
    }

    /// The furthest failure of the last run, if anything failed
    pub fn error(&self) -> Option<SyntaxError> {
        let failure = self.failure.as_ref()?;
        Some(SyntaxError {
            position: failure.cursor.position(),
            unexpected: failure.cursor.peek().item().map(|item| item.to_string()),
            rule: failure.rule,
            expected: self.grammar.describe(failure.rule),
        })
    }

    /// One-line form of [`Parser::error`], empty when nothing failed
    pub fn describe_error(&self) -> String {
        self.error().map(|error| error.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::TextCursor;
    use crate::grammar::GrammarBuilder;
    use crate::vector::VectorKind;
    use assert_matches::assert_matches;

    #[test]
    fn test_describe_error_empty_before_failure() {
        let mut g = GrammarBuilder::new();
        let a = g.literal('a');
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, a, TextCursor::new("a"));
        assert_eq!(parser.describe_error(), "");
        let found = parser.run().unwrap().unwrap();
        assert_eq!(found.cursor.position(), 1);
        assert_eq!(parser.describe_error(), "");
        assert!(parser.error().is_none());
    }

    #[test]
    fn test_failure_recorded_on_mismatch() {
        let mut g = GrammarBuilder::new();
        let a = g.literal('a');
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, a, TextCursor::new("b"));
        assert_matches!(parser.run(), Ok(None));

        let error = parser.error().unwrap();
        assert_eq!(error.position, 0);
        assert_eq!(error.unexpected.as_deref(), Some("b"));
        assert_eq!(error.rule, a);
        assert_eq!(error.expected, "'a'");
        assert_eq!(parser.describe_error(), "Syntax error at 0 (unexpected 'b')");
    }

    #[test]
    fn test_record_failure_keeps_furthest() {
        let mut g = GrammarBuilder::new();
        let a = g.literal('a');
        let b = g.literal('b');
        let grammar = g.build().unwrap();

        let start = TextCursor::new("xyz");
        let mut parser = Parser::new(&grammar, a, start);

        parser.record_failure(&start.next().next(), a);
        parser.record_failure(&start, b);
        assert_eq!(parser.failure().unwrap().rule, a);
        assert_eq!(parser.failure().unwrap().cursor.position(), 2);

        // Equal position: latest writer wins
        parser.record_failure(&start.next().next(), b);
        assert_eq!(parser.failure().unwrap().rule, b);
    }

    #[test]
    fn test_run_resets_state() {
        let mut g = GrammarBuilder::new();
        let a = g.literal('a');
        let b = g.literal('b');
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, a, TextCursor::new("a"));
        parser.match_rule(b, TextCursor::new("a")).unwrap();
        assert!(parser.failure().is_some());

        assert!(parser.run().unwrap().is_some());
        assert!(parser.failure().is_none());
    }

    #[test]
    fn test_unknown_root() {
        let mut g = GrammarBuilder::new();
        g.literal('a');
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, RuleId::new(5), TextCursor::new("a"));
        assert_matches!(parser.run(), Err(ParseError::UnknownRule(id)) if id.index() == 5);
    }

    #[test]
    fn test_depth_is_balanced() {
        let mut g = GrammarBuilder::new();
        let a = g.literal('a');
        let many = g.zero_or_more(a);
        let inner = g.sequence([many]);
        let outer = g.sequence([inner, many]);
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, outer, TextCursor::new("aaa"));
        parser.run().unwrap().unwrap();
        assert_eq!(parser.depth(), 0);
        assert_eq!(parser.max_depth(), 3);
    }

    #[test]
    fn test_config_selects_factory() {
        let mut g = GrammarBuilder::new();
        let a = g.literal('a');
        let seq = g.sequence([a]);
        let grammar = g.build().unwrap();

        for kind in [VectorKind::Array, VectorKind::Cons] {
            let config = ParserConfig::new().vector_kind(kind);
            let mut parser = Parser::with_config(&grammar, seq, TextCursor::new("a"), config);
            assert_eq!(parser.factory().kind(), kind);
            let found = parser.run().unwrap().unwrap();
            assert_eq!(found.value.as_vector().unwrap().kind(), kind);
        }
    }
}
