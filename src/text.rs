//! Character rules for grammars over text.

use crate::grammar::{GrammarBuilder, RuleId};
use crate::value::Value;

/// Unicode character categories usable with [`GrammarBuilder::class`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Letter,
    Lowercase,
    Uppercase,
    /// ASCII `0`..=`9`
    Digit,
    /// Any Unicode numeric character
    Numeric,
    Alphanumeric,
    Whitespace,
    Punctuation,
    Control,
}

impl CharClass {
    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Letter => c.is_alphabetic(),
            CharClass::Lowercase => c.is_lowercase(),
            CharClass::Uppercase => c.is_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Numeric => c.is_numeric(),
            CharClass::Alphanumeric => c.is_alphanumeric(),
            CharClass::Whitespace => c.is_whitespace(),
            CharClass::Punctuation => c.is_ascii_punctuation(),
            CharClass::Control => c.is_control(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Letter => "letter",
            CharClass::Lowercase => "lowercase letter",
            CharClass::Uppercase => "uppercase letter",
            CharClass::Digit => "digit",
            CharClass::Numeric => "numeric character",
            CharClass::Alphanumeric => "letter or digit",
            CharClass::Whitespace => "whitespace",
            CharClass::Punctuation => "punctuation",
            CharClass::Control => "control character",
        }
    }
}

impl GrammarBuilder<char> {
    /// Any character of `chars`
    pub fn any_of(&mut self, chars: &str) -> RuleId {
        let set: Vec<char> = chars.chars().collect();
        let label = format!("one of \"{}\"", chars);
        self.test(label, move |c| set.contains(c))
    }

    /// Any character not in `chars`; fails at end of input
    pub fn none_of(&mut self, chars: &str) -> RuleId {
        let set: Vec<char> = chars.chars().collect();
        let label = format!("none of \"{}\"", chars);
        self.test(label, move |c| !set.contains(c))
    }

    /// Any character between `low` and `high`, inclusive
    pub fn range(&mut self, low: char, high: char) -> RuleId {
        self.test(format!("'{}'..='{}'", low, high), move |c| {
            (low..=high).contains(c)
        })
    }

    pub fn class(&mut self, class: CharClass) -> RuleId {
        self.test(class.label(), move |c| class.contains(*c))
    }

    /// The characters of `text` in order, producing `text` as a string
    pub fn string(&mut self, text: &str) -> RuleId {
        self.word_as(text.chars(), Value::from(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::TextCursor;
    use crate::Parser;

    #[test]
    fn test_any_of_and_none_of() {
        let mut g = GrammarBuilder::new();
        let op = g.any_of("+-*/");
        let other = g.none_of("+-*/");
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, op, TextCursor::new("*"));
        assert_eq!(parser.run().unwrap().unwrap().value, Value::Char('*'));
        assert!(parser.match_rule(op, TextCursor::new("x")).unwrap().is_none());

        assert!(parser.match_rule(other, TextCursor::new("x")).unwrap().is_some());
        assert!(parser.match_rule(other, TextCursor::new("-")).unwrap().is_none());
        assert!(parser.match_rule(other, TextCursor::new("")).unwrap().is_none());
        assert_eq!(grammar.describe(op), "one of \"+-*/\"");
    }

    #[test]
    fn test_range() {
        let mut g = GrammarBuilder::new();
        let hex = g.range('a', 'f');
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, hex, TextCursor::new("c"));
        assert!(parser.run().unwrap().is_some());
        assert!(parser.match_rule(hex, TextCursor::new("g")).unwrap().is_none());
        assert_eq!(grammar.describe(hex), "'a'..='f'");
    }

    #[test]
    fn test_classes() {
        let cases = [
            (CharClass::Letter, 'ż', '1'),
            (CharClass::Lowercase, 'a', 'A'),
            (CharClass::Uppercase, 'Ł', 'ł'),
            (CharClass::Digit, '7', '٣'),
            (CharClass::Numeric, '٣', 'x'),
            (CharClass::Alphanumeric, 'x', '_'),
            (CharClass::Whitespace, '\t', 'x'),
            (CharClass::Punctuation, ';', 'a'),
            (CharClass::Control, '\u{7}', ' '),
        ];

        for (class, yes, no) in cases {
            assert!(class.contains(yes), "{:?} should contain {:?}", class, yes);
            assert!(!class.contains(no), "{:?} should not contain {:?}", class, no);
        }
    }

    #[test]
    fn test_class_rule() {
        let mut g = GrammarBuilder::new();
        let letter = g.class(CharClass::Letter);
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, letter, TextCursor::new("1"));
        assert!(parser.run().unwrap().is_none());
        assert_eq!(parser.error().unwrap().expected, "letter");
    }

    #[test]
    fn test_string_value() {
        let mut g = GrammarBuilder::new();
        let keyword = g.string("żółw");
        let grammar = g.build().unwrap();

        let mut parser = Parser::new(&grammar, keyword, TextCursor::new("żółw!"));
        let found = parser.run().unwrap().unwrap();
        assert_eq!(found.value, Value::from("żółw"));
        assert_eq!(found.cursor.position(), 4);
        assert_eq!(found.cursor.rest(), "!");
    }
}
