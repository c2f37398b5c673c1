use crate::cursor::EOI_MARKER;
use crate::grammar::RuleId;
use thiserror::Error;

/// A malformed grammar, reported while building it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("placeholder {0} was never defined")]
    UnresolvedPlaceholder(RuleId),
    #[error("placeholder {0} is already defined")]
    AlreadyDefined(RuleId),
    #[error("rule {0} is not a placeholder")]
    NotAPlaceholder(RuleId),
    #[error("placeholder {0} cannot be defined as itself")]
    SelfReference(RuleId),
    #[error("rule {0} is not part of this grammar")]
    UnknownRule(RuleId),
    #[error("repetition {rule} has a minimum of {min} above its maximum of {max}")]
    InvalidBounds { rule: RuleId, min: usize, max: usize },
    #[error("handler {rule} extracts element {index} from a sequence of {len}")]
    ExtractOutOfRange { rule: RuleId, index: usize, len: usize },
}

/// A fault that aborts a parser run. Ordinary mismatches are not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("recursion limit of {limit} exceeded at position {position}")]
    RecursionLimit { limit: usize, position: usize },
    #[error("rule {0} is not part of this grammar")]
    UnknownRule(RuleId),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// The furthest point a run got to before the input stopped fitting the grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Syntax error at {position} (unexpected '{}')", .unexpected.as_deref().unwrap_or(EOI_MARKER))]
pub struct SyntaxError {
    /// 0-based position of the offending element
    pub position: usize,
    /// The offending element, `None` at end of input
    pub unexpected: Option<String>,
    /// The rule that recorded the failure
    pub rule: RuleId,
    /// Description of what that rule accepts
    pub expected: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    /// Characters from the start of the line
    pub offset: usize,
}

impl SyntaxError {
    pub fn at_end(&self) -> bool {
        self.unexpected.is_none()
    }

    /// Line number and offset of the error within `source`
    pub fn readable_position(&self, source: &str) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, ch) in source.chars().enumerate() {
            if i >= self.position {
                break;
            }
            if ch == '\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            offset: self.position.saturating_sub(line_start),
        }
    }

    /// Multi-line report for text input, with up to two lines of context on
    /// each side of the error and a pointer at the offending character.
    pub fn render(&self, source: &str) -> String {
        let pos = self.readable_position(source);
        let mut out = format!(
            "{}\n  expected {} at line {}, offset {}\n\n",
            self, self.expected, pos.line, pos.offset
        );
        for line in context_lines(source, pos) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

fn context_lines(source: &str, pos: ReadablePosition) -> Vec<String> {
    let mut lines = Vec::new();

    for (index, content) in source.split('\n').enumerate() {
        let number = index + 1;
        if number < pos.line.saturating_sub(2) || number > pos.line + 2 {
            continue;
        }
        let prefix = if number == pos.line {
            format!("  > {} | ", number)
        } else {
            format!("    {} | ", number)
        };
        lines.push(format!("{}{}", prefix, content.trim_end_matches('\r')));

        if number == pos.line {
            let pointer_offset = prefix.len() + pos.offset;
            lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
        }
    }

    lines
}
