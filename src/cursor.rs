use crate::atomic::Atomic;
use std::fmt;

/// Marker printed in diagnostics in place of a token at end of input.
pub const EOI_MARKER: &str = "{EOI}";

/// What a cursor sees at its position: an element, or the end-of-input sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Peek<T> {
    Item(T),
    EndOfInput,
}

impl<T> Peek<T> {
    pub fn item(self) -> Option<T> {
        match self {
            Peek::Item(item) => Some(item),
            Peek::EndOfInput => None,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Peek::EndOfInput)
    }
}

impl<T: fmt::Display> fmt::Display for Peek<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Peek::Item(item) => write!(f, "{}", item),
            Peek::EndOfInput => f.write_str(EOI_MARKER),
        }
    }
}

/// Generic cursor trait for the rule interpreter
///
/// A cursor is an immutable view of a position in a sequence of elements.
/// Advancing produces a new cursor and leaves the original untouched, so rules
/// can backtrack by simply holding on to an earlier cursor.
pub trait Cursor: Clone + fmt::Debug {
    /// The type of elements this cursor iterates over
    type Element: Atomic;

    /// Get the element at the current position, or the end-of-input sentinel
    fn peek(&self) -> Peek<Self::Element>;

    /// Advance to the next element
    ///
    /// If already at the end, returns a cursor equal to this one
    fn next(&self) -> Self;

    /// Get the current 0-based position in the sequence
    ///
    /// For end-of-input cursors this is the length of the sequence
    fn position(&self) -> usize;

    /// Check if the cursor is at the end of the input
    fn eoi(&self) -> bool {
        self.peek().is_end()
    }

    /// Check if there is an element left to consume
    fn can_advance(&self) -> bool {
        !self.eoi()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_display() {
        assert_eq!(Peek::Item('a').to_string(), "a");
        assert_eq!(Peek::<char>::EndOfInput.to_string(), "{EOI}");
    }

    #[test]
    fn test_peek_item() {
        assert_eq!(Peek::Item(3u8).item(), Some(3));
        assert_eq!(Peek::<u8>::EndOfInput.item(), None);
        assert!(Peek::<u8>::EndOfInput.is_end());
        assert!(!Peek::Item(3u8).is_end());
    }
}
