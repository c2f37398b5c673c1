use crate::cursor::{Cursor, Peek};

/// Cursor over the characters of a string.
///
/// Positions count characters (code points), not bytes, so diagnostics line
/// up with what a reader sees. The cursor is `Copy`; advancing decodes one
/// character starting at the current byte offset.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextCursor<'code> {
    text: &'code str,
    /// Byte offset of the current character in `text`
    offset: usize,
    /// Character index of the current character
    position: usize,
}

impl<'code> TextCursor<'code> {
    pub fn new(text: &'code str) -> Self {
        TextCursor {
            text,
            offset: 0,
            position: 0,
        }
    }

    pub fn source(&self) -> &'code str {
        self.text
    }

    /// The text not consumed yet
    pub fn rest(&self) -> &'code str {
        &self.text[self.offset..]
    }

    /// Byte offset of the cursor in the source text
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<'code> Cursor for TextCursor<'code> {
    type Element = char;

    fn peek(&self) -> Peek<char> {
        match self.rest().chars().next() {
            Some(ch) => Peek::Item(ch),
            None => Peek::EndOfInput,
        }
    }

    fn next(&self) -> Self {
        match self.rest().chars().next() {
            Some(ch) => TextCursor {
                text: self.text,
                offset: self.offset + ch.len_utf8(),
                position: self.position + 1,
            },
            None => *self,
        }
    }

    fn position(&self) -> usize {
        self.position
    }
}
