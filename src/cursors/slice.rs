use crate::atomic::Atomic;
use crate::cursor::{Cursor, Peek};

/// Cursor over an in-memory slice of elements, e.g. a token buffer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SliceCursor<'code, T: Atomic> {
    Valid { data: &'code [T], position: usize },
    EndOfInput { data: &'code [T] },
}

impl<'code, T: Atomic> SliceCursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        if data.is_empty() {
            return SliceCursor::EndOfInput { data };
        }
        SliceCursor::Valid { data, position: 0 }
    }

    /// Get the source data without consuming the cursor
    pub fn source(&self) -> &'code [T] {
        match self {
            SliceCursor::Valid { data, .. } => data,
            SliceCursor::EndOfInput { data } => data,
        }
    }

    /// The elements not consumed yet
    pub fn rest(&self) -> &'code [T] {
        let data = self.source();
        &data[self.position()..]
    }
}

impl<'code, T: Atomic> Cursor for SliceCursor<'code, T> {
    type Element = T;

    fn peek(&self) -> Peek<Self::Element> {
        match self {
            SliceCursor::Valid { data, position } => Peek::Item(data[*position].clone()),
            SliceCursor::EndOfInput { .. } => Peek::EndOfInput,
        }
    }

    fn next(&self) -> Self {
        match *self {
            SliceCursor::Valid { data, position } => {
                if position + 1 >= data.len() {
                    SliceCursor::EndOfInput { data }
                } else {
                    SliceCursor::Valid {
                        data,
                        position: position + 1,
                    }
                }
            }
            SliceCursor::EndOfInput { data } => SliceCursor::EndOfInput { data },
        }
    }

    fn position(&self) -> usize {
        match self {
            SliceCursor::Valid { position, .. } => *position,
            SliceCursor::EndOfInput { data } => data.len(),
        }
    }
}
