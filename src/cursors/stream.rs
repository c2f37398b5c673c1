use crate::atomic::Atomic;
use crate::cursor::{Cursor, Peek};
use std::cell::{OnceCell, RefCell};
use std::fmt;
use std::rc::Rc;

/// One pulled element of the source, with a lazily created link to its successor.
struct Node<I: Iterator> {
    current: Option<I::Item>,
    position: usize,
    source: Rc<RefCell<I>>,
    next: OnceCell<Rc<Node<I>>>,
}

impl<I: Iterator> Node<I> {
    fn pull(source: Rc<RefCell<I>>, position: usize) -> Self {
        let current = source.borrow_mut().next();
        Node {
            current,
            position,
            source,
            next: OnceCell::new(),
        }
    }
}

// Unlink successors one at a time so long chains do not drop recursively.
impl<I: Iterator> Drop for Node<I> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

/// Cursor over any iterator.
///
/// Each position is backed by a shared node which remembers its successor the
/// first time the cursor advances, so revisiting a position never drives the
/// source iterator again and every cursor derived for the same position shares
/// the same node (see [`StreamCursor::same_node`]). Elements are pulled from the
/// source strictly in order.
pub struct StreamCursor<I: Iterator> {
    node: Rc<Node<I>>,
}

impl<I: Iterator> StreamCursor<I> {
    pub fn new(source: impl IntoIterator<IntoIter = I>) -> Self {
        let source = Rc::new(RefCell::new(source.into_iter()));
        StreamCursor {
            node: Rc::new(Node::pull(source, 0)),
        }
    }

    /// Whether both cursors are backed by the same memoized node
    pub fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl<I: Iterator> Clone for StreamCursor<I> {
    fn clone(&self) -> Self {
        StreamCursor {
            node: Rc::clone(&self.node),
        }
    }
}

impl<I> fmt::Debug for StreamCursor<I>
where
    I: Iterator,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamCursor")
            .field("position", &self.node.position)
            .field("current", &self.node.current)
            .finish()
    }
}

impl<I> Cursor for StreamCursor<I>
where
    I: Iterator,
    I::Item: Atomic,
{
    type Element = I::Item;

    fn peek(&self) -> Peek<Self::Element> {
        match &self.node.current {
            Some(item) => Peek::Item(item.clone()),
            None => Peek::EndOfInput,
        }
    }

    fn next(&self) -> Self {
        if self.node.current.is_none() {
            return self.clone();
        }
        let next = self.node.next.get_or_init(|| {
            Rc::new(Node::pull(
                Rc::clone(&self.node.source),
                self.node.position + 1,
            ))
        });
        StreamCursor {
            node: Rc::clone(next),
        }
    }

    fn position(&self) -> usize {
        self.node.position
    }
}
