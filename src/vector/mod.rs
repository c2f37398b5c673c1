//! Immutable vectors of values with two interchangeable representations.
//!
//! Combinators collect child results into a [`Vector`] built by the
//! [`VectorFactory`] the running parser was configured with:
//!
//! - [`ArrayVectorFactory`] materializes every vector as one shared array.
//!   Indexing is cheap, prepending copies.
//! - [`ConsVectorFactory`] builds persistent singly-linked lists. Prepending
//!   shares the tail, indexing walks the list.
//!
//! Both factories accept vectors of either representation, and vectors compare
//! equal when their elements do, so code written against the factory contract
//! never needs to know which representation is active.

pub mod array;
pub mod cons;

pub use array::ArrayVectorFactory;
pub use cons::{ConsList, ConsNode, ConsVectorFactory};

use crate::value::Value;
use std::fmt;
use std::ops::Index;
use std::rc::Rc;

#[derive(Clone, Debug)]
pub enum Vector {
    Array(Rc<[Value]>),
    Cons(ConsList),
}

impl Vector {
    /// Empty cons list
    pub fn nil() -> Self {
        Vector::Cons(ConsList::Nil)
    }

    /// A cons cell; `tail` does not have to be a list, which makes an
    /// improper (dotted) pair.
    pub fn cons(head: Value, tail: Value) -> Self {
        Vector::Cons(ConsList::Node(Rc::new(ConsNode::new(head, tail))))
    }

    pub fn kind(&self) -> VectorKind {
        match self {
            Vector::Array(_) => VectorKind::Array,
            Vector::Cons(_) => VectorKind::Cons,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Vector::Array(items) => items.len(),
            Vector::Cons(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        match self {
            Vector::Array(items) => items.get(index),
            Vector::Cons(list) => list.get(index),
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        match self {
            Vector::Array(items) => Iter::Array(items.iter()),
            Vector::Cons(list) => Iter::Cons(list.first_node()),
        }
    }

    /// Tail of the last cell when it is not a list (cons vectors only)
    pub fn improper_tail(&self) -> Option<&Value> {
        match self {
            Vector::Array(_) => None,
            Vector::Cons(list) => list.improper_tail(),
        }
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.iter().cloned().collect()
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().eq(other.iter())
            && self.improper_tail() == other.improper_tail()
    }
}

impl Index<usize> for Vector {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "index {} out of range for vector of length {}",
                index,
                self.len()
            ),
        }
    }
}

impl<'v> IntoIterator for &'v Vector {
    type Item = &'v Value;
    type IntoIter = Iter<'v>;

    fn into_iter(self) -> Iter<'v> {
        self.iter()
    }
}

/// Iterator over the elements of a [`Vector`], in order.
pub enum Iter<'v> {
    Array(std::slice::Iter<'v, Value>),
    Cons(Option<&'v ConsNode>),
}

impl<'v> Iterator for Iter<'v> {
    type Item = &'v Value;

    fn next(&mut self) -> Option<&'v Value> {
        match self {
            Iter::Array(items) => items.next(),
            Iter::Cons(node) => {
                let current = node.take()?;
                *node = current.next_node();
                Some(current.head())
            }
        }
    }
}

/// Selects the vector representation used by a parser run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VectorKind {
    #[default]
    Array,
    Cons,
}

impl VectorKind {
    pub fn factory(self) -> &'static dyn VectorFactory {
        match self {
            VectorKind::Array => &ArrayVectorFactory,
            VectorKind::Cons => &ConsVectorFactory,
        }
    }
}

/// Operations every vector representation provides.
///
/// All operations return new vectors; their inputs are never modified.
pub trait VectorFactory: fmt::Debug {
    fn kind(&self) -> VectorKind;

    fn empty(&self) -> Vector;

    fn create(&self, values: Vec<Value>) -> Vector;

    /// A vector with `value` at index 0 followed by the elements of `vector`
    fn insert_before(&self, value: Value, vector: &Vector) -> Vector;

    fn reverse(&self, vector: &Vector) -> Vector;
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: [VectorKind; 2] = [VectorKind::Array, VectorKind::Cons];

    fn chars(text: &str) -> Vec<Value> {
        text.chars().map(Value::Char).collect()
    }

    #[test]
    fn test_reverse_indexes_mirror() {
        for kind in KINDS {
            let factory = kind.factory();
            for text in ["", "a", "ab", "abcde"] {
                let items = chars(text);
                let n = items.len();
                let reversed = factory.reverse(&factory.create(items.clone()));
                assert_eq!(reversed.len(), n, "{:?}", kind);
                for i in 0..n {
                    assert_eq!(reversed[i], items[n - 1 - i], "{:?} {}", kind, text);
                }
            }
        }
    }

    #[test]
    fn test_insert_before_adds_one_at_front() {
        for kind in KINDS {
            let factory = kind.factory();
            let mut vector = factory.empty();
            for (i, ch) in "xyz".chars().enumerate() {
                let longer = factory.insert_before(Value::Char(ch), &vector);
                assert_eq!(longer.len(), vector.len() + 1);
                assert_eq!(longer[0], Value::Char(ch));
                assert_eq!(longer.len(), i + 1);
                vector = longer;
            }
            assert_eq!(vector.to_vec(), chars("zyx"));
        }
    }

    #[test]
    fn test_insert_before_leaves_input_alone() {
        for kind in KINDS {
            let factory = kind.factory();
            let base = factory.create(chars("bc"));
            let _ = factory.insert_before(Value::Char('a'), &base);
            assert_eq!(base.to_vec(), chars("bc"));
        }
    }

    #[test]
    fn test_representations_compare_equal() {
        let array = VectorKind::Array.factory().create(chars("abc"));
        let cons = VectorKind::Cons.factory().create(chars("abc"));
        assert_eq!(array, cons);
        assert_eq!(array.kind(), VectorKind::Array);
        assert_eq!(cons.kind(), VectorKind::Cons);
        assert_ne!(array, VectorKind::Cons.factory().create(chars("ab")));
    }

    #[test]
    fn test_factories_accept_foreign_vectors() {
        let array = VectorKind::Array.factory().create(chars("bc"));
        let cons = VectorKind::Cons.factory().create(chars("bc"));

        let from_array = VectorKind::Cons.factory().insert_before(Value::Char('a'), &array);
        assert_eq!(from_array.kind(), VectorKind::Cons);
        assert_eq!(from_array.to_vec(), chars("abc"));

        let from_cons = VectorKind::Array.factory().insert_before(Value::Char('a'), &cons);
        assert_eq!(from_cons.kind(), VectorKind::Array);
        assert_eq!(from_cons.to_vec(), chars("abc"));

        let reversed = VectorKind::Array.factory().reverse(&cons);
        assert_eq!(reversed.to_vec(), chars("cb"));
    }

    #[test]
    fn test_get_out_of_range() {
        for kind in KINDS {
            let vector = kind.factory().create(chars("ab"));
            assert_eq!(vector.get(1), Some(&Value::Char('b')));
            assert_eq!(vector.get(2), None);
            assert!(kind.factory().empty().is_empty());
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range_panics() {
        let vector = VectorKind::Cons.factory().create(chars("a"));
        let _ = &vector[3];
    }

    #[test]
    fn test_improper_pairs() {
        let pair = Vector::cons(Value::Char('a'), Value::Char('b'));
        assert_eq!(pair.len(), 1);
        assert_eq!(pair.improper_tail(), Some(&Value::Char('b')));

        let list = Vector::cons(Value::Char('a'), Value::Seq(Vector::nil()));
        assert_eq!(list.improper_tail(), None);
        assert_ne!(pair, list);
    }
}
