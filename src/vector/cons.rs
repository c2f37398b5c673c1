use super::{Vector, VectorFactory, VectorKind};
use crate::value::Value;
use std::mem;
use std::rc::Rc;

/// A persistent singly-linked list.
#[derive(Clone, Debug, Default)]
pub enum ConsList {
    #[default]
    Nil,
    Node(Rc<ConsNode>),
}

#[derive(Clone, Debug)]
pub struct ConsNode {
    head: Value,
    /// Rest of the list, or any other value for an improper pair
    tail: Value,
}

impl ConsNode {
    pub fn new(head: Value, tail: Value) -> Self {
        ConsNode { head, tail }
    }

    pub fn head(&self) -> &Value {
        &self.head
    }

    pub fn tail(&self) -> &Value {
        &self.tail
    }

    /// The following cell, if the tail continues the list
    pub fn next_node(&self) -> Option<&ConsNode> {
        match &self.tail {
            Value::Seq(Vector::Cons(ConsList::Node(node))) => Some(node.as_ref()),
            _ => None,
        }
    }
}

// Unlink uniquely owned tails one cell at a time so that dropping a long list
// does not recurse once per element.
impl Drop for ConsNode {
    fn drop(&mut self) {
        let mut tail = mem::replace(&mut self.tail, Value::None);
        while let Value::Seq(Vector::Cons(ConsList::Node(node))) = tail {
            match Rc::try_unwrap(node) {
                Ok(mut node) => tail = mem::replace(&mut node.tail, Value::None),
                Err(_) => break,
            }
        }
    }
}

impl ConsList {
    pub fn first_node(&self) -> Option<&ConsNode> {
        match self {
            ConsList::Nil => None,
            ConsList::Node(node) => Some(node.as_ref()),
        }
    }

    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut node = self.first_node();
        while let Some(current) = node {
            count += 1;
            node = current.next_node();
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ConsList::Nil)
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        let mut node = self.first_node()?;
        for _ in 0..index {
            node = node.next_node()?;
        }
        Some(node.head())
    }

    pub fn improper_tail(&self) -> Option<&Value> {
        let mut node = self.first_node()?;
        loop {
            match node.tail() {
                Value::Seq(Vector::Cons(ConsList::Nil)) => return None,
                Value::Seq(Vector::Cons(ConsList::Node(next))) => node = next.as_ref(),
                other => return Some(other),
            }
        }
    }
}

/// Builds cons-backed vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsVectorFactory;

impl VectorFactory for ConsVectorFactory {
    fn kind(&self) -> VectorKind {
        VectorKind::Cons
    }

    fn empty(&self) -> Vector {
        Vector::nil()
    }

    fn create(&self, values: Vec<Value>) -> Vector {
        values
            .into_iter()
            .rev()
            .fold(Vector::nil(), |list, value| {
                Vector::cons(value, Value::Seq(list))
            })
    }

    fn insert_before(&self, value: Value, vector: &Vector) -> Vector {
        match vector {
            Vector::Cons(_) => Vector::cons(value, Value::Seq(vector.clone())),
            Vector::Array(items) => {
                let mut values = Vec::with_capacity(items.len() + 1);
                values.push(value);
                values.extend(items.iter().cloned());
                self.create(values)
            }
        }
    }

    fn reverse(&self, vector: &Vector) -> Vector {
        vector.iter().fold(Vector::nil(), |list, value| {
            Vector::cons(value.clone(), Value::Seq(list))
        })
    }
}
