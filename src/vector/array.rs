use super::{Vector, VectorFactory, VectorKind};
use crate::value::Value;
use std::rc::Rc;

/// Builds array-backed vectors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayVectorFactory;

impl VectorFactory for ArrayVectorFactory {
    fn kind(&self) -> VectorKind {
        VectorKind::Array
    }

    fn empty(&self) -> Vector {
        Vector::Array(Rc::from(Vec::new()))
    }

    fn create(&self, values: Vec<Value>) -> Vector {
        Vector::Array(values.into())
    }

    fn insert_before(&self, value: Value, vector: &Vector) -> Vector {
        let mut values = Vec::with_capacity(vector.len() + 1);
        values.push(value);
        values.extend(vector.iter().cloned());
        Vector::Array(values.into())
    }

    fn reverse(&self, vector: &Vector) -> Vector {
        match vector {
            Vector::Array(_) if vector.len() <= 1 => vector.clone(),
            _ => {
                let mut values = vector.to_vec();
                values.reverse();
                Vector::Array(values.into())
            }
        }
    }
}
