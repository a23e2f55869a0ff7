use crate::shape::{Shape, ShapeRef};
use std::sync::Arc;

/// The committed shapes, in paint order (first painted first).
///
/// Cloning a document copies shape pointers only, so it doubles as the
/// history snapshot type: a clone is an independent value that later edits
/// to the original can never reach.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    shapes: Vec<ShapeRef>,
}

impl Document {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    pub fn add_shape(&mut self, shape: Shape) -> ShapeRef {
        let shape = Arc::new(shape);
        self.shapes.push(Arc::clone(&shape));
        shape
    }

    pub fn shapes(&self) -> &[ShapeRef] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().map(|shape| shape.as_ref())
    }
}
