use crate::Record;

/// How many rows a destination takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A single record. Only the first row is read.
    One,

    /// A growable sequence. Every row is appended.
    Many,
}

/// Where mapped records go.
///
/// Any [`Record`] is a single-record destination. `Vec<T>` takes one element
/// per row, including `Vec<Box<T>>` since boxed records are records too.
pub trait Destination {
    type Record: Record;

    const SHAPE: Shape;

    /// Hands a fully decoded record to the destination.
    fn push(&mut self, record: Self::Record);
}

impl<T: Record> Destination for T {
    type Record = T;

    const SHAPE: Shape = Shape::One;

    fn push(&mut self, record: T) {
        *self = record;
    }
}

impl<T: Record> Destination for Vec<T> {
    type Record = T;

    const SHAPE: Shape = Shape::Many;

    fn push(&mut self, record: T) {
        Vec::push(self, record);
    }
}
