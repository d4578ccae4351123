use crate::{stmt::Value, FieldDescriptor, Result};

/// A struct that can be populated from a result row.
///
/// Implemented by `#[derive(Record)]`. A hand-written implementation must keep
/// `FIELDS` in declaration order with ordinals matching positions.
pub trait Record: Sized {
    /// One descriptor per field, in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    /// Returns a record with every field at its zero value.
    fn blank() -> Self;

    /// Decodes `value` into the field at `ordinal`.
    fn load_field(&mut self, ordinal: usize, value: Value) -> Result<()>;
}

impl<T: Record> Record for Box<T> {
    const FIELDS: &'static [FieldDescriptor] = T::FIELDS;

    fn blank() -> Self {
        Box::new(T::blank())
    }

    fn load_field(&mut self, ordinal: usize, value: Value) -> Result<()> {
        (**self).load_field(ordinal, value)
    }
}
