//! Column-to-field resolution.
//!
//! A record type describes its fields with a static table of
//! [`FieldDescriptor`]s. [`NameMap::resolve`] turns that table into a lookup
//! from canonical name to field ordinal, and [`ColumnMap::build`] lines the
//! live cursor columns up against it.

mod column_map;
pub use column_map::{ColumnMap, UnmatchedColumns};

mod field;
pub use field::FieldDescriptor;

mod name;
pub use name::canonical_name;

mod name_map;
pub use name_map::NameMap;
