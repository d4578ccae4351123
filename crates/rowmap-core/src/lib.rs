pub mod cursor;
pub use cursor::{Cursor, Rows};

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{ColumnMap, FieldDescriptor, NameMap, UnmatchedColumns};

pub mod stmt;

/// A Result type alias that uses rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
