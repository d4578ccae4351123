//! Maps query result rows onto plain Rust structs.
//!
//! ```
//! use rowmap::{stmt::Value, Record, Rows};
//!
//! #[derive(Debug, Default, PartialEq, Record)]
//! struct User {
//!     id: i32,
//!     username: String,
//!     #[column("address,omitempty")]
//!     user_addr: String,
//! }
//!
//! let mut rows = Rows::new(["id", "username", "address"])
//!     .row([Value::from(1_i32), Value::from("name1"), Value::from("addr1")])
//!     .row([Value::from(2_i32), Value::Null, Value::from("addr2")]);
//!
//! let mut users: Vec<User> = vec![];
//! rowmap::map_rows(&mut rows, &mut users).unwrap();
//!
//! assert_eq!(users.len(), 2);
//! assert_eq!(users[1].username, "");
//! ```

mod destination;
pub use destination::{Destination, Shape};

pub mod mapper;
pub use mapper::{map_rows, Mapper};

mod primitive;
pub use primitive::Primitive;

mod record;
pub use record::Record;

pub use rowmap_core::{
    schema::{self, ColumnMap, FieldDescriptor, NameMap, UnmatchedColumns},
    stmt, Cursor, Error, Result, Rows,
};

pub use rowmap_macros::Record;

/// Returns `true` if `err` reports a result set without rows.
pub fn is_empty_result(err: &Error) -> bool {
    err.is_empty_result()
}

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Error, Primitive, Record, Result};
    pub use rowmap_core::{schema::FieldDescriptor, stmt::Value};
    pub use std::{default::Default, result::Result::Ok};
}
