#![allow(dead_code)]

use rowmap::{stmt::Value, Cursor, Record, Result, Rows};

/// Struct shaped like protobuf-generated code: tagged fields plus internal
/// bookkeeping that never maps to a column.
#[derive(Debug, Default, Clone, PartialEq, Record)]
#[allow(non_snake_case)]
pub struct DemoProto {
    #[column("id,omitempty")]
    pub Id: i32,
    #[column("username,omitempty")]
    pub Username: String,
    #[column("user_addr,omitempty")]
    pub UserAddr: String,
    #[column("-")]
    pub XXX_unrecognized: Vec<u8>,
    #[column("-")]
    pub XXX_sizecache: i32,
}

/// Same fields, matched by name only.
#[derive(Debug, Default, Clone, PartialEq, Record)]
#[allow(non_snake_case)]
pub struct DemoNoTag {
    pub Id: i32,
    pub Username: String,
    pub UserAddr: String,
}

impl DemoProto {
    pub fn new(id: i32, username: &str, user_addr: &str) -> DemoProto {
        DemoProto {
            Id: id,
            Username: username.to_string(),
            UserAddr: user_addr.to_string(),
            ..DemoProto::default()
        }
    }
}

impl DemoNoTag {
    pub fn new(id: i32, username: &str, user_addr: &str) -> DemoNoTag {
        DemoNoTag {
            Id: id,
            Username: username.to_string(),
            UserAddr: user_addr.to_string(),
        }
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn empty_rows() -> Rows {
    Rows::new(["id", "username", "user_addr"])
}

pub fn one_row() -> Rows {
    empty_rows().row([Value::from(1_i32), Value::from("name1"), Value::from("addr1")])
}

pub fn multi_rows() -> Rows {
    empty_rows()
        .row([Value::from(1_i32), Value::from("name1"), Value::from("addr1")])
        .row([Value::from(2_i32), Value::from("name2"), Value::from("addr2")])
        .row([Value::from(3_i32), Value::from("name3"), Value::from("addr3")])
}

/// Wraps a cursor and fails once `fail_at` rows have been read, as a cursor
/// closed by another party would.
pub struct FailingCursor {
    pub rows: Rows,
    pub fail_at: usize,
    pub advanced: usize,
}

impl FailingCursor {
    pub fn new(rows: Rows, fail_at: usize) -> FailingCursor {
        FailingCursor {
            rows,
            fail_at,
            advanced: 0,
        }
    }
}

impl Cursor for FailingCursor {
    fn columns(&self) -> Result<Vec<String>> {
        self.rows.columns()
    }

    fn advance(&mut self) -> Result<bool> {
        if self.advanced == self.fail_at {
            return Err(rowmap::Error::cursor(anyhow::anyhow!("connection lost")));
        }

        self.advanced += 1;
        self.rows.advance()
    }

    fn value(&mut self, column: usize) -> Result<Value> {
        self.rows.value(column)
    }
}
