mod common;

use common::*;
use pretty_assertions::assert_eq;
use rowmap::{
    is_empty_result, map_rows, stmt::Value, Cursor, Error, FieldDescriptor, Mapper, Record, Rows,
    UnmatchedColumns,
};

#[test]
fn empty_result_into_struct() {
    init_logging();

    let mut rows = empty_rows();
    let mut dest = DemoProto::default();

    let err = map_rows(&mut rows, &mut dest).unwrap_err();

    assert!(is_empty_result(&err));
    assert_eq!(err.to_string(), "no rows in result set");
    assert_eq!(dest, DemoProto::default());
}

#[test]
fn empty_result_into_vec() {
    let mut rows = empty_rows();
    let mut dest: Vec<Box<DemoProto>> = vec![];

    let err = map_rows(&mut rows, &mut dest).unwrap_err();

    assert!(is_empty_result(&err));
    assert!(dest.is_empty());
}

#[test]
fn empty_result_with_lenient_mapper() {
    let mut rows = Rows::new(["id", "extra"]);
    let mut dest: Vec<DemoNoTag> = vec![];

    let err = Mapper::builder()
        .unmatched_columns(UnmatchedColumns::Ignore)
        .build()
        .map_rows(&mut rows, &mut dest)
        .unwrap_err();

    assert!(err.is_empty_result());
}

#[test]
fn is_empty_result_only_matches_empty_results() {
    assert!(is_empty_result(&Error::empty_result()));

    assert!(!is_empty_result(&Error::unmatched_column("id")));
    assert!(!is_empty_result(&Error::cursor(anyhow::anyhow!("boom"))));
    assert!(!is_empty_result(&Error::decode("id", "id")));
    assert!(!is_empty_result(&Error::invalid_destination("bad")));
    assert!(!is_empty_result(
        &Error::empty_result().context(Error::decode("id", "id"))
    ));
}

#[test]
fn incompatible_value_is_a_decode_error() {
    let mut rows = Rows::new(["id", "username", "user_addr"]).row([
        Value::from("not a number"),
        Value::from("name1"),
        Value::from("addr1"),
    ]);
    let mut dest = DemoNoTag::new(5, "before", "before");

    let err = map_rows(&mut rows, &mut dest).unwrap_err();

    assert!(err.is_decode());
    assert!(err.root().is_type_conversion());
    assert_eq!(
        err.to_string(),
        "cannot decode column `id` into field `Id`: cannot convert String to i32"
    );
    // The partial row was discarded.
    assert_eq!(dest, DemoNoTag::new(5, "before", "before"));
}

#[test]
fn decode_error_stops_a_vec_destination() {
    let mut rows = Rows::new(["id", "username", "user_addr"])
        .row([Value::from(1_i32), Value::from("name1"), Value::from("addr1")])
        .row([Value::from(2_i32), Value::Bool(true), Value::from("addr2")])
        .row([Value::from(3_i32), Value::from("name3"), Value::from("addr3")]);
    let mut dest: Vec<DemoNoTag> = vec![];

    let err = map_rows(&mut rows, &mut dest).unwrap_err();

    assert!(err.is_decode());
    assert_eq!(dest, vec![DemoNoTag::new(1, "name1", "addr1")]);
    assert_eq!(rows.remaining(), 1);
}

#[test]
fn cursor_error_is_propagated() {
    let mut cursor = FailingCursor::new(multi_rows(), 2);
    let mut dest: Vec<DemoNoTag> = vec![];

    let err = map_rows(&mut cursor, &mut dest).unwrap_err();

    assert!(err.is_cursor());
    assert_eq!(err.to_string(), "cursor error: connection lost");
    // Rows read before the failure stay in the destination.
    assert_eq!(
        dest,
        vec![
            DemoNoTag::new(1, "name1", "addr1"),
            DemoNoTag::new(2, "name2", "addr2"),
        ]
    );
}

#[test]
fn cursor_error_before_first_row_leaves_struct_untouched() {
    let mut cursor = FailingCursor::new(multi_rows(), 0);
    let mut dest = DemoNoTag::new(5, "before", "before");

    let err = map_rows(&mut cursor, &mut dest).unwrap_err();

    assert!(err.is_cursor());
    assert!(!err.is_empty_result());
    assert_eq!(dest, DemoNoTag::new(5, "before", "before"));
}

#[test]
fn closed_cursor() {
    let mut rows = multi_rows();
    rows.close();
    let mut dest = DemoNoTag::default();

    let err = map_rows(&mut rows, &mut dest).unwrap_err();

    assert!(err.is_cursor());
}

struct ColumnsUnavailable;

impl Cursor for ColumnsUnavailable {
    fn columns(&self) -> rowmap::Result<Vec<String>> {
        Err(Error::cursor(anyhow::anyhow!("result already consumed")))
    }

    fn advance(&mut self) -> rowmap::Result<bool> {
        unreachable!("advance called without columns")
    }

    fn value(&mut self, _column: usize) -> rowmap::Result<Value> {
        unreachable!("value called without columns")
    }
}

#[test]
fn column_list_error_is_propagated() {
    let mut dest = DemoNoTag::default();

    let err = map_rows(&mut ColumnsUnavailable, &mut dest).unwrap_err();

    assert!(err.is_cursor());
}

/// Hand-written record whose descriptor table is out of order.
#[derive(Debug, Default, PartialEq)]
struct Misnumbered {
    id: i32,
    name: String,
}

impl Record for Misnumbered {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new(1, "id", None),
        FieldDescriptor::new(0, "name", None),
    ];

    fn blank() -> Self {
        Self::default()
    }

    fn load_field(&mut self, _ordinal: usize, _value: Value) -> rowmap::Result<()> {
        Ok(())
    }
}

#[test]
fn inconsistent_record_is_an_invalid_destination() {
    let mut rows = Rows::new(["id", "name"]).row([Value::from(1_i32), Value::from("a")]);
    let mut dest: Vec<Misnumbered> = vec![];

    let err = map_rows(&mut rows, &mut dest).unwrap_err();

    assert!(err.is_invalid_destination());
    assert_eq!(rows.remaining(), 1);
    assert!(dest.is_empty());
}

/// Hand-written record that advertises a field it cannot load.
#[derive(Debug, Default, PartialEq)]
struct Partial {
    id: i32,
}

impl Record for Partial {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new(0, "id", None),
        FieldDescriptor::new(1, "name", None),
    ];

    fn blank() -> Self {
        Self::default()
    }

    fn load_field(&mut self, ordinal: usize, value: Value) -> rowmap::Result<()> {
        match ordinal {
            0 => {
                self.id = value.try_into()?;
                Ok(())
            }
            _ => Err(Error::invalid_destination(format!(
                "no field at ordinal {ordinal}"
            ))),
        }
    }
}

#[test]
fn invalid_destination_from_load_field_is_not_a_decode_error() {
    let mut rows = Rows::new(["id", "name"]).row([Value::from(1_i32), Value::from("a")]);
    let mut dest = Partial::default();

    let err = map_rows(&mut rows, &mut dest).unwrap_err();

    assert!(err.is_invalid_destination());
    assert!(!err.is_decode());
}

#[test]
fn hand_written_record_maps_rows() {
    let mut rows = Rows::new(["id"]).row([Value::from(4_i64)]).row([Value::from(5_i64)]);
    let mut dest: Vec<Partial> = vec![];

    map_rows(&mut rows, &mut dest).unwrap();

    assert_eq!(dest, vec![Partial { id: 4 }, Partial { id: 5 }]);
}
