use rowmap_core::stmt::{Type, Value};

// ---------------------------------------------------------------------------
// integers
// ---------------------------------------------------------------------------

#[test]
fn try_from_value_i32_same_type() {
    assert_eq!(i32::try_from(Value::I32(10)).unwrap(), 10);
}

#[test]
fn try_from_value_i32_cross_type_in_range() {
    assert_eq!(i32::try_from(Value::I64(10)).unwrap(), 10);
    assert_eq!(i32::try_from(Value::U8(7)).unwrap(), 7);
}

#[test]
fn try_from_value_i32_cross_type_out_of_range() {
    let err = i32::try_from(Value::I64(i64::MAX)).unwrap_err();
    assert!(err.is_type_conversion());
    assert_eq!(err.to_string(), "cannot convert I64 to i32");
}

#[test]
fn try_from_value_u8_negative() {
    assert!(u8::try_from(Value::I8(-1)).is_err());
}

#[test]
fn try_from_value_u64_from_string() {
    assert_eq!(u64::try_from(Value::from("42")).unwrap(), 42);
}

#[test]
fn try_from_value_i64_from_bad_string() {
    let err = i64::try_from(Value::from("forty-two")).unwrap_err();
    assert_eq!(err.to_string(), "cannot convert String to i64");
}

#[test]
fn try_from_value_i16_wrong_type() {
    assert!(i16::try_from(Value::Bool(true)).is_err());
    assert!(i16::try_from(Value::F64(1.0)).is_err());
}

#[test]
fn try_from_value_integer_null() {
    assert!(i64::try_from(Value::Null).is_err());
}

// ---------------------------------------------------------------------------
// floats
// ---------------------------------------------------------------------------

#[test]
fn try_from_value_f64() {
    assert_eq!(f64::try_from(Value::F64(1.32)).unwrap(), 1.32);
    assert_eq!(f64::try_from(Value::I32(3)).unwrap(), 3.0);
    assert_eq!(f64::try_from(Value::from("2.5")).unwrap(), 2.5);
}

#[test]
fn try_from_value_f32_from_f64() {
    assert_eq!(f32::try_from(Value::F64(0.5)).unwrap(), 0.5);
}

#[test]
fn try_from_value_f64_wrong_type() {
    assert!(f64::try_from(Value::Bytes(vec![1, 2])).is_err());
}

// ---------------------------------------------------------------------------
// bool
// ---------------------------------------------------------------------------

#[test]
fn try_from_value_bool() {
    assert!(bool::try_from(Value::Bool(true)).unwrap());
    assert!(!bool::try_from(Value::Bool(false)).unwrap());
}

#[test]
fn try_from_value_bool_from_tinyint() {
    assert!(bool::try_from(Value::I8(1)).unwrap());
    assert!(!bool::try_from(Value::I64(0)).unwrap());
    assert!(bool::try_from(Value::I64(2)).is_err());
}

#[test]
fn try_from_value_bool_from_every_integer_width() {
    let ones = [
        Value::I8(1),
        Value::I16(1),
        Value::I32(1),
        Value::I64(1),
        Value::U8(1),
        Value::U16(1),
        Value::U32(1),
        Value::U64(1),
    ];
    for value in ones {
        assert!(bool::try_from(value.clone()).unwrap(), "{value:?}");
    }

    let zeros = [
        Value::I8(0),
        Value::I16(0),
        Value::I32(0),
        Value::I64(0),
        Value::U8(0),
        Value::U16(0),
        Value::U32(0),
        Value::U64(0),
    ];
    for value in zeros {
        assert!(!bool::try_from(value.clone()).unwrap(), "{value:?}");
    }
}

#[test]
fn try_from_value_bool_from_other_integers() {
    let err = bool::try_from(Value::U16(2)).unwrap_err();
    assert_eq!(err.to_string(), "cannot convert U16 to bool");

    assert!(bool::try_from(Value::I16(-1)).is_err());
    assert!(bool::try_from(Value::U64(u64::MAX)).is_err());
}

#[test]
fn try_from_value_bool_from_string() {
    assert!(bool::try_from(Value::from("true")).unwrap());
    assert!(bool::try_from(Value::from("yes")).is_err());
}

// ---------------------------------------------------------------------------
// String / bytes
// ---------------------------------------------------------------------------

#[test]
fn try_from_value_string() {
    assert_eq!(String::try_from(Value::from("name1")).unwrap(), "name1");
}

#[test]
fn try_from_value_string_from_utf8_bytes() {
    assert_eq!(
        String::try_from(Value::from(&b"addr1"[..])).unwrap(),
        "addr1"
    );
}

#[test]
fn try_from_value_string_from_invalid_utf8() {
    let err = String::try_from(Value::Bytes(vec![0xff, 0xfe])).unwrap_err();
    assert_eq!(err.to_string(), "cannot convert Bytes to String");
}

#[test]
fn try_from_value_string_wrong_type() {
    assert!(String::try_from(Value::I64(1)).is_err());
}

#[test]
fn try_from_value_bytes() {
    assert_eq!(Vec::<u8>::try_from(Value::Bytes(vec![1, 2, 3])).unwrap(), vec![1, 2, 3]);
    assert_eq!(Vec::<u8>::try_from(Value::from("ab")).unwrap(), b"ab".to_vec());
}

// ---------------------------------------------------------------------------
// Value helpers
// ---------------------------------------------------------------------------

#[test]
fn value_from_option() {
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::from("x"));
}

#[test]
fn value_ty() {
    assert_eq!(Value::from(1_u16).ty(), Type::U16);
    assert_eq!(Value::Null.ty(), Type::Null);
    assert!(Value::from(1_i64).ty().is_integer());
    assert!(!Value::from(1.0_f32).ty().is_integer());
}
