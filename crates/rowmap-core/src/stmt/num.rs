use super::Value;
use crate::{Error, Result};

macro_rules! impl_num {
    (
        $( $variant:ident($ty:ty) )*
    ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            // Integers convert across widths and signedness as long as the
            // value is in range. Text-protocol drivers hand numbers back as
            // strings, so those are parsed.
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    let converted = match &value {
                        Value::I8(v) => <$ty>::try_from(*v).ok(),
                        Value::I16(v) => <$ty>::try_from(*v).ok(),
                        Value::I32(v) => <$ty>::try_from(*v).ok(),
                        Value::I64(v) => <$ty>::try_from(*v).ok(),
                        Value::U8(v) => <$ty>::try_from(*v).ok(),
                        Value::U16(v) => <$ty>::try_from(*v).ok(),
                        Value::U32(v) => <$ty>::try_from(*v).ok(),
                        Value::U64(v) => <$ty>::try_from(*v).ok(),
                        Value::String(s) => s.trim().parse::<$ty>().ok(),
                        _ => None,
                    };

                    converted.ok_or_else(|| Error::type_conversion(value, stringify!($ty)))
                }
            }
        )*
    };
}

impl_num! {
    I8(i8)
    I16(i16)
    I32(i32)
    I64(i64)
    U8(u8)
    U16(u16)
    U32(u32)
    U64(u64)
}

macro_rules! impl_float {
    (
        $( $ty:ty )*
    ) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    let converted = match &value {
                        Value::F32(v) => Some(*v as $ty),
                        Value::F64(v) => Some(*v as $ty),
                        Value::I8(v) => Some(*v as $ty),
                        Value::I16(v) => Some(*v as $ty),
                        Value::I32(v) => Some(*v as $ty),
                        Value::I64(v) => Some(*v as $ty),
                        Value::U8(v) => Some(*v as $ty),
                        Value::U16(v) => Some(*v as $ty),
                        Value::U32(v) => Some(*v as $ty),
                        Value::U64(v) => Some(*v as $ty),
                        Value::String(s) => s.trim().parse::<$ty>().ok(),
                        _ => None,
                    };

                    converted.ok_or_else(|| Error::type_conversion(value, stringify!($ty)))
                }
            }
        )*
    };
}

impl_float! {
    f32
    f64
}
