use rowmap_core::{stmt::Value, Result};

/// A field type that can be decoded from a single cell.
///
/// `NULL` never fails to load: it produces the type's zero value, or `None`
/// for `Option<T>`.
pub trait Primitive: Sized {
    fn load(value: Value) -> Result<Self>;
}

macro_rules! impl_primitive {
    ( $( $ty:ty ),* ) => {
        $(
            impl Primitive for $ty {
                fn load(value: Value) -> Result<Self> {
                    if value.is_null() {
                        return Ok(<$ty>::default());
                    }

                    value.try_into()
                }
            }
        )*
    };
}

impl_primitive!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, String, Vec<u8>);

impl<T: Primitive> Primitive for Option<T> {
    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }
}
