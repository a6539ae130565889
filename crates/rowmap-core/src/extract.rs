use crate::{Result, Row};

use bigdecimal::BigDecimal;

/// Reads a value of `Self` from a row cursor column.
///
/// Implementations perform exactly one typed read so that
/// [`Row::was_null`] reflects that read afterwards.
pub trait Extract: Sized {
    fn extract(row: &mut dyn Row, index: usize) -> Result<Self>;
}

macro_rules! impl_extract {
    ( $( $t:ty => $method:ident ),+ ) => {
        $(
            impl Extract for $t {
                fn extract(row: &mut dyn Row, index: usize) -> Result<Self> {
                    row.$method(index)
                }
            }
        )+
    };
}

impl_extract!(
    bool => get_bool,
    i16 => get_i16,
    i32 => get_i32,
    i64 => get_i64,
    f64 => get_f64,
    String => get_string,
    BigDecimal => get_decimal,
    Vec<u8> => get_bytes
);

impl<T: Extract> Extract for Option<T> {
    fn extract(row: &mut dyn Row, index: usize) -> Result<Self> {
        let value = T::extract(row, index)?;

        if row.was_null() {
            Ok(None)
        } else {
            Ok(Some(value))
        }
    }
}
