use crate::Result;

use bigdecimal::BigDecimal;

/// A cursor positioned on one result row.
///
/// Implemented by the host data-access layer. Columns are addressed by
/// zero-based index. Every typed read updates the null signal returned by
/// [`Row::was_null`]: reading a SQL `NULL` returns the type's zero value and
/// sets the signal.
///
/// Reads that cannot represent the stored value as the requested type fail
/// with [`Error::type_mismatch`](crate::Error::type_mismatch).
pub trait Row {
    /// Number of columns in the row.
    fn column_count(&self) -> Result<usize>;

    /// Label of the column at `index`.
    fn column_label(&self, index: usize) -> Result<String>;

    fn get_bool(&mut self, index: usize) -> Result<bool>;

    fn get_i16(&mut self, index: usize) -> Result<i16>;

    fn get_i32(&mut self, index: usize) -> Result<i32>;

    fn get_i64(&mut self, index: usize) -> Result<i64>;

    fn get_f64(&mut self, index: usize) -> Result<f64>;

    fn get_string(&mut self, index: usize) -> Result<String>;

    fn get_decimal(&mut self, index: usize) -> Result<BigDecimal>;

    fn get_bytes(&mut self, index: usize) -> Result<Vec<u8>>;

    /// Returns `true` if the most recent typed read observed a SQL `NULL`.
    fn was_null(&self) -> bool;
}
