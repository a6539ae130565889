use rowmap_core::{BigDecimal, Error, Result, Row};
use rusqlite::types::ValueRef;
use std::str::FromStr;

/// A [`Row`] cursor over a `rusqlite` result row.
///
/// SQLite stores values with dynamic types, so reads convert from the storage
/// class of each value: integers widen to floats and decimals, numbers render
/// as text, and text parses as a decimal.
pub struct SqliteRow<'a, 'stmt> {
    row: &'a rusqlite::Row<'stmt>,
    was_null: bool,
}

impl<'a, 'stmt> SqliteRow<'a, 'stmt> {
    pub fn new(row: &'a rusqlite::Row<'stmt>) -> Self {
        SqliteRow {
            row,
            was_null: false,
        }
    }

    fn value(&mut self, index: usize) -> Result<ValueRef<'a>> {
        let value = self.row.get_ref(index).map_err(Error::driver)?;
        self.was_null = matches!(value, ValueRef::Null);
        Ok(value)
    }

    fn integer<T: TryFrom<i64>>(&mut self, index: usize, to: &'static str) -> Result<T>
    where
        T: Default,
    {
        match self.value(index)? {
            ValueRef::Null => Ok(T::default()),
            ValueRef::Integer(v) => {
                T::try_from(v).map_err(|_| Error::type_mismatch(index, to, "Integer"))
            }
            value => Err(Error::type_mismatch(index, to, storage_class(&value))),
        }
    }
}

fn storage_class(value: &ValueRef<'_>) -> &'static str {
    match value {
        ValueRef::Null => "Null",
        ValueRef::Integer(_) => "Integer",
        ValueRef::Real(_) => "Real",
        ValueRef::Text(_) => "Text",
        ValueRef::Blob(_) => "Blob",
    }
}

fn text<'a>(index: usize, bytes: &'a [u8], to: &'static str) -> Result<&'a str> {
    std::str::from_utf8(bytes).map_err(|_| Error::type_mismatch(index, to, "Text"))
}

impl Row for SqliteRow<'_, '_> {
    fn column_count(&self) -> Result<usize> {
        Ok(self.row.as_ref().column_count())
    }

    fn column_label(&self, index: usize) -> Result<String> {
        self.row
            .as_ref()
            .column_name(index)
            .map(str::to_string)
            .map_err(Error::driver)
    }

    fn get_bool(&mut self, index: usize) -> Result<bool> {
        Ok(self.integer::<i64>(index, "bool")? != 0)
    }

    fn get_i16(&mut self, index: usize) -> Result<i16> {
        self.integer(index, "i16")
    }

    fn get_i32(&mut self, index: usize) -> Result<i32> {
        self.integer(index, "i32")
    }

    fn get_i64(&mut self, index: usize) -> Result<i64> {
        self.integer(index, "i64")
    }

    fn get_f64(&mut self, index: usize) -> Result<f64> {
        match self.value(index)? {
            ValueRef::Null => Ok(0.0),
            ValueRef::Integer(v) => Ok(v as f64),
            ValueRef::Real(v) => Ok(v),
            value => Err(Error::type_mismatch(index, "f64", storage_class(&value))),
        }
    }

    fn get_string(&mut self, index: usize) -> Result<String> {
        match self.value(index)? {
            ValueRef::Null => Ok(String::new()),
            ValueRef::Integer(v) => Ok(v.to_string()),
            ValueRef::Real(v) => Ok(v.to_string()),
            ValueRef::Text(v) => Ok(text(index, v, "String")?.to_string()),
            ValueRef::Blob(_) => Err(Error::type_mismatch(index, "String", "Blob")),
        }
    }

    fn get_decimal(&mut self, index: usize) -> Result<BigDecimal> {
        let value = self.value(index)?;
        let parsed = match value {
            ValueRef::Null => return Ok(BigDecimal::from(0)),
            ValueRef::Integer(v) => return Ok(BigDecimal::from(v)),
            ValueRef::Real(v) => BigDecimal::from_str(&v.to_string()),
            ValueRef::Text(v) => BigDecimal::from_str(text(index, v, "BigDecimal")?),
            ValueRef::Blob(_) => return Err(Error::type_mismatch(index, "BigDecimal", "Blob")),
        };

        parsed.map_err(|_| Error::type_mismatch(index, "BigDecimal", storage_class(&value)))
    }

    fn get_bytes(&mut self, index: usize) -> Result<Vec<u8>> {
        match self.value(index)? {
            ValueRef::Null => Ok(Vec::new()),
            ValueRef::Blob(v) | ValueRef::Text(v) => Ok(v.to_vec()),
            value => Err(Error::type_mismatch(index, "Vec<u8>", storage_class(&value))),
        }
    }

    fn was_null(&self) -> bool {
        self.was_null
    }
}
