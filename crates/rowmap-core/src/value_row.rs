use crate::{bail, Error, Result, Row, Value};

use bigdecimal::BigDecimal;
use std::str::FromStr;

/// A [`Row`] over owned, already materialized values.
///
/// Reads coerce the way JDBC result sets do: integers widen freely and
/// narrow only when in range, numbers and decimals render as text, and text
/// parses as a decimal. Anything else is a type mismatch.
#[derive(Debug, Clone, Default)]
pub struct ValueRow {
    columns: Vec<(String, Value)>,
    was_null: bool,
}

impl ValueRow {
    pub fn new() -> ValueRow {
        ValueRow::default()
    }

    /// Appends a column, returning the row for chaining.
    pub fn with(mut self, label: impl Into<String>, value: impl Into<Value>) -> ValueRow {
        self.push(label, value);
        self
    }

    pub fn push(&mut self, label: impl Into<String>, value: impl Into<Value>) {
        self.columns.push((label.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn value(&mut self, index: usize) -> Result<&Value> {
        let Some((_, value)) = self.columns.get(index) else {
            bail!(
                "column index {index} out of range ({} columns)",
                self.columns.len()
            );
        };
        self.was_null = value.is_null();
        Ok(value)
    }
}

impl<L: Into<String>, V: Into<Value>> FromIterator<(L, V)> for ValueRow {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> ValueRow {
        ValueRow {
            columns: iter
                .into_iter()
                .map(|(label, value)| (label.into(), value.into()))
                .collect(),
            was_null: false,
        }
    }
}

fn narrow<T: TryFrom<i64>>(index: usize, value: &Value, to: &'static str) -> Result<T> {
    value
        .as_i64()
        .and_then(|v| T::try_from(v).ok())
        .ok_or_else(|| Error::type_mismatch(index, to, value.type_name()))
}

impl Row for ValueRow {
    fn column_count(&self) -> Result<usize> {
        Ok(self.columns.len())
    }

    fn column_label(&self, index: usize) -> Result<String> {
        match self.columns.get(index) {
            Some((label, _)) => Ok(label.clone()),
            None => bail!(
                "column index {index} out of range ({} columns)",
                self.columns.len()
            ),
        }
    }

    fn get_bool(&mut self, index: usize) -> Result<bool> {
        match self.value(index)? {
            Value::Null => Ok(false),
            Value::Bool(v) => Ok(*v),
            value => match value.as_i64() {
                Some(v) => Ok(v != 0),
                None => Err(Error::type_mismatch(index, "bool", value.type_name())),
            },
        }
    }

    fn get_i16(&mut self, index: usize) -> Result<i16> {
        match self.value(index)? {
            Value::Null => Ok(0),
            value => narrow(index, value, "i16"),
        }
    }

    fn get_i32(&mut self, index: usize) -> Result<i32> {
        match self.value(index)? {
            Value::Null => Ok(0),
            value => narrow(index, value, "i32"),
        }
    }

    fn get_i64(&mut self, index: usize) -> Result<i64> {
        match self.value(index)? {
            Value::Null => Ok(0),
            value => narrow(index, value, "i64"),
        }
    }

    fn get_f64(&mut self, index: usize) -> Result<f64> {
        match self.value(index)? {
            Value::Null => Ok(0.0),
            Value::F64(v) => Ok(*v),
            Value::Decimal(v) => f64::from_str(&v.to_string())
                .map_err(|_| Error::type_mismatch(index, "f64", "Decimal")),
            value => match value.as_i64() {
                Some(v) => Ok(v as f64),
                None => Err(Error::type_mismatch(index, "f64", value.type_name())),
            },
        }
    }

    fn get_string(&mut self, index: usize) -> Result<String> {
        match self.value(index)? {
            Value::Null => Ok(String::new()),
            Value::String(v) => Ok(v.clone()),
            Value::Bool(v) => Ok(v.to_string()),
            Value::F64(v) => Ok(v.to_string()),
            Value::Decimal(v) => Ok(v.to_string()),
            value => match value.as_i64() {
                Some(v) => Ok(v.to_string()),
                None => Err(Error::type_mismatch(index, "String", value.type_name())),
            },
        }
    }

    fn get_decimal(&mut self, index: usize) -> Result<BigDecimal> {
        match self.value(index)? {
            Value::Null => Ok(BigDecimal::from(0)),
            Value::Decimal(v) => Ok(v.clone()),
            Value::String(v) => BigDecimal::from_str(v)
                .map_err(|_| Error::type_mismatch(index, "BigDecimal", "String")),
            Value::F64(v) => BigDecimal::from_str(&v.to_string())
                .map_err(|_| Error::type_mismatch(index, "BigDecimal", "F64")),
            value => match value.as_i64() {
                Some(v) => Ok(BigDecimal::from(v)),
                None => Err(Error::type_mismatch(index, "BigDecimal", value.type_name())),
            },
        }
    }

    fn get_bytes(&mut self, index: usize) -> Result<Vec<u8>> {
        match self.value(index)? {
            Value::Null => Ok(Vec::new()),
            Value::Bytes(v) => Ok(v.clone()),
            Value::String(v) => Ok(v.clone().into_bytes()),
            value => Err(Error::type_mismatch(index, "Vec<u8>", value.type_name())),
        }
    }

    fn was_null(&self) -> bool {
        self.was_null
    }
}
