use bigdecimal::BigDecimal;

/// An owned column value.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit float
    F64(f64),

    /// Arbitrary-precision decimal
    Decimal(BigDecimal),

    /// Text value
    String(String),

    /// Binary value
    Bytes(Vec<u8>),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Name of the variant, used in type mismatch errors.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::I16(_) => "I16",
            Value::I32(_) => "I32",
            Value::I64(_) => "I64",
            Value::F64(_) => "F64",
            Value::Decimal(_) => "Decimal",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
        }
    }

    /// Returns the value as an `i64` if it holds any integer variant.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::I16(v) => Some(v as i64),
            Value::I32(v) => Some(v as i64),
            Value::I64(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ( $( $variant:ident($t:ty) ),+ ) => {
        $(
            impl From<$t> for Value {
                fn from(src: $t) -> Value {
                    Value::$variant(src)
                }
            }
        )+
    };
}

impl_from!(
    Bool(bool),
    I16(i16),
    I32(i32),
    I64(i64),
    F64(f64),
    Decimal(BigDecimal),
    String(String),
    Bytes(Vec<u8>)
);

impl From<&str> for Value {
    fn from(src: &str) -> Value {
        Value::String(src.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Value {
        match src {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}
