mod column;
pub use column::{normalize, ColumnMetadata};

mod context;
pub use context::StatementContext;

mod descriptor;
pub use descriptor::{FieldDescriptor, Mapped, TypeDescriptor};

mod error;
pub use error::Error;

mod extract;
pub use extract::Extract;

pub mod field_mapper;
pub use field_mapper::{Builtin, DynFieldMapper, FieldMapper, FieldMapperTable, FieldValue};

mod row;
pub use row::Row;

mod ty;
pub use ty::TypeKey;

mod value;
pub use value::Value;

mod value_row;
pub use value_row::ValueRow;

pub use bigdecimal::BigDecimal;

/// A Result type alias that uses rowmap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
