mod mapper;
pub use mapper::RowMapper;

pub mod registry;
pub use registry::Registry;

pub use rowmap_core::{
    bail, err, BigDecimal, ColumnMetadata, Error, Extract, FieldDescriptor, FieldMapper,
    FieldValue, Mapped, Result, Row, StatementContext, TypeDescriptor, TypeKey, Value, ValueRow,
};

pub use rowmap_macros::Mapped;

/// Cursor adapters for database client crates.
pub mod driver {
    #[cfg(feature = "sqlite")]
    pub use rowmap_driver_sqlite as sqlite;
}

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{Error, FieldDescriptor, Mapped, Result, TypeDescriptor};
    pub use std::{default::Default, sync::OnceLock, vec::Vec};
}
