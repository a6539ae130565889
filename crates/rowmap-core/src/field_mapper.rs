use crate::{err, Extract, Result, Row, StatementContext, TypeKey};

use bigdecimal::BigDecimal;
use std::{any::Any, marker::PhantomData, sync::Arc, sync::OnceLock};

/// Strategy for populating every field of type [`FieldMapper::Value`].
///
/// Register an implementation with a `Registry` to replace the built-in
/// extraction for that type. The strategy is matched on the exact field type,
/// so `Option<BigDecimal>` and `BigDecimal` fields are overridden separately.
pub trait FieldMapper: Send + Sync + 'static {
    /// The field type this mapper produces.
    type Value: Send + 'static;

    fn map(&self, row: &mut dyn Row, index: usize, cx: &StatementContext) -> Result<Self::Value>;
}

/// Object-safe form of [`FieldMapper`], keyed by the produced type.
pub trait DynFieldMapper: Send + Sync {
    fn ty(&self) -> TypeKey;

    fn map_dyn(&self, row: &mut dyn Row, index: usize, cx: &StatementContext) -> Result<FieldValue>;
}

impl<M: FieldMapper> DynFieldMapper for M {
    fn ty(&self) -> TypeKey {
        TypeKey::of::<M::Value>()
    }

    fn map_dyn(
        &self,
        row: &mut dyn Row,
        index: usize,
        cx: &StatementContext,
    ) -> Result<FieldValue> {
        Ok(FieldValue::new(self.map(row, index, cx)?))
    }
}

/// A type-erased field value on its way from a mapper to a field setter.
pub struct FieldValue {
    ty: TypeKey,
    value: Box<dyn Any + Send>,
}

impl FieldValue {
    pub fn new<T: Send + 'static>(value: T) -> FieldValue {
        FieldValue {
            ty: TypeKey::of::<T>(),
            value: Box::new(value),
        }
    }

    pub fn ty(&self) -> TypeKey {
        self.ty
    }

    pub fn downcast<T: 'static>(self) -> Result<T> {
        let ty = self.ty;
        match self.value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(_) => Err(err!(
                "field value of type {} cannot be assigned to {}",
                ty,
                std::any::type_name::<T>()
            )),
        }
    }
}

impl core::fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("FieldValue").field("ty", &self.ty).finish()
    }
}

/// Built-in extraction for `T`.
///
/// Reads through [`Extract`], then replaces the value with `T::default()` when
/// the cursor reports a null read. For `Option<_>` fields the default is
/// `None`.
pub struct Builtin<T>(PhantomData<fn() -> T>);

impl<T> Builtin<T> {
    pub const fn new() -> Builtin<T> {
        Builtin(PhantomData)
    }
}

impl<T> Default for Builtin<T> {
    fn default() -> Self {
        Builtin::new()
    }
}

impl<T: Extract + Default + Send + 'static> FieldMapper for Builtin<T> {
    type Value = T;

    fn map(&self, row: &mut dyn Row, index: usize, _cx: &StatementContext) -> Result<T> {
        let value = T::extract(row, index)?;

        if row.was_null() {
            tracing::trace!(index, ty = std::any::type_name::<T>(), "null column value");
            Ok(T::default())
        } else {
            Ok(value)
        }
    }
}

/// An ordered list of field mappers, searched front to back.
#[derive(Clone, Default)]
pub struct FieldMapperTable {
    mappers: Vec<Arc<dyn DynFieldMapper>>,
}

impl FieldMapperTable {
    pub fn new() -> FieldMapperTable {
        FieldMapperTable::default()
    }

    /// The table of built-in extractors.
    pub fn builtin() -> &'static FieldMapperTable {
        static BUILTIN: OnceLock<FieldMapperTable> = OnceLock::new();

        BUILTIN.get_or_init(|| {
            let mut table = FieldMapperTable::new();

            macro_rules! builtin {
                ( $( $t:ty ),+ ) => {
                    $(
                        table.push(Builtin::<$t>::new());
                        table.push(Builtin::<Option<$t>>::new());
                    )+
                };
            }

            builtin!(bool, i16, i32, i64, f64, String, BigDecimal, Vec<u8>);

            table
        })
    }

    pub fn push(&mut self, mapper: impl FieldMapper) {
        self.push_dyn(Arc::new(mapper));
    }

    pub fn push_dyn(&mut self, mapper: Arc<dyn DynFieldMapper>) {
        self.mappers.push(mapper);
    }

    /// First mapper producing `ty`, in insertion order.
    pub fn resolve(&self, ty: TypeKey) -> Option<&Arc<dyn DynFieldMapper>> {
        self.mappers.iter().find(|mapper| mapper.ty() == ty)
    }

    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }
}

impl core::fmt::Debug for FieldMapperTable {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_list()
            .entries(self.mappers.iter().map(|mapper| mapper.ty()))
            .finish()
    }
}
