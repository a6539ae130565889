use crate::{
    registry::Overrides, ColumnMetadata, Error, Mapped, Result, Row, StatementContext,
    TypeDescriptor, TypeKey,
};

use rowmap_core::{DynFieldMapper, FieldMapperTable};
use std::{marker::PhantomData, sync::Arc};

/// Maps row cursors into instances of `T`.
///
/// Holds no per-row state, so one mapper can serve many cursors, from many
/// threads.
pub struct RowMapper<T> {
    /// Overrides shared with the registry that built this mapper
    overrides: Overrides,

    /// Built-in extraction, consulted after the overrides
    builtin: &'static FieldMapperTable,

    _ty: PhantomData<fn() -> T>,
}

impl<T: Mapped> RowMapper<T> {
    /// Creates a mapper with no overrides.
    pub fn new() -> RowMapper<T> {
        RowMapper::with_overrides(Overrides::default())
    }

    pub(crate) fn with_overrides(overrides: Overrides) -> RowMapper<T> {
        RowMapper {
            overrides,
            builtin: FieldMapperTable::builtin(),
            _ty: PhantomData,
        }
    }

    pub fn descriptor(&self) -> &'static TypeDescriptor<T> {
        T::descriptor()
    }

    /// Maps the row the cursor is positioned on.
    ///
    /// Fields with no matching column keep the value `T::instantiate` gave
    /// them; columns with no matching field are ignored. Errors from the
    /// constructor, the cursor, or an override are returned as is.
    pub fn map(&self, row_index: usize, row: &mut dyn Row, cx: &StatementContext) -> Result<T> {
        let descriptor = T::descriptor();
        let mut target = T::instantiate()?;
        let columns = ColumnMetadata::read(row)?;

        for field in descriptor.fields() {
            let Some(index) = columns.position(field.lookup_key()) else {
                tracing::trace!(
                    row = row_index,
                    ty = descriptor.name(),
                    field = field.name(),
                    "no column for field"
                );
                continue;
            };

            let Some(mapper) = self.resolve(field.ty()) else {
                return Err(Error::unmapped_type(
                    descriptor.name(),
                    field.name(),
                    field.ty().name(),
                ));
            };

            let value = mapper.map_dyn(row, index, cx)?;
            field.assign(&mut target, value)?;
        }

        Ok(target)
    }

    /// Maps every cursor in order, numbering rows from zero.
    ///
    /// Stops at the first error.
    pub fn map_all<R: Row>(
        &self,
        rows: impl IntoIterator<Item = R>,
        cx: &StatementContext,
    ) -> Result<Vec<T>> {
        rows.into_iter()
            .enumerate()
            .map(|(row_index, mut row)| self.map(row_index, &mut row, cx))
            .collect()
    }

    /// Override first, then built-in.
    fn resolve(&self, ty: TypeKey) -> Option<Arc<dyn DynFieldMapper>> {
        self.overrides
            .resolve(ty)
            .or_else(|| self.builtin.resolve(ty).cloned())
    }
}

impl<T: Mapped> Default for RowMapper<T> {
    fn default() -> Self {
        RowMapper::new()
    }
}

impl<T> Clone for RowMapper<T> {
    fn clone(&self) -> Self {
        RowMapper {
            overrides: self.overrides.clone(),
            builtin: self.builtin,
            _ty: PhantomData,
        }
    }
}

impl<T> core::fmt::Debug for RowMapper<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("RowMapper")
            .field("ty", &std::any::type_name::<T>())
            .field("overrides", &self.overrides)
            .finish()
    }
}
