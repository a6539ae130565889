use crate::{Mapped, RowMapper, TypeKey};

use indexmap::IndexSet;
use rowmap_core::{DynFieldMapper, FieldMapper, FieldMapperTable};
use std::sync::{Arc, PoisonError, RwLock};

/// Decides which types rowmap handles and builds mappers for them.
///
/// Overrides registered with [`Registry::register`] are shared with every
/// [`RowMapper`] the registry has produced, including mappers built before
/// the registration.
#[derive(Debug, Default)]
pub struct Registry {
    /// Types the host maps some other way
    excluded: IndexSet<TypeKey>,

    /// Caller-registered field mappers, in registration order
    overrides: Overrides,
}

/// Configures a [`Registry`].
#[derive(Debug, Default)]
pub struct Builder {
    excluded: IndexSet<TypeKey>,
    overrides: FieldMapperTable,
}

/// Override list shared between a registry and its mappers.
#[derive(Debug, Clone, Default)]
pub(crate) struct Overrides {
    table: Arc<RwLock<FieldMapperTable>>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Creates a registry that refuses the given types.
    pub fn with_excluded(excluded: impl IntoIterator<Item = TypeKey>) -> Registry {
        let mut builder = Registry::builder();
        for ty in excluded {
            builder.exclude_type(ty);
        }
        builder.build()
    }

    /// Returns `false` if `T` was excluded when the registry was built.
    pub fn accepts<T: ?Sized + 'static>(&self) -> bool {
        self.accepts_type(TypeKey::of::<T>())
    }

    pub fn accepts_type(&self, ty: TypeKey) -> bool {
        !self.excluded.contains(&ty)
    }

    pub fn excluded(&self) -> impl Iterator<Item = TypeKey> + '_ {
        self.excluded.iter().copied()
    }

    /// Appends a field mapper override.
    ///
    /// When several overrides produce the same type, the one registered first
    /// is used.
    pub fn register(&self, mapper: impl FieldMapper) -> &Self {
        self.overrides.push(Arc::new(mapper));
        self
    }

    /// Builds a mapper for `T`.
    ///
    /// Does not check [`Registry::accepts`]; hosts are expected to route
    /// excluded types elsewhere before calling this.
    pub fn mapper_for<T: Mapped>(&self) -> RowMapper<T> {
        tracing::debug!(
            ty = std::any::type_name::<T>(),
            overrides = self.overrides.len(),
            "building row mapper"
        );
        RowMapper::with_overrides(self.overrides.clone())
    }
}

impl Builder {
    /// Excludes `T` from the registry.
    pub fn exclude<T: ?Sized + 'static>(&mut self) -> &mut Self {
        self.exclude_type(TypeKey::of::<T>())
    }

    pub fn exclude_type(&mut self, ty: TypeKey) -> &mut Self {
        self.excluded.insert(ty);
        self
    }

    /// Registers a field mapper override on the registry being built.
    pub fn register(&mut self, mapper: impl FieldMapper) -> &mut Self {
        self.overrides.push(mapper);
        self
    }

    pub fn build(&mut self) -> Registry {
        let excluded = std::mem::take(&mut self.excluded);
        let overrides = std::mem::take(&mut self.overrides);

        tracing::debug!(
            excluded = excluded.len(),
            overrides = overrides.len(),
            "built registry"
        );

        Registry {
            excluded,
            overrides: Overrides {
                table: Arc::new(RwLock::new(overrides)),
            },
        }
    }
}

impl Overrides {
    pub(crate) fn push(&self, mapper: Arc<dyn DynFieldMapper>) {
        let ty = mapper.ty();
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        table.push_dyn(mapper);
        tracing::debug!(ty = %ty, position = table.len() - 1, "registered field mapper override");
    }

    /// First override producing `ty`.
    ///
    /// The returned handle is cloned out so the lock is not held while the
    /// override runs.
    pub(crate) fn resolve(&self, ty: TypeKey) -> Option<Arc<dyn DynFieldMapper>> {
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        table.resolve(ty).cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
