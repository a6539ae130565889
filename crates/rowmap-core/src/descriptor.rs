use crate::{column, FieldValue, Result, TypeKey};

/// A type that rows can be mapped into.
///
/// Usually implemented with `#[derive(Mapped)]`. Hand-written
/// implementations build their field table with [`TypeDescriptor::new`] and
/// cache it in a `static` [`OnceLock`](std::sync::OnceLock).
pub trait Mapped: Sized + 'static {
    /// Creates a zero-valued instance to populate.
    fn instantiate() -> Result<Self>;

    /// The type's field table. Built once and shared for the life of the
    /// process.
    fn descriptor() -> &'static TypeDescriptor<Self>;
}

/// The field layout of a mapped type.
pub struct TypeDescriptor<T> {
    name: &'static str,
    fields: Vec<FieldDescriptor<T>>,
}

type Setter<T> = Box<dyn Fn(&mut T, FieldValue) -> Result<()> + Send + Sync>;

/// One settable slot of a mapped type.
pub struct FieldDescriptor<T> {
    /// Declared field name
    name: &'static str,

    /// Column label from `#[column("...")]`
    column: Option<&'static str>,

    /// Declared field type
    ty: TypeKey,

    /// Normalized label the field is matched against
    lookup_key: String,

    set: Setter<T>,
}

impl<T> TypeDescriptor<T> {
    pub fn new(name: &'static str, fields: Vec<FieldDescriptor<T>>) -> TypeDescriptor<T> {
        tracing::debug!(ty = name, fields = fields.len(), "built type descriptor");
        TypeDescriptor { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor<T>> {
        self.fields.iter().find(|field| field.name == name)
    }
}

impl<T: 'static> FieldDescriptor<T> {
    /// Describes a field of type `V` written by `set`.
    pub fn new<V: 'static>(name: &'static str, set: fn(&mut T, V)) -> FieldDescriptor<T> {
        FieldDescriptor {
            name,
            column: None,
            ty: TypeKey::of::<V>(),
            lookup_key: column::normalize(name),
            set: Box::new(move |target: &mut T, value: FieldValue| {
                set(target, value.downcast::<V>()?);
                Ok(())
            }),
        }
    }

    /// Matches the field against `column` instead of its declared name.
    pub fn column(mut self, column: &'static str) -> FieldDescriptor<T> {
        self.column = Some(column);
        self.lookup_key = column::normalize(column);
        self
    }
}

impl<T> FieldDescriptor<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn column_name(&self) -> Option<&'static str> {
        self.column
    }

    pub fn ty(&self) -> TypeKey {
        self.ty
    }

    pub fn lookup_key(&self) -> &str {
        &self.lookup_key
    }

    /// Writes `value` into this field of `target`.
    pub fn assign(&self, target: &mut T, value: FieldValue) -> Result<()> {
        (self.set)(target, value)
    }
}

impl<T> core::fmt::Debug for TypeDescriptor<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish()
    }
}

impl<T> core::fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("column", &self.column)
            .field("ty", &self.ty)
            .finish()
    }
}
