use super::Error;

/// Error when neither an override nor a built-in extractor handles a field's
/// type.
#[derive(Debug)]
pub(super) struct UnmappedTypeError {
    pub(super) type_name: &'static str,
    pub(super) field: &'static str,
    pub(super) field_ty: &'static str,
}

impl std::error::Error for UnmappedTypeError {}

impl core::fmt::Display for UnmappedTypeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "no field mapper for type {} (field {}.{})",
            self.field_ty, self.type_name, self.field
        )
    }
}

impl Error {
    /// Creates an unmapped type error.
    pub fn unmapped_type(
        type_name: &'static str,
        field: &'static str,
        field_ty: &'static str,
    ) -> Error {
        Error::from(super::ErrorKind::UnmappedType(UnmappedTypeError {
            type_name,
            field,
            field_ty,
        }))
    }

    /// Returns `true` if this error is an unmapped type error.
    pub fn is_unmapped_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnmappedType(_))
    }
}
