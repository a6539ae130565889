use super::Error;

/// Error when a column value cannot be read as the requested type.
#[derive(Debug)]
pub(super) struct TypeMismatchError {
    pub(super) index: usize,
    pub(super) expected: &'static str,
    pub(super) found: &'static str,
}

impl std::error::Error for TypeMismatchError {}

impl core::fmt::Display for TypeMismatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "column {}: cannot read {} value as {}",
            self.index, self.found, self.expected
        )
    }
}

impl Error {
    /// Creates a type mismatch error.
    ///
    /// Raised by row cursors when the value stored at `index` cannot be read
    /// as `expected`.
    pub fn type_mismatch(index: usize, expected: &'static str, found: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeMismatch(TypeMismatchError {
            index,
            expected,
            found,
        }))
    }

    /// Returns `true` if this error is a type mismatch error.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeMismatch(_))
    }
}
