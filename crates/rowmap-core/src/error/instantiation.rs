use super::Error;

/// Error when the target type cannot be constructed.
#[derive(Debug)]
pub(super) struct InstantiationError {
    pub(super) type_name: &'static str,
    pub(super) reason: Box<str>,
}

impl std::error::Error for InstantiationError {}

impl core::fmt::Display for InstantiationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot instantiate {}: {}", self.type_name, self.reason)
    }
}

impl Error {
    /// Creates an instantiation error.
    ///
    /// Raised when a target type's constructor fails. No partially populated
    /// instance is produced for the row.
    pub fn instantiation(type_name: &'static str, reason: impl core::fmt::Display) -> Error {
        Error::from(super::ErrorKind::Instantiation(InstantiationError {
            type_name,
            reason: reason.to_string().into_boxed_str(),
        }))
    }

    /// Returns `true` if this error is an instantiation error.
    pub fn is_instantiation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Instantiation(_))
    }
}
