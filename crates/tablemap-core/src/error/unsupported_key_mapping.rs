use super::Error;

/// Error when a key member is mapped in a shape that cannot be expressed as a
/// single key column, such as a key member backed by a complex property.
#[derive(Debug)]
pub(super) struct UnsupportedKeyMapping {
    message: Box<str>,
}

impl std::error::Error for UnsupportedKeyMapping {}

impl core::fmt::Display for UnsupportedKeyMapping {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported key mapping: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported key mapping error.
    pub fn unsupported_key_mapping(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedKeyMapping(
            UnsupportedKeyMapping {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported key mapping error.
    pub fn is_unsupported_key_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedKeyMapping(_))
    }
}
