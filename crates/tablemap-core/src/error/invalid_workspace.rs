use super::Error;

/// Error when a metadata workspace definition is inconsistent.
///
/// This occurs when:
/// - An entity set or base type references an entity type that does not exist
/// - A key member names a property the entity type does not declare
/// - A set mapping references an unknown conceptual or store entity set
/// - A property mapping references a column or complex type that does not exist
///
/// These errors are caught by [`Builder::build`](crate::schema::Builder::build).
#[derive(Debug)]
pub(super) struct InvalidWorkspace {
    message: Box<str>,
}

impl std::error::Error for InvalidWorkspace {}

impl core::fmt::Display for InvalidWorkspace {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid workspace: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid workspace error.
    pub fn invalid_workspace(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidWorkspace(InvalidWorkspace {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid workspace error.
    pub fn is_invalid_workspace(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidWorkspace(_))
    }
}
