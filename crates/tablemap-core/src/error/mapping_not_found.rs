use super::Error;

/// Error when the metadata workspace has no usable mapping for a type.
///
/// This occurs when:
/// - No conceptual entity type is bound to the requested object type
/// - More than one conceptual entity type is bound to it
/// - No entity set contains the entity type
/// - The entity set has no storage mapping, or the mapping has no fragment
/// - A key member has no corresponding property mapping
#[derive(Debug)]
pub(super) struct MappingNotFound {
    message: Box<str>,
}

impl std::error::Error for MappingNotFound {}

impl core::fmt::Display for MappingNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "mapping not found: {}", self.message)
    }
}

impl Error {
    /// Creates a mapping not found error.
    pub fn mapping_not_found(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MappingNotFound(MappingNotFound {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a mapping not found error.
    pub fn is_mapping_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MappingNotFound(_))
    }
}
