use super::EntityTypeId;

use std::fmt;

/// A named collection of entities of one type (and any types derived from it).
#[derive(Debug, Clone)]
pub struct EntitySet {
    pub id: EntitySetId,

    pub name: String,

    /// The most general type stored in the set
    pub element_type: EntityTypeId,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitySetId(pub usize);

impl EntitySet {
    pub fn new(name: impl Into<String>, element_type: EntityTypeId) -> Self {
        Self {
            id: EntitySetId::placeholder(),
            name: name.into(),
            element_type,
        }
    }
}

impl EntitySetId {
    pub(crate) const fn placeholder() -> Self {
        Self(usize::MAX)
    }
}

impl fmt::Debug for EntitySetId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "EntitySetId({})", self.0)
    }
}
