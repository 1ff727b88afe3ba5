use super::Property;

use std::fmt;

/// A structural type with no identity of its own, embedded in entity types
/// (or other complex types) through complex properties.
#[derive(Debug, Clone)]
pub struct ComplexType {
    pub id: ComplexTypeId,

    pub name: String,

    pub properties: Vec<Property>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplexTypeId(pub usize);

impl ComplexType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ComplexTypeId::placeholder(),
            name: name.into(),
            properties: vec![],
        }
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn property_by_name(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name == name)
    }
}

impl ComplexTypeId {
    pub(crate) const fn placeholder() -> Self {
        Self(usize::MAX)
    }
}

impl fmt::Debug for ComplexTypeId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ComplexTypeId({})", self.0)
    }
}
