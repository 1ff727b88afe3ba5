use super::Property;
use crate::schema::ObjectType;

use std::fmt;

#[derive(Debug, Clone)]
pub struct EntityType {
    /// Uniquely identifies the entity type within the conceptual model
    pub id: EntityTypeId,

    /// Name of the entity type
    pub name: String,

    /// Properties declared by this type. Inherited properties live on the
    /// base types.
    pub properties: Vec<Property>,

    /// Names of the properties forming the entity key. Empty on derived
    /// types, which inherit the key of their root type.
    pub key_members: Vec<String>,

    /// The type this entity type derives from, if any
    pub base_type: Option<EntityTypeId>,

    /// The Rust type whose instances are materialized as this entity type
    pub object_type: Option<ObjectType>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityTypeId(pub usize);

impl EntityType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EntityTypeId::placeholder(),
            name: name.into(),
            properties: vec![],
            key_members: vec![],
            base_type: None,
            object_type: None,
        }
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn key<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_members = members.into_iter().map(Into::into).collect();
        self
    }

    pub fn base_type(mut self, base_type: EntityTypeId) -> Self {
        self.base_type = Some(base_type);
        self
    }

    /// Binds the entity type to the Rust type `T`.
    pub fn object_type<T: ?Sized + 'static>(mut self) -> Self {
        self.object_type = Some(ObjectType::of::<T>());
        self
    }

    pub fn property_by_name(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name == name)
    }
}

impl EntityTypeId {
    pub(crate) const fn placeholder() -> Self {
        Self(usize::MAX)
    }
}

impl From<&EntityType> for EntityTypeId {
    fn from(value: &EntityType) -> Self {
        value.id
    }
}

impl fmt::Debug for EntityTypeId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "EntityTypeId({})", self.0)
    }
}
