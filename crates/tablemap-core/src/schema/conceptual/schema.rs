use super::{ComplexType, ComplexTypeId, EntitySet, EntitySetId, EntityType, EntityTypeId, Property};
use crate::schema::ObjectType;

use indexmap::IndexMap;

#[derive(Debug, Default, Clone)]
pub struct Schema {
    /// Name of the entity container holding the entity sets
    pub container: String,

    pub entity_types: IndexMap<EntityTypeId, EntityType>,

    pub complex_types: IndexMap<ComplexTypeId, ComplexType>,

    pub entity_sets: IndexMap<EntitySetId, EntitySet>,
}

impl Schema {
    /// Get an entity type by ID
    pub fn entity_type(&self, id: impl Into<EntityTypeId>) -> &EntityType {
        self.entity_types
            .get(&id.into())
            .expect("invalid entity type ID")
    }

    /// Get a complex type by ID
    pub fn complex_type(&self, id: ComplexTypeId) -> &ComplexType {
        self.complex_types
            .get(&id)
            .expect("invalid complex type ID")
    }

    /// Get an entity set by ID
    pub fn entity_set(&self, id: EntitySetId) -> &EntitySet {
        self.entity_sets.get(&id).expect("invalid entity set ID")
    }

    pub fn entity_types(&self) -> impl Iterator<Item = &EntityType> {
        self.entity_types.values()
    }

    pub fn entity_sets(&self) -> impl Iterator<Item = &EntitySet> {
        self.entity_sets.values()
    }

    /// Entity types bound to exactly the given object type.
    pub fn entity_types_for(
        &self,
        object_type: ObjectType,
    ) -> impl Iterator<Item = &EntityType> + '_ {
        self.entity_types()
            .filter(move |ty| ty.object_type == Some(object_type))
    }

    /// Walks from the given entity type up through its base types, starting
    /// with the type itself.
    ///
    /// A cyclic chain is cut off after visiting as many types as the model
    /// holds.
    pub fn hierarchy(&self, id: impl Into<EntityTypeId>) -> impl Iterator<Item = &EntityType> {
        let mut next = Some(id.into());
        core::iter::from_fn(move || {
            let ty = self.entity_type(next?);
            next = ty.base_type;
            Some(ty)
        })
        .take(self.entity_types.len())
    }

    /// The key members of an entity type. Derived types use the key declared
    /// on their root type.
    pub fn key_members(&self, id: impl Into<EntityTypeId>) -> &[String] {
        self.hierarchy(id)
            .find(|ty| !ty.key_members.is_empty())
            .map(|ty| &ty.key_members[..])
            .unwrap_or(&[])
    }

    /// Finds a declared or inherited property by name.
    pub fn property(&self, id: impl Into<EntityTypeId>, name: &str) -> Option<&Property> {
        self.hierarchy(id)
            .find_map(|ty| ty.property_by_name(name))
    }

    /// Finds the entity set storing instances of the given type. Sets are
    /// declared against the most general type, so the base types are searched
    /// as well, nearest first.
    pub fn entity_set_for(&self, id: impl Into<EntityTypeId>) -> Option<&EntitySet> {
        self.hierarchy(id).find_map(|ty| {
            self.entity_sets()
                .find(|entity_set| entity_set.element_type == ty.id)
        })
    }
}
