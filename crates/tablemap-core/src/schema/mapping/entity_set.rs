use super::EntityTypeMapping;
use crate::schema::conceptual::EntitySetId;

/// Maps one conceptual entity set onto storage.
#[derive(Debug, Clone)]
pub struct EntitySetMapping {
    /// The conceptual entity set being mapped
    pub entity_set: EntitySetId,

    /// One entry per mapped type (or type hierarchy) stored in the set
    pub type_mappings: Vec<EntityTypeMapping>,
}

impl EntitySetMapping {
    pub fn new(entity_set: EntitySetId) -> Self {
        Self {
            entity_set,
            type_mappings: vec![],
        }
    }

    pub fn type_mapping(mut self, type_mapping: EntityTypeMapping) -> Self {
        self.type_mappings.push(type_mapping);
        self
    }

    /// The type mapping used to describe the set's table: a mapping covering
    /// a whole hierarchy wins, otherwise the set must have exactly one.
    pub fn primary_type_mapping(&self) -> Option<&EntityTypeMapping> {
        if let Some(hierarchy) = self.type_mappings.iter().find(|m| m.is_hierarchy_mapping) {
            return Some(hierarchy);
        }

        match &self.type_mappings[..] {
            [type_mapping] => Some(type_mapping),
            _ => None,
        }
    }
}
