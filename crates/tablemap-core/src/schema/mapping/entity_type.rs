use super::MappingFragment;
use crate::schema::conceptual::EntityTypeId;

#[derive(Debug, Clone)]
pub struct EntityTypeMapping {
    /// Entity types covered by this mapping
    pub entity_types: Vec<EntityTypeId>,

    /// True when the mapping applies to the listed types and every type
    /// derived from them.
    pub is_hierarchy_mapping: bool,

    /// How the types are split across tables. Usually one fragment.
    pub fragments: Vec<MappingFragment>,
}

impl EntityTypeMapping {
    pub fn new(entity_type: EntityTypeId) -> Self {
        Self {
            entity_types: vec![entity_type],
            is_hierarchy_mapping: false,
            fragments: vec![],
        }
    }

    /// Creates a mapping covering `entity_type` and its derived types.
    pub fn hierarchy(entity_type: EntityTypeId) -> Self {
        Self {
            is_hierarchy_mapping: true,
            ..Self::new(entity_type)
        }
    }

    pub fn fragment(mut self, fragment: MappingFragment) -> Self {
        self.fragments.push(fragment);
        self
    }
}
