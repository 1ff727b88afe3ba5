mod entity_set;
pub use entity_set::EntitySetMapping;

mod entity_type;
pub use entity_type::EntityTypeMapping;

mod fragment;
pub use fragment::MappingFragment;

mod property;
pub use property::{
    ComplexPropertyMapping, ComplexTypeMapping, ConditionPropertyMapping, ConditionValue,
    PropertyMapping, ScalarPropertyMapping,
};

use super::conceptual::EntitySetId;
use indexmap::IndexMap;

/// Defines the correspondence between conceptual entity sets and storage
/// tables.
///
/// The mapping is constructed when the workspace is built and remains
/// immutable afterwards.
#[derive(Debug, Default, Clone)]
pub struct Mapping {
    /// Per-set mappings indexed by conceptual entity set.
    pub entity_sets: IndexMap<EntitySetId, EntitySetMapping>,
}

impl Mapping {
    /// Returns the mapping for the specified entity set, if one was declared.
    pub fn entity_set(&self, id: EntitySetId) -> Option<&EntitySetMapping> {
        self.entity_sets.get(&id)
    }
}
