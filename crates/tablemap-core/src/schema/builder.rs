use super::{
    conceptual::{ComplexType, ComplexTypeId, EntitySet, EntitySetId, EntityType, EntityTypeId},
    mapping::EntitySetMapping,
    storage::{ColumnId, StoreSet, StoreSetId, StoreType, StoreTypeId},
    Workspace,
};
use crate::Result;

/// Assembles a [`Workspace`].
///
/// Items receive their identifiers as they are added, so later items can
/// reference earlier ones. Cross-references are checked by [`Builder::build`].
#[derive(Debug, Default)]
pub struct Builder {
    workspace: Workspace,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name of the conceptual entity container
    pub fn conceptual_container(&mut self, name: &str) -> &mut Self {
        self.workspace.conceptual.container = name.to_string();
        self
    }

    /// Set the name of the storage entity container
    pub fn storage_container(&mut self, name: &str) -> &mut Self {
        self.workspace.storage.container = name.to_string();
        self
    }

    pub fn entity_type(&mut self, mut entity_type: EntityType) -> EntityTypeId {
        let types = &mut self.workspace.conceptual.entity_types;
        let id = EntityTypeId(types.len());
        entity_type.id = id;
        types.insert(id, entity_type);
        id
    }

    pub fn complex_type(&mut self, mut complex_type: ComplexType) -> ComplexTypeId {
        let types = &mut self.workspace.conceptual.complex_types;
        let id = ComplexTypeId(types.len());
        complex_type.id = id;
        types.insert(id, complex_type);
        id
    }

    pub fn entity_set(&mut self, mut entity_set: EntitySet) -> EntitySetId {
        let sets = &mut self.workspace.conceptual.entity_sets;
        let id = EntitySetId(sets.len());
        entity_set.id = id;
        sets.insert(id, entity_set);
        id
    }

    pub fn store_type(&mut self, mut store_type: StoreType) -> StoreTypeId {
        let types = &mut self.workspace.storage.store_types;
        let id = StoreTypeId(types.len());
        store_type.assign_id(id);
        types.push(store_type);
        id
    }

    pub fn store_set(&mut self, mut store_set: StoreSet) -> StoreSetId {
        let sets = &mut self.workspace.storage.store_sets;
        let id = StoreSetId(sets.len());
        store_set.id = id;
        sets.push(store_set);
        id
    }

    /// Looks up a column of a previously added store type by name.
    pub fn column(&self, store_type: StoreTypeId, name: &str) -> Option<ColumnId> {
        self.workspace
            .storage
            .store_types
            .get(store_type.0)?
            .column_id(name)
    }

    /// Declare how a conceptual entity set maps onto storage. A later mapping
    /// for the same set replaces the earlier one.
    pub fn set_mapping(&mut self, set_mapping: EntitySetMapping) -> &mut Self {
        self.workspace
            .mapping
            .entity_sets
            .insert(set_mapping.entity_set, set_mapping);
        self
    }

    pub fn build(self) -> Result<Workspace> {
        self.workspace.verified()
    }
}
