use super::{Column, ColumnId, StoreSet, StoreSetId, StoreType, StoreTypeId};

#[derive(Debug, Default, Clone)]
pub struct Schema {
    /// Name of the storage entity container
    pub container: String,

    pub store_types: Vec<StoreType>,

    pub store_sets: Vec<StoreSet>,
}

impl Schema {
    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        self.store_type(id.store_type)
            .columns
            .get(id.index)
            .expect("invalid column ID")
    }

    pub fn store_type(&self, id: StoreTypeId) -> &StoreType {
        self.store_types.get(id.0).expect("invalid store type ID")
    }

    pub fn store_set(&self, id: StoreSetId) -> &StoreSet {
        self.store_sets.get(id.0).expect("invalid store set ID")
    }
}
