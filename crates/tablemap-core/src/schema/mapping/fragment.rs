use super::PropertyMapping;
use crate::schema::storage::StoreSetId;

/// Records how an entity type maps onto one storage table.
#[derive(Debug, Clone)]
pub struct MappingFragment {
    /// The table receiving the mapped properties
    pub store_set: StoreSetId,

    /// Property mappings in declaration order
    pub properties: Vec<PropertyMapping>,
}

impl MappingFragment {
    pub fn new(store_set: StoreSetId) -> Self {
        Self {
            store_set,
            properties: vec![],
        }
    }

    pub fn property(mut self, property: impl Into<PropertyMapping>) -> Self {
        self.properties.push(property.into());
        self
    }
}
