//! Named annotations attached to storage model items.

use indexmap::IndexMap;

/// Annotation holding the physical table name
pub const TABLE: &str = "Table";

/// Annotation holding the database schema name
pub const SCHEMA: &str = "Schema";

/// Table annotation as written by the store schema generator
pub const GENERATOR_TABLE: &str =
    "http://schemas.microsoft.com/ado/2007/12/edm/EntityStoreSchemaGenerator:Table";

/// Schema annotation as written by the store schema generator
pub const GENERATOR_SCHEMA: &str =
    "http://schemas.microsoft.com/ado/2007/12/edm/EntityStoreSchemaGenerator:Schema";

#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetadataProperties {
    properties: IndexMap<String, String>,
}

impl MetadataProperties {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Returns the value of the first listed annotation that is present and
    /// not blank.
    pub fn first_present(&self, names: &[&str]) -> Option<&str> {
        names
            .iter()
            .filter_map(|name| self.get(name))
            .find(|value| !value.trim().is_empty())
    }
}
