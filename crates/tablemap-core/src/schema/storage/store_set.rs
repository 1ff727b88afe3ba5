use super::{metadata, MetadataProperties, StoreTypeId};

use std::fmt;

/// A database table, as seen by the storage model's entity container.
#[derive(Debug, Clone)]
pub struct StoreSet {
    pub id: StoreSetId,

    /// Name of the set. Used as the table name when no table metadata is
    /// present.
    pub name: String,

    /// Row shape of the table
    pub element_type: StoreTypeId,

    /// Annotations such as the table and schema names
    pub metadata: MetadataProperties,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoreSetId(pub usize);

impl StoreSet {
    pub fn new(name: impl Into<String>, element_type: StoreTypeId) -> Self {
        Self {
            id: StoreSetId::placeholder(),
            name: name.into(),
            element_type,
            metadata: MetadataProperties::default(),
        }
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.metadata.insert(metadata::TABLE, table);
        self
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.metadata.insert(metadata::SCHEMA, schema);
        self
    }

    pub fn metadata(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(name, value);
        self
    }

    /// The physical table name: the `Table` annotation, then the schema
    /// generator's annotation, then the set's own name.
    pub fn table_name(&self) -> &str {
        self.metadata
            .first_present(&[metadata::TABLE, metadata::GENERATOR_TABLE])
            .unwrap_or(&self.name)
    }

    /// The database schema holding the table, if annotated.
    pub fn schema_name(&self) -> Option<&str> {
        self.metadata
            .first_present(&[metadata::SCHEMA, metadata::GENERATOR_SCHEMA])
    }
}

impl StoreSetId {
    pub(crate) const fn placeholder() -> Self {
        Self(usize::MAX)
    }
}

impl fmt::Debug for StoreSetId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "StoreSetId({})", self.0)
    }
}
