//! Flattened description of how an entity type is persisted.

use crate::TableName;
use tablemap_core::schema::{
    conceptual::{EntitySetId, EntityTypeId},
    storage::{StoreSetId, StoreTypeId},
    ObjectType,
};

/// Describes how instances of one Rust type are stored.
///
/// Built by a single lookup and owned by the caller. Nothing is cached: two
/// lookups for the same type produce two independent maps.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EntityMap {
    /// The Rust type the map was requested for
    #[cfg_attr(feature = "serde", serde(skip))]
    pub object_type: ObjectType,

    /// Conceptual entity type bound to `object_type`
    pub model_type: EntityTypeId,

    /// Conceptual entity set holding the entities
    pub model_set: EntitySetId,

    /// Storage entity set (table) the entities are mapped onto
    pub store_set: StoreSetId,

    /// Row shape of the table
    pub store_type: StoreTypeId,

    /// Unquoted schema and table name
    pub table: TableName,

    /// Quoted, schema-qualified table name, e.g. `[dbo].[Order]`
    pub table_name: String,

    /// Property mappings in fragment order. Complex properties keep their
    /// nesting.
    pub property_maps: Vec<PropertyMapping>,

    /// Mappings of the entity key members, in key order
    pub key_maps: Vec<PropertyMap>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyMapping {
    Scalar(PropertyMap),
    Complex(ComplexPropertyMap),
}

/// A scalar property stored in one column.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyMap {
    pub property_name: String,
    pub column_name: String,
}

/// A complex property and the mappings of its members.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplexPropertyMap {
    pub property_name: String,
    pub type_maps: Vec<PropertyMapping>,
}

impl EntityMap {
    /// Finds a top-level property mapping by property name.
    pub fn property_map(&self, property_name: &str) -> Option<&PropertyMapping> {
        self.property_maps
            .iter()
            .find(|map| map.property_name() == property_name)
    }

    /// Every scalar mapping, descending into complex properties depth first.
    pub fn scalar_maps(&self) -> Vec<&PropertyMap> {
        let mut dst = vec![];
        collect_scalars(&self.property_maps, &mut dst);
        dst
    }

    pub fn is_key(&self, property_name: &str) -> bool {
        self.key_maps
            .iter()
            .any(|key| key.property_name == property_name)
    }
}

fn collect_scalars<'a>(maps: &'a [PropertyMapping], dst: &mut Vec<&'a PropertyMap>) {
    for map in maps {
        match map {
            PropertyMapping::Scalar(scalar) => dst.push(scalar),
            PropertyMapping::Complex(complex) => collect_scalars(&complex.type_maps, dst),
        }
    }
}

impl PropertyMapping {
    pub fn property_name(&self) -> &str {
        match self {
            PropertyMapping::Scalar(scalar) => &scalar.property_name,
            PropertyMapping::Complex(complex) => &complex.property_name,
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, PropertyMapping::Complex(_))
    }

    pub fn as_scalar(&self) -> Option<&PropertyMap> {
        match self {
            PropertyMapping::Scalar(scalar) => Some(scalar),
            PropertyMapping::Complex(_) => None,
        }
    }

    pub fn as_complex(&self) -> Option<&ComplexPropertyMap> {
        match self {
            PropertyMapping::Complex(complex) => Some(complex),
            PropertyMapping::Scalar(_) => None,
        }
    }
}

impl From<PropertyMap> for PropertyMapping {
    fn from(value: PropertyMap) -> Self {
        PropertyMapping::Scalar(value)
    }
}

impl From<ComplexPropertyMap> for PropertyMapping {
    fn from(value: ComplexPropertyMap) -> Self {
        PropertyMapping::Complex(value)
    }
}
