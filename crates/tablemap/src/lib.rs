mod flavor;
pub use flavor::Flavor;

pub mod map;
pub use map::{ComplexPropertyMap, EntityMap, PropertyMap, PropertyMapping};

pub mod provider;
pub use provider::{MappingProvider, MetadataMappingProvider};

mod resolve;

mod table_name;
pub use table_name::TableName;

pub use tablemap_core::{
    bail, err, schema, DbContext, Error, ObjectContext, ObjectQuery, ObjectType, Result,
    Workspace,
};

/// Resolves the mapping of a query's element type using the default
/// [`MetadataMappingProvider`].
pub fn entity_map<T: 'static>(query: &ObjectQuery<T>) -> Result<EntityMap> {
    MetadataMappingProvider::default().entity_map(query)
}

/// Resolves the mapping of `ty` in the workspace behind a [`DbContext`] using
/// the default [`MetadataMappingProvider`].
pub fn entity_map_for(ty: ObjectType, context: &DbContext) -> Result<EntityMap> {
    MetadataMappingProvider::default().entity_map_for(ty, context)
}

/// Resolves the mapping of `ty` in the workspace behind an [`ObjectContext`]
/// using the default [`MetadataMappingProvider`].
pub fn entity_map_for_object_context(ty: ObjectType, context: &ObjectContext) -> Result<EntityMap> {
    MetadataMappingProvider::default().entity_map_for_object_context(ty, context)
}
