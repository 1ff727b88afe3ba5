mod builder;
pub use builder::Builder;

use crate::{resolve::Resolve, EntityMap, Flavor};

use tablemap_core::{DbContext, ObjectContext, ObjectQuery, ObjectType, Result};

/// Produces [`EntityMap`]s for object types.
///
/// The three entry points differ only in how the type and the metadata
/// workspace are supplied; all of them funnel into
/// [`entity_map_for_object_context`](MappingProvider::entity_map_for_object_context).
pub trait MappingProvider {
    /// Resolves the mapping of a query's element type.
    fn entity_map<T: 'static>(&self, query: &ObjectQuery<T>) -> Result<EntityMap> {
        self.entity_map_for_object_context(query.element_type(), query.context())
    }

    /// Resolves the mapping of `ty` in the workspace behind `context`.
    fn entity_map_for(&self, ty: ObjectType, context: &DbContext) -> Result<EntityMap> {
        self.entity_map_for_object_context(ty, context.object_context())
    }

    /// Resolves the mapping of `ty` in the workspace behind `context`.
    fn entity_map_for_object_context(
        &self,
        ty: ObjectType,
        context: &ObjectContext,
    ) -> Result<EntityMap>;
}

/// Reads mappings from the metadata workspace.
#[derive(Debug, Default, Clone)]
pub struct MetadataMappingProvider {
    /// Dialect used to quote the table name
    flavor: Flavor,
}

impl MetadataMappingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }
}

impl MappingProvider for MetadataMappingProvider {
    fn entity_map_for_object_context(
        &self,
        ty: ObjectType,
        context: &ObjectContext,
    ) -> Result<EntityMap> {
        Resolve::new(context.workspace(), self.flavor, ty).entity_map()
    }
}
