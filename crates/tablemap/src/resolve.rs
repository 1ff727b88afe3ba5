use crate::{ComplexPropertyMap, EntityMap, Flavor, PropertyMap, PropertyMapping, TableName};

use tablemap_core::schema::{
    conceptual::{EntitySet, EntityType},
    mapping::{self, EntityTypeMapping, MappingFragment},
    ObjectType, Workspace,
};
use tablemap_core::{Error, Result};

/// Computes the [`EntityMap`] of one object type against a workspace.
pub(crate) struct Resolve<'a> {
    workspace: &'a Workspace,
    flavor: Flavor,
    object_type: ObjectType,
}

impl<'a> Resolve<'a> {
    pub(crate) fn new(workspace: &'a Workspace, flavor: Flavor, object_type: ObjectType) -> Self {
        Self {
            workspace,
            flavor,
            object_type,
        }
    }

    pub(crate) fn entity_map(&self) -> Result<EntityMap> {
        let _span = tracing::debug_span!("entity_map", object_type = %self.object_type).entered();

        let entity_type = self.entity_type()?;
        let entity_set = self.entity_set(entity_type)?;
        let fragment = self.fragment(entity_set)?;

        let storage = &self.workspace.storage;
        let store_set = storage.store_set(fragment.store_set);
        let store_type = storage.store_type(store_set.element_type);

        let table = TableName {
            schema: store_set.schema_name().map(str::to_string),
            name: store_set.table_name().to_string(),
        };
        let table_name = table.to_sql(self.flavor);

        tracing::debug!(store_type = %store_type.name, %table_name, "resolved table");

        let mut entity_map = EntityMap {
            object_type: self.object_type,
            model_type: entity_type.id,
            model_set: entity_set.id,
            store_set: store_set.id,
            store_type: store_type.id,
            table,
            table_name,
            property_maps: vec![],
            key_maps: vec![],
        };

        self.flatten(&fragment.properties, &mut entity_map.property_maps);
        self.map_keys(entity_type, &mut entity_map)?;

        Ok(entity_map)
    }

    /// The conceptual type bound to exactly the requested object type.
    fn entity_type(&self) -> Result<&'a EntityType> {
        let matches: Vec<_> = self
            .workspace
            .conceptual
            .entity_types_for(self.object_type)
            .collect();

        match &matches[..] {
            [entity_type] => {
                tracing::debug!(entity_type = %entity_type.name, "resolved entity type");
                Ok(*entity_type)
            }
            [] => Err(Error::mapping_not_found(format!(
                "type `{}` is not mapped to an entity type in the conceptual model",
                self.object_type
            ))),
            _ => Err(Error::mapping_not_found(format!(
                "type `{}` is mapped to {} entity types ({}); expected exactly one",
                self.object_type,
                matches.len(),
                matches
                    .iter()
                    .map(|ty| ty.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }

    fn entity_set(&self, entity_type: &EntityType) -> Result<&'a EntitySet> {
        let entity_set = self
            .workspace
            .conceptual
            .entity_set_for(entity_type.id)
            .ok_or_else(|| {
                Error::mapping_not_found(format!(
                    "no entity set in container `{}` holds entity type `{}`",
                    self.workspace.conceptual.container, entity_type.name
                ))
            })?;

        tracing::debug!(entity_set = %entity_set.name, "resolved entity set");
        Ok(entity_set)
    }

    fn type_mapping(&self, entity_set: &EntitySet) -> Result<&'a EntityTypeMapping> {
        let set_mapping = self
            .workspace
            .mapping
            .entity_set(entity_set.id)
            .ok_or_else(|| {
                Error::mapping_not_found(format!(
                    "entity set `{}` is not mapped to storage",
                    entity_set.name
                ))
            })?;

        set_mapping.primary_type_mapping().ok_or_else(|| {
            Error::mapping_not_found(format!(
                "entity set `{}` has {} type mappings and none covers the type hierarchy",
                entity_set.name,
                set_mapping.type_mappings.len()
            ))
        })
    }

    fn fragment(&self, entity_set: &EntitySet) -> Result<&'a MappingFragment> {
        let type_mapping = self.type_mapping(entity_set)?;

        if type_mapping.fragments.len() > 1 {
            tracing::debug!(
                fragments = type_mapping.fragments.len(),
                "entity split across tables; using the first fragment"
            );
        }

        let fragment = type_mapping.fragments.first().ok_or_else(|| {
            Error::mapping_not_found(format!(
                "mapping for entity set `{}` has no mapping fragment",
                entity_set.name
            ))
        })?;

        tracing::debug!(
            store_set = %self.workspace.storage.store_set(fragment.store_set).name,
            "resolved mapping fragment"
        );
        Ok(fragment)
    }

    /// Converts the fragment's property mappings, preserving order and the
    /// nesting of complex properties.
    fn flatten(&self, src: &[mapping::PropertyMapping], dst: &mut Vec<PropertyMapping>) {
        for property in src {
            match property {
                mapping::PropertyMapping::Scalar(scalar) => {
                    let column = self.workspace.storage.column(scalar.column);
                    tracing::trace!(property = %scalar.property, column = %column.name, "scalar");

                    dst.push(PropertyMapping::Scalar(PropertyMap {
                        property_name: scalar.property.clone(),
                        column_name: column.name.clone(),
                    }));
                }
                mapping::PropertyMapping::Complex(complex) => {
                    tracing::trace!(property = %complex.property, "complex");

                    let mut type_maps = vec![];
                    for type_mapping in &complex.type_mappings {
                        self.flatten(&type_mapping.properties, &mut type_maps);
                    }

                    dst.push(PropertyMapping::Complex(ComplexPropertyMap {
                        property_name: complex.property.clone(),
                        type_maps,
                    }));
                }
                // Conditions constrain rows; there is no property to map.
                mapping::PropertyMapping::Condition(_) => {}
            }
        }
    }

    fn map_keys(&self, entity_type: &EntityType, entity_map: &mut EntityMap) -> Result<()> {
        for member in self.workspace.conceptual.key_members(entity_type.id) {
            let matches: Vec<_> = entity_map
                .property_maps
                .iter()
                .filter(|map| map.property_name() == member)
                .collect();

            let key_map = match &matches[..] {
                [PropertyMapping::Scalar(scalar)] => scalar.clone(),
                [PropertyMapping::Complex(_)] => {
                    return Err(Error::unsupported_key_mapping(format!(
                        "key member `{}::{member}` maps to a complex property",
                        entity_type.name
                    )));
                }
                [] => {
                    return Err(Error::mapping_not_found(format!(
                        "key member `{}::{member}` has no property mapping in table {}",
                        entity_type.name, entity_map.table_name
                    )));
                }
                _ => {
                    return Err(Error::unsupported_key_mapping(format!(
                        "key member `{}::{member}` is mapped {} times",
                        entity_type.name,
                        matches.len()
                    )));
                }
            };

            tracing::debug!(member = %member, column = %key_map.column_name, "resolved key member");
            entity_map.key_maps.push(key_map);
        }

        Ok(())
    }
}
