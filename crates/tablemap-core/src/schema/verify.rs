use super::{
    conceptual::{ComplexTypeId, EntityTypeId, Property, PropertyTy},
    mapping::{PropertyMapping, ScalarPropertyMapping},
    storage::{ColumnId, StoreTypeId},
    Result, Workspace,
};
use crate::Error;

use std::collections::HashSet;

struct Verify<'a> {
    workspace: &'a Workspace,
}

impl Workspace {
    /// Checks that every cross-reference in the workspace resolves.
    ///
    /// [`Builder::build`](super::Builder::build) runs this before returning;
    /// call it again after editing a workspace in place.
    pub fn verify(&self) -> Result<()> {
        Verify { workspace: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        debug_assert!(self.verify_ids_populated());

        // Reference checks run first; the later checks walk the model through
        // the (panicking) ID lookups.
        self.verify_complex_types()?;
        self.verify_base_types_exist()?;
        self.verify_hierarchies_are_acyclic()?;
        self.verify_key_members()?;
        self.verify_entity_sets()?;
        self.verify_store_types()?;
        self.verify_store_sets()?;
        self.verify_set_mappings()?;
        Ok(())
    }

    fn verify_ids_populated(&self) -> bool {
        let conceptual = &self.workspace.conceptual;

        for (id, ty) in &conceptual.entity_types {
            assert_eq!(*id, ty.id);
        }

        for (id, ty) in &conceptual.complex_types {
            assert_eq!(*id, ty.id);
        }

        for (id, set) in &conceptual.entity_sets {
            assert_eq!(*id, set.id);
        }

        for (index, ty) in self.workspace.storage.store_types.iter().enumerate() {
            assert_eq!(index, ty.id.0);
        }

        true
    }

    fn verify_complex_types(&self) -> Result<()> {
        let conceptual = &self.workspace.conceptual;

        for ty in conceptual.entity_types() {
            self.verify_property_targets(&ty.name, &ty.properties)?;
        }

        for ty in conceptual.complex_types.values() {
            self.verify_property_targets(&ty.name, &ty.properties)?;
        }

        Ok(())
    }

    fn verify_property_targets(&self, owner: &str, properties: &[Property]) -> Result<()> {
        for property in properties {
            if let PropertyTy::Complex(target) = property.ty {
                if !self.complex_type_exists(target) {
                    return Err(Error::invalid_workspace(format!(
                        "property `{owner}::{}` references an undefined complex type",
                        property.name
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_base_types_exist(&self) -> Result<()> {
        for ty in self.workspace.conceptual.entity_types() {
            if let Some(base_type) = ty.base_type {
                if !self.entity_type_exists(base_type) {
                    return Err(Error::invalid_workspace(format!(
                        "entity type `{}` derives from an undefined entity type",
                        ty.name
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_hierarchies_are_acyclic(&self) -> Result<()> {
        let conceptual = &self.workspace.conceptual;

        for ty in conceptual.entity_types() {
            let mut seen = HashSet::new();
            let mut next = Some(ty.id);

            while let Some(id) = next {
                if !seen.insert(id) {
                    return Err(Error::invalid_workspace(format!(
                        "entity type `{}` has a cyclic base type chain",
                        ty.name
                    )));
                }
                next = conceptual.entity_type(id).base_type;
            }
        }

        Ok(())
    }

    fn verify_key_members(&self) -> Result<()> {
        let conceptual = &self.workspace.conceptual;

        for ty in conceptual.entity_types() {
            if ty.base_type.is_some() && !ty.key_members.is_empty() {
                return Err(Error::invalid_workspace(format!(
                    "derived entity type `{}` redeclares the entity key",
                    ty.name
                )));
            }

            for member in &ty.key_members {
                if conceptual.property(ty.id, member).is_none() {
                    return Err(Error::invalid_workspace(format!(
                        "key member `{}::{member}` is not a property of the entity type",
                        ty.name
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_entity_sets(&self) -> Result<()> {
        let mut names = HashSet::new();

        for set in self.workspace.conceptual.entity_sets() {
            if !names.insert(set.name.as_str()) {
                return Err(Error::invalid_workspace(format!(
                    "duplicate entity set name `{}`",
                    set.name
                )));
            }

            if !self.entity_type_exists(set.element_type) {
                return Err(Error::invalid_workspace(format!(
                    "entity set `{}` has an undefined element type",
                    set.name
                )));
            }
        }

        Ok(())
    }

    fn verify_store_types(&self) -> Result<()> {
        for ty in &self.workspace.storage.store_types {
            for column in &ty.key {
                if column.index >= ty.columns.len() {
                    return Err(Error::invalid_workspace(format!(
                        "store type `{}` has a key on an undefined column",
                        ty.name
                    )));
                }
            }
        }

        Ok(())
    }

    fn verify_store_sets(&self) -> Result<()> {
        let mut names = HashSet::new();

        for set in &self.workspace.storage.store_sets {
            if !names.insert(set.name.as_str()) {
                return Err(Error::invalid_workspace(format!(
                    "duplicate store set name `{}`",
                    set.name
                )));
            }

            if set.element_type.0 >= self.workspace.storage.store_types.len() {
                return Err(Error::invalid_workspace(format!(
                    "store set `{}` has an undefined element type",
                    set.name
                )));
            }
        }

        Ok(())
    }

    fn verify_set_mappings(&self) -> Result<()> {
        let conceptual = &self.workspace.conceptual;
        let storage = &self.workspace.storage;

        for (id, set_mapping) in &self.workspace.mapping.entity_sets {
            let Some(entity_set) = conceptual.entity_sets.get(id) else {
                return Err(Error::invalid_workspace(
                    "set mapping references an undefined entity set",
                ));
            };

            for type_mapping in &set_mapping.type_mappings {
                for entity_type in &type_mapping.entity_types {
                    if !self.entity_type_exists(*entity_type) {
                        return Err(Error::invalid_workspace(format!(
                            "mapping for entity set `{}` references an undefined entity type",
                            entity_set.name
                        )));
                    }
                }

                for fragment in &type_mapping.fragments {
                    let Some(store_set) = storage.store_sets.get(fragment.store_set.0) else {
                        return Err(Error::invalid_workspace(format!(
                            "mapping for entity set `{}` references an undefined store set",
                            entity_set.name
                        )));
                    };

                    self.verify_property_mappings(
                        &entity_set.name,
                        store_set.element_type,
                        &fragment.properties,
                    )?;
                }
            }
        }

        Ok(())
    }

    fn verify_property_mappings(
        &self,
        set_name: &str,
        store_type: StoreTypeId,
        properties: &[PropertyMapping],
    ) -> Result<()> {
        for property in properties {
            match property {
                PropertyMapping::Scalar(ScalarPropertyMapping { property, column }) => {
                    if !self.column_exists(store_type, *column) {
                        return Err(Error::invalid_workspace(format!(
                            "property `{property}` in the mapping for entity set `{set_name}` \
                             references a column outside the mapped table"
                        )));
                    }
                }
                PropertyMapping::Complex(complex) => {
                    for type_mapping in &complex.type_mappings {
                        if !self.complex_type_exists(type_mapping.complex_type) {
                            return Err(Error::invalid_workspace(format!(
                                "property `{}` in the mapping for entity set `{set_name}` \
                                 references an undefined complex type",
                                complex.property
                            )));
                        }

                        self.verify_property_mappings(
                            set_name,
                            store_type,
                            &type_mapping.properties,
                        )?;
                    }
                }
                PropertyMapping::Condition(condition) => {
                    if !self.column_exists(store_type, condition.column) {
                        return Err(Error::invalid_workspace(format!(
                            "condition in the mapping for entity set `{set_name}` \
                             references a column outside the mapped table"
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    fn entity_type_exists(&self, id: EntityTypeId) -> bool {
        self.workspace.conceptual.entity_types.contains_key(&id)
    }

    fn complex_type_exists(&self, id: ComplexTypeId) -> bool {
        self.workspace.conceptual.complex_types.contains_key(&id)
    }

    fn column_exists(&self, store_type: StoreTypeId, column: ColumnId) -> bool {
        column.store_type == store_type
            && self
                .workspace
                .storage
                .store_types
                .get(store_type.0)
                .is_some_and(|ty| column.index < ty.columns.len())
    }
}
