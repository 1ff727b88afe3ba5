mod support;

use support::{order_workspace, Order};
use tablemap::schema::conceptual::*;
use tablemap::schema::mapping::*;
use tablemap::schema::storage::*;
use tablemap::{DbContext, ObjectContext, ObjectType, Workspace};

struct Ghost;
struct Invoice;

fn assert_not_found(result: tablemap::Result<tablemap::EntityMap>, needle: &str) {
    let err = result.unwrap_err();
    let msg = err.to_string();
    assert!(err.is_mapping_not_found(), "expected mapping not found, got: {msg}");
    assert!(msg.contains(needle), "error should mention `{needle}`, got: {msg}");
}

/// An `Invoice` entity type with a single-column table. The closure decides
/// what, if anything, maps the set.
fn invoice_workspace(
    map: impl FnOnce(&mut tablemap::schema::Builder, EntityTypeId, EntitySetId, StoreSetId, ColumnId),
) -> Workspace {
    let mut builder = Workspace::builder();
    builder.conceptual_container("Billing");

    let invoice = builder.entity_type(
        EntityType::new("Invoice")
            .property(Property::scalar("Id"))
            .property(Property::scalar("Amount"))
            .key(["Id"])
            .object_type::<Invoice>(),
    );
    let invoices = builder.entity_set(EntitySet::new("Invoices", invoice));
    let store_type = builder.store_type(
        StoreType::new("Invoice")
            .column("Id")
            .column("Amount")
            .key(["Id"]),
    );
    let store_set = builder.store_set(StoreSet::new("Invoices", store_type));
    let amount = builder.column(store_type, "Amount").unwrap();

    map(&mut builder, invoice, invoices, store_set, amount);
    builder.build().unwrap()
}

#[test]
fn type_absent_from_conceptual_model() {
    let db = DbContext::new(order_workspace(|set| set));

    assert_not_found(tablemap::entity_map(&db.query::<Ghost>()), "Ghost");
    assert_not_found(
        tablemap::entity_map_for(ObjectType::of::<Ghost>(), &db),
        "not mapped to an entity type",
    );
}

#[test]
fn type_bound_to_several_entity_types() {
    let mut builder = Workspace::builder();
    builder.entity_type(
        EntityType::new("Order")
            .property(Property::scalar("Id"))
            .key(["Id"])
            .object_type::<Order>(),
    );
    builder.entity_type(
        EntityType::new("ArchivedOrder")
            .property(Property::scalar("Id"))
            .key(["Id"])
            .object_type::<Order>(),
    );
    let context = ObjectContext::new(builder.build().unwrap());

    assert_not_found(
        tablemap::entity_map_for_object_context(ObjectType::of::<Order>(), &context),
        "Order, ArchivedOrder",
    );
}

#[test]
fn entity_type_without_entity_set() {
    let mut builder = Workspace::builder();
    builder.conceptual_container("Billing");
    builder.entity_type(
        EntityType::new("Invoice")
            .property(Property::scalar("Id"))
            .key(["Id"])
            .object_type::<Invoice>(),
    );
    let db = DbContext::new(builder.build().unwrap());

    assert_not_found(
        tablemap::entity_map(&db.query::<Invoice>()),
        "no entity set in container `Billing` holds entity type `Invoice`",
    );
}

#[test]
fn entity_set_without_mapping() {
    let db = DbContext::new(invoice_workspace(|_, _, _, _, _| {}));

    assert_not_found(
        tablemap::entity_map(&db.query::<Invoice>()),
        "entity set `Invoices` is not mapped",
    );
}

#[test]
fn type_mapping_without_fragment() {
    let db = DbContext::new(invoice_workspace(|builder, invoice, invoices, _, _| {
        builder.set_mapping(
            EntitySetMapping::new(invoices).type_mapping(EntityTypeMapping::new(invoice)),
        );
    }));

    assert_not_found(
        tablemap::entity_map(&db.query::<Invoice>()),
        "has no mapping fragment",
    );
}

#[test]
fn several_type_mappings_without_hierarchy() {
    let db = DbContext::new(invoice_workspace(|builder, invoice, invoices, store_set, _| {
        builder.set_mapping(
            EntitySetMapping::new(invoices)
                .type_mapping(
                    EntityTypeMapping::new(invoice).fragment(MappingFragment::new(store_set)),
                )
                .type_mapping(
                    EntityTypeMapping::new(invoice).fragment(MappingFragment::new(store_set)),
                ),
        );
    }));

    assert_not_found(
        tablemap::entity_map(&db.query::<Invoice>()),
        "has 2 type mappings",
    );
}

#[test]
fn key_member_without_property_mapping() {
    let db = DbContext::new(invoice_workspace(|builder, invoice, invoices, store_set, amount| {
        builder.set_mapping(
            EntitySetMapping::new(invoices).type_mapping(
                EntityTypeMapping::new(invoice).fragment(
                    MappingFragment::new(store_set)
                        .property(PropertyMapping::scalar("Amount", amount)),
                ),
            ),
        );
    }));

    assert_not_found(
        tablemap::entity_map(&db.query::<Invoice>()),
        "key member `Invoice::Id`",
    );
}

#[test]
fn key_member_mapped_twice() {
    let db = DbContext::new(invoice_workspace(|builder, invoice, invoices, store_set, amount| {
        builder.set_mapping(
            EntitySetMapping::new(invoices).type_mapping(
                EntityTypeMapping::new(invoice).fragment(
                    MappingFragment::new(store_set)
                        .property(PropertyMapping::scalar("Id", amount))
                        .property(PropertyMapping::scalar("Id", amount)),
                ),
            ),
        );
    }));

    let err = tablemap::entity_map(&db.query::<Invoice>()).unwrap_err();
    assert!(err.is_unsupported_key_mapping(), "got: {err}");
    assert!(err.to_string().contains("mapped 2 times"), "got: {err}");
}
