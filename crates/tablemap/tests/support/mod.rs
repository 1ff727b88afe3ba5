#![allow(dead_code)]

use tablemap::schema::conceptual::*;
use tablemap::schema::mapping::*;
use tablemap::schema::storage::*;
use tablemap::Workspace;

pub struct Order;

pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tablemap=trace"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// `Order { Id, Number, Total, Notes }` keyed on `Id`, stored in a table with
/// differently named columns. `configure` customizes the store set.
pub fn order_workspace(configure: impl FnOnce(StoreSet) -> StoreSet) -> Workspace {
    let mut builder = Workspace::builder();
    builder.conceptual_container("ShopContext");

    let order = builder.entity_type(
        EntityType::new("Order")
            .property(Property::scalar("Id"))
            .property(Property::scalar("Number"))
            .property(Property::scalar("Total"))
            .property(Property::scalar("Notes").nullable())
            .key(["Id"])
            .object_type::<Order>(),
    );
    let orders = builder.entity_set(EntitySet::new("Orders", order));

    let store_type = builder.store_type(
        StoreType::new("Order")
            .column("OrderId")
            .column("OrderNumber")
            .column("OrderTotal")
            .nullable_column("Notes")
            .key(["OrderId"]),
    );
    let store_set = builder.store_set(configure(StoreSet::new("Order", store_type)));

    let column = |name| builder.column(store_type, name).unwrap();
    let fragment = MappingFragment::new(store_set)
        .property(PropertyMapping::scalar("Id", column("OrderId")))
        .property(PropertyMapping::scalar("Number", column("OrderNumber")))
        .property(PropertyMapping::scalar("Total", column("OrderTotal")))
        .property(PropertyMapping::scalar("Notes", column("Notes")));

    builder.set_mapping(
        EntitySetMapping::new(orders).type_mapping(EntityTypeMapping::new(order).fragment(fragment)),
    );

    builder.build().unwrap()
}
