mod support;

use pretty_assertions::assert_eq;
use tablemap::schema::conceptual::*;
use tablemap::schema::mapping::{
    self, ComplexTypeMapping, EntitySetMapping, EntityTypeMapping, MappingFragment,
};
use tablemap::schema::storage::*;
use tablemap::{ComplexPropertyMap, DbContext, PropertyMap, PropertyMapping, Workspace};

struct Customer;
struct Shipment;
struct Contact;

fn scalar(property_name: &str, column_name: &str) -> PropertyMapping {
    PropertyMapping::Scalar(PropertyMap {
        property_name: property_name.to_string(),
        column_name: column_name.to_string(),
    })
}

/// `Customer { Id, Name, Address: Address { Street, City, Geo: Geo { Lat, Lng } } }`
fn customer_workspace() -> Workspace {
    let mut builder = Workspace::builder();

    let geo = builder.complex_type(
        ComplexType::new("Geo")
            .property(Property::scalar("Lat"))
            .property(Property::scalar("Lng")),
    );
    let address = builder.complex_type(
        ComplexType::new("Address")
            .property(Property::scalar("Street"))
            .property(Property::scalar("City"))
            .property(Property::complex("Geo", geo)),
    );
    let customer = builder.entity_type(
        EntityType::new("Customer")
            .property(Property::scalar("Id"))
            .property(Property::scalar("Name"))
            .property(Property::complex("Address", address))
            .key(["Id"])
            .object_type::<Customer>(),
    );
    let customers = builder.entity_set(EntitySet::new("Customers", customer));

    let store_type = builder.store_type(
        StoreType::new("Customer")
            .column("Id")
            .column("Name")
            .column("Address_Street")
            .column("Address_City")
            .column("Address_Geo_Lat")
            .column("Address_Geo_Lng")
            .key(["Id"]),
    );
    let store_set = builder.store_set(StoreSet::new("Customers", store_type).schema("crm"));
    let column = |name| builder.column(store_type, name).unwrap();

    let fragment = MappingFragment::new(store_set)
        .property(mapping::PropertyMapping::scalar("Id", column("Id")))
        .property(mapping::PropertyMapping::scalar("Name", column("Name")))
        .property(mapping::PropertyMapping::complex(
            "Address",
            address,
            vec![
                mapping::PropertyMapping::scalar("Street", column("Address_Street")),
                mapping::PropertyMapping::scalar("City", column("Address_City")),
                mapping::PropertyMapping::complex(
                    "Geo",
                    geo,
                    vec![
                        mapping::PropertyMapping::scalar("Lat", column("Address_Geo_Lat")),
                        mapping::PropertyMapping::scalar("Lng", column("Address_Geo_Lng")),
                    ],
                ),
            ],
        ));

    builder.set_mapping(
        EntitySetMapping::new(customers)
            .type_mapping(EntityTypeMapping::new(customer).fragment(fragment)),
    );

    builder.build().unwrap()
}

/// `Shipment` keyed on the complex `Key: TrackingKey { Carrier, Code }`.
fn shipment_workspace() -> Workspace {
    let mut builder = Workspace::builder();

    let tracking_key = builder.complex_type(
        ComplexType::new("TrackingKey")
            .property(Property::scalar("Carrier"))
            .property(Property::scalar("Code")),
    );
    let shipment = builder.entity_type(
        EntityType::new("Shipment")
            .property(Property::complex("Key", tracking_key))
            .property(Property::scalar("Weight"))
            .key(["Key"])
            .object_type::<Shipment>(),
    );
    let shipments = builder.entity_set(EntitySet::new("Shipments", shipment));

    let store_type = builder.store_type(
        StoreType::new("Shipment")
            .column("Carrier")
            .column("Code")
            .column("Weight")
            .key(["Carrier", "Code"]),
    );
    let store_set = builder.store_set(StoreSet::new("Shipments", store_type));
    let column = |name| builder.column(store_type, name).unwrap();

    let fragment = MappingFragment::new(store_set)
        .property(mapping::PropertyMapping::complex(
            "Key",
            tracking_key,
            vec![
                mapping::PropertyMapping::scalar("Carrier", column("Carrier")),
                mapping::PropertyMapping::scalar("Code", column("Code")),
            ],
        ))
        .property(mapping::PropertyMapping::scalar("Weight", column("Weight")));

    builder.set_mapping(
        EntitySetMapping::new(shipments)
            .type_mapping(EntityTypeMapping::new(shipment).fragment(fragment)),
    );

    builder.build().unwrap()
}

/// `Contact { Id, Channel }` where `Channel` holds either an `Email { Address }`
/// or a `Phone { Number }`, each mapped to its own column.
fn contact_workspace() -> Workspace {
    let mut builder = Workspace::builder();

    let email = builder.complex_type(ComplexType::new("Email").property(Property::scalar("Address")));
    let phone = builder.complex_type(ComplexType::new("Phone").property(Property::scalar("Number")));
    let contact = builder.entity_type(
        EntityType::new("Contact")
            .property(Property::scalar("Id"))
            .property(Property::complex("Channel", email))
            .key(["Id"])
            .object_type::<Contact>(),
    );
    let contacts = builder.entity_set(EntitySet::new("Contacts", contact));

    let store_type = builder.store_type(
        StoreType::new("Contact")
            .column("Id")
            .nullable_column("EmailAddress")
            .nullable_column("PhoneNumber")
            .key(["Id"]),
    );
    let store_set = builder.store_set(StoreSet::new("Contacts", store_type));
    let column = |name| builder.column(store_type, name).unwrap();

    let fragment = MappingFragment::new(store_set)
        .property(mapping::PropertyMapping::scalar("Id", column("Id")))
        .property(mapping::PropertyMapping::complex_types(
            "Channel",
            [
                ComplexTypeMapping::new(
                    email,
                    vec![mapping::PropertyMapping::scalar("Address", column("EmailAddress"))],
                ),
                ComplexTypeMapping::new(
                    phone,
                    vec![mapping::PropertyMapping::scalar("Number", column("PhoneNumber"))],
                ),
            ],
        ));

    builder.set_mapping(
        EntitySetMapping::new(contacts)
            .type_mapping(EntityTypeMapping::new(contact).fragment(fragment)),
    );

    builder.build().unwrap()
}

#[test]
fn nested_complex_properties_keep_their_shape() {
    support::init_tracing();
    let db = DbContext::new(customer_workspace());

    let entity_map = tablemap::entity_map(&db.query::<Customer>()).unwrap();

    assert_eq!(entity_map.table_name, "[crm].[Customers]");
    assert_eq!(
        entity_map.property_maps,
        [
            scalar("Id", "Id"),
            scalar("Name", "Name"),
            PropertyMapping::Complex(ComplexPropertyMap {
                property_name: "Address".to_string(),
                type_maps: vec![
                    scalar("Street", "Address_Street"),
                    scalar("City", "Address_City"),
                    PropertyMapping::Complex(ComplexPropertyMap {
                        property_name: "Geo".to_string(),
                        type_maps: vec![
                            scalar("Lat", "Address_Geo_Lat"),
                            scalar("Lng", "Address_Geo_Lng"),
                        ],
                    }),
                ],
            }),
        ]
    );
}

#[test]
fn scalar_maps_descend_into_complex_properties() {
    let db = DbContext::new(customer_workspace());

    let entity_map = tablemap::entity_map(&db.query::<Customer>()).unwrap();

    let columns: Vec<_> = entity_map
        .scalar_maps()
        .into_iter()
        .map(|map| map.column_name.as_str())
        .collect();
    assert_eq!(
        columns,
        [
            "Id",
            "Name",
            "Address_Street",
            "Address_City",
            "Address_Geo_Lat",
            "Address_Geo_Lng",
        ]
    );

    let address = entity_map
        .property_map("Address")
        .and_then(|map| map.as_complex())
        .unwrap();
    assert_eq!(address.type_maps.len(), 3);
    assert!(entity_map.property_map("Address").unwrap().is_complex());
}

#[test]
fn complex_key_member_is_rejected() {
    let db = DbContext::new(shipment_workspace());

    let err = tablemap::entity_map(&db.query::<Shipment>()).unwrap_err();

    assert!(err.is_unsupported_key_mapping(), "got: {err}");
    let msg = err.to_string();
    assert!(msg.contains("Shipment::Key"), "got: {msg}");
}

#[test]
fn complex_property_with_several_types_concatenates_children() {
    let db = DbContext::new(contact_workspace());

    let entity_map = tablemap::entity_map(&db.query::<Contact>()).unwrap();

    assert_eq!(
        entity_map.property_maps,
        [
            scalar("Id", "Id"),
            PropertyMapping::Complex(ComplexPropertyMap {
                property_name: "Channel".to_string(),
                type_maps: vec![
                    scalar("Address", "EmailAddress"),
                    scalar("Number", "PhoneNumber"),
                ],
            }),
        ]
    );
    assert_eq!(
        entity_map.key_maps,
        [PropertyMap {
            property_name: "Id".to_string(),
            column_name: "Id".to_string(),
        }]
    );
}
