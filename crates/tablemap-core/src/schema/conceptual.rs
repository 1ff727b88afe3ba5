//! Conceptual (entity) model

mod complex_type;
pub use complex_type::{ComplexType, ComplexTypeId};

mod entity_set;
pub use entity_set::{EntitySet, EntitySetId};

mod entity_type;
pub use entity_type::{EntityType, EntityTypeId};

mod property;
pub use property::{Property, PropertyTy};

mod schema;
pub use schema::Schema;
