//! Storage (database) model

mod column;
pub use column::{Column, ColumnId};

pub mod metadata;
pub use metadata::MetadataProperties;

mod schema;
pub use schema::Schema;

mod store_set;
pub use store_set::{StoreSet, StoreSetId};

mod store_type;
pub use store_type::{StoreType, StoreTypeId};
