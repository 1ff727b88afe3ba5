pub mod conceptual;

mod builder;
pub use builder::Builder;

pub mod mapping;
use mapping::Mapping;

mod object;
pub use object::ObjectType;

pub mod storage;

mod verify;

use crate::Result;

/// The complete metadata an object context works against: the conceptual
/// model, the storage model, and the mapping between them.
#[derive(Debug, Default)]
pub struct Workspace {
    /// Conceptual (entity) model
    pub conceptual: conceptual::Schema,

    /// Storage (database) model
    pub storage: storage::Schema,

    /// Maps conceptual entity sets to storage tables
    pub mapping: Mapping,
}

impl Workspace {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub(crate) fn verified(self) -> Result<Self> {
        self.verify()?;
        Ok(self)
    }
}
