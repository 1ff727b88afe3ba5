pub mod context;
pub use context::{DbContext, ObjectContext, ObjectQuery};

mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::{ObjectType, Workspace};

/// A Result type alias that uses tablemap's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
