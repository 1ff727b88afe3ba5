//! Handles through which callers reach a metadata workspace.

use crate::schema::{ObjectType, Workspace};

use std::marker::PhantomData;
use std::sync::Arc;

/// Low-level context bound to one metadata workspace.
#[derive(Debug, Clone)]
pub struct ObjectContext {
    workspace: Arc<Workspace>,
}

/// Application-facing context wrapping an [`ObjectContext`].
#[derive(Debug, Clone)]
pub struct DbContext {
    object_context: ObjectContext,
}

/// A query over entities materialized as `T`.
pub struct ObjectQuery<T> {
    context: ObjectContext,
    _p: PhantomData<fn() -> T>,
}

impl ObjectContext {
    /// Binds a context to `workspace`.
    ///
    /// Lookups assume the workspace's cross-references resolve, as they do for
    /// one returned by [`Builder::build`](crate::schema::Builder::build). A
    /// workspace edited after building should pass [`Workspace::verify`]
    /// first; lookups against a dangling ID panic.
    pub fn new(workspace: impl Into<Arc<Workspace>>) -> Self {
        Self {
            workspace: workspace.into(),
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Starts a query over entities of type `T`.
    pub fn query<T: 'static>(&self) -> ObjectQuery<T> {
        ObjectQuery {
            context: self.clone(),
            _p: PhantomData,
        }
    }
}

impl DbContext {
    pub fn new(workspace: impl Into<Arc<Workspace>>) -> Self {
        Self {
            object_context: ObjectContext::new(workspace),
        }
    }

    pub fn object_context(&self) -> &ObjectContext {
        &self.object_context
    }

    pub fn workspace(&self) -> &Workspace {
        self.object_context.workspace()
    }

    /// Starts a query over entities of type `T`.
    pub fn query<T: 'static>(&self) -> ObjectQuery<T> {
        self.object_context.query()
    }
}

impl From<ObjectContext> for DbContext {
    fn from(object_context: ObjectContext) -> Self {
        Self { object_context }
    }
}

impl<T: 'static> ObjectQuery<T> {
    pub fn context(&self) -> &ObjectContext {
        &self.context
    }

    /// The type of the entities the query yields.
    pub fn element_type(&self) -> ObjectType {
        ObjectType::of::<T>()
    }
}

impl<T> Clone for ObjectQuery<T> {
    fn clone(&self) -> Self {
        Self {
            context: self.context.clone(),
            _p: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for ObjectQuery<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectQuery")
            .field("element_type", &std::any::type_name::<T>())
            .finish()
    }
}
