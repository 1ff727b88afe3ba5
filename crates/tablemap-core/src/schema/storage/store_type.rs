use super::{Column, ColumnId};

use std::fmt;

/// The row shape of a database table
#[derive(Debug, Clone)]
pub struct StoreType {
    pub id: StoreTypeId,

    pub name: String,

    pub columns: Vec<Column>,

    /// Columns composing the primary key
    pub key: Vec<ColumnId>,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoreTypeId(pub usize);

impl StoreType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: StoreTypeId::placeholder(),
            name: name.into(),
            columns: vec![],
            key: vec![],
        }
    }

    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.push_column(name.into(), false);
        self
    }

    pub fn nullable_column(mut self, name: impl Into<String>) -> Self {
        self.push_column(name.into(), true);
        self
    }

    /// Marks the named columns as the primary key. Names that do not match a
    /// column are rejected when the workspace is built.
    pub fn key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.key = columns
            .into_iter()
            .map(|name| match self.column_id(name.as_ref()) {
                Some(id) => id,
                None => ColumnId {
                    store_type: self.id,
                    index: usize::MAX,
                },
            })
            .collect();
        self
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_id(&self, name: &str) -> Option<ColumnId> {
        self.column_by_name(name).map(|column| column.id)
    }

    /// Columns forming the key. Key entries naming no column are skipped.
    pub fn key_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.key.iter().filter_map(|id| self.columns.get(id.index))
    }

    fn push_column(&mut self, name: String, nullable: bool) {
        let id = ColumnId {
            store_type: self.id,
            index: self.columns.len(),
        };
        self.columns.push(Column { id, name, nullable });
    }

    /// Assigns the type's identifier, rewriting the column IDs that were
    /// created before it was known.
    pub(crate) fn assign_id(&mut self, id: StoreTypeId) {
        self.id = id;
        for column in &mut self.columns {
            column.id.store_type = id;
        }
        for column in &mut self.key {
            column.store_type = id;
        }
    }
}

impl StoreTypeId {
    pub(crate) const fn placeholder() -> Self {
        Self(usize::MAX)
    }
}

impl fmt::Debug for StoreTypeId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "StoreTypeId({})", self.0)
    }
}
