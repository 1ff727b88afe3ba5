use crate::Flavor;

use std::fmt;

/// A possibly schema-qualified table name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableName {
    /// Database schema, omitted when not annotated
    pub schema: Option<String>,

    /// Table name
    pub name: String,
}

impl TableName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
        }
    }

    pub fn with_schema(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: Some(schema.into()),
            name: name.into(),
        }
    }

    fn parts(&self) -> impl Iterator<Item = &str> {
        self.schema.as_deref().into_iter().chain([self.name.as_str()])
    }

    /// Renders the name with each part quoted for `flavor`, period delimited.
    pub fn to_sql(&self, flavor: Flavor) -> String {
        let mut dst = String::new();
        let mut s = "";
        for part in self.parts() {
            dst.push_str(s);
            flavor.write_ident(&mut dst, part);
            s = ".";
        }
        dst
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for part in self.parts() {
            write!(f, "{s}{part}")?;
            s = ".";
        }
        Ok(())
    }
}
