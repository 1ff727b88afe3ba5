use crate::schema::{conceptual::ComplexTypeId, storage::ColumnId};

#[derive(Debug, Clone)]
pub enum PropertyMapping {
    /// A scalar property stored in one column
    Scalar(ScalarPropertyMapping),

    /// A complex property whose members are mapped individually
    Complex(ComplexPropertyMapping),

    /// A column constraint selecting the rows of the mapped type, such as a
    /// discriminator. Not backed by any property.
    Condition(ConditionPropertyMapping),
}

#[derive(Debug, Clone)]
pub struct ScalarPropertyMapping {
    pub property: String,
    pub column: ColumnId,
}

#[derive(Debug, Clone)]
pub struct ComplexPropertyMapping {
    pub property: String,

    /// One entry per complex type the property can hold
    pub type_mappings: Vec<ComplexTypeMapping>,
}

#[derive(Debug, Clone)]
pub struct ComplexTypeMapping {
    pub complex_type: ComplexTypeId,
    pub properties: Vec<PropertyMapping>,
}

impl ComplexTypeMapping {
    pub fn new(complex_type: ComplexTypeId, properties: Vec<PropertyMapping>) -> Self {
        Self {
            complex_type,
            properties,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConditionPropertyMapping {
    pub column: ColumnId,
    pub value: ConditionValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionValue {
    Equals(String),
    IsNull(bool),
}

impl PropertyMapping {
    pub fn scalar(property: impl Into<String>, column: ColumnId) -> Self {
        PropertyMapping::Scalar(ScalarPropertyMapping {
            property: property.into(),
            column,
        })
    }

    /// Maps a complex property holding values of a single complex type.
    pub fn complex(
        property: impl Into<String>,
        complex_type: ComplexTypeId,
        properties: Vec<PropertyMapping>,
    ) -> Self {
        PropertyMapping::Complex(ComplexPropertyMapping {
            property: property.into(),
            type_mappings: vec![ComplexTypeMapping::new(complex_type, properties)],
        })
    }

    /// Maps a complex property whose values may be of any of several complex
    /// types, one type mapping each.
    pub fn complex_types(
        property: impl Into<String>,
        type_mappings: impl IntoIterator<Item = ComplexTypeMapping>,
    ) -> Self {
        PropertyMapping::Complex(ComplexPropertyMapping {
            property: property.into(),
            type_mappings: type_mappings.into_iter().collect(),
        })
    }

    pub fn condition(column: ColumnId, value: ConditionValue) -> Self {
        PropertyMapping::Condition(ConditionPropertyMapping { column, value })
    }

    /// Name of the mapped property. Condition mappings have none.
    pub fn property_name(&self) -> Option<&str> {
        match self {
            PropertyMapping::Scalar(scalar) => Some(&scalar.property),
            PropertyMapping::Complex(complex) => Some(&complex.property),
            PropertyMapping::Condition(_) => None,
        }
    }
}

impl From<ScalarPropertyMapping> for PropertyMapping {
    fn from(value: ScalarPropertyMapping) -> Self {
        PropertyMapping::Scalar(value)
    }
}

impl From<ComplexPropertyMapping> for PropertyMapping {
    fn from(value: ComplexPropertyMapping) -> Self {
        PropertyMapping::Complex(value)
    }
}

impl From<ConditionPropertyMapping> for PropertyMapping {
    fn from(value: ConditionPropertyMapping) -> Self {
        PropertyMapping::Condition(value)
    }
}
