use super::ComplexTypeId;

#[derive(Debug, Clone)]
pub struct Property {
    /// The property name
    pub name: String,

    /// Scalar or complex
    pub ty: PropertyTy,

    /// True if the property accepts null values
    pub nullable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyTy {
    Scalar,
    Complex(ComplexTypeId),
}

impl Property {
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: PropertyTy::Scalar,
            nullable: false,
        }
    }

    pub fn complex(name: impl Into<String>, target: ComplexTypeId) -> Self {
        Self {
            name: name.into(),
            ty: PropertyTy::Complex(target),
            nullable: false,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn is_complex(&self) -> bool {
        matches!(self.ty, PropertyTy::Complex(_))
    }
}
