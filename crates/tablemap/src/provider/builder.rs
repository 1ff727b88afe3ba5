use super::MetadataMappingProvider;
use crate::Flavor;

#[derive(Debug, Default)]
pub struct Builder {
    flavor: Flavor,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SQL dialect used to quote table names
    pub fn flavor(&mut self, flavor: Flavor) -> &mut Self {
        self.flavor = flavor;
        self
    }

    pub fn build(&self) -> MetadataMappingProvider {
        MetadataMappingProvider {
            flavor: self.flavor,
        }
    }
}
