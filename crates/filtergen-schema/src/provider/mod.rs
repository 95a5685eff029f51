mod document;

use crate::{prelude::*, validate::validate_registry};
use std::collections::BTreeMap;

///
/// MetadataProvider
///
/// Source of entity metadata for schema derivation.
///

pub trait MetadataProvider {
    /// Look up one entity by its raw name.
    fn entity(&self, name: &str) -> Option<&EntityDescriptor>;

    /// Every entity, in the provider's canonical order.
    fn entities(&self) -> impl Iterator<Item = &EntityDescriptor>;
}

///
/// MetadataRegistry
///
/// In-memory provider. Entities keep their registration order; lookups go
/// through a name index.
///

#[derive(Clone, Debug, Default)]
pub struct MetadataRegistry {
    entities: Vec<EntityDescriptor>,
    index: BTreeMap<String, usize>,
}

impl MetadataRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity. Entity names must be unique.
    pub fn register(&mut self, entity: EntityDescriptor) -> Result<(), Error> {
        let name = entity.name.as_str().to_string();
        if self.index.contains_key(&name) {
            return Err(Error::DuplicateEntity(name));
        }

        self.index.insert(name, self.entities.len());
        self.entities.push(entity);

        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_entity(mut self, entity: EntityDescriptor) -> Result<Self, Error> {
        self.register(entity)?;

        Ok(self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Run metadata validation over every registered entity. Every problem
    /// found is reported at once in [`Error::Validation`].
    pub fn validate(&self) -> Result<(), Error> {
        validate_registry(self).result().map_err(Error::Validation)
    }

    /// Parse a JSON metadata document.
    pub fn from_json(src: &str) -> Result<Self, Error> {
        let doc: document::MetadataDocument =
            serde_json::from_str(src).map_err(|e| Error::Parse(e.to_string()))?;

        doc.into_registry()
    }

    /// Parse a TOML metadata document.
    pub fn from_toml(src: &str) -> Result<Self, Error> {
        let doc: document::MetadataDocument =
            toml::from_str(src).map_err(|e| Error::Parse(e.to_string()))?;

        doc.into_registry()
    }
}

impl MetadataProvider for MetadataRegistry {
    fn entity(&self, name: &str) -> Option<&EntityDescriptor> {
        self.index.get(name).map(|&i| &self.entities[i])
    }

    fn entities(&self) -> impl Iterator<Item = &EntityDescriptor> {
        self.entities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(name: &str) -> EntityDescriptor {
        EntityDescriptor::named(name).unwrap()
    }

    #[test]
    fn registration_order_is_preserved() {
        let registry = MetadataRegistry::new()
            .with_entity(entity("Order"))
            .unwrap()
            .with_entity(entity("Customer"))
            .unwrap()
            .with_entity(entity("Address"))
            .unwrap();

        let names: Vec<_> = registry.entities().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Order", "Customer", "Address"]);
        assert_eq!(registry.len(), 3);
        assert!(registry.entity("Customer").is_some());
        assert!(registry.entity("Invoice").is_none());
    }

    #[test]
    fn duplicate_entity_is_rejected() {
        let mut registry = MetadataRegistry::new();
        registry.register(entity("Order")).unwrap();

        let err = registry.register(entity("Order")).unwrap_err();
        assert!(matches!(err, Error::DuplicateEntity(ref name) if name == "Order"));
        assert_eq!(registry.len(), 1);
    }
}
