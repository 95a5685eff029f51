use crate::prelude::*;

///
/// EntityDescriptor
/// Entity name plus its properties in declaration order.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EntityDescriptor {
    pub name: RawName,
    pub properties: Vec<PropertyDescriptor>,
}

impl EntityDescriptor {
    #[must_use]
    pub const fn new(name: RawName) -> Self {
        Self {
            name,
            properties: Vec::new(),
        }
    }

    /// Shorthand for `new(RawName::new(name)?)`.
    pub fn named(name: impl Into<String>) -> Result<Self, Error> {
        Ok(Self::new(RawName::new(name)?))
    }

    #[must_use]
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Relation targets referenced by this entity, in declaration order.
    pub fn relation_targets(&self) -> impl Iterator<Item = &RawName> {
        self.properties.iter().filter_map(|p| match &p.kind {
            PropertyKind::Relation { target, .. } => Some(target),
            PropertyKind::Scalar(_) | PropertyKind::Enum { .. } => None,
        })
    }

    /// Scalars referenced by this entity, in declaration order.
    pub fn scalars(&self) -> impl Iterator<Item = Scalar> {
        self.properties.iter().filter_map(|p| match p.kind {
            PropertyKind::Scalar(scalar) => Some(scalar),
            PropertyKind::Enum { .. } | PropertyKind::Relation { .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_keep_declaration_order() {
        let entity = EntityDescriptor::named("Order")
            .unwrap()
            .with_property(PropertyDescriptor::scalar("amount", Scalar::BigDecimal))
            .with_property(PropertyDescriptor::enumeration("status", "OrderStatus"))
            .with_property(PropertyDescriptor::to_one(
                "customer",
                RawName::new("Customer").unwrap(),
            ));

        let names: Vec<_> = entity.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["amount", "status", "customer"]);
        assert!(entity.get("status").is_some());
        assert!(entity.get("items").is_none());
        assert_eq!(entity.scalars().collect::<Vec<_>>(), [Scalar::BigDecimal]);
        assert_eq!(
            entity
                .relation_targets()
                .map(RawName::as_str)
                .collect::<Vec<_>>(),
            ["Customer"]
        );
    }

    #[test]
    fn blank_entity_name_is_rejected() {
        assert!(matches!(
            EntityDescriptor::named(""),
            Err(Error::InvalidArgument(_))
        ));
    }
}
