//! Serialized metadata documents (JSON or TOML).
//!
//! ```toml
//! [[entity]]
//! name = "Order"
//!
//! [[entity.property]]
//! name = "amount"
//! kind = "scalar"
//! type = "BigDecimal"
//!
//! [[entity.property]]
//! name = "customer"
//! kind = "relation"
//! type = "Customer"
//! ```

use crate::{prelude::*, provider::MetadataRegistry};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct MetadataDocument {
    #[serde(default, alias = "entities")]
    entity: Vec<EntityDef>,
}

impl MetadataDocument {
    pub(super) fn into_registry(self) -> Result<MetadataRegistry, Error> {
        let mut registry = MetadataRegistry::new();
        for def in self.entity {
            registry.register(def.into_descriptor()?)?;
        }

        Ok(registry)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EntityDef {
    name: String,

    #[serde(default, alias = "properties")]
    property: Vec<PropertyDef>,
}

impl EntityDef {
    fn into_descriptor(self) -> Result<EntityDescriptor, Error> {
        let mut entity = EntityDescriptor::named(self.name)?;
        for def in self.property {
            let property = def.into_descriptor(entity.name.as_str())?;
            entity.properties.push(property);
        }

        Ok(entity)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PropertyDef {
    name: String,
    kind: String,

    // scalar type, enum name or relation target depending on `kind`
    #[serde(default, rename = "type")]
    ty: Option<String>,

    #[serde(default)]
    cardinality: Cardinality,

    #[serde(default = "default_persistable")]
    persistable: bool,
}

const fn default_persistable() -> bool {
    true
}

impl PropertyDef {
    fn into_descriptor(self, entity: &str) -> Result<PropertyDescriptor, Error> {
        let Self {
            name,
            kind,
            ty,
            cardinality,
            persistable,
        } = self;

        let require_type = |what: &str| {
            ty.clone().ok_or_else(|| {
                Error::invalid_argument(format!(
                    "property '{entity}.{name}' of kind '{kind}' needs a {what} `type`"
                ))
            })
        };

        let kind = match kind.as_str() {
            "scalar" => PropertyKind::Scalar(require_type("scalar")?.parse()?),
            "enum" => PropertyKind::Enum {
                name: require_type("enum")?,
            },
            "relation" => PropertyKind::Relation {
                cardinality,
                target: RawName::new(require_type("target")?)?,
                persistable,
            },
            other => {
                return Err(Error::UnsupportedKind(format!(
                    "'{other}' on property '{entity}.{name}'"
                )));
            }
        };

        Ok(PropertyDescriptor::new(name, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MetadataProvider;

    const ORDER_TOML: &str = r#"
        [[entity]]
        name = "Order"

        [[entity.property]]
        name = "amount"
        kind = "scalar"
        type = "BigDecimal"

        [[entity.property]]
        name = "status"
        kind = "enum"
        type = "OrderStatus"

        [[entity.property]]
        name = "items"
        kind = "relation"
        type = "OrderLine"
        cardinality = "many"

        [[entity.property]]
        name = "shipping"
        kind = "relation"
        type = "Address"
        persistable = false
    "#;

    #[test]
    fn toml_document_builds_descriptors() {
        let registry = MetadataRegistry::from_toml(ORDER_TOML).unwrap();
        let order = registry.entity("Order").unwrap();

        assert_eq!(order.properties.len(), 4);
        assert_eq!(
            order.get("amount").unwrap().kind,
            PropertyKind::Scalar(Scalar::BigDecimal)
        );
        assert_eq!(order.get("items").unwrap().cardinality(), Cardinality::Many);
        assert!(matches!(
            order.get("shipping").unwrap().kind,
            PropertyKind::Relation {
                persistable: false,
                cardinality: Cardinality::One,
                ..
            }
        ));
    }

    #[test]
    fn json_document_accepts_plural_keys() {
        let src = r#"{
            "entities": [
                {
                    "name": "Customer",
                    "properties": [
                        { "name": "id", "kind": "scalar", "type": "UUID" },
                        { "name": "name", "kind": "scalar", "type": "String" }
                    ]
                }
            ]
        }"#;

        let registry = MetadataRegistry::from_json(src).unwrap();
        let customer = registry.entity("Customer").unwrap();

        assert_eq!(
            customer.get("id").unwrap().kind,
            PropertyKind::Scalar(Scalar::Uuid)
        );
    }

    #[test]
    fn unknown_kind_is_unsupported() {
        let src = r#"
            [[entity]]
            name = "Order"

            [[entity.property]]
            name = "meta"
            kind = "embedded"
            type = "Meta"
        "#;

        let err = MetadataRegistry::from_toml(src).unwrap_err();
        assert!(matches!(err, Error::UnsupportedKind(ref msg) if msg.contains("embedded")));
    }

    #[test]
    fn missing_type_is_invalid() {
        let src = r#"{ "entity": [ { "name": "Order", "property": [ { "name": "amount", "kind": "scalar" } ] } ] }"#;

        let err = MetadataRegistry::from_json(src).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn unknown_scalar_is_reported() {
        let src = r#"{ "entity": [ { "name": "Order", "property": [ { "name": "amount", "kind": "scalar", "type": "Money" } ] } ] }"#;

        let err = MetadataRegistry::from_json(src).unwrap_err();
        assert!(matches!(err, Error::UnknownScalar(ref s) if s == "Money"));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = MetadataRegistry::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
