use crate::{
    BuildError, FilterTypesBuilder, SortOrder,
    input::{EnumType, InputObjectType},
};
use filtergen_schema::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

///
/// SchemaSink
///
/// Consumer that registers derived definitions into a wider schema.
///

pub trait SchemaSink {
    fn register_input(&mut self, ty: InputObjectType) -> Result<(), BuildError>;

    fn register_enum(&mut self, ty: EnumType) -> Result<(), BuildError>;
}

///
/// SchemaType
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaType {
    Enum(EnumType),
    Input(InputObjectType),
}

impl SchemaType {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(ty) => &ty.name,
            Self::Input(ty) => &ty.name,
        }
    }
}

///
/// FilterSchema
///
/// Every derived type keyed by name, plus the externally defined scalars
/// that field types may reference.
///

#[derive(Clone, Debug, Serialize)]
pub struct FilterSchema {
    types: BTreeMap<String, SchemaType>,

    #[serde(skip)]
    scalars: BTreeSet<String>,
}

impl Default for FilterSchema {
    fn default() -> Self {
        Self {
            types: BTreeMap::new(),
            scalars: Scalar::ALL.iter().map(|s| s.name().to_string()).collect(),
        }
    }
}

impl FilterSchema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive every type for `provider`, register them, and check that all
    /// references resolve.
    pub fn assemble<P, N>(provider: &P, builder: &FilterTypesBuilder<N>) -> Result<Self, BuildError>
    where
        P: MetadataProvider,
        N: NameNormalizer,
    {
        let mut schema = Self::new();
        schema.register_scalar(&builder.options().enum_value_type);

        assemble_into(provider, builder, &mut schema)?;
        schema.resolve()?;

        Ok(schema)
    }

    /// Declare an externally defined scalar as resolvable.
    pub fn register_scalar(&mut self, name: impl Into<String>) {
        self.scalars.insert(name.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchemaType> {
        self.types.get(name)
    }

    #[must_use]
    pub fn input(&self, name: &str) -> Option<&InputObjectType> {
        match self.types.get(name)? {
            SchemaType::Input(ty) => Some(ty),
            SchemaType::Enum(_) => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaType> {
        self.types.values()
    }

    /// Check every input field type against registered types and scalars.
    pub fn resolve(&self) -> Result<(), BuildError> {
        for ty in self.types.values() {
            let SchemaType::Input(input) = ty else {
                continue;
            };
            for field in &input.fields {
                let target = field.ty.name();
                if !self.types.contains_key(target) && !self.scalars.contains(target) {
                    return Err(BuildError::UnresolvedType {
                        owner: input.name.clone(),
                        field: field.name.clone(),
                        ty: target.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    fn insert(&mut self, ty: SchemaType) -> Result<(), BuildError> {
        let name = ty.name().to_string();
        if self.types.contains_key(&name) {
            return Err(BuildError::DuplicateType(name));
        }

        debug!(type_name = %name, "registered schema type");
        self.types.insert(name, ty);

        Ok(())
    }
}

impl SchemaSink for FilterSchema {
    fn register_input(&mut self, ty: InputObjectType) -> Result<(), BuildError> {
        self.insert(SchemaType::Input(ty))
    }

    fn register_enum(&mut self, ty: EnumType) -> Result<(), BuildError> {
        self.insert(SchemaType::Enum(ty))
    }
}

/// Derive the sort-order enum, one condition type per referenced scalar,
/// and the condition and order-by types of every entity, feeding each into
/// `sink`. References are not checked here.
pub fn assemble_into<P, N, S>(
    provider: &P,
    builder: &FilterTypesBuilder<N>,
    sink: &mut S,
) -> Result<(), BuildError>
where
    P: MetadataProvider,
    N: NameNormalizer,
    S: SchemaSink + ?Sized,
{
    let options = builder.options();
    sink.register_enum(SortOrder::enum_type(
        &options.sort_order_type,
        options.descriptions,
    ))?;

    let scalars: BTreeSet<Scalar> = provider.entities().flat_map(|e| e.scalars()).collect();
    for scalar in &scalars {
        sink.register_input(builder.derive_scalar(*scalar).into())?;
    }

    let mut entities = 0usize;
    for entity in provider.entities() {
        sink.register_input(builder.derive_entity_condition_type(entity).into())?;
        sink.register_input(builder.derive_order_by_type(entity).into())?;
        entities += 1;
    }

    info!(entities, scalars = scalars.len(), "assembled filter schema");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeRef;

    fn raw(name: &str) -> RawName {
        RawName::new(name).unwrap()
    }

    fn registry() -> MetadataRegistry {
        MetadataRegistry::new()
            .with_entity(
                EntityDescriptor::named("Order")
                    .unwrap()
                    .with_property(PropertyDescriptor::scalar("amount", Scalar::BigDecimal))
                    .with_property(PropertyDescriptor::scalar("number", Scalar::String))
                    .with_property(PropertyDescriptor::enumeration("status", "OrderStatus"))
                    .with_property(PropertyDescriptor::to_many("items", raw("OrderLine")))
                    .with_property(PropertyDescriptor::to_one("customer", raw("Customer"))),
            )
            .unwrap()
            .with_entity(
                EntityDescriptor::named("Customer")
                    .unwrap()
                    .with_property(PropertyDescriptor::scalar("name", Scalar::String))
                    .with_property(PropertyDescriptor::embedded("address", raw("Address"))),
            )
            .unwrap()
            .with_entity(
                EntityDescriptor::named("Address")
                    .unwrap()
                    .with_property(PropertyDescriptor::scalar("city", Scalar::String)),
            )
            .unwrap()
            .with_entity(
                EntityDescriptor::named("OrderLine")
                    .unwrap()
                    .with_property(PropertyDescriptor::scalar("quantity", Scalar::Int))
                    .with_property(PropertyDescriptor::to_one("order", raw("Order"))),
            )
            .unwrap()
    }

    #[test]
    fn assembles_every_type() {
        let schema = FilterSchema::assemble(&registry(), &FilterTypesBuilder::default()).unwrap();

        // SortOrder + 3 scalars + 4 entities * 2
        assert_eq!(schema.len(), 12);
        for name in [
            "SortOrder",
            "inp_BigDecimalFilterCondition",
            "inp_StringFilterCondition",
            "inp_IntFilterCondition",
            "inp_OrderFilterCondition",
            "inp_OrderOrderBy",
            "inp_CustomerFilterCondition",
            "inp_AddressOrderBy",
        ] {
            assert!(schema.get(name).is_some(), "missing {name}");
        }
        assert!(matches!(schema.get("SortOrder"), Some(SchemaType::Enum(_))));
        assert!(schema.input("SortOrder").is_none());
    }

    #[test]
    fn unused_scalars_are_not_generated() {
        let schema = FilterSchema::assemble(&registry(), &FilterTypesBuilder::default()).unwrap();

        assert!(schema.get("inp_LongFilterCondition").is_none());
    }

    #[test]
    fn dangling_relation_is_unresolved() {
        let registry = MetadataRegistry::new()
            .with_entity(
                EntityDescriptor::named("Order")
                    .unwrap()
                    .with_property(PropertyDescriptor::to_one("customer", raw("Customer"))),
            )
            .unwrap();

        let err = FilterSchema::assemble(&registry, &FilterTypesBuilder::default()).unwrap_err();
        assert!(matches!(
            err,
            BuildError::UnresolvedType { ref owner, ref field, ref ty }
                if owner == "inp_OrderFilterCondition"
                    && field == "customer"
                    && ty == "inp_CustomerFilterCondition"
        ));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut schema = FilterSchema::new();
        schema
            .register_input(InputObjectType::new("inp_OrderFilterCondition"))
            .unwrap();

        let err = schema
            .register_input(InputObjectType::new("inp_OrderFilterCondition"))
            .unwrap_err();
        assert!(matches!(err, BuildError::DuplicateType(ref n) if n == "inp_OrderFilterCondition"));
    }

    #[test]
    fn normalized_name_collisions_are_duplicates() {
        // `a$b` and `a_b` normalize to the same base name
        let registry = MetadataRegistry::new()
            .with_entity(EntityDescriptor::named("a$b").unwrap())
            .unwrap()
            .with_entity(EntityDescriptor::named("a_b").unwrap())
            .unwrap();

        let err = FilterSchema::assemble(&registry, &FilterTypesBuilder::default()).unwrap_err();
        assert!(matches!(err, BuildError::DuplicateType(ref n) if n == "inp_a_bFilterCondition"));
    }

    #[test]
    fn registered_scalars_resolve() {
        let mut schema = FilterSchema::new();
        let mut ty = InputObjectType::new("inp_ThingFilterCondition");
        ty.fields.push(crate::InputField::list("tags", "Tag"));
        schema.register_input(ty).unwrap();

        assert!(schema.resolve().is_err());
        schema.register_scalar("Tag");
        assert!(schema.resolve().is_ok());
    }

    #[test]
    fn custom_sink_receives_everything() {
        #[derive(Default)]
        struct Names(Vec<String>);

        impl SchemaSink for Names {
            fn register_input(&mut self, ty: InputObjectType) -> Result<(), BuildError> {
                self.0.push(ty.name);
                Ok(())
            }

            fn register_enum(&mut self, ty: EnumType) -> Result<(), BuildError> {
                self.0.push(ty.name);
                Ok(())
            }
        }

        let mut sink = Names::default();
        assemble_into(&registry(), &FilterTypesBuilder::default(), &mut sink).unwrap();

        assert_eq!(sink.0.first().map(String::as_str), Some("SortOrder"));
        assert_eq!(sink.0.len(), 12);
    }

    #[test]
    fn order_by_targets_resolve_to_order_by_types() {
        let schema = FilterSchema::assemble(&registry(), &FilterTypesBuilder::default()).unwrap();
        let order_by = schema.input("inp_OrderOrderBy").unwrap();

        assert_eq!(
            order_by.field("customer").unwrap().ty,
            TypeRef::named("inp_CustomerOrderBy")
        );
        assert!(schema.input("inp_CustomerOrderBy").unwrap().field("address").is_none());
    }

    #[test]
    fn schema_serializes_with_kind_tags() {
        let registry = MetadataRegistry::new()
            .with_entity(
                EntityDescriptor::named("Tag")
                    .unwrap()
                    .with_property(PropertyDescriptor::scalar("label", Scalar::String)),
            )
            .unwrap();
        let schema = FilterSchema::assemble(&registry, &FilterTypesBuilder::default()).unwrap();
        let json = serde_json::to_value(&schema).unwrap();

        assert!(json.get("scalars").is_none());

        let sort = &json["types"]["SortOrder"];
        assert_eq!(sort["kind"], "enum");
        assert_eq!(sort["values"][1]["name"], "DESC");
        assert_eq!(sort["values"][1]["description"], "descending");

        let filter = &json["types"]["inp_TagFilterCondition"];
        assert_eq!(filter["kind"], "input");
        assert!(filter.get("description").is_none());
        assert_eq!(filter["fields"][0]["name"], "label");
        assert_eq!(
            filter["fields"][0]["ty"],
            serde_json::json!({ "list": "inp_StringFilterCondition" })
        );

        let order_by = &json["types"]["inp_TagOrderBy"];
        assert_eq!(
            order_by["fields"][0]["ty"],
            serde_json::json!({ "named": "SortOrder" })
        );
    }
}
