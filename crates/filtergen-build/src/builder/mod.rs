
use crate::{
    BuildError, ComparisonOperator, ConditionUnion,
    input::{FilterConditionType, InputField, InputObjectType, OrderByType},
};
use filtergen_schema::{prelude::*, validate::naming::is_graphql_name};
use tracing::{debug, trace};

///
/// BuildOptions
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BuildOptions {
    /// Enum type carried by order-by fields.
    pub sort_order_type: String,
    /// Element type of enum-valued fields.
    pub enum_value_type: String,
    /// Emit type and field descriptions.
    pub descriptions: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            sort_order_type: "SortOrder".to_string(),
            enum_value_type: "String".to_string(),
            descriptions: true,
        }
    }
}

/// To-many relations cannot be filtered or ordered on yet.
#[must_use]
pub const fn relation_filterable(cardinality: Cardinality) -> bool {
    !cardinality.is_many()
}

/// Order-by only follows relations into persistent entities.
#[must_use]
pub const fn order_by_target_supported(persistable: bool) -> bool {
    persistable
}

///
/// FilterTypesBuilder
///
/// Derives filter-condition and order-by input types from entity metadata.
/// Referenced types (scalars, relation targets) are named, never built
/// inline; each has to be derived by its own call.
///

#[derive(Clone, Debug)]
pub struct FilterTypesBuilder<N = PrefixNormalizer> {
    normalizer: N,
    options: BuildOptions,
}

// concrete so `FilterTypesBuilder::default()` infers the prefix normalizer
impl Default for FilterTypesBuilder<PrefixNormalizer> {
    fn default() -> Self {
        Self::new(PrefixNormalizer::default(), BuildOptions::default())
    }
}

impl<N: NameNormalizer> FilterTypesBuilder<N> {
    #[must_use]
    pub const fn new(normalizer: N, options: BuildOptions) -> Self {
        Self {
            normalizer,
            options,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &BuildOptions {
        &self.options
    }

    #[must_use]
    pub const fn normalizer(&self) -> &N {
        &self.normalizer
    }

    //
    // naming
    //

    pub fn compose_filter_type_name(
        &self,
        name: impl IntoNormalized,
        suffix: TypeSuffix,
    ) -> FilterTypeName {
        compose_filter_type_name(name, suffix, &self.normalizer)
    }

    pub fn filter_condition_type_name(&self, name: impl IntoNormalized) -> FilterTypeName {
        self.compose_filter_type_name(name, TypeSuffix::FilterCondition)
    }

    pub fn order_by_type_name(&self, name: impl IntoNormalized) -> FilterTypeName {
        self.compose_filter_type_name(name, TypeSuffix::OrderBy)
    }

    //
    // scalar conditions
    //

    /// Derive the comparison condition type for a scalar given by name. The
    /// name is used verbatim as the operator field type, so it has to be a
    /// GraphQL name.
    pub fn derive_scalar_condition_type(
        &self,
        scalar_type_name: &str,
    ) -> Result<FilterConditionType, BuildError> {
        let scalar = RawName::new(scalar_type_name).map_err(|_| {
            BuildError::InvalidArgument("scalar type name must not be empty".to_string())
        })?;
        if !is_graphql_name(scalar.as_str(), false) {
            return Err(BuildError::InvalidArgument(format!(
                "scalar type name '{scalar}' is not a GraphQL name"
            )));
        }

        Ok(self.scalar_condition_type(&scalar))
    }

    /// Derive the comparison condition type for a known scalar.
    #[must_use]
    pub fn derive_scalar(&self, scalar: Scalar) -> FilterConditionType {
        self.scalar_condition_type(&RawName::from(scalar))
    }

    fn scalar_condition_type(&self, scalar: &RawName) -> FilterConditionType {
        let name = self.filter_condition_type_name(scalar).to_string();
        let describe = self.options.descriptions;

        let mut ty = InputObjectType::new(&name);
        if describe {
            ty.description = Some(format!(
                "expression to compare columns of type {scalar}. All fields are combined with logical 'AND'"
            ));
        }
        ty.fields.extend(
            ComparisonOperator::ALL
                .into_iter()
                .map(|op| op.field(scalar.as_str(), describe)),
        );
        push_unions(&mut ty);

        debug!(type_name = %name, fields = ty.fields.len(), "derived scalar filter condition type");
        FilterConditionType(ty)
    }

    //
    // entity conditions
    //

    /// Derive `<Entity>FilterCondition`.
    #[must_use]
    pub fn derive_entity_condition_type(&self, entity: &EntityDescriptor) -> FilterConditionType {
        let name = self.filter_condition_type_name(&entity.name).to_string();

        let mut ty = InputObjectType::new(&name);
        ty.fields.extend(
            entity
                .properties
                .iter()
                .filter_map(|prop| self.condition_field(entity, prop)),
        );
        push_unions(&mut ty);

        debug!(type_name = %name, fields = ty.fields.len(), "derived entity filter condition type");
        FilterConditionType(ty)
    }

    fn condition_field(
        &self,
        entity: &EntityDescriptor,
        prop: &PropertyDescriptor,
    ) -> Option<InputField> {
        let ty = match &prop.kind {
            PropertyKind::Enum { .. } => self.options.enum_value_type.clone(),
            PropertyKind::Relation { cardinality, .. } if !relation_filterable(*cardinality) => {
                trace!(entity = %entity.name, property = %prop.name, "skipping to-many relation");
                return None;
            }
            PropertyKind::Scalar(scalar) => self.filter_condition_type_name(*scalar).to_string(),
            PropertyKind::Relation { target, .. } => {
                self.filter_condition_type_name(target).to_string()
            }
        };

        Some(InputField::list(&prop.name, ty))
    }

    //
    // order by
    //

    /// Derive `<Entity>OrderBy`.
    #[must_use]
    pub fn derive_order_by_type(&self, entity: &EntityDescriptor) -> OrderByType {
        let name = self.order_by_type_name(&entity.name).to_string();

        let mut ty = InputObjectType::new(&name);
        ty.fields.extend(
            entity
                .properties
                .iter()
                .filter_map(|prop| self.order_by_field(entity, prop)),
        );

        debug!(type_name = %name, fields = ty.fields.len(), "derived order-by type");
        OrderByType(ty)
    }

    // string-like and plain datatype scalars both sort by direction today
    #[allow(clippy::match_same_arms)]
    fn order_by_field(
        &self,
        entity: &EntityDescriptor,
        prop: &PropertyDescriptor,
    ) -> Option<InputField> {
        let sort_order = &self.options.sort_order_type;

        match &prop.kind {
            PropertyKind::Enum { .. } => Some(InputField::list(
                &prop.name,
                &self.options.enum_value_type,
            )),
            PropertyKind::Relation { cardinality, .. } if !relation_filterable(*cardinality) => {
                trace!(entity = %entity.name, property = %prop.name, "skipping to-many relation");
                None
            }
            PropertyKind::Scalar(scalar) if scalar.is_string_like() => {
                Some(InputField::value(&prop.name, sort_order))
            }
            PropertyKind::Relation {
                target,
                persistable,
                ..
            } => {
                if order_by_target_supported(*persistable) {
                    let target = self.order_by_type_name(target).to_string();
                    Some(InputField::value(&prop.name, target))
                } else {
                    trace!(
                        entity = %entity.name,
                        property = %prop.name,
                        "skipping relation to non-persistent type"
                    );
                    None
                }
            }
            // datatype attributes
            PropertyKind::Scalar(_) => Some(InputField::value(&prop.name, sort_order)),
        }
    }
}

// AND/OR fields referencing the type itself
fn push_unions(ty: &mut InputObjectType) {
    let fields: Vec<_> = ConditionUnion::ALL
        .into_iter()
        .map(|u| u.field(&ty.name))
        .collect();

    ty.fields.extend(fields);
}
