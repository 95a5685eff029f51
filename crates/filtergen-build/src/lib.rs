//! Filter-condition and order-by input type derivation.
//!
//! [`FilterTypesBuilder`] maps entity metadata to input-type descriptions;
//! [`FilterSchema`] collects them, checks that every cross-type reference
//! resolves, and renders GraphQL SDL.

mod builder;
mod input;
mod operator;
mod schema;
mod sdl;
mod sort;
mod union;

pub use builder::{BuildOptions, FilterTypesBuilder, order_by_target_supported, relation_filterable};
pub use input::{
    EnumType, EnumValue, FilterConditionType, InputField, InputObjectType, OrderByType, TypeRef,
};
pub use operator::ComparisonOperator;
pub use schema::{FilterSchema, SchemaSink, SchemaType, assemble_into};
pub use sort::SortOrder;
pub use union::ConditionUnion;

use thiserror::Error as ThisError;

///
/// BuildError
///

#[derive(Debug, ThisError)]
pub enum BuildError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("duplicate schema type '{0}'")]
    DuplicateType(String),

    #[error("type '{owner}' field '{field}' references unknown type '{ty}'")]
    UnresolvedType {
        owner: String,
        field: String,
        ty: String,
    },

    #[error(transparent)]
    Schema(#[from] filtergen_schema::Error),
}
