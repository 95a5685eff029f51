//! ## Crate layout
//! - `schema`: entity metadata, naming, providers, and validation.
//! - `build`: filter-condition and order-by derivation, assembly, SDL.
//! - `config`: `filtergen.toml` loading.
//!
//! [`generate`] runs the whole pipeline: validate metadata, configure the
//! builder, assemble the schema.

pub use filtergen_build as build;
pub use filtergen_config as config;
pub use filtergen_schema as schema;

use crate::{
    build::{BuildError, FilterSchema, FilterTypesBuilder},
    config::{Config, ConfigError},
    schema::provider::MetadataRegistry,
};
use thiserror::Error as ThisError;
use tracing::info;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        build::{
            BuildOptions, ComparisonOperator, ConditionUnion, EnumType, FilterConditionType,
            FilterSchema, FilterTypesBuilder, InputField, InputObjectType, OrderByType,
            SchemaSink, SchemaType, SortOrder, TypeRef,
        },
        config::Config,
        generate,
    };
    pub use filtergen_schema::prelude::*;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] filtergen_schema::Error),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Validate `config` and `registry`, then derive and assemble its filter schema with the
/// naming and type conventions of `config`.
pub fn generate(registry: &MetadataRegistry, config: &Config) -> Result<FilterSchema, Error> {
    config.validate()?;
    registry.validate()?;

    let builder = FilterTypesBuilder::new(config.normalizer()?, config.build_options());
    let schema = FilterSchema::assemble(registry, &builder)?;

    info!(
        entities = registry.len(),
        types = schema.len(),
        "generated filter schema"
    );

    Ok(schema)
}
