//! Entity metadata consumed by the filter-schema deriver.
//!
//! ## Crate layout
//! - `node`: entity and property descriptors.
//! - `types`: closed scalar and cardinality enumerations.
//! - `naming`: raw vs normalized names and the normalizer seam.
//! - `provider`: the metadata provider trait and an in-memory registry.
//! - `validate`: route-aware validation of registered metadata.

pub mod error;
pub mod naming;
pub mod node;
pub mod provider;
pub mod types;
pub mod validate;

/// Maximum length for entity identifiers.
pub const MAX_ENTITY_NAME_LEN: usize = 128;

/// Maximum length for property identifiers.
pub const MAX_PROPERTY_NAME_LEN: usize = 64;

use crate::error::ErrorTree;
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error, err,
        error::ErrorTree,
        naming::{
            FilterTypeName, IntoNormalized, NameNormalizer, NormalizedName, PrefixNormalizer,
            RawName, TypeSuffix, compose_filter_type_name,
        },
        node::*,
        provider::{MetadataProvider, MetadataRegistry},
        types::{Cardinality, Scalar},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unsupported property kind: {0}")]
    UnsupportedKind(String),

    #[error("unknown scalar type '{0}'")]
    UnknownScalar(String),

    #[error("duplicate entity '{0}'")]
    DuplicateEntity(String),

    #[error("metadata validation failed:\n{0}")]
    Validation(ErrorTree),

    #[error("metadata parse error: {0}")]
    Parse(String),
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
