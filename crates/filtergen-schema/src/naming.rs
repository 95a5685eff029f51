//! Type-name derivation.
//!
//! Names come in three states and each state has its own type:
//! - [`RawName`]: as supplied by the metadata provider.
//! - [`NormalizedName`]: passed through a [`NameNormalizer`] exactly once.
//! - [`FilterTypeName`]: a normalized base plus a [`TypeSuffix`].
//!
//! Normalization only ever applies to a `RawName`, so composing a name that
//! has already been normalized (or already composed) cannot double-prefix.

use crate::{Error, types::Scalar};
use derive_more::Display;
use serde::Serialize;

///
/// RawName
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct RawName(String);

impl RawName {
    /// Wrap a provider-supplied name. Blank names are rejected.
    pub fn new(name: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::invalid_argument("name must not be empty"));
        }

        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Scalar> for RawName {
    fn from(scalar: Scalar) -> Self {
        Self(scalar.name().to_string())
    }
}

///
/// NormalizedName
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct NormalizedName(String);

impl NormalizedName {
    /// Construct from the output of a normalizer. Intended for
    /// [`NameNormalizer`] implementations only.
    #[must_use]
    pub fn from_normalized(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<FilterTypeName> for NormalizedName {
    fn from(name: FilterTypeName) -> Self {
        name.base
    }
}

///
/// NameNormalizer
///
/// Maps a raw entity or scalar name to its canonical schema form.
///

pub trait NameNormalizer {
    fn normalize(&self, raw: &RawName) -> NormalizedName;
}

impl<N: NameNormalizer + ?Sized> NameNormalizer for &N {
    fn normalize(&self, raw: &RawName) -> NormalizedName {
        (**self).normalize(raw)
    }
}

///
/// PrefixNormalizer
///
/// Prepends a fixed prefix and flattens namespace separators, so
/// `scr$Car` becomes `inp_scr_Car`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrefixNormalizer {
    prefix: String,
    separator: char,
}

impl PrefixNormalizer {
    pub const DEFAULT_PREFIX: &'static str = "inp_";
    pub const DEFAULT_SEPARATOR: char = '$';

    pub fn new(prefix: impl Into<String>, separator: char) -> Result<Self, Error> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(Error::invalid_argument("normalizer prefix must not be empty"));
        }

        Ok(Self { prefix, separator })
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for PrefixNormalizer {
    fn default() -> Self {
        Self {
            prefix: Self::DEFAULT_PREFIX.to_string(),
            separator: Self::DEFAULT_SEPARATOR,
        }
    }
}

impl NameNormalizer for PrefixNormalizer {
    fn normalize(&self, raw: &RawName) -> NormalizedName {
        let body = raw.as_str().replace(self.separator, "_");

        NormalizedName(format!("{}{body}", self.prefix))
    }
}

///
/// TypeSuffix
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum TypeSuffix {
    FilterCondition,
    OrderBy,
}

///
/// FilterTypeName
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[display("{base}{suffix}")]
pub struct FilterTypeName {
    base: NormalizedName,
    suffix: TypeSuffix,
}

impl FilterTypeName {
    #[must_use]
    pub const fn base(&self) -> &NormalizedName {
        &self.base
    }

    #[must_use]
    pub const fn suffix(&self) -> TypeSuffix {
        self.suffix
    }
}

///
/// IntoNormalized
///
/// Anything that can supply a normalized base for type-name composition.
///

pub trait IntoNormalized {
    fn into_normalized<N: NameNormalizer + ?Sized>(self, normalizer: &N) -> NormalizedName;
}

impl IntoNormalized for RawName {
    fn into_normalized<N: NameNormalizer + ?Sized>(self, normalizer: &N) -> NormalizedName {
        normalizer.normalize(&self)
    }
}

impl IntoNormalized for &RawName {
    fn into_normalized<N: NameNormalizer + ?Sized>(self, normalizer: &N) -> NormalizedName {
        normalizer.normalize(self)
    }
}

impl IntoNormalized for NormalizedName {
    fn into_normalized<N: NameNormalizer + ?Sized>(self, _: &N) -> NormalizedName {
        self
    }
}

impl IntoNormalized for &NormalizedName {
    fn into_normalized<N: NameNormalizer + ?Sized>(self, _: &N) -> NormalizedName {
        self.clone()
    }
}

impl IntoNormalized for FilterTypeName {
    fn into_normalized<N: NameNormalizer + ?Sized>(self, _: &N) -> NormalizedName {
        self.base
    }
}

impl IntoNormalized for &FilterTypeName {
    fn into_normalized<N: NameNormalizer + ?Sized>(self, _: &N) -> NormalizedName {
        self.base.clone()
    }
}

impl IntoNormalized for Scalar {
    fn into_normalized<N: NameNormalizer + ?Sized>(self, normalizer: &N) -> NormalizedName {
        normalizer.normalize(&RawName::from(self))
    }
}

/// Compose the schema type name for `name` with `suffix`.
pub fn compose_filter_type_name<N: NameNormalizer + ?Sized>(
    name: impl IntoNormalized,
    suffix: TypeSuffix,
    normalizer: &N,
) -> FilterTypeName {
    FilterTypeName {
        base: name.into_normalized(normalizer),
        suffix,
    }
}
