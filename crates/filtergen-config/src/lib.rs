//! `filtergen.toml` loading.
//!
//! ```toml
//! [naming]
//! prefix = "inp_"
//! namespace_separator = "$"
//!
//! [types]
//! sort_order = "SortOrder"
//! enum_value = "String"
//!
//! [output]
//! descriptions = true
//! ```
//!
//! Every key is optional; unknown keys are rejected.

use filtergen_build::BuildOptions;
use filtergen_schema::{
    naming::PrefixNormalizer, types::Scalar, validate::naming::is_graphql_name,
};
use serde::Deserialize;
use std::{fs, path::Path};
use thiserror::Error as ThisError;
use tracing::debug;

/// Conventional config file name.
pub const CONFIG_FILE: &str = "filtergen.toml";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub naming: NamingConfig,
    pub types: TypesConfig,
    pub output: OutputConfig,
}

///
/// NamingConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    pub prefix: String,
    pub namespace_separator: char,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            prefix: PrefixNormalizer::DEFAULT_PREFIX.to_string(),
            namespace_separator: PrefixNormalizer::DEFAULT_SEPARATOR,
        }
    }
}

///
/// TypesConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TypesConfig {
    pub sort_order: String,
    pub enum_value: String,
}

impl Default for TypesConfig {
    fn default() -> Self {
        let options = BuildOptions::default();

        Self {
            sort_order: options.sort_order_type,
            enum_value: options.enum_value_type,
        }
    }
}

///
/// OutputConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub descriptions: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { descriptions: true }
    }
}

impl Config {
    /// Parse and validate config text.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(src)?;
        config.validate()?;

        Ok(config)
    }

    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        debug!(path = %path.display(), "loaded filtergen config");
        Self::from_toml_str(&src)
    }

    /// Load `filtergen.toml` from `dir`, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if path.exists() {
            Self::load(&path)
        } else {
            debug!(path = %path.display(), "no filtergen config found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let prefix = &self.naming.prefix;
        if prefix.is_empty() {
            return Err(ConfigError::Invalid("naming.prefix must not be empty".into()));
        }
        if !is_graphql_name(prefix, false) {
            return Err(ConfigError::Invalid(format!(
                "naming.prefix '{prefix}' is not a valid GraphQL name start"
            )));
        }

        for (key, value) in [
            ("types.sort_order", &self.types.sort_order),
            ("types.enum_value", &self.types.enum_value),
        ] {
            if !is_graphql_name(value, false) {
                return Err(ConfigError::Invalid(format!(
                    "{key} '{value}' is not a valid GraphQL type name"
                )));
            }
        }

        // the sort enum is generated, so it may not take a scalar's name
        let sort_order = &self.types.sort_order;
        if *sort_order == self.types.enum_value || Scalar::from_name(sort_order).is_some() {
            return Err(ConfigError::Invalid(format!(
                "types.sort_order '{sort_order}' collides with a scalar type name"
            )));
        }

        Ok(())
    }

    /// Normalizer described by `[naming]`.
    pub fn normalizer(&self) -> Result<PrefixNormalizer, ConfigError> {
        PrefixNormalizer::new(&self.naming.prefix, self.naming.namespace_separator)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Builder options described by `[types]` and `[output]`.
    #[must_use]
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            sort_order_type: self.types.sort_order.clone(),
            enum_value_type: self.types.enum_value.clone(),
            descriptions: self.output.descriptions,
        }
    }
}
