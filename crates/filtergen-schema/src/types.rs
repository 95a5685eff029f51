use crate::{Error, prelude::*};
use derive_more::Display;
use std::str::FromStr;

///
/// Cardinality
///

#[derive(
    Clone, Copy, Default, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    #[default]
    One,
    Many,
}

impl Cardinality {
    #[must_use]
    pub const fn is_many(self) -> bool {
        matches!(self, Self::Many)
    }
}

///
/// Scalar
///
/// Datatype attributes the schema exposes as GraphQL scalars. The display
/// form is the scalar's GraphQL type name.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[remain::sorted]
pub enum Scalar {
    BigDecimal,
    BigInteger,
    Boolean,
    Byte,
    Char,
    Date,
    DateTime,
    Float,
    Int,
    LocalDate,
    LocalDateTime,
    LocalTime,
    Long,
    OffsetDateTime,
    OffsetTime,
    Short,
    String,
    Time,
    #[display("UUID")]
    #[serde(rename = "UUID")]
    Uuid,
    Void,
}

impl Scalar {
    pub const ALL: [Self; 20] = [
        Self::BigDecimal,
        Self::BigInteger,
        Self::Boolean,
        Self::Byte,
        Self::Char,
        Self::Date,
        Self::DateTime,
        Self::Float,
        Self::Int,
        Self::LocalDate,
        Self::LocalDateTime,
        Self::LocalTime,
        Self::Long,
        Self::OffsetDateTime,
        Self::OffsetTime,
        Self::Short,
        Self::String,
        Self::Time,
        Self::Uuid,
        Self::Void,
    ];

    /// GraphQL type name of the scalar.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BigDecimal => "BigDecimal",
            Self::BigInteger => "BigInteger",
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Char => "Char",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::LocalDate => "LocalDate",
            Self::LocalDateTime => "LocalDateTime",
            Self::LocalTime => "LocalTime",
            Self::Long => "Long",
            Self::OffsetDateTime => "OffsetDateTime",
            Self::OffsetTime => "OffsetTime",
            Self::Short => "Short",
            Self::String => "String",
            Self::Time => "Time",
            Self::Uuid => "UUID",
            Self::Void => "Void",
        }
    }

    // only String sorts as text; everything else is a plain datatype
    #[must_use]
    pub const fn is_string_like(self) -> bool {
        matches!(self, Self::String)
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl FromStr for Scalar {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| Error::UnknownScalar(s.to_string()))
    }
}
