use crate::prelude::*;

///
/// PropertyKind
///
/// Closed classification of an entity property. Only relations carry a
/// cardinality; scalar and enum attributes are always single-valued.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Scalar(Scalar),
    Enum {
        name: String,
    },
    Relation {
        cardinality: Cardinality,
        target: RawName,
        persistable: bool,
    },
}

impl PropertyKind {
    #[must_use]
    pub const fn cardinality(&self) -> Cardinality {
        match self {
            Self::Relation { cardinality, .. } => *cardinality,
            Self::Scalar(_) | Self::Enum { .. } => Cardinality::One,
        }
    }

    /// Short tag used in diagnostics and metadata documents.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Enum { .. } => "enum",
            Self::Relation { .. } => "relation",
        }
    }
}

///
/// PropertyDescriptor
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PropertyDescriptor {
    pub name: String,
    pub kind: PropertyKind,
}

impl PropertyDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    #[must_use]
    pub fn scalar(name: impl Into<String>, scalar: Scalar) -> Self {
        Self::new(name, PropertyKind::Scalar(scalar))
    }

    #[must_use]
    pub fn enumeration(name: impl Into<String>, enum_name: impl Into<String>) -> Self {
        Self::new(
            name,
            PropertyKind::Enum {
                name: enum_name.into(),
            },
        )
    }

    #[must_use]
    pub fn relation(
        name: impl Into<String>,
        cardinality: Cardinality,
        target: RawName,
        persistable: bool,
    ) -> Self {
        Self::new(
            name,
            PropertyKind::Relation {
                cardinality,
                target,
                persistable,
            },
        )
    }

    /// Single-valued reference to a persistent entity.
    #[must_use]
    pub fn to_one(name: impl Into<String>, target: RawName) -> Self {
        Self::relation(name, Cardinality::One, target, true)
    }

    /// Collection reference to a persistent entity.
    #[must_use]
    pub fn to_many(name: impl Into<String>, target: RawName) -> Self {
        Self::relation(name, Cardinality::Many, target, true)
    }

    /// Single-valued reference to a non-persistent (embedded/transient) type.
    #[must_use]
    pub fn embedded(name: impl Into<String>, target: RawName) -> Self {
        Self::relation(name, Cardinality::One, target, false)
    }

    #[must_use]
    pub const fn cardinality(&self) -> Cardinality {
        self.kind.cardinality()
    }
}
