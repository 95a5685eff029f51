use derive_more::{Deref, Into};
use serde::Serialize;

///
/// TypeRef
/// Input field type: a named type or a list of one.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    Named(String),
    List(String),
}

impl TypeRef {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    #[must_use]
    pub fn list(name: impl Into<String>) -> Self {
        Self::List(name.into())
    }

    /// The referenced type name, without list wrapping.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Named(name) | Self::List(name) => name,
        }
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

///
/// InputField
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct InputField {
    pub name: String,
    pub ty: TypeRef,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl InputField {
    #[must_use]
    pub fn value(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: TypeRef::named(ty),
            description: None,
        }
    }

    #[must_use]
    pub fn list(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: TypeRef::list(ty),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

///
/// InputObjectType
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct InputObjectType {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub fields: Vec<InputField>,
}

impl InputObjectType {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&InputField> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

///
/// FilterConditionType
/// Input type whose fields are comparison operators or nested conditions.
///

#[derive(Clone, Debug, Deref, Eq, Into, PartialEq, Serialize)]
pub struct FilterConditionType(pub(crate) InputObjectType);

///
/// OrderByType
/// Input type whose fields carry sort directions.
///

#[derive(Clone, Debug, Deref, Eq, Into, PartialEq, Serialize)]
pub struct OrderByType(pub(crate) InputObjectType);

///
/// EnumType
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EnumType {
    pub name: String,
    pub values: Vec<EnumValue>,
}

///
/// EnumValue
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EnumValue {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
