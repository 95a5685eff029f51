//! GraphQL SDL rendering.
//!
//! Derived types are lowered into the `graphql-parser` schema AST and printed
//! with its formatter. Descriptions render as GraphQL string descriptions.

use crate::{
    FilterSchema, SchemaType,
    input::{EnumType, InputField, InputObjectType, TypeRef},
};
use graphql_parser::{
    Pos,
    schema::{self as ast, Definition, Document, TypeDefinition},
};
use std::fmt;

impl TypeRef {
    #[must_use]
    pub fn to_ast(&self) -> ast::Type<'static, String> {
        match self {
            Self::Named(name) => ast::Type::NamedType(name.clone()),
            Self::List(name) => ast::Type::ListType(Box::new(ast::Type::NamedType(name.clone()))),
        }
    }
}

impl InputField {
    #[must_use]
    pub fn to_ast(&self) -> ast::InputValue<'static, String> {
        ast::InputValue {
            position: Pos::default(),
            description: self.description.clone(),
            name: self.name.clone(),
            value_type: self.ty.to_ast(),
            default_value: None,
            directives: Vec::new(),
        }
    }
}

impl InputObjectType {
    #[must_use]
    pub fn to_ast(&self) -> ast::InputObjectType<'static, String> {
        let mut ty = ast::InputObjectType::new(self.name.clone());
        ty.description.clone_from(&self.description);
        ty.fields = self.fields.iter().map(InputField::to_ast).collect();

        ty
    }
}

impl EnumType {
    #[must_use]
    pub fn to_ast(&self) -> ast::EnumType<'static, String> {
        let mut ty = ast::EnumType::new(self.name.clone());
        ty.values = self
            .values
            .iter()
            .map(|v| {
                let mut value = ast::EnumValue::new(v.name.clone());
                value.description.clone_from(&v.description);
                value
            })
            .collect();

        ty
    }
}

impl SchemaType {
    #[must_use]
    pub fn to_ast(&self) -> TypeDefinition<'static, String> {
        match self {
            Self::Enum(ty) => TypeDefinition::Enum(ty.to_ast()),
            Self::Input(ty) => TypeDefinition::InputObject(ty.to_ast()),
        }
    }
}

impl FilterSchema {
    /// Schema document holding every registered type, ordered by name.
    #[must_use]
    pub fn to_document(&self) -> Document<'static, String> {
        Document {
            definitions: self
                .iter()
                .map(|ty| Definition::TypeDefinition(ty.to_ast()))
                .collect(),
        }
    }

    #[must_use]
    pub fn to_sdl(&self) -> String {
        self.to_document().to_string()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_ast(), f)
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_ast(), f)
    }
}

impl fmt::Display for InputObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_ast(), f)
    }
}

impl fmt::Display for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_ast(), f)
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_ast(), f)
    }
}

impl fmt::Display for FilterSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_document(), f)
    }
}
