use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use std::sync::Arc;

/// Represents a defined GraphQL type.
///
/// The five built-in scalars carry no metadata. Every other variant holds
/// its definition behind an [`Arc`], so cloning a `GraphQLType` (which
/// resolution does freely when handing types out of its caches) never
/// copies the definition itself.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLType {
    Bool,
    Enum(Arc<EnumType>),
    Float,
    ID,
    InputObject(Arc<InputObjectType>),
    Int,
    Interface(Arc<InterfaceType>),
    Object(Arc<ObjectType>),
    Scalar(Arc<ScalarType>),
    String,
    Union(Arc<UnionType>),
}
impl GraphQLType {
    /// All built-in scalar types, in name order.
    pub fn builtins() -> [GraphQLType; 5] {
        [
            GraphQLType::Bool,
            GraphQLType::Float,
            GraphQLType::ID,
            GraphQLType::Int,
            GraphQLType::String,
        ]
    }

    /// The built-in scalar type with the given name, if there is one.
    pub fn builtin(name: &str) -> Option<GraphQLType> {
        match name {
            "Boolean" => Some(GraphQLType::Bool),
            "Float" => Some(GraphQLType::Float),
            "ID" => Some(GraphQLType::ID),
            "Int" => Some(GraphQLType::Int),
            "String" => Some(GraphQLType::String),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&Arc<EnumType>> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&Arc<InputObjectType>> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&Arc<InterfaceType>> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&Arc<ObjectType>> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&Arc<ScalarType>> {
        if let Self::Scalar(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&Arc<UnionType>> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn is_abstract(&self) -> bool {
        self.kind().is_abstract()
    }

    pub fn is_builtin(&self) -> bool {
        matches!(
            self,
            Self::Bool | Self::Float | Self::ID | Self::Int | Self::String
        )
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    /// The name this type is referenced by.
    pub fn name(&self) -> &str {
        match self {
            Self::Bool
            | Self::Float
            | Self::ID
            | Self::Int
            | Self::String => self.kind().name(),

            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }

    /// Short human-readable shape description used in error messages,
    /// e.g. "Object `User`".
    pub fn describe(&self) -> String {
        format!("{} `{}`", self.kind(), self.name())
    }
}

impl std::convert::From<EnumType> for GraphQLType {
    fn from(value: EnumType) -> Self {
        Self::Enum(Arc::new(value))
    }
}
impl std::convert::From<InputObjectType> for GraphQLType {
    fn from(value: InputObjectType) -> Self {
        Self::InputObject(Arc::new(value))
    }
}
impl std::convert::From<InterfaceType> for GraphQLType {
    fn from(value: InterfaceType) -> Self {
        Self::Interface(Arc::new(value))
    }
}
impl std::convert::From<ObjectType> for GraphQLType {
    fn from(value: ObjectType) -> Self {
        Self::Object(Arc::new(value))
    }
}
impl std::convert::From<Arc<ObjectType>> for GraphQLType {
    fn from(value: Arc<ObjectType>) -> Self {
        Self::Object(value)
    }
}
impl std::convert::From<ScalarType> for GraphQLType {
    fn from(value: ScalarType) -> Self {
        Self::Scalar(Arc::new(value))
    }
}
impl std::convert::From<UnionType> for GraphQLType {
    fn from(value: UnionType) -> Self {
        Self::Union(Arc::new(value))
    }
}
