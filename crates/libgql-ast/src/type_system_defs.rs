use crate::AstNode;
use crate::DefinitionNode;
use crate::Directive;
use crate::Location;
use crate::Name;
use crate::NamedType;
use crate::NodeKind;
use crate::NodeList;
use crate::OperationType;
use crate::Property;
use crate::StringValue;
use crate::TypeDefinitionNode;
use crate::TypeReference;
use crate::TypeSystemDefinitionNode;
use crate::Value;
use crate::capabilities::impl_has_directives;
use inherent::inherent;
use std::sync::Arc;

macro_rules! impl_type_definition {
    ($($node:ty),* $(,)?) => {$(
        impl DefinitionNode for $node {}
        impl TypeSystemDefinitionNode for $node {}
        impl TypeDefinitionNode for $node {
            fn name(&self) -> &Name {
                &self.name
            }

            fn description(&self) -> Option<&StringValue> {
                self.description.as_ref()
            }
        }
    )*};
}

// =========================================================
// Schema definition
// =========================================================

/// `schema { query: Query ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    pub description: Option<StringValue>,
    pub directives: NodeList<Directive>,
    pub loc: Option<Arc<Location>>,
    pub operation_types: NodeList<OperationTypeDefinition>,
}
impl SchemaDefinition {
    /// The named type bound to `operation`, if the definition declares one.
    pub fn operation_type(&self, operation: OperationType) -> Option<&NamedType> {
        self.operation_types
            .iter()
            .find(|op_type| op_type.operation == operation)
            .map(|op_type| &op_type.type_)
    }
}

#[inherent]
impl AstNode for SchemaDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::SchemaDefinition
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("description", Property::optional(self.description.as_ref())),
            ("directives", Property::nodes(&self.directives)),
            ("operationTypes", Property::nodes(&self.operation_types)),
        ]
    }
}
impl DefinitionNode for SchemaDefinition {}
impl TypeSystemDefinitionNode for SchemaDefinition {}

/// One `query: Query` entry of a schema definition or extension.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationTypeDefinition {
    pub loc: Option<Arc<Location>>,
    pub operation: OperationType,
    pub type_: NamedType,
}

#[inherent]
impl AstNode for OperationTypeDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::OperationTypeDefinition
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("operation", Property::Str(self.operation.as_str())),
            ("type", Property::node(&self.type_)),
        ]
    }
}

// =========================================================
// Type definitions
// =========================================================

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition {
    pub description: Option<StringValue>,
    pub directives: NodeList<Directive>,
    pub loc: Option<Arc<Location>>,
    pub name: Name,
}

#[inherent]
impl AstNode for ScalarTypeDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ScalarTypeDefinition
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("description", Property::optional(self.description.as_ref())),
            ("name", Property::node(&self.name)),
            ("directives", Property::nodes(&self.directives)),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition {
    pub description: Option<StringValue>,
    pub directives: NodeList<Directive>,
    pub fields: NodeList<FieldDefinition>,
    pub interfaces: NodeList<NamedType>,
    pub loc: Option<Arc<Location>>,
    pub name: Name,
}

#[inherent]
impl AstNode for ObjectTypeDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectTypeDefinition
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("description", Property::optional(self.description.as_ref())),
            ("name", Property::node(&self.name)),
            ("interfaces", Property::nodes(&self.interfaces)),
            ("directives", Property::nodes(&self.directives)),
            ("fields", Property::nodes(&self.fields)),
        ]
    }
}

/// A field declared on an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub arguments: NodeList<InputValueDefinition>,
    pub description: Option<StringValue>,
    pub directives: NodeList<Directive>,
    pub loc: Option<Arc<Location>>,
    pub name: Name,
    pub type_: TypeReference,
}

#[inherent]
impl AstNode for FieldDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::FieldDefinition
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("description", Property::optional(self.description.as_ref())),
            ("name", Property::node(&self.name)),
            ("arguments", Property::nodes(&self.arguments)),
            ("type", Property::node(&self.type_)),
            ("directives", Property::nodes(&self.directives)),
        ]
    }
}

/// An argument of a field or directive definition, or a field of an
/// input object type.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub default_value: Option<Value>,
    pub description: Option<StringValue>,
    pub directives: NodeList<Directive>,
    pub loc: Option<Arc<Location>>,
    pub name: Name,
    pub type_: TypeReference,
}

#[inherent]
impl AstNode for InputValueDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InputValueDefinition
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("description", Property::optional(self.description.as_ref())),
            ("name", Property::node(&self.name)),
            ("type", Property::node(&self.type_)),
            ("defaultValue", Property::optional(self.default_value.as_ref())),
            ("directives", Property::nodes(&self.directives)),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition {
    pub description: Option<StringValue>,
    pub directives: NodeList<Directive>,
    pub fields: NodeList<FieldDefinition>,
    pub interfaces: NodeList<NamedType>,
    pub loc: Option<Arc<Location>>,
    pub name: Name,
}

#[inherent]
impl AstNode for InterfaceTypeDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InterfaceTypeDefinition
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("description", Property::optional(self.description.as_ref())),
            ("name", Property::node(&self.name)),
            ("interfaces", Property::nodes(&self.interfaces)),
            ("directives", Property::nodes(&self.directives)),
            ("fields", Property::nodes(&self.fields)),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition {
    pub description: Option<StringValue>,
    pub directives: NodeList<Directive>,
    pub loc: Option<Arc<Location>>,
    pub name: Name,
    pub types: NodeList<NamedType>,
}

#[inherent]
impl AstNode for UnionTypeDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::UnionTypeDefinition
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("description", Property::optional(self.description.as_ref())),
            ("name", Property::node(&self.name)),
            ("directives", Property::nodes(&self.directives)),
            ("types", Property::nodes(&self.types)),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition {
    pub description: Option<StringValue>,
    pub directives: NodeList<Directive>,
    pub loc: Option<Arc<Location>>,
    pub name: Name,
    pub values: NodeList<EnumValueDefinition>,
}

#[inherent]
impl AstNode for EnumTypeDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumTypeDefinition
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("description", Property::optional(self.description.as_ref())),
            ("name", Property::node(&self.name)),
            ("directives", Property::nodes(&self.directives)),
            ("values", Property::nodes(&self.values)),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub description: Option<StringValue>,
    pub directives: NodeList<Directive>,
    pub loc: Option<Arc<Location>>,
    pub name: Name,
}

#[inherent]
impl AstNode for EnumValueDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumValueDefinition
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("description", Property::optional(self.description.as_ref())),
            ("name", Property::node(&self.name)),
            ("directives", Property::nodes(&self.directives)),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition {
    pub description: Option<StringValue>,
    pub directives: NodeList<Directive>,
    pub fields: NodeList<InputValueDefinition>,
    pub loc: Option<Arc<Location>>,
    pub name: Name,
}

#[inherent]
impl AstNode for InputObjectTypeDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InputObjectTypeDefinition
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("description", Property::optional(self.description.as_ref())),
            ("name", Property::node(&self.name)),
            ("directives", Property::nodes(&self.directives)),
            ("fields", Property::nodes(&self.fields)),
        ]
    }
}

// =========================================================
// Directive definition
// =========================================================

/// `directive @name(args) repeatable on LOCATION | ...`
///
/// `locations` holds the location names exactly as written.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub arguments: NodeList<InputValueDefinition>,
    pub description: Option<StringValue>,
    pub loc: Option<Arc<Location>>,
    pub locations: NodeList<Name>,
    pub name: Name,
    pub repeatable: bool,
}

#[inherent]
impl AstNode for DirectiveDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::DirectiveDefinition
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("description", Property::optional(self.description.as_ref())),
            ("name", Property::node(&self.name)),
            ("arguments", Property::nodes(&self.arguments)),
            ("repeatable", Property::Bool(self.repeatable)),
            ("locations", Property::nodes(&self.locations)),
        ]
    }
}
impl DefinitionNode for DirectiveDefinition {}
impl TypeSystemDefinitionNode for DirectiveDefinition {}

impl_has_directives!(
    EnumTypeDefinition,
    EnumValueDefinition,
    FieldDefinition,
    InputObjectTypeDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    ObjectTypeDefinition,
    ScalarTypeDefinition,
    SchemaDefinition,
    UnionTypeDefinition,
);

impl_type_definition!(
    EnumTypeDefinition,
    InputObjectTypeDefinition,
    InterfaceTypeDefinition,
    ObjectTypeDefinition,
    ScalarTypeDefinition,
    UnionTypeDefinition,
);
