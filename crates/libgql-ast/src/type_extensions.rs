use crate::AstNode;
use crate::DefinitionNode;
use crate::Directive;
use crate::EnumValueDefinition;
use crate::FieldDefinition;
use crate::InputValueDefinition;
use crate::Location;
use crate::Name;
use crate::NamedType;
use crate::NodeKind;
use crate::NodeList;
use crate::OperationTypeDefinition;
use crate::Property;
use crate::TypeSystemDefinitionNode;
use crate::capabilities::impl_has_directives;
use inherent::inherent;
use std::sync::Arc;

// Extensions carry no description and only the members they add.

#[derive(Clone, Debug, PartialEq)]
pub struct SchemaExtension {
    pub directives: NodeList<Directive>,
    pub loc: Option<Arc<Location>>,
    pub operation_types: NodeList<OperationTypeDefinition>,
}

#[inherent]
impl AstNode for SchemaExtension {
    pub fn kind(&self) -> NodeKind {
        NodeKind::SchemaExtension
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("directives", Property::nodes(&self.directives)),
            ("operationTypes", Property::nodes(&self.operation_types)),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeExtension {
    pub directives: NodeList<Directive>,
    pub loc: Option<Arc<Location>>,
    pub name: Name,
}

#[inherent]
impl AstNode for ScalarTypeExtension {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ScalarTypeExtension
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("name", Property::node(&self.name)),
            ("directives", Property::nodes(&self.directives)),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeExtension {
    pub directives: NodeList<Directive>,
    pub fields: NodeList<FieldDefinition>,
    pub interfaces: NodeList<NamedType>,
    pub loc: Option<Arc<Location>>,
    pub name: Name,
}

#[inherent]
impl AstNode for ObjectTypeExtension {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectTypeExtension
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("name", Property::node(&self.name)),
            ("interfaces", Property::nodes(&self.interfaces)),
            ("directives", Property::nodes(&self.directives)),
            ("fields", Property::nodes(&self.fields)),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeExtension {
    pub directives: NodeList<Directive>,
    pub fields: NodeList<FieldDefinition>,
    pub interfaces: NodeList<NamedType>,
    pub loc: Option<Arc<Location>>,
    pub name: Name,
}

#[inherent]
impl AstNode for InterfaceTypeExtension {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InterfaceTypeExtension
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("name", Property::node(&self.name)),
            ("interfaces", Property::nodes(&self.interfaces)),
            ("directives", Property::nodes(&self.directives)),
            ("fields", Property::nodes(&self.fields)),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeExtension {
    pub directives: NodeList<Directive>,
    pub loc: Option<Arc<Location>>,
    pub name: Name,
    pub types: NodeList<NamedType>,
}

#[inherent]
impl AstNode for UnionTypeExtension {
    pub fn kind(&self) -> NodeKind {
        NodeKind::UnionTypeExtension
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("name", Property::node(&self.name)),
            ("directives", Property::nodes(&self.directives)),
            ("types", Property::nodes(&self.types)),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeExtension {
    pub directives: NodeList<Directive>,
    pub loc: Option<Arc<Location>>,
    pub name: Name,
    pub values: NodeList<EnumValueDefinition>,
}

#[inherent]
impl AstNode for EnumTypeExtension {
    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumTypeExtension
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("name", Property::node(&self.name)),
            ("directives", Property::nodes(&self.directives)),
            ("values", Property::nodes(&self.values)),
        ]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeExtension {
    pub directives: NodeList<Directive>,
    pub fields: NodeList<InputValueDefinition>,
    pub loc: Option<Arc<Location>>,
    pub name: Name,
}

#[inherent]
impl AstNode for InputObjectTypeExtension {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InputObjectTypeExtension
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("name", Property::node(&self.name)),
            ("directives", Property::nodes(&self.directives)),
            ("fields", Property::nodes(&self.fields)),
        ]
    }
}

impl_has_directives!(
    EnumTypeExtension,
    InputObjectTypeExtension,
    InterfaceTypeExtension,
    ObjectTypeExtension,
    ScalarTypeExtension,
    SchemaExtension,
    UnionTypeExtension,
);

impl DefinitionNode for EnumTypeExtension {}
impl DefinitionNode for InputObjectTypeExtension {}
impl DefinitionNode for InterfaceTypeExtension {}
impl DefinitionNode for ObjectTypeExtension {}
impl DefinitionNode for ScalarTypeExtension {}
impl DefinitionNode for SchemaExtension {}
impl DefinitionNode for UnionTypeExtension {}

impl TypeSystemDefinitionNode for EnumTypeExtension {}
impl TypeSystemDefinitionNode for InputObjectTypeExtension {}
impl TypeSystemDefinitionNode for InterfaceTypeExtension {}
impl TypeSystemDefinitionNode for ObjectTypeExtension {}
impl TypeSystemDefinitionNode for ScalarTypeExtension {}
impl TypeSystemDefinitionNode for SchemaExtension {}
impl TypeSystemDefinitionNode for UnionTypeExtension {}
