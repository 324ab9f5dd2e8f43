use crate::AstNode;
use crate::Location;
use crate::Name;
use crate::NodeKind;
use crate::Property;
use crate::TypeNode;
use inherent::inherent;
use std::sync::Arc;

/// A [type reference](https://spec.graphql.org/October2021/#sec-Type-References)
/// as written in a document (`String`, `[String]`, `String!`, ...).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeReference {
    List(ListType),
    Named(NamedType),
    NonNull(NonNullType),
}
impl TypeReference {
    fn as_ast_node(&self) -> &dyn AstNode {
        match self {
            TypeReference::List(t) => t,
            TypeReference::Named(t) => t,
            TypeReference::NonNull(t) => t,
        }
    }

    /// The innermost named type, unwrapping any list/non-null wrappers.
    pub fn named_type(&self) -> &NamedType {
        match self {
            TypeReference::List(t) => t.type_.named_type(),
            TypeReference::Named(t) => t,
            TypeReference::NonNull(t) => t.type_.named_type(),
        }
    }
}

#[inherent]
impl AstNode for TypeReference {
    pub fn kind(&self) -> NodeKind {
        self.as_ast_node().kind()
    }

    pub fn loc(&self) -> Option<&Location> {
        self.as_ast_node().loc()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        self.as_ast_node().properties()
    }
}
impl TypeNode for TypeReference {}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedType {
    pub loc: Option<Arc<Location>>,
    pub name: Name,
}
impl NamedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            loc: None,
            name: Name::new(name),
        }
    }
}

#[inherent]
impl AstNode for NamedType {
    pub fn kind(&self) -> NodeKind {
        NodeKind::NamedType
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![("name", Property::node(&self.name))]
    }
}
impl TypeNode for NamedType {}

#[derive(Clone, Debug, PartialEq)]
pub struct ListType {
    pub loc: Option<Arc<Location>>,
    pub type_: Box<TypeReference>,
}

#[inherent]
impl AstNode for ListType {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ListType
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![("type", Property::node(self.type_.as_ref()))]
    }
}
impl TypeNode for ListType {}

/// A non-null wrapper. The wrapped reference is never itself a
/// `NonNull`; that is the producer's responsibility and not re-checked
/// here.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType {
    pub loc: Option<Arc<Location>>,
    pub type_: Box<TypeReference>,
}

#[inherent]
impl AstNode for NonNullType {
    pub fn kind(&self) -> NodeKind {
        NodeKind::NonNullType
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![("type", Property::node(self.type_.as_ref()))]
    }
}
impl TypeNode for NonNullType {}
