use crate::AstNode;
use crate::Location;
use crate::NodeKind;
use crate::Property;
use inherent::inherent;
use std::sync::Arc;

/// A GraphQL [name](https://spec.graphql.org/October2021/#sec-Names)
/// (identifier) used for types, fields, arguments, directives and more.
#[derive(Clone, Debug, PartialEq)]
pub struct Name {
    pub loc: Option<Arc<Location>>,
    pub value: String,
}
impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            loc: None,
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }
}

#[inherent]
impl AstNode for Name {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Name
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![("value", Property::Str(&self.value))]
    }
}
