use crate::AstNode;
use crate::DefinitionNode;
use crate::HasDirectives;
use crate::HasSelectionSet;
use crate::Location;
use crate::Name;
use crate::NamedType;
use crate::NodeKind;
use crate::NodeList;
use crate::Property;
use crate::SelectionNode;
use crate::TypeReference;
use crate::Value;
use crate::Variable;
use crate::capabilities::impl_has_directives;
use inherent::inherent;
use std::sync::Arc;

/// The three root operation kinds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationType {
    Mutation,
    Query,
    Subscription,
}
impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mutation => "mutation",
            Self::Query => "query",
            Self::Subscription => "subscription",
        }
    }
}

// =========================================================
// Operation definitions
// =========================================================

/// A query, mutation or subscription.
///
/// See [Operations](https://spec.graphql.org/October2021/#sec-Language.Operations).
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub directives: NodeList<Directive>,
    pub loc: Option<Arc<Location>>,
    pub name: Option<Name>,
    pub operation: OperationType,
    pub selection_set: SelectionSet,
    pub variable_definitions: NodeList<VariableDefinition>,
}

#[inherent]
impl AstNode for OperationDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::OperationDefinition
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("operation", Property::Str(self.operation.as_str())),
            ("name", Property::optional(self.name.as_ref())),
            ("variableDefinitions", Property::nodes(&self.variable_definitions)),
            ("directives", Property::nodes(&self.directives)),
            ("selectionSet", Property::node(&self.selection_set)),
        ]
    }
}
impl DefinitionNode for OperationDefinition {}
impl HasSelectionSet for OperationDefinition {
    fn selection_set(&self) -> Option<&SelectionSet> {
        Some(&self.selection_set)
    }
}

/// A variable declared by an operation (`$id: ID! = "4"`).
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub default_value: Option<Value>,
    pub directives: NodeList<Directive>,
    pub loc: Option<Arc<Location>>,
    pub type_: TypeReference,
    pub variable: Variable,
}

#[inherent]
impl AstNode for VariableDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::VariableDefinition
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("variable", Property::node(&self.variable)),
            ("type", Property::node(&self.type_)),
            ("defaultValue", Property::optional(self.default_value.as_ref())),
            ("directives", Property::nodes(&self.directives)),
        ]
    }
}

// =========================================================
// Selection sets
// =========================================================

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub loc: Option<Arc<Location>>,
    pub selections: NodeList<Selection>,
}

#[inherent]
impl AstNode for SelectionSet {
    pub fn kind(&self) -> NodeKind {
        NodeKind::SelectionSet
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![("selections", Property::nodes(&self.selections))]
    }
}

#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}
impl Selection {
    fn as_ast_node(&self) -> &dyn AstNode {
        match self {
            Selection::Field(s) => s,
            Selection::FragmentSpread(s) => s,
            Selection::InlineFragment(s) => s,
        }
    }
}

#[inherent]
impl AstNode for Selection {
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
impl HasDirectives for Selection {
    fn directives(&self) -> &NodeList<Directive> {
        match self {
            Selection::Field(s) => &s.directives,
            Selection::FragmentSpread(s) => &s.directives,
            Selection::InlineFragment(s) => &s.directives,
        }
    }

    fn directives_mut(&mut self) -> &mut NodeList<Directive> {
        match self {
            Selection::Field(s) => &mut s.directives,
            Selection::FragmentSpread(s) => &mut s.directives,
            Selection::InlineFragment(s) => &mut s.directives,
        }
    }
}
impl SelectionNode for Selection {}

// =========================================================
// Field
// =========================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<Name>,
    pub arguments: NodeList<Argument>,
    pub directives: NodeList<Directive>,
    pub loc: Option<Arc<Location>>,
    pub name: Name,
    pub selection_set: Option<SelectionSet>,
}
impl Field {
    /// A bare `name` selection with no alias, arguments or sub-selections.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            arguments: NodeList::default(),
            directives: NodeList::default(),
            loc: None,
            name: Name::new(name),
            selection_set: None,
        }
    }

    /// The key this field contributes to a response: the alias if present,
    /// the field name otherwise.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }
}

#[inherent]
impl AstNode for Field {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Field
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("alias", Property::optional(self.alias.as_ref())),
            ("name", Property::node(&self.name)),
            ("arguments", Property::nodes(&self.arguments)),
            ("directives", Property::nodes(&self.directives)),
            ("selectionSet", Property::optional(self.selection_set.as_ref())),
        ]
    }
}
impl HasSelectionSet for Field {
    fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }
}
impl SelectionNode for Field {}

/// A `name: value` argument passed to a field or directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub loc: Option<Arc<Location>>,
    pub name: Name,
    pub value: Value,
}

#[inherent]
impl AstNode for Argument {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Argument
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("name", Property::node(&self.name)),
            ("value", Property::node(&self.value)),
        ]
    }
}

// =========================================================
// Fragments
// =========================================================

/// `...FragmentName`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub directives: NodeList<Directive>,
    pub loc: Option<Arc<Location>>,
    pub name: Name,
}

#[inherent]
impl AstNode for FragmentSpread {
    pub fn kind(&self) -> NodeKind {
        NodeKind::FragmentSpread
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
impl SelectionNode for FragmentSpread {}

/// `... on Type { ... }` (the type condition is optional).
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub directives: NodeList<Directive>,
    pub loc: Option<Arc<Location>>,
    pub selection_set: SelectionSet,
    pub type_condition: Option<NamedType>,
}

#[inherent]
impl AstNode for InlineFragment {
    pub fn kind(&self) -> NodeKind {
        NodeKind::InlineFragment
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("typeCondition", Property::optional(self.type_condition.as_ref())),
            ("directives", Property::nodes(&self.directives)),
            ("selectionSet", Property::node(&self.selection_set)),
        ]
    }
}
impl HasSelectionSet for InlineFragment {
    fn selection_set(&self) -> Option<&SelectionSet> {
        Some(&self.selection_set)
    }
}
impl SelectionNode for InlineFragment {}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub directives: NodeList<Directive>,
    pub loc: Option<Arc<Location>>,
    pub name: Name,
    pub selection_set: SelectionSet,
    pub type_condition: NamedType,
    /// Experimental fragment variables; empty unless the producer
    /// supports them.
    pub variable_definitions: NodeList<VariableDefinition>,
}

#[inherent]
impl AstNode for FragmentDefinition {
    pub fn kind(&self) -> NodeKind {
        NodeKind::FragmentDefinition
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("name", Property::node(&self.name)),
            ("variableDefinitions", Property::nodes(&self.variable_definitions)),
            ("typeCondition", Property::node(&self.type_condition)),
            ("directives", Property::nodes(&self.directives)),
            ("selectionSet", Property::node(&self.selection_set)),
        ]
    }
}
impl DefinitionNode for FragmentDefinition {}
impl HasSelectionSet for FragmentDefinition {
    fn selection_set(&self) -> Option<&SelectionSet> {
        Some(&self.selection_set)
    }
}

// =========================================================
// Directives
// =========================================================

/// A directive annotation (`@include(if: $flag)`).
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub arguments: NodeList<Argument>,
    pub loc: Option<Arc<Location>>,
    pub name: Name,
}
impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            arguments: NodeList::default(),
            loc: None,
            name: Name::new(name),
        }
    }
}

#[inherent]
impl AstNode for Directive {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Directive
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("name", Property::node(&self.name)),
            ("arguments", Property::nodes(&self.arguments)),
        ]
    }
}

impl_has_directives!(
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    OperationDefinition,
    VariableDefinition,
);
