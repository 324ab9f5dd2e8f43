//! Narrow capability traits implemented only by the node types that
//! actually carry the corresponding data.

use crate::AstNode;
use crate::Directive;
use crate::Name;
use crate::NodeList;
use crate::SelectionSet;
use crate::StringValue;

/// Nodes that may be annotated with directives.
pub trait HasDirectives {
    /// The directive annotations, in source order.
    fn directives(&self) -> &NodeList<Directive>;

    fn directives_mut(&mut self) -> &mut NodeList<Directive>;
}

/// Nodes that may carry a selection set.
pub trait HasSelectionSet {
    fn selection_set(&self) -> Option<&SelectionSet>;
}

/// Value literals that expose a typed value.
pub trait ValueNode: AstNode {
    type Literal: ?Sized;

    fn value(&self) -> &Self::Literal;
}

/// Type references: named, list and non-null types.
pub trait TypeNode: AstNode {}

/// Entries of a selection set.
pub trait SelectionNode: AstNode + HasDirectives {}

/// Top-level definitions of a document.
pub trait DefinitionNode: AstNode {}

/// Definitions and extensions that belong to the type system.
pub trait TypeSystemDefinitionNode: DefinitionNode {}

/// Named type definitions (scalar, object, interface, union, enum, input
/// object).
pub trait TypeDefinitionNode: TypeSystemDefinitionNode + HasDirectives {
    fn name(&self) -> &Name;

    fn description(&self) -> Option<&StringValue>;
}

/// Implements [`HasDirectives`] for node structs that store their
/// annotations in a `directives` field.
macro_rules! impl_has_directives {
    ($($node:ty),* $(,)?) => {$(
        impl $crate::HasDirectives for $node {
            fn directives(&self) -> &$crate::NodeList<$crate::Directive> {
                &self.directives
            }

            fn directives_mut(
                &mut self,
            ) -> &mut $crate::NodeList<$crate::Directive> {
                &mut self.directives
            }
        }
    )*};
}
pub(crate) use impl_has_directives;
