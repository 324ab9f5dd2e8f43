//! Tagged-tree representation of parsed GraphQL documents and
//! type-system definitions.
//!
//! Every node type is a plain struct carrying an optional, shared
//! [`Location`] and implementing [`AstNode`]. Typed child positions use
//! the closed sub-unions [`Value`], [`TypeReference`], [`Selection`] and
//! [`Definition`]; [`Node`] is the union of everything, and
//! [`NodeList`] is an ordered sequence that is itself a node.
//!
//! Small capability traits ([`HasDirectives`], [`HasSelectionSet`],
//! [`ValueNode`], [`TypeNode`], [`SelectionNode`], [`DefinitionNode`],
//! [`TypeSystemDefinitionNode`], [`TypeDefinitionNode`]) are implemented
//! only by the node types that hold the corresponding data.
//!
//! Tree operations:
//!
//! - [`AstNode::clone_deep()`] detaches every node and list from the
//!   original while sharing [`Location`]s (and their tokens/source).
//! - [`AstNode::to_array()`] gives a shallow field map.
//! - [`AstNode::to_array_recursive()`] gives a fully nested JSON dump.

mod ast_node;
mod capabilities;
mod document;
mod executable_defs;
mod location;
mod name;
mod node;
mod node_kind;
mod node_list;
mod type_extensions;
mod type_reference;
mod type_system_defs;
mod values;

pub use ast_node::AstNode;
pub use ast_node::Property;
pub use ast_node::ShallowArray;
pub use capabilities::DefinitionNode;
pub use capabilities::HasDirectives;
pub use capabilities::HasSelectionSet;
pub use capabilities::SelectionNode;
pub use capabilities::TypeDefinitionNode;
pub use capabilities::TypeNode;
pub use capabilities::TypeSystemDefinitionNode;
pub use capabilities::ValueNode;
pub use document::Definition;
pub use document::Document;
pub use executable_defs::Argument;
pub use executable_defs::Directive;
pub use executable_defs::Field;
pub use executable_defs::FragmentDefinition;
pub use executable_defs::FragmentSpread;
pub use executable_defs::InlineFragment;
pub use executable_defs::OperationDefinition;
pub use executable_defs::OperationType;
pub use executable_defs::Selection;
pub use executable_defs::SelectionSet;
pub use executable_defs::VariableDefinition;
pub use location::LocSpan;
pub use location::Location;
pub use location::LocationOffset;
pub use location::Source;
pub use location::Token;
pub use location::TokenKind;
pub use name::Name;
pub use node::Node;
pub use node_kind::NodeKind;
pub use node_list::NodeList;
pub use type_extensions::EnumTypeExtension;
pub use type_extensions::InputObjectTypeExtension;
pub use type_extensions::InterfaceTypeExtension;
pub use type_extensions::ObjectTypeExtension;
pub use type_extensions::ScalarTypeExtension;
pub use type_extensions::SchemaExtension;
pub use type_extensions::UnionTypeExtension;
pub use type_reference::ListType;
pub use type_reference::NamedType;
pub use type_reference::NonNullType;
pub use type_reference::TypeReference;
pub use type_system_defs::DirectiveDefinition;
pub use type_system_defs::EnumTypeDefinition;
pub use type_system_defs::EnumValueDefinition;
pub use type_system_defs::FieldDefinition;
pub use type_system_defs::InputObjectTypeDefinition;
pub use type_system_defs::InputValueDefinition;
pub use type_system_defs::InterfaceTypeDefinition;
pub use type_system_defs::ObjectTypeDefinition;
pub use type_system_defs::OperationTypeDefinition;
pub use type_system_defs::ScalarTypeDefinition;
pub use type_system_defs::SchemaDefinition;
pub use type_system_defs::UnionTypeDefinition;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
pub use values::Variable;

#[cfg(test)]
mod tests;
