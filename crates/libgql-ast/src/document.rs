use crate::AstNode;
use crate::DefinitionNode;
use crate::DirectiveDefinition;
use crate::EnumTypeDefinition;
use crate::EnumTypeExtension;
use crate::FragmentDefinition;
use crate::InputObjectTypeDefinition;
use crate::InputObjectTypeExtension;
use crate::InterfaceTypeDefinition;
use crate::InterfaceTypeExtension;
use crate::Location;
use crate::NodeKind;
use crate::NodeList;
use crate::ObjectTypeDefinition;
use crate::ObjectTypeExtension;
use crate::OperationDefinition;
use crate::Property;
use crate::ScalarTypeDefinition;
use crate::ScalarTypeExtension;
use crate::SchemaDefinition;
use crate::SchemaExtension;
use crate::TypeDefinitionNode;
use crate::UnionTypeDefinition;
use crate::UnionTypeExtension;
use inherent::inherent;
use std::sync::Arc;

// =========================================================
// Document
// =========================================================

/// Root node of any GraphQL document.
///
/// A single `Document` type represents executable documents, type-system
/// documents and mixtures of both; deciding which definitions are allowed
/// is left to consumers.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub definitions: NodeList<Definition>,
    pub loc: Option<Arc<Location>>,
}
impl Document {
    /// Iterate over only the type-system definitions and extensions.
    pub fn schema_definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter().filter(|def| def.is_type_system())
    }

    /// Iterate over only the operations and fragments.
    pub fn executable_definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter().filter(|def| def.is_executable())
    }
}

#[inherent]
impl AstNode for Document {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Document
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![("definitions", Property::nodes(&self.definitions))]
    }
}

// =========================================================
// Definition
// =========================================================

/// A top-level definition of a [`Document`].
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    DirectiveDefinition(DirectiveDefinition),
    EnumTypeDefinition(EnumTypeDefinition),
    EnumTypeExtension(EnumTypeExtension),
    FragmentDefinition(FragmentDefinition),
    InputObjectTypeDefinition(InputObjectTypeDefinition),
    InputObjectTypeExtension(InputObjectTypeExtension),
    InterfaceTypeDefinition(InterfaceTypeDefinition),
    InterfaceTypeExtension(InterfaceTypeExtension),
    ObjectTypeDefinition(ObjectTypeDefinition),
    ObjectTypeExtension(ObjectTypeExtension),
    OperationDefinition(OperationDefinition),
    ScalarTypeDefinition(ScalarTypeDefinition),
    ScalarTypeExtension(ScalarTypeExtension),
    SchemaDefinition(SchemaDefinition),
    SchemaExtension(SchemaExtension),
    UnionTypeDefinition(UnionTypeDefinition),
    UnionTypeExtension(UnionTypeExtension),
}
impl Definition {
    fn as_ast_node(&self) -> &dyn AstNode {
        match self {
            Definition::DirectiveDefinition(d) => d,
            Definition::EnumTypeDefinition(d) => d,
            Definition::EnumTypeExtension(d) => d,
            Definition::FragmentDefinition(d) => d,
            Definition::InputObjectTypeDefinition(d) => d,
            Definition::InputObjectTypeExtension(d) => d,
            Definition::InterfaceTypeDefinition(d) => d,
            Definition::InterfaceTypeExtension(d) => d,
            Definition::ObjectTypeDefinition(d) => d,
            Definition::ObjectTypeExtension(d) => d,
            Definition::OperationDefinition(d) => d,
            Definition::ScalarTypeDefinition(d) => d,
            Definition::ScalarTypeExtension(d) => d,
            Definition::SchemaDefinition(d) => d,
            Definition::SchemaExtension(d) => d,
            Definition::UnionTypeDefinition(d) => d,
            Definition::UnionTypeExtension(d) => d,
        }
    }

    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            Definition::FragmentDefinition(_)
                | Definition::OperationDefinition(_)
        )
    }

    pub fn is_type_system(&self) -> bool {
        !self.is_executable()
    }

    /// The named type this definition declares, if it is one of the six
    /// type definitions.
    pub fn as_type_definition(&self) -> Option<&dyn TypeDefinitionNode> {
        match self {
            Definition::EnumTypeDefinition(d) => Some(d),
            Definition::InputObjectTypeDefinition(d) => Some(d),
            Definition::InterfaceTypeDefinition(d) => Some(d),
            Definition::ObjectTypeDefinition(d) => Some(d),
            Definition::ScalarTypeDefinition(d) => Some(d),
            Definition::UnionTypeDefinition(d) => Some(d),

            Definition::DirectiveDefinition(_)
            | Definition::EnumTypeExtension(_)
            | Definition::FragmentDefinition(_)
            | Definition::InputObjectTypeExtension(_)
            | Definition::InterfaceTypeExtension(_)
            | Definition::ObjectTypeExtension(_)
            | Definition::OperationDefinition(_)
            | Definition::ScalarTypeExtension(_)
            | Definition::SchemaDefinition(_)
            | Definition::SchemaExtension(_)
            | Definition::UnionTypeExtension(_) => None,
        }
    }
}

#[inherent]
impl AstNode for Definition {
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
impl DefinitionNode for Definition {}
