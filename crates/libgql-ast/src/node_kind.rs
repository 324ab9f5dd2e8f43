/// Discriminator carried by every node in the tree.
///
/// [`NodeKind::as_str()`] yields the tag emitted as `"kind"` in tree
/// dumps. [`NodeKind::List`] is reported only by
/// [`NodeList`](crate::NodeList).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    Argument,
    BooleanValue,
    Directive,
    DirectiveDefinition,
    Document,
    EnumTypeDefinition,
    EnumTypeExtension,
    EnumValue,
    EnumValueDefinition,
    Field,
    FieldDefinition,
    FloatValue,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    InputObjectTypeDefinition,
    InputObjectTypeExtension,
    InputValueDefinition,
    InterfaceTypeDefinition,
    InterfaceTypeExtension,
    IntValue,
    List,
    ListType,
    ListValue,
    Name,
    NamedType,
    NonNullType,
    NullValue,
    ObjectField,
    ObjectTypeDefinition,
    ObjectTypeExtension,
    ObjectValue,
    OperationDefinition,
    OperationTypeDefinition,
    ScalarTypeDefinition,
    ScalarTypeExtension,
    SchemaDefinition,
    SchemaExtension,
    SelectionSet,
    StringValue,
    UnionTypeDefinition,
    UnionTypeExtension,
    Variable,
    VariableDefinition,
}
impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Argument => "Argument",
            Self::BooleanValue => "BooleanValue",
            Self::Directive => "Directive",
            Self::DirectiveDefinition => "DirectiveDefinition",
            Self::Document => "Document",
            Self::EnumTypeDefinition => "EnumTypeDefinition",
            Self::EnumTypeExtension => "EnumTypeExtension",
            Self::EnumValue => "EnumValue",
            Self::EnumValueDefinition => "EnumValueDefinition",
            Self::Field => "Field",
            Self::FieldDefinition => "FieldDefinition",
            Self::FloatValue => "FloatValue",
            Self::FragmentDefinition => "FragmentDefinition",
            Self::FragmentSpread => "FragmentSpread",
            Self::InlineFragment => "InlineFragment",
            Self::InputObjectTypeDefinition => "InputObjectTypeDefinition",
            Self::InputObjectTypeExtension => "InputObjectTypeExtension",
            Self::InputValueDefinition => "InputValueDefinition",
            Self::InterfaceTypeDefinition => "InterfaceTypeDefinition",
            Self::InterfaceTypeExtension => "InterfaceTypeExtension",
            Self::IntValue => "IntValue",
            Self::List => "List",
            Self::ListType => "ListType",
            Self::ListValue => "ListValue",
            Self::Name => "Name",
            Self::NamedType => "NamedType",
            Self::NonNullType => "NonNullType",
            Self::NullValue => "NullValue",
            Self::ObjectField => "ObjectField",
            Self::ObjectTypeDefinition => "ObjectTypeDefinition",
            Self::ObjectTypeExtension => "ObjectTypeExtension",
            Self::ObjectValue => "ObjectValue",
            Self::OperationDefinition => "OperationDefinition",
            Self::OperationTypeDefinition => "OperationTypeDefinition",
            Self::ScalarTypeDefinition => "ScalarTypeDefinition",
            Self::ScalarTypeExtension => "ScalarTypeExtension",
            Self::SchemaDefinition => "SchemaDefinition",
            Self::SchemaExtension => "SchemaExtension",
            Self::SelectionSet => "SelectionSet",
            Self::StringValue => "StringValue",
            Self::UnionTypeDefinition => "UnionTypeDefinition",
            Self::UnionTypeExtension => "UnionTypeExtension",
            Self::Variable => "Variable",
            Self::VariableDefinition => "VariableDefinition",
        }
    }
}
impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
