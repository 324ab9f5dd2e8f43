use crate::*;
use inherent::inherent;

macro_rules! define_node {
    ($($variant:ident),* $(,)?) => {
        /// Any node of the tree.
        ///
        /// Each variant wraps the concrete node struct of the same name;
        /// [`Node::List`] holds a heterogeneous [`NodeList`].
        #[allow(clippy::large_enum_variant)]
        #[derive(Clone, Debug, PartialEq)]
        pub enum Node {
            $($variant($variant),)*
            List(NodeList<Node>),
        }
        impl Node {
            pub fn as_ast_node(&self) -> &dyn AstNode {
                match self {
                    $(Node::$variant(node) => node,)*
                    Node::List(list) => list,
                }
            }
        }
        $(
            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

define_node!(
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
);

impl Node {
    pub fn as_list(&self) -> Option<&NodeList<Node>> {
        match self {
            Node::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut NodeList<Node>> {
        match self {
            Node::List(list) => Some(list),
            _ => None,
        }
    }
}

#[inherent]
impl AstNode for Node {
    pub fn kind(&self) -> NodeKind {
        self.as_ast_node().kind()
    }

    pub fn loc(&self) -> Option<&Location> {
        self.as_ast_node().loc()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        self.as_ast_node().properties()
    }

    pub fn is_list(&self) -> bool {
        self.as_ast_node().is_list()
    }
}

impl From<NodeList<Node>> for Node {
    fn from(list: NodeList<Node>) -> Self {
        Node::List(list)
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Boolean(v) => Node::BooleanValue(v),
            Value::Enum(v) => Node::EnumValue(v),
            Value::Float(v) => Node::FloatValue(v),
            Value::Int(v) => Node::IntValue(v),
            Value::List(v) => Node::ListValue(v),
            Value::Null(v) => Node::NullValue(v),
            Value::Object(v) => Node::ObjectValue(v),
            Value::String(v) => Node::StringValue(v),
            Value::Variable(v) => Node::Variable(v),
        }
    }
}

impl From<TypeReference> for Node {
    fn from(type_ref: TypeReference) -> Self {
        match type_ref {
            TypeReference::List(t) => Node::ListType(t),
            TypeReference::Named(t) => Node::NamedType(t),
            TypeReference::NonNull(t) => Node::NonNullType(t),
        }
    }
}

impl From<Selection> for Node {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::Field(s) => Node::Field(s),
            Selection::FragmentSpread(s) => Node::FragmentSpread(s),
            Selection::InlineFragment(s) => Node::InlineFragment(s),
        }
    }
}

impl From<Definition> for Node {
    fn from(def: Definition) -> Self {
        match def {
            Definition::DirectiveDefinition(d) => Node::DirectiveDefinition(d),
            Definition::EnumTypeDefinition(d) => Node::EnumTypeDefinition(d),
            Definition::EnumTypeExtension(d) => Node::EnumTypeExtension(d),
            Definition::FragmentDefinition(d) => Node::FragmentDefinition(d),
            Definition::InputObjectTypeDefinition(d) => {
                Node::InputObjectTypeDefinition(d)
            },
            Definition::InputObjectTypeExtension(d) => {
                Node::InputObjectTypeExtension(d)
            },
            Definition::InterfaceTypeDefinition(d) => {
                Node::InterfaceTypeDefinition(d)
            },
            Definition::InterfaceTypeExtension(d) => {
                Node::InterfaceTypeExtension(d)
            },
            Definition::ObjectTypeDefinition(d) => Node::ObjectTypeDefinition(d),
            Definition::ObjectTypeExtension(d) => Node::ObjectTypeExtension(d),
            Definition::OperationDefinition(d) => Node::OperationDefinition(d),
            Definition::ScalarTypeDefinition(d) => Node::ScalarTypeDefinition(d),
            Definition::ScalarTypeExtension(d) => Node::ScalarTypeExtension(d),
            Definition::SchemaDefinition(d) => Node::SchemaDefinition(d),
            Definition::SchemaExtension(d) => Node::SchemaExtension(d),
            Definition::UnionTypeDefinition(d) => Node::UnionTypeDefinition(d),
            Definition::UnionTypeExtension(d) => Node::UnionTypeExtension(d),
        }
    }
}
