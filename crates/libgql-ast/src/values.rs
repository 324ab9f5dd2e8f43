use crate::AstNode;
use crate::Location;
use crate::Name;
use crate::NodeKind;
use crate::NodeList;
use crate::Property;
use crate::ValueNode;
use inherent::inherent;
use std::sync::Arc;

// =========================================================
// Value
// =========================================================

/// A GraphQL input value literal (or variable reference).
///
/// See [Input Values](https://spec.graphql.org/October2021/#sec-Input-Values).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(BooleanValue),
    Enum(EnumValue),
    Float(FloatValue),
    Int(IntValue),
    List(ListValue),
    Null(NullValue),
    Object(ObjectValue),
    String(StringValue),
    Variable(Variable),
}
impl Value {
    fn as_ast_node(&self) -> &dyn AstNode {
        match self {
            Value::Boolean(v) => v,
            Value::Enum(v) => v,
            Value::Float(v) => v,
            Value::Int(v) => v,
            Value::List(v) => v,
            Value::Null(v) => v,
            Value::Object(v) => v,
            Value::String(v) => v,
            Value::Variable(v) => v,
        }
    }
}

#[inherent]
impl AstNode for Value {
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

// =========================================================
// Scalar literals
// =========================================================

/// An integer literal. The source text is kept verbatim so that values
/// outside the range of any particular integer type survive a round trip.
#[derive(Clone, Debug, PartialEq)]
pub struct IntValue {
    pub loc: Option<Arc<Location>>,
    pub value: String,
}

#[inherent]
impl AstNode for IntValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::IntValue
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![("value", Property::Str(&self.value))]
    }
}

impl ValueNode for IntValue {
    type Literal = str;

    fn value(&self) -> &str {
        self.value.as_str()
    }
}

/// A float literal, kept as source text.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatValue {
    pub loc: Option<Arc<Location>>,
    pub value: String,
}

#[inherent]
impl AstNode for FloatValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::FloatValue
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![("value", Property::Str(&self.value))]
    }
}

impl ValueNode for FloatValue {
    type Literal = str;

    fn value(&self) -> &str {
        self.value.as_str()
    }
}

/// A string literal. `block` records whether it was written as a
/// `"""block string"""`.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue {
    pub block: bool,
    pub loc: Option<Arc<Location>>,
    pub value: String,
}
impl StringValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            block: false,
            loc: None,
            value: value.into(),
        }
    }
}

#[inherent]
impl AstNode for StringValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::StringValue
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![
            ("value", Property::Str(&self.value)),
            ("block", Property::Bool(self.block)),
        ]
    }
}

impl ValueNode for StringValue {
    type Literal = str;

    fn value(&self) -> &str {
        self.value.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue {
    pub loc: Option<Arc<Location>>,
    pub value: bool,
}

#[inherent]
impl AstNode for BooleanValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::BooleanValue
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![("value", Property::Bool(self.value))]
    }
}

impl ValueNode for BooleanValue {
    type Literal = bool;

    fn value(&self) -> &bool {
        &self.value
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NullValue {
    pub loc: Option<Arc<Location>>,
}

#[inherent]
impl AstNode for NullValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::NullValue
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![]
    }
}

impl ValueNode for NullValue {
    type Literal = ();

    fn value(&self) -> &() {
        &()
    }
}

/// An enum literal (an unquoted name other than `true`/`false`/`null`).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub loc: Option<Arc<Location>>,
    pub value: String,
}

#[inherent]
impl AstNode for EnumValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::EnumValue
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![("value", Property::Str(&self.value))]
    }
}

impl ValueNode for EnumValue {
    type Literal = str;

    fn value(&self) -> &str {
        self.value.as_str()
    }
}

// =========================================================
// Compound literals
// =========================================================

#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    pub loc: Option<Arc<Location>>,
    pub values: NodeList<Value>,
}

#[inherent]
impl AstNode for ListValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ListValue
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![("values", Property::nodes(&self.values))]
    }
}

impl ValueNode for ListValue {
    type Literal = NodeList<Value>;

    fn value(&self) -> &NodeList<Value> {
        &self.values
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub fields: NodeList<ObjectField>,
    pub loc: Option<Arc<Location>>,
}

#[inherent]
impl AstNode for ObjectValue {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectValue
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![("fields", Property::nodes(&self.fields))]
    }
}

impl ValueNode for ObjectValue {
    type Literal = NodeList<ObjectField>;

    fn value(&self) -> &NodeList<ObjectField> {
        &self.fields
    }
}

/// One `name: value` entry of an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub loc: Option<Arc<Location>>,
    pub name: Name,
    pub value: Value,
}

#[inherent]
impl AstNode for ObjectField {
    pub fn kind(&self) -> NodeKind {
        NodeKind::ObjectField
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
// Variables
// =========================================================

/// A `$name` reference to an operation variable.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub loc: Option<Arc<Location>>,
    pub name: Name,
}

#[inherent]
impl AstNode for Variable {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Variable
    }

    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_deref()
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![("name", Property::node(&self.name))]
    }
}
