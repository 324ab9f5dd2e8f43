use crate::LocSpan;
use crate::Location;
use crate::NodeKind;
use crate::NodeList;
use indexmap::IndexMap;
use serde_json::Map;
use serde_json::Value as JsonValue;

/// Trait implemented by every node of the tree (and by the
/// [`Node`](crate::Node) union and its typed sub-unions).
///
/// Each node type implements this via `#[inherent] impl AstNode`, so the
/// accessors are callable without importing the trait, while generic code
/// (dumpers, printers, equality checks) can work over `&dyn AstNode`.
///
/// [`AstNode::properties()`] is the per-variant field table: it lists the
/// node's fields in a fixed order and is the only thing the generic tree
/// operations below rely on.
pub trait AstNode: std::fmt::Debug {
    /// The discriminator of this node.
    fn kind(&self) -> NodeKind;

    /// Source-location metadata, if the node was produced from source text.
    fn loc(&self) -> Option<&Location>;

    /// The node's fields (excluding `kind` and `loc`) in declaration order.
    fn properties(&self) -> Vec<(&'static str, Property<'_>)>;

    /// `true` only for [`NodeList`].
    fn is_list(&self) -> bool {
        false
    }

    /// Shallow view of this node: its fields as borrowed [`Property`]
    /// values plus the `{start, end}` of its location.
    fn to_array(&self) -> ShallowArray<'_> {
        ShallowArray {
            kind: self.kind(),
            loc: self.loc().map(Location::span),
            properties: self.properties().into_iter().collect(),
        }
    }

    /// Fully nested dump of this node.
    ///
    /// Every level carries `"kind"` and (when present) `"loc"`. Absent
    /// optional fields are omitted; list fields become arrays of dumps.
    /// Does not terminate on cyclic input.
    fn to_array_recursive(&self) -> JsonValue {
        let mut map = Map::new();
        map.insert("kind".to_string(), JsonValue::from(self.kind().as_str()));
        if let Some(loc) = self.loc() {
            map.insert("loc".to_string(), span_to_json(loc.span()));
        }
        for (name, property) in self.properties() {
            let value = match property {
                Property::Null => continue,
                Property::Bool(b) => JsonValue::Bool(b),
                Property::Str(s) => JsonValue::String(s.to_string()),
                Property::Node(node) => node.to_array_recursive(),
                Property::Nodes(nodes) => JsonValue::Array(
                    nodes.into_iter()
                        .map(|node| node.to_array_recursive())
                        .collect(),
                ),
            };
            map.insert(name.to_string(), value);
        }
        JsonValue::Object(map)
    }

    /// Detached copy of this subtree.
    ///
    /// Every child node and every [`NodeList`] is copied; [`Location`]s
    /// (and the tokens/source they point at) are shared with the
    /// original.
    fn clone_deep(&self) -> Self
    where
        Self: Clone + Sized,
    {
        self.clone()
    }
}

fn span_to_json(span: LocSpan) -> JsonValue {
    serde_json::json!({
        "start": span.start,
        "end": span.end,
    })
}

/// A borrowed view of one field of a node.
#[derive(Debug)]
pub enum Property<'a> {
    /// An optional field that is absent.
    Null,
    Bool(bool),
    Str(&'a str),
    Node(&'a dyn AstNode),
    Nodes(Vec<&'a dyn AstNode>),
}
impl<'a> Property<'a> {
    pub fn node<T: AstNode>(node: &'a T) -> Self {
        Self::Node(node)
    }

    pub fn optional<T: AstNode>(node: Option<&'a T>) -> Self {
        match node {
            Some(node) => Self::Node(node),
            None => Self::Null,
        }
    }

    pub fn optional_str(s: Option<&'a str>) -> Self {
        match s {
            Some(s) => Self::Str(s),
            None => Self::Null,
        }
    }

    pub fn nodes<T: AstNode>(list: &'a NodeList<T>) -> Self {
        Self::Nodes(
            list.iter()
                .map(|node| node as &dyn AstNode)
                .collect(),
        )
    }

    pub fn as_node(&self) -> Option<&'a dyn AstNode> {
        match self {
            Self::Node(node) => Some(*node),
            _ => None,
        }
    }

    pub fn as_nodes(&self) -> Option<&[&'a dyn AstNode]> {
        match self {
            Self::Nodes(nodes) => Some(nodes.as_slice()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Result of [`AstNode::to_array()`].
#[derive(Debug)]
pub struct ShallowArray<'a> {
    pub kind: NodeKind,
    pub loc: Option<LocSpan>,
    pub properties: IndexMap<&'static str, Property<'a>>,
}
impl<'a> ShallowArray<'a> {
    pub fn get(&self, name: &str) -> Option<&Property<'a>> {
        self.properties.get(name)
    }
}
