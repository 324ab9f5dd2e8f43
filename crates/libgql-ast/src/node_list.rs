use crate::AstNode;
use crate::Location;
use crate::NodeKind;
use crate::Property;
use inherent::inherent;

/// An ordered sequence of nodes that is itself a node.
///
/// Typed child positions use `NodeList<T>` for a concrete child type
/// (`NodeList<Argument>`, `NodeList<Directive>`, ...), while
/// `NodeList<Node>` holds an arbitrary, heterogeneous mix.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NodeList<T> {
    nodes: Vec<T>,
}

impl<T> NodeList<T> {
    pub fn new(nodes: Vec<T>) -> Self {
        Self { nodes }
    }

    pub fn create(nodes: impl IntoIterator<Item = T>) -> Self {
        Self::new(nodes.into_iter().collect())
    }

    pub fn as_slice(&self) -> &[T] {
        self.nodes.as_slice()
    }

    pub fn count(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.nodes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.nodes.get_mut(index)
    }

    pub fn into_inner(self) -> Vec<T> {
        self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.nodes.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn push(&mut self, node: T) {
        self.nodes.push(node)
    }

    /// Removes `length` nodes starting at `offset`, inserting
    /// `replacement` in their place, and returns the removed nodes as a
    /// new list.
    ///
    /// `offset` and `length` are clamped to the current bounds, so an
    /// out-of-range `offset` appends the replacement and removes nothing.
    pub fn splice(
        &mut self,
        offset: usize,
        length: usize,
        replacement: impl IntoIterator<Item = T>,
    ) -> NodeList<T> {
        let start = offset.min(self.nodes.len());
        let end = start.saturating_add(length).min(self.nodes.len());
        let removed: Vec<T> =
            self.nodes.splice(start..end, replacement).collect();
        NodeList::new(removed)
    }
}

impl<T: Clone> NodeList<T> {
    /// A new list holding this list's nodes followed by `other`'s. Neither
    /// input is modified and duplicates are kept.
    pub fn merge(&self, other: &NodeList<T>) -> NodeList<T> {
        let mut nodes = Vec::with_capacity(self.len() + other.len());
        nodes.extend(self.nodes.iter().cloned());
        nodes.extend(other.nodes.iter().cloned());
        NodeList::new(nodes)
    }
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        Self::new(vec![])
    }
}

impl<T> From<Vec<T>> for NodeList<T> {
    fn from(nodes: Vec<T>) -> Self {
        Self::new(nodes)
    }
}

impl<T> FromIterator<T> for NodeList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::create(iter)
    }
}

impl<T> IntoIterator for NodeList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NodeList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl<T> std::ops::Index<usize> for NodeList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.nodes[index]
    }
}

#[inherent]
impl<T: AstNode> AstNode for NodeList<T> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::List
    }

    pub fn loc(&self) -> Option<&Location> {
        None
    }

    pub fn properties(&self) -> Vec<(&'static str, Property<'_>)> {
        vec![("nodes", Property::nodes(self))]
    }

    pub fn is_list(&self) -> bool {
        true
    }
}
