use crate::TypeLoader;
use crate::types::GraphQLType;

/// A by-name reference from one type definition to another.
///
/// Type definitions never point at each other directly, so a set of
/// definitions is plain acyclic data; a reference is de-referenced by
/// asking some [`TypeLoader`] (or a resolution's type map) for the name.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedGraphQLTypeRef {
    name: String,
}
impl NamedGraphQLTypeRef {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().to_string(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Look the referenced type up, falling back to the built-in scalars.
    pub fn deref(&self, loader: &dyn TypeLoader) -> Option<GraphQLType> {
        GraphQLType::builtin(self.name())
            .or_else(|| loader.load_type(self.name()))
    }
}
