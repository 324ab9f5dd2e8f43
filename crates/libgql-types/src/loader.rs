use crate::ResolutionError;
use crate::types::GraphQLType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ResolutionError>;

/// Caller-supplied capability that maps a type name to its definition.
///
/// Implementations must return either the type whose name is exactly
/// `name` or `None`, and must answer the same way every time they are
/// asked about the same name. Any closure
/// `Fn(&str) -> Option<GraphQLType>` is a `TypeLoader`.
///
/// A loader may block (for example on I/O); resolution calls it
/// synchronously and applies no timeout or retry.
pub trait TypeLoader {
    fn load_type(&self, name: &str) -> Option<GraphQLType>;
}
impl<F> TypeLoader for F
where
    F: Fn(&str) -> Option<GraphQLType>,
{
    fn load_type(&self, name: &str) -> Option<GraphQLType> {
        self(name)
    }
}

/// An in-memory, insertion-ordered collection of type definitions that
/// can serve as a [`TypeLoader`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypeCatalog {
    types: IndexMap<String, GraphQLType>,
}
impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from `types`, failing on the first pair of
    /// distinct definitions that share a name.
    pub fn from_types(
        types: impl IntoIterator<Item = GraphQLType>,
    ) -> Result<Self> {
        let mut catalog = Self::new();
        for type_ in types {
            catalog.add_type(type_)?;
        }
        Ok(catalog)
    }

    /// Adds a type. Re-adding an identical definition is a no-op; adding
    /// a different definition under an existing name fails.
    pub fn add_type(&mut self, type_: GraphQLType) -> Result<()> {
        if let Some(existing) = self.types.get(type_.name()) {
            if *existing == type_ {
                return Ok(());
            }
            return Err(ResolutionError::DuplicateTypeName {
                type_name: type_.name().to_string(),
            });
        }
        self.types.insert(type_.name().to_string(), type_);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// All types, in the order they were added.
    pub fn types(&self) -> impl Iterator<Item = &GraphQLType> {
        self.types.values()
    }
}
impl TypeLoader for TypeCatalog {
    fn load_type(&self, name: &str) -> Option<GraphQLType> {
        self.types.get(name).cloned()
    }
}
