use crate::Descriptor;
use crate::MemoCache;
use crate::MemoizedTypeLoader;
use crate::TypeLoader;
use crate::resolution::ResolutionError;
use crate::resolution::TypeResolution;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use inherent::inherent;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ResolutionError>;

/// Resolution that loads types on demand from a [`Descriptor`] and a
/// [`TypeLoader`].
///
/// The descriptor's type names (plus the built-in scalars) form the name
/// universe: names outside it resolve to `None` without consulting the
/// loader. Names inside it are loaded at most once and the result,
/// including an absent one, is kept for the lifetime of the resolution.
/// Possible types are likewise computed once per abstract type, in the
/// member order stored in the descriptor.
///
/// Caches use interior mutability and are not `Sync`.
pub struct LazyResolution<L> {
    descriptor: Descriptor,
    possible_types: MemoCache<Vec<Arc<ObjectType>>>,
    types: MemoizedTypeLoader<L>,
}
impl<L: TypeLoader> LazyResolution<L> {
    pub fn new(descriptor: Descriptor, loader: L) -> Self {
        log::debug!(
            "lazy resolution built over {} type names and {} abstract types",
            descriptor.type_names().len(),
            descriptor.abstract_type_names().count(),
        );
        Self {
            descriptor,
            possible_types: MemoCache::new(),
            types: MemoizedTypeLoader::seeded(loader, GraphQLType::builtins()),
        }
    }

    /// Decodes and validates a JSON descriptor, then builds the
    /// resolution. Fails before any type is loaded if the descriptor is
    /// malformed.
    pub fn from_json(json: &str, loader: L) -> Result<Self> {
        Ok(Self::new(Descriptor::from_json(json)?, loader))
    }

    /// Like [`LazyResolution::from_json()`] for the binary descriptor
    /// encoding.
    pub fn from_bytes(bytes: &[u8], loader: L) -> Result<Self> {
        Ok(Self::new(Descriptor::from_bytes(bytes)?, loader))
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    fn is_known(&self, name: &str) -> bool {
        self.descriptor.contains_type(name)
            || GraphQLType::builtin(name).is_some()
    }

    /// Whether `name` has already been loaded (or was seeded as a
    /// built-in).
    pub fn is_loaded(&self, name: &str) -> bool {
        self.types.is_loaded(name)
    }

    /// Possible types by abstract-type name, with no check of the named
    /// type's kind.
    pub fn resolve_possible_types_by_name(
        &self,
        abstract_type_name: &str,
    ) -> Result<Vec<Arc<ObjectType>>> {
        let Some(member_names) =
            self.descriptor.possible_type_names(abstract_type_name)
        else {
            return Ok(vec![]);
        };

        self.possible_types.get_or_try_init(abstract_type_name, || {
            member_names
                .iter()
                .map(|member| match self.resolve_type(member)? {
                    Some(GraphQLType::Object(obj_type)) => Ok(obj_type),
                    other => Err(ResolutionError::InvalidPossibleType {
                        abstract_type: abstract_type_name.to_string(),
                        member: member.to_string(),
                        found: other.as_ref().map_or_else(
                            || "nothing".to_string(),
                            GraphQLType::describe,
                        ),
                    }),
                })
                .collect()
        })
    }
}

#[inherent]
impl<L: TypeLoader> TypeResolution for LazyResolution<L> {
    pub fn resolve_type(&self, name: &str) -> Result<Option<GraphQLType>> {
        if !self.is_known(name) {
            return Ok(None);
        }
        self.types.load(name)
    }

    pub fn resolve_possible_types(
        &self,
        abstract_type: &GraphQLType,
    ) -> Result<Vec<Arc<ObjectType>>> {
        self.resolve_possible_types_by_name(abstract_type.name())
    }
}
