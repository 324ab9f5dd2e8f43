use crate::Descriptor;
use crate::ReachableTypesExtractor;
use crate::TypeCatalog;
use crate::TypeExtractor;
use crate::TypeLoader;
use crate::TypeMap;
use crate::resolution::ResolutionError;
use crate::resolution::TypeResolution;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use indexmap::IndexMap;
use inherent::inherent;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ResolutionError>;

/// Resolution over the full type graph reachable from a set of roots,
/// computed once at construction.
///
/// The type map holds the built-in scalars followed by every discovered
/// type in discovery order. Interface implementors are listed in that
/// same order: an object type is appended to each interface it declares
/// as the object type is reached in the type map.
#[derive(Clone, Debug)]
pub struct EagerResolution {
    implementations: IndexMap<String, Vec<Arc<ObjectType>>>,
    type_map: TypeMap,
}
impl EagerResolution {
    /// Builds a resolution from `roots`, where every type referenced by
    /// name (directly or transitively) must itself be one of `roots`.
    pub fn new(roots: &[GraphQLType]) -> Result<Self> {
        let catalog = TypeCatalog::from_types(roots.iter().cloned())?;
        Self::with_loader(roots, &catalog)
    }

    /// Builds a resolution from `roots`, de-referencing type names that
    /// are not roots through `loader`.
    pub fn with_loader(
        roots: &[GraphQLType],
        loader: &dyn TypeLoader,
    ) -> Result<Self> {
        Self::with_extractor(roots, &ReachableTypesExtractor::new(loader))
    }

    /// Builds a resolution from `roots` using a custom discovery walk.
    pub fn with_extractor(
        roots: &[GraphQLType],
        extractor: &dyn TypeExtractor,
    ) -> Result<Self> {
        let mut type_map: TypeMap = GraphQLType::builtins()
            .into_iter()
            .map(|type_| (type_.name().to_string(), type_))
            .collect();
        for root in roots {
            extractor.extract_types(root, &mut type_map)?;
        }

        let mut implementations: IndexMap<String, Vec<Arc<ObjectType>>> =
            IndexMap::new();
        for type_ in type_map.values() {
            if let GraphQLType::Object(obj_type) = type_ {
                for iface_name in obj_type.interface_names() {
                    implementations
                        .entry(iface_name.to_string())
                        .or_default()
                        .push(Arc::clone(obj_type));
                }
            }
        }

        log::debug!(
            "eager resolution built: {} types, {} implemented interfaces",
            type_map.len(),
            implementations.len(),
        );
        Ok(Self {
            implementations,
            type_map,
        })
    }

    /// Snapshot of the type universe and abstract-type membership, free
    /// of type definitions.
    ///
    /// Unions record their declared members. Interfaces record their
    /// implementors, in the same order `resolve_possible_types()` returns
    /// them. Abstract types without members get no entry, which lazy
    /// resolution answers with an empty list.
    pub fn descriptor(&self) -> Descriptor {
        let mut descriptor = Descriptor::new();
        for (name, type_) in &self.type_map {
            descriptor.add_type_name(name.as_str());
            match type_ {
                GraphQLType::Union(union_type) => {
                    for member in union_type.member_type_names() {
                        descriptor.add_possible_type(name.as_str(), member);
                    }
                },
                GraphQLType::Interface(_) => {
                    let implementors = self.implementations
                        .get(name)
                        .map(Vec::as_slice)
                        .unwrap_or_default();
                    for obj_type in implementors {
                        descriptor.add_possible_type(
                            name.as_str(),
                            obj_type.name(),
                        );
                    }
                },
                _ => (),
            }
        }
        descriptor
    }

    /// The discovered types (built-ins first), in discovery order.
    pub fn type_map(&self) -> &TypeMap {
        &self.type_map
    }
}

#[inherent]
impl TypeResolution for EagerResolution {
    pub fn resolve_type(&self, name: &str) -> Result<Option<GraphQLType>> {
        Ok(self.type_map.get(name).cloned())
    }

    pub fn resolve_possible_types(
        &self,
        abstract_type: &GraphQLType,
    ) -> Result<Vec<Arc<ObjectType>>> {
        let type_name = abstract_type.name();
        let Some(stored_type) = self.type_map.get(type_name) else {
            return Ok(vec![]);
        };

        match stored_type {
            GraphQLType::Union(union_type) => union_type
                .member_type_names()
                .into_iter()
                .map(|member| match self.type_map.get(member) {
                    Some(GraphQLType::Object(obj_type)) =>
                        Ok(Arc::clone(obj_type)),
                    other => Err(ResolutionError::InvalidPossibleType {
                        abstract_type: type_name.to_string(),
                        member: member.to_string(),
                        found: other.map_or_else(
                            || "nothing".to_string(),
                            GraphQLType::describe,
                        ),
                    }),
                })
                .collect(),

            GraphQLType::Interface(_) => Ok(
                self.implementations
                    .get(type_name)
                    .cloned()
                    .unwrap_or_default()
            ),

            _ => Err(ResolutionError::NotAnAbstractType {
                type_name: type_name.to_string(),
                kind: stored_type.kind(),
            }),
        }
    }
}
