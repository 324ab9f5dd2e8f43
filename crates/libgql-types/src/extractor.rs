use crate::ResolutionError;
use crate::TypeLoader;
use crate::types::Field;
use crate::types::GraphQLType;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, ResolutionError>;

/// Name -> type map, in discovery order.
pub type TypeMap = IndexMap<String, GraphQLType>;

/// Capability that discovers every named type reachable from a root and
/// records it in a [`TypeMap`].
pub trait TypeExtractor {
    fn extract_types(
        &self,
        root: &GraphQLType,
        type_map: &mut TypeMap,
    ) -> Result<()>;
}

/// The default [`TypeExtractor`]: a depth-first walk over by-name
/// references, de-referenced through a [`TypeLoader`].
///
/// For each newly discovered type the walk visits, in declaration order:
/// union members; declared interfaces; each field's parameter types
/// followed by the field's own type; input-field types. The resulting
/// [`TypeMap`] order is therefore the discovery order of this walk.
///
/// A reference the loader cannot satisfy is fatal, as is finding two
/// distinct definitions under one name. Re-discovering an identical
/// definition is fine.
pub struct ReachableTypesExtractor<'a> {
    loader: &'a dyn TypeLoader,
}
impl<'a> ReachableTypesExtractor<'a> {
    pub fn new(loader: &'a dyn TypeLoader) -> Self {
        Self { loader }
    }

    fn visit_type(
        &self,
        type_: &GraphQLType,
        type_map: &mut TypeMap,
    ) -> Result<()> {
        let type_name = type_.name();
        if let Some(existing) = type_map.get(type_name) {
            if existing == type_ {
                return Ok(());
            }
            return Err(ResolutionError::DuplicateTypeName {
                type_name: type_name.to_string(),
            });
        }
        type_map.insert(type_name.to_string(), type_.clone());
        log::trace!("discovered type `{type_name}`");

        for referenced_name in referenced_type_names(type_) {
            self.visit_name(referenced_name, type_name, type_map)?;
        }
        Ok(())
    }

    fn visit_name(
        &self,
        type_name: &str,
        referenced_by: &str,
        type_map: &mut TypeMap,
    ) -> Result<()> {
        if type_map.contains_key(type_name) {
            return Ok(());
        }

        let type_ = GraphQLType::builtin(type_name)
            .or_else(|| self.loader.load_type(type_name))
            .ok_or_else(|| ResolutionError::DanglingTypeReference {
                type_name: type_name.to_string(),
                referenced_by: referenced_by.to_string(),
            })?;
        if type_.name() != type_name {
            return Err(ResolutionError::LoaderContractViolation {
                requested: type_name.to_string(),
                found: type_.describe(),
            });
        }

        self.visit_type(&type_, type_map)
    }
}
impl TypeExtractor for ReachableTypesExtractor<'_> {
    fn extract_types(
        &self,
        root: &GraphQLType,
        type_map: &mut TypeMap,
    ) -> Result<()> {
        self.visit_type(root, type_map)
    }
}

fn referenced_type_names(type_: &GraphQLType) -> Vec<&str> {
    match type_ {
        GraphQLType::Bool
        | GraphQLType::Enum(_)
        | GraphQLType::Float
        | GraphQLType::ID
        | GraphQLType::Int
        | GraphQLType::Scalar(_)
        | GraphQLType::String => vec![],

        GraphQLType::Union(union_type) => union_type.member_type_names(),

        GraphQLType::Interface(iface_type) => field_type_names(
            iface_type.interface_names(),
            iface_type.fields(),
        ),

        GraphQLType::Object(obj_type) => field_type_names(
            obj_type.interface_names(),
            obj_type.fields(),
        ),

        GraphQLType::InputObject(input_type) => input_type
            .fields()
            .values()
            .map(|field| field.type_annotation().innermost_type_name())
            .collect(),
    }
}

fn field_type_names<'a>(
    mut names: Vec<&'a str>,
    fields: &'a IndexMap<String, Field>,
) -> Vec<&'a str> {
    for field in fields.values() {
        names.extend(
            field.parameters()
                .values()
                .map(|param| param.type_annotation().innermost_type_name()),
        );
        names.push(field.type_annotation().innermost_type_name());
    }
    names
}
