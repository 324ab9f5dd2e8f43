use crate::DescriptorError;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

/// Invariant violations raised while building or querying a type
/// resolution. Looking up a name that is simply unknown is never an
/// error.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error(
        "Type `{type_name}` referenced by `{referenced_by}` could not be \
        found"
    )]
    DanglingTypeReference {
        type_name: String,
        referenced_by: String,
    },

    #[error("Schema must contain unique named types but contains multiple types named `{type_name}`")]
    DuplicateTypeName {
        type_name: String,
    },

    #[error("Invalid resolution descriptor: {0}")]
    Descriptor(#[from] DescriptorError),

    #[error(
        "Possible type `{member}` of abstract type `{abstract_type}` must be \
        an Object type, found {found}"
    )]
    InvalidPossibleType {
        abstract_type: String,
        member: String,
        found: String,
    },

    #[error(
        "Type loader returned {found} when asked for type `{requested}`; \
        it must return the type with that exact name or nothing"
    )]
    LoaderContractViolation {
        requested: String,
        found: String,
    },

    #[error("Possible types can only be resolved for abstract types, but `{type_name}` is {kind}")]
    NotAnAbstractType {
        type_name: String,
        kind: GraphQLTypeKind,
    },
}
