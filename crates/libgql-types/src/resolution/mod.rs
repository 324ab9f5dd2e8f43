mod eager_resolution;
mod lazy_resolution;
mod resolution_error;

pub use eager_resolution::EagerResolution;
pub use lazy_resolution::LazyResolution;
pub use resolution_error::ResolutionError;

use crate::types::GraphQLType;
use crate::types::ObjectType;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ResolutionError>;

/// Maps type names to live definitions and abstract types to the object
/// types that satisfy them.
///
/// Unknown names are not errors: `resolve_type()` answers `Ok(None)` and
/// `resolve_possible_types()` answers an empty list. An `Err` always
/// signals a broken invariant (a malformed descriptor, a misbehaving
/// loader, a non-abstract type where an abstract one is required) and no
/// partial result is ever returned alongside it.
pub trait TypeResolution {
    fn resolve_type(&self, name: &str) -> Result<Option<GraphQLType>>;

    /// The object types that satisfy `abstract_type`, unique by name.
    fn resolve_possible_types(
        &self,
        abstract_type: &GraphQLType,
    ) -> Result<Vec<Arc<ObjectType>>>;
}

#[cfg(test)]
mod tests;
