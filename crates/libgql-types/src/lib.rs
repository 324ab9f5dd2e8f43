//! Live GraphQL type definitions and the two strategies for resolving type
//! names to them.
//!
//! [`EagerResolution`] walks the whole type graph reachable from a set of
//! root types once, up front. [`LazyResolution`] starts from a compact
//! [`Descriptor`] (the set of known type names plus abstract-type
//! membership, typically produced by [`EagerResolution::descriptor()`] and
//! persisted) and loads each type on first use through a caller-supplied
//! [`TypeLoader`]. Both implement [`TypeResolution`].
//!
//! [`SchemaConfig`] gathers the inputs a schema is built from and picks
//! the resolution strategy.

mod descriptor;
mod extractor;
mod loader;
mod memo_cache;
pub mod resolution;
mod schema_config;
pub mod types;

pub use descriptor::DESCRIPTOR_VERSION;
pub use descriptor::Descriptor;
pub use descriptor::DescriptorError;
pub use descriptor::NameSet;
pub use descriptor::RawDescriptor;
pub use extractor::ReachableTypesExtractor;
pub use extractor::TypeExtractor;
pub use extractor::TypeMap;
pub use loader::TypeCatalog;
pub use loader::TypeLoader;
pub use memo_cache::MemoCache;
pub use memo_cache::MemoizedTypeLoader;
pub use resolution::EagerResolution;
pub use resolution::LazyResolution;
pub use resolution::ResolutionError;
pub use resolution::TypeResolution;
pub use schema_config::SchemaConfig;
pub use schema_config::SchemaConfigError;
pub use schema_config::SchemaConfigOptions;
pub use schema_config::TypesSource;

#[cfg(test)]
mod tests;
