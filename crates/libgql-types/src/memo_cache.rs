use crate::ResolutionError;
use crate::TypeLoader;
use crate::types::GraphQLType;
use indexmap::IndexMap;
use std::cell::RefCell;

type Result<T> = std::result::Result<T, ResolutionError>;

/// An insert-once, never-evicted cache keyed by name.
///
/// Values are computed by [`MemoCache::get_or_try_init()`] at most once per
/// key (barring re-entrant initialization of the same key, in which case
/// the first value stored wins). No borrow of the cache is held while an
/// initializer runs, so initializers may consult the same cache.
///
/// Not `Sync`: callers sharing one cache across threads must provide
/// their own mutual exclusion.
#[derive(Debug)]
pub struct MemoCache<V> {
    entries: RefCell<IndexMap<String, V>>,
}
impl<V: Clone> MemoCache<V> {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(IndexMap::new()),
        }
    }

    /// A cache pre-populated with `entries`.
    pub fn seeded(entries: impl IntoIterator<Item = (String, V)>) -> Self {
        Self {
            entries: RefCell::new(entries.into_iter().collect()),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.entries.borrow().get(key).cloned()
    }

    /// Returns the cached value for `key`, computing and storing it with
    /// `init` first if there is none. A failed `init` stores nothing.
    pub fn get_or_try_init<E>(
        &self,
        key: &str,
        init: impl FnOnce() -> std::result::Result<V, E>,
    ) -> std::result::Result<V, E> {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }
        let value = init()?;
        let mut entries = self.entries.borrow_mut();
        Ok(entries.entry(key.to_string()).or_insert(value).clone())
    }

    /// Infallible form of [`MemoCache::get_or_try_init()`].
    pub fn get_or_init(&self, key: &str, init: impl FnOnce() -> V) -> V {
        if let Some(value) = self.get(key) {
            return value;
        }
        let value = init();
        let mut entries = self.entries.borrow_mut();
        entries.entry(key.to_string()).or_insert(value).clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Cached keys, in the order they were first stored.
    pub fn keys(&self) -> Vec<String> {
        self.entries.borrow().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}
impl<V: Clone> Default for MemoCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// What one call to the wrapped loader produced for a name. A contract
/// violation keeps the description of the misnamed type it returned.
type LoadOutcome = std::result::Result<Option<GraphQLType>, String>;

/// Wraps a user-supplied [`TypeLoader`] so that each name is loaded at
/// most once, remembering absent results and contract violations too.
pub struct MemoizedTypeLoader<L> {
    cache: MemoCache<LoadOutcome>,
    loader: L,
}
impl<L: TypeLoader> MemoizedTypeLoader<L> {
    pub fn new(loader: L) -> Self {
        Self::seeded(loader, [])
    }

    /// A memoized loader whose cache already holds `types`; the wrapped
    /// loader is never asked for their names.
    pub fn seeded(
        loader: L,
        types: impl IntoIterator<Item = GraphQLType>,
    ) -> Self {
        Self {
            cache: MemoCache::seeded(
                types.into_iter()
                    .map(|type_| (type_.name().to_string(), Ok(Some(type_)))),
            ),
            loader,
        }
    }

    /// Whether the wrapped loader has already been consulted for `name`
    /// (or `name` was seeded), whatever the outcome.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.cache.contains(name)
    }

    /// Loads `name`, consulting the wrapped loader only the first time.
    ///
    /// Fails with [`ResolutionError::LoaderContractViolation`] if the
    /// wrapped loader returned a type whose name differs from `name`. The
    /// failure is remembered and reported again on later calls.
    pub fn load(&self, name: &str) -> Result<Option<GraphQLType>> {
        if self.cache.contains(name) {
            log::trace!("type `{name}` served from cache");
        }
        let outcome = self.cache.get_or_init(name, || {
            log::debug!("loading type `{name}`");
            match self.loader.load_type(name) {
                Some(type_) if type_.name() != name => Err(type_.describe()),
                loaded => Ok(loaded),
            }
        });
        outcome.map_err(|found| ResolutionError::LoaderContractViolation {
            requested: name.to_string(),
            found,
        })
    }

    /// Names loaded (or seeded) so far, including names that loaded as
    /// absent or broke the loader contract.
    pub fn loaded_names(&self) -> Vec<String> {
        self.cache.keys()
    }
}
