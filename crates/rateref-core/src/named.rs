//! Lookup of values by unique name.
//!
//! A [`NamedRegistry`] aggregates the entries of one or more
//! [`NamedProvider`]s the first time it is queried. After that the
//! catalog is immutable and safe to read from any thread without locking.
//!
//! # Example
//!
//! ```rust
//! use rateref_core::named::{ListProvider, Named, NamedRegistry};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Venue(String);
//!
//! impl Named for Venue {
//!     fn name(&self) -> &str {
//!         &self.0
//!     }
//! }
//!
//! let registry = NamedRegistry::new("Venue").with_provider(
//!     ListProvider::new("builtin", vec![Venue("XLON".into()), Venue("XNYS".into())])
//!         .with_alternate_name("LSE", "XLON"),
//! );
//!
//! assert_eq!(registry.lookup("XLON").unwrap().name(), "XLON");
//! assert_eq!(registry.lookup("LSE").unwrap().name(), "XLON");
//! assert!(registry.lookup("XPAR").is_err());
//! ```
//!
//! # Providers
//!
//! Providers are called once, in registration order, while the catalog is
//! being built. A provider must not query the registry it is feeding.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;

use crate::error::{require_name, RateRefError, RateRefResult};

/// A value identified by a unique, non-empty name.
pub trait Named {
    /// The unique name of this value.
    fn name(&self) -> &str;
}

/// A source of named values.
pub trait NamedProvider<T>: Send + Sync {
    /// Name of the provider, reported in conflict errors.
    fn provider_name(&self) -> &str;

    /// The values this provider contributes.
    fn entries(&self) -> RateRefResult<Vec<T>>;

    /// Alternate names as `(alias, canonical name)` pairs.
    fn alternate_names(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

impl<T, P> NamedProvider<T> for &'static P
where
    P: NamedProvider<T> + ?Sized,
{
    fn provider_name(&self) -> &str {
        (**self).provider_name()
    }

    fn entries(&self) -> RateRefResult<Vec<T>> {
        (**self).entries()
    }

    fn alternate_names(&self) -> Vec<(String, String)> {
        (**self).alternate_names()
    }
}

/// A provider over a fixed list of values.
#[derive(Debug, Clone)]
pub struct ListProvider<T> {
    name: String,
    entries: Vec<T>,
    alternates: Vec<(String, String)>,
}

impl<T> ListProvider<T> {
    /// Creates a provider over the given values.
    pub fn new(name: impl Into<String>, entries: Vec<T>) -> Self {
        Self {
            name: name.into(),
            entries,
            alternates: Vec::new(),
        }
    }

    /// Adds an alternate name for one of the values.
    pub fn with_alternate_name(
        mut self,
        alias: impl Into<String>,
        canonical: impl Into<String>,
    ) -> Self {
        self.alternates.push((alias.into(), canonical.into()));
        self
    }
}

impl<T: Clone + Send + Sync> NamedProvider<T> for ListProvider<T> {
    fn provider_name(&self) -> &str {
        &self.name
    }

    fn entries(&self) -> RateRefResult<Vec<T>> {
        Ok(self.entries.clone())
    }

    fn alternate_names(&self) -> Vec<(String, String)> {
        self.alternates.clone()
    }
}

struct Providers<T> {
    list: Vec<Arc<dyn NamedProvider<T>>>,
    frozen: bool,
}

struct Catalog<T> {
    entries: BTreeMap<String, T>,
    alternates: BTreeMap<String, String>,
}

/// A lazily built catalog of named values.
///
/// Names are case-sensitive. Alternate names resolve to the same value as
/// their canonical name but are not listed by [`all_names`](Self::all_names).
pub struct NamedRegistry<T> {
    kind: &'static str,
    providers: Mutex<Providers<T>>,
    catalog: OnceLock<RateRefResult<Catalog<T>>>,
}

impl<T> NamedRegistry<T>
where
    T: Named + PartialEq,
{
    /// Creates an empty registry. `kind` names the values in errors and logs.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            providers: Mutex::new(Providers {
                list: Vec::new(),
                frozen: false,
            }),
            catalog: OnceLock::new(),
        }
    }

    /// Adds a provider while constructing the registry.
    pub fn with_provider(self, provider: impl NamedProvider<T> + 'static) -> Self {
        self.providers.lock().list.push(Arc::new(provider));
        self
    }

    /// Adds a provider.
    ///
    /// Fails with a conflict once the catalog has been built, since the
    /// provider's entries could no longer be seen.
    pub fn register(&self, provider: impl NamedProvider<T> + 'static) -> RateRefResult<()> {
        let mut providers = self.providers.lock();
        if providers.frozen {
            return Err(RateRefError::conflict(
                self.kind,
                provider.provider_name(),
                "registry already initialized",
            ));
        }
        tracing::debug!(
            kind = self.kind,
            provider = provider.provider_name(),
            "Provider registered"
        );
        providers.list.push(Arc::new(provider));
        Ok(())
    }

    /// The kind of value held by this registry.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Returns true once the catalog has been built, successfully or not.
    pub fn is_initialized(&self) -> bool {
        self.catalog.get().is_some()
    }

    /// Looks up a value by canonical or alternate name.
    pub fn lookup(&self, name: &str) -> RateRefResult<&T> {
        require_name("name", name)?;
        let catalog = self.catalog()?;
        catalog
            .entries
            .get(name)
            .or_else(|| {
                catalog
                    .alternates
                    .get(name)
                    .and_then(|canonical| catalog.entries.get(canonical))
            })
            .ok_or_else(|| RateRefError::not_found(self.kind, name))
    }

    /// All canonical names, sorted.
    pub fn all_names(&self) -> RateRefResult<BTreeSet<String>> {
        Ok(self.catalog()?.entries.keys().cloned().collect())
    }

    /// Alternate names mapped to their canonical names.
    pub fn alternate_names(&self) -> RateRefResult<BTreeMap<String, String>> {
        Ok(self.catalog()?.alternates.clone())
    }

    /// All values in name order.
    pub fn iter(&self) -> RateRefResult<impl Iterator<Item = &T>> {
        Ok(self.catalog()?.entries.values())
    }

    /// Number of distinct canonical names.
    pub fn len(&self) -> RateRefResult<usize> {
        Ok(self.catalog()?.entries.len())
    }

    /// Returns true if no provider supplied any value.
    pub fn is_empty(&self) -> RateRefResult<bool> {
        Ok(self.len()? == 0)
    }

    fn catalog(&self) -> RateRefResult<&Catalog<T>> {
        self.catalog
            .get_or_init(|| self.aggregate())
            .as_ref()
            .map_err(RateRefError::clone)
    }

    fn aggregate(&self) -> RateRefResult<Catalog<T>> {
        let providers = {
            let mut guard = self.providers.lock();
            guard.frozen = true;
            guard.list.clone()
        };

        let mut entries: BTreeMap<String, T> = BTreeMap::new();
        let mut origins: BTreeMap<String, String> = BTreeMap::new();
        let mut pending_alternates = Vec::new();

        for provider in &providers {
            let source = provider.provider_name();
            let supplied = provider.entries()?;
            tracing::debug!(
                kind = self.kind,
                provider = source,
                count = supplied.len(),
                "Loading provider entries"
            );

            for entry in supplied {
                let name = entry.name().to_string();
                require_name("name", &name)?;
                if let Some(existing) = entries.get(&name) {
                    let first = origins.get(&name).map_or("", String::as_str);
                    if *existing == entry {
                        tracing::debug!(
                            kind = self.kind,
                            name = %name,
                            provider = source,
                            "Duplicate entry ignored"
                        );
                        continue;
                    }
                    return Err(RateRefError::conflict(
                        self.kind,
                        name,
                        format!("defined differently by providers '{first}' and '{source}'"),
                    ));
                }
                origins.insert(name.clone(), source.to_string());
                entries.insert(name, entry);
            }

            pending_alternates.extend(
                provider
                    .alternate_names()
                    .into_iter()
                    .map(|(alias, canonical)| (alias, canonical, source.to_string())),
            );
        }

        let mut alternates: BTreeMap<String, String> = BTreeMap::new();
        for (alias, canonical, source) in pending_alternates {
            require_name("alternate name", &alias)?;
            if entries.contains_key(&alias) {
                return Err(RateRefError::conflict(
                    self.kind,
                    alias,
                    format!("alternate name from '{source}' shadows a canonical name"),
                ));
            }
            if !entries.contains_key(&canonical) {
                return Err(RateRefError::conflict(
                    self.kind,
                    alias,
                    format!("alternate name from '{source}' refers to unknown '{canonical}'"),
                ));
            }
            match alternates.get(&alias) {
                Some(existing) if *existing != canonical => {
                    return Err(RateRefError::conflict(
                        self.kind,
                        alias,
                        format!("alternate name maps to both '{existing}' and '{canonical}'"),
                    ));
                }
                Some(_) => {}
                None => {
                    alternates.insert(alias, canonical);
                }
            }
        }

        tracing::info!(
            kind = self.kind,
            providers = providers.len(),
            entries = entries.len(),
            alternates = alternates.len(),
            "Registry initialized"
        );

        Ok(Catalog {
            entries,
            alternates,
        })
    }
}

impl<T> fmt::Debug for NamedRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedRegistry")
            .field("kind", &self.kind)
            .field("initialized", &self.catalog.get().is_some())
            .finish_non_exhaustive()
    }
}
