//! Process-wide registry of overnight indices.
//!
//! The registry starts with the [`StandardOvernightIndices`] and every
//! provider submitted through [`inventory`]. Further providers can be added
//! with [`OvernightIndex::register_provider`] until the first lookup.
//!
//! ```rust,ignore
//! static MY_INDICES: MyIndices = MyIndices;
//! inventory::submit! { rateref_index::OvernightIndexProviderReg(&MY_INDICES) }
//! ```

use std::sync::OnceLock;

use rateref_core::named::{NamedProvider, NamedRegistry};
use rateref_core::RateRefResult;

use crate::overnight::OvernightIndex;
use crate::standard::StandardOvernightIndices;

/// Registration of an index provider discovered at startup.
pub struct OvernightIndexProviderReg(pub &'static dyn NamedProvider<OvernightIndex>);

inventory::collect!(OvernightIndexProviderReg);

static REGISTRY: OnceLock<NamedRegistry<OvernightIndex>> = OnceLock::new();

fn build_registry() -> NamedRegistry<OvernightIndex> {
    let mut registry =
        NamedRegistry::new("OvernightIndex").with_provider(StandardOvernightIndices);
    for reg in inventory::iter::<OvernightIndexProviderReg> {
        tracing::debug!(provider = reg.0.provider_name(), "Discovered index provider");
        registry = registry.with_provider(reg.0);
    }
    registry
}

impl OvernightIndex {
    /// Looks up an index by name or alternate name.
    ///
    /// This is the inverse of [`OvernightIndex::name`]: for every registered
    /// index, `OvernightIndex::of(index.name())` returns that index.
    ///
    /// # Errors
    ///
    /// `NotFound` for unknown names, `InvalidArgument` for an empty name,
    /// or the `Conflict` raised while building the registry.
    pub fn of(name: &str) -> RateRefResult<&'static OvernightIndex> {
        Self::registry().lookup(name)
    }

    /// The global index registry.
    pub fn registry() -> &'static NamedRegistry<OvernightIndex> {
        REGISTRY.get_or_init(build_registry)
    }

    /// Adds a provider to the global registry.
    ///
    /// # Errors
    ///
    /// `Conflict` if the registry has already been queried.
    pub fn register_provider(
        provider: impl NamedProvider<OvernightIndex> + 'static,
    ) -> RateRefResult<()> {
        Self::registry().register(provider)
    }

    /// Every registered index, in name order.
    pub fn all() -> RateRefResult<Vec<&'static OvernightIndex>> {
        Ok(Self::registry().iter()?.collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Index;

    #[test]
    fn test_of_round_trip() {
        for index in OvernightIndex::all().unwrap() {
            assert_eq!(OvernightIndex::of(index.name()).unwrap(), index);
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = OvernightIndex::of("NOT-A-REAL-INDEX").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_alternate_name() {
        let sofr = OvernightIndex::of("SOFR").unwrap();
        assert_eq!(sofr.name(), "USD-SOFR");
        assert_eq!(sofr.standard_id().to_string(), "OG-Index~USD-SOFR");
    }

    #[test]
    fn test_registration_after_lookup_fails() {
        OvernightIndex::of("GBP-SONIA").unwrap();
        let late = rateref_core::named::ListProvider::<OvernightIndex>::new("late", Vec::new());
        assert!(OvernightIndex::register_provider(late)
            .unwrap_err()
            .is_conflict());
    }
}
