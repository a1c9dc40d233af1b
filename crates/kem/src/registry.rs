//! Algorithm registry mapping stable identifiers to providers

use kemlock_api::{Error, KemProvider, Result};
use kemlock_params::{KemParams, KYBER1024, KYBER512, KYBER768};
use tracing::debug;

use crate::handle::KemHandle;
use crate::kyber::{Kyber1024Provider, Kyber512Provider, Kyber768Provider};

/// Constructor producing a fresh provider instance for one algorithm.
pub type ProviderConstructor = fn() -> Result<Box<dyn KemProvider>>;

/// One registered algorithm: capability metadata plus the constructor
/// for its provider instances.
pub struct RegistryEntry {
    pub params: &'static KemParams,
    pub constructor: ProviderConstructor,
}

/// Immutable table of registered algorithms.
///
/// Identifier validation is centralized here so call sites never
/// re-validate strings against the native layer, and the capability
/// metadata can be trusted for buffer allocation without re-querying
/// the provider on every operation. A registry is populated once, at
/// construction, and never mutated afterwards.
pub struct AlgorithmRegistry {
    entries: &'static [RegistryEntry],
}

static BUILTIN_ENTRIES: [RegistryEntry; 3] = [
    RegistryEntry {
        params: &KYBER512,
        constructor: Kyber512Provider::create,
    },
    RegistryEntry {
        params: &KYBER768,
        constructor: Kyber768Provider::create,
    },
    RegistryEntry {
        params: &KYBER1024,
        constructor: Kyber1024Provider::create,
    },
];

static BUILTIN_REGISTRY: AlgorithmRegistry = AlgorithmRegistry::new(&BUILTIN_ENTRIES);

impl AlgorithmRegistry {
    /// Build a registry over a static entry table.
    ///
    /// Embedders with their own provider backends assemble a registry
    /// from their own entries; the entry table is the discovery surface
    /// for which identifiers are exposed.
    pub const fn new(entries: &'static [RegistryEntry]) -> Self {
        Self { entries }
    }

    /// The process-wide registry of built-in algorithms.
    pub fn builtin() -> &'static AlgorithmRegistry {
        &BUILTIN_REGISTRY
    }

    fn entry(&self, identifier: &str, context: &'static str) -> Result<&RegistryEntry> {
        self.entries
            .iter()
            .find(|entry| entry.params.identifier == identifier)
            .ok_or_else(|| Error::UnknownAlgorithm {
                context,
                identifier: identifier.to_string(),
            })
    }

    /// Look up capability metadata by identifier. Pure lookup, no side
    /// effects.
    pub fn describe(&self, identifier: &str) -> Result<&'static KemParams> {
        Ok(self.entry(identifier, "registry describe")?.params)
    }

    /// Construct a live handle for `identifier`.
    ///
    /// The returned handle's metadata is the same `&'static` record
    /// that [`describe`](Self::describe) yields for the identifier.
    ///
    /// # Errors
    /// [`Error::UnknownAlgorithm`] for an unregistered identifier,
    /// [`Error::ProviderInit`] if the provider constructor fails (e.g.
    /// unsupported build configuration, allocation failure).
    pub fn create(&self, identifier: &str) -> Result<KemHandle> {
        let entry = self.entry(identifier, "registry create")?;
        let provider = (entry.constructor)()?;
        debug!(algorithm = entry.params.identifier, "created KEM handle");
        Ok(KemHandle::new(entry.params, provider))
    }

    /// Identifiers of every registered algorithm, in registration order.
    pub fn identifiers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.params.identifier)
    }
}

/// Construct a live handle for `identifier` from the built-in registry.
pub fn create_kem(identifier: &str) -> Result<KemHandle> {
    AlgorithmRegistry::builtin().create(identifier)
}

/// Look up built-in capability metadata by identifier.
pub fn describe_algorithm(identifier: &str) -> Result<&'static KemParams> {
    AlgorithmRegistry::builtin().describe(identifier)
}
