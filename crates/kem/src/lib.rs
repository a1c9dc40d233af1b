//! KEM handle lifecycle, algorithm registry, and operation facade
//!
//! This crate is the operational half of kemlock: the registry that maps
//! stable algorithm identifiers to capability metadata and provider
//! constructors, the exclusively-owned [`KemHandle`] with its
//! Live/Released lifecycle, and the built-in Kyber provider backends.

pub mod handle;
pub mod kyber;
pub mod registry;

// Re-exports
pub use handle::KemHandle;
pub use kyber::{Kyber1024Provider, Kyber512Provider, Kyber768Provider};
pub use registry::{
    create_kem, describe_algorithm, AlgorithmRegistry, ProviderConstructor, RegistryEntry,
};

#[cfg(test)]
mod tests;
