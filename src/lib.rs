//! # kemlock
//!
//! A lifecycle-safety layer over opaque post-quantum KEM providers.
//!
//! kemlock does not implement any lattice math itself. It wraps
//! provider instances (native KEM library objects) behind an
//! exclusively-owned handle type and enforces the contracts that are
//! easy to get wrong at a binding boundary: use-after-release and
//! double-release detection, exact-equality buffer length checks before
//! any call crosses into a provider, and zeroing of secret material on
//! every exit path.
//!
//! ## Usage
//!
//! ```
//! use kemlock::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut handle = create_kem("kyber-512")?;
//! let (public_key, secret_key) = handle.generate_keypair()?;
//!
//! let (ciphertext, shared_secret) = handle.encapsulate(&public_key)?;
//! let recovered = handle.decapsulate(&secret_key, &ciphertext)?;
//! assert_eq!(recovered, shared_secret);
//!
//! handle.release()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`kemlock-api`](api): provider trait, byte container types, error
//!   taxonomy
//! - [`kemlock-internal`](internal): constant-time helpers
//! - [`kemlock-params`](params): algorithm capability constants
//! - [`kemlock-kem`](kem): registry, handle lifecycle, built-in Kyber
//!   backends

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use kemlock_api as api;
pub use kemlock_internal as internal;
pub use kemlock_kem as kem;
pub use kemlock_params as params;

// Re-export workspace dependencies that users might need
pub use subtle;
pub use zeroize;

#[cfg(feature = "serde")]
pub use serde;

/// Common imports for kemlock users
pub mod prelude {
    pub use kemlock_api::{Error, KemProvider, PublicBytes, Result, SecretBuffer};
    pub use kemlock_kem::{
        create_kem, describe_algorithm, AlgorithmRegistry, KemHandle, RegistryEntry,
    };
    pub use kemlock_params::{KemParams, KYBER1024, KYBER512, KYBER768};
}
