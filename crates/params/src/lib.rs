//! Algorithm capability constants for the kemlock library
//!
//! One record per supported algorithm: the stable identifier and the
//! four buffer sizes every binding-layer operation is validated against.
//! The values restate the provider library's advertised buffer-size
//! contract; nothing here is derived independently.

#![no_std]

pub mod pqc;

pub use pqc::kyber::{KYBER1024, KYBER512, KYBER768};

/// Capability metadata for one KEM algorithm
///
/// Immutable and process-wide; a registry hands out `&'static` references
/// so that every handle's metadata outlives the handle itself. All sizes
/// are in bytes and strictly positive.
#[derive(Debug, PartialEq, Eq)]
pub struct KemParams {
    /// Stable algorithm identifier (e.g. "kyber-512")
    pub identifier: &'static str,

    /// Size of public key in bytes
    pub public_key_size: usize,

    /// Size of secret key in bytes
    pub secret_key_size: usize,

    /// Size of ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of shared secret in bytes
    pub shared_secret_size: usize,
}
