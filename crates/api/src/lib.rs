//! Public API traits and types for the kemlock binding layer
//!
//! This crate provides the public surface shared by the kemlock workspace:
//! the provider trait that models the opaque native KEM boundary, the
//! secret/public byte container types, and the error taxonomy used
//! throughout the library.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;
#[cfg(feature = "alloc")]
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
#[cfg(feature = "alloc")]
pub use types::{PublicBytes, SecretBuffer};

// Re-export the provider trait from the traits module
pub use traits::KemProvider;

// Re-export trait modules for direct access
pub use traits::provider;
