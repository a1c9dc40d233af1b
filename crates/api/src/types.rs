//! Byte container types with security guarantees
//!
//! The type split carries the zeroing discipline: every value holding
//! private key material or shared secret output rides in a
//! [`SecretBuffer`], which zeroes its memory on every exit path, while
//! public keys and ciphertexts use [`PublicBytes`] with ordinary value
//! semantics.

use core::fmt;
use core::ops::Deref;
use kemlock_internal::constant_time::ct_eq;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{vec, vec::Vec};

/// A byte buffer for secret material that is securely zeroed when dropped
///
/// This type provides:
/// - Zeroing on drop, on all exit paths including early failure returns
/// - Constant-time equality comparison
/// - A Debug implementation that hides the actual bytes
///
/// The buffer length is fixed at construction and matches the declared
/// size for its role (secret key, shared secret) from the originating
/// algorithm's capability metadata.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer {
    data: Vec<u8>,
}

impl SecretBuffer {
    /// Create a new instance from an existing vector
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create by copying from a slice
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// Create filled with zeros
    pub fn zeroed(len: usize) -> Self {
        Self {
            data: vec![0u8; len],
        }
    }

    /// Generate a random instance
    pub fn random<R: rand::RngCore + rand::CryptoRng>(rng: &mut R, len: usize) -> Self {
        let mut data = vec![0u8; len];
        rng.fill_bytes(&mut data);
        Self { data }
    }

    /// Get the length of the contained data
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the container is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to the inner data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get a mutable reference to the inner data
    ///
    /// The slice may be overwritten in place but never resized, so the
    /// length invariant established at construction holds for the
    /// buffer's whole lifetime.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl AsRef<[u8]> for SecretBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl AsMut<[u8]> for SecretBuffer {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl Deref for SecretBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl PartialEq for SecretBuffer {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.data, &other.data)
    }
}

impl Eq for SecretBuffer {}

impl fmt::Debug for SecretBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer({})[REDACTED]", self.data.len())
    }
}

/// Wrapper for public byte sequences (public keys, ciphertexts)
///
/// Ordinary value semantics: freely cloned, compared, and inspected.
/// No zeroing requirement applies.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicBytes {
    data: Vec<u8>,
}

impl PublicBytes {
    /// Create a new instance by copying from a byte slice
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec(),
        }
    }

    /// Get the length of the contained data
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the container is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to the inner data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for PublicBytes {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl AsRef<[u8]> for PublicBytes {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Deref for PublicBytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl fmt::Debug for PublicBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicBytes({} bytes)", self.data.len())
    }
}
