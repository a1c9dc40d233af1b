//! Trait definition for opaque native KEM providers
//!
//! A provider is one live instantiation of a specific KEM algorithm,
//! typically backed by a native library object. The binding layer owns
//! exactly one provider per handle and never shares it.

use crate::Result;

/// Interface to an opaque KEM provider instance.
///
/// The calling convention mirrors the native ABI this layer binds:
/// every operation fills caller-allocated, fixed-size output buffers in
/// place. The caller sizes those buffers from the algorithm's capability
/// metadata and never passes mismatched lengths across this boundary.
///
/// # Security Design
///
/// - Secret outputs (`secret_key`, `shared_secret`) are written into
///   buffers whose zeroization the caller guarantees, so a provider
///   failure after a partial write cannot leak key material.
/// - Dropping the boxed provider invokes the native destructor; a
///   provider must release every native resource it holds in its `Drop`
///   glue.
/// - `Send` is required so a handle can be transferred between threads;
///   concurrent access is excluded by the `&mut self` receivers.
pub trait KemProvider: Send {
    /// Generate a fresh keypair into `public_key` and `secret_key`.
    ///
    /// # Errors
    /// Reports the native failure (e.g. entropy source exhaustion)
    /// without retrying; retry policy belongs to the caller.
    fn generate_keypair(&mut self, public_key: &mut [u8], secret_key: &mut [u8]) -> Result<()>;

    /// Derive a shared secret for `public_key`, writing the transport
    /// ciphertext to `ciphertext` and the secret to `shared_secret`.
    fn encapsulate(
        &mut self,
        public_key: &[u8],
        ciphertext: &mut [u8],
        shared_secret: &mut [u8],
    ) -> Result<()>;

    /// Recover the shared secret from `secret_key` and `ciphertext`,
    /// writing it to `shared_secret`.
    fn decapsulate(
        &mut self,
        secret_key: &[u8],
        ciphertext: &[u8],
        shared_secret: &mut [u8],
    ) -> Result<()>;
}
