//! Exclusively-owned KEM handle with use-after-release detection

use kemlock_api::error::validate;
use kemlock_api::{Error, KemProvider, PublicBytes, Result, SecretBuffer};
use kemlock_params::KemParams;
use tracing::{debug, instrument};

/// An exclusively-owned handle over one live provider instance.
///
/// A handle is either Live (provider instance valid, operations
/// permitted) or Released (provider instance destroyed, all operations
/// fail). [`release`](Self::release) performs the transition exactly
/// once; a second call is a caller programming error and fails with
/// [`Error::DoubleRelease`] rather than being silently tolerated.
/// Dropping a handle that is still Live destroys the provider instance,
/// so a panic or early `?` return in the owning scope cannot leak it.
///
/// Handles are not cloneable: the underlying provider resource is
/// destroyed once, so there is at most one owner at a time. Every
/// operation takes `&mut self`, which makes the state check and the
/// provider dispatch one atomic unit — a release racing an operation on
/// the same handle cannot be expressed without an external lock. To
/// share a handle across threads, wrap it in a `Mutex` and keep the
/// lock across each whole call.
pub struct KemHandle {
    params: &'static KemParams,
    provider: Option<Box<dyn KemProvider>>,
}

impl KemHandle {
    pub(crate) fn new(params: &'static KemParams, provider: Box<dyn KemProvider>) -> Self {
        Self {
            params,
            provider: Some(provider),
        }
    }

    /// Capability metadata for the algorithm this handle is fixed to.
    ///
    /// The handle's algorithm variant never changes over its lifetime;
    /// these sizes can be trusted for buffer allocation without
    /// re-querying the provider.
    pub fn params(&self) -> &'static KemParams {
        self.params
    }

    /// Stable identifier of the algorithm this handle is fixed to.
    pub fn algorithm(&self) -> &'static str {
        self.params.identifier
    }

    /// Whether the handle still owns a live provider instance.
    pub fn is_live(&self) -> bool {
        self.provider.is_some()
    }

    fn provider_mut(&mut self, operation: &'static str) -> Result<&mut dyn KemProvider> {
        match self.provider.as_deref_mut() {
            Some(provider) => Ok(provider),
            None => Err(Error::HandleReleased { operation }),
        }
    }

    /// Generate a fresh keypair.
    ///
    /// Output lengths equal `params().public_key_size` and
    /// `params().secret_key_size` by construction: the buffers are
    /// allocated from the capability metadata and filled in place.
    ///
    /// # Errors
    /// [`Error::HandleReleased`] after release,
    /// [`Error::ProviderOperation`] if the native call reports failure
    /// (e.g. entropy source exhaustion) — reported, not retried.
    #[instrument(level = "trace", skip_all)]
    pub fn generate_keypair(&mut self) -> Result<(PublicBytes, SecretBuffer)> {
        let params = self.params;
        let provider = self.provider_mut("generate_keypair")?;

        let mut public_key = vec![0u8; params.public_key_size];
        let mut secret_key = SecretBuffer::zeroed(params.secret_key_size);
        provider.generate_keypair(&mut public_key, secret_key.as_mut_slice())?;

        Ok((PublicBytes::from(public_key), secret_key))
    }

    /// Derive a shared secret for `public_key`, returning the transport
    /// ciphertext alongside it.
    ///
    /// The public key length is checked by exact equality before any
    /// call reaches the provider; mismatched buffers never cross the
    /// native boundary.
    #[instrument(level = "trace", skip_all)]
    pub fn encapsulate(&mut self, public_key: &PublicBytes) -> Result<(PublicBytes, SecretBuffer)> {
        let params = self.params;
        let provider = self.provider_mut("encapsulate")?;
        validate::length(
            "encapsulate public key",
            params.public_key_size,
            public_key.len(),
        )?;

        let mut ciphertext = vec![0u8; params.ciphertext_size];
        let mut shared_secret = SecretBuffer::zeroed(params.shared_secret_size);
        provider.encapsulate(
            public_key.as_ref(),
            &mut ciphertext,
            shared_secret.as_mut_slice(),
        )?;

        Ok((PublicBytes::from(ciphertext), shared_secret))
    }

    /// Recover the shared secret from `secret_key` and `ciphertext`.
    ///
    /// Both input lengths are checked by exact equality before
    /// dispatch. On a provider failure the already-allocated output
    /// buffer is discarded through its zeroing drop glue, so a partial
    /// write never outlives the call.
    #[instrument(level = "trace", skip_all)]
    pub fn decapsulate(
        &mut self,
        secret_key: &SecretBuffer,
        ciphertext: &PublicBytes,
    ) -> Result<SecretBuffer> {
        let params = self.params;
        let provider = self.provider_mut("decapsulate")?;
        validate::length(
            "decapsulate secret key",
            params.secret_key_size,
            secret_key.len(),
        )?;
        validate::length(
            "decapsulate ciphertext",
            params.ciphertext_size,
            ciphertext.len(),
        )?;

        let mut shared_secret = SecretBuffer::zeroed(params.shared_secret_size);
        provider.decapsulate(
            secret_key.as_ref(),
            ciphertext.as_ref(),
            shared_secret.as_mut_slice(),
        )?;

        Ok(shared_secret)
    }

    /// Destroy the provider instance and mark the handle Released.
    ///
    /// # Errors
    /// [`Error::DoubleRelease`] if the handle was already released.
    pub fn release(&mut self) -> Result<()> {
        match self.provider.take() {
            Some(provider) => {
                drop(provider);
                debug!(algorithm = self.params.identifier, "released KEM handle");
                Ok(())
            }
            None => Err(Error::DoubleRelease {
                algorithm: self.params.identifier,
            }),
        }
    }
}

impl Drop for KemHandle {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take() {
            drop(provider);
            debug!(
                algorithm = self.params.identifier,
                "released KEM handle on drop"
            );
        }
    }
}
