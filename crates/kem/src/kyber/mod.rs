//! Built-in Kyber provider backends
//!
//! Each variant wraps the corresponding `pqcrypto` module behind the
//! [`KemProvider`] seam, standing in for a native provider library.
//! The registry pairs every backend with the matching capability record
//! from `kemlock-params`; the size-agreement between the two is covered
//! by this module's tests.

use kemlock_api::error::validate;
use kemlock_api::{Error, KemProvider, Result};
use pqcrypto_kyber::{kyber1024, kyber512, kyber768};
use pqcrypto_traits::kem::{Ciphertext, PublicKey, SecretKey, SharedSecret};

macro_rules! kyber_provider {
    ($name:ident, $module:ident, $algorithm:literal, $doc:literal) => {
        #[doc = $doc]
        pub struct $name {
            _private: (),
        }

        impl $name {
            /// Constructor used by the registry entry for this variant.
            pub fn create() -> Result<Box<dyn KemProvider>> {
                Ok(Box::new(Self { _private: () }))
            }
        }

        impl KemProvider for $name {
            fn generate_keypair(
                &mut self,
                public_key: &mut [u8],
                secret_key: &mut [u8],
            ) -> Result<()> {
                let (pk, sk) = $module::keypair();
                validate::provider(
                    pk.as_bytes().len() == public_key.len(),
                    $algorithm,
                    "generate_keypair",
                )?;
                validate::provider(
                    sk.as_bytes().len() == secret_key.len(),
                    $algorithm,
                    "generate_keypair",
                )?;
                public_key.copy_from_slice(pk.as_bytes());
                secret_key.copy_from_slice(sk.as_bytes());
                Ok(())
            }

            fn encapsulate(
                &mut self,
                public_key: &[u8],
                ciphertext: &mut [u8],
                shared_secret: &mut [u8],
            ) -> Result<()> {
                let pk = $module::PublicKey::from_bytes(public_key).map_err(|_| {
                    Error::ProviderOperation {
                        algorithm: $algorithm,
                        operation: "encapsulate",
                    }
                })?;
                let (ss, ct) = $module::encapsulate(&pk);
                validate::provider(
                    ct.as_bytes().len() == ciphertext.len(),
                    $algorithm,
                    "encapsulate",
                )?;
                validate::provider(
                    ss.as_bytes().len() == shared_secret.len(),
                    $algorithm,
                    "encapsulate",
                )?;
                ciphertext.copy_from_slice(ct.as_bytes());
                shared_secret.copy_from_slice(ss.as_bytes());
                Ok(())
            }

            fn decapsulate(
                &mut self,
                secret_key: &[u8],
                ciphertext: &[u8],
                shared_secret: &mut [u8],
            ) -> Result<()> {
                let sk = $module::SecretKey::from_bytes(secret_key).map_err(|_| {
                    Error::ProviderOperation {
                        algorithm: $algorithm,
                        operation: "decapsulate",
                    }
                })?;
                let ct = $module::Ciphertext::from_bytes(ciphertext).map_err(|_| {
                    Error::ProviderOperation {
                        algorithm: $algorithm,
                        operation: "decapsulate",
                    }
                })?;
                let ss = $module::decapsulate(&ct, &sk);
                validate::provider(
                    ss.as_bytes().len() == shared_secret.len(),
                    $algorithm,
                    "decapsulate",
                )?;
                shared_secret.copy_from_slice(ss.as_bytes());
                Ok(())
            }
        }
    };
}

kyber_provider!(
    Kyber512Provider,
    kyber512,
    "kyber-512",
    "Kyber-512 provider instance (NIST PQC Security Level 1)."
);
kyber_provider!(
    Kyber768Provider,
    kyber768,
    "kyber-768",
    "Kyber-768 provider instance (NIST PQC Security Level 3)."
);
kyber_provider!(
    Kyber1024Provider,
    kyber1024,
    "kyber-1024",
    "Kyber-1024 provider instance (NIST PQC Security Level 5)."
);

#[cfg(test)]
mod tests {
    use kemlock_params::{KYBER1024, KYBER512, KYBER768};
    use pqcrypto_kyber::{kyber1024, kyber512, kyber768};

    #[test]
    fn kyber512_params_match_provider_sizes() {
        assert_eq!(KYBER512.public_key_size, kyber512::public_key_bytes());
        assert_eq!(KYBER512.secret_key_size, kyber512::secret_key_bytes());
        assert_eq!(KYBER512.ciphertext_size, kyber512::ciphertext_bytes());
        assert_eq!(KYBER512.shared_secret_size, kyber512::shared_secret_bytes());
    }

    #[test]
    fn kyber768_params_match_provider_sizes() {
        assert_eq!(KYBER768.public_key_size, kyber768::public_key_bytes());
        assert_eq!(KYBER768.secret_key_size, kyber768::secret_key_bytes());
        assert_eq!(KYBER768.ciphertext_size, kyber768::ciphertext_bytes());
        assert_eq!(KYBER768.shared_secret_size, kyber768::shared_secret_bytes());
    }

    #[test]
    fn kyber1024_params_match_provider_sizes() {
        assert_eq!(KYBER1024.public_key_size, kyber1024::public_key_bytes());
        assert_eq!(KYBER1024.secret_key_size, kyber1024::secret_key_bytes());
        assert_eq!(KYBER1024.ciphertext_size, kyber1024::ciphertext_bytes());
        assert_eq!(
            KYBER1024.shared_secret_size,
            kyber1024::shared_secret_bytes()
        );
    }
}
