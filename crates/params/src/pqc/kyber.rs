//! Constants for the Kyber key encapsulation mechanism

use crate::KemParams;

/// Kyber-512 parameters (NIST PQC Security Level 1)
pub const KYBER512: KemParams = KemParams {
    identifier: "kyber-512",
    public_key_size: 800,
    secret_key_size: 1632,
    ciphertext_size: 768,
    shared_secret_size: 32,
};

/// Kyber-768 parameters (NIST PQC Security Level 3)
pub const KYBER768: KemParams = KemParams {
    identifier: "kyber-768",
    public_key_size: 1184,
    secret_key_size: 2400,
    ciphertext_size: 1088,
    shared_secret_size: 32,
};

/// Kyber-1024 parameters (NIST PQC Security Level 5)
pub const KYBER1024: KemParams = KemParams {
    identifier: "kyber-1024",
    public_key_size: 1568,
    secret_key_size: 3168,
    ciphertext_size: 1568,
    shared_secret_size: 32,
};
