// File: crates/api/src/traits/kem.rs

//! Trait definition for the Key Encapsulation Mechanism consumed by the envelope
//!
//! The envelope treats the KEM as an opaque capability with fixed-size keys,
//! ciphertexts and shared secrets. Implementations live in `pqseal-kem`;
//! test doubles only need to honour the contracts documented here.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for Key Encapsulation Mechanism (KEM) with domain-specific types.
pub trait Kem {
    /// Public key type. Shared with the encapsulating party.
    type PublicKey: Clone + Serialize;

    /// Secret key type.
    ///
    /// # Security Note
    /// - Implements `Zeroize` for secure memory cleanup.
    /// - Must never leave the holder that generated it.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type.
    ///
    /// # Security Note
    /// Used directly as the symmetric key and zeroized right after that use.
    type SharedSecret: Zeroize + SerializeSecret;

    /// Ciphertext type for the encapsulated key. Opaque to the symmetric layer.
    type Ciphertext: Clone + Serialize;

    /// Keypair type, only an intermediate holder of both keys.
    type KeyPair: Clone;

    /// Returns the KEM algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair from the provided CSPRNG.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a fresh shared secret for the holder of `public_key`.
    ///
    /// # Security Requirements
    /// - Must use fresh randomness from the provided RNG on every call.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Decapsulate a shared secret using the secret key.
    ///
    /// This operation is total. A ciphertext that does not belong to
    /// `secret_key` yields a pseudorandom secret (implicit rejection) rather
    /// than an error, so callers can only observe a mismatch downstream.
    fn decapsulate(secret_key: &Self::SecretKey, ciphertext: &Self::Ciphertext)
        -> Self::SharedSecret;
}

/// Extends [`Kem`] with the fixed byte lengths of its wire types.
///
/// Packet layouts depend on these constants being exact.
pub trait KemDimensions: Kem {
    /// The byte length of the public key (`PKLEN`).
    const PUBLIC_KEY_LEN: usize;
    /// The byte length of the secret key (`SKLEN`).
    const SECRET_KEY_LEN: usize;
    /// The byte length of the ciphertext (`CTLEN`).
    const CIPHERTEXT_LEN: usize;
    /// The byte length of the shared secret (`SSLEN`).
    const SHARED_SECRET_LEN: usize;
}
