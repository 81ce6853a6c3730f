// kem/src/mlkem/types.rs

//! Byte-level key, ciphertext and secret types for ML-KEM-768.

use alloc::vec::Vec;
use core::fmt;
use pqseal_api::{validate, Result, SecretBytes, Serialize, SerializeSecret};
use pqseal_params::pqc::mlkem::{
    MLKEM768_CIPHERTEXT_BYTES, MLKEM768_PUBLIC_KEY_BYTES, MLKEM768_SECRET_KEY_BYTES,
    MLKEM_SS_BYTES,
};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// ML-KEM-768 public (encapsulation) key, 1184 bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct MlKem768PublicKey(pub(crate) [u8; MLKEM768_PUBLIC_KEY_BYTES]);

/// ML-KEM-768 secret (decapsulation) key, 2400 bytes, wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MlKem768SecretKey(pub(crate) SecretBytes<MLKEM768_SECRET_KEY_BYTES>);

/// ML-KEM-768 ciphertext, 1088 bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct MlKem768Ciphertext(pub(crate) [u8; MLKEM768_CIPHERTEXT_BYTES]);

/// ML-KEM shared secret, 32 bytes, wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct MlKem768SharedSecret(pub(crate) SecretBytes<MLKEM_SS_BYTES>);

/// Both halves of an ML-KEM-768 key pair.
#[derive(Clone)]
pub struct MlKem768KeyPair {
    pub(crate) public_key: MlKem768PublicKey,
    pub(crate) secret_key: MlKem768SecretKey,
}

impl MlKem768KeyPair {
    /// Public half, safe to hand to any encapsulating party.
    pub fn public_key(&self) -> &MlKem768PublicKey {
        &self.public_key
    }

    /// Secret half.
    pub fn secret_key(&self) -> &MlKem768SecretKey {
        &self.secret_key
    }
}

// --- Public key ---

impl AsRef<[u8]> for MlKem768PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for MlKem768PublicKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "MlKem768PublicKey::from_bytes",
            bytes.len(),
            MLKEM768_PUBLIC_KEY_BYTES,
        )?;
        let mut key = [0u8; MLKEM768_PUBLIC_KEY_BYTES];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl fmt::Debug for MlKem768PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MlKem768PublicKey({} bytes)", self.0.len())
    }
}

// --- Secret key ---

impl SerializeSecret for MlKem768SecretKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        SecretBytes::from_slice(bytes)
            .map(Self)
            .map_err(|e| e.with_context("MlKem768SecretKey::from_bytes"))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.0.to_bytes_zeroizing()
    }
}

impl fmt::Debug for MlKem768SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MlKem768SecretKey[REDACTED]")
    }
}

// --- Ciphertext ---

impl AsRef<[u8]> for MlKem768Ciphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for MlKem768Ciphertext {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "MlKem768Ciphertext::from_bytes",
            bytes.len(),
            MLKEM768_CIPHERTEXT_BYTES,
        )?;
        let mut ct = [0u8; MLKEM768_CIPHERTEXT_BYTES];
        ct.copy_from_slice(bytes);
        Ok(Self(ct))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl fmt::Debug for MlKem768Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MlKem768Ciphertext({} bytes)", self.0.len())
    }
}

// --- Shared secret ---

impl MlKem768SharedSecret {
    /// Length of the secret in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl SerializeSecret for MlKem768SharedSecret {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        SecretBytes::from_slice(bytes)
            .map(Self)
            .map_err(|e| e.with_context("MlKem768SharedSecret::from_bytes"))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.0.to_bytes_zeroizing()
    }
}

impl fmt::Debug for MlKem768SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MlKem768SharedSecret[REDACTED]")
    }
}
