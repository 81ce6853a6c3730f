//! Key Encapsulation Mechanisms for pqseal
//!
//! This crate adapts the RustCrypto `ml-kem` implementation to the
//! `pqseal_api::Kem` contract: fixed-size byte wrappers for keys and
//! ciphertexts, zeroizing secret types and a total decapsulation.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod mlkem;

// Re-exports
pub use mlkem::{
    MlKem768, MlKem768Ciphertext, MlKem768KeyPair, MlKem768PublicKey, MlKem768SecretKey,
    MlKem768SharedSecret,
};
