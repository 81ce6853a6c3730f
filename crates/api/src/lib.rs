//! Public API traits and types for pqseal
//!
//! This crate provides the public API surface shared by every pqseal crate:
//! the error type, the traits through which the envelope consumes its
//! primitives (KEM, CBC block cipher, random source) and the secret byte
//! containers used to carry key material.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use types::SecretBytes;

// Re-export all traits from the traits module
pub use traits::{CbcCipher, Kem, KemDimensions, RandomSource, Serialize, SerializeSecret};

#[cfg(feature = "std")]
pub use traits::random::SystemRandom;

// Re-export trait modules for direct access
pub use traits::{cipher, kem, random, serialize};
