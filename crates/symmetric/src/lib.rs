//! Symmetric primitives for the pqseal envelope
//!
//! This crate provides AES-256 in CBC mode behind the `pqseal_api::CbcCipher`
//! trait, plus the PKCS#7 padding codec the envelope applies before
//! encryption and strips after decryption.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod cbc;
pub mod padding;

// Re-export main types for convenience
pub use crate::cbc::Aes256Cbc;
pub use crate::padding::{pad, pad_into, padded_len, unpad};

// Re-export the API error system instead of custom error types
pub use pqseal_api::error::{validate, Error, Result};
