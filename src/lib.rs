//! # pqseal
//!
//! A hybrid post-quantum secure envelope: one ML-KEM-768 encapsulation per
//! packet yields a shared secret that keys AES-256-CBC over a PKCS#7-padded
//! payload, packed into a fixed-layout record.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pqseal = "0.3"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support, `SystemRandom`, the KEM handshake diagnostic
//! - `envelope` (default): the packet builder and opener with their primitives
//! - `kem`, `symmetric`: the primitives alone
//! - `serde`: `serde::Serialize` for diagnostic reports
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`pqseal-api`]: error type and the traits the envelope consumes
//! - [`pqseal-params`]: size constants
//! - [`pqseal-kem`]: ML-KEM-768
//! - [`pqseal-symmetric`]: AES-256-CBC and PKCS#7 padding
//! - [`pqseal-hybrid`]: the secure packet, builder and opener
//!
//! ## Security
//!
//! Packets carry no integrity tag. Opening with the wrong key and opening a
//! corrupted packet both fail as `InvalidPadding`, and some modifications of
//! the encrypted payload are not detected at all.

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use pqseal_api as api;
pub use pqseal_params as params;

// Feature-gated re-exports
#[cfg(feature = "kem")]
pub use pqseal_kem as kem;

#[cfg(feature = "symmetric")]
pub use pqseal_symmetric as symmetric;

#[cfg(feature = "envelope")]
pub use pqseal_hybrid as envelope;

/// Common imports for pqseal users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{CbcCipher, Kem, KemDimensions, RandomSource, Serialize, SerializeSecret};

    // Re-export security types
    pub use crate::api::SecretBytes;

    #[cfg(feature = "std")]
    pub use crate::api::SystemRandom;

    #[cfg(feature = "kem")]
    pub use crate::kem::{MlKem768, MlKem768KeyPair};

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::Aes256Cbc;

    #[cfg(feature = "envelope")]
    pub use crate::envelope::{
        EnvelopeBuilder, EnvelopeOpener, MlKem768Aes256Builder, MlKem768Aes256Opener,
        MlKem768Packet, SecurePacket,
    };
}
