//! Hybrid post-quantum secure envelope
//!
//! A KEM encapsulation is performed once per packet; the resulting shared
//! secret keys a block cipher in CBC mode over a PKCS#7-padded payload. The
//! output is a fixed-layout [`SecurePacket`] that a constrained device can
//! hand to a gateway over any byte link.
//!
//! The construction carries no integrity tag. A wrong key and a corrupted
//! packet are reported identically as `InvalidPadding`, and some corruptions
//! of the encrypted payload go undetected.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod envelope;

#[cfg(feature = "std")]
pub mod handshake;

pub use envelope::selftest::{self, round_trip, SelfTestReport};
pub use envelope::{EnvelopeBuilder, EnvelopeOpener, SecurePacket};

pub use pqseal_api::error::{Error, Result};

use pqseal_kem::MlKem768;
use pqseal_params::envelope::DEFAULT_PAYLOAD_CAPACITY;
use pqseal_symmetric::Aes256Cbc;

/// Builder for the ML-KEM-768 + AES-256-CBC suite
pub type MlKem768Aes256Builder = EnvelopeBuilder<MlKem768, Aes256Cbc>;

/// Opener for the ML-KEM-768 + AES-256-CBC suite
pub type MlKem768Aes256Opener = EnvelopeOpener<MlKem768, Aes256Cbc>;

/// ML-KEM-768 packet with the default 64-byte payload capacity
pub type MlKem768Packet = SecurePacket<MlKem768, DEFAULT_PAYLOAD_CAPACITY>;
