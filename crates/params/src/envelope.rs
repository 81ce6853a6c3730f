//! Secure packet layout constants
//!
//! The wire record is `kem_ciphertext || iv || encrypted_payload || payload_len`
//! with the length field little-endian.

use crate::pqc::mlkem::MLKEM768_CIPHERTEXT_BYTES;
use crate::utils::symmetric::{AES_BLOCK_SIZE, CBC_IV_SIZE};

/// Default capacity of the encrypted payload region (`MAXLEN`).
///
/// Together with an ML-KEM-768 ciphertext and the IV this gives the
/// 1168-byte body exchanged with the gateway.
pub const DEFAULT_PAYLOAD_CAPACITY: usize = 64;

/// Size of the IV field in bytes
pub const PACKET_IV_SIZE: usize = CBC_IV_SIZE;

/// Block size every `payload_len` must be a multiple of
pub const PACKET_BLOCK_SIZE: usize = AES_BLOCK_SIZE;

/// Size of the trailing `payload_len` field in bytes
pub const PAYLOAD_LEN_FIELD_SIZE: usize = 4;

/// Largest plaintext that fits the default capacity after padding
pub const DEFAULT_MAX_PLAINTEXT: usize = DEFAULT_PAYLOAD_CAPACITY - PACKET_BLOCK_SIZE;

/// Wire size of an ML-KEM-768 packet with the default capacity
pub const MLKEM768_PACKET_SIZE: usize =
    MLKEM768_CIPHERTEXT_BYTES + PACKET_IV_SIZE + DEFAULT_PAYLOAD_CAPACITY + PAYLOAD_LEN_FIELD_SIZE;
