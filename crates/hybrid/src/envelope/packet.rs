//! The fixed-layout secure packet and its wire codec

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use pqseal_api::{validate, Error, KemDimensions, Result, Serialize};
use pqseal_params::envelope::{
    DEFAULT_PAYLOAD_CAPACITY, PACKET_BLOCK_SIZE, PACKET_IV_SIZE, PAYLOAD_LEN_FIELD_SIZE,
};

/// A sealed payload: `kem_ciphertext || iv || encrypted_payload || payload_len`.
///
/// `payload_len` is always a positive multiple of the block size no larger
/// than `CAP`. Bytes of `encrypted_payload` past `payload_len` are zero in a
/// freshly built packet and are never read when opening. Packets are
/// immutable; the opener consumes them by value.
pub struct SecurePacket<K: KemDimensions, const CAP: usize = DEFAULT_PAYLOAD_CAPACITY> {
    kem_ciphertext: K::Ciphertext,
    iv: [u8; PACKET_IV_SIZE],
    encrypted_payload: [u8; CAP],
    payload_len: u32,
}

impl<K: KemDimensions, const CAP: usize> SecurePacket<K, CAP> {
    /// Size of the wire encoding in bytes
    pub const WIRE_LEN: usize = K::CIPHERTEXT_LEN + PACKET_IV_SIZE + CAP + PAYLOAD_LEN_FIELD_SIZE;

    /// Payload capacity (`MAXLEN`) in bytes
    pub const CAPACITY: usize = CAP;

    pub(crate) fn new(
        kem_ciphertext: K::Ciphertext,
        iv: [u8; PACKET_IV_SIZE],
        encrypted_payload: [u8; CAP],
        payload_len: u32,
    ) -> Self {
        Self {
            kem_ciphertext,
            iv,
            encrypted_payload,
            payload_len,
        }
    }

    fn payload_len_is_valid(payload_len: usize) -> bool {
        payload_len != 0 && payload_len % PACKET_BLOCK_SIZE == 0 && payload_len <= CAP
    }

    /// KEM ciphertext the recipient decapsulates
    pub fn kem_ciphertext(&self) -> &K::Ciphertext {
        &self.kem_ciphertext
    }

    pub fn iv(&self) -> &[u8; PACKET_IV_SIZE] {
        &self.iv
    }

    /// The whole payload region, including unused trailing bytes
    pub fn encrypted_payload(&self) -> &[u8; CAP] {
        &self.encrypted_payload
    }

    /// Number of meaningful bytes in the payload region
    pub fn payload_len(&self) -> usize {
        self.payload_len as usize
    }

    /// The meaningful prefix of the payload region
    pub fn ciphertext(&self) -> &[u8] {
        &self.encrypted_payload[..self.payload_len()]
    }

    /// Lowercase hex of the wire encoding, for line-oriented links
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parses the output of [`SecurePacket::to_hex`]
    pub fn from_hex(encoded: &str) -> Result<Self> {
        let bytes = hex::decode(encoded.trim()).map_err(|_| Error::SerializationError {
            context: "SecurePacket::from_hex",
            reason: "input is not valid hex",
        })?;
        <Self as Serialize>::from_bytes(&bytes)
    }
}

impl<K: KemDimensions, const CAP: usize> Serialize for SecurePacket<K, CAP> {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("SecurePacket::from_bytes", bytes.len(), Self::WIRE_LEN)?;

        let (kem_ct_bytes, rest) = bytes.split_at(K::CIPHERTEXT_LEN);
        let (iv_bytes, rest) = rest.split_at(PACKET_IV_SIZE);
        let (payload_bytes, len_bytes) = rest.split_at(CAP);

        let payload_len = u32::from_le_bytes(len_bytes.try_into()?);
        if !Self::payload_len_is_valid(payload_len as usize) {
            return Err(Error::SerializationError {
                context: "SecurePacket::from_bytes",
                reason: "payload length must be a positive multiple of the block size within capacity",
            });
        }

        let kem_ciphertext = K::Ciphertext::from_bytes(kem_ct_bytes)?;
        let iv: [u8; PACKET_IV_SIZE] = iv_bytes.try_into()?;
        let mut encrypted_payload = [0u8; CAP];
        encrypted_payload.copy_from_slice(payload_bytes);

        Ok(Self::new(kem_ciphertext, iv, encrypted_payload, payload_len))
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::WIRE_LEN);
        out.extend_from_slice(&self.kem_ciphertext.to_bytes());
        out.extend_from_slice(&self.iv);
        out.extend_from_slice(&self.encrypted_payload);
        out.extend_from_slice(&self.payload_len.to_le_bytes());
        out
    }
}

impl<K: KemDimensions, const CAP: usize> Clone for SecurePacket<K, CAP> {
    fn clone(&self) -> Self {
        Self {
            kem_ciphertext: self.kem_ciphertext.clone(),
            iv: self.iv,
            encrypted_payload: self.encrypted_payload,
            payload_len: self.payload_len,
        }
    }
}

impl<K: KemDimensions, const CAP: usize> PartialEq for SecurePacket<K, CAP> {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl<K: KemDimensions, const CAP: usize> Eq for SecurePacket<K, CAP> {}

impl<K: KemDimensions, const CAP: usize> fmt::Debug for SecurePacket<K, CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurePacket")
            .field("kem", &K::name())
            .field("capacity", &CAP)
            .field("payload_len", &self.payload_len)
            .finish_non_exhaustive()
    }
}
