//! Byte encodings of keys, ciphertexts and packets
//!
//! Every encoding in the envelope has a fixed length. `from_bytes` must
//! reject any other length with `Error::InvalidLength` and must never panic
//! on attacker-supplied input.

use crate::Result;
use alloc::vec::Vec;
use zeroize::Zeroizing;

/// Public values with a fixed-length byte encoding.
pub trait Serialize: Sized {
    /// Parses the encoding produced by [`Serialize::to_bytes`].
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    fn to_bytes(&self) -> Vec<u8>;

    /// Length of the encoding in bytes
    fn encoded_len(&self) -> usize {
        self.to_bytes().len()
    }
}

/// Secret values; the exported bytes are wiped when dropped.
pub trait SerializeSecret: Sized {
    /// Parses a secret encoding. Callers should wipe `bytes` afterwards.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;
}
