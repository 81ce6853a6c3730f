//! Block cipher trait consumed by the envelope

use crate::Result;
use alloc::vec::Vec;
use zeroize::Zeroizing;

/// A block cipher operated in CBC mode with a fixed key size.
///
/// Both directions require the data length to be a whole number of blocks.
/// Implementations report a misaligned input, a wrong key length or a wrong
/// IV length as an error; they never pad on their own.
pub trait CbcCipher {
    /// Required key length in bytes.
    const KEY_SIZE: usize;

    /// Block size in bytes. The IV is exactly one block.
    const BLOCK_SIZE: usize;

    /// Returns the cipher name.
    fn name() -> &'static str;

    /// Encrypts block-aligned `plaintext` under `key` and `iv`.
    fn encrypt_cbc(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypts block-aligned `ciphertext` under `key` and `iv`.
    ///
    /// The output still carries its padding and is zeroized on drop.
    fn decrypt_cbc(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>>;
}
