//! A CBC cipher that loses a block on the way out

use pqseal_api::{CbcCipher, Result};
use pqseal_symmetric::Aes256Cbc;
use zeroize::Zeroizing;

/// AES-256-CBC whose encryption drops the final ciphertext block.
///
/// Decryption is the real thing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TruncatingCipher;

impl CbcCipher for TruncatingCipher {
    const KEY_SIZE: usize = Aes256Cbc::KEY_SIZE;
    const BLOCK_SIZE: usize = Aes256Cbc::BLOCK_SIZE;

    fn name() -> &'static str {
        "truncating-aes"
    }

    fn encrypt_cbc(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut out = Aes256Cbc::encrypt_cbc(key, iv, plaintext)?;
        out.truncate(out.len().saturating_sub(Self::BLOCK_SIZE));
        Ok(out)
    }

    fn decrypt_cbc(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        Aes256Cbc::decrypt_cbc(key, iv, ciphertext)
    }
}
