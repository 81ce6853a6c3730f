//! AES-256 in cipher block chaining mode
//!
//! The block cipher itself comes from RustCrypto `aes`; chaining from `cbc`.
//! Padding is the caller's job: inputs must already be block-aligned, and a
//! misaligned input is rejected before the backend sees it.

use alloc::vec;
use alloc::vec::Vec;
use ::cbc::cipher::block_padding::NoPadding;
use ::cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use pqseal_api::{validate, CbcCipher, Error, Result};
use pqseal_params::utils::symmetric::{AES256_KEY_SIZE, AES_BLOCK_SIZE, CBC_IV_SIZE};
use zeroize::Zeroizing;

type Encryptor = ::cbc::Encryptor<aes::Aes256>;
type Decryptor = ::cbc::Decryptor<aes::Aes256>;

/// AES-256-CBC without padding
#[derive(Debug, Clone, Copy, Default)]
pub struct Aes256Cbc;

impl Aes256Cbc {
    fn check_inputs(context: &'static str, key: &[u8], iv: &[u8], data: &[u8]) -> Result<()> {
        validate::length(context, key.len(), AES256_KEY_SIZE)?;
        validate::length(context, iv.len(), CBC_IV_SIZE)?;
        validate::block_aligned(context, data.len(), AES_BLOCK_SIZE)
    }
}

impl CbcCipher for Aes256Cbc {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256-CBC"
    }

    fn encrypt_cbc(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        Self::check_inputs("Aes256Cbc::encrypt_cbc", key, iv, plaintext)?;

        let encryptor = Encryptor::new_from_slices(key, iv).map_err(|_| Error::InvalidKey {
            context: "Aes256Cbc::encrypt_cbc",
            reason: "key or IV rejected by cipher",
        })?;

        let len = plaintext.len();
        let mut out = vec![0u8; len];
        encryptor
            .encrypt_padded_b2b_mut::<NoPadding>(plaintext, &mut out)
            .map_err(|_| Error::InvalidLength {
                context: "Aes256Cbc::encrypt_cbc",
                expected: len,
                actual: len,
            })?;
        Ok(out)
    }

    fn decrypt_cbc(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        Self::check_inputs("Aes256Cbc::decrypt_cbc", key, iv, ciphertext)?;

        let decryptor = Decryptor::new_from_slices(key, iv).map_err(|_| Error::InvalidKey {
            context: "Aes256Cbc::decrypt_cbc",
            reason: "key or IV rejected by cipher",
        })?;

        let len = ciphertext.len();
        let mut out = Zeroizing::new(vec![0u8; len]);
        decryptor
            .decrypt_padded_b2b_mut::<NoPadding>(ciphertext, &mut out[..])
            .map_err(|_| Error::InvalidLength {
                context: "Aes256Cbc::decrypt_cbc",
                expected: len,
                actual: len,
            })?;
        Ok(out)
    }
}
