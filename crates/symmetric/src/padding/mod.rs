//! PKCS#7 padding
//!
//! Pads to a whole number of blocks by appending `n` copies of the byte `n`,
//! where `n` is in `1..=block_size`; an already aligned input gains a full
//! block. Stripping is constant-time over the final block.

use alloc::vec;
use alloc::vec::Vec;
use pqseal_api::{validate, Error, Result};
use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};
use zeroize::Zeroizing;

/// Largest block size PKCS#7 can express in its one-byte pad value.
pub const MAX_BLOCK_SIZE: usize = 255;

fn check_block_size(context: &'static str, block_size: usize) -> Result<()> {
    validate::parameter(block_size != 0, context, "block size must be non-zero")?;
    validate::parameter(
        block_size <= MAX_BLOCK_SIZE,
        context,
        "block size must not exceed 255",
    )
}

/// Length of `len` bytes after padding to `block_size`.
///
/// Always strictly greater than `len`. A zero block size yields `len`.
pub const fn padded_len(len: usize, block_size: usize) -> usize {
    if block_size == 0 {
        return len;
    }
    len + (block_size - len % block_size)
}

/// Writes `data` followed by its padding into the front of `dest`.
///
/// Returns the padded length. Bytes of `dest` past that length are left
/// untouched.
pub fn pad_into(data: &[u8], block_size: usize, dest: &mut [u8]) -> Result<usize> {
    check_block_size("padding::pad_into", block_size)?;

    let total = padded_len(data.len(), block_size);
    validate::capacity("padding::pad_into", total, dest.len())?;

    let pad_value = (total - data.len()) as u8;
    dest[..data.len()].copy_from_slice(data);
    dest[data.len()..total].fill(pad_value);
    Ok(total)
}

/// Allocating form of [`pad_into`]; the result is wiped on drop.
pub fn pad(data: &[u8], block_size: usize) -> Result<Zeroizing<Vec<u8>>> {
    check_block_size("padding::pad", block_size)?;

    let mut out = Zeroizing::new(vec![0u8; padded_len(data.len(), block_size)]);
    pad_into(data, block_size, &mut out[..])?;
    Ok(out)
}

/// Strips PKCS#7 padding, returning the message prefix of `padded`.
///
/// Every byte of the final block is inspected whatever the pad value, and
/// the outcome is only branched on once.
pub fn unpad(padded: &[u8], block_size: usize) -> Result<&[u8]> {
    check_block_size("padding::unpad", block_size)?;

    if padded.is_empty() || padded.len() % block_size != 0 {
        return Err(Error::InvalidPadding {
            context: "padded length is not a positive multiple of the block size",
        });
    }

    let last_block = &padded[padded.len() - block_size..];
    let pad_value = last_block[block_size - 1];

    // Pad value in 1..=block_size; block_size <= len, so it never exceeds the length.
    let mut valid: Choice = !pad_value.ct_eq(&0) & !pad_value.ct_gt(&(block_size as u8));

    for (offset, byte) in last_block.iter().rev().enumerate() {
        let in_padding = (offset as u8).ct_lt(&pad_value);
        valid &= !in_padding | byte.ct_eq(&pad_value);
    }

    if bool::from(valid) {
        Ok(&padded[..padded.len() - pad_value as usize])
    } else {
        Err(Error::InvalidPadding {
            context: "malformed PKCS#7 padding",
        })
    }
}
