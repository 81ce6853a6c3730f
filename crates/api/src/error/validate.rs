//! Validation utilities shared by the envelope crates

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter { context, reason });
    }
    Ok(())
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a length is a whole number of blocks
#[inline(always)]
pub fn block_aligned(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if block_size == 0 || actual % block_size != 0 {
        let expected = if block_size == 0 {
            0
        } else {
            (actual / block_size + 1) * block_size
        };
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that `required` bytes fit in a buffer of `capacity` bytes
#[inline(always)]
pub fn capacity(context: &'static str, required: usize, capacity: usize) -> Result<()> {
    if required > capacity {
        return Err(Error::BufferOverflow {
            context,
            capacity,
            required,
        });
    }
    Ok(())
}
