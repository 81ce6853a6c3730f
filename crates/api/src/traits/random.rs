//! Secure random byte source

use crate::{Error, Result};
use rand::{CryptoRng, RngCore};

/// Supplies cryptographically secure random bytes.
///
/// Every `RngCore + CryptoRng` is a `RandomSource`; a generator failure is
/// surfaced as [`Error::RandomGenerationError`] instead of a panic.
pub trait RandomSource {
    /// Fills `dest` entirely with random bytes.
    fn fill(&mut self, dest: &mut [u8]) -> Result<()>;
}

impl<R: RngCore + CryptoRng + ?Sized> RandomSource for R {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        self.try_fill_bytes(dest)
            .map_err(|_| Error::RandomGenerationError {
                context: "RandomSource::fill",
            })
    }
}

/// Operating system generator.
///
/// Zero-sized and `Copy`, so independent threads can each hold one without
/// synchronization; every call reads fresh bytes from the OS.
#[cfg(feature = "std")]
pub use rand::rngs::OsRng as SystemRandom;
