//! KEM handshake diagnostic
//!
//! Runs one full key generation, encapsulation and decapsulation, checks that
//! both sides derived the same secret and times each stage. Only sizes and
//! timings are reported; the secret never leaves this module.

use pqseal_api::{Error, Kem, Result, Serialize, SerializeSecret};
use rand::{CryptoRng, RngCore};
use std::time::{Duration, Instant};
use subtle::ConstantTimeEq;
use tracing::{debug, warn};
use zeroize::Zeroize;

/// Sizes and stage timings of a verified handshake
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HandshakeReport {
    pub algorithm: &'static str,
    pub public_key_len: usize,
    pub ciphertext_len: usize,
    pub shared_secret_len: usize,
    pub keygen: Duration,
    pub encapsulate: Duration,
    pub decapsulate: Duration,
}

impl HandshakeReport {
    /// Sum of the three stage timings
    pub fn total(&self) -> Duration {
        self.keygen + self.encapsulate + self.decapsulate
    }
}

/// Performs and checks a single KEM exchange with itself.
pub fn verify_kem_handshake<K, R>(rng: &mut R) -> Result<HandshakeReport>
where
    K: Kem,
    R: RngCore + CryptoRng,
{
    let started = Instant::now();
    let keypair = K::keypair(rng)?;
    let keygen = started.elapsed();

    let public_key = K::public_key(&keypair);
    let mut secret_key = K::secret_key(&keypair);

    let started = Instant::now();
    let (ciphertext, mut sender_secret) = K::encapsulate(rng, &public_key)?;
    let encapsulate = started.elapsed();

    let started = Instant::now();
    let mut recipient_secret = K::decapsulate(&secret_key, &ciphertext);
    let decapsulate = started.elapsed();
    secret_key.zeroize();

    let sender_bytes = sender_secret.to_bytes_zeroizing();
    let recipient_bytes = recipient_secret.to_bytes_zeroizing();
    sender_secret.zeroize();
    recipient_secret.zeroize();

    if !bool::from(sender_bytes[..].ct_eq(&recipient_bytes[..])) {
        warn!(algorithm = K::name(), "shared secrets differ");
        return Err(Error::VerificationFailed {
            context: "verify_kem_handshake",
        });
    }

    let report = HandshakeReport {
        algorithm: K::name(),
        public_key_len: public_key.encoded_len(),
        ciphertext_len: ciphertext.encoded_len(),
        shared_secret_len: sender_bytes.len(),
        keygen,
        encapsulate,
        decapsulate,
    };

    debug!(
        algorithm = report.algorithm,
        keygen_us = report.keygen.as_micros() as u64,
        encapsulate_us = report.encapsulate.as_micros() as u64,
        decapsulate_us = report.decapsulate.as_micros() as u64,
        "KEM handshake verified"
    );

    Ok(report)
}
