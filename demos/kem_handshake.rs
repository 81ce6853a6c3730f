//! Time one ML-KEM-768 handshake and run the envelope self-test
//!
//! The shared secret is compared internally and never printed.

use pqseal::envelope::handshake::verify_kem_handshake;
use pqseal::envelope::round_trip;
use pqseal::prelude::{Aes256Cbc, MlKem768, SystemRandom};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(filter).init();

    let mut rng = SystemRandom;

    let report = verify_kem_handshake::<MlKem768, _>(&mut rng)?;
    info!(
        algorithm = report.algorithm,
        ciphertext_len = report.ciphertext_len,
        keygen_us = report.keygen.as_micros() as u64,
        encapsulate_us = report.encapsulate.as_micros() as u64,
        decapsulate_us = report.decapsulate.as_micros() as u64,
        total_us = report.total().as_micros() as u64,
        "handshake verified"
    );

    let selftest = round_trip::<MlKem768, Aes256Cbc, _, 64>(&mut rng, b"self-test")?;
    info!(
        kem = selftest.kem,
        cipher = selftest.cipher,
        padded_len = selftest.padded_len,
        wire_len = selftest.wire_len,
        "envelope self-test passed"
    );

    Ok(())
}
