//! Seal a telemetry reading on the device side and open it on the gateway
//!
//! Run with `RUST_LOG=debug cargo run --example secure_packet` to see the
//! library's events. Only sizes and algorithm names are ever logged.

use pqseal::prelude::{
    Kem, MlKem768, MlKem768Aes256Builder, MlKem768Aes256Opener, MlKem768Packet, Serialize,
    SystemRandom,
};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

// NUL-terminated, 26 bytes on the wire.
const READING: &[u8] = b"{\"temp\": 24.5, \"hum\": 60}\0";

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt::Subscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let mut rng = SystemRandom;

    // Gateway: long-lived key pair, public key handed to devices.
    let gateway = MlKem768::keypair(&mut rng)?;
    let gateway_pk = gateway.public_key().to_bytes();
    info!(public_key_len = gateway_pk.len(), "gateway key pair ready");

    // Device: seal one reading into a fixed-size packet.
    let packet: MlKem768Packet =
        MlKem768Aes256Builder::build(&mut rng, READING, &gateway_pk)?;
    let line = packet.to_hex();
    info!(
        wire_len = MlKem768Packet::WIRE_LEN,
        payload_len = packet.payload_len(),
        "packet sealed"
    );

    // Link: the packet travels as one hex line.
    let received = MlKem768Packet::from_hex(&line)?;

    // Gateway: open it.
    match MlKem768Aes256Opener::open(received, gateway.secret_key()) {
        Ok(plaintext) => {
            info!(len = plaintext.len(), "packet opened");
            let text = plaintext.strip_suffix(b"\0").unwrap_or(&plaintext[..]);
            println!("{}", String::from_utf8_lossy(text));
        }
        Err(err) => {
            error!(%err, "packet rejected");
            return Err(err.into());
        }
    }

    // Oversized readings are refused rather than truncated.
    let oversized = [b'x'; 49];
    if let Err(err) = MlKem768Aes256Builder::build::<_, 64>(&mut rng, &oversized, &gateway_pk) {
        info!(%err, "oversized reading refused");
    }

    Ok(())
}
