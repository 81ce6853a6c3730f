//! Envelope construction and opening.
//!
//! [`EnvelopeBuilder`] and [`EnvelopeOpener`] are stateless engines
//! parameterised by a KEM and a CBC cipher. The cipher key is the raw KEM
//! shared secret, so the pairing is only valid when the shared secret length
//! equals the cipher key size; this is checked before any encryption.

mod builder;
mod opener;
mod packet;
pub mod selftest;


pub use builder::EnvelopeBuilder;
pub use opener::EnvelopeOpener;
pub use packet::SecurePacket;

use pqseal_api::{validate, CbcCipher, KemDimensions, Result};
use pqseal_params::envelope::{PACKET_BLOCK_SIZE, PACKET_IV_SIZE};

/// Checks that `K` and `C` can be combined into a packet.
fn check_suite<K: KemDimensions, C: CbcCipher>(context: &'static str) -> Result<()> {
    validate::length(context, K::SHARED_SECRET_LEN, C::KEY_SIZE)?;
    validate::parameter(
        C::BLOCK_SIZE == PACKET_BLOCK_SIZE && PACKET_IV_SIZE == C::BLOCK_SIZE,
        context,
        "cipher block size does not match the packet layout",
    )
}
