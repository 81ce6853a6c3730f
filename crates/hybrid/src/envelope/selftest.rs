//! Local round-trip self-test
//!
//! Generates a throwaway key pair, seals a payload to it, opens the packet
//! and compares the result with the input in constant time. Useful as a
//! power-on check on a device before it starts talking to a gateway.

use super::{EnvelopeBuilder, EnvelopeOpener};
use pqseal_api::{CbcCipher, Error, KemDimensions, Result};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::Zeroizing;

/// Outcome of a successful [`round_trip`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelfTestReport {
    pub kem: &'static str,
    pub cipher: &'static str,
    /// Length of the input payload
    pub payload_len: usize,
    /// Length of the padded, encrypted payload in the packet
    pub padded_len: usize,
    /// Size of the packet's wire encoding
    pub wire_len: usize,
}

/// Seals `payload` to a fresh key pair and opens it again.
///
/// Fails with `VerificationFailed` if the recovered bytes differ from the
/// input; any error from building or opening is returned unchanged.
pub fn round_trip<K, C, R, const CAP: usize>(
    rng: &mut R,
    payload: &[u8],
) -> Result<SelfTestReport>
where
    K: KemDimensions,
    C: CbcCipher,
    R: RngCore + CryptoRng,
{
    let keypair = K::keypair(rng)?;
    let public_key = K::public_key(&keypair);
    let secret_key = K::secret_key(&keypair);

    let packet = EnvelopeBuilder::<K, C>::build_for::<R, CAP>(rng, payload, &public_key)?;
    let padded_len = packet.payload_len();

    let recovered = Zeroizing::new(EnvelopeOpener::<K, C>::open(packet, &secret_key)?);

    if !bool::from(recovered[..].ct_eq(payload)) {
        debug!(kem = K::name(), "self-test mismatch");
        return Err(Error::VerificationFailed {
            context: "selftest::round_trip",
        });
    }

    Ok(SelfTestReport {
        kem: K::name(),
        cipher: C::name(),
        payload_len: payload.len(),
        padded_len,
        wire_len: super::SecurePacket::<K, CAP>::WIRE_LEN,
    })
}
