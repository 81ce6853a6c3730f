//! Sender side of the envelope

use super::{check_suite, SecurePacket};
use core::marker::PhantomData;
use pqseal_api::{validate, CbcCipher, Error, KemDimensions, RandomSource, Result, Serialize, SerializeSecret};
use pqseal_params::envelope::{PACKET_BLOCK_SIZE, PACKET_IV_SIZE};
use pqseal_symmetric::padding::{pad_into, padded_len};
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};
use zeroize::{Zeroize, Zeroizing};

/// Seals payloads for a recipient public key.
///
/// Each call encapsulates afresh and draws a new IV; nothing is carried over
/// from one packet to the next.
pub struct EnvelopeBuilder<K, C> {
    _kem: PhantomData<K>,
    _cipher: PhantomData<C>,
}

impl<K, C> EnvelopeBuilder<K, C>
where
    K: KemDimensions,
    C: CbcCipher,
{
    /// Seals `payload` for the recipient whose encoded public key is given.
    ///
    /// A public key that fails to parse is reported as an encapsulation
    /// failure, the same as one the KEM itself rejects.
    pub fn build<R, const CAP: usize>(
        rng: &mut R,
        payload: &[u8],
        recipient_public_key: &[u8],
    ) -> Result<SecurePacket<K, CAP>>
    where
        R: RngCore + CryptoRng,
    {
        let public_key =
            K::PublicKey::from_bytes(recipient_public_key).map_err(|_| Error::Encapsulation {
                algorithm: K::name(),
                reason: "malformed recipient public key",
            })?;
        Self::build_for(rng, payload, &public_key)
    }

    /// Seals `payload` for an already parsed public key.
    pub fn build_for<R, const CAP: usize>(
        rng: &mut R,
        payload: &[u8],
        recipient_public_key: &K::PublicKey,
    ) -> Result<SecurePacket<K, CAP>>
    where
        R: RngCore + CryptoRng,
    {
        check_suite::<K, C>("EnvelopeBuilder::build")?;

        let (kem_ciphertext, mut shared_secret) = K::encapsulate(rng, recipient_public_key)
            .map_err(|err| match err {
                Error::Encapsulation { .. } | Error::RandomGenerationError { .. } => err,
                _ => Error::Encapsulation {
                    algorithm: K::name(),
                    reason: "recipient public key rejected",
                },
            })?;
        let key = shared_secret.to_bytes_zeroizing();
        shared_secret.zeroize();

        // One block of headroom is always reserved.
        if payload.len() + PACKET_BLOCK_SIZE > CAP {
            let padded = padded_len(payload.len(), PACKET_BLOCK_SIZE);
            debug!(
                payload = payload.len(),
                padded,
                capacity = CAP,
                "payload does not fit the packet"
            );
            return Err(Error::PayloadTooLarge {
                capacity: CAP,
                padded,
            });
        }

        let mut working = Zeroizing::new([0u8; CAP]);
        let payload_len = pad_into(payload, PACKET_BLOCK_SIZE, &mut working[..])?;

        let mut iv = [0u8; PACKET_IV_SIZE];
        RandomSource::fill(rng, &mut iv)?;

        let ciphertext = C::encrypt_cbc(&key, &iv, &working[..payload_len])?;
        validate::length("EnvelopeBuilder::build", ciphertext.len(), payload_len)?;

        let mut encrypted_payload = [0u8; CAP];
        encrypted_payload[..payload_len].copy_from_slice(&ciphertext);

        let wire_len = u32::try_from(payload_len).map_err(|_| Error::InvalidParameter {
            context: "EnvelopeBuilder::build",
            reason: "payload length exceeds the u32 length field",
        })?;

        trace!(kem = K::name(), cipher = C::name(), "payload encrypted");
        debug!(
            kem = K::name(),
            cipher = C::name(),
            payload = payload.len(),
            payload_len,
            "envelope built"
        );

        Ok(SecurePacket::new(
            kem_ciphertext,
            iv,
            encrypted_payload,
            wire_len,
        ))
    }
}

impl<K, C> Default for EnvelopeBuilder<K, C> {
    fn default() -> Self {
        Self {
            _kem: PhantomData,
            _cipher: PhantomData,
        }
    }
}
