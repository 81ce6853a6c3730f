//! Recipient side of the envelope

use super::{check_suite, SecurePacket};
use alloc::vec::Vec;
use core::marker::PhantomData;
use pqseal_api::{CbcCipher, Error, KemDimensions, Result, SerializeSecret};
use pqseal_params::envelope::PACKET_BLOCK_SIZE;
use pqseal_symmetric::padding::unpad;
use tracing::debug;
use zeroize::Zeroize;

/// Opens packets with the recipient secret key.
///
/// Opening a packet built for another key pair fails with `InvalidPadding`
/// in all but a negligible fraction of cases; it never panics and never
/// yields the sender's plaintext.
pub struct EnvelopeOpener<K, C> {
    _kem: PhantomData<K>,
    _cipher: PhantomData<C>,
}

impl<K, C> EnvelopeOpener<K, C>
where
    K: KemDimensions,
    C: CbcCipher,
{
    /// Recovers the payload sealed in `packet`.
    pub fn open<const CAP: usize>(
        packet: SecurePacket<K, CAP>,
        secret_key: &K::SecretKey,
    ) -> Result<Vec<u8>> {
        check_suite::<K, C>("EnvelopeOpener::open")?;

        let mut shared_secret = K::decapsulate(secret_key, packet.kem_ciphertext());
        let key = shared_secret.to_bytes_zeroizing();
        shared_secret.zeroize();

        let padded = C::decrypt_cbc(&key, packet.iv(), packet.ciphertext())?;

        match unpad(&padded, PACKET_BLOCK_SIZE) {
            Ok(plaintext) => {
                debug!(
                    kem = K::name(),
                    cipher = C::name(),
                    payload = plaintext.len(),
                    "envelope opened"
                );
                Ok(plaintext.to_vec())
            }
            Err(err) => {
                debug!(
                    kem = K::name(),
                    payload_len = packet.payload_len(),
                    "envelope rejected"
                );
                Err(err)
            }
        }
    }

    /// Like [`EnvelopeOpener::open`], parsing the encoded secret key first.
    pub fn open_with_key_bytes<const CAP: usize>(
        packet: SecurePacket<K, CAP>,
        secret_key: &[u8],
    ) -> Result<Vec<u8>> {
        let secret_key = K::SecretKey::from_bytes(secret_key).map_err(|_| Error::InvalidKey {
            context: "EnvelopeOpener::open_with_key_bytes",
            reason: "secret key has the wrong length",
        })?;
        Self::open(packet, &secret_key)
    }
}

impl<K, C> Default for EnvelopeOpener<K, C> {
    fn default() -> Self {
        Self {
            _kem: PhantomData,
            _cipher: PhantomData,
        }
    }
}
