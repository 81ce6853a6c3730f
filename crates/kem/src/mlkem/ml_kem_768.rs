// kem/src/mlkem/ml_kem_768.rs

//! ML-KEM-768 (NIST PQC security category 3), backed by RustCrypto `ml-kem`.

use super::types::{
    MlKem768Ciphertext, MlKem768KeyPair, MlKem768PublicKey, MlKem768SecretKey,
    MlKem768SharedSecret,
};
use ::kem::{Decapsulate, Encapsulate};
use ml_kem::kem::{DecapsulationKey, EncapsulationKey};
use ml_kem::{EncodedSizeUser, KemCore, MlKem768Params};
use pqseal_api::{Error, Kem, KemDimensions, Result, SecretBytes, Serialize};
use pqseal_params::pqc::mlkem::{MLKEM768, MLKEM_SS_BYTES};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// ML-KEM-768 KEM, implementing `pqseal_api::Kem`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MlKem768;

impl Kem for MlKem768 {
    type PublicKey = MlKem768PublicKey;
    type SecretKey = MlKem768SecretKey;
    type SharedSecret = MlKem768SharedSecret;
    type Ciphertext = MlKem768Ciphertext;
    type KeyPair = MlKem768KeyPair;

    fn name() -> &'static str {
        "ML-KEM-768"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair> {
        let (decapsulation_key, encapsulation_key) = ml_kem::MlKem768::generate(rng);

        let mut dk_bytes = decapsulation_key.as_bytes();
        let secret = SecretBytes::from_slice(&dk_bytes[..]);
        dk_bytes[..].zeroize();

        let ek_bytes = encapsulation_key.as_bytes();
        let public_key = MlKem768PublicKey::from_bytes(&ek_bytes[..])?;

        Ok(MlKem768KeyPair {
            public_key,
            secret_key: MlKem768SecretKey(secret?),
        })
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.public_key.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.secret_key.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)> {
        let encapsulation_key =
            EncapsulationKey::<MlKem768Params>::from_bytes(&public_key.0.into());

        let (ciphertext, mut shared_key) =
            encapsulation_key
                .encapsulate(rng)
                .map_err(|_| Error::Encapsulation {
                    algorithm: Self::name(),
                    reason: "encapsulation key rejected",
                })?;

        let secret = SecretBytes::<MLKEM_SS_BYTES>::from_slice(&shared_key[..]);
        shared_key[..].zeroize();

        let ciphertext = MlKem768Ciphertext::from_bytes(&ciphertext[..])?;
        Ok((ciphertext, MlKem768SharedSecret(secret?)))
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Self::SharedSecret {
        let decapsulation_key =
            DecapsulationKey::<MlKem768Params>::from_bytes(&(*secret_key.0).into());

        // Implicit rejection: the backend cannot fail here.
        let mut shared_key = decapsulation_key
            .decapsulate(&ciphertext.0.into())
            .unwrap_or_default();

        let mut secret = [0u8; MLKEM_SS_BYTES];
        secret.copy_from_slice(&shared_key[..]);
        shared_key[..].zeroize();

        let shared = MlKem768SharedSecret(SecretBytes::new(secret));
        secret.zeroize();
        shared
    }
}

impl KemDimensions for MlKem768 {
    const PUBLIC_KEY_LEN: usize = MLKEM768.public_key_size;
    const SECRET_KEY_LEN: usize = MLKEM768.secret_key_size;
    const CIPHERTEXT_LEN: usize = MLKEM768.ciphertext_size;
    const SHARED_SECRET_LEN: usize = MLKEM768.shared_secret_size;
}
