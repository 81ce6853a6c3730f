//! A toy XOR key encapsulation
//!
//! The public key equals the secret key, the ciphertext is a random mask and
//! the shared secret is `mask ^ key`. Worthless as cryptography, but every
//! value is predictable, which is what envelope tests need.

use pqseal_api::{
    validate, Error, Kem, KemDimensions, RandomSource, Result, SecretBytes, Serialize,
};
use rand::{CryptoRng, RngCore};

/// Plain fixed-size bytes used for toy public keys and ciphertexts
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToyBytes<const N: usize>(pub [u8; N]);

impl<const N: usize> Serialize for ToyBytes<N> {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("ToyBytes::from_bytes", bytes.len(), N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(Self(out))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

/// XOR KEM with `N`-byte keys; `FAULTY` corrupts every decapsulated secret.
#[derive(Debug, Clone, Copy, Default)]
pub struct XorKem<const N: usize, const FAULTY: bool>;

/// Well-behaved toy KEM with a 32-byte secret, matching AES-256
pub type ToyKem = XorKem<32, false>;

/// Toy KEM whose 16-byte secret cannot key AES-256
pub type ShortSecretKem = XorKem<16, false>;

/// Toy KEM whose two sides never agree
pub type FaultyKem = XorKem<32, true>;

fn xor<const N: usize>(a: &[u8; N], b: &[u8; N]) -> [u8; N] {
    let mut out = [0u8; N];
    for (o, (x, y)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
        *o = x ^ y;
    }
    out
}

impl<const N: usize, const FAULTY: bool> Kem for XorKem<N, FAULTY> {
    type PublicKey = ToyBytes<N>;
    type SecretKey = SecretBytes<N>;
    type SharedSecret = SecretBytes<N>;
    type Ciphertext = ToyBytes<N>;
    type KeyPair = (ToyBytes<N>, SecretBytes<N>);

    fn name() -> &'static str {
        "toy-xor"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair> {
        let mut key = [0u8; N];
        RandomSource::fill(rng, &mut key)?;
        Ok((ToyBytes(key), SecretBytes::new(key)))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)> {
        if public_key.0.iter().all(|&b| b == 0) {
            return Err(Error::Encapsulation {
                algorithm: Self::name(),
                reason: "all-zero public key",
            });
        }
        let mut mask = [0u8; N];
        RandomSource::fill(rng, &mut mask)?;
        let secret = xor(&mask, &public_key.0);
        Ok((ToyBytes(mask), SecretBytes::new(secret)))
    }

    fn decapsulate(secret_key: &Self::SecretKey, ciphertext: &Self::Ciphertext) -> Self::SharedSecret {
        let mut secret = xor(&ciphertext.0, secret_key);
        if FAULTY && N > 0 {
            secret[0] ^= 0x01;
        }
        SecretBytes::new(secret)
    }
}

impl<const N: usize, const FAULTY: bool> KemDimensions for XorKem<N, FAULTY> {
    const PUBLIC_KEY_LEN: usize = N;
    const SECRET_KEY_LEN: usize = N;
    const CIPHERTEXT_LEN: usize = N;
    const SHARED_SECRET_LEN: usize = N;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pqseal_api::SerializeSecret;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_toy_kem_agrees() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let keypair = ToyKem::keypair(&mut rng).unwrap();
        let (ct, ss) = ToyKem::encapsulate(&mut rng, &ToyKem::public_key(&keypair)).unwrap();
        let recovered = ToyKem::decapsulate(&ToyKem::secret_key(&keypair), &ct);
        assert_eq!(ss, recovered);
        assert_eq!(ss.to_bytes_zeroizing().len(), 32);
    }

    #[test]
    fn test_faulty_kem_disagrees() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let keypair = FaultyKem::keypair(&mut rng).unwrap();
        let (ct, ss) = FaultyKem::encapsulate(&mut rng, &keypair.0).unwrap();
        assert_ne!(ss, FaultyKem::decapsulate(&keypair.1, &ct));
    }
}
