// kem/src/mlkem/mod.rs

//! ML-KEM Key Encapsulation Mechanism (FIPS 203).
//!
//! ML-KEM is the standardized form of Kyber. Decapsulation uses implicit
//! rejection: a foreign ciphertext yields a pseudorandom secret, never an
//! error.

mod ml_kem_768;
mod types;

pub use self::ml_kem_768::MlKem768;
pub use self::types::{
    MlKem768Ciphertext, MlKem768KeyPair, MlKem768PublicKey, MlKem768SecretKey,
    MlKem768SharedSecret,
};
