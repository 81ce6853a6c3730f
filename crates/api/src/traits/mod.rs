//! Traits through which the envelope consumes its primitives

pub mod cipher;
pub mod kem;
pub mod random;
pub mod serialize;

pub use cipher::CbcCipher;
pub use kem::{Kem, KemDimensions};
pub use random::RandomSource;
pub use serialize::{Serialize, SerializeSecret};
