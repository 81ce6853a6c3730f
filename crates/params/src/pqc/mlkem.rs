//! Constants for the ML-KEM (FIPS 203) key encapsulation mechanism

/// ML-KEM polynomial degree
pub const MLKEM_N: usize = 256;

/// ML-KEM modulus
pub const MLKEM_Q: u16 = 3329;

/// Shared secret size in bytes, identical for every ML-KEM parameter set
pub const MLKEM_SS_BYTES: usize = 32;

/// Structure containing the sizes of one ML-KEM parameter set
pub struct MlKemParams {
    /// Number of polynomials (module rank)
    pub k: usize,

    /// Size of public (encapsulation) key in bytes
    pub public_key_size: usize,

    /// Size of secret (decapsulation) key in bytes
    pub secret_key_size: usize,

    /// Size of ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of shared secret in bytes
    pub shared_secret_size: usize,
}

/// ML-KEM-768 parameters (NIST security category 3)
pub const MLKEM768: MlKemParams = MlKemParams {
    k: 3,
    public_key_size: 1184,
    secret_key_size: 2400,
    ciphertext_size: 1088,
    shared_secret_size: MLKEM_SS_BYTES,
};

/// ML-KEM-768 public key size in bytes
pub const MLKEM768_PUBLIC_KEY_BYTES: usize = MLKEM768.public_key_size;

/// ML-KEM-768 secret key size in bytes
pub const MLKEM768_SECRET_KEY_BYTES: usize = MLKEM768.secret_key_size;

/// ML-KEM-768 ciphertext size in bytes
pub const MLKEM768_CIPHERTEXT_BYTES: usize = MLKEM768.ciphertext_size;
