//! Error type definitions for envelope operations

use core::fmt;

/// Primary error type for envelope operations
///
/// Every variant carries only static context and sizes, so an error can be
/// reported or logged without leaking key material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The KEM rejected the recipient public key.
    ///
    /// Fatal to the build attempt that raised it; never retried.
    Encapsulation {
        algorithm: &'static str,
        reason: &'static str,
    },

    /// The payload does not fit the packet with a block to spare.
    ///
    /// The largest accepted payload is `capacity` minus one block.
    ///
    /// The caller must chunk or reject the input; it is never truncated.
    PayloadTooLarge {
        capacity: usize,
        padded: usize,
    },

    /// A padding step would overrun its destination buffer.
    BufferOverflow {
        context: &'static str,
        capacity: usize,
        required: usize,
    },

    /// Padding check failed after decryption.
    ///
    /// Raised for a mismatched key pair and for corrupted data alike; the two
    /// causes are indistinguishable without an integrity tag.
    InvalidPadding {
        context: &'static str,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid key error
    InvalidKey {
        context: &'static str,
        reason: &'static str,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        reason: &'static str,
    },

    /// Serialization error
    SerializationError {
        context: &'static str,
        reason: &'static str,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
    },

    /// A self-check produced mismatching values
    VerificationFailed {
        context: &'static str,
    },
}

/// Result type for envelope operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind and sizes.
    ///
    /// Variants without a context field come back unchanged.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            err @ (Self::Encapsulation { .. } | Self::PayloadTooLarge { .. }) => err,
            Self::BufferOverflow { capacity, required, .. } => Self::BufferOverflow {
                context,
                capacity,
                required,
            },
            Self::InvalidPadding { .. } => Self::InvalidPadding { context },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidKey { reason, .. } => Self::InvalidKey { context, reason },
            Self::InvalidParameter { reason, .. } => Self::InvalidParameter { context, reason },
            Self::SerializationError { reason, .. } => Self::SerializationError { context, reason },
            Self::RandomGenerationError { .. } => Self::RandomGenerationError { context },
            Self::VerificationFailed { .. } => Self::VerificationFailed { context },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encapsulation { algorithm, reason } => {
                write!(f, "Encapsulation failed for {}: {}", algorithm, reason)
            }
            Self::PayloadTooLarge { capacity, padded } => {
                write!(
                    f,
                    "Payload too large: padded length {} leaves no spare block in packet capacity {}",
                    padded, capacity
                )
            }
            Self::BufferOverflow {
                context,
                capacity,
                required,
            } => {
                write!(
                    f,
                    "{}: buffer overflow (capacity {}, required {})",
                    context, capacity, required
                )
            }
            Self::InvalidPadding { context } => {
                write!(f, "Invalid padding: {}", context)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidKey { context, reason } => {
                write!(f, "Invalid key: {}: {}", context, reason)
            }
            Self::InvalidParameter { context, reason } => {
                write!(f, "{}: {}", context, reason)
            }
            Self::SerializationError { context, reason } => {
                write!(f, "Serialization error: {}: {}", context, reason)
            }
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            }
            Self::VerificationFailed { context } => {
                write!(f, "Verification failed: {}", context)
            }
        }
    }
}
