//! Shared constants for the symmetric layer

pub mod symmetric;
