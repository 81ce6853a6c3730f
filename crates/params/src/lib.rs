//! Constant values for pqseal
//!
//! Sizes of the ML-KEM-768 wire types, AES-256-CBC parameters and the
//! secure packet layout. Everything here is fixed at compile time.

#![no_std]

pub mod envelope;
pub mod pqc;
pub mod utils;
