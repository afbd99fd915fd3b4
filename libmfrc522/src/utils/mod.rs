// mfrc522-rs/libmfrc522/src/utils/mod.rs
//! Small helpers shared across the crate: hex formatting and delays.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
