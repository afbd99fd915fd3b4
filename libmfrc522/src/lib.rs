// mfrc522-rs/libmfrc522/src/lib.rs

//! libmfrc522
//!
//! Pure Rust driver for NXP MFRC522 contactless readers and the MIFARE
//! Classic cards they talk to. The chip is reached through a [`Transport`]
//! (SPI via `embedded-hal`, or the in-crate simulator used by the tests).
#![warn(missing_docs)]

/// Selected cards and the PICC-level operations on them.
pub mod card;
pub mod constants;
/// Reader handle, configuration and command execution.
pub mod device;
/// Crate error type.
pub mod error;
/// Common imports.
pub mod prelude;
/// Registers, PCD commands and PICC frame encoding/decoding.
pub mod protocol;
pub mod session;
pub mod test_support;
/// Register-level access to the chip.
pub mod transport;
/// UIDs, keys, block addresses and other small value types.
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
