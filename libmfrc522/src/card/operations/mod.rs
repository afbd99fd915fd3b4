// mfrc522-rs/libmfrc522/src/card/operations/mod.rs

/// MFAuthent and Crypto1 teardown.
pub mod auth;
/// READ, WRITE and HLTA.
pub mod block;
/// REQA/WUPA, anticollision and SELECT.
pub mod select;

// Re-export the operations at the module root so callers can use
// `crate::card::operations::read_block(...)`.
pub use auth::{authenticate, stop_crypto1};
pub use block::{halt, read_block, write_block};
pub use select::{anticollision, request, select};
