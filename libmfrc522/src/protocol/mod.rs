// mfrc522-rs/libmfrc522/src/protocol/mod.rs

/// Software CRC_A and BCC.
pub mod checksum;
/// PICC command encoding.
pub mod commands;
/// ErrorReg flags.
pub mod error_bits;
/// Received frames with bit counts.
pub mod frame;
pub mod parser;
pub mod pcd;
/// Register map and SPI address bytes.
pub mod registers;
/// PICC response decoding.
pub mod responses;

pub use checksum::{bcc, crc_a, crc_a_bytes};
pub use commands::{CascadeLevel, PiccCommand};
pub use error_bits::ErrorBits;
pub use frame::ResponseFrame;
pub use pcd::PcdCommand;
pub use registers::Register;
pub use responses::Response;
