// mfrc522-rs/libmfrc522/src/device/mod.rs

/// Fluent construction of a [`Device`].
pub mod builder;
pub mod config;
mod crc;
mod executor;
/// The typestate reader handle.
pub mod handle;

pub use builder::DeviceBuilder;
pub use config::ReaderConfig;
pub use handle::{Device, Initialized, Uninitialized};
