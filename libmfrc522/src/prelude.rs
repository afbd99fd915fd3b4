// mfrc522-rs/libmfrc522/src/prelude.rs

pub use crate::card::{Card, CardInfo, CardKind};
pub use crate::device::{Device, DeviceBuilder, ReaderConfig};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::protocol::{PiccCommand, Response};
pub use crate::session::{AccessList, CardSession, MemoryAccessList};
pub use crate::transport::{MockTransport, SpiTransport, Transport, VirtualCard};
pub use crate::{
    Atqa, AuthKey, BlockAddress, BlockData, Detection, Error, KeyType, Result, Uid, WritePhase,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
