// mfrc522-rs/libmfrc522/src/protocol/commands/mod.rs

pub mod anticoll;
pub mod auth;
pub mod read;
pub mod request;
pub mod write;

pub use anticoll::{encode_anticollision, encode_select};
pub use auth::encode_auth;
pub use read::encode_read;
pub use request::{encode_halt, encode_request};
pub use write::{encode_write_command, encode_write_data};

use crate::constants::{BLOCK_SIZE, PICC_ANTICOLL1, PICC_ANTICOLL2, PICC_ANTICOLL3, SAK_LEN};
use crate::protocol::pcd::{FULL_BYTES, SHORT_FRAME};
use crate::types::{BlockAddress, BlockData, Uid};

/// Cascade level of an anticollision/select exchange.
///
/// Only level one is resolved by this driver (4-byte UIDs); the other
/// levels exist so the command byte can still be chosen explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CascadeLevel {
    #[default]
    One,
    Two,
    Three,
}

impl CascadeLevel {
    /// SEL byte for this cascade level.
    pub fn command(&self) -> u8 {
        match self {
            Self::One => PICC_ANTICOLL1,
            Self::Two => PICC_ANTICOLL2,
            Self::Three => PICC_ANTICOLL3,
        }
    }
}

/// Card-side commands sent through a Transceive. New commands should be
/// added here with their encoder in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone)]
pub enum PiccCommand {
    /// REQA (or WUPA when `wake_all`)
    Request { wake_all: bool },
    /// ANTICOLLISION with NVB 0x20.
    Anticollision { cascade: CascadeLevel },
    /// SELECT with NVB 0x70, UID, BCC and CRC_A.
    Select { cascade: CascadeLevel, uid: Uid },
    /// READ one block.
    Read { block: BlockAddress },
    /// First WRITE phase: command and address.
    WriteCommand { block: BlockAddress },
    /// Second WRITE phase: the 16 data bytes.
    WriteData { data: BlockData },
    /// HLTA.
    Halt,
}

impl PiccCommand {
    /// First byte of the encoded payload (data writes have none).
    pub fn command_code(&self) -> Option<u8> {
        match self {
            Self::WriteData { .. } => None,
            other => other.encode().first().copied(),
        }
    }

    /// Encode the payload, without the trailing CRC_A.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Request { wake_all } => encode_request(*wake_all).to_vec(),
            Self::Anticollision { cascade } => encode_anticollision(*cascade).to_vec(),
            Self::Select { cascade, uid } => encode_select(*cascade, &uid.with_bcc()),
            Self::Read { block } => encode_read(*block).to_vec(),
            Self::WriteCommand { block } => encode_write_command(*block).to_vec(),
            Self::WriteData { data } => encode_write_data(data).to_vec(),
            Self::Halt => encode_halt().to_vec(),
        }
    }

    /// Whether a CRC_A from the coprocessor must be appended.
    pub fn needs_crc(&self) -> bool {
        !matches!(self, Self::Request { .. } | Self::Anticollision { .. })
    }

    /// Receive buffer handed to the executor; longer answers are clamped.
    pub fn max_response_len(&self) -> usize {
        match self {
            Self::Request { .. } => 16,
            Self::Anticollision { .. } => 10,
            Self::Select { .. } => SAK_LEN,
            Self::Read { .. } => BLOCK_SIZE + 2,
            Self::WriteCommand { .. } | Self::WriteData { .. } | Self::Halt => 2,
        }
    }

    /// Value for `BitFramingReg.TxLastBits`.
    pub fn tx_last_bits(&self) -> u8 {
        match self {
            Self::Request { .. } => SHORT_FRAME,
            _ => FULL_BYTES,
        }
    }
}
