// mfrc522-rs/libmfrc522/src/protocol/commands/write.rs

use crate::constants::PICC_WRITE;
use crate::types::{BlockAddress, BlockData};

/// First phase of a MIFARE WRITE: `[0xA0, block]`.
pub fn encode_write_command(block: BlockAddress) -> [u8; 2] {
    [PICC_WRITE, block.as_u8()]
}

/// Second phase: the 16 data bytes.
pub fn encode_write_data(data: &BlockData) -> [u8; 16] {
    *data.as_bytes()
}
