// mfrc522-rs/libmfrc522/src/protocol/commands/read.rs

use crate::constants::PICC_READ;
use crate::types::BlockAddress;

/// Encode a MIFARE READ: `[0x30, block]` (CRC_A appended by the caller).
pub fn encode_read(block: BlockAddress) -> [u8; 2] {
    [PICC_READ, block.as_u8()]
}
