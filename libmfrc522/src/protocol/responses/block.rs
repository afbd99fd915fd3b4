// mfrc522-rs/libmfrc522/src/protocol/responses/block.rs

use crate::constants::{BLOCK_SIZE, MIFARE_ACK};
use crate::protocol::ResponseFrame;
use crate::types::{BlockData, WritePhase};
use crate::{Error, Result};

/// Decode a READ answer: exactly 16 data bytes.
pub fn decode_block(frame: &ResponseFrame) -> Result<BlockData> {
    if frame.len() != BLOCK_SIZE {
        return Err(Error::ReadError { len: frame.len() });
    }
    BlockData::try_from(frame.data())
}

/// Decode a 4-bit MIFARE ACK: one byte whose low nibble is `0x0A`.
pub fn decode_ack(frame: &ResponseFrame, phase: WritePhase) -> Result<()> {
    match frame.data() {
        [ack] if ack & 0x0F == MIFARE_ACK => Ok(()),
        data => Err(Error::WriteRejected {
            phase,
            ack: data.first().copied(),
        }),
    }
}
