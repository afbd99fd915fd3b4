// mfrc522-rs/libmfrc522/src/protocol/responses/select.rs

use crate::constants::{ANTICOLL_LEN, SAK_LEN, SAK_VALID_BITS};
use crate::protocol::{ResponseFrame, parser};
use crate::types::Uid;
use crate::{Error, Result};

/// Decode an anticollision answer: 4 UID bytes followed by their BCC.
pub fn decode_anticollision(frame: &ResponseFrame) -> Result<Uid> {
    parser::ensure_exact_len(frame, ANTICOLL_LEN)?;
    let bytes = parser::array_at::<5>(frame.data(), 0)?;
    Uid::from_anticollision(&bytes)
}

/// Decode the select acknowledge. The answer must be SAK + CRC_A:
/// exactly 3 bytes and 24 valid bits.
pub fn decode_sak(frame: &ResponseFrame) -> Result<u8> {
    if frame.len() != SAK_LEN || frame.valid_bits() != SAK_VALID_BITS {
        return Err(Error::SelectFailed {
            len: frame.len(),
            valid_bits: frame.valid_bits(),
        });
    }
    parser::byte_at(frame.data(), 0)
}
