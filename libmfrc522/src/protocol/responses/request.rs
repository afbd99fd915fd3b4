// mfrc522-rs/libmfrc522/src/protocol/responses/request.rs

use crate::constants::ATQA_VALID_BITS;
use crate::protocol::{ResponseFrame, parser};
use crate::types::Atqa;
use crate::{Error, Result};

/// Decode the ATQA answering a REQA/WUPA. Anything but exactly 16 valid
/// bits means no (usable) card answered.
pub fn decode_atqa(frame: &ResponseFrame) -> Result<Atqa> {
    if frame.valid_bits() != ATQA_VALID_BITS {
        return Err(Error::NoCard {
            valid_bits: frame.valid_bits(),
        });
    }
    let bytes = parser::array_at::<2>(frame.data(), 0).map_err(|_| Error::NoCard {
        valid_bits: frame.valid_bits(),
    })?;
    Ok(Atqa::from_bytes(bytes))
}
