// mfrc522-rs/libmfrc522/src/protocol/commands/request.rs

use crate::constants::{PICC_HALT, PICC_REQALL, PICC_REQIDL};

/// Encode REQA (idle cards) or WUPA (idle and halted cards).
pub fn encode_request(wake_all: bool) -> [u8; 1] {
    if wake_all { [PICC_REQALL] } else { [PICC_REQIDL] }
}

/// Encode HLTA (CRC_A appended by the caller).
pub fn encode_halt() -> [u8; 2] {
    [PICC_HALT, 0x00]
}
