// mfrc522-rs/libmfrc522/src/protocol/commands/anticoll.rs

use super::CascadeLevel;
use crate::constants::{PICC_NVB_ANTICOLL, PICC_NVB_SELECT};

/// Encode an anticollision request: `[SEL, NVB=0x20]`.
pub fn encode_anticollision(cascade: CascadeLevel) -> [u8; 2] {
    [cascade.command(), PICC_NVB_ANTICOLL]
}

/// Encode a select: `[SEL, NVB=0x70, uid...]`. At most 5 UID bytes
/// (UID + BCC) are copied; extra bytes are ignored.
pub fn encode_select(cascade: CascadeLevel, uid_with_bcc: &[u8]) -> Vec<u8> {
    let copy_len = uid_with_bcc.len().min(5);
    let mut buf = Vec::with_capacity(2 + copy_len + 2);
    buf.push(cascade.command());
    buf.push(PICC_NVB_SELECT);
    buf.extend_from_slice(&uid_with_bcc[..copy_len]);
    buf
}
