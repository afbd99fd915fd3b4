// mfrc522-rs/libmfrc522/src/protocol/commands/auth.rs

use crate::types::{AuthKey, BlockAddress, Uid};

/// Encode the 12-byte MFAuthent packet:
/// `[auth_mode, block, key(6), uid(4)]`.
pub fn encode_auth(key: &AuthKey, block: BlockAddress, uid: &Uid) -> [u8; 12] {
    let mut packet = [0u8; 12];
    packet[0] = key.kind().auth_command();
    packet[1] = block.as_u8();
    packet[2..8].copy_from_slice(key.as_bytes());
    packet[8..12].copy_from_slice(uid.as_bytes());
    packet
}
