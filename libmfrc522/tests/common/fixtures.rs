// fixtures.rs: commonly used UIDs, frames and blocks

use libmfrc522::protocol::crc_a_bytes;
use libmfrc522::types::{AuthKey, BlockData, Uid};

pub fn sample_uid_bytes() -> [u8; 4] {
    [0x04, 0x11, 0x22, 0x33]
}

pub fn sample_uid() -> Uid {
    Uid::from_bytes(sample_uid_bytes())
}

/// UID followed by its BCC, as returned by anticollision.
pub fn anticollision_answer() -> Vec<u8> {
    vec![0x04, 0x11, 0x22, 0x33, 0x04]
}

/// SELECT frame for the sample UID including CRC_A.
pub fn select_frame() -> Vec<u8> {
    hex::decode("93700411223304fb47").unwrap()
}

/// SAK 0x08 (MIFARE Classic 1K) with its CRC_A.
pub fn sak_answer() -> Vec<u8> {
    let mut answer = vec![0x08];
    answer.extend_from_slice(&crc_a_bytes(&[0x08]));
    answer
}

pub fn factory_key() -> AuthKey {
    AuthKey::factory_default()
}

pub fn sample_blockdata(fill: u8) -> BlockData {
    BlockData::from_bytes([fill; 16])
}

pub fn text_block() -> BlockData {
    BlockData::from_bytes(*b"hello, mifare!!\0")
}
