// mfrc522-rs/libmfrc522/src/constants.rs
//! PICC (card side) command bytes and MIFARE Classic 1K geometry.

/// REQA: wake cards in IDLE state (7-bit short frame)
pub const PICC_REQIDL: u8 = 0x26;
/// WUPA: wake cards in IDLE or HALT state
pub const PICC_REQALL: u8 = 0x52;

/// Select / anticollision commands per cascade level
pub const PICC_ANTICOLL1: u8 = 0x93;
pub const PICC_ANTICOLL2: u8 = 0x95;
pub const PICC_ANTICOLL3: u8 = 0x97;

/// NVB for anticollision: 2 whole bytes sent, no UID bits known
pub const PICC_NVB_ANTICOLL: u8 = 0x20;
/// NVB for select: 7 whole bytes sent (cmd, NVB, UID, BCC)
pub const PICC_NVB_SELECT: u8 = 0x70;

pub const PICC_AUTHENT1A: u8 = 0x60;
pub const PICC_AUTHENT1B: u8 = 0x61;

pub const PICC_READ: u8 = 0x30;
pub const PICC_WRITE: u8 = 0xA0;

/// HLTA, followed by a 0x00 parameter byte
pub const PICC_HALT: u8 = 0x50;

/// MIFARE 4-bit acknowledge
pub const MIFARE_ACK: u8 = 0x0A;

pub const BLOCK_SIZE: usize = 16;
pub const BLOCKS_PER_SECTOR: u8 = 4;
pub const SECTOR_COUNT: u8 = 16;
/// Highest addressable block on a single-density (1K) card
pub const MAX_BLOCK_ADDRESS: u8 = SECTOR_COUNT * BLOCKS_PER_SECTOR - 1;

/// Valid bits of an ATQA answer (2 whole bytes)
pub const ATQA_VALID_BITS: usize = 16;
/// Valid bits of a SAK answer (SAK + CRC_A)
pub const SAK_VALID_BITS: usize = 24;
/// Bytes of a SAK answer including its CRC_A
pub const SAK_LEN: usize = 3;
/// UID + BCC
pub const ANTICOLL_LEN: usize = 5;
