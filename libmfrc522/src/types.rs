// mfrc522-rs/libmfrc522/src/types.rs

use crate::Error;
use crate::constants::{BLOCKS_PER_SECTOR, MAX_BLOCK_ADDRESS};
use derive_more::Display;
use std::convert::TryFrom;

/// Single-cascade card UID (4 bytes). The BCC is derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid([u8; 4]);

impl Uid {
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Block check character: XOR of the four UID bytes.
    pub fn bcc(&self) -> u8 {
        crate::protocol::checksum::bcc(&self.0)
    }

    /// UID followed by its BCC, as sent on the wire during selection.
    pub fn with_bcc(&self) -> [u8; 5] {
        let [a, b, c, d] = self.0;
        [a, b, c, d, self.bcc()]
    }

    /// Validate a 5-byte anticollision answer (`uid[0..4]`, BCC).
    pub fn from_anticollision(frame: &[u8; 5]) -> Result<Self, Error> {
        let uid = Self([frame[0], frame[1], frame[2], frame[3]]);
        let expected = uid.bcc();
        if frame[4] != expected {
            return Err(Error::ChecksumMismatch {
                expected,
                actual: frame[4],
            });
        }
        Ok(uid)
    }

    /// Fixed-width lowercase hex, e.g. `"04112233"`.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    /// Accepts either the bare 4 UID bytes or UID + BCC (which is checked).
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes.len() {
            4 => Ok(Self([bytes[0], bytes[1], bytes[2], bytes[3]])),
            5 => {
                let mut arr = [0u8; 5];
                arr.copy_from_slice(bytes);
                Self::from_anticollision(&arr)
            }
            n => Err(Error::InvalidLength {
                expected: 4,
                actual: n,
            }),
        }
    }
}

impl std::str::FromStr for Uid {
    type Err = Error;

    /// Parse the 8-digit hex form produced by [`Uid::to_hex`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::utils::parse_hex_array::<4>(s)
            .map(Self)
            .map_err(Error::InvalidHex)
    }
}

impl std::fmt::Display for Uid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// MIFARE Classic key slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyType {
    /// Key A (`0x60`).
    A,
    /// Key B (`0x61`).
    B,
}

impl KeyType {
    /// PICC authentication command byte for this key slot.
    pub fn auth_command(&self) -> u8 {
        match self {
            KeyType::A => crate::constants::PICC_AUTHENT1A,
            KeyType::B => crate::constants::PICC_AUTHENT1B,
        }
    }
}

/// 6-byte sector key tagged with its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthKey {
    kind: KeyType,
    bytes: [u8; 6],
}

impl AuthKey {
    pub const fn new(kind: KeyType, bytes: [u8; 6]) -> Self {
        Self { kind, bytes }
    }

    /// Key A with the given bytes.
    pub const fn key_a(bytes: [u8; 6]) -> Self {
        Self::new(KeyType::A, bytes)
    }

    /// Key B with the given bytes.
    pub const fn key_b(bytes: [u8; 6]) -> Self {
        Self::new(KeyType::B, bytes)
    }

    /// Factory transport key (`FF FF FF FF FF FF`) in slot A.
    pub const fn factory_default() -> Self {
        Self::key_a([0xFF; 6])
    }

    /// Parse 12 hex digits, e.g. `"FF:FF:FF:FF:FF:FF"`.
    pub fn from_hex(kind: KeyType, s: &str) -> Result<Self, Error> {
        crate::utils::parse_hex_array::<6>(s)
            .map(|bytes| Self::new(kind, bytes))
            .map_err(Error::InvalidHex)
    }

    pub fn kind(&self) -> KeyType {
        self.kind
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.bytes
    }
}

/// BlockData (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; 16]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    /// Printable ASCII, other bytes shown as `.`.
    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 16 {
            return Err(Error::InvalidLength {
                expected: 16,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Absolute block number on a 1K card (0..=63).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockAddress(u8);

impl BlockAddress {
    /// `sector * 4 + block % 4`, rejected when past the last block.
    pub fn from_sector(sector: u8, block: u8) -> Result<Self, Error> {
        let absolute =
            sector as u16 * BLOCKS_PER_SECTOR as u16 + (block % BLOCKS_PER_SECTOR) as u16;
        if absolute > MAX_BLOCK_ADDRESS as u16 {
            return Err(Error::InvalidBlockAddress { sector, block });
        }
        Ok(Self(absolute as u8))
    }

    /// Absolute block number 0..=63.
    pub fn new(absolute: u8) -> Result<Self, Error> {
        if absolute > MAX_BLOCK_ADDRESS {
            return Err(Error::InvalidBlockAddress {
                sector: absolute / BLOCKS_PER_SECTOR,
                block: absolute % BLOCKS_PER_SECTOR,
            });
        }
        Ok(Self(absolute))
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Sector holding this block.
    pub fn sector(&self) -> u8 {
        self.0 / BLOCKS_PER_SECTOR
    }

    /// Sector trailer blocks hold keys and access bits.
    pub fn is_trailer(&self) -> bool {
        self.0 % BLOCKS_PER_SECTOR == BLOCKS_PER_SECTOR - 1
    }
}

/// Which round trip of a two-phase block write was refused.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum WritePhase {
    /// Command and address phase.
    Command,
    /// 16-byte data phase.
    Data,
}

/// Answer to request (ATQA), 2 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Atqa([u8; 2]);

impl Atqa {
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }
}

/// Outcome of `wait_for_card`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// A card answered REQA.
    Detected,
    /// No card within the timeout.
    Timeout,
}
