// mfrc522-rs/libmfrc522/src/card/info.rs

use derive_more::Display;

use crate::types::Uid;

/// Card family announced by the SAK byte (bit 7 is ignored).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardKind {
    /// SAK 0x09.
    #[display(fmt = "MIFARE Mini")]
    MifareMini,
    /// SAK 0x08.
    #[display(fmt = "MIFARE Classic 1K")]
    MifareClassic1K,
    /// SAK 0x18.
    #[display(fmt = "MIFARE Classic 4K")]
    MifareClassic4K,
    /// SAK 0x00.
    #[display(fmt = "MIFARE Ultralight")]
    MifareUltralight,
    /// SAK 0x20.
    #[display(fmt = "ISO/IEC 14443-4")]
    Iso14443_4,
    /// Any other SAK.
    #[display(fmt = "unknown (SAK {:#04x})", _0)]
    Other(u8),
}

impl CardKind {
    /// Classify a SAK byte.
    pub fn from_sak(sak: u8) -> Self {
        match sak & 0x7F {
            0x09 => CardKind::MifareMini,
            0x08 => CardKind::MifareClassic1K,
            0x18 => CardKind::MifareClassic4K,
            0x00 => CardKind::MifareUltralight,
            0x20 => CardKind::Iso14443_4,
            other => CardKind::Other(other),
        }
    }

    /// Whether sectors are guarded by Crypto1 keys A/B.
    pub fn uses_crypto1(&self) -> bool {
        matches!(
            self,
            CardKind::MifareMini | CardKind::MifareClassic1K | CardKind::MifareClassic4K
        )
    }
}

/// Compact information describing a selected card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardInfo {
    pub uid: Uid,
    pub sak: u8,
    pub kind: CardKind,
}

impl CardInfo {
    pub fn new(uid: Uid, sak: u8) -> Self {
        Self {
            uid,
            sak,
            kind: CardKind::from_sak(sak),
        }
    }
}

impl From<&crate::card::Card> for CardInfo {
    fn from(card: &crate::card::Card) -> Self {
        CardInfo::new(card.uid, card.sak)
    }
}
