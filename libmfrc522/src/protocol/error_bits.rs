// mfrc522-rs/libmfrc522/src/protocol/error_bits.rs

use derive_more::{BitAnd, BitOr, BitOrAssign, From};
use std::fmt;

/// Contents of `ErrorReg`.
///
/// Bit 7 WrErr, 6 TempErr, 5 reserved, 4 BufferOvfl, 3 CollErr, 2 CRCErr,
/// 1 ParityErr, 0 ProtocolErr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, From, BitOr, BitAnd, BitOrAssign)]
pub struct ErrorBits(u8);

impl ErrorBits {
    pub const NONE: Self = Self(0x00);
    pub const WRITE: Self = Self(0x80);
    pub const TEMP: Self = Self(0x40);
    pub const BUFFER_OVERFLOW: Self = Self(0x10);
    pub const COLLISION: Self = Self(0x08);
    pub const CRC: Self = Self(0x04);
    pub const PARITY: Self = Self(0x02);
    pub const PROTOCOL: Self = Self(0x01);

    /// Bits that abort a transceive/authenticate exchange (`0x1B`).
    pub const FATAL: Self = Self(0x1B);

    const NAMES: [(ErrorBits, &'static str); 7] = [
        (Self::WRITE, "WrErr"),
        (Self::TEMP, "TempErr"),
        (Self::BUFFER_OVERFLOW, "BufferOvfl"),
        (Self::COLLISION, "CollErr"),
        (Self::CRC, "CRCErr"),
        (Self::PARITY, "ParityErr"),
        (Self::PROTOCOL, "ProtocolErr"),
    ];

    /// Wrap a raw ErrorReg value.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// All bits of `other` are set.
    pub fn contains(&self, other: ErrorBits) -> bool {
        self.0 & other.0 == other.0
    }

    /// Any bit of `other` is set.
    pub fn intersects(&self, other: ErrorBits) -> bool {
        self.0 & other.0 != 0
    }

    /// Datasheet names of every set bit, most significant first.
    pub fn names(&self) -> Vec<&'static str> {
        Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl fmt::Display for ErrorBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{:#04x} (none)", self.0);
        }
        write!(f, "{:#04x} ({})", self.0, self.names().join("|"))
    }
}
