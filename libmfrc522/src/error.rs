// mfrc522-rs/libmfrc522/src/error.rs

use thiserror::Error;

use crate::protocol::ErrorBits;
use crate::types::WritePhase;

/// Common error type for every reader operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The byte channel (SPI bus, chip-select or reset line) failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// A poll budget ran out before the chip signalled completion.
    #[error("operation timed out")]
    Timeout,

    /// The chip's timer expired without any answer from a card.
    #[error("no tag answered")]
    NoTag,

    /// ErrorReg reported a fatal condition.
    #[error("chip reported errors: {errors}")]
    Protocol { errors: ErrorBits },

    /// Received BCC does not match the UID bytes.
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    /// A request got no valid 16-bit ATQA.
    #[error("no card detected (valid bits: {valid_bits})")]
    NoCard { valid_bits: usize },

    /// SELECT answer was not SAK + CRC_A.
    #[error("select failed: {len} bytes, {valid_bits} valid bits")]
    SelectFailed { len: usize, valid_bits: usize },

    /// MFAuthent did not enable Crypto1.
    #[error("authentication failed")]
    AuthFailed,

    /// READ did not return exactly 16 bytes.
    #[error("read failed: expected 16 bytes, got {len}")]
    ReadError { len: usize },

    /// A WRITE phase was not ACKed.
    #[error("write rejected during {phase} phase (ack: {ack:?})")]
    WriteRejected { phase: WritePhase, ack: Option<u8> },

    /// Sector or block outside the 1K layout.
    #[error("block address out of range: sector {sector}, block {block}")]
    InvalidBlockAddress { sector: u8, block: u8 },

    /// Block access requested without a key.
    #[error("no key supplied")]
    MissingKey,

    /// Byte slice of the wrong size for the target type.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Text that is not valid hex.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// A decoder produced an answer of the wrong kind for the command.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// CRC coprocessor did not finish; only raised with `strict_crc`.
    #[error("CRC calculation timed out")]
    CrcTimeout,
}

impl Error {
    /// Whether the caller's polling loop may simply try again.
    ///
    /// `AuthFailed` is not: the same key fails the same way.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Timeout
                | Error::NoTag
                | Error::Protocol { .. }
                | Error::ChecksumMismatch { .. }
                | Error::NoCard { .. }
                | Error::SelectFailed { .. }
                | Error::ReadError { .. }
                | Error::WriteRejected { .. }
                | Error::CrcTimeout
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
