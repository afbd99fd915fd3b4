// mfrc522-rs/libmfrc522/src/protocol/frame.rs

/// Bytes drained from the FIFO after a transceive, with the number of
/// valid bits the chip reported for them.
///
/// For a stream of whole bytes `valid_bits == data.len() * 8`; a trailing
/// partial byte (4-bit ACK/NAK, 7-bit short frames) contributes 1..=7 bits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseFrame {
    data: Vec<u8>,
    valid_bits: usize,
}

impl ResponseFrame {
    pub fn new(data: Vec<u8>, valid_bits: usize) -> Self {
        Self { data, valid_bits }
    }

    /// Frame made of whole bytes only.
    pub fn whole_bytes(data: Vec<u8>) -> Self {
        let valid_bits = data.len() * 8;
        Self { data, valid_bits }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn valid_bits(&self) -> usize {
        self.valid_bits
    }

    /// Bits past the last whole byte (0..=7).
    pub fn extra_bits(&self) -> usize {
        self.valid_bits % 8
    }
}

/// Total valid bits from `FIFOLevelReg` and `ControlReg.RxLastBits`.
///
/// `last_bits == 0` means the final byte was received whole.
pub fn valid_bits_for(fifo_count: u8, last_bits: u8) -> usize {
    let fifo_count = fifo_count as usize;
    let last_bits = (last_bits & crate::protocol::pcd::RX_LAST_BITS_MASK) as usize;
    if last_bits != 0 {
        fifo_count.saturating_sub(1) * 8 + last_bits
    } else {
        fifo_count * 8
    }
}
