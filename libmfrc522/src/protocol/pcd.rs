// mfrc522-rs/libmfrc522/src/protocol/pcd.rs
//! PCD (reader side) commands and the register bits the driver touches.

/// Commands written to `CommandReg`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PcdCommand {
    Idle = 0x00,
    CalculateCrc = 0x03,
    Transceive = 0x0C,
    Authenticate = 0x0E,
    SoftReset = 0x0F,
}

impl PcdCommand {
    /// Value written to CommandReg.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code & 0x0F {
            0x00 => Some(Self::Idle),
            0x03 => Some(Self::CalculateCrc),
            0x0C => Some(Self::Transceive),
            0x0E => Some(Self::Authenticate),
            0x0F => Some(Self::SoftReset),
            _ => None,
        }
    }

    /// Interrupts enabled in `ComIEnReg` while this command runs.
    pub fn irq_enable(&self) -> u8 {
        match self {
            Self::Authenticate => irq::IDLE | irq::ERR,
            Self::Transceive => {
                irq::TX | irq::RX | irq::IDLE | irq::LO_ALERT | irq::ERR | irq::TIMER
            }
            _ => 0x00,
        }
    }

    /// `ComIrqReg` bits signalling that the command completed.
    pub fn wait_irq(&self) -> u8 {
        match self {
            Self::Authenticate => irq::IDLE,
            Self::Transceive => irq::RX | irq::IDLE,
            _ => 0x00,
        }
    }
}

/// `ComIrqReg` / `ComIEnReg` bits.
pub mod irq {
    /// Write: set (1) or clear (0) the bits marked in the rest of the byte
    pub const SET1: u8 = 0x80;
    /// In `ComIEnReg`: invert the IRQ pin
    pub const IRQ_INV: u8 = 0x80;
    pub const TX: u8 = 0x40;
    pub const RX: u8 = 0x20;
    pub const IDLE: u8 = 0x10;
    pub const HI_ALERT: u8 = 0x08;
    pub const LO_ALERT: u8 = 0x04;
    pub const ERR: u8 = 0x02;
    /// Timer reached zero: nothing answered
    pub const TIMER: u8 = 0x01;
    /// Write value clearing every request bit
    pub const CLEAR_ALL: u8 = 0x7F;
}

/// `DivIrqReg` bits.
pub mod div_irq {
    pub const CRC: u8 = 0x04;
}

pub const FIFO_FLUSH: u8 = 0x80;
pub const START_SEND: u8 = 0x80;
pub const RX_LAST_BITS_MASK: u8 = 0x07;
pub const MF_CRYPTO1_ON: u8 = 0x08;
pub const ANTENNA_BITS: u8 = 0x03;
/// Short frame: only 7 bits of the last byte are transmitted
pub const SHORT_FRAME: u8 = 0x07;
pub const FULL_BYTES: u8 = 0x00;
