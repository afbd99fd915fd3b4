// mfrc522-rs/libmfrc522/src/protocol/registers.rs

/// MFRC522 register map (datasheet section 9). Discriminants are the
/// 6-bit register addresses and must not change.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// Starts and stops command execution
    Command = 0x01,
    /// Enable/disable interrupt request control bits
    ComIEn = 0x02,
    DivIEn = 0x03,
    /// Interrupt request bits (TimerIRq, IdleIRq, RxIRq, ...)
    ComIrq = 0x04,
    /// Interrupt request bits; bit 2 is CRCIRq
    DivIrq = 0x05,
    /// Error bits of the last executed command
    Error = 0x06,
    Status1 = 0x07,
    /// Receiver/transmitter status; bit 3 is MFCrypto1On
    Status2 = 0x08,
    /// Input and output of the 64 byte FIFO buffer
    FifoData = 0x09,
    /// Number of bytes stored in the FIFO; bit 7 flushes it
    FifoLevel = 0x0A,
    WaterLevel = 0x0B,
    /// Bits 0..2 hold RxLastBits of the last received byte
    Control = 0x0C,
    /// Bit 7 is StartSend, bits 0..2 are TxLastBits
    BitFraming = 0x0D,
    Coll = 0x0E,
    /// General mode; bits 0..1 select the CRC preset
    Mode = 0x11,
    TxMode = 0x12,
    RxMode = 0x13,
    /// Bits 0..1 drive the antenna pins TX1/TX2
    TxControl = 0x14,
    TxAsk = 0x15,
    /// CRC coprocessor result, MSB
    CrcResultH = 0x21,
    /// CRC coprocessor result, LSB
    CrcResultL = 0x22,
    ModWidth = 0x24,
    RfCfg = 0x26,
    TMode = 0x2A,
    TPrescaler = 0x2B,
    TReloadH = 0x2C,
    TReloadL = 0x2D,
    Version = 0x37,
}

impl Register {
    /// Every register in address order.
    pub const ALL: [Register; 27] = [
        Register::Command,
        Register::ComIEn,
        Register::DivIEn,
        Register::ComIrq,
        Register::DivIrq,
        Register::Error,
        Register::Status1,
        Register::Status2,
        Register::FifoData,
        Register::FifoLevel,
        Register::WaterLevel,
        Register::Control,
        Register::BitFraming,
        Register::Coll,
        Register::Mode,
        Register::TxMode,
        Register::RxMode,
        Register::TxControl,
        Register::TxAsk,
        Register::CrcResultH,
        Register::CrcResultL,
        Register::ModWidth,
        Register::RfCfg,
        Register::TMode,
        Register::TPrescaler,
        Register::TReloadH,
        Register::TReloadL,
    ];

    /// 6-bit register address.
    pub fn address(&self) -> u8 {
        *self as u8
    }

    pub fn from_address(addr: u8) -> Option<Self> {
        if addr == Register::Version as u8 {
            return Some(Register::Version);
        }
        Self::ALL.iter().copied().find(|r| r.address() == addr)
    }

    /// SPI address byte for a write: `0xxxxxx0`.
    pub fn write_address(&self) -> u8 {
        (self.address() << 1) & 0x7E
    }

    /// SPI address byte for a read: `1xxxxxx0`.
    pub fn read_address(&self) -> u8 {
        self.write_address() | 0x80
    }
}

/// Decode an SPI address byte back into (register, is_read).
pub fn decode_address_byte(byte: u8) -> Option<(Register, bool)> {
    if byte & 0x01 != 0 {
        return None;
    }
    let reg = Register::from_address((byte & 0x7E) >> 1)?;
    Some((reg, byte & 0x80 != 0))
}
