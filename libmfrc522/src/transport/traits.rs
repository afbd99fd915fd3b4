// mfrc522-rs/libmfrc522/src/transport/traits.rs

use crate::Result;
use crate::protocol::Register;

/// Register-level access to the chip. Protocol and device logic only talk
/// to the MFRC522 through this trait.
///
/// Every call is one complete select-transfer-deselect transaction; an
/// implementation must never interleave two of them.
pub trait Transport {
    /// Write one register: `[(addr << 1) & 0x7E, value]`.
    fn write_register(&mut self, reg: Register, value: u8) -> Result<()>;

    /// Read one register: `[((addr << 1) & 0x7E) | 0x80, 0x00]`, the second
    /// byte clocked back is the content.
    fn read_register(&mut self, reg: Register) -> Result<u8>;

    /// Read-modify-write setting `mask`.
    fn set_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let value = self.read_register(reg)?;
        self.write_register(reg, value | mask)
    }

    /// Read-modify-write clearing `mask`.
    fn clear_bits(&mut self, reg: Register, mask: u8) -> Result<()> {
        let value = self.read_register(reg)?;
        self.write_register(reg, value & !mask)
    }

    /// Push bytes into the FIFO, one register write per byte.
    fn write_fifo(&mut self, data: &[u8]) -> Result<()> {
        for &byte in data {
            self.write_register(Register::FifoData, byte)?;
        }
        Ok(())
    }

    /// Pull `len` bytes out of the FIFO, one register read per byte.
    fn read_fifo(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(len);
        for _ in 0..len {
            out.push(self.read_register(Register::FifoData)?);
        }
        Ok(out)
    }

    /// Hardware reset through the reset line. Transports without one
    /// keep the default no-op.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        (**self).write_register(reg, value)
    }

    fn read_register(&mut self, reg: Register) -> Result<u8> {
        (**self).read_register(reg)
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}
