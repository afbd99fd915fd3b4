// mfrc522-rs/libmfrc522/src/device/crc.rs

use log::warn;

use crate::device::handle::{Device, Initialized};
use crate::protocol::pcd::{FIFO_FLUSH, PcdCommand, div_irq};
use crate::protocol::Register;
use crate::{Error, Result};

impl Device<Initialized> {
    /// CRC_A of `data` computed by the chip's coprocessor, low byte first.
    ///
    /// The completion flag is polled at most `crc_poll_budget` times. When
    /// it never shows up the result registers are returned as they are,
    /// unless `strict_crc` is configured.
    pub fn calculate_crc(&mut self, data: &[u8]) -> Result<[u8; 2]> {
        let t = &mut self.transport;
        // Set1 = 0: clears CRCIRq
        t.write_register(Register::DivIrq, div_irq::CRC)?;
        t.write_register(Register::FifoLevel, FIFO_FLUSH)?;
        t.write_fifo(data)?;
        t.write_register(Register::Command, PcdCommand::CalculateCrc.code())?;

        let mut done = false;
        for _ in 0..self.config.crc_poll_budget {
            if t.read_register(Register::DivIrq)? & div_irq::CRC != 0 {
                done = true;
                break;
            }
        }

        if !done {
            if self.config.strict_crc {
                return Err(Error::CrcTimeout);
            }
            warn!(
                "CRC coprocessor did not finish after {} polls",
                self.config.crc_poll_budget
            );
        }

        let lo = t.read_register(Register::CrcResultL)?;
        let hi = t.read_register(Register::CrcResultH)?;
        Ok([lo, hi])
    }
}
