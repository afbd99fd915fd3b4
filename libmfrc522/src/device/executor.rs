// mfrc522-rs/libmfrc522/src/device/executor.rs

use log::{debug, warn};

use crate::device::handle::{Device, Initialized};
use crate::protocol::frame::valid_bits_for;
use crate::protocol::pcd::{FIFO_FLUSH, PcdCommand, RX_LAST_BITS_MASK, START_SEND, irq};
use crate::protocol::{ErrorBits, PiccCommand, Register, Response, ResponseFrame};
use crate::{Error, Result};

impl Device<Initialized> {
    /// Run one chip command against the card and collect its answer.
    ///
    /// `max_len` is the receive capacity: a longer FIFO content is clamped
    /// before draining, while the valid-bit count still reflects what the
    /// chip received. Authenticate returns an empty frame.
    pub fn to_card(&mut self, cmd: PcdCommand, data: &[u8], max_len: usize) -> Result<ResponseFrame> {
        let irq_en = cmd.irq_enable();
        let wait_irq = cmd.wait_irq();
        let budget = self.config.command_poll_budget;
        let t = &mut self.transport;

        t.write_register(Register::ComIEn, irq_en | irq::IRQ_INV)?;
        t.write_register(Register::ComIrq, irq::CLEAR_ALL)?;
        t.write_register(Register::FifoLevel, FIFO_FLUSH)?;
        t.write_register(Register::Command, PcdCommand::Idle.code())?;
        t.write_fifo(data)?;
        t.write_register(Register::Command, cmd.code())?;
        if cmd == PcdCommand::Transceive {
            t.set_bits(Register::BitFraming, START_SEND)?;
        }

        let mut status = None;
        for _ in 0..budget {
            let n = t.read_register(Register::ComIrq)?;
            if n & irq::TIMER != 0 || n & wait_irq != 0 {
                status = Some(n);
                break;
            }
        }

        t.clear_bits(Register::BitFraming, START_SEND)?;

        let n = match status {
            Some(n) => n,
            None => {
                warn!("{:?} did not complete after {} polls", cmd, budget);
                return Err(Error::Timeout);
            }
        };

        let errors = ErrorBits::from(t.read_register(Register::Error)?);
        if errors.intersects(ErrorBits::FATAL) {
            debug!("{:?} failed, ErrorReg {}", cmd, errors);
            return Err(Error::Protocol { errors });
        }

        if n & irq_en & irq::TIMER != 0 {
            return Err(Error::NoTag);
        }

        if cmd != PcdCommand::Transceive {
            return Ok(ResponseFrame::empty());
        }

        let fifo_count = t.read_register(Register::FifoLevel)?;
        let last_bits = t.read_register(Register::Control)? & RX_LAST_BITS_MASK;
        let valid_bits = valid_bits_for(fifo_count, last_bits);
        let len = (fifo_count as usize).min(max_len);
        let data = t.read_fifo(len)?;
        Ok(ResponseFrame::new(data, valid_bits))
    }

    /// Frame `cmd` (short frame or CRC_A as it requires), transceive it
    /// and decode the card's answer.
    ///
    /// Silence is decoded like an empty answer for every command but
    /// anticollision, which keeps `Error::NoTag`.
    pub fn transceive(&mut self, cmd: &PiccCommand) -> Result<Response> {
        let mut payload = cmd.encode();
        if cmd.needs_crc() {
            let crc = self.calculate_crc(&payload)?;
            payload.extend_from_slice(&crc);
        }
        self.transport
            .write_register(Register::BitFraming, cmd.tx_last_bits())?;

        let frame = match self.to_card(PcdCommand::Transceive, &payload, cmd.max_response_len()) {
            Ok(frame) => frame,
            Err(Error::NoTag) if !matches!(cmd, PiccCommand::Anticollision { .. }) => {
                ResponseFrame::empty()
            }
            Err(e) => return Err(e),
        };

        Response::decode(cmd, &frame).inspect_err(|e| {
            debug!(
                "{:?} rejected: {} ({} bytes, {} bits)",
                cmd,
                e,
                frame.len(),
                frame.valid_bits()
            )
        })
    }
}
