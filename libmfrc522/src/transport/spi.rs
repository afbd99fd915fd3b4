// mfrc522-rs/libmfrc522/src/transport/spi.rs

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::SpiBus;
use log::error;

use crate::protocol::Register;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Reset line held low while resetting, and the settle time after release.
pub const RESET_PULSE_MS: u32 = 50;

/// Default SPI clock the chip is wired for (1 MHz).
pub const DEFAULT_CLOCK_HZ: u32 = 1_000_000;

/// Placeholder for boards that do not wire the reset line.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPin;

impl digital::ErrorType for NoPin {
    type Error = Infallible;
}

impl OutputPin for NoPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        Ok(())
    }
}

/// MFRC522 over an SPI bus with a dedicated chip-select line.
///
/// The bus must already be configured for mode 0, MSB first, at
/// `clock_hz`; the value is kept for diagnostics only.
pub struct SpiTransport<SPI, CS, RST, D> {
    spi: SPI,
    cs: CS,
    rst: RST,
    delay: D,
    clock_hz: u32,
}

impl<SPI, CS, RST, D> SpiTransport<SPI, CS, RST, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    /// Take ownership of the bus and lines. Chip-select is deasserted
    /// before returning.
    pub fn new(spi: SPI, mut cs: CS, rst: RST, delay: D) -> Result<Self> {
        cs.set_high().map_err(pin_error)?;
        Ok(Self {
            spi,
            cs,
            rst,
            delay,
            clock_hz: DEFAULT_CLOCK_HZ,
        })
    }

    /// Record the bus clock used for diagnostics.
    pub fn with_clock_hz(mut self, clock_hz: u32) -> Self {
        self.clock_hz = clock_hz;
        self
    }

    pub fn clock_hz(&self) -> u32 {
        self.clock_hz
    }

    /// Give the bus and lines back.
    pub fn release(self) -> (SPI, CS, RST, D) {
        (self.spi, self.cs, self.rst, self.delay)
    }

    /// One 2-byte transaction. Chip-select is released even when the
    /// transfer fails.
    fn transaction(&mut self, out: [u8; 2]) -> Result<[u8; 2]> {
        let mut inp = [0u8; 2];
        self.cs.set_low().map_err(pin_error)?;
        let transfer = self
            .spi
            .transfer(&mut inp, &out)
            .and_then(|_| self.spi.flush());
        let deselect = self.cs.set_high().map_err(pin_error);
        transfer.map_err(|e| fault("spi", e))?;
        deselect?;
        Ok(inp)
    }
}

fn pin_error<E: core::fmt::Debug>(e: E) -> Error {
    fault("gpio", e)
}

/// Every bus or pin failure is fatal to the caller; it is logged once here.
fn fault<E: core::fmt::Debug>(source: &str, e: E) -> Error {
    let message = format!("{}: {:?}", source, e);
    error!("transport fault: {}", message);
    Error::Transport(message)
}

impl<SPI, CS, RST, D> Transport for SpiTransport<SPI, CS, RST, D>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
    RST: OutputPin,
    D: DelayNs,
{
    fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        #[cfg(feature = "diagnostics")]
        log::trace!("write {:?} <- {:#04x}", reg, value);
        self.transaction([reg.write_address(), value])?;
        Ok(())
    }

    fn read_register(&mut self, reg: Register) -> Result<u8> {
        let inp = self.transaction([reg.read_address(), 0x00])?;
        #[cfg(feature = "diagnostics")]
        log::trace!("read {:?} -> {:#04x}", reg, inp[1]);
        Ok(inp[1])
    }

    fn reset(&mut self) -> Result<()> {
        self.rst.set_low().map_err(pin_error)?;
        self.delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(pin_error)?;
        self.delay.delay_ms(RESET_PULSE_MS);
        Ok(())
    }
}
