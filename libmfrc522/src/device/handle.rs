// mfrc522-rs/libmfrc522/src/device/handle.rs

use std::marker::PhantomData;

use log::info;

use crate::Result;
use crate::device::config::ReaderConfig;
use crate::protocol::pcd::{ANTENNA_BITS, MF_CRYPTO1_ON, PcdCommand};
use crate::protocol::Register;
use crate::transport::Transport;

/// Type-state markers
pub struct Uninitialized;
/// State after `initialize`: the chip is configured and the antenna on.
pub struct Initialized;

/// Exclusively owned reader handle. Card operations are only available
/// once the chip has been reset and configured.
pub struct Device<State = Uninitialized> {
    pub(crate) transport: Box<dyn Transport>,
    pub(crate) config: ReaderConfig,
    version: u8,
    _state: PhantomData<State>,
}

impl Device<Uninitialized> {
    /// Wrap an existing transport (SPI or `MockTransport`) with the
    /// default configuration.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Result<Self> {
        Self::with_config(transport, ReaderConfig::default())
    }

    /// Wrap `transport` with a non-default configuration.
    pub fn with_config(transport: Box<dyn Transport>, config: ReaderConfig) -> Result<Self> {
        Ok(Self {
            transport,
            config,
            version: 0,
            _state: PhantomData,
        })
    }

    /// Hardware reset, chip defaults, antenna on; logs the chip version.
    pub fn initialize(self) -> Result<Device<Initialized>> {
        let mut this = self;
        this.transport.reset()?;
        this.configure_chip()?;
        let version = this.transport.read_register(Register::Version)?;
        info!("MFRC522 version {:#04x}", version);

        Ok(Device {
            transport: this.transport,
            config: this.config,
            version,
            _state: PhantomData,
        })
    }
}

impl<State> Device<State> {
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Soft reset followed by timer, modulation and CRC preset setup.
    fn configure_chip(&mut self) -> Result<()> {
        let cfg = self.config.clone();
        let t = &mut self.transport;
        t.write_register(Register::Command, PcdCommand::SoftReset.code())?;
        t.write_register(Register::TMode, cfg.t_mode)?;
        t.write_register(Register::TPrescaler, cfg.t_prescaler)?;
        let [reload_lo, reload_hi] = cfg.t_reload.to_le_bytes();
        t.write_register(Register::TReloadL, reload_lo)?;
        t.write_register(Register::TReloadH, reload_hi)?;
        t.write_register(Register::TxAsk, cfg.tx_ask)?;
        t.write_register(Register::Mode, cfg.mode)?;
        self.set_antenna(true)
    }

    fn set_antenna(&mut self, on: bool) -> Result<()> {
        if on {
            let current = self.transport.read_register(Register::TxControl)?;
            if current & ANTENNA_BITS == 0 {
                self.transport.set_bits(Register::TxControl, ANTENNA_BITS)?;
            }
            Ok(())
        } else {
            self.transport.clear_bits(Register::TxControl, ANTENNA_BITS)
        }
    }
}

impl Device<Initialized> {
    /// Re-arm the chip defaults. The soft reset drops the RF field, so any
    /// card in range returns to IDLE.
    pub fn wake(&mut self) -> Result<()> {
        self.configure_chip()
    }

    /// Drive TX1/TX2. Switching on leaves the pins alone when either is
    /// already enabled.
    pub fn antenna_on(&mut self, on: bool) -> Result<()> {
        self.set_antenna(on)
    }

    /// Leave the encrypted MIFARE session opened by a successful
    /// authentication.
    pub fn stop_crypto1(&mut self) -> Result<()> {
        self.transport.clear_bits(Register::Status2, MF_CRYPTO1_ON)
    }

    /// Whether the chip reports an active Crypto1 session.
    pub fn crypto1_active(&mut self) -> Result<bool> {
        Ok(self.transport.read_register(Register::Status2)? & MF_CRYPTO1_ON != 0)
    }

    /// Read `VersionReg` from the chip.
    pub fn version(&mut self) -> Result<u8> {
        self.transport.read_register(Register::Version)
    }

    /// Version read during initialization.
    pub fn initial_version(&self) -> u8 {
        self.version
    }
}
