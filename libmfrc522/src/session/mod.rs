// mfrc522-rs/libmfrc522/src/session/mod.rs

//! Card-level workflow on top of an initialized reader: wait for a card,
//! read its UID, select it and access sector blocks.

mod access;
pub use access::{AccessList, MemoryAccessList};

use embedded_hal::delay::DelayNs;
use log::{debug, warn};

use crate::card::{Card, operations};
use crate::device::{Device, Initialized};
use crate::types::{AuthKey, BlockAddress, BlockData, Detection, Uid};
use crate::utils::{StdDelay, poll_attempts};
use crate::{Error, Result};

/// Owns the reader for the duration of a polling loop. Calls must be
/// serialized by the caller; nothing here is reentrant.
pub struct CardSession<D = StdDelay> {
    device: Device<Initialized>,
    delay: D,
}

impl CardSession<StdDelay> {
    /// Session sleeping with `std::thread::sleep`.
    pub fn with_std_delay(device: Device<Initialized>) -> Self {
        Self::new(device, StdDelay)
    }
}

impl<D: DelayNs> CardSession<D> {
    /// Session sleeping through `delay` between polls.
    pub fn new(device: Device<Initialized>, delay: D) -> Self {
        Self { device, delay }
    }

    /// The underlying reader.
    pub fn device(&mut self) -> &mut Device<Initialized> {
        &mut self.device
    }

    pub fn into_device(self) -> Device<Initialized> {
        self.device
    }

    /// Re-arm the chip and send REQA every `card_poll_interval_ms` until a
    /// card answers or `timeout_ms` has elapsed.
    ///
    /// Elapsed time is counted in whole intervals, so a miss returns only
    /// after the timeout rounded up to the next interval. With a zero
    /// interval the card is checked once. Transport faults abort the wait.
    pub fn wait_for_card(&mut self, timeout_ms: u32) -> Result<Detection> {
        let interval = self.device.config().card_poll_interval_ms;
        for _ in 0..poll_attempts(timeout_ms, interval) {
            self.device.wake()?;
            match operations::request(&mut self.device, false) {
                Ok(atqa) => {
                    debug!("card answered REQA with ATQA {:02x?}", atqa.as_bytes());
                    return Ok(Detection::Detected);
                }
                Err(e @ Error::Transport(_)) => return Err(e),
                Err(_) => {}
            }
            self.delay.delay_ms(interval);
        }
        Ok(Detection::Timeout)
    }

    /// Anticollision at cascade level 1; the UID as 8 lowercase hex digits.
    /// The card is not selected.
    pub fn read_uid(&mut self) -> Result<String> {
        let uid = operations::anticollision(&mut self.device)?;
        self.device.stop_crypto1()?;
        Ok(uid.to_hex())
    }

    /// SELECT `uid` and return the card with its SAK.
    pub fn select(&mut self, uid: &Uid) -> Result<Card> {
        let sak = operations::select(&mut self.device, uid)?;
        Ok(Card::new(*uid, sak))
    }

    /// Authenticate `sector` with `key` and read `block` (taken modulo 4).
    ///
    /// Address and key are checked before any register access.
    pub fn read_sector_block(
        &mut self,
        uid: &Uid,
        sector: u8,
        block: u8,
        key: Option<&AuthKey>,
    ) -> Result<BlockData> {
        let address = BlockAddress::from_sector(sector, block)?;
        let key = key.ok_or(Error::MissingKey)?;
        operations::authenticate(&mut self.device, key, address, uid)?;
        operations::read_block(&mut self.device, address)
    }

    /// Authenticate and write one block, up to `write_attempts` times in
    /// total.
    ///
    /// A card that NAKs drops to IDLE, so each retry wakes it with WUPA,
    /// selects `uid` again and re-authenticates. If the card cannot be
    /// brought back the last `WriteRejected` is returned.
    pub fn write_sector_block(
        &mut self,
        uid: &Uid,
        sector: u8,
        block: u8,
        data: &BlockData,
        key: Option<&AuthKey>,
    ) -> Result<()> {
        let address = BlockAddress::from_sector(sector, block)?;
        let key = key.ok_or(Error::MissingKey)?;
        let attempts = self.device.config().write_attempts.max(1);

        operations::authenticate(&mut self.device, key, address, uid)?;
        let mut attempt = 1;
        loop {
            let rejected = match operations::write_block(&mut self.device, address, data) {
                Err(e @ Error::WriteRejected { .. }) if attempt < attempts => e,
                other => return other,
            };
            warn!(
                "block {}: {} (attempt {}/{})",
                address.as_u8(),
                rejected,
                attempt,
                attempts
            );
            attempt += 1;
            match self.reactivate(uid, key, address) {
                Ok(()) => {}
                Err(e @ Error::Transport(_)) => return Err(e),
                Err(e) => {
                    warn!("block {}: card not recovered: {}", address.as_u8(), e);
                    return Err(rejected);
                }
            }
        }
    }

    /// WUPA, anticollision, select and authenticate: the way back from
    /// IDLE to an authenticated sector.
    fn reactivate(&mut self, uid: &Uid, key: &AuthKey, address: BlockAddress) -> Result<()> {
        self.device.wake()?;
        operations::request(&mut self.device, true)?;
        operations::anticollision(&mut self.device)?;
        operations::select(&mut self.device, uid)?;
        operations::authenticate(&mut self.device, key, address, uid)
    }

    /// Leave the authenticated session.
    pub fn stop_crypto1(&mut self) -> Result<()> {
        self.device.stop_crypto1()
    }

    /// Read the UID and look it up in `list`.
    pub fn authorize(&mut self, list: &dyn AccessList) -> Result<bool> {
        let token = self.read_uid()?;
        let allowed = list.has_user(&token);
        debug!("uid {} allowed: {}", token, allowed);
        Ok(allowed)
    }
}
