// mfrc522-rs/libmfrc522/src/card/mod.rs

use crate::device::{Device, Initialized};
use crate::types::{AuthKey, BlockAddress, BlockData, Uid};
use crate::Result;

mod info;
pub use info::{CardInfo, CardKind};

/// Free functions over an initialized device.
pub mod operations;

/// A card that answered the select with its SAK.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    uid: Uid,
    sak: u8,
}

impl Card {
    /// Card selected with `uid` that answered `sak`.
    pub fn new(uid: Uid, sak: u8) -> Self {
        Self { uid, sak }
    }

    /// Anticollision then select: the card in the field becomes ACTIVE.
    pub fn activate(device: &mut Device<Initialized>) -> Result<Self> {
        let uid = operations::anticollision(device)?;
        let sak = operations::select(device, &uid)?;
        Ok(Self::new(uid, sak))
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// SAK returned by SELECT.
    pub fn sak(&self) -> u8 {
        self.sak
    }

    /// Card family decoded from the SAK.
    pub fn info(&self) -> CardInfo {
        CardInfo::from(self)
    }

    /// Authenticate the sector holding `block` with `key`.
    pub fn authenticate(
        &self,
        device: &mut Device<Initialized>,
        key: &AuthKey,
        block: BlockAddress,
    ) -> Result<()> {
        operations::authenticate(device, key, block, &self.uid)
    }

    /// Authenticate the block's sector with `key`, then read it.
    pub fn read_block(
        &self,
        device: &mut Device<Initialized>,
        key: &AuthKey,
        block: BlockAddress,
    ) -> Result<BlockData> {
        self.authenticate(device, key, block)?;
        operations::read_block(device, block)
    }

    /// Authenticate the block's sector with `key`, then write it.
    pub fn write_block(
        &self,
        device: &mut Device<Initialized>,
        key: &AuthKey,
        block: BlockAddress,
        data: &BlockData,
    ) -> Result<()> {
        self.authenticate(device, key, block)?;
        operations::write_block(device, block, data)
    }

    /// Send HLTA and leave the encrypted session.
    pub fn halt(self, device: &mut Device<Initialized>) -> Result<()> {
        operations::halt(device)?;
        operations::stop_crypto1(device)
    }
}
