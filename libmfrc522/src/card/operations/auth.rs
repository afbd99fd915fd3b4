// mfrc522-rs/libmfrc522/src/card/operations/auth.rs

use log::debug;

use crate::device::{Device, Initialized};
use crate::protocol::commands::encode_auth;
use crate::protocol::PcdCommand;
use crate::types::{AuthKey, BlockAddress, Uid};
use crate::{Error, Result};

/// MFAuthent against `block` with `key`. On success the chip holds an
/// encrypted session until [`stop_crypto1`] is called.
///
/// Any failure reported by the chip (error bits, silence, crypto flag not
/// raised) is `AuthFailed`; transport faults and timeouts pass through.
pub fn authenticate(
    device: &mut Device<Initialized>,
    key: &AuthKey,
    block: BlockAddress,
    uid: &Uid,
) -> Result<()> {
    let packet = encode_auth(key, block, uid);
    match device.to_card(PcdCommand::Authenticate, &packet, 0) {
        Ok(_) => {}
        Err(e @ (Error::Transport(_) | Error::Timeout)) => return Err(e),
        Err(e) => {
            debug!("authentication of block {} failed: {}", block.as_u8(), e);
            return Err(Error::AuthFailed);
        }
    }
    if !device.crypto1_active()? {
        debug!("block {}: Crypto1 not enabled after MFAuthent", block.as_u8());
        return Err(Error::AuthFailed);
    }
    Ok(())
}

/// Clear `MFCrypto1On`, ending the authenticated session.
pub fn stop_crypto1(device: &mut Device<Initialized>) -> Result<()> {
    device.stop_crypto1()
}
