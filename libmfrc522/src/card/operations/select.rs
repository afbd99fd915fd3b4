// mfrc522-rs/libmfrc522/src/card/operations/select.rs

use crate::device::{Device, Initialized};
use crate::protocol::{CascadeLevel, PiccCommand, Response};
use crate::types::{Atqa, Uid};
use crate::{Error, Result};

/// Presence check (REQA, or WUPA with `wake_all`): a card answers with a
/// 16-bit ATQA.
pub fn request(device: &mut Device<Initialized>, wake_all: bool) -> Result<Atqa> {
    match device.transceive(&PiccCommand::Request { wake_all })? {
        Response::Atqa(atqa) => Ok(atqa),
        other => Err(unexpected(other)),
    }
}

/// Cascade level 1 anticollision: UID plus a BCC that must match.
pub fn anticollision(device: &mut Device<Initialized>) -> Result<Uid> {
    let cmd = PiccCommand::Anticollision {
        cascade: CascadeLevel::One,
    };
    match device.transceive(&cmd)? {
        Response::Uid(uid) => Ok(uid),
        other => Err(unexpected(other)),
    }
}

/// Select `uid` at cascade level 1 and return its SAK.
pub fn select(device: &mut Device<Initialized>, uid: &Uid) -> Result<u8> {
    let cmd = PiccCommand::Select {
        cascade: CascadeLevel::One,
        uid: *uid,
    };
    match device.transceive(&cmd)? {
        Response::Sak(sak) => Ok(sak),
        other => Err(unexpected(other)),
    }
}

pub(crate) fn unexpected(resp: Response) -> Error {
    Error::UnexpectedResponse(format!("{:?}", resp))
}
