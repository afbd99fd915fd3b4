// mfrc522-rs/libmfrc522/src/card/operations/block.rs

use crate::card::operations::select::unexpected;
use crate::device::{Device, Initialized};
use crate::protocol::{PiccCommand, Response};
use crate::types::{BlockAddress, BlockData};
use crate::Result;

/// READ one 16-byte block. The sector must be authenticated.
pub fn read_block(device: &mut Device<Initialized>, block: BlockAddress) -> Result<BlockData> {
    match device.transceive(&PiccCommand::Read { block })? {
        Response::Block(data) => Ok(data),
        other => Err(unexpected(other)),
    }
}

/// WRITE one block in two acknowledged round trips: command + address,
/// then the 16 data bytes. A refused command phase never sends the data.
pub fn write_block(
    device: &mut Device<Initialized>,
    block: BlockAddress,
    data: &BlockData,
) -> Result<()> {
    expect_ack(device.transceive(&PiccCommand::WriteCommand { block })?)?;
    expect_ack(device.transceive(&PiccCommand::WriteData { data: *data })?)
}

/// HLTA: put the selected card to sleep. Cards never answer it.
pub fn halt(device: &mut Device<Initialized>) -> Result<()> {
    match device.transceive(&PiccCommand::Halt)? {
        Response::Silent => Ok(()),
        other => Err(unexpected(other)),
    }
}

fn expect_ack(resp: Response) -> Result<()> {
    match resp {
        Response::Ack => Ok(()),
        other => Err(unexpected(other)),
    }
}
