// mfrc522-rs/libmfrc522/src/protocol/responses/mod.rs

pub mod block;
pub mod request;
pub mod select;

pub use block::{decode_ack, decode_block};
pub use request::decode_atqa;
pub use select::{decode_anticollision, decode_sak};

use crate::protocol::ResponseFrame;
use crate::protocol::commands::PiccCommand;
use crate::types::{Atqa, BlockData, Uid, WritePhase};

/// Decoded card answer. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Answer to REQA/WUPA.
    Atqa(Atqa),
    /// Anticollision answer with a matching BCC.
    Uid(Uid),
    /// SELECT answer.
    Sak(u8),
    /// READ answer.
    Block(BlockData),
    /// 4-bit ACK.
    Ack,
    /// Commands that expect no answer (HLTA)
    Silent,
}

impl Response {
    /// Decode `frame` as the answer to `cmd`.
    pub fn decode(cmd: &PiccCommand, frame: &ResponseFrame) -> crate::Result<Self> {
        match cmd {
            PiccCommand::Request { .. } => decode_atqa(frame).map(Self::Atqa),
            PiccCommand::Anticollision { .. } => decode_anticollision(frame).map(Self::Uid),
            PiccCommand::Select { .. } => decode_sak(frame).map(Self::Sak),
            PiccCommand::Read { .. } => decode_block(frame).map(Self::Block),
            PiccCommand::WriteCommand { .. } => {
                decode_ack(frame, WritePhase::Command).map(|_| Self::Ack)
            }
            PiccCommand::WriteData { .. } => decode_ack(frame, WritePhase::Data).map(|_| Self::Ack),
            PiccCommand::Halt => Ok(Self::Silent),
        }
    }
}
