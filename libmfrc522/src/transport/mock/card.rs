// mfrc522-rs/libmfrc522/src/transport/mock/card.rs

use crate::constants::{
    BLOCK_SIZE, BLOCKS_PER_SECTOR, MAX_BLOCK_ADDRESS, MIFARE_ACK, PICC_ANTICOLL1, PICC_AUTHENT1A,
    PICC_AUTHENT1B, PICC_HALT, PICC_NVB_ANTICOLL, PICC_NVB_SELECT, PICC_READ, PICC_REQALL,
    PICC_REQIDL, PICC_WRITE, SECTOR_COUNT,
};
use crate::protocol::checksum::crc_a_bytes;
use crate::protocol::pcd::SHORT_FRAME;
use crate::types::Uid;

/// 4-bit NAK a card sends for a refused command.
pub const NAK_NOT_ALLOWED: u8 = 0x04;

const BLOCK_COUNT: usize = MAX_BLOCK_ADDRESS as usize + 1;
const KEY_LEN: usize = 6;

/// ISO 14443-3 card state machine, reduced to what a MIFARE Classic 1K
/// walks through during request / select / authenticate / read / write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    /// Powered, waiting for REQA or WUPA.
    Idle,
    /// Answered a request; anticollision and SELECT allowed.
    Ready,
    /// Selected.
    Active,
    /// Selected with `sector` authenticated.
    Authenticated { sector: u8 },
    /// WRITE command ACKed; the next frame is data.
    AwaitingData { block: u8 },
    /// Asleep after HLTA; only WUPA wakes it.
    Halted,
}

/// Answer clocked back by the emulated card: bytes plus the number of
/// valid bits in the last one (0 means whole byte).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardReply {
    pub data: Vec<u8>,
    pub last_bits: u8,
}

impl CardReply {
    fn bytes(data: Vec<u8>) -> Self {
        Self { data, last_bits: 0 }
    }

    fn nibble(value: u8) -> Self {
        Self {
            data: vec![value & 0x0F],
            last_bits: 4,
        }
    }

    fn with_crc(mut data: Vec<u8>) -> Self {
        let crc = crc_a_bytes(&data);
        data.extend_from_slice(&crc);
        Self::bytes(data)
    }
}

/// Emulated MIFARE Classic 1K card seen by [`MockTransport`](super::MockTransport).
///
/// Frames are exchanged in clear text: the chip hides Crypto1 from the
/// host, so the emulation only tracks whether a sector is authenticated.
/// READ answers carry the 16 data bytes without a CRC trailer.
#[derive(Debug, Clone)]
pub struct VirtualCard {
    uid: Uid,
    atqa: [u8; 2],
    sak: u8,
    blocks: [[u8; BLOCK_SIZE]; BLOCK_COUNT],
    keys_a: [[u8; KEY_LEN]; SECTOR_COUNT as usize],
    keys_b: [[u8; KEY_LEN]; SECTOR_COUNT as usize],
    state: CardState,
    pending_naks: Vec<u8>,
}

impl VirtualCard {
    /// Factory-fresh 1K card: zeroed data, transport keys `FF..FF`.
    pub fn new(uid: Uid) -> Self {
        let mut blocks = [[0u8; BLOCK_SIZE]; BLOCK_COUNT];
        let with_bcc = uid.with_bcc();
        blocks[0][..5].copy_from_slice(&with_bcc);
        for sector in 0..SECTOR_COUNT as usize {
            let trailer = &mut blocks[sector * BLOCKS_PER_SECTOR as usize + 3];
            trailer[..6].copy_from_slice(&[0xFF; KEY_LEN]);
            trailer[6..10].copy_from_slice(&[0xFF, 0x07, 0x80, 0x69]);
            trailer[10..].copy_from_slice(&[0xFF; KEY_LEN]);
        }
        Self {
            uid,
            atqa: [0x04, 0x00],
            sak: 0x08,
            blocks,
            keys_a: [[0xFF; KEY_LEN]; SECTOR_COUNT as usize],
            keys_b: [[0xFF; KEY_LEN]; SECTOR_COUNT as usize],
            state: CardState::Idle,
            pending_naks: Vec::new(),
        }
    }

    /// Answer SELECT with `sak`.
    pub fn with_sak(mut self, sak: u8) -> Self {
        self.sak = sak;
        self
    }

    pub fn with_atqa(mut self, atqa: [u8; 2]) -> Self {
        self.atqa = atqa;
        self
    }

    /// Replace both keys of `sector`.
    pub fn with_sector_keys(mut self, sector: u8, key_a: [u8; 6], key_b: [u8; 6]) -> Self {
        if let Some(slot) = self.keys_a.get_mut(sector as usize) {
            *slot = key_a;
        }
        if let Some(slot) = self.keys_b.get_mut(sector as usize) {
            *slot = key_b;
        }
        self
    }

    /// Preload `block`.
    pub fn with_block(mut self, block: u8, data: [u8; 16]) -> Self {
        self.set_block(block, data);
        self
    }

    pub fn uid(&self) -> Uid {
        self.uid
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn block(&self, block: u8) -> Option<[u8; 16]> {
        self.blocks.get(block as usize).copied()
    }

    pub fn set_block(&mut self, block: u8, data: [u8; 16]) {
        if let Some(slot) = self.blocks.get_mut(block as usize) {
            *slot = data;
        }
    }

    /// Answer the next WRITE commands with the given NAK codes, in order.
    pub fn nak_next_writes(&mut self, codes: &[u8]) {
        self.pending_naks.extend_from_slice(codes);
    }

    /// Field loss: every card falls back to IDLE. Injected NAKs stay
    /// queued.
    pub fn power_cycle(&mut self) {
        self.state = CardState::Idle;
    }

    /// Run an MFAuthent packet `[mode, block, key(6), uid(4)]`.
    pub fn authenticate(&mut self, packet: &[u8]) -> bool {
        if packet.len() != 12 {
            return false;
        }
        let block = packet[1];
        if !self.selected() || block > MAX_BLOCK_ADDRESS || packet[8..12] != self.uid.as_bytes()[..] {
            return false;
        }
        let sector = block / BLOCKS_PER_SECTOR;
        let expected = match packet[0] {
            PICC_AUTHENT1A => &self.keys_a[sector as usize],
            PICC_AUTHENT1B => &self.keys_b[sector as usize],
            _ => return false,
        };
        if packet[2..8] != expected[..] {
            self.state = CardState::Idle;
            return false;
        }
        self.state = CardState::Authenticated { sector };
        true
    }

    /// Handle one frame sent with `tx_last_bits` valid bits in its last
    /// byte. `None` means the card stays silent.
    pub fn transceive(&mut self, frame: &[u8], tx_last_bits: u8) -> Option<CardReply> {
        if tx_last_bits == SHORT_FRAME {
            return self.short_frame(frame);
        }
        if let CardState::AwaitingData { block } = self.state {
            return Some(self.write_data(block, frame));
        }
        match frame {
            [PICC_ANTICOLL1, PICC_NVB_ANTICOLL] if self.state == CardState::Ready => {
                Some(CardReply::bytes(self.uid.with_bcc().to_vec()))
            }
            [PICC_ANTICOLL1, PICC_NVB_SELECT, ..] if self.state == CardState::Ready => {
                self.select(frame)
            }
            [PICC_HALT, 0x00, _, _] if crc_ok(frame) => {
                if self.selected() {
                    self.state = CardState::Halted;
                }
                None
            }
            [PICC_READ, block, _, _] if self.selected() && crc_ok(frame) => Some(self.read(*block)),
            [PICC_WRITE, block, _, _] if self.selected() && crc_ok(frame) => {
                Some(self.write_command(*block))
            }
            _ => None,
        }
    }

    fn short_frame(&mut self, frame: &[u8]) -> Option<CardReply> {
        let wakes = match frame {
            [PICC_REQIDL] => self.state == CardState::Idle,
            [PICC_REQALL] => matches!(self.state, CardState::Idle | CardState::Halted),
            _ => false,
        };
        if !wakes {
            return None;
        }
        self.state = CardState::Ready;
        Some(CardReply::bytes(self.atqa.to_vec()))
    }

    fn select(&mut self, frame: &[u8]) -> Option<CardReply> {
        if frame.len() != 9 || !crc_ok(frame) || frame[2..7] != self.uid.with_bcc()[..] {
            return None;
        }
        self.state = CardState::Active;
        Some(CardReply::with_crc(vec![self.sak]))
    }

    fn selected(&self) -> bool {
        matches!(
            self.state,
            CardState::Active | CardState::Authenticated { .. }
        )
    }

    /// Any NAK drops the card back to IDLE; it has to be woken and
    /// selected again before it answers.
    fn refuse(&mut self, code: u8) -> CardReply {
        self.state = CardState::Idle;
        CardReply::nibble(code)
    }

    fn authorized_for(&self, block: u8) -> bool {
        matches!(
            self.state,
            CardState::Authenticated { sector } if block <= MAX_BLOCK_ADDRESS && block / BLOCKS_PER_SECTOR == sector
        )
    }

    fn read(&mut self, block: u8) -> CardReply {
        if !self.authorized_for(block) {
            return self.refuse(NAK_NOT_ALLOWED);
        }
        let mut data = self.blocks[block as usize];
        if block % BLOCKS_PER_SECTOR == BLOCKS_PER_SECTOR - 1 {
            // key A never reads back
            data[..KEY_LEN].fill(0x00);
        }
        CardReply::bytes(data.to_vec())
    }

    fn write_command(&mut self, block: u8) -> CardReply {
        if !self.authorized_for(block) {
            return self.refuse(NAK_NOT_ALLOWED);
        }
        if !self.pending_naks.is_empty() {
            let code = self.pending_naks.remove(0);
            return self.refuse(code);
        }
        self.state = CardState::AwaitingData { block };
        CardReply::nibble(MIFARE_ACK)
    }

    fn write_data(&mut self, block: u8, frame: &[u8]) -> CardReply {
        let sector = block / BLOCKS_PER_SECTOR;
        self.state = CardState::Authenticated { sector };
        if frame.len() != BLOCK_SIZE + 2 || !crc_ok(frame) {
            return self.refuse(NAK_NOT_ALLOWED);
        }
        let mut data = [0u8; BLOCK_SIZE];
        data.copy_from_slice(&frame[..BLOCK_SIZE]);
        if block % BLOCKS_PER_SECTOR == BLOCKS_PER_SECTOR - 1 {
            self.keys_a[sector as usize].copy_from_slice(&data[..KEY_LEN]);
            self.keys_b[sector as usize].copy_from_slice(&data[10..]);
        }
        self.blocks[block as usize] = data;
        CardReply::nibble(MIFARE_ACK)
    }
}

fn crc_ok(frame: &[u8]) -> bool {
    match frame.len().checked_sub(2) {
        Some(n) => crc_a_bytes(&frame[..n]) == frame[n..],
        None => false,
    }
}
