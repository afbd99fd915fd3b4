// mfrc522-rs/libmfrc522/src/transport/mock/mod.rs

//! Register-level MFRC522 simulator for tests and host-side demos.
//!
//! The simulator reacts to the same register writes the real chip does:
//! CalcCRC fills the CRC result registers, Transceive runs when
//! `BitFramingReg.StartSend` is set, MFAuthent consumes the FIFO. Card
//! answers come from a scripted [`Reply`] queue first, then from an
//! inserted [`VirtualCard`], otherwise the timer fires (no tag).

/// Emulated MIFARE Classic card.
pub mod card;

pub use card::{CardReply, CardState, VirtualCard};

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::protocol::checksum::crc_a_bytes;
use crate::protocol::pcd::{
    FIFO_FLUSH, MF_CRYPTO1_ON, PcdCommand, RX_LAST_BITS_MASK, START_SEND, div_irq, irq,
};
use crate::protocol::{ErrorBits, Register};
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Value of `VersionReg` on an MFRC522 v2.0.
pub const DEFAULT_VERSION: u8 = 0x92;

const FIFO_CAPACITY: usize = 64;

/// Scripted outcome for the next Transceive or MFAuthent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Card answered; `last_bits` valid bits in the final byte (0 = whole).
    Frame { data: Vec<u8>, last_bits: u8 },
    /// Nothing answered: TimerIRq.
    Silence,
    /// Chip flagged these `ErrorReg` bits.
    Errors(u8),
    /// MFAuthent outcome.
    Auth(bool),
}

impl Reply {
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Reply::Frame {
            data: data.into(),
            last_bits: 0,
        }
    }

    pub fn bits(data: impl Into<Vec<u8>>, last_bits: u8) -> Self {
        Reply::Frame {
            data: data.into(),
            last_bits,
        }
    }

    /// 4-bit MIFARE answer nibble.
    pub fn nibble(value: u8) -> Self {
        Reply::bits(vec![value], 4)
    }

    /// Bytes followed by their CRC_A.
    pub fn with_crc(data: &[u8]) -> Self {
        let mut framed = data.to_vec();
        framed.extend_from_slice(&crc_a_bytes(data));
        Reply::bytes(framed)
    }
}

/// Direction of a register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessKind {
    Read,
    Write,
}

/// One register transaction seen on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    pub register: Register,
    pub kind: AccessKind,
    /// Value written, or value returned by the read.
    pub value: u8,
}

#[derive(Debug)]
struct Chip {
    regs: [u8; 64],
    fifo: VecDeque<u8>,
    card: Option<VirtualCard>,
    replies: VecDeque<Reply>,
    log: Vec<Access>,
    transceived: Vec<Vec<u8>>,
    auth_packets: Vec<Vec<u8>>,
    hard_resets: usize,
    soft_resets: usize,
    crc_stalled: bool,
    unresponsive: bool,
    fault: Option<String>,
    version: u8,
}

impl Default for Chip {
    fn default() -> Self {
        Self {
            regs: [0; 64],
            fifo: VecDeque::with_capacity(FIFO_CAPACITY),
            card: None,
            replies: VecDeque::new(),
            log: Vec::new(),
            transceived: Vec::new(),
            auth_packets: Vec::new(),
            hard_resets: 0,
            soft_resets: 0,
            crc_stalled: false,
            unresponsive: false,
            fault: None,
            version: DEFAULT_VERSION,
        }
    }
}

impl Chip {
    fn reg(&self, reg: Register) -> u8 {
        self.regs[reg.address() as usize]
    }

    fn reg_mut(&mut self, reg: Register) -> &mut u8 {
        &mut self.regs[reg.address() as usize]
    }

    /// Registers back to zero; the RF field drops with them.
    fn reset_registers(&mut self) {
        self.regs = [0; 64];
        self.fifo.clear();
        if let Some(card) = self.card.as_mut() {
            card.power_cycle();
        }
    }

    fn raise(&mut self, bits: u8) {
        *self.reg_mut(Register::ComIrq) |= bits;
    }

    fn read(&mut self, reg: Register) -> u8 {
        match reg {
            Register::FifoData => self.fifo.pop_front().unwrap_or(0),
            Register::FifoLevel => self.fifo.len() as u8,
            Register::Version => self.version,
            other => self.reg(other),
        }
    }

    fn write(&mut self, reg: Register, value: u8) {
        match reg {
            Register::Command => {
                *self.reg_mut(reg) = value;
                if let Some(cmd) = PcdCommand::from_code(value) {
                    self.execute(cmd);
                }
            }
            // bit 7 (Set1) selects whether the marked bits are set or cleared
            Register::ComIrq | Register::DivIrq => {
                let marked = value & 0x7F;
                if value & irq::SET1 != 0 {
                    *self.reg_mut(reg) |= marked;
                } else {
                    *self.reg_mut(reg) &= !marked;
                }
            }
            Register::FifoLevel => {
                if value & FIFO_FLUSH != 0 {
                    self.fifo.clear();
                }
            }
            Register::FifoData => {
                if self.fifo.len() < FIFO_CAPACITY {
                    self.fifo.push_back(value);
                } else {
                    *self.reg_mut(Register::Error) |= ErrorBits::BUFFER_OVERFLOW.bits();
                }
            }
            Register::BitFraming => {
                *self.reg_mut(reg) = value;
                let transceiving = self.reg(Register::Command) & 0x0F == PcdCommand::Transceive.code();
                if value & START_SEND != 0 && transceiving {
                    self.transceive();
                }
            }
            Register::Version => {}
            other => *self.reg_mut(other) = value,
        }
    }

    fn execute(&mut self, cmd: PcdCommand) {
        match cmd {
            PcdCommand::Idle | PcdCommand::Transceive => {}
            PcdCommand::SoftReset => {
                self.soft_resets += 1;
                self.reset_registers();
            }
            PcdCommand::CalculateCrc => {
                if self.crc_stalled {
                    return;
                }
                let data: Vec<u8> = self.fifo.drain(..).collect();
                let [lo, hi] = crc_a_bytes(&data);
                *self.reg_mut(Register::CrcResultL) = lo;
                *self.reg_mut(Register::CrcResultH) = hi;
                *self.reg_mut(Register::DivIrq) |= div_irq::CRC;
            }
            PcdCommand::Authenticate => self.authenticate(),
        }
    }

    fn authenticate(&mut self) {
        let packet: Vec<u8> = self.fifo.drain(..).collect();
        self.auth_packets.push(packet.clone());
        *self.reg_mut(Register::Error) = 0;
        if self.unresponsive {
            return;
        }
        let ok = match self.replies.pop_front() {
            Some(Reply::Auth(ok)) => ok,
            Some(Reply::Frame { .. }) => true,
            Some(Reply::Silence) => {
                self.raise(irq::TIMER);
                return;
            }
            Some(Reply::Errors(bits)) => {
                *self.reg_mut(Register::Error) = bits;
                self.raise(irq::IDLE | irq::ERR);
                return;
            }
            None => match self.card.as_mut() {
                Some(card) => card.authenticate(&packet),
                None => {
                    self.raise(irq::TIMER);
                    return;
                }
            },
        };
        if ok {
            *self.reg_mut(Register::Status2) |= MF_CRYPTO1_ON;
            self.raise(irq::IDLE);
        } else {
            *self.reg_mut(Register::Error) = ErrorBits::PROTOCOL.bits();
            self.raise(irq::IDLE | irq::ERR);
        }
    }

    fn transceive(&mut self) {
        let tx_last_bits = self.reg(Register::BitFraming) & 0x07;
        let frame: Vec<u8> = self.fifo.drain(..).collect();
        self.transceived.push(frame.clone());
        *self.reg_mut(Register::Error) = 0;
        if self.unresponsive {
            return;
        }
        self.raise(irq::TX);

        let reply = match self.replies.pop_front() {
            Some(reply) => reply,
            None => self
                .card
                .as_mut()
                .and_then(|card| card.transceive(&frame, tx_last_bits))
                .map(|r| Reply::Frame {
                    data: r.data,
                    last_bits: r.last_bits,
                })
                .unwrap_or(Reply::Silence),
        };

        match reply {
            Reply::Frame { data, last_bits } => {
                self.fifo.extend(data.into_iter().take(FIFO_CAPACITY));
                let control = self.reg(Register::Control) & !RX_LAST_BITS_MASK;
                *self.reg_mut(Register::Control) = control | (last_bits & RX_LAST_BITS_MASK);
                self.raise(irq::RX | irq::IDLE);
            }
            Reply::Errors(bits) => {
                *self.reg_mut(Register::Error) = bits;
                self.raise(irq::ERR | irq::RX | irq::IDLE);
            }
            Reply::Silence | Reply::Auth(_) => self.raise(irq::TIMER),
        }
    }
}

/// Cloneable handle to one simulated chip. Clones share state, so a test
/// can keep a probe while the device owns the transport.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    chip: Rc<RefCell<Chip>>,
}

impl MockTransport {
    /// Chip with no card in the field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chip with `card` in the field.
    pub fn with_card(card: VirtualCard) -> Self {
        let mock = Self::new();
        mock.insert_card(card);
        mock
    }

    /// Put `card` into the field, replacing any other.
    pub fn insert_card(&self, card: VirtualCard) {
        self.chip.borrow_mut().card = Some(card);
    }

    /// Take the card out of the field.
    pub fn remove_card(&self) -> Option<VirtualCard> {
        self.chip.borrow_mut().card.take()
    }

    /// Run `f` against the inserted card, if any.
    pub fn card<R>(&self, f: impl FnOnce(&mut VirtualCard) -> R) -> Option<R> {
        self.chip.borrow_mut().card.as_mut().map(f)
    }

    pub fn card_block(&self, block: u8) -> Option<[u8; 16]> {
        self.card(|c| c.block(block)).flatten()
    }

    /// Queue an outcome; queued replies win over the card.
    pub fn push_reply(&self, reply: Reply) {
        self.chip.borrow_mut().replies.push_back(reply);
    }

    pub fn pending_replies(&self) -> usize {
        self.chip.borrow().replies.len()
    }

    /// CalcCRC never completes: DivIrq stays clear, results stay stale.
    pub fn stall_crc(&self, stalled: bool) {
        self.chip.borrow_mut().crc_stalled = stalled;
    }

    /// Commands never raise an interrupt.
    pub fn set_unresponsive(&self, unresponsive: bool) {
        self.chip.borrow_mut().unresponsive = unresponsive;
    }

    /// Every following transaction fails with `Error::Transport`.
    pub fn set_fault(&self, fault: Option<&str>) {
        self.chip.borrow_mut().fault = fault.map(str::to_owned);
    }

    pub fn set_version(&self, version: u8) {
        self.chip.borrow_mut().version = version;
    }

    /// Register content without a logged transaction.
    pub fn peek(&self, reg: Register) -> u8 {
        self.chip.borrow().reg(reg)
    }

    /// Overwrite a register without a logged transaction.
    pub fn poke(&self, reg: Register, value: u8) {
        *self.chip.borrow_mut().reg_mut(reg) = value;
    }

    pub fn access_count(&self) -> usize {
        self.chip.borrow().log.len()
    }

    pub fn accesses(&self) -> Vec<Access> {
        self.chip.borrow().log.clone()
    }

    /// Values written to `reg`, oldest first.
    pub fn writes_to(&self, reg: Register) -> Vec<u8> {
        self.chip
            .borrow()
            .log
            .iter()
            .filter(|a| a.register == reg && a.kind == AccessKind::Write)
            .map(|a| a.value)
            .collect()
    }

    /// Frames that went out through Transceive, CRC included.
    pub fn transceived(&self) -> Vec<Vec<u8>> {
        self.chip.borrow().transceived.clone()
    }

    /// Every MFAuthent FIFO payload, in order.
    pub fn auth_packets(&self) -> Vec<Vec<u8>> {
        self.chip.borrow().auth_packets.clone()
    }

    pub fn hard_resets(&self) -> usize {
        self.chip.borrow().hard_resets
    }

    pub fn soft_resets(&self) -> usize {
        self.chip.borrow().soft_resets
    }

    /// Forget logged transactions and frames; chip state is kept.
    pub fn clear_log(&self) {
        let mut chip = self.chip.borrow_mut();
        chip.log.clear();
        chip.transceived.clear();
        chip.auth_packets.clear();
    }

    fn check_fault(chip: &Chip) -> Result<()> {
        match &chip.fault {
            Some(msg) => Err(Error::Transport(msg.clone())),
            None => Ok(()),
        }
    }
}

impl Transport for MockTransport {
    fn write_register(&mut self, reg: Register, value: u8) -> Result<()> {
        let mut chip = self.chip.borrow_mut();
        Self::check_fault(&chip)?;
        chip.log.push(Access {
            register: reg,
            kind: AccessKind::Write,
            value,
        });
        chip.write(reg, value);
        Ok(())
    }

    fn read_register(&mut self, reg: Register) -> Result<u8> {
        let mut chip = self.chip.borrow_mut();
        Self::check_fault(&chip)?;
        let value = chip.read(reg);
        chip.log.push(Access {
            register: reg,
            kind: AccessKind::Read,
            value,
        });
        Ok(value)
    }

    fn reset(&mut self) -> Result<()> {
        let mut chip = self.chip.borrow_mut();
        Self::check_fault(&chip)?;
        chip.hard_resets += 1;
        chip.reset_registers();
        Ok(())
    }
}
