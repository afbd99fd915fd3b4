// mfrc522-rs/libmfrc522/src/device/config.rs
//! Reader configuration and the chip defaults written by `wake`.

/// Iterations of the `DivIrqReg.CRCIRq` poll
pub const CRC_POLL_BUDGET: u16 = 255;

/// Iterations of the `ComIrqReg` poll while a command runs
pub const COMMAND_POLL_BUDGET: u16 = 2000;

/// Delay between two presence checks in `wait_for_card` (ms)
pub const CARD_POLL_INTERVAL_MS: u32 = 100;

/// Authenticate + write attempts while a card NAKs a block write
pub const WRITE_ATTEMPTS: usize = 3;

/// TAuto=1, TPrescaler_Hi=0x0D
pub const T_MODE: u8 = 0x8D;
/// f(timer) = 13.56 MHz / (2 * 0xD3E + 1) = 2 kHz
pub const T_PRESCALER: u8 = 0x3E;
/// Timer reload: 30 ticks, 15 ms until TimerIRq
pub const T_RELOAD: u16 = 30;
/// Force 100 % ASK modulation
pub const TX_ASK: u8 = 0x40;
/// MSBFirst=0, TxWaitRF=1, PolMFin=1, CRCPreset=0x6363
pub const MODE: u8 = 0x3D;

/// Tunables for one reader. `Default` reproduces the values the chip is
/// normally brought up with.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderConfig {
    /// DivIrqReg reads before a CRC computation is given up.
    pub crc_poll_budget: u16,
    /// ComIrqReg reads before a command is given up.
    pub command_poll_budget: u16,
    /// Sleep between REQA attempts while waiting for a card.
    pub card_poll_interval_ms: u32,
    /// Fail with `Error::CrcTimeout` instead of returning whatever the
    /// result registers hold when the coprocessor does not finish.
    pub strict_crc: bool,
    /// Total WRITE attempts when the card NAKs.
    pub write_attempts: usize,
    /// TModeReg value written by `initialize`.
    pub t_mode: u8,
    pub t_prescaler: u8,
    pub t_reload: u16,
    /// TxASKReg value (100% ASK).
    pub tx_ask: u8,
    /// ModeReg value (CRC preset 0x6363).
    pub mode: u8,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            crc_poll_budget: CRC_POLL_BUDGET,
            command_poll_budget: COMMAND_POLL_BUDGET,
            card_poll_interval_ms: CARD_POLL_INTERVAL_MS,
            strict_crc: false,
            write_attempts: WRITE_ATTEMPTS,
            t_mode: T_MODE,
            t_prescaler: T_PRESCALER,
            t_reload: T_RELOAD,
            tx_ask: TX_ASK,
            mode: MODE,
        }
    }
}

impl ReaderConfig {
    pub fn with_strict_crc(mut self, strict: bool) -> Self {
        self.strict_crc = strict;
        self
    }

    pub fn with_card_poll_interval_ms(mut self, interval_ms: u32) -> Self {
        self.card_poll_interval_ms = interval_ms;
        self
    }

    pub fn with_write_attempts(mut self, attempts: usize) -> Self {
        self.write_attempts = attempts;
        self
    }

    pub fn with_command_poll_budget(mut self, budget: u16) -> Self {
        self.command_poll_budget = budget;
        self
    }
}
