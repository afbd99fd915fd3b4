// mfrc522-rs/libmfrc522/src/utils/timeout.rs
//! Delay and timeout helpers.
//!
//! Busy loops inside the driver are bounded by iteration counts; wall-clock
//! waits go through an injected [`DelayNs`] so tests can observe them.

use std::time::Duration;

use embedded_hal::delay::DelayNs;

/// Default `wait_for_card` timeout used by the demos (ms).
pub const DEFAULT_CARD_TIMEOUT_MS: u32 = 500;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Number of `interval_ms` steps needed to reach `timeout_ms`.
pub fn poll_attempts(timeout_ms: u32, interval_ms: u32) -> u32 {
    if interval_ms == 0 {
        return u32::from(timeout_ms > 0);
    }
    timeout_ms.div_ceil(interval_ms)
}

/// [`DelayNs`] backed by `std::thread::sleep`, for hosts.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
