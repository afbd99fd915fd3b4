// mfrc522-rs/libmfrc522/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;

use crate::device::{Device, Initialized};
use crate::session::CardSession;
use crate::transport::mock::MockTransport;
use crate::{Result, Uid};

/// UID used throughout the tests: `04 11 22 33`, BCC `0x04`.
#[doc(hidden)]
pub fn sample_uid() -> Uid {
    Uid::from_bytes([0x04, 0x11, 0x22, 0x33])
}

/// Initialize a device over a clone of `mock`; the caller keeps the probe.
#[doc(hidden)]
pub fn initialized_mock_device(mock: &MockTransport) -> Result<Device<Initialized>> {
    Device::new_with_transport(Box::new(mock.clone()))?.initialize()
}

/// Initialized device whose card has already answered REQA (card READY).
#[doc(hidden)]
pub fn detected_card_device(mock: &MockTransport) -> Result<Device<Initialized>> {
    let mut device = initialized_mock_device(mock)?;
    crate::card::operations::request(&mut device, false)?;
    Ok(device)
}

/// `DelayNs` that records each requested pause instead of sleeping.
#[doc(hidden)]
#[derive(Debug, Clone, Default)]
pub struct RecordingDelay {
    pauses_ns: Rc<RefCell<Vec<u64>>>,
}

impl RecordingDelay {
    /// Pauses in milliseconds, in call order.
    pub fn calls(&self) -> Vec<u64> {
        self.pauses_ns
            .borrow()
            .iter()
            .map(|ns| ns / 1_000_000)
            .collect()
    }

    pub fn total_ms(&self) -> u64 {
        self.pauses_ns.borrow().iter().sum::<u64>() / 1_000_000
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.pauses_ns.borrow_mut().push(u64::from(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.pauses_ns
            .borrow_mut()
            .push(u64::from(ms) * 1_000_000);
    }
}

/// Session over `mock` with a recording delay; returns the delay probe.
#[doc(hidden)]
pub fn mock_session(mock: &MockTransport) -> Result<(CardSession<RecordingDelay>, RecordingDelay)> {
    let delay = RecordingDelay::default();
    let session = CardSession::new(initialized_mock_device(mock)?, delay.clone());
    Ok((session, delay))
}
