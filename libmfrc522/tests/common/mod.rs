// Shared helpers for the integration tests. Each test crate only uses a
// subset of them.
#![allow(dead_code)]

pub mod fixtures;

use libmfrc522::device::{Device, Initialized};
use libmfrc522::transport::mock::{MockTransport, VirtualCard};

/// Simulated reader with a factory-fresh card holding the sample UID.
pub fn reader_with_card() -> MockTransport {
    MockTransport::with_card(VirtualCard::new(fixtures::sample_uid()))
}

pub fn initialized(mock: &MockTransport) -> Device<Initialized> {
    libmfrc522::test_support::initialized_mock_device(mock).unwrap()
}
