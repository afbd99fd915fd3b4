#[path = "../common/mod.rs"]
mod common;

use libmfrc522::device::{Device, DeviceBuilder, ReaderConfig};
use libmfrc522::protocol::Register;
use libmfrc522::transport::mock::MockTransport;
use libmfrc522::transport::traits::Transport;
use libmfrc522::Error;

#[test]
fn initialize_transitions_and_reads_version() {
    let mock = MockTransport::new();
    mock.set_version(0x92);

    let boxed: Box<dyn Transport> = Box::new(mock.clone());
    let device = Device::new_with_transport(boxed).unwrap();
    assert_eq!(mock.access_count(), 0);

    let mut initialized = device.initialize().unwrap();
    assert_eq!(initialized.initial_version(), 0x92);
    assert_eq!(initialized.version().unwrap(), 0x92);
    assert_eq!(mock.hard_resets(), 1);
    assert_eq!(mock.peek(Register::TxControl) & 0x03, 0x03);
}

#[test]
fn builder_applies_config() {
    let mock = MockTransport::new();
    let config = ReaderConfig::default().with_card_poll_interval_ms(25);
    let device = DeviceBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .with_config(config.clone())
        .build()
        .unwrap();
    assert_eq!(device.config(), &config);
}

#[test]
fn builder_without_transport_fails() {
    match DeviceBuilder::new().build() {
        Err(Error::Transport(msg)) => assert!(msg.contains("no transport")),
        Err(other) => panic!("unexpected error {:?}", other),
        Ok(_) => panic!("built a device without a transport"),
    }
}

#[test]
fn wake_restores_defaults() {
    let mock = common::reader_with_card();
    let mut dev = common::initialized(&mock);
    mock.poke(Register::TMode, 0x00);
    mock.poke(Register::TxControl, 0x80);

    dev.wake().unwrap();
    assert_eq!(mock.peek(Register::TMode), 0x8D);
    assert_eq!(mock.peek(Register::TxControl) & 0x03, 0x03);
    assert_eq!(mock.soft_resets(), 2);
}
