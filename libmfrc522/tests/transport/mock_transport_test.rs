#[path = "../common/mod.rs"]
mod common;

use libmfrc522::protocol::Register;
use libmfrc522::transport::mock::{AccessKind, MockTransport, Reply};
use libmfrc522::transport::Transport;
use libmfrc522::Error;

#[test]
fn mock_records_register_traffic() {
    let mut m = MockTransport::new();
    m.write_register(Register::TxAsk, 0x40).unwrap();
    assert_eq!(m.read_register(Register::TxAsk).unwrap(), 0x40);

    let log = m.accesses();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].kind, AccessKind::Write);
    assert_eq!(log[1].kind, AccessKind::Read);
    assert_eq!(m.writes_to(Register::TxAsk), vec![0x40]);
}

#[test]
fn fifo_flush_and_level() {
    let mut m = MockTransport::new();
    m.write_fifo(&[1, 2, 3]).unwrap();
    assert_eq!(m.read_register(Register::FifoLevel).unwrap(), 3);
    assert_eq!(m.read_fifo(2).unwrap(), vec![1, 2]);
    m.write_register(Register::FifoLevel, 0x80).unwrap();
    assert_eq!(m.read_register(Register::FifoLevel).unwrap(), 0);
}

#[test]
fn calc_crc_fills_result_registers() {
    let mut m = MockTransport::new();
    m.write_fifo(&[0x30, 0x04]).unwrap();
    m.write_register(Register::Command, 0x03).unwrap();
    assert_eq!(m.read_register(Register::DivIrq).unwrap() & 0x04, 0x04);
    assert_eq!(m.read_register(Register::CrcResultL).unwrap(), 0x26);
    assert_eq!(m.read_register(Register::CrcResultH).unwrap(), 0xEE);
}

#[test]
fn scripted_replies_are_consumed_in_order() {
    let m = common::reader_with_card();
    m.push_reply(Reply::Silence);
    m.push_reply(Reply::with_crc(&[0x08]));
    assert_eq!(m.pending_replies(), 2);

    let mut dev = common::initialized(&m);
    assert!(libmfrc522::card::operations::request(&mut dev, false).is_err());
    assert_eq!(m.pending_replies(), 1);
}

#[test]
fn fault_surfaces_as_transport_error() {
    let mut m = MockTransport::new();
    m.set_fault(Some("spi: overrun"));
    assert!(matches!(
        m.read_register(Register::Version),
        Err(Error::Transport(_))
    ));
    m.set_fault(None);
    assert_eq!(m.read_register(Register::Version).unwrap(), 0x92);
}
