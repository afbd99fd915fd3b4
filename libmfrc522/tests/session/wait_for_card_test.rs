#[path = "../common/mod.rs"]
mod common;

use libmfrc522::device::{Device, ReaderConfig};
use libmfrc522::session::CardSession;
use libmfrc522::test_support::{RecordingDelay, mock_session};
use libmfrc522::transport::mock::{MockTransport, Reply};
use libmfrc522::{Detection, Error};

#[test]
fn card_answering_on_third_poll() {
    let mock = common::reader_with_card();
    mock.push_reply(Reply::Silence);
    mock.push_reply(Reply::Silence);
    let (mut session, delay) = mock_session(&mock).unwrap();

    assert_eq!(session.wait_for_card(1000).unwrap(), Detection::Detected);
    assert_eq!(delay.calls(), vec![100, 100]);
    // REQA is a 7-bit short frame
    assert!(mock.transceived().iter().all(|f| f == &vec![0x26]));
    assert_eq!(mock.transceived().len(), 3);
}

#[test]
fn timeout_is_rounded_up_to_interval() {
    let mock = MockTransport::new();
    let (mut session, delay) = mock_session(&mock).unwrap();
    assert_eq!(session.wait_for_card(500).unwrap(), Detection::Timeout);
    assert_eq!(delay.calls().len(), 5);
    assert_eq!(delay.total_ms(), 500);

    assert_eq!(session.wait_for_card(101).unwrap(), Detection::Timeout);
    assert_eq!(delay.total_ms(), 700);
}

#[test]
fn garbled_answers_keep_polling() {
    let mock = common::reader_with_card();
    // collision, then a truncated ATQA
    mock.push_reply(Reply::Errors(0x08));
    mock.push_reply(Reply::bits(vec![0x04], 4));
    let (mut session, delay) = mock_session(&mock).unwrap();
    assert_eq!(session.wait_for_card(1000).unwrap(), Detection::Detected);
    assert_eq!(delay.total_ms(), 200);
}

#[test]
fn custom_interval_is_honoured() {
    let mock = MockTransport::new();
    let config = ReaderConfig::default().with_card_poll_interval_ms(40);
    let device = Device::with_config(Box::new(mock.clone()), config)
        .unwrap()
        .initialize()
        .unwrap();
    let delay = RecordingDelay::default();
    let mut session = CardSession::new(device, delay.clone());

    assert_eq!(session.wait_for_card(100).unwrap(), Detection::Timeout);
    assert_eq!(delay.calls(), vec![40, 40, 40]);
}

#[test]
fn removed_card_is_not_found_again() {
    let mock = common::reader_with_card();
    let (mut session, _delay) = mock_session(&mock).unwrap();
    assert_eq!(session.wait_for_card(100).unwrap(), Detection::Detected);
    assert!(mock.remove_card().is_some());
    assert_eq!(session.wait_for_card(100).unwrap(), Detection::Timeout);
}

#[test]
fn bus_fault_is_reported() {
    let mock = common::reader_with_card();
    let (mut session, _delay) = mock_session(&mock).unwrap();
    mock.set_fault(Some("spi: device gone"));
    match session.wait_for_card(100) {
        Err(Error::Transport(msg)) => assert!(msg.contains("device gone")),
        other => panic!("expected transport error, got {:?}", other),
    }
}
