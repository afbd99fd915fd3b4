#[path = "../common/mod.rs"]
mod common;

use libmfrc522::device::ReaderConfig;
use libmfrc522::session::{CardSession, MemoryAccessList};
use libmfrc522::test_support::{RecordingDelay, mock_session};
use libmfrc522::transport::mock::MockTransport;
use libmfrc522::types::{AuthKey, BlockData, WritePhase};
use libmfrc522::{Detection, Device, Error};
use proptest::prelude::*;

fn selected(mock: &MockTransport) -> CardSession<RecordingDelay> {
    let (mut session, _delay) = mock_session(mock).unwrap();
    assert_eq!(session.wait_for_card(500).unwrap(), Detection::Detected);
    assert_eq!(session.read_uid().unwrap(), "04112233");
    session.select(&common::fixtures::sample_uid()).unwrap();
    session
}

#[test]
fn write_and_read_back_through_session() {
    let mock = common::reader_with_card();
    let mut session = selected(&mock);
    let uid = common::fixtures::sample_uid();
    let key = common::fixtures::factory_key();
    let data = common::fixtures::text_block();

    session
        .write_sector_block(&uid, 4, 1, &data, Some(&key))
        .unwrap();
    let back = session.read_sector_block(&uid, 4, 1, Some(&key)).unwrap();
    assert_eq!(back, data);
    assert_eq!(back.to_ascii_safe(), "hello, mifare!!.");
    session.stop_crypto1().unwrap();
    assert!(!session.device().crypto1_active().unwrap());
}

#[test]
fn block_index_is_taken_modulo_four() {
    let mock = common::reader_with_card();
    let mut session = selected(&mock);
    let uid = common::fixtures::sample_uid();
    let key = common::fixtures::factory_key();

    session
        .write_sector_block(&uid, 0, 6, &common::fixtures::sample_blockdata(0x77), Some(&key))
        .unwrap();
    assert_eq!(mock.card_block(2), Some([0x77; 16]));
}

#[test]
fn invalid_arguments_never_reach_the_bus() {
    let mock = common::reader_with_card();
    let mut session = selected(&mock);
    mock.clear_log();
    let uid = common::fixtures::sample_uid();
    let key = common::fixtures::factory_key();

    assert!(matches!(
        session.read_sector_block(&uid, 16, 0, Some(&key)),
        Err(Error::InvalidBlockAddress { .. })
    ));
    assert_eq!(
        session.read_sector_block(&uid, 0, 1, None),
        Err(Error::MissingKey)
    );
    assert_eq!(
        session.write_sector_block(&uid, 2, 2, &BlockData::from_bytes([0; 16]), None),
        Err(Error::MissingKey)
    );
    assert_eq!(mock.access_count(), 0);
}

#[test]
fn single_attempt_config_does_not_retry() {
    let mock = common::reader_with_card();
    let device = Device::with_config(
        Box::new(mock.clone()),
        ReaderConfig::default().with_write_attempts(1),
    )
    .unwrap()
    .initialize()
    .unwrap();
    let mut session = CardSession::new(device, RecordingDelay::default());
    session.wait_for_card(100).unwrap();
    let uid = common::fixtures::sample_uid();
    session.select(&uid).unwrap();
    mock.card(|c| c.nak_next_writes(&[0x04]));

    assert_eq!(
        session.write_sector_block(
            &uid,
            1,
            0,
            &common::fixtures::sample_blockdata(1),
            Some(&AuthKey::factory_default())
        ),
        Err(Error::WriteRejected {
            phase: WritePhase::Command,
            ack: Some(0x04)
        })
    );
    assert_eq!(mock.auth_packets().len(), 1);
}

#[test]
fn authorize_matches_uid_case_insensitively() {
    let mock = common::reader_with_card();
    let (mut session, _delay) = mock_session(&mock).unwrap();
    session.wait_for_card(100).unwrap();

    let mut list = MemoryAccessList::new();
    list.insert("04112233".to_uppercase());
    assert!(session.authorize(&list).unwrap());
    list.remove("04112233");
    assert!(!session.authorize(&list).unwrap());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // data blocks only; writing a trailer changes the keys
    #[test]
    fn any_block_survives_loopback(sector in 0u8..16, block in 0u8..3, bytes in any::<[u8; 16]>()) {
        let mock = common::reader_with_card();
        let mut session = selected(&mock);
        let uid = common::fixtures::sample_uid();
        let key = common::fixtures::factory_key();
        let data = BlockData::from_bytes(bytes);

        session.write_sector_block(&uid, sector, block, &data, Some(&key)).unwrap();
        prop_assert_eq!(session.read_sector_block(&uid, sector, block, Some(&key)).unwrap(), data);
    }
}
