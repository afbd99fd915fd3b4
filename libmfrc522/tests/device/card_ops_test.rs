#[path = "../common/mod.rs"]
mod common;

use libmfrc522::card::{Card, CardKind, operations};
use libmfrc522::transport::mock::{CardState, MockTransport, Reply, VirtualCard};
use libmfrc522::types::{BlockAddress, WritePhase};
use libmfrc522::Error;

#[test]
fn scripted_anticollision_decodes_uid() {
    let mock = MockTransport::new();
    let mut dev = common::initialized(&mock);
    mock.push_reply(Reply::bytes(common::fixtures::anticollision_answer()));
    let uid = operations::anticollision(&mut dev).unwrap();
    assert_eq!(uid.to_hex(), "04112233");
    assert_eq!(mock.transceived(), vec![vec![0x93, 0x20]]);
}

#[test]
fn anticollision_with_bad_bcc() {
    let mock = MockTransport::new();
    let mut dev = common::initialized(&mock);
    mock.push_reply(Reply::bytes(vec![0x04, 0x11, 0x22, 0x33, 0x05]));
    assert_eq!(
        operations::anticollision(&mut dev),
        Err(Error::ChecksumMismatch {
            expected: 0x04,
            actual: 0x05
        })
    );
}

#[test]
fn anticollision_in_empty_field_is_no_tag() {
    let mock = MockTransport::new();
    let mut dev = common::initialized(&mock);
    assert_eq!(operations::anticollision(&mut dev), Err(Error::NoTag));
}

#[test]
fn select_sends_crc_and_checks_sak_frame() {
    let mock = MockTransport::new();
    let mut dev = common::initialized(&mock);
    let uid = common::fixtures::sample_uid();

    mock.push_reply(Reply::bytes(common::fixtures::sak_answer()));
    assert_eq!(operations::select(&mut dev, &uid).unwrap(), 0x08);
    assert_eq!(mock.transceived()[0], common::fixtures::select_frame());

    // SAK with a truncated CRC: 2 bytes, 16 bits
    mock.push_reply(Reply::bytes(vec![0x08, 0xB6]));
    assert_eq!(
        operations::select(&mut dev, &uid),
        Err(Error::SelectFailed {
            len: 2,
            valid_bits: 16
        })
    );
}

#[test]
fn write_command_nak_skips_data_phase() {
    let mock = MockTransport::new();
    let mut dev = common::initialized(&mock);
    let block = BlockAddress::new(4).unwrap();

    mock.push_reply(Reply::nibble(0x05));
    assert_eq!(
        operations::write_block(&mut dev, block, &common::fixtures::sample_blockdata(0x11)),
        Err(Error::WriteRejected {
            phase: WritePhase::Command,
            ack: Some(0x05)
        })
    );
    assert_eq!(mock.transceived().len(), 1);
    assert_eq!(mock.transceived()[0][..2].to_vec(), vec![0xA0, 0x04]);
}

#[test]
fn write_data_nak_reports_data_phase() {
    let mock = MockTransport::new();
    let mut dev = common::initialized(&mock);
    mock.push_reply(Reply::nibble(0x0A));
    mock.push_reply(Reply::nibble(0x01));
    assert_eq!(
        operations::write_block(
            &mut dev,
            BlockAddress::new(4).unwrap(),
            &common::fixtures::sample_blockdata(0x11)
        ),
        Err(Error::WriteRejected {
            phase: WritePhase::Data,
            ack: Some(0x01)
        })
    );
    // 16 data bytes + CRC_A
    assert_eq!(mock.transceived()[1].len(), 18);
}

#[test]
fn card_lifecycle_against_virtual_card() {
    let mock = common::reader_with_card();
    let mut dev = common::initialized(&mock);
    let key = common::fixtures::factory_key();

    operations::request(&mut dev, false).unwrap();
    let card = Card::activate(&mut dev).unwrap();
    assert_eq!(card.info().kind, CardKind::MifareClassic1K);
    assert_eq!(mock.card(|c| c.state()), Some(CardState::Active));

    let block = BlockAddress::from_sector(3, 1).unwrap();
    let data = common::fixtures::text_block();
    card.write_block(&mut dev, &key, block, &data).unwrap();
    assert_eq!(card.read_block(&mut dev, &key, block).unwrap(), data);
    assert!(dev.crypto1_active().unwrap());

    card.halt(&mut dev).unwrap();
    assert!(!dev.crypto1_active().unwrap());
    assert_eq!(mock.card(|c| c.state()), Some(CardState::Halted));

    // a halted card ignores REQA but answers WUPA
    assert!(matches!(
        operations::request(&mut dev, false),
        Err(Error::NoCard { .. })
    ));
    operations::request(&mut dev, true).unwrap();
}

#[test]
fn trailer_read_hides_key_a() {
    let uid = common::fixtures::sample_uid();
    let mock = MockTransport::with_card(VirtualCard::new(uid).with_sector_keys(
        2,
        [0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5],
        [0xB0; 6],
    ));
    let mut dev = common::initialized(&mock);
    operations::request(&mut dev, false).unwrap();
    let card = Card::activate(&mut dev).unwrap();

    let key = libmfrc522::AuthKey::key_a([0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5]);
    let trailer = card
        .read_block(&mut dev, &key, BlockAddress::from_sector(2, 3).unwrap())
        .unwrap();
    assert_eq!(&trailer.as_bytes()[..6], &[0; 6]);

    let wrong = common::fixtures::factory_key();
    assert_eq!(
        card.authenticate(&mut dev, &wrong, BlockAddress::from_sector(2, 0).unwrap()),
        Err(Error::AuthFailed)
    );
}
