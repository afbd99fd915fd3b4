#[path = "../common/mod.rs"]
mod common;

use libmfrc522::protocol::commands::{
    CascadeLevel, encode_auth, encode_halt, encode_read, encode_request, encode_write_command,
};
use libmfrc522::protocol::{PiccCommand, crc_a_bytes};
use libmfrc522::types::{AuthKey, BlockAddress};

#[test]
fn request_and_wakeup() {
    assert_eq!(encode_request(false), [0x26]);
    assert_eq!(encode_request(true), [0x52]);
    let wupa = PiccCommand::Request { wake_all: true };
    assert_eq!(wupa.tx_last_bits(), 7);
}

#[test]
fn select_frame_matches_fixture() {
    let cmd = PiccCommand::Select {
        cascade: CascadeLevel::One,
        uid: common::fixtures::sample_uid(),
    };
    let mut payload = cmd.encode();
    let crc = crc_a_bytes(&payload);
    payload.extend_from_slice(&crc);
    assert_eq!(payload, common::fixtures::select_frame());
    assert_eq!(cmd.max_response_len(), 3);
}

#[test]
fn auth_packet_layout() {
    let key = AuthKey::key_b([1, 2, 3, 4, 5, 6]);
    let block = BlockAddress::from_sector(1, 3).unwrap();
    let packet = encode_auth(&key, block, &common::fixtures::sample_uid());
    assert_eq!(
        packet,
        [0x61, 0x07, 1, 2, 3, 4, 5, 6, 0x04, 0x11, 0x22, 0x33]
    );
}

#[test]
fn block_commands() {
    let block = BlockAddress::new(4).unwrap();
    assert_eq!(encode_read(block), [0x30, 0x04]);
    assert_eq!(encode_write_command(block), [0xA0, 0x04]);
    assert_eq!(encode_halt(), [0x50, 0x00]);
}

#[test]
fn only_bit_oriented_frames_skip_crc() {
    let block = BlockAddress::new(1).unwrap();
    let cases = [
        (PiccCommand::Request { wake_all: false }, false),
        (PiccCommand::Anticollision { cascade: CascadeLevel::One }, false),
        (PiccCommand::Read { block }, true),
        (PiccCommand::WriteCommand { block }, true),
        (
            PiccCommand::WriteData {
                data: common::fixtures::sample_blockdata(0),
            },
            true,
        ),
        (PiccCommand::Halt, true),
    ];
    for (cmd, crc) in cases {
        assert_eq!(cmd.needs_crc(), crc, "{:?}", cmd);
    }
}
