#[path = "../common/mod.rs"]
mod common;

use libmfrc522::protocol::{bcc, crc_a, crc_a_bytes};

#[test]
fn crc_a_reference_frames() {
    assert_eq!(crc_a_bytes(&[0x93, 0x70, 0x04, 0x11, 0x22, 0x33, 0x04]), [0xFB, 0x47]);
    assert_eq!(crc_a_bytes(&[0x30, 0x04]), [0x26, 0xEE]);
    assert_eq!(crc_a_bytes(&[0x50, 0x00]), [0x57, 0xCD]);
    assert_eq!(crc_a(&[0x50, 0x00]), 0xCD57);
}

#[test]
fn crc_of_empty_input_is_preset() {
    assert_eq!(crc_a(&[]), 0x6363);
}

#[test]
fn bcc_of_sample_uid() {
    assert_eq!(bcc(&common::fixtures::sample_uid_bytes()), 0x04);
    assert_eq!(common::fixtures::sample_uid().bcc(), 0x04);
    assert_eq!(bcc(&[0xDE, 0xAD, 0xBE, 0xEF]), 0x22);
}

#[test]
fn frame_with_crc_checks_to_zero_residue() {
    // appending the CRC makes the CRC of the whole frame a fixed value
    let frame = common::fixtures::select_frame();
    assert_eq!(crc_a(&frame), 0x0000);
}
