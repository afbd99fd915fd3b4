// mfrc522-rs/libmfrc522/src/protocol/checksum.rs

/// CRC_A preset mandated by ISO/IEC 14443-3
pub const CRC_A_PRESET: u16 = 0x6363;

/// Compute CRC_A (ISO/IEC 14443-3 annex B) in software.
///
/// The driver always uses the chip's coprocessor; this is the reference
/// the simulator and the tests check it against.
pub fn crc_a(data: &[u8]) -> u16 {
    data.iter().fold(CRC_A_PRESET, |crc, &byte| {
        let mut b = byte ^ (crc & 0x00FF) as u8;
        b ^= b << 4;
        let b = b as u16;
        (crc >> 8) ^ (b << 8) ^ (b << 3) ^ (b >> 4)
    })
}

/// CRC_A as transmitted: low byte first.
pub fn crc_a_bytes(data: &[u8]) -> [u8; 2] {
    crc_a(data).to_le_bytes()
}

/// Block check character: XOR of all bytes.
pub fn bcc(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc ^ b)
}
