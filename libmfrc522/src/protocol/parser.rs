// mfrc522-rs/libmfrc522/src/protocol/parser.rs

use crate::protocol::ResponseFrame;
use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Ensure the frame carries exactly `len` bytes.
pub fn ensure_exact_len(frame: &ResponseFrame, len: usize) -> Result<()> {
    if frame.len() != len {
        return Err(Error::InvalidLength {
            expected: len,
            actual: frame.len(),
        });
    }
    Ok(())
}

/// Copy exactly `N` bytes out of `data` starting at `idx`.
pub fn array_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u8; N]> {
    ensure_len(data, idx + N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(&data[idx..idx + N]);
    Ok(out)
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}
