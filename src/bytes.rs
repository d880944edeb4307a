//! Checked integer codecs over byte slices.
//!
//! Centralizes slice-boundary handling so call sites only state the width and
//! byte order they expect. Reads consume the first N bytes of the slice,
//! writes fill the first N bytes; a short slice is the only failure mode.

use crate::endian::{from_endian, to_endian, Endian};
use crate::errors::BufferError;

/// Length in bytes of an encoded `u16`.
pub const U16_LEN: usize = 2;
/// Length in bytes of an encoded `u32`.
pub const U32_LEN: usize = 4;
/// Length in bytes of an encoded `u64`.
pub const U64_LEN: usize = 8;

fn check(len: usize, expected: usize) -> Result<(), BufferError> {
    if len < expected {
        return Err(BufferError::UnexpectedEnd {
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Reads a `u16` stored in the given byte order from the start of `buf`.
///
/// # Example
///
/// ```
/// use byteswap::{bytes, Endian};
///
/// let buf = [0x12, 0x34, 0xFF];
/// assert_eq!(bytes::read_u16(&buf, Endian::Big).unwrap(), 0x1234);
/// assert_eq!(bytes::read_u16(&buf, Endian::Little).unwrap(), 0x3412);
/// ```
pub fn read_u16(buf: &[u8], endian: Endian) -> Result<u16, BufferError> {
    check(buf.len(), U16_LEN)?;
    let raw = u16::from_ne_bytes([buf[0], buf[1]]);
    Ok(from_endian(raw, endian))
}

/// Reads a `u32` stored in the given byte order from the start of `buf`.
pub fn read_u32(buf: &[u8], endian: Endian) -> Result<u32, BufferError> {
    check(buf.len(), U32_LEN)?;
    let raw = u32::from_ne_bytes([buf[0], buf[1], buf[2], buf[3]]);
    Ok(from_endian(raw, endian))
}

/// Reads a `u64` stored in the given byte order from the start of `buf`.
pub fn read_u64(buf: &[u8], endian: Endian) -> Result<u64, BufferError> {
    check(buf.len(), U64_LEN)?;
    let raw = u64::from_ne_bytes([
        buf[0], buf[1], buf[2], buf[3], buf[4], buf[5], buf[6], buf[7],
    ]);
    Ok(from_endian(raw, endian))
}

/// Writes `value` in the given byte order into the start of `buf`.
pub fn write_u16(buf: &mut [u8], value: u16, endian: Endian) -> Result<(), BufferError> {
    check(buf.len(), U16_LEN)?;
    buf[..U16_LEN].copy_from_slice(&to_endian(value, endian).to_ne_bytes());
    Ok(())
}

/// Writes `value` in the given byte order into the start of `buf`.
///
/// # Example
///
/// ```
/// use byteswap::{bytes, Endian};
///
/// let mut buf = [0u8; 4];
/// bytes::write_u32(&mut buf, 0x12345678, Endian::Big).unwrap();
/// assert_eq!(buf, [0x12, 0x34, 0x56, 0x78]);
/// ```
pub fn write_u32(buf: &mut [u8], value: u32, endian: Endian) -> Result<(), BufferError> {
    check(buf.len(), U32_LEN)?;
    buf[..U32_LEN].copy_from_slice(&to_endian(value, endian).to_ne_bytes());
    Ok(())
}

/// Writes `value` in the given byte order into the start of `buf`.
pub fn write_u64(buf: &mut [u8], value: u64, endian: Endian) -> Result<(), BufferError> {
    check(buf.len(), U64_LEN)?;
    buf[..U64_LEN].copy_from_slice(&to_endian(value, endian).to_ne_bytes());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_endian_layout() {
        let mut buf = [0u8; 8];
        write_u64(&mut buf, 0x0123_4567_89AB_CDEF, Endian::Big).unwrap();
        assert_eq!(buf, [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]);
        assert_eq!(read_u64(&buf, Endian::Big).unwrap(), 0x0123_4567_89AB_CDEF);
    }

    #[test]
    fn little_endian_layout() {
        let mut buf = [0u8; 4];
        write_u32(&mut buf, 0x12345678, Endian::Little).unwrap();
        assert_eq!(buf, [0x78, 0x56, 0x34, 0x12]);
        assert_eq!(read_u32(&buf, Endian::Little).unwrap(), 0x12345678);
    }

    #[test]
    fn opposite_order_reads_swapped() {
        let mut buf = [0u8; 2];
        write_u16(&mut buf, 0x1234, Endian::Big).unwrap();
        assert_eq!(read_u16(&buf, Endian::Little).unwrap(), 0x3412);
    }

    #[test]
    fn reads_ignore_trailing_bytes() {
        let buf = [0x12, 0x34, 0x56, 0x78, 0x9A];
        assert_eq!(read_u32(&buf, Endian::Big).unwrap(), 0x12345678);
    }

    #[test]
    fn short_buffer_is_reported() {
        let buf = [0u8; 3];
        let err = read_u32(&buf, Endian::Big).unwrap_err();
        assert!(matches!(
            err,
            BufferError::UnexpectedEnd {
                expected: 4,
                actual: 3
            }
        ));
        assert_eq!(err.to_string(), "buffer too short: expected 4 bytes, found 3");

        let mut buf = [0u8; 7];
        assert!(matches!(
            write_u64(&mut buf, 0, Endian::Little),
            Err(BufferError::UnexpectedEnd {
                expected: 8,
                actual: 7
            })
        ));
    }
}
