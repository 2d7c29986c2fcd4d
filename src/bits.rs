//! Low-level bit read and write primitives for byte slices.
//!
//! Bits are addressed in little-bit-endian order: bit 0 of byte 0 is the
//! lowest-order bit of that byte, and a multi-bit range contributes its
//! earliest bit to the lowest-order bit of the result. Records rely on this
//! numbering as their persisted layout.

use crate::errors::{ReadError, WriteError};

/// Reads `n` bits starting at `bit_pos` as an unsigned value (max 64 bits).
///
/// The range `[bit_pos, bit_pos + n)` may straddle byte boundaries; the value
/// is assembled from every byte the range touches. Fails with
/// [ReadError::OutOfBounds] if the range extends past the end of `data`.
pub fn read_bits_at(data: &[u8], bit_pos: usize, n: usize) -> Result<u64, ReadError> {
    if n > 64 {
        return Err(ReadError::TooManyBitsRead);
    }

    if bit_pos
        .checked_add(n)
        .map_or(true, |end| end > data.len() * 8)
    {
        return Err(ReadError::OutOfBounds);
    }

    let mut value = 0u64;
    let mut filled = 0;
    let mut byte_index = bit_pos / 8;
    let mut bit_index = bit_pos % 8;

    while filled < n {
        let take = (8 - bit_index).min(n - filled);
        let chunk = (data[byte_index] as u64 >> bit_index) & ((1u64 << take) - 1);
        value |= chunk << filled;

        filled += take;
        byte_index += 1;
        bit_index = 0;
    }

    Ok(value)
}

/// Writes the low `n` bits of `value` into `[bit_pos, bit_pos + n)`. Bits of
/// `value` above `n` are ignored; bits of `data` outside the range are
/// preserved.
pub fn write_bits_at(
    data: &mut [u8],
    bit_pos: usize,
    n: usize,
    value: u64,
) -> Result<(), WriteError> {
    if n > 64 {
        return Err(WriteError::TooManyBitsWritten);
    }

    if bit_pos
        .checked_add(n)
        .map_or(true, |end| end > data.len() * 8)
    {
        return Err(WriteError::OutOfBounds);
    }

    let mut written = 0;
    let mut byte_index = bit_pos / 8;
    let mut bit_index = bit_pos % 8;

    while written < n {
        let take = (8 - bit_index).min(n - written);
        let mask = ((1u64 << take) - 1) as u8;
        let chunk = ((value >> written) as u8) & mask;

        data[byte_index] = (data[byte_index] & !(mask << bit_index)) | (chunk << bit_index);

        written += take;
        byte_index += 1;
        bit_index = 0;
    }

    Ok(())
}

/// Sign-extends the low `bits` of `value` to a full `i64`: if bit `bits - 1`
/// is set, the result is `value - 2^bits`.
pub fn sign_extend(value: u64, bits: usize) -> i64 {
    let shift = 64 - bits;
    ((value << shift) as i64) >> shift
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_within_one_byte() {
        // 0b10110100: bit 2 = 1, bit 3 = 0, bit 4 = 1
        let data = [0b10110100];
        assert_eq!(read_bits_at(&data, 0, 8).unwrap(), 0b10110100);
        assert_eq!(read_bits_at(&data, 2, 3).unwrap(), 0b101);
        assert_eq!(read_bits_at(&data, 7, 1).unwrap(), 1);
    }

    #[test]
    fn test_read_straddles_byte_boundary() {
        // High nibble of byte 0 and low nibble of byte 1 form one 8-bit range.
        let data = [0xF0, 0x0F];
        assert_eq!(read_bits_at(&data, 4, 8).unwrap(), 0xFF);
        assert_eq!(read_bits_at(&data, 0, 4).unwrap(), 0);
        assert_eq!(read_bits_at(&data, 8, 4).unwrap(), 0xF);
    }

    #[test]
    fn test_read_full_64_bits() {
        let data = [0xFF; 9];
        assert_eq!(read_bits_at(&data, 0, 64).unwrap(), u64::MAX);
        assert_eq!(read_bits_at(&data, 5, 64).unwrap(), u64::MAX);
    }

    #[test]
    fn test_read_little_bit_endian_assembly() {
        // bits 8..24 read as a 16-bit value: byte 1 is the low byte.
        let data = [0x00, 0x34, 0x12];
        assert_eq!(read_bits_at(&data, 8, 16).unwrap(), 0x1234);
    }

    #[test]
    fn test_read_out_of_bounds() {
        let data = [0xFF];
        assert_eq!(read_bits_at(&data, 0, 9).unwrap_err(), ReadError::OutOfBounds);
        assert_eq!(read_bits_at(&data, 8, 1).unwrap_err(), ReadError::OutOfBounds);
        assert_eq!(
            read_bits_at(&data, usize::MAX, 2).unwrap_err(),
            ReadError::OutOfBounds
        );
    }

    #[test]
    fn test_read_more_than_64() {
        let data = [0xFF; 16];
        assert_eq!(
            read_bits_at(&data, 0, 65).unwrap_err(),
            ReadError::TooManyBitsRead
        );
    }

    #[test]
    fn test_write_then_read() {
        let mut data = [0u8; 4];
        write_bits_at(&mut data, 3, 11, 0x5A5).unwrap();
        assert_eq!(read_bits_at(&data, 3, 11).unwrap(), 0x5A5);
        // Surrounding bits stay zero.
        assert_eq!(read_bits_at(&data, 0, 3).unwrap(), 0);
        assert_eq!(read_bits_at(&data, 14, 10).unwrap(), 0);
    }

    #[test]
    fn test_write_preserves_neighbors() {
        let mut data = [0xFF, 0xFF];
        write_bits_at(&mut data, 4, 8, 0).unwrap();
        assert_eq!(data, [0x0F, 0xF0]);
    }

    #[test]
    fn test_write_masks_excess_bits() {
        let mut data = [0u8; 1];
        write_bits_at(&mut data, 0, 3, 0xFF).unwrap();
        assert_eq!(data, [0b0000_0111]);
    }

    #[test]
    fn test_write_out_of_bounds() {
        let mut data = [0u8; 1];
        assert_eq!(
            write_bits_at(&mut data, 0, 9, 0).unwrap_err(),
            WriteError::OutOfBounds
        );
        assert_eq!(
            write_bits_at(&mut data, 0, 65, 0).unwrap_err(),
            WriteError::TooManyBitsWritten
        );
    }

    #[test]
    fn test_sign_extend() {
        assert_eq!(sign_extend(0b100, 3), -4);
        assert_eq!(sign_extend(0b011, 3), 3);
        assert_eq!(sign_extend(0xFF, 8), -1);
        assert_eq!(sign_extend(0x80, 8), -128);
        assert_eq!(sign_extend(0x7F, 8), 127);
        assert_eq!(sign_extend(u64::MAX, 64), -1);
        assert_eq!(sign_extend(0, 64), 0);
    }
}
