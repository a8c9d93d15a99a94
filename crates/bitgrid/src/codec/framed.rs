use log::debug;

use crate::{
    error::{DecodeError, EncodeError},
    grid::PixelGrid,
    util::{BitIter, BitWriter},
};

use super::{check_dimensions, side_for_bits};

/// Number of bits in the length header of the framed layout
pub const HEADER_BITS: u64 = u64::BITS as u64;

/// Pack `bytes` into a grid, preceded by their length
///
/// The first 64 pixels hold the byte count as a big-endian integer. Unlike
/// [`encode`](super::encode), this accepts an empty input.
pub fn encode_framed(bytes: &[u8]) -> Result<PixelGrid, EncodeError> {
    let len = bytes.len() as u64;
    let bit_count = len
        .checked_mul(8)
        .and_then(|bits| bits.checked_add(HEADER_BITS))
        .ok_or(EncodeError::TooLarge { bits: u64::MAX })?;
    let side = side_for_bits(bit_count)?;
    debug!(
        "Encoding {} bytes with length header into a {}x{} grid",
        len, side, side
    );
    let header = len.to_be_bytes();
    let bits = BitIter::new(&header).chain(BitIter::new(bytes));
    Ok(PixelGrid::from_bits(side, bits))
}

/// Read bytes from a grid produced by [`encode_framed`]
pub fn decode_framed(grid: &PixelGrid) -> Result<Vec<u8>, DecodeError> {
    check_dimensions(grid)?;
    let capacity = grid.capacity();
    if capacity < HEADER_BITS {
        return Err(DecodeError::Truncated {
            expected_bits: HEADER_BITS,
            capacity,
        });
    }

    let mut bits = grid.bits();
    let len = bits
        .by_ref()
        .take(HEADER_BITS as usize)
        .fold(0u64, |acc, bit| (acc << 1) | u64::from(bit));
    let expected_bits = len
        .checked_mul(8)
        .and_then(|bits| bits.checked_add(HEADER_BITS))
        .unwrap_or(u64::MAX);
    if expected_bits > capacity {
        return Err(DecodeError::Truncated {
            expected_bits,
            capacity,
        });
    }
    debug!(
        "Decoding {} bytes from a framed {}x{} grid",
        len,
        grid.side(),
        grid.side()
    );

    // fits, because it is bounded by the grid capacity
    let data_bits = (len * 8) as usize;
    let mut bw = BitWriter::with_capacity(data_bits);
    for bit in bits.take(data_bits) {
        bw.write_bit(bit);
    }
    Ok(bw.done())
}
