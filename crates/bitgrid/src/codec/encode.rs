use log::debug;

use crate::{error::EncodeError, grid::PixelGrid, util::BitIter};

/// Integer square root, rounded down
fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut x = n / 2 + 1;
    let mut y = (x + n / x) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

/// The side of the smallest square with at least `bit_count` pixels
///
/// This is `ceil(sqrt(bit_count))`, and `0` for no bits at all.
pub fn side_for_bits(bit_count: u64) -> Result<u32, EncodeError> {
    let root = isqrt(bit_count);
    let side = if root * root < bit_count { root + 1 } else { root };
    u32::try_from(side).map_err(|_| EncodeError::TooLarge { bits: bit_count })
}

/// Pack `bytes` into a square grid, one pixel per bit
///
/// Bits are taken most significant first and placed row by row. Pixels after
/// the last data bit are cleared.
pub fn encode(bytes: &[u8]) -> Result<PixelGrid, EncodeError> {
    if bytes.is_empty() {
        return Err(EncodeError::EmptyInput);
    }
    let bit_count = bytes.len() as u64 * 8;
    let side = side_for_bits(bit_count)?;
    debug!(
        "Encoding {} bytes into a {}x{} grid ({} padding bits)",
        bytes.len(),
        side,
        side,
        u64::from(side) * u64::from(side) - bit_count
    );
    Ok(PixelGrid::from_bits(side, BitIter::new(bytes)))
}
