use log::debug;

use crate::{error::DecodeError, grid::PixelGrid, util::BitWriter};

use super::check_dimensions;

/// Read bytes from a grid produced by [`encode`](super::encode)
///
/// All trailing cleared pixels are treated as padding, so data that ends in
/// zero bits loses them, together with the incomplete byte they leave behind.
pub fn decode(grid: &PixelGrid) -> Result<Vec<u8>, DecodeError> {
    check_dimensions(grid)?;

    let end = grid.last_set().map_or(0, |index| index + 1);
    let byte_len = end / 8;
    debug!(
        "Decoding {} bytes from a {}x{} grid ({} bits trimmed)",
        byte_len,
        grid.side(),
        grid.side(),
        grid.capacity() - byte_len * 8
    );

    let bit_len = (byte_len * 8) as usize;
    let mut bw = BitWriter::with_capacity(bit_len);
    for bit in grid.bits().take(bit_len) {
        bw.write_bit(bit);
    }
    Ok(bw.done())
}

#[cfg(test)]
mod tests {
    use super::decode;
    use crate::{codec::encode, error::DecodeError, grid::PixelGrid};

    #[test]
    fn test_decode_single_byte() {
        let grid = PixelGrid::from_rows(&[
            [true, true, true],
            [true, true, true],
            [true, true, false],
        ])
        .unwrap();
        assert_eq!(decode(&grid).unwrap(), vec![0xFF]);
    }

    #[test]
    fn test_round_trip() {
        let samples: &[&[u8]] = &[
            &[0x01],
            &[0xFF],
            b"Hello, World!",
            &[0x00, 0x00, 0x00, 0x01],
            &[0x80, 0x00, 0x7F, 0x00, 0x03],
        ];
        for data in samples {
            let grid = encode(data).unwrap();
            assert_eq!(&decode(&grid).unwrap(), data);
        }

        let mut data: Vec<u8> = (0..=255).collect();
        data.extend((0..4096u32).map(|i| (i.wrapping_mul(2654435761) >> 13) as u8));
        data.push(0x01);
        assert_eq!(decode(&encode(&data).unwrap()).unwrap(), data);
    }

    #[test]
    fn test_round_trip_lengths() {
        for len in 1..600usize {
            let mut data: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
            data[len - 1] |= 0x01;
            let grid = encode(&data).unwrap();
            assert_eq!(decode(&grid).unwrap(), data, "length {}", len);
        }
    }

    #[test]
    fn test_trailing_zero_byte_is_lost() {
        assert_eq!(decode(&encode(&[0x00]).unwrap()).unwrap(), Vec::<u8>::new());
        assert_eq!(
            decode(&encode(&[0x2B, 0x00, 0x00]).unwrap()).unwrap(),
            vec![0x2B]
        );
        // `0x2A` ends in a cleared bit, so only seven bits are left
        assert_eq!(
            decode(&encode(&[0x2A, 0x00, 0x00]).unwrap()).unwrap(),
            Vec::<u8>::new()
        );
    }

    #[test]
    fn test_trailing_zero_bits_drop_the_last_byte() {
        // "AB" ends in the bit pattern `10`, cutting `0x42` short by one bit
        let grid = encode(b"AB").unwrap();
        assert_eq!(decode(&grid).unwrap(), b"A".to_vec());
    }

    #[test]
    fn test_decode_blank_grid() {
        assert_eq!(decode(&PixelGrid::new(5)).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_empty_grid() {
        assert_eq!(
            decode(&PixelGrid::new(0)),
            Err(DecodeError::DimensionMismatch {
                width: 0,
                height: 0
            })
        );
    }

    #[test]
    fn test_decode_foreign_grid() {
        // a 4x4 grid with a pixel set at index 11 yields one complete byte
        let mut grid = PixelGrid::new(4);
        grid.set(0, 1, true);
        grid.set(2, 3, true);
        assert_eq!(decode(&grid).unwrap(), vec![0b0100_0000]);
    }

    #[test]
    fn test_decode_last_pixel() {
        // the final pixel of a 4x4 grid completes the second byte
        let mut grid = PixelGrid::new(4);
        grid.set(0, 0, true);
        grid.set(3, 3, true);
        assert_eq!(decode(&grid).unwrap(), vec![0b1000_0000, 0b0000_0001]);
    }
}
