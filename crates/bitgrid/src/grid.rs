//! # Square monochrome rasters

use std::fmt;

#[cfg(feature = "image")]
use image::{GrayImage, Luma};

use crate::{
    error::DecodeError,
    util::{data::BIT_STRING, BitIter, BitWriter},
};

#[cfg(feature = "image")]
use crate::util::data::{BIT_PROJECTION, LUMA_THRESHOLD};

/// A square grid of 1-bit pixels
///
/// Every row is stored in `bytes_per_row` bytes, where the most significant
/// bit of the first byte is column 0. Bits past the last column of a row are
/// always zero.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelGrid {
    side: u32,
    bytes_per_row: u32,
    buffer: Vec<u8>,
}

impl PixelGrid {
    /// Create a new grid with all pixels cleared
    pub fn new(side: u32) -> Self {
        let bytes_per_row = Self::row_bytes(side);
        PixelGrid {
            side,
            bytes_per_row,
            buffer: vec![0; (bytes_per_row as usize) * (side as usize)],
        }
    }

    fn row_bytes(side: u32) -> u32 {
        (side + 7) / 8
    }

    /// Fill a grid of the given side row-major from `bits`
    ///
    /// Missing bits at the end are zero, excess bits are ignored.
    pub fn from_bits<I: IntoIterator<Item = bool>>(side: u32, bits: I) -> Self {
        let bytes_per_row = Self::row_bytes(side);
        let width = side as usize;
        let mut bits = bits.into_iter().chain(std::iter::repeat(false));
        let mut bw = BitWriter::with_capacity(bytes_per_row as usize * 8 * width);
        for _ in 0..side {
            for bit in bits.by_ref().take(width) {
                bw.write_bit(bit);
            }
            bw.flush();
        }
        PixelGrid {
            side,
            bytes_per_row,
            buffer: bw.done(),
        }
    }

    /// Build a grid from a matrix of rows
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, DecodeError> {
        let rows: Vec<&[bool]> = rows.iter().map(AsRef::as_ref).collect();
        let height = rows.len();
        let mismatch = |width: usize| DecodeError::DimensionMismatch {
            width: width as u64,
            height: height as u64,
        };
        if let Some(row) = rows.iter().find(|row| row.len() != height) {
            return Err(mismatch(row.len()));
        }
        let side = u32::try_from(height).map_err(|_| mismatch(height))?;
        let bits = rows.iter().flat_map(|row| row.iter().copied());
        Ok(Self::from_bits(side, bits))
    }

    /// The number of pixels per row and column
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Return the number of bytes per row
    pub fn bytes_per_row(&self) -> u32 {
        self.bytes_per_row
    }

    /// The number of pixels in the grid
    pub fn capacity(&self) -> u64 {
        u64::from(self.side) * u64::from(self.side)
    }

    /// The packed rows
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Check whether the pixel at a given coordinate is set
    pub fn get(&self, row: u32, col: u32) -> bool {
        if row >= self.side || col >= self.side {
            return false;
        }
        let (byte, shift) = self.locate(row, col);
        (self.buffer[byte] >> shift) & 1 > 0
    }

    /// Set or clear the pixel at a given coordinate
    ///
    /// # Panics
    ///
    /// If the coordinate is outside of the grid
    pub fn set(&mut self, row: u32, col: u32, bit: bool) {
        assert!(
            row < self.side && col < self.side,
            "({}, {}) is outside of a {}x{} grid",
            row,
            col,
            self.side,
            self.side
        );
        let (byte, shift) = self.locate(row, col);
        if bit {
            self.buffer[byte] |= 1 << shift;
        } else {
            self.buffer[byte] &= !(1 << shift);
        }
    }

    fn locate(&self, row: u32, col: u32) -> (usize, u32) {
        let byte = row as usize * self.bytes_per_row as usize + (col / 8) as usize;
        (byte, 7 - col % 8)
    }

    /// Iterate over all pixels, row by row
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        let width = self.side as usize;
        let chunk_size = (self.bytes_per_row as usize).max(1);
        self.buffer
            .chunks_exact(chunk_size)
            .flat_map(move |row| BitIter::new(row).take(width))
    }

    /// Count the pixels that are set
    pub fn count_ones(&self) -> u64 {
        // row padding is always clear
        self.buffer.iter().map(|b| u64::from(b.count_ones())).sum()
    }

    /// The row-major index of the last set pixel, if any
    ///
    /// Scans the packed rows backwards, so trailing blank rows are skipped a
    /// byte at a time.
    pub fn last_set(&self) -> Option<u64> {
        // row padding is always clear, so the last non-zero byte holds the pixel
        let pos = self.buffer.iter().rposition(|&b| b != 0)?;
        let bytes_per_row = self.bytes_per_row as usize;
        let row = (pos / bytes_per_row) as u64;
        let shift = u64::from(self.buffer[pos].trailing_zeros());
        let col = ((pos % bytes_per_row) * 8) as u64 + 7 - shift;
        Some(row * u64::from(self.side) + col)
    }

    #[cfg(feature = "image")]
    #[cfg_attr(docsrs, doc(cfg(feature = "image")))]
    /// Read a grid from a `GrayImage` from the `image` crate
    ///
    /// Samples at or above the midpoint are set pixels.
    pub fn from_image(image: &GrayImage) -> Result<Self, DecodeError> {
        let (width, height) = image.dimensions();
        if width != height || width == 0 {
            return Err(DecodeError::DimensionMismatch {
                width: width.into(),
                height: height.into(),
            });
        }
        let bits = image.pixels().map(|Luma([v])| *v >= LUMA_THRESHOLD);
        Ok(Self::from_bits(width, bits))
    }

    #[cfg(feature = "image")]
    #[cfg_attr(docsrs, doc(cfg(feature = "image")))]
    /// Turn the grid into a `GrayImage` from the `image` crate
    ///
    /// Set pixels are white, cleared pixels are black.
    pub fn to_image(&self) -> GrayImage {
        let width = self.side as usize;
        let mut buffer = Vec::with_capacity(width * width);
        if width > 0 {
            for row in self.buffer.chunks_exact(self.bytes_per_row as usize) {
                let start = buffer.len();
                for byte in row.iter().map(|b| *b as usize) {
                    buffer.extend_from_slice(&BIT_PROJECTION[byte]);
                }
                buffer.truncate(start + width);
            }
        }
        GrayImage::from_raw(self.side, self.side, buffer)
            .expect("buffer holds exactly side * side samples")
    }
}

impl fmt::Debug for PixelGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f
                .debug_struct("PixelGrid")
                .field("side", &self.side)
                .field("ones", &self.count_ones())
                .finish();
        }
        let width = self.side as usize;
        writeln!(f, "PixelGrid[{}x{}]", width, width)?;
        if width == 0 {
            return Ok(());
        }
        for row in self.buffer.chunks_exact(self.bytes_per_row as usize) {
            let line: String = row.iter().map(|&b| BIT_STRING[b as usize]).collect();
            writeln!(f, "  {}", &line[..width])?;
        }
        Ok(())
    }
}
