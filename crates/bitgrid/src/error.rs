//! Errors for packing bytes into grids and back
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Error when turning bytes into a pixel grid
pub enum EncodeError {
    /// The raw layout cannot represent zero bytes
    #[error("Cannot encode an empty input")]
    EmptyInput,
    /// The data needs a grid wider than `u32::MAX`
    #[error("Input of {bits} bits does not fit into a single grid")]
    TooLarge {
        /// Number of bits that would have been stored
        bits: u64,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Error when reading bytes from a pixel grid
pub enum DecodeError {
    /// The raster is not a square with at least one pixel
    #[error("Expected a non-empty square grid, found {width}x{height}")]
    DimensionMismatch {
        /// Width in pixels
        width: u64,
        /// Height in pixels
        height: u64,
    },
    /// The length header claims more bits than the grid has
    #[error("Length header requires {expected_bits} bits, but the grid only holds {capacity}")]
    Truncated {
        /// Number of bits needed for header and data
        expected_bits: u64,
        /// Number of pixels in the grid
        capacity: u64,
    },
}
