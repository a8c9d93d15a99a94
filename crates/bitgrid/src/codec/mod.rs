//! # Bytes to pixels and back
//!
//! The raw layout stores the bit stream of the input directly, which makes
//! trailing zero bits indistinguishable from padding. The framed layout
//! puts a length header in front of the data to remove that ambiguity.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    error::{DecodeError, EncodeError},
    grid::PixelGrid,
};

mod decode;
mod encode;
mod framed;

pub use decode::decode;
pub use encode::{encode, side_for_bits};
pub use framed::{decode_framed, encode_framed, HEADER_BITS};

/// How the bytes are arranged in the grid
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Layout {
    /// Data bits only, trailing zero bits are lost on decode
    #[default]
    Raw,
    /// A 64-bit byte count followed by the data bits
    Framed,
}

impl Layout {
    /// Pack `bytes` into a grid
    pub fn encode(self, bytes: &[u8]) -> Result<PixelGrid, EncodeError> {
        match self {
            Self::Raw => encode(bytes),
            Self::Framed => encode_framed(bytes),
        }
    }

    /// Read the bytes from a grid
    pub fn decode(self, grid: &PixelGrid) -> Result<Vec<u8>, DecodeError> {
        match self {
            Self::Raw => decode(grid),
            Self::Framed => decode_framed(grid),
        }
    }
}

#[derive(Debug, Error)]
#[error("Use one of `raw` or `framed`")]
/// Failed to parse a layout name
pub struct LayoutError {}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(val: &str) -> Result<Self, Self::Err> {
        match val {
            "raw" => Ok(Self::Raw),
            "framed" => Ok(Self::Framed),
            _ => Err(LayoutError {}),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => f.write_str("raw"),
            Self::Framed => f.write_str("framed"),
        }
    }
}

fn check_dimensions(grid: &PixelGrid) -> Result<(), DecodeError> {
    if grid.side() == 0 {
        return Err(DecodeError::DimensionMismatch {
            width: 0,
            height: 0,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Layout;

    #[test]
    fn test_layout_names() {
        assert_eq!("raw".parse::<Layout>().unwrap(), Layout::Raw);
        assert_eq!("framed".parse::<Layout>().unwrap(), Layout::Framed);
        assert!("png".parse::<Layout>().is_err());
        assert_eq!(Layout::Framed.to_string(), "framed");
        assert_eq!(Layout::default(), Layout::Raw);
    }

    #[test]
    fn test_layout_dispatch() {
        let data = [0x11, 0x00];
        let raw = Layout::Raw.encode(&data).unwrap();
        assert_eq!(Layout::Raw.decode(&raw).unwrap(), vec![0x11]);
        let framed = Layout::Framed.encode(&data).unwrap();
        assert_eq!(Layout::Framed.decode(&framed).unwrap(), data.to_vec());
    }
}
