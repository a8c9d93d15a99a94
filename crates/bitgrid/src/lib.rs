#![warn(missing_docs)]
//! # Files as monochrome images
//!
//! This crate turns an arbitrary byte sequence into a square grid of 1-bit
//! pixels and back. Every bit of the input becomes one pixel, most
//! significant bit first, placed row by row. The smallest square that holds
//! all bits is used and the remaining pixels are cleared.
//!
//! ```
//! use bitgrid::codec::{decode, encode};
//!
//! let grid = encode(&[0xFF]).unwrap();
//! assert_eq!(grid.side(), 3);
//! assert_eq!(decode(&grid).unwrap(), vec![0xFF]);
//! ```
//!
//! The plain layout cannot tell trailing zero bits of the data apart from
//! the padding, see [`codec::Layout`] for the alternative.

pub mod codec;
pub mod error;
pub mod grid;
pub mod util;

pub use codec::{decode, encode, Layout};
pub use error::{DecodeError, EncodeError};
pub use grid::PixelGrid;
