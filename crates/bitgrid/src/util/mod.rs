//! # General utilities

pub mod bit_iter;
pub(crate) mod bit_writer;
pub mod data;

pub use bit_iter::BitIter;
pub(crate) use bit_writer::BitWriter;
