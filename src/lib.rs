//! # Files as pixel images
//!
//! Command line plumbing around the [`bitgrid`] codec: reading and writing
//! files and PNG images, naming outputs and walking folders.

pub mod cli;
