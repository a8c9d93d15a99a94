//! # MSB-first bit iteration
//!
//! This is the *bit stream* view of a byte sequence: every byte expands to
//! eight bits, the most significant one first.

use std::{
    iter::{Copied, FlatMap},
    slice::Iter,
};

/// Iterator over the bits in a byte
pub struct ByteBits {
    size: u8,
    bits: u8,
}

impl ByteBits {
    /// Create a new bit iterator from a byte
    pub fn new(bits: u8) -> Self {
        Self {
            size: u8::BITS as u8,
            bits,
        }
    }
}

impl Iterator for ByteBits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.size > 0 {
            self.size -= 1;
            let (bits, carry) = self.bits.overflowing_mul(2);
            self.bits = bits;
            Some(carry)
        } else {
            None
        }
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.size.into()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.size.into();
        (size, Some(size))
    }
}

impl ExactSizeIterator for ByteBits {}

type ByteIter<'a> = Copied<Iter<'a, u8>>;

/// A bit iterator over a byte slice
pub struct BitIter<'a> {
    remaining: usize,
    inner: FlatMap<ByteIter<'a>, ByteBits, fn(u8) -> ByteBits>,
}

impl<'a> BitIter<'a> {
    /// Create a new bit iter from a byte slice
    pub fn new(bytes: &'a [u8]) -> BitIter<'a> {
        Self {
            remaining: bytes.len() * 8,
            inner: bytes.iter().copied().flat_map(ByteBits::new),
        }
    }
}

impl Iterator for BitIter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.inner.next()?;
        self.remaining -= 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.remaining
    }
}

impl ExactSizeIterator for BitIter<'_> {}
