/// A bitwise writer, filling bytes from the most significant bit down
#[derive(Debug)]
pub struct BitWriter {
    buffer: Vec<u8>,
    curr: u8,
    filled: u8,
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BitWriter {
    /// Creates a new instance
    pub fn new() -> Self {
        Self {
            buffer: vec![],
            curr: 0,
            filled: 0,
        }
    }

    /// Creates a new instance with the given capacity of bits
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity / 8 + (capacity % 8).min(1)),
            curr: 0,
            filled: 0,
        }
    }

    /// Append a single bit
    pub fn write_bit(&mut self, bit: bool) {
        self.curr = (self.curr << 1) | u8::from(bit);
        self.filled += 1;
        if self.filled == 8 {
            self.buffer.push(self.curr);
            self.curr = 0;
            self.filled = 0;
        }
    }

    /// Pad the current byte with zeros, if it was started
    pub fn flush(&mut self) {
        if self.filled > 0 {
            self.buffer.push(self.curr << (8 - self.filled));
            self.curr = 0;
            self.filled = 0;
        }
    }

    /// Flush and return the buffer
    pub fn done(mut self) -> Vec<u8> {
        self.flush();
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    fn write_bits(bit_writer: &mut super::BitWriter, val: u64, count: usize) {
        for shift in (0..count).rev() {
            bit_writer.write_bit((val >> shift) & 1 == 1);
        }
    }

    #[test]
    fn test_bit_writer() {
        let mut bit_writer = super::BitWriter::new();
        write_bits(&mut bit_writer, 0b111, 3);
        write_bits(&mut bit_writer, 0, 4);
        write_bits(&mut bit_writer, 0b11, 2);
        write_bits(&mut bit_writer, 0, 7);
        write_bits(&mut bit_writer, 0b10101, 5);
        bit_writer.flush();
        let vec = bit_writer.done();
        assert_eq!(vec![0b11100001, 0b10000000, 0b10101000], vec);
    }

    #[test]
    fn test_write_bit() {
        let mut bit_writer = super::BitWriter::with_capacity(10);
        for bit in [true, false, false, false, false, false, true, false, true, true] {
            bit_writer.write_bit(bit);
        }
        assert_eq!(vec![0x82, 0b1100_0000], bit_writer.done());
    }

    #[test]
    fn test_flush_aligned() {
        let mut bit_writer = super::BitWriter::new();
        write_bits(&mut bit_writer, 0xA5, 8);
        bit_writer.flush();
        bit_writer.flush();
        assert_eq!(vec![0xA5], bit_writer.done());
    }
}
