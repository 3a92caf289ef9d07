//! Streaming bit reader

use huff_core::{HuffError, HuffResult};
use std::io::Read;

/// Most bits returned by a single `read_bits` call
pub const MAX_BITS_PER_READ: usize = 56;

/// Reads individual bits from a byte stream, most significant bit first
pub struct BitReader<R: Read> {
    reader: R,
    buffer: u64,
    bits_in_buffer: usize,
}

impl<R: Read> BitReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
        }
    }

    /// Read `num_bits` bits, returned in the low bits of the result
    pub fn read_bits(&mut self, num_bits: usize) -> HuffResult<u64> {
        if num_bits > MAX_BITS_PER_READ {
            return Err(HuffError::InvalidParameter(format!(
                "Cannot read more than {} bits at once",
                MAX_BITS_PER_READ
            )));
        }

        // Ensure we have enough bits in the buffer
        while self.bits_in_buffer < num_bits {
            let mut byte = [0u8; 1];
            if self.reader.read(&mut byte)? == 0 {
                return Err(HuffError::UnexpectedEndOfStream);
            }
            self.buffer = (self.buffer << 8) | byte[0] as u64;
            self.bits_in_buffer += 8;
        }

        self.bits_in_buffer -= num_bits;
        let result = (self.buffer >> self.bits_in_buffer) & ((1u64 << num_bits) - 1);
        self.buffer &= (1u64 << self.bits_in_buffer) - 1;

        Ok(result)
    }

    /// Read a single bit
    pub fn read_bit(&mut self) -> HuffResult<bool> {
        self.read_bits(1).map(|b| b != 0)
    }

    /// Discard the padding bits of the current byte
    pub fn align_to_byte(&mut self) {
        self.bits_in_buffer -= self.bits_in_buffer % 8;
        self.buffer &= (1u64 << self.bits_in_buffer) - 1;
    }
}
