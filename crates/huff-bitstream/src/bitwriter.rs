//! Streaming bit writer

use crate::bits::BitSequence;
use huff_core::{HuffError, HuffResult};
use std::io::Write;

/// Most bits accepted by a single `write_bits` call
pub const MAX_BITS_PER_WRITE: usize = 56;

/// Writes individual bits to a byte stream, most significant bit first
///
/// Byte layout matches [`BitSequence::to_bytes`], so a stream written here can
/// be read back with [`BitSequence::from_bytes`] or [`crate::BitReader`].
pub struct BitWriter<W: Write> {
    writer: W,
    buffer: u64,
    bits_in_buffer: usize,
    bits_written: usize,
}

impl<W: Write> BitWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
            bits_written: 0,
        }
    }

    /// Write the low `num_bits` bits of `value`, high bit first
    pub fn write_bits(&mut self, value: u64, num_bits: usize) -> HuffResult<()> {
        if num_bits > MAX_BITS_PER_WRITE {
            return Err(HuffError::InvalidParameter(format!(
                "Cannot write more than {} bits at once",
                MAX_BITS_PER_WRITE
            )));
        }

        let mask = (1u64 << num_bits) - 1;
        self.buffer = (self.buffer << num_bits) | (value & mask);
        self.bits_in_buffer += num_bits;

        // Flush complete bytes
        while self.bits_in_buffer >= 8 {
            self.bits_in_buffer -= 8;
            self.writer
                .write_all(&[(self.buffer >> self.bits_in_buffer) as u8])?;
        }
        self.buffer &= (1u64 << self.bits_in_buffer) - 1;
        self.bits_written += num_bits;

        Ok(())
    }

    /// Write a single bit
    pub fn write_bit(&mut self, value: bool) -> HuffResult<()> {
        self.write_bits(value as u64, 1)
    }

    /// Write every bit of `bits` in order
    pub fn write_sequence(&mut self, bits: &BitSequence) -> HuffResult<()> {
        for bit in bits.iter() {
            self.write_bit(bit)?;
        }
        Ok(())
    }

    /// Total bits written so far, excluding flush padding
    pub fn bits_written(&self) -> usize {
        self.bits_written
    }

    /// Pad the last partial byte with zero bits and flush the underlying writer
    pub fn flush(&mut self) -> HuffResult<()> {
        if self.bits_in_buffer > 0 {
            let byte = (self.buffer << (8 - self.bits_in_buffer)) as u8;
            self.writer.write_all(&[byte])?;
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for BitWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
