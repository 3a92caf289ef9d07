//! Compression statistics

use huff_bitstream::CodeTable;
use huff_core::{FrequencyTable, Symbol};
use std::fmt;

/// Summary of how well a code table compresses the input it was built from
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionStats {
    /// Input length in symbols
    pub symbols: u64,
    pub distinct_symbols: usize,
    /// Input size at the caller-supplied width per symbol
    pub original_bits: u64,
    pub encoded_bits: u64,
    pub max_code_length: usize,
    /// Bits per symbol
    pub average_code_length: f64,
    /// Shannon entropy in bits per symbol; a lower bound on the average
    pub entropy: f64,
}

impl CompressionStats {
    pub fn new<S: Symbol>(
        frequencies: &FrequencyTable<S>,
        codes: &CodeTable<S>,
        bits_per_symbol: usize,
    ) -> Self {
        let symbols = frequencies.total();
        Self {
            symbols,
            distinct_symbols: frequencies.len(),
            original_bits: symbols * bits_per_symbol as u64,
            encoded_bits: codes.encoded_len(frequencies),
            max_code_length: codes.max_code_length(),
            average_code_length: codes.average_code_length(frequencies),
            entropy: frequencies.entropy(),
        }
    }

    /// Original size over encoded size; 0.0 when nothing was encoded
    pub fn ratio(&self) -> f64 {
        if self.encoded_bits == 0 {
            return 0.0;
        }
        self.original_bits as f64 / self.encoded_bits as f64
    }

    /// Fraction of the original size saved, in `[0, 1)` for useful codes
    pub fn space_savings(&self) -> f64 {
        if self.original_bits == 0 {
            return 0.0;
        }
        1.0 - self.encoded_bits as f64 / self.original_bits as f64
    }

    /// Average code length minus entropy (0 for a perfectly matched code)
    pub fn redundancy(&self) -> f64 {
        self.average_code_length - self.entropy
    }
}

impl fmt::Display for CompressionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "symbols: {} ({} distinct)",
            self.symbols, self.distinct_symbols
        )?;
        writeln!(
            f,
            "bits: {} -> {} (ratio {:.3}, saved {:.1}%)",
            self.original_bits,
            self.encoded_bits,
            self.ratio(),
            self.space_savings() * 100.0
        )?;
        write!(
            f,
            "code length: avg {:.3}, max {}, entropy {:.3}",
            self.average_code_length, self.max_code_length, self.entropy
        )
    }
}
