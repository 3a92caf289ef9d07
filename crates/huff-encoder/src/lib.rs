//! Huffman encoder implementation

use huff_bitstream::{BitSequence, BitWriter, CodeTable};
use huff_core::*;
use std::io::Write;

/// What to do with an input symbol that has no code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingSymbolPolicy {
    /// Stop and return [`HuffError::UnknownSymbol`]
    #[default]
    Fail,
    /// Drop the symbol and log a warning; the round trip will not reproduce it
    Skip,
}

/// Encoder options
#[derive(Debug, Clone, Default)]
pub struct EncoderOptions {
    /// Handling of symbols absent from the code table
    pub missing_symbol: MissingSymbolPolicy,
}

impl EncoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn missing_symbol(mut self, policy: MissingSymbolPolicy) -> Self {
        self.missing_symbol = policy;
        self
    }
}

/// Huffman encoder
#[derive(Debug, Clone, Default)]
pub struct HuffmanEncoder {
    options: EncoderOptions,
}

impl HuffmanEncoder {
    pub fn new(options: EncoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Concatenate the code of every input symbol, in input order
    pub fn encode<S: Symbol>(&self, input: &[S], codes: &CodeTable<S>) -> HuffResult<BitSequence> {
        let mut output = BitSequence::with_capacity(input.len());
        self.for_each_code(input, codes, |code| {
            output.extend_from(code);
            Ok(())
        })?;
        Ok(output)
    }

    /// Encode straight into a byte sink, returning the number of bits written
    ///
    /// The final byte is zero-padded. The returned bit count is the only
    /// framing information; the caller must keep it to decode.
    pub fn encode_to_writer<S: Symbol, W: Write>(
        &self,
        input: &[S],
        codes: &CodeTable<S>,
        writer: W,
    ) -> HuffResult<usize> {
        let mut bit_writer = BitWriter::new(writer);
        self.for_each_code(input, codes, |code| bit_writer.write_sequence(code))?;
        bit_writer.flush()?;
        Ok(bit_writer.bits_written())
    }

    fn for_each_code<S, F>(&self, input: &[S], codes: &CodeTable<S>, mut emit: F) -> HuffResult<()>
    where
        S: Symbol,
        F: FnMut(&BitSequence) -> HuffResult<()>,
    {
        for (position, symbol) in input.iter().enumerate() {
            match codes.get(symbol) {
                Some(code) => emit(code)?,
                None => match self.options.missing_symbol {
                    MissingSymbolPolicy::Fail => {
                        return Err(HuffError::UnknownSymbol(format!(
                            "{:?} at position {}",
                            symbol, position
                        )));
                    }
                    MissingSymbolPolicy::Skip => {
                        tracing::warn!(?symbol, position, "skipping symbol without a code");
                    }
                },
            }
        }
        Ok(())
    }
}

/// Encode `input` with `codes`, failing on any symbol without a code
pub fn encode<S: Symbol>(input: &[S], codes: &CodeTable<S>) -> HuffResult<BitSequence> {
    HuffmanEncoder::default().encode(input, codes)
}
