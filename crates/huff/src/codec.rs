//! Codec bundling one input's tree and code table

use huff_bitstream::{BitSequence, CodeTable, HuffmanTree};
use huff_core::{analyze_with, AnalyzerOptions, FrequencyTable, HuffResult, Symbol};
use huff_decoder::{DecoderOptions, HuffmanDecoder};
use huff_encoder::{EncoderOptions, HuffmanEncoder};

use crate::stats::CompressionStats;

/// Options for every stage of the codec
#[derive(Debug, Clone, Default)]
pub struct CodecOptions {
    pub analyzer: AnalyzerOptions,
    pub encoder: EncoderOptions,
    pub decoder: DecoderOptions,
}

impl CodecOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analyzer(mut self, analyzer: AnalyzerOptions) -> Self {
        self.analyzer = analyzer;
        self
    }

    pub fn encoder(mut self, encoder: EncoderOptions) -> Self {
        self.encoder = encoder;
        self
    }

    pub fn decoder(mut self, decoder: DecoderOptions) -> Self {
        self.decoder = decoder;
        self
    }
}

/// Huffman codec for one input
///
/// Holds the frequency table, tree and code table derived from a single input.
/// All of it is immutable once built, so a codec can be shared across threads
/// by reference.
#[derive(Debug, Clone)]
pub struct HuffmanCodec<S> {
    frequencies: FrequencyTable<S>,
    tree: Option<HuffmanTree<S>>,
    codes: CodeTable<S>,
    encoder: HuffmanEncoder,
    decoder: HuffmanDecoder,
}

impl<S: Symbol> HuffmanCodec<S> {
    /// Build a codec from `input` with default options
    pub fn from_input(input: &[S]) -> Self {
        Self::with_options(input, CodecOptions::default())
    }

    pub fn with_options(input: &[S], options: CodecOptions) -> Self {
        let frequencies = analyze_with(input, &options.analyzer);
        Self::from_frequencies(frequencies, options)
    }

    /// Build a codec from an existing frequency table
    pub fn from_frequencies(frequencies: FrequencyTable<S>, options: CodecOptions) -> Self {
        let tree = HuffmanTree::build(&frequencies);
        let codes = CodeTable::from_tree(tree.as_ref());
        Self {
            frequencies,
            tree,
            codes,
            encoder: HuffmanEncoder::new(options.encoder),
            decoder: HuffmanDecoder::new(options.decoder),
        }
    }

    pub fn frequencies(&self) -> &FrequencyTable<S> {
        &self.frequencies
    }

    /// The tree, or `None` when the codec was built from empty input
    pub fn tree(&self) -> Option<&HuffmanTree<S>> {
        self.tree.as_ref()
    }

    pub fn codes(&self) -> &CodeTable<S> {
        &self.codes
    }

    pub fn encode(&self, input: &[S]) -> HuffResult<BitSequence> {
        self.encoder.encode(input, &self.codes)
    }

    /// Decode with the configured decoder (lenient unless options say strict)
    pub fn decode(&self, bits: &BitSequence) -> HuffResult<Vec<S>> {
        self.decoder.decode_bits(bits, self.tree())
    }

    /// Decode, failing on malformed input regardless of options
    pub fn try_decode(&self, bits: &BitSequence) -> HuffResult<Vec<S>> {
        huff_decoder::try_decode(bits, self.tree())
    }

    /// Compression statistics for the input this codec was built from
    ///
    /// `bits_per_symbol` is the width of one uncompressed symbol, e.g.
    /// [`huff_core::consts::BITS_PER_BYTE`].
    pub fn stats(&self, bits_per_symbol: usize) -> CompressionStats {
        CompressionStats::new(&self.frequencies, &self.codes, bits_per_symbol)
    }
}
