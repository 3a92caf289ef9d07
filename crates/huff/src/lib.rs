//! # huff - static Huffman coding
//!
//! This crate provides a high-level API over the Huffman codec pipeline:
//! frequency analysis, tree construction, code generation, encoding and
//! decoding.
//!
//! ## Quick Start
//!
//! ### Step by step
//!
//! ```
//! use huff::{analyze, build, decode, encode, generate};
//!
//! let text: Vec<char> = "aaabbc".chars().collect();
//!
//! let frequencies = analyze(&text);
//! let tree = build(&frequencies);
//! let codes = generate(tree.as_ref());
//!
//! let bits = encode(&text, &codes).unwrap();
//! assert_eq!(bits.to_string(), "000111110");
//! assert_eq!(decode(&bits, tree.as_ref()), text);
//! ```
//!
//! ### Codec
//!
//! ```
//! use huff::HuffmanCodec;
//!
//! let input = b"she sells sea shells";
//! let codec = HuffmanCodec::from_input(input);
//!
//! let bits = codec.encode(input).unwrap();
//! assert_eq!(codec.decode(&bits).unwrap(), input);
//! println!("{}", codec.stats(8));
//! ```
//!
//! ## Architecture
//!
//! - `huff-core`: symbols, frequency analysis, errors
//! - `huff-bitstream`: bit sequences, tree builder, code tables
//! - `huff-encoder` / `huff-decoder`: the two directions of the codec
//!
//! The tree is never serialized; the process that encodes also decodes.

pub mod codec;
pub mod log;
pub mod stats;

// Re-export core types
pub use huff_core::{
    analyze, analyze_with, consts, AnalyzerOptions, FrequencyTable, HuffError, HuffResult,
    Symbol,
};

// Re-export bitstream types
pub use huff_bitstream::{build, generate, BitSequence, CodeTable, HuffmanNode, HuffmanTree};

// Re-export decoder
pub use huff_decoder::{decode, try_decode, DecoderOptions, HuffmanDecoder};

// Re-export encoder
pub use huff_encoder::{encode, EncoderOptions, HuffmanEncoder, MissingSymbolPolicy};

pub use codec::{CodecOptions, HuffmanCodec};
pub use stats::CompressionStats;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_pipeline_functions() {
        let input = b"aaabbc";
        let frequencies = analyze(input.as_slice());
        let tree = build(&frequencies);
        let codes = generate(tree.as_ref());

        let bits = encode(input, &codes).unwrap();
        assert_eq!(decode(&bits, tree.as_ref()), input);
    }
}
