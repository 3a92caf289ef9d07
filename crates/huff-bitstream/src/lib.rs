//! Bit sequences and prefix-code construction for static Huffman coding
//!
//! This crate provides the packed bit sequence the codec emits, streaming bit
//! reader/writer types, the Huffman tree builder and the code table generator.

pub mod bitreader;
pub mod bits;
pub mod bitwriter;
pub mod code_table;
pub mod tree;

pub use bitreader::BitReader;
pub use bits::{BitSequence, Bits};
pub use bitwriter::BitWriter;
pub use code_table::{generate, CodeTable};
pub use tree::{build, HuffmanNode, HuffmanTree};
