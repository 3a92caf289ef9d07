//! Error types for Huffman coding operations

use thiserror::Error;

/// Result type for Huffman coding operations
pub type HuffResult<T> = Result<T, HuffError>;

/// Errors that can occur during Huffman encoding/decoding
#[derive(Error, Debug)]
pub enum HuffError {
    #[error("Symbol not present in code table: {0}")]
    UnknownSymbol(String),

    #[error("Invalid bit string: unexpected {found:?} at position {position}")]
    InvalidBitString { position: usize, found: char },

    #[error("Malformed bitstream at bit {position} after {decoded} symbols")]
    MalformedBitstream { position: usize, decoded: usize },

    #[error("Unexpected end of stream")]
    UnexpectedEndOfStream,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
