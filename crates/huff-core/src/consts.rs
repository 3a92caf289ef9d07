//! Constants used throughout the Huffman codec

/// Inputs at least this long are analyzed in parallel shards
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 20; // 1 Mi symbols

/// Default shard length for parallel frequency analysis
pub const DEFAULT_SHARD_LEN: usize = 1 << 16;

/// Smallest shard the analyzer will hand to a worker
pub const MIN_SHARD_LEN: usize = 1024;

/// Code assigned to the lone symbol of a single-leaf tree
pub const SINGLE_SYMBOL_CODE: bool = false;

/// Width of an uncompressed byte symbol, used for compression ratios
pub const BITS_PER_BYTE: usize = 8;
