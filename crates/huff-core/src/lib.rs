//! Core types and utilities for static Huffman coding
//!
//! This crate provides the fundamental data structures shared by every stage of
//! the codec: the symbol abstraction, frequency analysis, and error types.

pub mod consts;
pub mod error;
pub mod frequency;
pub mod symbol;

pub use error::{HuffError, HuffResult};
pub use frequency::{analyze, analyze_with, AnalyzerOptions, FrequencyTable};
pub use symbol::Symbol;
