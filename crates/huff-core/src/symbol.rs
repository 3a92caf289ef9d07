//! Symbol abstraction for the input alphabet

use std::fmt::Debug;
use std::hash::Hash;

/// An atomic unit of the alphabet being compressed
///
/// Symbols are only ever compared for equality and hashed. Every `Copy` type
/// that satisfies the bounds is a symbol, so both `u8` (byte streams) and
/// `char` (text) work out of the box.
pub trait Symbol: Copy + Eq + Hash + Debug + Send + Sync {}

impl<T> Symbol for T where T: Copy + Eq + Hash + Debug + Send + Sync {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_symbol<S: Symbol>() {}

    #[test]
    fn test_common_alphabets_are_symbols() {
        assert_symbol::<u8>();
        assert_symbol::<char>();
        assert_symbol::<u16>();
    }
}
