//! Packed bit sequences

use bitvec::prelude::*;
use huff_core::{HuffError, HuffResult};
use std::fmt;
use std::str::FromStr;

/// Backing storage: bytes filled most significant bit first
pub type Bits = BitVec<u8, Msb0>;

/// An ordered sequence of binary digits
///
/// Used both for individual codes and for encoded output. Renders as a string
/// of `'0'`/`'1'` characters and parses back from one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct BitSequence {
    bits: Bits,
}

impl BitSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Bits::with_capacity(bits),
        }
    }

    /// Rebuild a sequence from packed bytes holding `bit_len` bits
    pub fn from_bytes(bytes: &[u8], bit_len: usize) -> HuffResult<Self> {
        if bit_len > bytes.len() * 8 {
            return Err(HuffError::InvalidParameter(format!(
                "{} bits requested from {} bytes",
                bit_len,
                bytes.len()
            )));
        }
        let mut bits = Bits::from_slice(bytes);
        bits.truncate(bit_len);
        Ok(Self { bits })
    }

    /// Pack into bytes, padding the final byte with zero bits
    ///
    /// The bit length is not recorded; callers that persist the bytes carry
    /// `len()` alongside them.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bits = self.bits.clone();
        bits.set_uninitialized(false);
        bits.into_vec()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    /// Append every bit of `other`
    pub fn extend_from(&mut self, other: &BitSequence) {
        self.bits.extend_from_bitslice(&other.bits);
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|bit| *bit)
    }

    /// Whether `self` is a prefix of `other` (every sequence prefixes itself)
    pub fn is_prefix_of(&self, other: &BitSequence) -> bool {
        other.bits.starts_with(self.bits.as_bitslice())
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    pub fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }
}

impl From<Bits> for BitSequence {
    fn from(bits: Bits) -> Self {
        Self { bits }
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl Extend<bool> for BitSequence {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        self.bits.extend(iter);
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitSequence {
    type Err = HuffError;

    fn from_str(s: &str) -> HuffResult<Self> {
        let mut bits = Bits::with_capacity(s.len());
        for (position, found) in s.chars().enumerate() {
            match found {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(HuffError::InvalidBitString { position, found }),
            }
        }
        Ok(Self { bits })
    }
}

impl TryFrom<String> for BitSequence {
    type Error = HuffError;

    fn try_from(s: String) -> HuffResult<Self> {
        s.parse()
    }
}

impl From<BitSequence> for String {
    fn from(bits: BitSequence) -> Self {
        bits.to_string()
    }
}
