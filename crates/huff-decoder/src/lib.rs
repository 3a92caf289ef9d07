//! Huffman decoder implementation
//!
//! Decoding walks the tree one bit at a time: `0` descends left, `1` descends
//! right, and reaching a leaf emits its symbol and restarts at the root. The
//! bit sequence carries no length or padding metadata; symbol boundaries come
//! from the tree alone.

use huff_bitstream::{BitReader, BitSequence, HuffmanNode, HuffmanTree};
use huff_core::consts::SINGLE_SYMBOL_CODE;
use huff_core::*;
use std::io::Read;

/// Decoder options
#[derive(Debug, Clone, Default)]
pub struct DecoderOptions {
    /// Report malformed input as an error instead of truncating the output
    pub strict: bool,
}

impl DecoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// How a walk over the bits ended
enum Walk {
    /// Every bit consumed and the last code was complete
    Complete,
    /// A bit led off the tree at `position`
    FellOff { position: usize },
    /// Bits ran out partway through a code
    Dangling { position: usize },
    /// The byte source ended before the requested bit length at `position`
    Exhausted { position: usize },
}

/// Huffman decoder
#[derive(Debug, Clone, Default)]
pub struct HuffmanDecoder {
    options: DecoderOptions,
}

impl HuffmanDecoder {
    pub fn new(options: DecoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Decode a bit sequence against `tree`
    ///
    /// In the default lenient mode malformed input truncates the output at the
    /// last complete symbol and this never fails. In strict mode the same
    /// conditions return [`HuffError::MalformedBitstream`].
    pub fn decode_bits<S: Symbol>(
        &self,
        bits: &BitSequence,
        tree: Option<&HuffmanTree<S>>,
    ) -> HuffResult<Vec<S>> {
        self.run(bits.iter().map(Ok), bits.len(), tree)
    }

    /// Decode `bit_len` bits read from a byte source written MSB-first
    ///
    /// A source shorter than `bit_len` truncates the output in lenient mode
    /// and returns [`HuffError::UnexpectedEndOfStream`] in strict mode. Other
    /// I/O errors are always returned.
    pub fn decode_from_reader<S: Symbol, R: Read>(
        &self,
        reader: R,
        bit_len: usize,
        tree: Option<&HuffmanTree<S>>,
    ) -> HuffResult<Vec<S>> {
        let mut reader = BitReader::new(reader);
        self.run((0..bit_len).map(|_| reader.read_bit()), bit_len, tree)
    }

    fn run<S, I>(&self, bits: I, bit_len: usize, tree: Option<&HuffmanTree<S>>) -> HuffResult<Vec<S>>
    where
        S: Symbol,
        I: Iterator<Item = HuffResult<bool>>,
    {
        let mut output = Vec::new();

        let outcome = match tree {
            Some(tree) => walk(bits, tree.root(), &mut output)?,
            None if bit_len == 0 => Walk::Complete,
            None => Walk::FellOff { position: 0 },
        };

        let position = match outcome {
            Walk::Complete => return Ok(output),
            Walk::FellOff { position } => {
                tracing::debug!(position, decoded = output.len(), "bit led off the tree");
                position
            }
            Walk::Dangling { position } => {
                tracing::debug!(position, decoded = output.len(), "bits ended mid-code");
                position
            }
            Walk::Exhausted { position } => {
                tracing::debug!(position, bit_len, decoded = output.len(), "source ended early");
                if self.options.strict {
                    return Err(HuffError::UnexpectedEndOfStream);
                }
                return Ok(output);
            }
        };

        if self.options.strict {
            return Err(HuffError::MalformedBitstream {
                position,
                decoded: output.len(),
            });
        }
        Ok(output)
    }
}

fn walk<S, I>(bits: I, root: &HuffmanNode<S>, output: &mut Vec<S>) -> HuffResult<Walk>
where
    S: Symbol,
    I: Iterator<Item = HuffResult<bool>>,
{
    let mut node = root;
    let mut consumed = 0;

    for bit in bits {
        let bit = match bit {
            Ok(bit) => bit,
            Err(HuffError::UnexpectedEndOfStream) => {
                return Ok(Walk::Exhausted { position: consumed })
            }
            Err(err) => return Err(err),
        };
        // Traversal restarts at the root after every leaf, so the current node
        // is only ever a leaf when the whole tree is one leaf.
        let next = match node.child(bit) {
            Some(child) => child,
            None if bit == SINGLE_SYMBOL_CODE => node,
            None => return Ok(Walk::FellOff { position: consumed }),
        };
        consumed += 1;

        match next.symbol() {
            Some(symbol) => {
                output.push(symbol);
                node = root;
            }
            None => node = next,
        }
    }

    if std::ptr::eq(node, root) {
        Ok(Walk::Complete)
    } else {
        Ok(Walk::Dangling { position: consumed })
    }
}

/// Decode `bits` against `tree`, truncating at the first malformed position
///
/// An absent tree decodes to an empty sequence.
pub fn decode<S: Symbol>(bits: &BitSequence, tree: Option<&HuffmanTree<S>>) -> Vec<S> {
    match HuffmanDecoder::default().decode_bits(bits, tree) {
        Ok(output) => output,
        // Lenient decoding of an in-memory sequence has no failure path
        Err(err) => {
            tracing::warn!(%err, "lenient decode failed");
            Vec::new()
        }
    }
}

/// Decode `bits` against `tree`, failing on any malformed input
pub fn try_decode<S: Symbol>(bits: &BitSequence, tree: Option<&HuffmanTree<S>>) -> HuffResult<Vec<S>> {
    HuffmanDecoder::new(DecoderOptions::new().strict(true)).decode_bits(bits, tree)
}
