//! Example demonstrating a full Huffman round trip on a piece of text
//!
//! ```bash
//! cargo run --example round_trip
//! ```

use huff::consts::BITS_PER_BYTE;
use huff::{analyze, build, decode, encode, generate, CompressionStats};

const SAMPLE: &str = "Peter Piper picked a peck of pickled peppers. \
                      A peck of pickled peppers Peter Piper picked.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Huffman coding - round trip example");
    println!("===================================\n");

    let text: Vec<char> = SAMPLE.chars().collect();

    let frequencies = analyze(&text);
    let tree = build(&frequencies);
    let codes = generate(tree.as_ref());

    println!("Code table ({} symbols):", codes.len());
    for (symbol, code) in codes.iter() {
        let count = frequencies.get(&symbol).unwrap_or(0);
        println!("  {:?}  x{:<3} {}", symbol, count, code);
    }

    let bits = encode(&text, &codes)?;
    println!("\nEncoded {} symbols into {} bits", text.len(), bits.len());

    let decoded: String = decode(&bits, tree.as_ref()).into_iter().collect();
    println!("Round trip ok: {}", decoded == SAMPLE);

    // The sample is ASCII, so one byte per char uncompressed
    println!("\n{}", CompressionStats::new(&frequencies, &codes, BITS_PER_BYTE));

    Ok(())
}
