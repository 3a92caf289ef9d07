// Inspect the Huffman code a file would get and verify the round trip

use anyhow::{ensure, Context};
use clap::Parser;
use huff::consts::BITS_PER_BYTE;
use huff::log::{init_subscriber, Level};
use huff::HuffmanCodec;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "huff-inspect",
    about = "Print the Huffman code table and compression statistics for a file"
)]
struct Args {
    /// File to analyze
    input: PathBuf,

    /// Print the code table, shortest codes first
    #[arg(short, long)]
    table: bool,

    /// Log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    init_subscriber(level)?;

    let data = std::fs::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let codec = HuffmanCodec::from_input(&data);

    if args.table {
        let mut rows: Vec<_> = codec.codes().iter().collect();
        rows.sort_by_key(|(symbol, code)| (code.len(), *symbol));

        println!("{:>6} {:>10}  code", "byte", "count");
        for (symbol, code) in rows {
            let count = codec.frequencies().get(&symbol).unwrap_or(0);
            println!("{:>6} {:>10}  {}", printable(symbol), count, code);
        }
        println!();
    }

    let bits = codec.encode(&data)?;
    let decoded = codec.try_decode(&bits)?;
    ensure!(decoded == data, "round trip mismatch for {}", args.input.display());

    println!("{}", codec.stats(BITS_PER_BYTE));
    println!(
        "round trip: ok ({} bytes packed, tree depth {})",
        bits.to_bytes().len(),
        codec.tree().map(|tree| tree.depth()).unwrap_or(0)
    );

    Ok(())
}

fn printable(byte: u8) -> String {
    if byte.is_ascii_graphic() {
        format!("'{}'", byte as char)
    } else {
        format!("0x{:02x}", byte)
    }
}
