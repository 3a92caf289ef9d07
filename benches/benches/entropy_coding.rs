//! Benchmarks for the individual Huffman stages
//!
//! Run with: cargo bench --bench entropy_coding

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use huff_bitstream::{build, generate, BitSequence, CodeTable, HuffmanTree};
use huff_core::{analyze, analyze_with, AnalyzerOptions, FrequencyTable};
use huff_decoder::decode;
use huff_encoder::encode;

/// Deterministic input over `alphabet_size` byte values with a skewed distribution
fn skewed_input(len: usize, alphabet_size: usize) -> Vec<u8> {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let r = (state % (alphabet_size * alphabet_size) as u64) as usize;
            // sqrt-shaped: low symbols are rarer than high ones
            ((r as f64).sqrt() as usize).min(alphabet_size - 1) as u8
        })
        .collect()
}

fn prepare(input: &[u8]) -> (FrequencyTable<u8>, Option<HuffmanTree<u8>>, CodeTable<u8>, BitSequence) {
    let frequencies = analyze(input);
    let tree = build(&frequencies);
    let codes = generate(tree.as_ref());
    let bits = encode(input, &codes).unwrap();
    (frequencies, tree, codes, bits)
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("Frequency Analysis");
    let input = skewed_input(4 << 20, 256);
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("sequential_4MiB", |b| {
        let options = AnalyzerOptions::new().sequential();
        b.iter(|| analyze_with(black_box(&input), &options));
    });

    group.bench_function("sharded_4MiB", |b| {
        let options = AnalyzerOptions::new().parallel_threshold(0);
        b.iter(|| analyze_with(black_box(&input), &options));
    });

    group.finish();
}

fn bench_tree_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("Tree Building");

    for alphabet_size in [4usize, 16, 64, 256] {
        let frequencies = analyze(&skewed_input(64 * 1024, alphabet_size));
        group.bench_with_input(
            BenchmarkId::from_parameter(alphabet_size),
            &frequencies,
            |b, frequencies| {
                b.iter(|| {
                    let tree = build(black_box(frequencies));
                    generate(tree.as_ref())
                });
            },
        );
    }

    group.finish();
}

fn bench_encode_by_alphabet_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encode by Alphabet Size");

    for alphabet_size in [4usize, 16, 64, 256] {
        let input = skewed_input(256 * 1024, alphabet_size);
        let (_, _, codes, _) = prepare(&input);

        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(alphabet_size), &input, |b, input| {
            b.iter(|| encode(black_box(input), black_box(&codes)).unwrap());
        });
    }

    group.finish();
}

fn bench_decode_by_alphabet_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decode by Alphabet Size");

    for alphabet_size in [4usize, 16, 64, 256] {
        let input = skewed_input(256 * 1024, alphabet_size);
        let (_, tree, _, bits) = prepare(&input);

        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(alphabet_size), &bits, |b, bits| {
            b.iter(|| decode(black_box(bits), tree.as_ref()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_analysis,
    bench_tree_building,
    bench_encode_by_alphabet_size,
    bench_decode_by_alphabet_size
);
criterion_main!(benches);
