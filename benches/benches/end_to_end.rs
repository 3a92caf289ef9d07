//! End-to-end compression benchmarks
//!
//! Run with: cargo bench --bench end_to_end

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use huff::HuffmanCodec;

fn create_text(len: usize) -> Vec<u8> {
    const WORDS: &[&str] = &[
        "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "huffman", "coding",
        "prefix", "tree", "symbol", "frequency", "a", "of", "and",
    ];
    let mut text = Vec::with_capacity(len + 16);
    let mut i = 0usize;
    while text.len() < len {
        text.extend_from_slice(WORDS[(i * 7 + i / 3) % WORDS.len()].as_bytes());
        text.push(if i % 11 == 10 { b'\n' } else { b' ' });
        i += 1;
    }
    text.truncate(len);
    text
}

fn bench_round_trip_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Round Trip by Input Size");

    for &size in &[1usize << 10, 1 << 14, 1 << 18, 1 << 20] {
        let text = create_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| {
                let codec = HuffmanCodec::from_input(black_box(text));
                let bits = codec.encode(text).unwrap();
                codec.decode(&bits).unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_round_trip_by_size);
criterion_main!(benches);
