//! End-to-end properties of the analyze → build → generate → encode → decode pipeline

use huff::{analyze, build, decode, encode, generate, try_decode, HuffmanCodec, HuffmanNode, Symbol};

/// Deterministic pseudo-random bytes with a skewed distribution
fn skewed_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let r = (state >> 33) as u32;
            // Squaring biases toward small values
            ((r % 64) * (r % 64) / 64) as u8 + b'!'
        })
        .collect()
}

fn samples() -> Vec<Vec<u8>> {
    vec![
        b"a".to_vec(),
        b"ab".to_vec(),
        b"aaabbc".to_vec(),
        b"zzzzzzzzzzzzzzzz".to_vec(),
        b"abcdefghijklmnopqrstuvwxyz".to_vec(),
        b"It was the best of times, it was the worst of times.".to_vec(),
        (0..=255u8).collect(),
        skewed_bytes(10_000, 7),
        skewed_bytes(513, 42),
    ]
}

fn round_trip<S: Symbol>(input: &[S]) -> Vec<S> {
    let tree = build(&analyze(input));
    let codes = generate(tree.as_ref());
    let bits = encode(input, &codes).unwrap();
    decode(&bits, tree.as_ref())
}

fn count_leaves<S: Symbol>(node: &HuffmanNode<S>) -> usize {
    match node {
        HuffmanNode::Leaf { .. } => 1,
        HuffmanNode::Internal { left, right, .. } => count_leaves(left) + count_leaves(right),
    }
}

#[test]
fn test_round_trip_bytes() {
    for input in samples() {
        assert_eq!(round_trip(&input), input);
    }
}

#[test]
fn test_round_trip_chars() {
    let text: Vec<char> = "Ünïcödé ≠ ASCII — but Huffman doesn't mind: ∀x ∈ Σ".chars().collect();
    assert_eq!(round_trip(&text), text);
}

#[test]
fn test_strict_decode_accepts_well_formed_output() {
    for input in samples() {
        let tree = build(&analyze(&input));
        let bits = encode(&input, &generate(tree.as_ref())).unwrap();
        assert_eq!(try_decode(&bits, tree.as_ref()).unwrap(), input);
    }
}

#[test]
fn test_codes_are_prefix_free() {
    for input in samples() {
        let codes = generate(build(&analyze(&input)).as_ref());
        let entries: Vec<_> = codes.iter().collect();
        for (i, (_, a)) in entries.iter().enumerate() {
            for (_, b) in entries.iter().skip(i + 1) {
                assert!(!a.is_prefix_of(b) && !b.is_prefix_of(a), "{} / {}", a, b);
            }
        }
    }
}

#[test]
fn test_frequency_conservation() {
    for input in samples() {
        assert_eq!(analyze(&input).total(), input.len() as u64);
    }
}

#[test]
fn test_leaf_count_matches_distinct_symbols() {
    for input in samples() {
        let frequencies = analyze(&input);
        let tree = build(&frequencies).unwrap();

        assert_eq!(count_leaves(tree.root()), frequencies.len());
        assert_eq!(tree.leaf_count(), frequencies.len());
        if frequencies.len() == 1 {
            assert!(tree.is_single_leaf());
        }
    }
}

#[test]
fn test_code_length_ordering() {
    for input in samples() {
        let frequencies = analyze(&input);
        let codes = generate(build(&frequencies).as_ref());

        for (x, fx) in frequencies.iter() {
            for (y, fy) in frequencies.iter() {
                if fx > fy {
                    assert!(codes.code_length(&x).unwrap() <= codes.code_length(&y).unwrap());
                }
            }
        }
    }
}

#[test]
fn test_empty_input_through_every_stage() {
    let input: Vec<u8> = Vec::new();

    let frequencies = analyze(&input);
    assert!(frequencies.is_empty());

    let tree = build(&frequencies);
    assert!(tree.is_none());

    let codes = generate(tree.as_ref());
    assert!(codes.is_empty());

    let bits = encode(&input, &codes).unwrap();
    assert!(bits.is_empty());

    assert!(decode(&bits, tree.as_ref()).is_empty());
}

#[test]
fn test_aaabbc_scenario() {
    let input = b"aaabbc";
    let frequencies = analyze(input);
    assert_eq!(frequencies.get(&b'a'), Some(3));
    assert_eq!(frequencies.get(&b'b'), Some(2));
    assert_eq!(frequencies.get(&b'c'), Some(1));

    let tree = build(&frequencies);
    let codes = generate(tree.as_ref());
    let a = codes.code_length(&b'a').unwrap();
    let b = codes.code_length(&b'b').unwrap();
    let c = codes.code_length(&b'c').unwrap();
    assert_eq!(a, 1);
    assert!(b >= 2 && c >= 2);
    assert!(a <= b && a <= c);

    let bits = encode(input, &codes).unwrap();
    assert_eq!(bits.len(), 3 * a + 2 * b + c);
    assert_eq!(decode(&bits, tree.as_ref()), input);
}

#[test]
fn test_determinism() {
    let input = skewed_bytes(5_000, 99);

    let first = HuffmanCodec::from_input(&input);
    let second = HuffmanCodec::from_input(&input);

    assert_eq!(first.codes(), second.codes());
    assert_eq!(first.encode(&input).unwrap(), second.encode(&input).unwrap());
}

#[test]
fn test_bit_string_interchange() {
    let input = b"mississippi";
    let tree = build(&analyze(input));
    let bits = encode(input, &generate(tree.as_ref())).unwrap();

    let text = bits.to_string();
    assert!(text.chars().all(|c| c == '0' || c == '1'));

    let parsed: huff::BitSequence = text.parse().unwrap();
    assert_eq!(decode(&parsed, tree.as_ref()), input);
}

#[test]
fn test_compression_beats_fixed_width_on_skewed_input() {
    let input = skewed_bytes(10_000, 3);
    let codec = HuffmanCodec::from_input(&input);
    let stats = codec.stats(huff::consts::BITS_PER_BYTE);

    assert!(stats.ratio() > 1.0);
    assert!(stats.average_code_length >= stats.entropy - 1e-9);
    assert!(stats.average_code_length < stats.entropy + 1.0);
}
