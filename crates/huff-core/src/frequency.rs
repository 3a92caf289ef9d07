//! Frequency analysis
//!
//! Counts the occurrences of each distinct symbol in an input sequence. The
//! resulting table remembers the order in which symbols first appeared, which
//! is the insertion order the tree builder uses to break frequency ties.

use crate::consts;
use crate::symbol::Symbol;
use rayon::prelude::*;
use std::collections::HashMap;

/// Symbol occurrence counts derived from one input
///
/// Keys are unique and every count is positive. Iteration yields symbols in
/// first-occurrence order.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        from = "Vec<(S, u64)>",
        into = "Vec<(S, u64)>",
        bound(
            serialize = "S: Symbol + serde::Serialize",
            deserialize = "S: Symbol + serde::Deserialize<'de>"
        )
    )
)]
pub struct FrequencyTable<S> {
    entries: Vec<(S, u64)>,
    index: HashMap<S, usize>,
}

impl<S: Symbol> FrequencyTable<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Count a single occurrence of `symbol`
    pub fn record(&mut self, symbol: S) {
        self.add(symbol, 1);
    }

    /// Add `count` occurrences of `symbol`
    ///
    /// A zero count is ignored so the table never holds a zero entry.
    pub fn add(&mut self, symbol: S, count: u64) {
        if count == 0 {
            return;
        }
        match self.index.get(&symbol) {
            Some(&slot) => self.entries[slot].1 += count,
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, count));
            }
        }
    }

    /// Fold another table into this one
    ///
    /// Symbols new to `self` are appended in `other`'s order, so merging the
    /// tables of consecutive input shards reproduces the table of the whole
    /// input.
    pub fn merge(&mut self, other: FrequencyTable<S>) {
        for (symbol, count) in other.entries {
            self.add(symbol, count);
        }
    }

    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.index.get(symbol).map(|&slot| self.entries[slot].1)
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts; equals the analyzed input's length
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    /// Iterate `(symbol, count)` pairs in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (S, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Shannon entropy of the distribution in bits per symbol
    ///
    /// Returns 0.0 for an empty table.
    pub fn entropy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let total = total as f64;
        self.entries
            .iter()
            .map(|&(_, count)| {
                let p = count as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}

impl<S: Symbol> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> PartialEq for FrequencyTable<S> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<S: Symbol> Eq for FrequencyTable<S> {}

impl<S: Symbol> FromIterator<(S, u64)> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (symbol, count) in iter {
            table.add(symbol, count);
        }
        table
    }
}

impl<S: Symbol> From<Vec<(S, u64)>> for FrequencyTable<S> {
    fn from(entries: Vec<(S, u64)>) -> Self {
        entries.into_iter().collect()
    }
}

impl<S: Symbol> From<FrequencyTable<S>> for Vec<(S, u64)> {
    fn from(table: FrequencyTable<S>) -> Self {
        table.entries
    }
}

/// Frequency analyzer options
#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    /// Inputs with at least this many symbols are counted in parallel
    pub parallel_threshold: usize,
    /// Number of symbols per parallel shard
    pub shard_len: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: consts::DEFAULT_PARALLEL_THRESHOLD,
            shard_len: consts::DEFAULT_SHARD_LEN,
        }
    }
}

impl AnalyzerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn shard_len(mut self, shard_len: usize) -> Self {
        self.shard_len = shard_len.max(consts::MIN_SHARD_LEN);
        self
    }

    /// Never shard, regardless of input length
    pub fn sequential(mut self) -> Self {
        self.parallel_threshold = usize::MAX;
        self
    }
}

/// Count symbol occurrences in `input`
///
/// Empty input yields an empty table.
pub fn analyze<S: Symbol>(input: &[S]) -> FrequencyTable<S> {
    analyze_with(input, &AnalyzerOptions::default())
}

/// Count symbol occurrences in `input` using the given options
///
/// Large inputs are split into shards counted on the rayon pool. Shard tables
/// are merged in input order, so the result is identical to a sequential
/// count, first-occurrence order included.
pub fn analyze_with<S: Symbol>(input: &[S], options: &AnalyzerOptions) -> FrequencyTable<S> {
    if input.len() < options.parallel_threshold || input.len() <= options.shard_len {
        return count_sequential(input);
    }

    let shard_len = options.shard_len.max(1);
    let shards: Vec<FrequencyTable<S>> = input.par_chunks(shard_len).map(count_sequential).collect();
    tracing::debug!(
        symbols = input.len(),
        shards = shards.len(),
        "merging sharded frequency tables"
    );

    let mut shards = shards.into_iter();
    let mut table = shards.next().unwrap_or_default();
    for shard in shards {
        table.merge(shard);
    }
    table
}

fn count_sequential<S: Symbol>(input: &[S]) -> FrequencyTable<S> {
    let mut table = FrequencyTable::new();
    for &symbol in input {
        table.record(symbol);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let table = analyze::<u8>(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.entropy(), 0.0);
    }

    #[test]
    fn test_counts_and_conservation() {
        let input = b"aaabbc";
        let table = analyze(input.as_slice());

        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&b'a'), Some(3));
        assert_eq!(table.get(&b'b'), Some(2));
        assert_eq!(table.get(&b'c'), Some(1));
        assert_eq!(table.get(&b'z'), None);
        assert_eq!(table.total(), input.len() as u64);
    }

    #[test]
    fn test_first_occurrence_order() {
        let input: Vec<char> = "banana bread".chars().collect();
        let table = analyze(&input);

        let order: String = table.iter().map(|(symbol, _)| symbol).collect();
        assert_eq!(order, "ban red");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        // Symbols appear for the first time in later shards too
        let input: Vec<u16> = (0..20_000u32).map(|i| ((i * i) % 977) as u16).collect();
        let options = AnalyzerOptions::new()
            .parallel_threshold(0)
            .shard_len(consts::MIN_SHARD_LEN);

        let parallel = analyze_with(&input, &options);
        let sequential = analyze_with(&input, &AnalyzerOptions::new().sequential());

        assert_eq!(parallel, sequential);
        assert_eq!(parallel.total(), input.len() as u64);
    }

    #[test]
    fn test_shard_len_is_clamped() {
        let options = AnalyzerOptions::new().shard_len(1);
        assert_eq!(options.shard_len, consts::MIN_SHARD_LEN);
    }

    #[test]
    fn test_merge_appends_new_symbols_in_order() {
        let mut first = analyze(b"abca".as_slice());
        first.merge(analyze(b"dcbe".as_slice()));

        let order: Vec<u8> = first.iter().map(|(symbol, _)| symbol).collect();
        assert_eq!(order, b"abcde");
        assert_eq!(first.get(&b'a'), Some(2));
        assert_eq!(first.get(&b'c'), Some(2));
        assert_eq!(first.total(), 8);
    }

    #[test]
    fn test_from_iter_drops_zero_and_sums_duplicates() {
        let table: FrequencyTable<char> = vec![('x', 2u64), ('y', 0), ('x', 3)].into_iter().collect();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&'x'), Some(5));
    }

    #[test]
    fn test_entropy_uniform() {
        let table = analyze(b"abcdabcd".as_slice());
        assert!((table.entropy() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_single_symbol() {
        let table = analyze(b"zzzz".as_slice());
        assert_eq!(table.entropy(), 0.0);
    }
}
