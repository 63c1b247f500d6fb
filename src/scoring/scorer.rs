use std::collections::{HashMap, HashSet};
use unicode_segmentation::UnicodeSegmentation;
use crate::analysis::features::FeatureExtractor;

/// Pairwise similarity metric over raw code texts, bounded to [0, 1].
/// Implementations must be symmetric in their arguments.
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, a: &str, b: &str) -> f64;

    fn name(&self) -> &str;
}

/// Jaccard overlap of the two lexical token sets. Order-blind: two texts
/// sharing vocabulary score high here even with unrelated logic.
pub struct TokenOverlapScorer {
    extractor: FeatureExtractor,
}

impl TokenOverlapScorer {
    pub fn new() -> Self {
        TokenOverlapScorer {
            extractor: FeatureExtractor::new(),
        }
    }
}

impl SimilarityScorer for TokenOverlapScorer {
    fn score(&self, a: &str, b: &str) -> f64 {
        let features_a = self.extractor.extract(a);
        let features_b = self.extractor.extract(b);
        jaccard(&features_a.tokens, &features_b.tokens)
    }

    fn name(&self) -> &str {
        "token_overlap"
    }
}

impl Default for TokenOverlapScorer {
    fn default() -> Self {
        TokenOverlapScorer::new()
    }
}

// Two empty sets count as maximally similar: nothing distinguishes them.
// One empty set against a populated one is never similar.
fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}

/// Ratcliff-Obershelp matching-blocks ratio over the two raw texts as
/// grapheme sequences. Order-sensitive: shared tokens in a different order
/// score low here.
pub struct SequenceScorer;

impl SimilarityScorer for SequenceScorer {
    fn score(&self, a: &str, b: &str) -> f64 {
        sequence_ratio(a, b)
    }

    fn name(&self) -> &str {
        "sequence"
    }
}

pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    // Canonical operand order: greedy block selection must not depend on
    // which text arrives first, or symmetry breaks on ties.
    let (a, b) = if a <= b { (a, b) } else { (b, a) };

    let seq_a: Vec<&str> = a.graphemes(true).collect();
    let seq_b: Vec<&str> = b.graphemes(true).collect();

    if seq_a.is_empty() && seq_b.is_empty() {
        return 1.0;
    }
    if seq_a.is_empty() || seq_b.is_empty() {
        return 0.0;
    }

    let matched = matching_block_total(&seq_a, &seq_b);
    (2.0 * matched as f64) / (seq_a.len() + seq_b.len()) as f64
}

/// Total length of all matching blocks: longest common block first, then
/// the same search on the pieces to its left and right.
fn matching_block_total(a: &[&str], b: &[&str]) -> usize {
    let mut b_index: HashMap<&str, Vec<usize>> = HashMap::new();
    for (j, g) in b.iter().enumerate() {
        b_index.entry(*g).or_default().push(j);
    }

    let mut total = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        if alo >= ahi || blo >= bhi {
            continue;
        }
        let (i, j, size) = longest_match(a, &b_index, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        total += size;
        pending.push((alo, i, blo, j));
        pending.push((i + size, ahi, j + size, bhi));
    }

    total
}

fn longest_match(
    a: &[&str],
    b_index: &HashMap<&str, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best_i = alo;
    let mut best_j = blo;
    let mut best_size = 0;

    // run_lengths[j] = length of the common block ending at a[i], b[j]
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut next_runs = HashMap::new();
        if let Some(positions) = b_index.get(a[i]) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let len = if j == 0 {
                    1
                } else {
                    run_lengths.get(&(j - 1)).copied().unwrap_or(0) + 1
                };
                next_runs.insert(j, len);
                if len > best_size {
                    best_i = i + 1 - len;
                    best_j = j + 1 - len;
                    best_size = len;
                }
            }
        }
        run_lengths = next_runs;
    }

    (best_i, best_j, best_size)
}

/// Weighted blend of structural overlap and sequence alignment. The
/// order-sensitive term dominates: the target is near-verbatim copies,
/// not shared vocabulary.
pub struct CompositeScorer {
    pub structural_weight: f64,
    pub sequence_weight: f64,
    overlap: TokenOverlapScorer,
    sequence: SequenceScorer,
}

impl CompositeScorer {
    pub fn new(structural_weight: f64, sequence_weight: f64) -> Self {
        CompositeScorer {
            structural_weight,
            sequence_weight,
            overlap: TokenOverlapScorer::new(),
            sequence: SequenceScorer,
        }
    }
}

impl Default for CompositeScorer {
    fn default() -> Self {
        CompositeScorer::new(0.3, 0.7)
    }
}

impl SimilarityScorer for CompositeScorer {
    fn score(&self, a: &str, b: &str) -> f64 {
        // Identical texts score exactly 1.0; the weighted sum below would
        // land a rounding error short.
        if a == b {
            return 1.0;
        }

        let overlap = self.overlap.score(a, b);
        let sequence = self.sequence.score(a, b);
        self.structural_weight * overlap + self.sequence_weight * sequence
    }

    fn name(&self) -> &str {
        "composite"
    }
}
