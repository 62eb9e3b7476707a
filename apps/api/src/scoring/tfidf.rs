//! TF-IDF vectorization over a two-document corpus and cosine similarity.
//!
//! Weights follow the smoothed formulation: raw term count multiplied by
//! `ln((1 + n) / (1 + df)) + 1`, each vector then L2-normalized. With `n = 2`
//! the idf only distinguishes terms found in one document from terms found in both.

use std::collections::BTreeMap;

use super::normalizer::tokens;

/// Number of documents in every corpus this module builds.
const CORPUS_SIZE: f64 = 2.0;

/// Aligned TF-IDF vectors for a pair of cleaned texts.
///
/// Index `i` in both vectors refers to the same vocabulary term; the
/// vocabulary is sorted, so construction is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct PairVectors {
    pub vocabulary: Vec<String>,
    pub left: Vec<f64>,
    pub right: Vec<f64>,
}

impl PairVectors {
    /// Builds vectors whose vocabulary is exactly the distinct tokens of `left` and `right`.
    pub fn build(left: &str, right: &str) -> Self {
        let mut counts: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
        for token in tokens(left) {
            counts.entry(token).or_default().0 += 1;
        }
        for token in tokens(right) {
            counts.entry(token).or_default().1 += 1;
        }

        let mut vocabulary = Vec::with_capacity(counts.len());
        let mut left_weights = Vec::with_capacity(counts.len());
        let mut right_weights = Vec::with_capacity(counts.len());

        for (term, (left_count, right_count)) in counts {
            let document_frequency = u32::from(left_count > 0) + u32::from(right_count > 0);
            let idf = smoothed_idf(f64::from(document_frequency));
            vocabulary.push(term.to_string());
            left_weights.push(f64::from(left_count) * idf);
            right_weights.push(f64::from(right_count) * idf);
        }

        l2_normalize(&mut left_weights);
        l2_normalize(&mut right_weights);

        Self {
            vocabulary,
            left: left_weights,
            right: right_weights,
        }
    }

    pub fn cosine_similarity(&self) -> f64 {
        cosine_similarity(&self.left, &self.right)
    }
}

fn smoothed_idf(document_frequency: f64) -> f64 {
    ((1.0 + CORPUS_SIZE) / (1.0 + document_frequency)).ln() + 1.0
}

fn l2_norm(vector: &[f64]) -> f64 {
    vector.iter().map(|w| w * w).sum::<f64>().sqrt()
}

fn l2_normalize(vector: &mut [f64]) {
    let norm = l2_norm(vector);
    if norm > 0.0 {
        vector.iter_mut().for_each(|w| *w /= norm);
    }
}

/// Dot product over the product of L2 norms; `0.0` when either vector has zero norm.
///
/// Symmetric in its arguments: both the summation order and the norm product
/// are independent of which vector comes first.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let norms = l2_norm(a) * l2_norm(b);
    if norms == 0.0 {
        return 0.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    dot / norms
}
