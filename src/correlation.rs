//! Correlation analysis
//!
//! Pairwise Pearson correlation over aligned samples, plus extraction of the
//! significant pairs an operator should look at. Pairs that cannot be
//! computed (too few aligned samples, zero variance) are omitted rather than
//! zero-filled.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::models::{CorrelationPair, CorrelationStrength, Reading};

/// Minimum aligned samples required to correlate a pair
pub const MIN_ALIGNED_SAMPLES: usize = 2;

/// Absolute coefficient above which a pair is surfaced
pub const SIGNIFICANCE_THRESHOLD: f64 = 0.5;

/// Symmetric pairwise correlation matrix
///
/// Keys are canonicalized (lexicographically smaller name first), so each
/// unordered pair is stored exactly once. The diagonal is implicit.
#[derive(Debug, Clone, Default)]
pub struct CorrelationMatrix {
    coefficients: BTreeMap<(String, String), f64>,
    variables: BTreeSet<String>,
}

impl CorrelationMatrix {
    /// Coefficient for a pair, canonicalizing argument order
    ///
    /// `coefficient(a, b) == coefficient(b, a)` by construction, and
    /// `coefficient(x, x)` is 1.0 for any variable present in the matrix.
    pub fn coefficient(&self, a: &str, b: &str) -> Option<f64> {
        if a == b {
            return self.variables.contains(a).then_some(1.0);
        }
        let key = canonical_key(a, b);
        self.coefficients.get(&key).copied()
    }

    /// Number of stored off-diagonal pairs
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Stored pairs in canonical key order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.coefficients
            .iter()
            .map(|((a, b), r)| (a.as_str(), b.as_str(), *r))
    }

    fn insert(&mut self, a: &str, b: &str, r: f64) {
        self.variables.insert(a.to_string());
        self.variables.insert(b.to_string());
        self.coefficients.insert(canonical_key(a, b), r);
    }
}

fn canonical_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Compute the pairwise correlation matrix for the selected variables
///
/// A pair is correlated over its aligned samples: readings where both
/// variables are present. Pairs with fewer than two aligned samples, or with
/// zero variance on either side, are omitted. Fewer than two variables
/// yields an empty matrix.
pub fn correlation_matrix(readings: &[Reading], variables: &[String]) -> CorrelationMatrix {
    let mut matrix = CorrelationMatrix::default();

    if variables.len() < 2 {
        debug!(
            variables = variables.len(),
            "need at least two variables for correlation"
        );
        return matrix;
    }

    for i in 0..variables.len() {
        for j in (i + 1)..variables.len() {
            let a = &variables[i];
            let b = &variables[j];
            if a == b {
                continue;
            }

            let aligned: Vec<(f64, f64)> = readings
                .iter()
                .filter_map(|r| Some((r.value(a)?, r.value(b)?)))
                .collect();

            if aligned.len() < MIN_ALIGNED_SAMPLES {
                debug!(
                    variable_a = a.as_str(),
                    variable_b = b.as_str(),
                    aligned = aligned.len(),
                    "too few aligned samples, omitting pair"
                );
                continue;
            }

            match pearson(&aligned) {
                Some(r) => matrix.insert(a, b, r),
                None => {
                    debug!(
                        variable_a = a.as_str(),
                        variable_b = b.as_str(),
                        "zero variance, omitting pair"
                    );
                }
            }
        }
    }

    matrix
}

/// Pearson coefficient over aligned samples, clamped to [-1, 1]
///
/// Returns `None` when either series has zero variance.
fn pearson(samples: &[(f64, f64)]) -> Option<f64> {
    let n = samples.len() as f64;
    let mean_a = samples.iter().map(|(a, _)| a).sum::<f64>() / n;
    let mean_b = samples.iter().map(|(_, b)| b).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (a, b) in samples {
        let da = a - mean_a;
        let db = b - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }

    let denom = (var_a * var_b).sqrt();
    if denom < f64::EPSILON {
        return None;
    }

    Some((cov / denom).clamp(-1.0, 1.0))
}

/// Extract significant pairs from a matrix, strongest first
///
/// Pairs with `|r|` strictly above the threshold, sorted by descending
/// absolute coefficient; ties break on canonical name order so the output
/// is deterministic.
pub fn significant_pairs(matrix: &CorrelationMatrix, threshold: f64) -> Vec<CorrelationPair> {
    let mut pairs: Vec<CorrelationPair> = matrix
        .pairs()
        .filter(|(_, _, r)| r.abs() > threshold)
        .map(|(a, b, r)| CorrelationPair {
            variable_a: a.to_string(),
            variable_b: b.to_string(),
            coefficient: r,
            strength: CorrelationStrength::for_coefficient(r),
        })
        .collect();

    pairs.sort_by(|x, y| {
        y.coefficient
            .abs()
            .partial_cmp(&x.coefficient.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| x.variable_a.cmp(&y.variable_a))
            .then_with(|| x.variable_b.cmp(&y.variable_b))
    });

    pairs
}
