//! Rank assignment for sorted samples
//!
//! Ranks are 1-indexed. Tied values share the mean of the ranks they would
//! occupy under a strict ordering.

use serde::{Deserialize, Serialize};

/// How tied values are ranked
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieMethod {
    /// Mean of the spanned ranks: [1, 2, 2, 3] -> [1, 2.5, 2.5, 4]
    #[default]
    Average,
    /// Position in the stable sort: [1, 2, 2, 3] -> [1, 2, 3, 4]
    Ordinal,
}

/// Rank an ascending-sorted slice
pub fn rank_sorted(sorted: &[f64], method: TieMethod) -> Vec<f64> {
    match method {
        TieMethod::Average => average_ranks(sorted),
        TieMethod::Ordinal => ordinal_ranks(sorted.len()),
    }
}

/// Average ranks of an ascending-sorted slice
pub fn average_ranks(sorted: &[f64]) -> Vec<f64> {
    let n = sorted.len();
    let mut ranks = vec![0.0; n];

    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && sorted[j + 1] == sorted[i] {
            j += 1;
        }
        // Ranks i+1 ..= j+1 averaged
        let rank = (i + j + 2) as f64 / 2.0;
        for r in &mut ranks[i..=j] {
            *r = rank;
        }
        i = j + 1;
    }

    ranks
}

/// Ranks 1..=n
pub fn ordinal_ranks(n: usize) -> Vec<f64> {
    (1..=n).map(|j| j as f64).collect()
}
