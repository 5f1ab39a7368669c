//! Rank-based two-sample statistics.
//!
//! Degenerate inputs never produce NaN: an empty sample yields
//! `statistic = 0, pvalue = 1`, and a pooled sample with zero rank variance
//! (every value tied) yields `statistic = n1*n2/2, pvalue = 1`.

use std::f64::consts::SQRT_2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MannWhitney {
    /// U statistic of the first sample.
    pub statistic: f64,
    /// Two-sided p-value.
    pub pvalue: f64,
}

impl MannWhitney {
    const UNDEFINED: Self = Self {
        statistic: 0.0,
        pvalue: 1.0,
    };
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// 1-based average ranks of `values` plus the tie term `sum(t^3 - t)`.
pub fn average_ranks(values: &[f64]) -> (Vec<f64>, f64) {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; n];
    let mut tie_term = 0.0;
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && values[order[j]] == values[order[i]] {
            j += 1;
        }
        // positions i..j share ranks i+1..=j
        let rank = (i + 1 + j) as f64 / 2.0;
        for &idx in &order[i..j] {
            ranks[idx] = rank;
        }
        let t = (j - i) as f64;
        tie_term += t * t * t - t;
        i = j;
    }
    (ranks, tie_term)
}

/// Two-sided Mann-Whitney U test using the normal approximation with tie
/// and continuity correction.
pub fn mann_whitney_u(x: &[f64], y: &[f64]) -> MannWhitney {
    let n1 = x.len() as f64;
    let n2 = y.len() as f64;
    if x.is_empty() || y.is_empty() {
        return MannWhitney::UNDEFINED;
    }

    let pooled: Vec<f64> = x.iter().chain(y).copied().collect();
    let (ranks, tie_term) = average_ranks(&pooled);
    let r1: f64 = ranks[..x.len()].iter().sum();
    let u1 = r1 - n1 * (n1 + 1.0) / 2.0;

    let n = n1 + n2;
    let mu = n1 * n2 / 2.0;
    let variance = n1 * n2 / 12.0 * ((n + 1.0) - tie_term / (n * (n - 1.0)));
    let all_tied = pooled.iter().all(|v| *v == pooled[0]);
    if all_tied || variance <= 0.0 {
        return MannWhitney {
            statistic: mu,
            pvalue: 1.0,
        };
    }

    let z = ((u1 - mu).abs() - 0.5) / variance.sqrt();
    let pvalue = libm::erfc(z / SQRT_2).clamp(0.0, 1.0);

    MannWhitney {
        statistic: u1,
        pvalue,
    }
}
