use serde::{Deserialize, Serialize};

use crate::scale;

/// One histogram bin: the half-open range `[x0, x1)` plus the count of
/// records whose field value fell inside it. The last bin also includes the
/// domain upper bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub x0: f64,
    pub x1: f64,
    pub count: u64,
}

/// Interior bin edges for `[lo, hi)` at roughly `thresholds` nice steps.
/// Edges equal to either domain bound are dropped; the bounds themselves
/// close the first and last bin.
pub fn bin_edges(lo: f64, hi: f64, thresholds: usize) -> Vec<f64> {
    scale::ticks(lo, hi, thresholds)
        .into_iter()
        .filter(|&e| e > lo && e < hi)
        .collect()
}

/// Partitions `[lo, hi]` into contiguous bins and assigns each in-range value
/// to exactly one by interval membership: a value equal to an internal edge
/// belongs to the bin starting at that edge, a value equal to `hi` lands in
/// the last bin. Values outside `[lo, hi]` and `NaN` are silently clipped, so
/// the summed count may be below the input length.
pub fn build_bins(values: &[f64], lo: f64, hi: f64, thresholds: usize) -> Vec<Bin> {
    if !(hi > lo) {
        // degenerate domain: one zero-width bin counting exact matches
        let count = values.iter().filter(|&&v| v == lo).count() as u64;
        return vec![Bin {
            x0: lo,
            x1: hi,
            count,
        }];
    }
    let edges = bin_edges(lo, hi, thresholds);
    let mut bins: Vec<Bin> = Vec::with_capacity(edges.len() + 1);
    let mut x0 = lo;
    for &e in &edges {
        bins.push(Bin { x0, x1: e, count: 0 });
        x0 = e;
    }
    bins.push(Bin {
        x0,
        x1: hi,
        count: 0,
    });
    for &v in values {
        if !(v >= lo && v <= hi) {
            continue; // clipped (also rejects NaN)
        }
        let idx = edges.partition_point(|&e| e <= v);
        bins[idx].count += 1;
    }
    bins
}

pub fn max_count(bins: &[Bin]) -> u64 {
    bins.iter().map(|b| b.count).max().unwrap_or(0)
}

pub fn total_count(bins: &[Bin]) -> u64 {
    bins.iter().map(|b| b.count).sum()
}
