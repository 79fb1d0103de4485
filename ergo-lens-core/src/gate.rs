/// Minimum filtered-set size before a histogram is shown at all. A hard
/// threshold, not a statistical test: sparse bins produce visually
/// misleading histograms.
pub const MIN_SAMPLE_SIZE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSufficiency {
    /// `n <= 1000`: show the not-enough-data state; binning and scales are
    /// not computed.
    Insufficient,
    /// `n > 1000`: proceed to binning.
    Sufficient,
}

pub fn assess(n: usize) -> SampleSufficiency {
    if n > MIN_SAMPLE_SIZE {
        SampleSufficiency::Sufficient
    } else {
        SampleSufficiency::Insufficient
    }
}
