use serde::{Deserialize, Serialize};

use ergo_lens_common::ChartConfig;

/// Fixed RER domain used when demographic filters are in play, so bar
/// positions stay comparable across filter changes.
pub const RER_DOMAIN: (f64, f64) = (0.55, 1.5);
pub const FIXED_THRESHOLDS: usize = 50;
pub const EXTENT_THRESHOLDS: usize = 30;

/// Step size for roughly `count` ticks between `lo` and `hi`, snapped to
/// 1/2/5 × 10^k. Steps below 1 are returned as a negated inverse so tick
/// values can be produced by division, which keeps grid points like 1.5
/// exact instead of accumulating multiplication error.
fn tick_increment(lo: f64, hi: f64, count: usize) -> f64 {
    let step = (hi - lo) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Ascending tick values covering `[lo, hi]` at a nice step, endpoints
/// included only when they land on the step grid.
pub fn ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    if !(hi > lo) || count == 0 {
        return Vec::new();
    }
    let step = tick_increment(lo, hi, count);
    if step > 0.0 {
        let start = (lo / step).ceil() as i64;
        let stop = (hi / step).floor() as i64;
        (start..=stop).map(|i| i as f64 * step).collect()
    } else {
        let inv = -step;
        let start = (lo * inv).ceil() as i64;
        let stop = (hi * inv).floor() as i64;
        (start..=stop).map(|i| i as f64 / inv).collect()
    }
}

/// Linear `domain -> range` mapping for axis layout. Assembled with a unit
/// range; the renderer stretches it onto its viewport via `with_range`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn unit(domain: (f64, f64)) -> Self {
        Self::new(domain, (0.0, 1.0))
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn with_range(mut self, lo: f64, hi: f64) -> Self {
        self.range = (lo, hi);
        self
    }

    pub fn scale(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Extends the domain outward to nice round bounds.
    pub fn nice(mut self, count: usize) -> Self {
        let (lo, hi) = self.domain;
        if hi > lo {
            let step = tick_increment(lo, hi, count);
            self.domain = if step > 0.0 {
                ((lo / step).floor() * step, (hi / step).ceil() * step)
            } else {
                let inv = -step;
                ((lo * inv).floor() / inv, (hi * inv).ceil() / inv)
            };
        }
        self
    }
}

/// How the binned field's domain is decided.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DomainPolicy {
    /// Constant domain, independent of the filtered data's extent.
    Fixed { lo: f64, hi: f64, thresholds: usize },
    /// Domain follows the filtered data's min/max; bin edges shift as data
    /// changes, trading comparability for always-filled axes.
    DataExtent { thresholds: usize },
}

impl DomainPolicy {
    pub fn fixed_rer() -> Self {
        DomainPolicy::Fixed {
            lo: RER_DOMAIN.0,
            hi: RER_DOMAIN.1,
            thresholds: FIXED_THRESHOLDS,
        }
    }

    pub fn data_extent() -> Self {
        DomainPolicy::DataExtent {
            thresholds: EXTENT_THRESHOLDS,
        }
    }

    pub fn from_chart_config(cfg: &ChartConfig) -> Self {
        match cfg.domain_mode.as_str() {
            "extent" => DomainPolicy::DataExtent {
                thresholds: cfg.extent_thresholds,
            },
            _ => DomainPolicy::Fixed {
                lo: RER_DOMAIN.0,
                hi: RER_DOMAIN.1,
                thresholds: cfg.fixed_thresholds,
            },
        }
    }

    /// Resolves to concrete `(lo, hi, thresholds)` for the given field
    /// values. `NaN` values are ignored when taking the extent; an empty or
    /// all-`NaN` set falls back to the fixed RER domain.
    pub fn resolve(&self, values: &[f64]) -> (f64, f64, usize) {
        match *self {
            DomainPolicy::Fixed { lo, hi, thresholds } => (lo, hi, thresholds),
            DomainPolicy::DataExtent { thresholds } => {
                let mut lo = f64::INFINITY;
                let mut hi = f64::NEG_INFINITY;
                for &v in values {
                    if v.is_nan() {
                        continue;
                    }
                    if v < lo {
                        lo = v;
                    }
                    if v > hi {
                        hi = v;
                    }
                }
                if lo > hi {
                    (RER_DOMAIN.0, RER_DOMAIN.1, thresholds)
                } else {
                    (lo, hi, thresholds)
                }
            }
        }
    }
}
