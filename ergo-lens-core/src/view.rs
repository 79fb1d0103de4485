use serde::{Deserialize, Serialize};

use crate::gate::{self, SampleSufficiency};
use crate::histogram::{self, Bin};
use crate::record::Record;
use crate::scale::{DomainPolicy, LinearScale};

pub const MALE_BAR_COLOR: &str = "#89CFF0";
pub const FEMALE_BAR_COLOR: &str = "#FFB6C1";
pub const DEFAULT_BAR_COLOR: &str = "#69b3a2";

pub const CHART_TITLE: &str = "Distribution of Respiratory Exchange Rate (RER) by Demographics";
pub const X_AXIS_LABEL: &str = "RER (VCO2 / VO2)";
pub const Y_AXIS_LABEL: &str = "Count";
pub const NO_DATA_MESSAGE: &str = "Not enough data (minimum 1,000 samples required)";

/// Uniform bar hue for one render pass, a pure function of the sex selector
/// value only (never per-bin).
pub fn bar_color(sex_selector: &str) -> &'static str {
    match sex_selector {
        "Male" => MALE_BAR_COLOR,
        "Female" => FEMALE_BAR_COLOR,
        _ => DEFAULT_BAR_COLOR,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLabels {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
    pub total_count: String,
}

impl ChartLabels {
    pub fn for_sample(n: usize) -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            x_axis: X_AXIS_LABEL.to_string(),
            y_axis: Y_AXIS_LABEL.to_string(),
            total_count: format!("Total Count: {n}"),
        }
    }
}

/// Renderer-facing snapshot of one pipeline run. Rebuilt from scratch on
/// every filter change, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewState {
    InsufficientData {
        sample_count: usize,
        labels: ChartLabels,
    },
    Histogram {
        sample_count: usize,
        bins: Vec<Bin>,
        value_scale: LinearScale,
        count_scale: LinearScale,
        labels: ChartLabels,
        bar_color: String,
    },
}

impl ViewState {
    pub fn sample_count(&self) -> usize {
        match self {
            ViewState::InsufficientData { sample_count, .. }
            | ViewState::Histogram { sample_count, .. } => *sample_count,
        }
    }

    /// Combines the gate outcome, bins, scales, labels and bar color into the
    /// view state. When the gate says insufficient, neither bins nor scales
    /// are computed.
    pub fn assemble(filtered: &[Record], sex_selector: &str, policy: &DomainPolicy) -> Self {
        let sample_count = filtered.len();
        let labels = ChartLabels::for_sample(sample_count);
        if gate::assess(sample_count) == SampleSufficiency::Insufficient {
            return ViewState::InsufficientData {
                sample_count,
                labels,
            };
        }
        let values: Vec<f64> = filtered.iter().map(|r| r.rer).collect();
        let (lo, hi, thresholds) = policy.resolve(&values);
        let bins = histogram::build_bins(&values, lo, hi, thresholds);
        let value_scale = LinearScale::unit((lo, hi));
        let count_scale = LinearScale::unit((0.0, histogram::max_count(&bins) as f64)).nice(10);
        ViewState::Histogram {
            sample_count,
            bins,
            value_scale,
            count_scale,
            labels,
            bar_color: bar_color(sex_selector).to_string(),
        }
    }
}
