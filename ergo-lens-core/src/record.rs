use serde::{Deserialize, Serialize};

/// One subject-observation from the treadmill ergometry dataset.
///
/// Every field is coerced from raw CSV text to `f64` exactly once at load
/// time. An unparsable value becomes `NaN`, which fails every bounded filter
/// comparison and is clipped from binning, so such a record only ever matches
/// the `"all"` selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Respiratory exchange rate, VCO2 / VO2 (unitless ratio).
    pub rer: f64,
    /// Age in years.
    pub age: f64,
    /// Binary code: 0 = male, 1 = female.
    pub sex: f64,
    /// Body weight, kg.
    pub weight: f64,
    /// Height, cm.
    pub height: f64,
    /// Ambient temperature, °C.
    pub temperature: f64,
    /// Treadmill speed, km/h.
    pub speed: f64,
    /// Binary code: 0 = running, 1 = resting/cooldown.
    pub resting: f64,
}

/// Raw text row as it appears in the CSV, before coercion.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawRecord {
    #[serde(rename = "RER", default)]
    pub rer: String,
    #[serde(rename = "Age", default)]
    pub age: String,
    #[serde(rename = "Sex", default)]
    pub sex: String,
    #[serde(rename = "Weight", default)]
    pub weight: String,
    #[serde(rename = "Height", default)]
    pub height: String,
    #[serde(rename = "Temperature", default)]
    pub temperature: String,
    #[serde(rename = "Speed", default)]
    pub speed: String,
    #[serde(rename = "Resting", default)]
    pub resting: String,
}

fn coerce(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

impl Record {
    pub(crate) fn from_raw(raw: &RawRecord) -> Self {
        Self {
            rer: coerce(&raw.rer),
            age: coerce(&raw.age),
            sex: coerce(&raw.sex),
            weight: coerce(&raw.weight),
            height: coerce(&raw.height),
            temperature: coerce(&raw.temperature),
            speed: coerce(&raw.speed),
            resting: coerce(&raw.resting),
        }
    }
}
