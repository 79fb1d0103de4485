use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Universal sentinel selector value.
pub const ALL: &str = "all";

pub const AGE_OPTIONS: &[&str] = &["all", "10s", "20s", "30s", "40s", "50+"];
pub const SEX_OPTIONS: &[&str] = &["all", "Male", "Female"];
pub const WEIGHT_OPTIONS: &[&str] = &["all", "Under 60", "60-70", "70-80", "80-90", "90+"];
pub const HEIGHT_OPTIONS: &[&str] = &["all", "Under 165", "165-175", "175-185", "185+"];
pub const TEMPERATURE_OPTIONS: &[&str] = &["all", "Under 20", "20-22.5", "22.5-25", "25+"];
pub const SPEED_OPTIONS: &[&str] = &["all", "5-10", "10-15", "15+"];
pub const RESTING_OPTIONS: &[&str] = &["running", "resting"];

// Each dimension predicate is a pure function of (selector value, field
// value). `"all"` always matches; unrecognized selector values take the
// dimension's open-ended default branch, never an error. `NaN` field values
// fail every branch except `"all"`.

pub fn age_matches(selector: &str, age: f64) -> bool {
    match selector {
        ALL => true,
        "10s" => age >= 10.0 && age < 20.0,
        "20s" => age >= 20.0 && age < 30.0,
        "30s" => age >= 30.0 && age < 40.0,
        "40s" => age >= 40.0 && age < 50.0,
        _ => age >= 50.0,
    }
}

pub fn sex_matches(selector: &str, sex: f64) -> bool {
    match selector {
        ALL => true,
        "Male" => sex == 0.0,
        _ => sex == 1.0,
    }
}

pub fn weight_matches(selector: &str, weight: f64) -> bool {
    match selector {
        ALL => true,
        "Under 60" => weight < 60.0,
        "60-70" => weight >= 60.0 && weight < 70.0,
        "70-80" => weight >= 70.0 && weight < 80.0,
        "80-90" => weight >= 80.0 && weight < 90.0,
        _ => weight >= 90.0,
    }
}

pub fn height_matches(selector: &str, height: f64) -> bool {
    match selector {
        ALL => true,
        "Under 165" => height < 165.0,
        "165-175" => height >= 165.0 && height < 175.0,
        "175-185" => height >= 175.0 && height < 185.0,
        _ => height >= 185.0,
    }
}

pub fn temperature_matches(selector: &str, temperature: f64) -> bool {
    match selector {
        ALL => true,
        "Under 20" => temperature < 20.0,
        "20-22.5" => temperature >= 20.0 && temperature < 22.5,
        "22.5-25" => temperature >= 22.5 && temperature < 25.0,
        _ => temperature >= 25.0,
    }
}

pub fn speed_matches(selector: &str, speed: f64) -> bool {
    match selector {
        ALL => true,
        "5-10" => speed >= 5.0 && speed < 10.0,
        "10-15" => speed >= 10.0 && speed < 15.0,
        _ => speed >= 15.0,
    }
}

/// Anything other than `"running"` (including unrecognized values) falls to
/// the resting branch.
pub fn resting_matches(selector: &str, resting: f64) -> bool {
    match selector {
        "running" => resting == 0.0,
        _ => resting == 1.0,
    }
}

/// The seven filterable dimensions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Age,
    Sex,
    Weight,
    Height,
    Temperature,
    Speed,
    Resting,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Dimension::Age,
        Dimension::Sex,
        Dimension::Weight,
        Dimension::Height,
        Dimension::Temperature,
        Dimension::Speed,
        Dimension::Resting,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Age => "Age",
            Dimension::Sex => "Sex",
            Dimension::Weight => "Weight",
            Dimension::Height => "Height",
            Dimension::Temperature => "Temperature",
            Dimension::Speed => "Speed",
            Dimension::Resting => "Activity",
        }
    }

    pub fn options(self) -> &'static [&'static str] {
        match self {
            Dimension::Age => AGE_OPTIONS,
            Dimension::Sex => SEX_OPTIONS,
            Dimension::Weight => WEIGHT_OPTIONS,
            Dimension::Height => HEIGHT_OPTIONS,
            Dimension::Temperature => TEMPERATURE_OPTIONS,
            Dimension::Speed => SPEED_OPTIONS,
            Dimension::Resting => RESTING_OPTIONS,
        }
    }

    pub fn help(self) -> Option<&'static str> {
        match self {
            Dimension::Resting => Some(
                "Cooldown refers to the final phase of the run, during which \
                 they ran at 5 km/h after reaching max speed.",
            ),
            Dimension::Speed => Some(
                "The running speed was strictly increasing throughout the \
                 experiment, so higher speeds are related to longer running times.",
            ),
            _ => None,
        }
    }
}

/// Current selector value per dimension.
///
/// Invariant: while the resting selector resolves to the resting branch, the
/// speed selector is pinned to `"all"`, since resting observations have no
/// meaningful speed bucket. The rule lives here, in the setters, not in the
/// speed predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    age: String,
    sex: String,
    weight: String,
    height: String,
    temperature: String,
    speed: String,
    resting: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            age: ALL.into(),
            sex: ALL.into(),
            weight: ALL.into(),
            height: ALL.into(),
            temperature: ALL.into(),
            speed: ALL.into(),
            resting: "running".into(),
        }
    }
}

impl FilterState {
    pub fn value(&self, dim: Dimension) -> &str {
        match dim {
            Dimension::Age => &self.age,
            Dimension::Sex => &self.sex,
            Dimension::Weight => &self.weight,
            Dimension::Height => &self.height,
            Dimension::Temperature => &self.temperature,
            Dimension::Speed => &self.speed,
            Dimension::Resting => &self.resting,
        }
    }

    pub fn sex(&self) -> &str {
        &self.sex
    }

    /// False while the resting selector resolves to resting; the speed
    /// control should be rendered disabled and set() calls on it ignored.
    pub fn speed_enabled(&self) -> bool {
        self.resting == "running"
    }

    pub fn set(&mut self, dim: Dimension, value: &str) {
        match dim {
            Dimension::Age => self.age = value.into(),
            Dimension::Sex => self.sex = value.into(),
            Dimension::Weight => self.weight = value.into(),
            Dimension::Height => self.height = value.into(),
            Dimension::Temperature => self.temperature = value.into(),
            Dimension::Speed => {
                if self.speed_enabled() {
                    self.speed = value.into();
                }
            }
            Dimension::Resting => {
                self.resting = value.into();
                if !self.speed_enabled() {
                    self.speed = ALL.into();
                }
            }
        }
    }

    /// Logical AND of all seven dimension predicates.
    pub fn matches(&self, r: &Record) -> bool {
        age_matches(&self.age, r.age)
            && sex_matches(&self.sex, r.sex)
            && weight_matches(&self.weight, r.weight)
            && height_matches(&self.height, r.height)
            && temperature_matches(&self.temperature, r.temperature)
            && speed_matches(&self.speed, r.speed)
            && resting_matches(&self.resting, r.resting)
    }

    /// Filters the dataset, preserving input order. Re-evaluated in full on
    /// every selector change; no partial-result caching.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records.iter().filter(|r| self.matches(r)).copied().collect()
    }
}
