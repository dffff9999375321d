//! Plotting position presets
//!
//! The plotting position of rank j in a sample of n values is
//! `(j - alpha) / (n + 1 - alpha - beta)`. Common (alpha, beta) pairs have
//! names; they are collected here in a table that is built once and never
//! modified.
//!
//! | name             | alpha  | beta   |
//! |------------------|--------|--------|
//! | type 4           | 0      | 1      |
//! | type 5 / hazen   | 0.5    | 0.5    |
//! | type 6 / weibull | 0      | 0      |
//! | type 7           | 1      | 1      |
//! | type 8           | 1/3    | 1/3    |
//! | type 9 / blom    | 0.375  | 0.375  |
//! | median           | 0.3175 | 0.3175 |
//! | apl / pwm        | 0.35   | 0.35   |
//! | cunnane          | 0.4    | 0.4    |
//! | gringorten       | 0.44   | 0.44   |

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::{PositionError, PositionResult};

/// Named plotting position formulas
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlottingPositionType {
    /// Linear interpolation of the empirical CDF
    Type4,
    /// Piecewise linear interpolation (type 5)
    Hazen,
    /// Unbiased exceedance probability for all distributions (type 6)
    Weibull,
    /// R's default; puts the extremes at exactly 0 and 1
    Type7,
    /// Approximately median-unbiased
    Type8,
    /// Approximately unbiased for normal data (type 9)
    Blom,
    /// Median exceedance probabilities, as used by `scipy.stats.probplot`
    Median,
    /// Used with probability-weighted moments (pwm)
    Apl,
    /// Nearly unbiased quantiles for normal data
    Cunnane,
    /// Used for Gumbel distributions
    Gringorten,
}

lazy_static! {
    static ref PRESETS: HashMap<&'static str, PlottingPositionType> = {
        use PlottingPositionType::*;
        let mut m = HashMap::new();
        m.insert("type 4", Type4);
        m.insert("type 5", Hazen);
        m.insert("hazen", Hazen);
        m.insert("type 6", Weibull);
        m.insert("weibull", Weibull);
        m.insert("type 7", Type7);
        m.insert("type 8", Type8);
        m.insert("type 9", Blom);
        m.insert("blom", Blom);
        m.insert("median", Median);
        m.insert("apl", Apl);
        m.insert("pwm", Apl);
        m.insert("cunnane", Cunnane);
        m.insert("gringorten", Gringorten);
        m
    };
}

impl PlottingPositionType {
    /// Every preset, in table order
    pub const ALL: [PlottingPositionType; 10] = [
        PlottingPositionType::Type4,
        PlottingPositionType::Hazen,
        PlottingPositionType::Weibull,
        PlottingPositionType::Type7,
        PlottingPositionType::Type8,
        PlottingPositionType::Blom,
        PlottingPositionType::Median,
        PlottingPositionType::Apl,
        PlottingPositionType::Cunnane,
        PlottingPositionType::Gringorten,
    ];

    /// The (alpha, beta) pair for this preset
    pub fn parameters(self) -> (f64, f64) {
        match self {
            PlottingPositionType::Type4 => (0.0, 1.0),
            PlottingPositionType::Hazen => (0.5, 0.5),
            PlottingPositionType::Weibull => (0.0, 0.0),
            PlottingPositionType::Type7 => (1.0, 1.0),
            PlottingPositionType::Type8 => (1.0 / 3.0, 1.0 / 3.0),
            PlottingPositionType::Blom => (0.375, 0.375),
            PlottingPositionType::Median => (0.3175, 0.3175),
            PlottingPositionType::Apl => (0.35, 0.35),
            PlottingPositionType::Cunnane => (0.4, 0.4),
            PlottingPositionType::Gringorten => (0.44, 0.44),
        }
    }

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            PlottingPositionType::Type4 => "type 4",
            PlottingPositionType::Hazen => "hazen",
            PlottingPositionType::Weibull => "weibull",
            PlottingPositionType::Type7 => "type 7",
            PlottingPositionType::Type8 => "type 8",
            PlottingPositionType::Blom => "blom",
            PlottingPositionType::Median => "median",
            PlottingPositionType::Apl => "apl",
            PlottingPositionType::Cunnane => "cunnane",
            PlottingPositionType::Gringorten => "gringorten",
        }
    }

    /// All names (canonical and aliases) that resolve to this preset
    pub fn aliases(self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = PRESETS
            .iter()
            .filter(|(_, preset)| **preset == self)
            .map(|(&name, _)| name)
            .collect();
        names.sort_unstable();
        names
    }

    /// Look up a preset by name
    ///
    /// Case-insensitive; `_` and `-` count as spaces and `type6` is read as
    /// `type 6`.
    pub fn from_name(name: &str) -> PositionResult<Self> {
        PRESETS
            .get(normalize_name(name).as_str())
            .copied()
            .ok_or_else(|| PositionError::UnknownPreset {
                name: name.to_string(),
            })
    }
}

impl Default for PlottingPositionType {
    fn default() -> Self {
        PlottingPositionType::Cunnane
    }
}

impl fmt::Display for PlottingPositionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlottingPositionType {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for PlottingPositionType {
    type Error = PositionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value)
    }
}

impl From<PlottingPositionType> for String {
    fn from(value: PlottingPositionType) -> Self {
        value.name().to_string()
    }
}

fn normalize_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase().replace(['_', '-'], " ");
    let joined = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    match joined.strip_prefix("type") {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => format!("type {}", rest),
        _ => joined,
    }
}

/// Either a named preset or an explicit (alpha, beta) pair
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PositionFormula {
    Preset(PlottingPositionType),
    Custom { alpha: f64, beta: f64 },
}

impl PositionFormula {
    /// Build a custom formula, checking both parameters are within [0, 1]
    pub fn custom(alpha: f64, beta: f64) -> PositionResult<Self> {
        check_parameter("alpha", alpha)?;
        check_parameter("beta", beta)?;
        Ok(PositionFormula::Custom { alpha, beta })
    }

    /// Resolve to a validated (alpha, beta) pair
    pub fn alpha_beta(&self) -> PositionResult<(f64, f64)> {
        match *self {
            PositionFormula::Preset(preset) => Ok(preset.parameters()),
            PositionFormula::Custom { alpha, beta } => {
                check_parameter("alpha", alpha)?;
                check_parameter("beta", beta)?;
                Ok((alpha, beta))
            }
        }
    }
}

impl Default for PositionFormula {
    fn default() -> Self {
        PositionFormula::Preset(PlottingPositionType::default())
    }
}

impl From<PlottingPositionType> for PositionFormula {
    fn from(value: PlottingPositionType) -> Self {
        PositionFormula::Preset(value)
    }
}

impl From<(f64, f64)> for PositionFormula {
    fn from((alpha, beta): (f64, f64)) -> Self {
        PositionFormula::Custom { alpha, beta }
    }
}

impl FromStr for PositionFormula {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlottingPositionType::from_name(s).map(PositionFormula::Preset)
    }
}

impl fmt::Display for PositionFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionFormula::Preset(preset) => write!(f, "{}", preset),
            PositionFormula::Custom { alpha, beta } => {
                write!(f, "alpha={}, beta={}", alpha, beta)
            }
        }
    }
}

fn check_parameter(name: &'static str, value: f64) -> PositionResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(PositionError::ParameterOutOfRange { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_cunnane() {
        assert_eq!(PositionFormula::default().alpha_beta().unwrap(), (0.4, 0.4));
    }

    #[test]
    fn test_name_normalization() {
        assert_eq!(normalize_name("  Type_6 "), "type 6");
        assert_eq!(normalize_name("TYPE-9"), "type 9");
        assert_eq!(normalize_name("type8"), "type 8");
        assert_eq!(normalize_name("Weibull"), "weibull");
    }

    #[test]
    fn test_every_preset_resolves_by_its_name() {
        for preset in PlottingPositionType::ALL {
            assert_eq!(PlottingPositionType::from_name(preset.name()).unwrap(), preset);
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!(PlottingPositionType::Apl.aliases(), vec!["apl", "pwm"]);
        assert_eq!(PlottingPositionType::Type7.aliases(), vec!["type 7"]);
    }

    #[test]
    fn test_custom_rejects_out_of_range() {
        assert!(PositionFormula::custom(-0.1, 0.0).is_err());
        assert!(PositionFormula::custom(0.0, 1.01).is_err());
        assert!(PositionFormula::custom(f64::NAN, 0.5).is_err());
        assert!(PositionFormula::custom(1.0, 0.0).is_ok());
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&PlottingPositionType::Type8).unwrap();
        assert_eq!(json, "\"type 8\"");

        let formula: PositionFormula = serde_json::from_str("\"Blom\"").unwrap();
        assert_eq!(formula, PositionFormula::Preset(PlottingPositionType::Blom));

        let formula: PositionFormula =
            serde_json::from_str(r#"{"alpha": 0.2, "beta": 0.3}"#).unwrap();
        assert_eq!(formula, PositionFormula::Custom { alpha: 0.2, beta: 0.3 });
    }
}
