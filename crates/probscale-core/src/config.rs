//! Configuration for probscale
//!
//! Plotting position and plot options gathered in one serde structure that
//! can be read from TOML or JSON. Every field has a default, so a file only
//! needs the settings it changes:
//!
//! ```toml
//! [positions]
//! formula = "weibull"
//! ascending = false
//!
//! [plot]
//! plottype = "qq"
//! probax = "y"
//! ```

use std::path::Path;

use probscale_stats::PlotPosOptions;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProbscaleError, ProbscaleResult};
use crate::probplot::ProbPlotOptions;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbscaleConfig {
    /// Plotting position settings
    pub positions: PlotPosOptions,
    /// Probability plot settings
    pub plot: ProbPlotOptions,
}

impl ProbscaleConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    #[cfg(feature = "toml-config")]
    pub fn from_toml(toml_str: &str) -> ProbscaleResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    #[cfg(feature = "toml-config")]
    pub fn to_toml(&self) -> ProbscaleResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> ProbscaleResult<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> ProbscaleResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and validate a configuration file
    ///
    /// The format follows the extension: `.toml` or `.json`.
    pub fn load(path: impl AsRef<Path>) -> ProbscaleResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        let text = std::fs::read_to_string(path)?;

        let config = match extension.as_str() {
            "json" => Self::from_json(&text)?,
            #[cfg(feature = "toml-config")]
            "toml" => Self::from_toml(&text)?,
            #[cfg(not(feature = "toml-config"))]
            "toml" => {
                return Err(ProbscaleError::InvalidConfig(
                    "TOML support is not enabled".to_string(),
                ))
            }
            _ => {
                return Err(ProbscaleError::UnknownOption {
                    option: "config format",
                    value: extension,
                    expected: "toml, json",
                })
            }
        };
        config.validate()?;

        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> ProbscaleResult<()> {
        self.positions.formula.alpha_beta()?;
        self.plot.dist.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probplot::{PlotType, ProbAxis};
    use crate::transform::DistributionSpec;
    use probscale_stats::{PlottingPositionType, PositionFormula, TieMethod};

    #[test]
    fn test_default_config() {
        let config = ProbscaleConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.positions.ascending);
        assert_eq!(config.plot.plottype, PlotType::Prob);
    }

    #[test]
    fn test_json_serialization() {
        let mut config = ProbscaleConfig::default();
        config.positions.formula = PositionFormula::Custom {
            alpha: 0.3,
            beta: 0.2,
        };
        config.plot.probax = ProbAxis::Y;
        let json = config.to_json().unwrap();
        let parsed = ProbscaleConfig::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[cfg(feature = "toml-config")]
    #[test]
    fn test_partial_toml() {
        let config = ProbscaleConfig::from_toml(
            r#"
[positions]
formula = "Type 6"
ties = "ordinal"

[plot]
plottype = "pp"
"#,
        )
        .unwrap();
        assert_eq!(
            config.positions.formula,
            PositionFormula::Preset(PlottingPositionType::Weibull)
        );
        assert_eq!(config.positions.ties, TieMethod::Ordinal);
        assert!(config.positions.ascending);
        assert_eq!(config.plot.plottype, PlotType::Pp);
        assert_eq!(config.plot.dist, DistributionSpec::StandardNormal);
    }

    #[cfg(feature = "toml-config")]
    #[test]
    fn test_toml_round_trip() {
        let mut config = ProbscaleConfig::default();
        config.plot.dist = DistributionSpec::Normal {
            loc: 5.0,
            scale: 1.25,
        };
        config.plot.problabel = Some("Non-exceedance probability".to_string());
        let toml_str = config.to_toml().unwrap();
        assert_eq!(ProbscaleConfig::from_toml(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_invalid_alpha() {
        let mut config = ProbscaleConfig::default();
        config.positions.formula = PositionFormula::Custom {
            alpha: 1.5,
            beta: 0.4,
        };
        assert!(matches!(
            config.validate(),
            Err(ProbscaleError::Positions(_))
        ));
    }

    #[test]
    fn test_invalid_distribution() {
        let mut config = ProbscaleConfig::default();
        config.plot.dist = DistributionSpec::Normal {
            loc: 0.0,
            scale: 0.0,
        };
        assert!(matches!(
            config.validate(),
            Err(ProbscaleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_unknown_preset_in_json() {
        let result = ProbscaleConfig::from_json(r#"{"positions": {"formula": "nonsense"}}"#);
        assert!(matches!(result, Err(ProbscaleError::Json(_))));
    }
}
