//! Probability, percentile and quantile plot data
//!
//! [`probplot`] turns a sample into the coordinates and axes of one of
//! three plots:
//!
//! - **prob**: percentages on a probability scale
//! - **pp**: percentages on a linear 0-100 axis
//! - **qq**: theoretical quantiles on a linear axis
//!
//! The other axis carries the sorted data on a linear or log scale.
//! Rendering is left to the caller.

use std::fmt;
use std::str::FromStr;

use probscale_stats::{Distribution, MissingPolicy, PlotPosOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axis::{prob_limits, AxisConfig, AxisPosition};
use crate::error::{ProbscaleError, ProbscaleResult};
use crate::transform::DistributionSpec;

/// Kind of plot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotType {
    /// Probability plot
    #[default]
    Prob,
    /// Percentile plot
    Pp,
    /// Quantile plot
    Qq,
}

impl FromStr for PlotType {
    type Err = ProbscaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prob" => Ok(PlotType::Prob),
            "pp" => Ok(PlotType::Pp),
            "qq" => Ok(PlotType::Qq),
            _ => Err(ProbscaleError::UnknownOption {
                option: "plot type",
                value: s.to_string(),
                expected: "prob, pp, qq",
            }),
        }
    }
}

impl fmt::Display for PlotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlotType::Prob => "prob",
            PlotType::Pp => "pp",
            PlotType::Qq => "qq",
        })
    }
}

/// Which axis carries probabilities (or quantiles)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbAxis {
    #[default]
    X,
    Y,
}

impl FromStr for ProbAxis {
    type Err = ProbscaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "x" => Ok(ProbAxis::X),
            "y" => Ok(ProbAxis::Y),
            _ => Err(ProbscaleError::UnknownOption {
                option: "probability axis",
                value: s.to_string(),
                expected: "x, y",
            }),
        }
    }
}

/// Scale of the data axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataScale {
    #[default]
    Linear,
    Log,
}

impl FromStr for DataScale {
    type Err = ProbscaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(DataScale::Linear),
            "log" => Ok(DataScale::Log),
            _ => Err(ProbscaleError::UnknownOption {
                option: "data scale",
                value: s.to_string(),
                expected: "linear, log",
            }),
        }
    }
}

/// Options for [`probplot`]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbPlotOptions {
    pub plottype: PlotType,
    pub probax: ProbAxis,
    pub datascale: DataScale,
    /// Label of the probability or quantile axis
    pub problabel: Option<String>,
    /// Label of the data axis
    pub datalabel: Option<String>,
    /// Distribution behind the probability scale and the quantiles
    pub dist: DistributionSpec,
}

impl ProbPlotOptions {
    pub fn new(plottype: PlotType) -> Self {
        Self {
            plottype,
            ..Self::default()
        }
    }

    pub fn with_probax(mut self, probax: ProbAxis) -> Self {
        self.probax = probax;
        self
    }

    pub fn with_datascale(mut self, datascale: DataScale) -> Self {
        self.datascale = datascale;
        self
    }

    pub fn with_problabel(mut self, label: impl Into<String>) -> Self {
        self.problabel = Some(label.into());
        self
    }

    pub fn with_datalabel(mut self, label: impl Into<String>) -> Self {
        self.datalabel = Some(label.into());
        self
    }

    pub fn with_dist(mut self, dist: DistributionSpec) -> Self {
        self.dist = dist;
        self
    }
}

/// Coordinates and axes of a probability plot
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProbPlot {
    /// Horizontal coordinates
    pub x: Vec<f64>,
    /// Vertical coordinates
    pub y: Vec<f64>,
    /// Plotting positions as fractions, paired with the sorted data
    pub probabilities: Vec<f64>,
    /// `dist.ppf` of each plotting position
    pub quantiles: Vec<f64>,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
}

impl ProbPlot {
    /// Number of plotted points
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// `(x, y)` pairs
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }
}

/// Compute the data of a probability, percentile or quantile plot
///
/// Positions are computed with `positions`, except that they are always
/// taken as fractions. A `Keep` missing policy is rejected since unranked
/// values have no place on the plot.
pub fn probplot(
    data: &[f64],
    options: &ProbPlotOptions,
    positions: &PlotPosOptions,
) -> ProbscaleResult<ProbPlot> {
    options.dist.validate()?;
    if positions.missing == MissingPolicy::Keep {
        return Err(ProbscaleError::InvalidConfig(
            "missing values cannot be kept on a probability plot".to_string(),
        ));
    }

    let pos_options = PlotPosOptions {
        as_percentage: false,
        ..*positions
    };
    let result = pos_options.compute(data)?;

    if options.datascale == DataScale::Log && result.data.iter().any(|&v| v <= 0.0) {
        return Err(ProbscaleError::InvalidConfig(
            "log data scale requires positive values".to_string(),
        ));
    }

    let probabilities = result.positions;
    let quantiles = options.dist.ppf_batch(&probabilities);
    let probvals: Vec<f64> = match options.plottype {
        PlotType::Qq => quantiles.clone(),
        PlotType::Prob | PlotType::Pp => probabilities.iter().map(|p| p * 100.0).collect(),
    };

    let (prob_position, data_position) = match options.probax {
        ProbAxis::X => (AxisPosition::Bottom, AxisPosition::Left),
        ProbAxis::Y => (AxisPosition::Left, AxisPosition::Bottom),
    };

    let mut prob_axis = match options.plottype {
        PlotType::Prob => {
            let (lo, hi) = prob_limits(probabilities.len());
            AxisConfig::new(prob_position, lo, hi).with_probability_scale(options.dist)
        }
        PlotType::Pp => AxisConfig::new(prob_position, 0.0, 100.0),
        PlotType::Qq => {
            let (lo, hi) = padded_range(&quantiles);
            AxisConfig::new(prob_position, lo, hi)
        }
    };
    if let Some(label) = &options.problabel {
        prob_axis = prob_axis.with_label(label.clone());
    }

    let mut data_axis = match options.datascale {
        DataScale::Linear => {
            let (lo, hi) = padded_range(&result.data);
            AxisConfig::new(data_position, lo, hi)
        }
        DataScale::Log => {
            let (lo, hi) = log_range(&result.data);
            AxisConfig::new(data_position, lo, hi).with_log_scale()
        }
    };
    if let Some(label) = &options.datalabel {
        data_axis = data_axis.with_label(label.clone());
    }

    debug!(
        plottype = %options.plottype,
        points = probabilities.len(),
        excluded = result.excluded,
        "Computed probability plot"
    );

    let (x, y, x_axis, y_axis) = match options.probax {
        ProbAxis::X => (probvals, result.data, prob_axis, data_axis),
        ProbAxis::Y => (result.data, probvals, data_axis, prob_axis),
    };

    Ok(ProbPlot {
        x,
        y,
        probabilities,
        quantiles,
        x_axis,
        y_axis,
    })
}

/// Range of the finite values, widened when it collapses to a point
fn padded_range(values: &[f64]) -> (f64, f64) {
    let (lo, hi) = finite_range(values).unwrap_or((-1.0, 1.0));
    if hi > lo {
        (lo, hi)
    } else {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.1 };
        (lo - pad, hi + pad)
    }
}

/// Range of positive values, widened by a decade when it collapses
fn log_range(values: &[f64]) -> (f64, f64) {
    let (lo, hi) = finite_range(values).unwrap_or((1.0, 10.0));
    if hi > lo {
        (lo, hi)
    } else {
        (lo / 10.0, hi * 10.0)
    }
}

fn finite_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}
