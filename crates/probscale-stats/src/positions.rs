//! Plotting positions
//!
//! Each order statistic j of a sample of n values is assigned the notional
//! cumulative probability
//!
//! ```text
//! p_j = (j - alpha) / (n + 1 - alpha - beta)
//! ```
//!
//! where (alpha, beta) come from a named preset or are given directly.
//!
//! # Examples
//!
//! ```
//! use probscale_stats::{compute, PlottingPositionType};
//!
//! let data = [3.0, 1.0, 5.0, 2.0, 4.0];
//! let (sorted, positions) = compute(&data, PlottingPositionType::Weibull, false, true).unwrap();
//!
//! assert_eq!(sorted, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! assert!((positions[0] - 1.0 / 6.0).abs() < 1e-12);
//! assert!((positions[4] - 5.0 / 6.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{PositionError, PositionResult};
use crate::postype::{PlottingPositionType, PositionFormula};
use crate::rank::{rank_sorted, TieMethod};

/// What happens to NaN and infinite values
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
    /// Leave them out of the output
    #[default]
    Drop,
    /// Append them after the ranked values, each paired with a NaN position
    Keep,
}

/// Options for a plotting position computation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotPosOptions {
    /// Preset or explicit (alpha, beta)
    pub formula: PositionFormula,
    /// Scale results into (0, 100) instead of (0, 1)
    pub as_percentage: bool,
    /// When false, positions are complemented (largest value nearest 0)
    pub ascending: bool,
    /// Rank assignment for tied values
    pub ties: TieMethod,
    /// Handling of NaN and infinite values
    pub missing: MissingPolicy,
}

impl Default for PlotPosOptions {
    fn default() -> Self {
        Self {
            formula: PositionFormula::default(),
            as_percentage: false,
            ascending: true,
            ties: TieMethod::default(),
            missing: MissingPolicy::default(),
        }
    }
}

impl PlotPosOptions {
    /// Create options with defaults (Cunnane, fractions, ascending)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the formula
    pub fn with_formula(mut self, formula: impl Into<PositionFormula>) -> Self {
        self.formula = formula.into();
        self
    }

    /// Select a preset by name
    pub fn with_postype(mut self, name: &str) -> PositionResult<Self> {
        self.formula = PlottingPositionType::from_name(name)?.into();
        Ok(self)
    }

    /// Use explicit (alpha, beta) parameters
    pub fn with_alpha_beta(mut self, alpha: f64, beta: f64) -> PositionResult<Self> {
        self.formula = PositionFormula::custom(alpha, beta)?;
        Ok(self)
    }

    /// Express positions as percentages
    pub fn as_percentage(mut self) -> Self {
        self.as_percentage = true;
        self
    }

    /// Set the ordering
    pub fn with_ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    /// Set the tie method
    pub fn with_ties(mut self, ties: TieMethod) -> Self {
        self.ties = ties;
        self
    }

    /// Set the missing value policy
    pub fn with_missing(mut self, missing: MissingPolicy) -> Self {
        self.missing = missing;
        self
    }

    /// Compute plotting positions for `data`
    ///
    /// Time complexity: O(n log n) for sorting
    pub fn compute(&self, data: &[f64]) -> PositionResult<PlottingPositions> {
        if data.is_empty() {
            return Err(PositionError::EmptyInput);
        }

        let (alpha, beta) = self.formula.alpha_beta()?;

        let (mut values, missing): (Vec<f64>, Vec<f64>) =
            data.iter().copied().partition(|x| x.is_finite());
        let excluded = missing.len();

        if values.is_empty() {
            return Err(PositionError::AllExcluded { excluded });
        }

        let n = values.len();
        let denominator = n as f64 + 1.0 - alpha - beta;
        if denominator <= 0.0 {
            return Err(PositionError::ZeroDenominator { n, alpha, beta });
        }

        // Stable, so ordinal ties keep input order
        values.sort_by(|a, b| a.total_cmp(b));

        let scale = if self.as_percentage { 100.0 } else { 1.0 };
        let mut positions: Vec<f64> = rank_sorted(&values, self.ties)
            .into_iter()
            .map(|rank| {
                let p = (rank - alpha) / denominator;
                let p = if self.ascending { p } else { 1.0 - p };
                p * scale
            })
            .collect();

        if self.missing == MissingPolicy::Keep {
            positions.extend(std::iter::repeat(f64::NAN).take(excluded));
            values.extend(missing);
        }

        tracing::debug!(
            n,
            excluded,
            alpha,
            beta,
            ascending = self.ascending,
            "computed plotting positions"
        );

        Ok(PlottingPositions {
            data: values,
            positions,
            ranked: n,
            excluded,
            alpha,
            beta,
            as_percentage: self.as_percentage,
            ascending: self.ascending,
        })
    }
}

/// Sorted sample paired with its plotting positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlottingPositions {
    /// Values in ascending order (missing values last when kept)
    pub data: Vec<f64>,
    /// Plotting position of each entry of `data`
    pub positions: Vec<f64>,
    /// Number of values that were ranked
    pub ranked: usize,
    /// Number of NaN/infinite values excluded from ranking
    pub excluded: usize,
    /// Resolved alpha
    pub alpha: f64,
    /// Resolved beta
    pub beta: f64,
    /// Whether positions are percentages
    pub as_percentage: bool,
    /// Whether positions increase with the data
    pub ascending: bool,
}

impl PlottingPositions {
    /// Number of output entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if there are no output entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// (value, position) pairs
    pub fn pairs(&self) -> Vec<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .zip(self.positions.iter().copied())
            .collect()
    }

    /// Positions as fractions in (0, 1), whatever the output scale
    pub fn fractions(&self) -> Vec<f64> {
        if self.as_percentage {
            self.positions.iter().map(|p| p / 100.0).collect()
        } else {
            self.positions.clone()
        }
    }

    /// Split into `(sorted_data, positions)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.data, self.positions)
    }
}

/// Plotting positions as fractions, in ascending order
pub fn plot_pos(
    data: &[f64],
    formula: impl Into<PositionFormula>,
) -> PositionResult<PlottingPositions> {
    PlotPosOptions::new().with_formula(formula).compute(data)
}

/// Sorted data and matching plotting positions
///
/// `sorted_data` is always ascending. With `ascending = false` each
/// position is replaced by its complement (`1 - p`, or `100 - p` as a
/// percentage).
pub fn compute(
    data: &[f64],
    formula: impl Into<PositionFormula>,
    as_percentage: bool,
    ascending: bool,
) -> PositionResult<(Vec<f64>, Vec<f64>)> {
    let options = PlotPosOptions {
        formula: formula.into(),
        as_percentage,
        ascending,
        ..PlotPosOptions::default()
    };
    options.compute(data).map(PlottingPositions::into_parts)
}
