//! Probability scale transform
//!
//! A probability axis places a probability q at `dist.ppf(q)`, so that data
//! following `dist` line up along a straight line. Probabilities are
//! percentages by default, matching how probability paper is labelled.

use probscale_stats::{Distribution, Normal, StandardNormal};
use serde::{Deserialize, Serialize};

use crate::error::{ProbscaleError, ProbscaleResult};

/// Serializable choice of distribution for a probability scale
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DistributionSpec {
    /// N(0, 1)
    #[default]
    StandardNormal,
    /// N(loc, scale²)
    Normal { loc: f64, scale: f64 },
}

impl DistributionSpec {
    /// Check the parameters describe a real distribution
    pub fn validate(&self) -> ProbscaleResult<()> {
        match *self {
            DistributionSpec::StandardNormal => Ok(()),
            DistributionSpec::Normal { loc, scale } => Normal::new(loc, scale)
                .map(|_| ())
                .ok_or_else(|| {
                    ProbscaleError::InvalidConfig(format!(
                        "normal distribution needs finite loc and positive scale (got loc={}, scale={})",
                        loc, scale
                    ))
                }),
        }
    }
}

impl Distribution for DistributionSpec {
    fn cdf(&self, x: f64) -> f64 {
        match *self {
            DistributionSpec::StandardNormal => StandardNormal.cdf(x),
            DistributionSpec::Normal { loc, scale } => {
                Normal::new(loc, scale).map_or(f64::NAN, |d| d.cdf(x))
            }
        }
    }

    fn ppf(&self, p: f64) -> f64 {
        match *self {
            DistributionSpec::StandardNormal => StandardNormal.ppf(p),
            DistributionSpec::Normal { loc, scale } => {
                Normal::new(loc, scale).map_or(f64::NAN, |d| d.ppf(p))
            }
        }
    }
}

/// Forward and inverse transform of a probability axis
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityTransform<D = DistributionSpec> {
    dist: D,
    as_percentage: bool,
}

impl<D: Distribution> ProbabilityTransform<D> {
    /// Transform over percentages (0, 100)
    pub fn new(dist: D) -> Self {
        Self {
            dist,
            as_percentage: true,
        }
    }

    /// Transform over fractions (0, 1)
    pub fn fractions(dist: D) -> Self {
        Self {
            dist,
            as_percentage: false,
        }
    }

    fn factor(&self) -> f64 {
        if self.as_percentage {
            100.0
        } else {
            1.0
        }
    }

    /// Probability to axis coordinate
    pub fn transform(&self, q: f64) -> f64 {
        self.dist.ppf(q / self.factor())
    }

    /// Axis coordinate back to probability
    pub fn inverse(&self, x: f64) -> f64 {
        self.factor() * self.dist.cdf(x)
    }

    /// Transform a batch of probabilities
    pub fn transform_batch(&self, values: &[f64]) -> Vec<f64> {
        values.iter().map(|&q| self.transform(q)).collect()
    }

    /// The underlying distribution
    pub fn distribution(&self) -> &D {
        &self.dist
    }

    /// Whether probabilities are percentages
    pub fn is_percentage(&self) -> bool {
        self.as_percentage
    }
}

impl Default for ProbabilityTransform<DistributionSpec> {
    fn default() -> Self {
        Self::new(DistributionSpec::default())
    }
}
