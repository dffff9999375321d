//! Continuous distributions for probability scales
//!
//! A probability scale only needs two things from a distribution: its CDF
//! (to go from data space back to probabilities) and its quantile function
//! (to place a probability on the axis). The standard normal is the default.

use serde::{Deserialize, Serialize};

/// A continuous distribution with a CDF and its inverse
pub trait Distribution {
    /// Cumulative distribution function
    fn cdf(&self, x: f64) -> f64;

    /// Percent point function (inverse CDF)
    ///
    /// Returns -inf at 0, +inf at 1 and NaN outside [0, 1].
    fn ppf(&self, p: f64) -> f64;

    /// Quantiles for a batch of probabilities
    fn ppf_batch(&self, probs: &[f64]) -> Vec<f64> {
        probs.iter().map(|&p| self.ppf(p)).collect()
    }
}

/// Standard normal distribution N(0, 1)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardNormal;

impl Distribution for StandardNormal {
    fn cdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        0.5 * erfc(-x / std::f64::consts::SQRT_2)
    }

    fn ppf(&self, p: f64) -> f64 {
        inverse_normal_cdf(p)
    }
}

/// Normal distribution with location and scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normal {
    loc: f64,
    scale: f64,
}

impl Normal {
    /// Create a normal distribution
    ///
    /// Returns `None` unless `loc` is finite and `scale` is finite and positive.
    pub fn new(loc: f64, scale: f64) -> Option<Self> {
        if !loc.is_finite() || !scale.is_finite() || scale <= 0.0 {
            return None;
        }
        Some(Self { loc, scale })
    }

    /// Mean
    pub fn loc(&self) -> f64 {
        self.loc
    }

    /// Standard deviation
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl Distribution for Normal {
    fn cdf(&self, x: f64) -> f64 {
        StandardNormal.cdf((x - self.loc) / self.scale)
    }

    fn ppf(&self, p: f64) -> f64 {
        self.loc + self.scale * StandardNormal.ppf(p)
    }
}

/// Complementary error function
///
/// Chebyshev fit with fractional error below 1.2e-7 everywhere.
fn erfc(x: f64) -> f64 {
    let z = x.abs();
    let t = 1.0 / (1.0 + 0.5 * z);
    let poly = -1.265_512_23
        + t * (1.000_023_68
            + t * (0.374_091_96
                + t * (0.096_784_18
                    + t * (-0.186_288_06
                        + t * (0.278_868_07
                            + t * (-1.135_203_98
                                + t * (1.488_515_87
                                    + t * (-0.822_152_23 + t * 0.170_872_77))))))));
    let r = t * (-z * z + poly).exp();
    if x >= 0.0 {
        r
    } else {
        2.0 - r
    }
}

/// Inverse of the standard normal CDF
///
/// Acklam's rational approximation, relative error below 1.15e-9.
fn inverse_normal_cdf(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_69e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838,
        -2.549_732_539_343_734,
        4.374_664_141_464_968,
        2.938_163_982_698_783,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996,
        3.754_408_661_907_416,
    ];
    const P_LOW: f64 = 0.024_25;

    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    let tail = |q: f64| {
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };

    if p < P_LOW {
        tail((-2.0 * p.ln()).sqrt())
    } else if p > 1.0 - P_LOW {
        -tail((-2.0 * (1.0 - p).ln()).sqrt())
    } else {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdf_known_values() {
        let n = StandardNormal;
        assert!((n.cdf(0.0) - 0.5).abs() < 1e-7);
        assert!((n.cdf(1.0) - 0.841_344_746).abs() < 1e-6);
        assert!((n.cdf(-1.959_963_985) - 0.025).abs() < 1e-6);
        assert!(n.cdf(f64::INFINITY) == 1.0);
        assert!(n.cdf(f64::NEG_INFINITY) == 0.0);
    }

    #[test]
    fn test_ppf_known_values() {
        let n = StandardNormal;
        assert!(n.ppf(0.5).abs() < 1e-9);
        assert!((n.ppf(0.975) - 1.959_963_985).abs() < 1e-6);
        assert!((n.ppf(0.01) + 2.326_347_874).abs() < 1e-6);
        assert_eq!(n.ppf(0.0), f64::NEG_INFINITY);
        assert_eq!(n.ppf(1.0), f64::INFINITY);
        assert!(n.ppf(1.5).is_nan());
        assert!(n.ppf(-0.1).is_nan());
    }

    #[test]
    fn test_ppf_inverts_cdf() {
        let n = StandardNormal;
        for i in -30..=30 {
            let x = i as f64 / 10.0;
            assert!((n.ppf(n.cdf(x)) - x).abs() < 1e-5, "x = {}", x);
        }
    }

    #[test]
    fn test_ppf_is_antisymmetric() {
        let n = StandardNormal;
        for p in [0.001, 0.02, 0.1, 0.3] {
            assert!((n.ppf(p) + n.ppf(1.0 - p)).abs() < 1e-8);
        }
    }

    #[test]
    fn test_normal_location_scale() {
        let d = Normal::new(5.0, 1.25).unwrap();
        assert_eq!((d.loc(), d.scale()), (5.0, 1.25));
        assert!((d.ppf(0.5) - 5.0).abs() < 1e-9);
        assert!((d.cdf(5.0) - 0.5).abs() < 1e-7);
        assert!((d.ppf(0.975) - (5.0 + 1.25 * 1.959_963_985)).abs() < 1e-5);
    }

    #[test]
    fn test_normal_rejects_bad_scale() {
        assert!(Normal::new(0.0, 0.0).is_none());
        assert!(Normal::new(0.0, -1.0).is_none());
        assert!(Normal::new(f64::NAN, 1.0).is_none());
    }
}
