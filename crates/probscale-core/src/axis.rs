//! Axes for probability plots
//!
//! Provides scale types (including probability scales), tick mark
//! calculation, label formatting and the default limits of a probability
//! axis. Probability axes are always expressed in percent.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::transform::{DistributionSpec, ProbabilityTransform};

/// Tick values offered on a probability axis, in percent
const PROBABILITY_LADDER: [f64; 23] = [
    0.001, 0.01, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0,
    95.0, 98.0, 99.0, 99.5, 99.9, 99.99, 99.999,
];

/// Axis orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Left,
    Right,
    Top,
    Bottom,
}

impl AxisPosition {
    /// Check if this is a vertical axis
    pub fn is_vertical(&self) -> bool {
        matches!(self, AxisPosition::Left | AxisPosition::Right)
    }

    /// Check if this is a horizontal axis
    pub fn is_horizontal(&self) -> bool {
        !self.is_vertical()
    }
}

/// Scale type for axis
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    Linear,
    Log10,
    /// Percentages placed at the quantiles of a distribution
    Probability(DistributionSpec),
}

impl ScaleType {
    pub fn is_probability(&self) -> bool {
        matches!(self, ScaleType::Probability(_))
    }
}

/// Configuration for an axis
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Axis position
    pub position: AxisPosition,

    /// Scale type
    pub scale: ScaleType,

    /// Data range
    pub min: f64,
    pub max: f64,

    /// Label for the axis
    pub label: Option<String>,

    /// Number format string (e.g., ".2f", ".1e")
    pub format: Option<String>,

    /// Number of minor ticks between major ticks
    pub minor_ticks: usize,
}

impl AxisConfig {
    /// Create a new linear axis
    pub fn new(position: AxisPosition, min: f64, max: f64) -> Self {
        Self {
            position,
            scale: ScaleType::Linear,
            min,
            max,
            label: None,
            format: None,
            minor_ticks: 4,
        }
    }

    /// Set the axis label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set logarithmic scale
    pub fn with_log_scale(mut self) -> Self {
        self.scale = ScaleType::Log10;
        self
    }

    /// Set a probability scale; limits are percentages
    pub fn with_probability_scale(mut self, dist: DistributionSpec) -> Self {
        self.scale = ScaleType::Probability(dist);
        self
    }

    /// Set number format
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the number of minor ticks between major ticks
    pub fn with_minor_ticks(mut self, minor_ticks: usize) -> Self {
        self.minor_ticks = minor_ticks;
        self
    }

    /// Replace the axis limits
    pub fn with_limits(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Position of `value` along the axis, 0.0 at `min` and 1.0 at `max`
    pub fn normalize(&self, value: f64) -> f64 {
        let (lo, hi, v) = match self.scale {
            ScaleType::Linear => (self.min, self.max, value),
            ScaleType::Log10 => (self.min.log10(), self.max.log10(), value.log10()),
            ScaleType::Probability(dist) => {
                let t = ProbabilityTransform::new(dist);
                (t.transform(self.min), t.transform(self.max), t.transform(value))
            }
        };
        (v - lo) / (hi - lo)
    }

    /// Inverse of [`AxisConfig::normalize`]
    pub fn denormalize(&self, t: f64) -> f64 {
        match self.scale {
            ScaleType::Linear => self.min + t * (self.max - self.min),
            ScaleType::Log10 => {
                let (lo, hi) = (self.min.log10(), self.max.log10());
                10.0_f64.powf(lo + t * (hi - lo))
            }
            ScaleType::Probability(dist) => {
                let tr = ProbabilityTransform::new(dist);
                let (lo, hi) = (tr.transform(self.min), tr.transform(self.max));
                tr.inverse(lo + t * (hi - lo))
            }
        }
    }
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self::new(AxisPosition::Bottom, 0.0, 1.0)
    }
}

/// A tick mark on an axis
#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    /// Position in data coordinates
    pub value: f64,

    /// Position in normalized coordinates (0.0 to 1.0)
    pub normalized: f64,

    /// Whether this is a major tick
    pub is_major: bool,

    /// Label text (only for major ticks)
    pub label: Option<String>,
}

/// Calculate tick marks for an axis
pub fn calculate_ticks(config: &AxisConfig) -> Vec<TickMark> {
    let has_range = config.max > config.min;
    if !has_range {
        warn!(min = config.min, max = config.max, "Empty axis range, no ticks");
        return vec![];
    }
    let mut ticks = match config.scale {
        ScaleType::Linear => linear_ticks(config),
        ScaleType::Log10 => log_ticks(config),
        ScaleType::Probability(_) => probability_ticks(config),
    };
    ticks.sort_by(|a, b| a.value.total_cmp(&b.value));
    ticks
}

fn linear_ticks(config: &AxisConfig) -> Vec<TickMark> {
    let range = config.max - config.min;

    let rough_step = range / 5.0;
    let magnitude = 10.0_f64.powf(rough_step.log10().floor());
    let residual = rough_step / magnitude;
    let step = magnitude
        * if residual <= 1.5 {
            1.0
        } else if residual <= 3.0 {
            2.0
        } else if residual <= 7.0 {
            5.0
        } else {
            10.0
        };
    if !step.is_finite() || step <= 0.0 {
        warn!(min = config.min, max = config.max, "Axis range too wide for linear ticks");
        return vec![];
    }

    let first = (config.min / step - 1e-9).ceil() as i64;
    let last = (config.max / step + 1e-9).floor() as i64;

    let mut ticks = Vec::new();
    for k in first..=last {
        let value = k as f64 * step;
        ticks.push(TickMark {
            value,
            normalized: config.normalize(value).clamp(0.0, 1.0),
            is_major: true,
            label: Some(format_number(value, config.format.as_deref())),
        });

        if config.minor_ticks > 0 {
            let minor_step = step / (config.minor_ticks + 1) as f64;
            for i in 1..=config.minor_ticks {
                let minor = value + minor_step * i as f64;
                let normalized = config.normalize(minor);
                if normalized > 0.0 && normalized < 1.0 {
                    ticks.push(TickMark {
                        value: minor,
                        normalized,
                        is_major: false,
                        label: None,
                    });
                }
            }
        }
    }
    ticks
}

fn log_ticks(config: &AxisConfig) -> Vec<TickMark> {
    if config.min <= 0.0 {
        warn!(min = config.min, "Log axis needs a positive lower limit");
        return vec![];
    }

    let start_decade = config.min.log10().floor() as i32;
    let end_decade = config.max.log10().ceil() as i32;
    let contains = |v: f64| v >= config.min && v <= config.max;

    let mut ticks = Vec::new();
    for decade in start_decade..=end_decade {
        let value = 10.0_f64.powi(decade);
        if contains(value) {
            ticks.push(TickMark {
                value,
                normalized: config.normalize(value),
                is_major: true,
                label: Some(format!("10{}", superscript(decade))),
            });
        }

        // Minor ticks at 2, 3, ..., 9
        if config.minor_ticks > 0 {
            for factor in 2..=9 {
                let minor = value * factor as f64;
                if contains(minor) {
                    ticks.push(TickMark {
                        value: minor,
                        normalized: config.normalize(minor),
                        is_major: false,
                        label: None,
                    });
                }
            }
        }
    }
    ticks
}

fn probability_ticks(config: &AxisConfig) -> Vec<TickMark> {
    PROBABILITY_LADDER
        .iter()
        .copied()
        .filter(|&q| q >= config.min - 1e-12 && q <= config.max + 1e-12)
        .map(|q| TickMark {
            value: q,
            normalized: config.normalize(q).clamp(0.0, 1.0),
            is_major: true,
            label: Some(format_probability(q, true)),
        })
        .collect()
}

/// Format a number for display
pub fn format_number(value: f64, format: Option<&str>) -> String {
    match format {
        Some(fmt) if fmt.ends_with('e') || fmt.ends_with('E') => {
            format!("{:e}", value)
        }
        Some(fmt) if fmt.contains('.') => {
            let precision: usize = fmt
                .chars()
                .skip_while(|c| *c != '.')
                .skip(1)
                .take_while(|c| c.is_ascii_digit())
                .collect::<String>()
                .parse()
                .unwrap_or(2);
            format!("{:.prec$}", value, prec = precision)
        }
        _ => {
            if value == 0.0 {
                "0".to_string()
            } else if value.abs() >= 10000.0 || value.abs() < 0.01 {
                format!("{:.2e}", value)
            } else if value.fract().abs() < 1e-10 {
                format!("{:.0}", value)
            } else {
                format!("{:.2}", value)
            }
        }
    }
}

/// Shortest label that still identifies a probability
///
/// Percentages print as `0.1`, `1`, `50`, `99.9`; fractions as `0.001`,
/// `0.5`, `0.999`. Never drops a significant digit, so `99.99` is not
/// shown as `100`.
pub fn format_probability(value: f64, as_percentage: bool) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let tolerance = if as_percentage { 1e-9 } else { 1e-11 };
    for decimals in 0..=8 {
        let label = format!("{:.*}", decimals, value);
        let close = label
            .parse::<f64>()
            .map(|parsed| (parsed - value).abs() <= tolerance)
            .unwrap_or(false);
        if close {
            return label;
        }
    }
    value.to_string()
}

/// Default limits of a probability axis holding `n` points, in percent
///
/// Small samples get (10, 90) or (5, 95); larger ones widen by a decade
/// of tail probability for each tenfold increase in n beyond 100.
pub fn prob_limits(n: usize) -> (f64, f64) {
    if n <= 5 {
        (10.0, 90.0)
    } else if n <= 10 {
        (5.0, 95.0)
    } else {
        let exponent = ((n as f64).log10() - 2.0).ceil();
        let m = 10.0_f64.powf(-exponent);
        (m, 100.0 - m)
    }
}

/// Convert an integer to superscript Unicode characters
fn superscript(n: i32) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

    let mut result = String::new();
    if n < 0 {
        result.push('⁻');
    }
    for c in n.unsigned_abs().to_string().chars() {
        if let Some(d) = c.to_digit(10) {
            result.push(DIGITS[d as usize]);
        }
    }
    result
}

/// Layout information for a complete axis system
#[derive(Clone, Debug)]
pub struct AxisLayout {
    /// Viewport in pixels (x, y, width, height)
    pub viewport: [f32; 4],

    /// Margin for axis labels and ticks (left, bottom, right, top)
    pub margin: [f32; 4],

    /// Plot area in pixels (x, y, width, height)
    pub plot_area: [f32; 4],

    /// X-axis configuration
    pub x_axis: AxisConfig,

    /// Y-axis configuration
    pub y_axis: AxisConfig,
}

impl AxisLayout {
    /// Create a new axis layout
    pub fn new(width: f32, height: f32, x_axis: AxisConfig, y_axis: AxisConfig) -> Self {
        let margin = [60.0, 50.0, 20.0, 20.0];

        let plot_area = [
            margin[0],
            margin[3],
            width - margin[0] - margin[2],
            height - margin[1] - margin[3],
        ];

        Self {
            viewport: [0.0, 0.0, width, height],
            margin,
            plot_area,
            x_axis,
            y_axis,
        }
    }

    /// Transform data coordinates to pixel coordinates
    ///
    /// Goes through each axis' scale, so probability and log axes map
    /// their quantiles and decades linearly onto the plot area.
    pub fn data_to_pixel(&self, x: f64, y: f64) -> (f32, f32) {
        let x_norm = self.x_axis.normalize(x) as f32;
        let y_norm = self.y_axis.normalize(y) as f32;

        let px = self.plot_area[0] + x_norm * self.plot_area[2];
        let py = self.plot_area[1] + (1.0 - y_norm) * self.plot_area[3]; // Y is flipped

        (px, py)
    }

    /// Transform pixel coordinates to data coordinates
    pub fn pixel_to_data(&self, px: f32, py: f32) -> (f64, f64) {
        let x_norm = (px - self.plot_area[0]) / self.plot_area[2];
        let y_norm = 1.0 - (py - self.plot_area[1]) / self.plot_area[3];

        (
            self.x_axis.denormalize(x_norm as f64),
            self.y_axis.denormalize(y_norm as f64),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_linear_ticks() {
        let config = AxisConfig::new(AxisPosition::Bottom, 0.0, 10.0);
        let ticks = calculate_ticks(&config);

        let major: Vec<f64> = ticks.iter().filter(|t| t.is_major).map(|t| t.value).collect();
        assert_eq!(major, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert!(ticks.iter().any(|t| !t.is_major));
    }

    #[test]
    fn test_calculate_log_ticks() {
        let config = AxisConfig::new(AxisPosition::Bottom, 1.0, 1000.0).with_log_scale();

        let ticks = calculate_ticks(&config);
        let major: Vec<_> = ticks.iter().filter(|t| t.is_major).collect();

        assert_eq!(major.len(), 4);
        assert_eq!(major[2].label.as_deref(), Some("10²"));
        assert!((major[1].normalized - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_range_has_no_ticks() {
        let config = AxisConfig::new(AxisPosition::Left, 3.0, 3.0);
        assert!(calculate_ticks(&config).is_empty());
    }

    #[test]
    fn test_builders_shape_linear_ticks() {
        let config = AxisConfig::new(AxisPosition::Top, 0.0, 1.0)
            .with_limits(0.0, 1.0)
            .with_format(".1f")
            .with_minor_ticks(0);
        assert!(config.position.is_horizontal());
        assert!(!AxisPosition::Right.is_horizontal());

        let ticks = calculate_ticks(&config);
        assert!(ticks.iter().all(|t| t.is_major));
        let labels: Vec<&str> = ticks.iter().filter_map(|t| t.label.as_deref()).collect();
        assert_eq!(labels, vec!["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]);
    }

    #[test]
    fn test_overflowing_range_has_no_ticks() {
        let config = AxisConfig::new(AxisPosition::Left, -1e308, 1e308);
        assert!(calculate_ticks(&config).is_empty());
    }

    #[test]
    fn test_probability_ticks_within_limits() {
        let config = AxisConfig::new(AxisPosition::Bottom, 1.0, 99.0)
            .with_probability_scale(DistributionSpec::StandardNormal);
        let labels: Vec<String> = calculate_ticks(&config)
            .into_iter()
            .filter_map(|t| t.label)
            .collect();

        assert_eq!(labels.first().map(String::as_str), Some("1"));
        assert_eq!(labels.last().map(String::as_str), Some("99"));
        assert!(labels.contains(&"50".to_string()));
        assert!(!labels.contains(&"0.5".to_string()));
    }

    #[test]
    fn test_probability_normalize_is_symmetric() {
        let config = AxisConfig::new(AxisPosition::Left, 10.0, 90.0)
            .with_probability_scale(DistributionSpec::StandardNormal);
        assert!((config.normalize(50.0) - 0.5).abs() < 1e-9);
        assert!((config.normalize(10.0)).abs() < 1e-9);
        assert!((config.normalize(20.0) + config.normalize(80.0) - 1.0).abs() < 1e-9);
        assert!((config.denormalize(0.5) - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0, None), "0");
        assert_eq!(format_number(123.0, None), "123");
        assert_eq!(format_number(123.456, Some(".2f")), "123.46");
        assert!(format_number(12345678.0, None).contains('e'));
    }

    #[test]
    fn test_format_probability() {
        assert_eq!(format_probability(0.1, true), "0.1");
        assert_eq!(format_probability(1.0, true), "1");
        assert_eq!(format_probability(50.0, true), "50");
        assert_eq!(format_probability(99.9, true), "99.9");
        assert_eq!(format_probability(99.99, true), "99.99");
        assert_eq!(format_probability(0.001, false), "0.001");
        assert_eq!(format_probability(0.5, false), "0.5");
    }

    #[test]
    fn test_prob_limits() {
        assert_eq!(prob_limits(1), (10.0, 90.0));
        assert_eq!(prob_limits(5), (10.0, 90.0));
        assert_eq!(prob_limits(6), (5.0, 95.0));
        assert_eq!(prob_limits(10), (5.0, 95.0));
        assert_eq!(prob_limits(11), (1.0, 99.0));
        assert_eq!(prob_limits(100), (1.0, 99.0));

        let (lo, hi) = prob_limits(101);
        assert!((lo - 0.1).abs() < 1e-12);
        assert!((hi - 99.9).abs() < 1e-12);

        let (lo, _) = prob_limits(5000);
        assert!((lo - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_superscript() {
        assert_eq!(superscript(0), "⁰");
        assert_eq!(superscript(1), "¹");
        assert_eq!(superscript(-2), "⁻²");
        assert_eq!(superscript(12), "¹²");
    }

    #[test]
    fn test_axis_layout_transform() {
        let x_axis = AxisConfig::new(AxisPosition::Bottom, 0.0, 100.0);
        let y_axis = AxisConfig::new(AxisPosition::Left, 1.0, 99.0)
            .with_probability_scale(DistributionSpec::StandardNormal);
        let layout = AxisLayout::new(400.0, 300.0, x_axis, y_axis);

        let (px, py) = layout.data_to_pixel(50.0, 50.0);
        assert!((px - (60.0 + 0.5 * 320.0)).abs() < 1e-3);
        assert!((py - (20.0 + 0.5 * 230.0)).abs() < 1e-3);

        let (x, y) = layout.pixel_to_data(px, py);
        assert!((x - 50.0).abs() < 0.1);
        assert!((y - 50.0).abs() < 0.1);
    }
}
