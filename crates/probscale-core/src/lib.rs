//! probscale-core - Probability scales for scientific plots
//!
//! Builds on the plotting positions of `probscale-stats` to produce
//! everything a renderer needs for probability paper:
//!
//! - **ProbabilityTransform**: percentages to distribution quantiles and back
//! - **Axis**: probability, log and linear scales with ticks and labels
//! - **probplot**: coordinates and axes of prob, pp and qq plots
//! - **Config**: TOML/JSON settings for positions and plots
//! - **Input**: plain-text sample parsing
//!
//! # Example
//!
//! ```
//! use probscale_core::{probplot, PlotType, ProbAxis, ProbPlotOptions};
//! use probscale_stats::PlotPosOptions;
//!
//! let data = [4.2, 3.1, 5.6, 4.8, 2.9, 5.1, 3.7];
//! let options = ProbPlotOptions::new(PlotType::Prob).with_probax(ProbAxis::Y);
//! let plot = probplot(&data, &options, &PlotPosOptions::default()).unwrap();
//!
//! assert_eq!(plot.x[0], 2.9);
//! assert_eq!((plot.y_axis.min, plot.y_axis.max), (5.0, 95.0));
//! ```

pub mod axis;
pub mod config;
pub mod error;
pub mod input;
pub mod probplot;
pub mod transform;

pub use axis::*;
pub use config::ProbscaleConfig;
pub use error::{ProbscaleError, ProbscaleResult};
pub use input::{parse_sample, read_sample};
pub use probplot::*;
pub use transform::*;
