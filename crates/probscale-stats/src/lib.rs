//! probscale-stats - Plotting positions for probability plots
//!
//! This crate provides the numeric core behind probability scales:
//!
//! - **Plotting positions**: `(j - alpha) / (n + 1 - alpha - beta)` for each
//!   order statistic j, with named presets (Weibull, Cunnane, Hazen, Blom, ...)
//! - **Ranks**: average ranks for tied values
//! - **Distributions**: CDF and quantile function of the normal distribution
//!
//! # Example
//!
//! ```
//! use probscale_stats::{PlotPosOptions, PlottingPositionType};
//!
//! let result = PlotPosOptions::new()
//!     .with_formula(PlottingPositionType::Weibull)
//!     .as_percentage()
//!     .compute(&[4.0, f64::NAN, 1.0, 2.0, 3.0, 5.0])
//!     .unwrap();
//!
//! assert_eq!(result.data, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
//! assert_eq!(result.excluded, 1);
//! assert!((result.positions[2] - 50.0).abs() < 1e-9);
//! ```

pub mod dist;
pub mod error;
pub mod positions;
pub mod postype;
pub mod rank;

pub use dist::*;
pub use error::*;
pub use positions::*;
pub use postype::*;
pub use rank::*;
