//! # Stereo Confidence
//!
//! Confidence estimation stage for stereo matching pipelines.
//!
//! ## Overview
//!
//! Given a cost volume and, optionally, the disparity map selected from it,
//! a confidence method computes per-pixel quality scores ("indicators") and
//! stacks them along a labeled indicator axis on both containers:
//! - Confidence methods implement [`ConfidenceEstimator`]
//! - Methods are registered by name in an [`EstimatorRegistry`] and built from
//!   a [`ConfidenceConfig`] carrying `confidence_method`
//! - [`merge_indicator`] appends each new indicator without touching the
//!   ones already stored
//!
//! ## Example
//!
//! ```rust
//! use stereo_confidence::{estimate_confidence, ConfidenceConfig, EstimatorRegistry};
//! use stereo_confidence::test_utils::*;
//! use ndarray::Array2;
//!
//! let mut registry = EstimatorRegistry::new();
//! registry.register_fn("flat", "flat", "uniform score", |_, left, _, _| {
//!     Ok(Array2::from_elem(left.dims(), 1.0))
//! });
//!
//! let (left, right) = create_stereo_pair(4, 6, 1);
//! let mut cv = create_cost_volume(4, 6, -2, 2);
//! let mut disp = create_disparity_map(4, 6, 0.0);
//!
//! estimate_confidence(
//!     &registry,
//!     &ConfidenceConfig::new("flat"),
//!     Some(&mut disp),
//!     &left,
//!     &right,
//!     &mut cv,
//! )?;
//!
//! assert_eq!(cv.confidence().unwrap().indicators(), ["flat"]);
//! # Ok::<(), stereo_confidence::ConfidenceError>(())
//! ```

pub mod confidence;
pub mod config;
pub mod core;
pub mod error;
pub mod test_utils;

pub use confidence::{
    create_estimator, estimate_confidence, merge_indicator, ConfidenceEstimator, EstimatorFactory,
    EstimatorRegistry, IndicatorFn,
};
pub use config::{ConfidenceConfig, ConfigError, ConfigLoader, CONFIDENCE_METHOD_KEY};
pub use crate::core::{ConfidenceLayer, CostVolume, DisparityMap, StereoImage};
pub use error::{ConfidenceError, Result};
