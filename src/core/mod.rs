//! Core data structures for confidence estimation
//!
//! Cost volumes and disparity maps handed in by upstream matching stages, the
//! rectified images they came from, and the labeled confidence layer both
//! containers carry.

pub mod cost_volume;
pub mod disparity_map;
pub mod image;
pub mod layer;

#[cfg(test)]
mod additional_tests;

pub use cost_volume::CostVolume;
pub use disparity_map::DisparityMap;
pub use image::StereoImage;
pub use layer::ConfidenceLayer;
