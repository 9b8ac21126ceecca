//! Test utilities for confidence estimation
//!
//! This module provides utilities for generating synthetic test data:
//! - Cost volumes with a known best disparity
//! - Constant disparity maps
//! - Shifted stereo image pairs
//! - Patterned indicator maps
//!
//! # Examples
//!
//! ```
//! use stereo_confidence::test_utils::*;
//!
//! let cv = create_cost_volume(4, 6, -2, 2);
//! let (left, right) = create_stereo_pair(4, 6, 1);
//! let map = create_indicator(4, 6, IndicatorPattern::Ramp);
//! assert_eq!(map.dim(), cv.dims());
//! assert_eq!(left.dims(), right.dims());
//! ```

use ndarray::{Array2, Array3};

use crate::core::{CostVolume, DisparityMap, StereoImage};

/// Pattern for synthetic indicator maps
#[derive(Debug, Clone, Copy)]
pub enum IndicatorPattern {
    /// Same value everywhere
    Constant(f32),
    /// Increases linearly along columns, row offset added
    Ramp,
    /// Alternating 0 / 1 cells
    Checkerboard,
}

/// Create a synthetic cost volume
///
/// # Arguments
/// * `rows`, `cols` - Spatial extent
/// * `disp_min`, `disp_max` - Inclusive disparity range (`disp_min <= disp_max`)
///
/// # Returns
/// Cost volume whose cost at each pixel is the distance to the middle of the
/// disparity range, so the range centre is always the cheapest hypothesis.
pub fn create_cost_volume(rows: usize, cols: usize, disp_min: i32, disp_max: i32) -> CostVolume {
    let depth = (i64::from(disp_max) - i64::from(disp_min) + 1).max(1) as usize;
    let centre = (depth / 2) as f32;
    let cost = Array3::from_shape_fn((rows, cols, depth), |(_, _, d)| (d as f32 - centre).abs());

    let disp_max = (i64::from(disp_min) + depth as i64 - 1) as i32;
    match CostVolume::new(cost, disp_min, disp_max) {
        Ok(cv) => cv,
        Err(err) => panic!("synthetic cost volume is inconsistent: {err}"),
    }
}

/// Create a disparity map with a constant value
pub fn create_disparity_map(rows: usize, cols: usize, value: f32) -> DisparityMap {
    DisparityMap::new(Array2::from_elem((rows, cols), value))
}

/// Create a stereo pair where the right image is the left shifted by `shift` columns
pub fn create_stereo_pair(rows: usize, cols: usize, shift: usize) -> (StereoImage, StereoImage) {
    let left = Array2::from_shape_fn((rows, cols), |(r, c)| ((r + c) % 256) as f32);
    let right = Array2::from_shape_fn((rows, cols), |(r, c)| {
        if c >= shift {
            ((c - shift + r) % 256) as f32
        } else {
            0.0
        }
    });

    (StereoImage::new(left), StereoImage::new(right))
}

/// Create an indicator map with the given pattern
pub fn create_indicator(rows: usize, cols: usize, pattern: IndicatorPattern) -> Array2<f32> {
    match pattern {
        IndicatorPattern::Constant(value) => Array2::from_elem((rows, cols), value),
        IndicatorPattern::Ramp => {
            let cols_f = cols.max(1) as f32;
            Array2::from_shape_fn((rows, cols), |(r, c)| c as f32 / cols_f + r as f32)
        }
        IndicatorPattern::Checkerboard => {
            Array2::from_shape_fn((rows, cols), |(r, c)| ((r + c) % 2) as f32)
        }
    }
}
