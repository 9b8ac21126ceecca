//! Rectified stereo images

use ndarray::Array2;

use crate::error::{ConfidenceError, Result};

/// Rectified grayscale image with an optional validity mask
///
/// Mask convention: 0 marks a valid pixel, anything else is invalid.
#[derive(Debug, Clone)]
pub struct StereoImage {
    /// Intensity values, row-major `(row, col)`
    pub data: Array2<f32>,
    /// Validity mask with the same extent as `data`
    pub mask: Option<Array2<u8>>,
    /// Value marking missing pixels in `data`
    pub no_data: f32,
}

impl StereoImage {
    pub fn new(data: Array2<f32>) -> Self {
        Self {
            data,
            mask: None,
            no_data: f32::NAN,
        }
    }

    /// Attach a validity mask
    pub fn with_mask(mut self, mask: Array2<u8>) -> Result<Self> {
        if mask.dim() != self.data.dim() {
            return Err(ConfidenceError::spatial("image mask", self.data.dim(), mask.dim()));
        }
        self.mask = Some(mask);
        Ok(self)
    }

    pub fn with_no_data(mut self, no_data: f32) -> Self {
        self.no_data = no_data;
        self
    }

    /// Spatial extent `(rows, cols)`
    pub fn dims(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Whether `(row, col)` is inside the image, unmasked and not `no_data`
    pub fn is_valid(&self, row: usize, col: usize) -> bool {
        let Some(&value) = self.data.get((row, col)) else {
            return false;
        };
        if value.is_nan() || value == self.no_data {
            return false;
        }
        match &self.mask {
            Some(mask) => mask.get((row, col)).map_or(false, |&m| m == 0),
            None => true,
        }
    }
}
