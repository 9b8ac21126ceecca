//! Labeled confidence layer
//!
//! A `(row, col, indicator)` stack of `f32` confidence maps with one label per
//! slice along the indicator axis. Labels keep insertion order and are not
//! deduplicated.

use ndarray::{s, Array2, Array3, ArrayView2, Axis};

use crate::error::{ConfidenceError, Result};

/// Confidence indicators stacked along the third axis
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceLayer {
    data: Array3<f32>,
    indicators: Vec<String>,
}

impl ConfidenceLayer {
    /// Create a layer holding a single indicator
    pub fn from_indicator(name: impl Into<String>, indicator: &Array2<f32>) -> Self {
        Self {
            data: indicator.to_owned().insert_axis(Axis(2)),
            indicators: vec![name.into()],
        }
    }

    /// Return a new layer with `indicator` appended as the last slice
    ///
    /// The new storage is NaN-filled, receives a copy of every existing slice,
    /// then the new slice. `self` is left untouched, so callers can build every
    /// replacement layer before assigning any of them.
    pub fn grown(&self, name: impl Into<String>, indicator: &Array2<f32>) -> Result<Self> {
        let (rows, cols, depth) = self.data.dim();
        if indicator.dim() != (rows, cols) {
            return Err(ConfidenceError::spatial("indicator map", (rows, cols), indicator.dim()));
        }

        let mut data = Array3::from_elem((rows, cols, depth + 1), f32::NAN);
        data.slice_mut(s![.., .., ..depth]).assign(&self.data);
        data.slice_mut(s![.., .., depth]).assign(indicator);

        let mut indicators = Vec::with_capacity(depth + 1);
        indicators.extend(self.indicators.iter().cloned());
        indicators.push(name.into());

        Ok(Self { data, indicators })
    }

    /// `(rows, cols, indicators)`
    pub fn shape(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// Spatial extent `(rows, cols)`
    pub fn dims(&self) -> (usize, usize) {
        let (rows, cols, _) = self.data.dim();
        (rows, cols)
    }

    /// Number of stored indicators
    pub fn depth(&self) -> usize {
        self.data.len_of(Axis(2))
    }

    pub fn data(&self) -> &Array3<f32> {
        &self.data
    }

    /// Indicator labels in insertion order
    pub fn indicators(&self) -> &[String] {
        &self.indicators
    }

    /// First slice carrying `name`
    pub fn indicator(&self, name: &str) -> Option<ArrayView2<'_, f32>> {
        self.positions(name).next().map(|index| self.data.index_axis(Axis(2), index))
    }

    /// Slice at `index` along the indicator axis
    pub fn indicator_at(&self, index: usize) -> Option<ArrayView2<'_, f32>> {
        (index < self.depth()).then(|| self.data.index_axis(Axis(2), index))
    }

    /// Every index labeled `name`; more than one when a label was reused
    pub fn positions<'a>(&'a self, name: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.indicators
            .iter()
            .enumerate()
            .filter(move |(_, label)| label.as_str() == name)
            .map(|(index, _)| index)
    }

    /// Check that the label sequence matches the indicator axis
    ///
    /// NaN values are not checked: estimators may use them for invalid pixels.
    pub fn check_invariants(&self) -> Result<()> {
        if self.indicators.len() != self.depth() {
            return Err(ConfidenceError::InvariantViolation(format!(
                "{} indicator labels for a layer of depth {}",
                self.indicators.len(),
                self.depth()
            )));
        }
        Ok(())
    }

    /// Split into raw storage and labels
    pub fn into_parts(self) -> (Array3<f32>, Vec<String>) {
        (self.data, self.indicators)
    }
}
