//! Drawable viewport dimensions in device pixels.

use crate::error::FieldError;
use serde::{Deserialize, Serialize};

/// Current drawable width and height in device pixels.
///
/// Dimensions are real-valued because the host reports them that way
/// (fractional device-pixel sizes exist under page zoom). Both must be
/// finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a viewport, validating that both dimensions are finite and > 0.
    pub fn new(width: f64, height: f64) -> Result<Self, FieldError> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(FieldError::InvalidDimensions);
        }
        Ok(Self { width, height })
    }

    /// Viewport width in device pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Viewport height in device pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The smaller of the two dimensions. The proximity-edge pass scales
    /// its pair-distance cutoff by this.
    pub fn min_extent(&self) -> f64 {
        self.width.min(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_positive_dimensions() {
        let v = Viewport::new(800.0, 600.0).unwrap();
        assert_eq!(v.width(), 800.0);
        assert_eq!(v.height(), 600.0);
    }

    #[test]
    fn new_rejects_zero_and_negative() {
        assert!(Viewport::new(0.0, 600.0).is_err());
        assert!(Viewport::new(800.0, 0.0).is_err());
        assert!(Viewport::new(-1.0, 600.0).is_err());
    }

    #[test]
    fn new_rejects_non_finite() {
        assert!(Viewport::new(f64::NAN, 600.0).is_err());
        assert!(Viewport::new(800.0, f64::INFINITY).is_err());
    }

    #[test]
    fn min_extent_picks_smaller_side() {
        let v = Viewport::new(1920.0, 1080.0).unwrap();
        assert_eq!(v.min_extent(), 1080.0);
        let v = Viewport::new(400.0, 900.0).unwrap();
        assert_eq!(v.min_extent(), 400.0);
    }
}
