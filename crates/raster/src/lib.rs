#![deny(unsafe_code)]
//! CPU raster implementation of the [`Surface`] trait.
//!
//! An RGBA8 pixel buffer with source-over compositing. Primitives clip to
//! the buffer bounds, so callers never pre-clip. The rasterization is
//! deliberately plain: the effect draws a few dozen hairline strokes and
//! small circles per frame, and the buffer exists for offline capture and
//! tests, not for a hot render path.

#[cfg(feature = "png")]
pub mod snapshot;

use ambient_core::color::Rgba;
use ambient_core::error::FieldError;
use ambient_core::surface::Surface;
use ambient_core::DVec2;

/// An RGBA8 pixel buffer implementing [`Surface`].
///
/// The buffer starts opaque white: the effect is designed to sit over a
/// light page, and its low-alpha strokes need a backdrop to composite
/// against.
#[derive(Debug, Clone)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Creates an opaque white raster of the given dimensions.
    ///
    /// Returns `FieldError::InvalidDimensions` if either dimension is zero
    /// or the buffer size would overflow.
    pub fn new(width: usize, height: usize) -> Result<Self, FieldError> {
        if width == 0 || height == 0 {
            return Err(FieldError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(FieldError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            data: vec![0xff; len],
        })
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the RGBA8 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y * self.width + x) * 4;
        Rgba::from_bytes([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ])
    }

    /// Composites `color` over the pixel at `(x, y)`. Out-of-bounds
    /// coordinates are ignored.
    fn blend(&mut self, x: isize, y: isize, color: Rgba) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let dest = Rgba::from_bytes([
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]);
        let out = color.over(dest).to_bytes();
        self.data[idx..idx + 4].copy_from_slice(&out);
    }
}

impl Surface for Raster {
    /// Per-pixel diagonal gradient: each pixel center is projected onto the
    /// top-left to bottom-right diagonal, and both color and alpha are
    /// interpolated before compositing.
    fn fill_wash(&mut self, start: Rgba, end: Rgba) {
        let w = self.width as f64;
        let h = self.height as f64;
        let diag_sq = w * w + h * h;
        for y in 0..self.height {
            for x in 0..self.width {
                let px = x as f64 + 0.5;
                let py = y as f64 + 0.5;
                let t = (px * w + py * h) / diag_sq;
                self.blend(x as isize, y as isize, start.lerp(end, t));
            }
        }
    }

    /// DDA walk at steps no longer than one pixel. Each visited pixel is
    /// composited once (consecutive duplicates are collapsed). Widths up to
    /// ~1.5 px rasterize one pixel wide, which covers every stroke this
    /// effect uses.
    fn stroke_line(&mut self, from: DVec2, to: DVec2, _width: f64, color: Rgba) {
        let delta = to - from;
        let steps = delta.length().ceil().max(1.0) as usize;
        let mut last: Option<(isize, isize)> = None;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let p = from + delta * t;
            let px = p.x.round() as isize;
            let py = p.y.round() as isize;
            if last == Some((px, py)) {
                continue;
            }
            self.blend(px, py, color);
            last = Some((px, py));
        }
    }

    /// Bounding-box scan with center-sample coverage.
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        let x_min = (center.x - radius).floor() as isize;
        let x_max = (center.x + radius).ceil() as isize;
        let y_min = (center.y - radius).floor() as isize;
        let y_max = (center.y + radius).ceil() as isize;
        let r_sq = radius * radius;
        for y in y_min..=y_max {
            for x in x_min..=x_max {
                let dx = x as f64 + 0.5 - center.x;
                let dy = y as f64 + 0.5 - center.y;
                if dx * dx + dy * dy <= r_sq {
                    self.blend(x, y, color);
                }
            }
        }
    }
}
