//! The `Surface` trait: the output boundary of the effect.
//!
//! A frame of the animation is nothing but a short sequence of drawing
//! commands; the trait captures exactly the three primitives the render
//! pass needs. It is **object-safe** so the driver can carry
//! `&mut dyn Surface` and the host may swap implementations (CPU raster,
//! recording surface in tests) at runtime.

use crate::color::Rgba;
use glam::DVec2;

/// A 2D drawing surface sized to the viewport.
///
/// Coordinates are in device pixels with the origin at the top-left.
/// Implementations are free to clip primitives that fall outside their
/// bounds; callers never need to pre-clip.
pub trait Surface {
    /// Paints a diagonal linear gradient across the whole surface, from
    /// `start` at the top-left corner to `end` at the bottom-right,
    /// composited over existing content.
    fn fill_wash(&mut self, start: Rgba, end: Rgba);

    /// Strokes a straight line segment.
    ///
    /// `width` is advisory; hairline-only implementations may treat every
    /// width up to ~1.5 px as one pixel.
    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Rgba);

    /// Fills a circle centered at `center` with the given radius.
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgba);
}
