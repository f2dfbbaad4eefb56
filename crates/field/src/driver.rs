//! Frame-loop glue around a [`PointField`].
//!
//! All inputs meet the simulation here, on one logical thread: the frame
//! scheduler calls [`frame`], the pointer listener feeds [`pointer_moved`]
//! through the coalescing throttle, and the resize listener applies
//! [`resized`] immediately. Each frame flushes the throttle first, so the
//! tick observes a consistent pointer/viewport snapshot. Cancellation is
//! permanent: after [`cancel`], no call mutates any state.
//!
//! [`frame`]: Driver::frame
//! [`pointer_moved`]: Driver::pointer_moved
//! [`resized`]: Driver::resized
//! [`cancel`]: Driver::cancel

use crate::render::{render, Theme};
use crate::PointField;
use ambient_core::error::FieldError;
use ambient_core::pointer::PointerThrottle;
use ambient_core::surface::Surface;
use ambient_core::DVec2;

/// What a [`Driver::frame`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Ticked and painted onto the supplied surface.
    Rendered,
    /// Ticked, but no surface was available; the paint was skipped.
    Skipped,
    /// The driver is cancelled; nothing ran.
    Cancelled,
}

/// Owns the field, theme, and pointer throttle, and runs the per-frame
/// tick/render sequence on behalf of the host's scheduler.
pub struct Driver {
    field: PointField,
    theme: Theme,
    throttle: PointerThrottle,
    cancelled: bool,
    frames: u64,
}

impl Driver {
    /// Creates a driver with the default pointer throttle window (16 ms).
    pub fn new(field: PointField, theme: Theme) -> Self {
        Self::with_throttle(field, theme, PointerThrottle::default())
    }

    /// Creates a driver with a custom pointer throttle.
    pub fn with_throttle(field: PointField, theme: Theme, throttle: PointerThrottle) -> Self {
        Self {
            field,
            theme,
            throttle,
            cancelled: false,
            frames: 0,
        }
    }

    /// Read-only access to the field.
    pub fn field(&self) -> &PointField {
        &self.field
    }

    /// Number of frames that have run (rendered or skipped).
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Whether the driver has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Feeds a pointer-move event through the throttle.
    pub fn pointer_moved(&mut self, x: f64, y: f64, now_ms: u64) {
        if self.cancelled {
            return;
        }
        self.throttle.submit(DVec2::new(x, y), now_ms);
    }

    /// Applies a viewport resize immediately, unthrottled.
    pub fn resized(&mut self, width: f64, height: f64) -> Result<(), FieldError> {
        if self.cancelled {
            return Ok(());
        }
        self.field.resize(width, height)
    }

    /// Runs one frame: flush the pointer throttle, tick the field, and
    /// paint onto `surface` if one is supplied.
    ///
    /// A missing surface skips the paint without raising an error; the
    /// simulation still advances and rendering resumes on the next frame
    /// that has a surface.
    pub fn frame(&mut self, now_ms: u64, surface: Option<&mut dyn Surface>) -> FrameOutcome {
        if self.cancelled {
            return FrameOutcome::Cancelled;
        }

        self.throttle.flush(now_ms);
        if let Some(pos) = self.throttle.position() {
            self.field.set_pointer(pos);
        }

        self.field.tick();
        self.frames += 1;

        match surface {
            Some(surface) => {
                render(&self.field, &self.theme, surface);
                FrameOutcome::Rendered
            }
            None => FrameOutcome::Skipped,
        }
    }

    /// Stops the loop permanently. Subsequent frames and input events
    /// mutate nothing.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldParams;
    use ambient_core::color::Rgba;

    #[derive(Default)]
    struct CountingSurface {
        ops: usize,
    }

    impl Surface for CountingSurface {
        fn fill_wash(&mut self, _start: Rgba, _end: Rgba) {
            self.ops += 1;
        }

        fn stroke_line(&mut self, _from: DVec2, _to: DVec2, _width: f64, _color: Rgba) {
            self.ops += 1;
        }

        fn fill_circle(&mut self, _center: DVec2, _radius: f64, _color: Rgba) {
            self.ops += 1;
        }
    }

    fn driver() -> Driver {
        let field = PointField::new(800.0, 600.0, 42, FieldParams::default()).unwrap();
        Driver::new(field, Theme::default())
    }

    #[test]
    fn frame_with_surface_renders() {
        let mut d = driver();
        let mut s = CountingSurface::default();
        assert_eq!(d.frame(0, Some(&mut s)), FrameOutcome::Rendered);
        assert!(s.ops > 0, "render should issue drawing commands");
        assert_eq!(d.frames(), 1);
    }

    #[test]
    fn frame_without_surface_skips_paint_but_ticks() {
        let mut d = driver();
        let before: Vec<_> = d.field().points().to_vec();
        assert_eq!(d.frame(0, None), FrameOutcome::Skipped);
        assert_eq!(d.frames(), 1);
        assert_ne!(
            d.field().points(),
            &before[..],
            "the simulation advances even without a surface"
        );
    }

    #[test]
    fn render_resumes_after_surface_returns() {
        let mut d = driver();
        assert_eq!(d.frame(0, None), FrameOutcome::Skipped);
        let mut s = CountingSurface::default();
        assert_eq!(d.frame(16, Some(&mut s)), FrameOutcome::Rendered);
        assert_eq!(d.frames(), 2);
    }

    #[test]
    fn pointer_event_lands_before_next_tick() {
        let mut d = driver();
        d.pointer_moved(123.0, 456.0, 0);
        d.frame(16, None);
        assert_eq!(d.field().pointer(), DVec2::new(123.0, 456.0));
    }

    #[test]
    fn rapid_pointer_events_coalesce_to_latest() {
        let mut d = driver();
        d.pointer_moved(1.0, 1.0, 0);
        d.pointer_moved(2.0, 2.0, 4);
        d.pointer_moved(3.0, 3.0, 8);
        d.frame(16, None);
        assert_eq!(d.field().pointer(), DVec2::new(3.0, 3.0));
    }

    #[test]
    fn resize_applies_immediately() {
        let mut d = driver();
        d.resized(1024.0, 768.0).unwrap();
        assert_eq!(d.field().viewport().width(), 1024.0);
        assert_eq!(d.field().viewport().height(), 768.0);
    }

    #[test]
    fn resize_propagates_invalid_dimensions() {
        let mut d = driver();
        assert!(d.resized(0.0, 768.0).is_err());
    }

    #[test]
    fn cancel_stops_all_frames() {
        let mut d = driver();
        d.frame(0, None);
        d.cancel();
        let snapshot: Vec<_> = d.field().points().to_vec();
        let mut s = CountingSurface::default();
        // Simulate N scheduled-frame slots after cancellation.
        for i in 0..10 {
            assert_eq!(
                d.frame(16 * (i + 1), Some(&mut s)),
                FrameOutcome::Cancelled
            );
        }
        assert_eq!(s.ops, 0, "no drawing after cancel");
        assert_eq!(d.frames(), 1, "frame counter frozen after cancel");
        assert_eq!(d.field().points(), &snapshot[..], "state frozen after cancel");
    }

    #[test]
    fn cancel_silences_input_events() {
        let mut d = driver();
        d.frame(0, None);
        d.cancel();
        d.pointer_moved(50.0, 50.0, 100);
        d.resized(100.0, 100.0).unwrap();
        assert_eq!(d.field().viewport().width(), 800.0);
        assert!(d.is_cancelled());
    }

    #[test]
    fn throttle_window_respected_across_frames() {
        let field = PointField::new(800.0, 600.0, 42, FieldParams::default()).unwrap();
        let mut d = Driver::with_throttle(field, Theme::default(), PointerThrottle::new(16));
        d.pointer_moved(1.0, 1.0, 0); // accepted immediately
        d.pointer_moved(2.0, 2.0, 5); // pending
        d.frame(10, None); // window not elapsed: still (1, 1)
        assert_eq!(d.field().pointer(), DVec2::new(1.0, 1.0));
        d.frame(16, None); // window elapsed: pending lands
        assert_eq!(d.field().pointer(), DVec2::new(2.0, 2.0));
    }
}
