#![deny(unsafe_code)]
//! Ambient point-field simulation.
//!
//! A small set of points drifts in the viewport under simple physics:
//! constant drift, attraction toward the pointer, bounce off the viewport
//! boundary, velocity damping, and a hard speed cap. One [`tick`] advances
//! every point by one animation frame; [`render`] paints the frame
//! (background wash, proximity edges, connection lines, points with a glow
//! near the pointer) onto a [`Surface`].
//!
//! [`tick`]: PointField::tick
//! [`render`]: render::render
//! [`Surface`]: ambient_core::surface::Surface

pub mod driver;
pub mod render;

use ambient_core::error::FieldError;
use ambient_core::params::{param_f64, param_usize};
use ambient_core::prng::Xorshift64;
use ambient_core::viewport::Viewport;
use ambient_core::DVec2;
use serde_json::{json, Value};

/// Default number of points in the field.
const DEFAULT_POINT_COUNT: usize = 12;
/// Default base opacity applied to every stroke and fill.
const DEFAULT_OPACITY: f64 = 0.3;
/// Per-axis half-range of the initial random velocity.
const INIT_VELOCITY: f64 = 0.25;
/// Pointer distance below which attraction applies.
const ATTRACT_RADIUS: f64 = 150.0;
/// Peak attraction acceleration, reached at zero pointer distance.
const ATTRACT_STRENGTH: f64 = 0.002;
/// Per-tick velocity damping factor.
const DAMPING: f64 = 0.99;
/// Hard cap on speed magnitude, in pixels per tick.
const MAX_SPEED: f64 = 2.0;

/// A single moving point: position and velocity in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub pos: DVec2,
    pub vel: DVec2,
}

/// Tunable parameters of the field.
///
/// Use [`Default`] for the stock configuration (12 points, base opacity 0.3).
#[derive(Debug, Clone, Copy)]
pub struct FieldParams {
    /// Number of points, fixed for the life of the field.
    pub point_count: usize,
    /// Base opacity every render-pass alpha is scaled by.
    pub opacity: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            opacity: DEFAULT_OPACITY,
        }
    }
}

impl FieldParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            point_count: param_usize(params, "point_count", DEFAULT_POINT_COUNT),
            opacity: param_f64(params, "opacity", DEFAULT_OPACITY),
        }
    }

    /// Current parameter values as a JSON object.
    pub fn to_json(&self) -> Value {
        json!({
            "point_count": self.point_count,
            "opacity": self.opacity,
        })
    }
}

/// The ambient point field: point collection, viewport, and pointer state.
///
/// Points are created once at construction and their count never changes.
/// The pointer position is a plain field write ([`set_pointer`]); every
/// point in a tick observes the same pointer and viewport snapshot, taken
/// before the tick begins.
///
/// [`set_pointer`]: PointField::set_pointer
pub struct PointField {
    pub(crate) points: Vec<Point>,
    pub(crate) viewport: Viewport,
    pub(crate) pointer: DVec2,
    pub(crate) params: FieldParams,
}

impl PointField {
    /// Creates a field with `params.point_count` points, positions uniform
    /// in `[0, W) x [0, H)` and velocity components uniform in
    /// `[-0.25, 0.25)`, drawn from a PRNG seeded with `seed`.
    ///
    /// The pointer starts at the origin, matching the state before any
    /// pointer event has been observed.
    ///
    /// Returns `FieldError::InvalidDimensions` if the viewport is invalid.
    pub fn new(width: f64, height: f64, seed: u64, params: FieldParams) -> Result<Self, FieldError> {
        let viewport = Viewport::new(width, height)?;
        let mut rng = Xorshift64::new(seed);
        let points = (0..params.point_count)
            .map(|_| Point {
                pos: DVec2::new(
                    rng.next_range(0.0, viewport.width()),
                    rng.next_range(0.0, viewport.height()),
                ),
                vel: DVec2::new(
                    rng.next_range(-INIT_VELOCITY, INIT_VELOCITY),
                    rng.next_range(-INIT_VELOCITY, INIT_VELOCITY),
                ),
            })
            .collect();
        Ok(Self {
            points,
            viewport,
            pointer: DVec2::ZERO,
            params,
        })
    }

    /// Creates a field from a JSON params object (`point_count`, `opacity`).
    pub fn from_json(
        width: f64,
        height: f64,
        seed: u64,
        json_params: &Value,
    ) -> Result<Self, FieldError> {
        Self::new(width, height, seed, FieldParams::from_json(json_params))
    }

    /// Read-only access to the point collection.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The last observed pointer position.
    pub fn pointer(&self) -> DVec2 {
        self.pointer
    }

    /// The field parameters.
    pub fn params(&self) -> FieldParams {
        self.params
    }

    /// Records a new pointer position. Read by the next tick.
    pub fn set_pointer(&mut self, pos: DVec2) {
        self.pointer = pos;
    }

    /// Updates the stored viewport dimensions.
    ///
    /// Points are neither regenerated nor moved; any point now outside the
    /// new bounds is clamped by the boundary rule on the next tick.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), FieldError> {
        self.viewport = Viewport::new(width, height)?;
        Ok(())
    }

    /// Advances the simulation by one animation frame.
    ///
    /// Per point, in order: provisional drift, pointer attraction (inside
    /// [`ATTRACT_RADIUS`]), boundary bounce with clamp, damping, speed cap.
    /// Attraction precedes the boundary check so a point can bounce while
    /// being pulled toward the pointer; damping and the cap come last so
    /// runaway speed from attraction is limited every frame.
    pub fn tick(&mut self) {
        let pointer = self.pointer;
        let w = self.viewport.width();
        let h = self.viewport.height();

        for point in &mut self.points {
            let mut pos = point.pos + point.vel;
            let mut vel = point.vel;

            let pointer_dist = point.pos.distance(pointer);
            if pointer_dist < ATTRACT_RADIUS {
                let accel = ATTRACT_STRENGTH * (ATTRACT_RADIUS - pointer_dist) / ATTRACT_RADIUS;
                let angle = (pointer.y - point.pos.y).atan2(pointer.x - point.pos.x);
                vel += DVec2::new(angle.cos(), angle.sin()) * accel;
            }

            if pos.x <= 0.0 || pos.x >= w {
                vel.x = -vel.x;
                pos.x = pos.x.clamp(0.0, w);
            }
            if pos.y <= 0.0 || pos.y >= h {
                vel.y = -vel.y;
                pos.y = pos.y.clamp(0.0, h);
            }

            vel *= DAMPING;

            let speed = vel.length();
            if speed > MAX_SPEED {
                vel = vel / speed * MAX_SPEED;
            }

            point.pos = pos;
            point.vel = vel;
        }
    }
}
