//! Frame painting: four passes over the point field onto a [`Surface`].
//!
//! Pass order matters for compositing: the gradient wash goes down first,
//! then the approximate-Voronoi proximity edges, then the direct connection
//! lines, and finally the points themselves with their pointer glow. Both
//! pair passes are O(N^2) over the point set; N is tens of points by
//! configuration, so no spatial index is used.

use crate::PointField;
use ambient_core::color::Srgb;
use ambient_core::surface::Surface;
use ambient_core::DVec2;
use serde::{Deserialize, Serialize};

/// Pair distance cutoff for proximity edges, as a fraction of the smaller
/// viewport dimension.
const EDGE_RANGE_FACTOR: f64 = 0.3;
/// Maximum half-length of a proximity edge, in pixels.
const EDGE_MAX_HALF_LENGTH: f64 = 200.0;
/// Pointer distance over which a proximity edge fades to its floor.
const EDGE_FADE_RANGE: f64 = 300.0;
/// Fade floor for proximity edges.
const EDGE_FADE_FLOOR: f64 = 0.3;
/// Proximity-edge alpha as a fraction of base opacity.
const EDGE_ALPHA_SCALE: f64 = 0.8;
/// Stroke width for proximity edges.
const EDGE_LINE_WIDTH: f64 = 1.0;

/// Pair distance cutoff for direct connection lines.
const LINK_RANGE: f64 = 180.0;
/// Pointer distance over which a connection line fades to its floor.
const LINK_FADE_RANGE: f64 = 200.0;
/// Fade floor for connection lines.
const LINK_FADE_FLOOR: f64 = 0.4;
/// Connection-line alpha as a fraction of base opacity.
const LINK_ALPHA_SCALE: f64 = 0.6;
/// Stroke width for connection lines.
const LINK_LINE_WIDTH: f64 = 0.8;

/// Base point radius in pixels.
const POINT_RADIUS: f64 = 2.0;
/// Pointer distance below which a point scales up.
const POINT_SCALE_RANGE: f64 = 100.0;
/// Pointer distance below which point alpha ramps above its resting value.
const POINT_ALPHA_RANGE: f64 = 150.0;
/// Resting point alpha as a fraction of base opacity.
const POINT_ALPHA_SCALE: f64 = 0.8;
/// Pointer distance below which the glow circle appears.
const GLOW_RANGE: f64 = 80.0;
/// Glow radius before pointer scaling.
const GLOW_RADIUS: f64 = 8.0;
/// Glow alpha as a fraction of base opacity.
const GLOW_ALPHA_SCALE: f64 = 0.3;

/// Alpha of the wash gradient at the top-left corner.
const WASH_START_ALPHA: f64 = 0.1;
/// Alpha of the wash gradient at the bottom-right corner.
const WASH_END_ALPHA: f64 = 0.05;

/// Colors of the effect, serializable as hex strings.
///
/// `Default` is the stock look: cool gray strokes and points, blue glow
/// accent, near-white wash.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Edges, connection lines, and point fill.
    pub stroke: Srgb,
    /// Glow circle near the pointer.
    pub accent: Srgb,
    /// Wash gradient at the top-left corner.
    pub wash_start: Srgb,
    /// Wash gradient at the bottom-right corner.
    pub wash_end: Srgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            stroke: Srgb {
                r: 107.0 / 255.0,
                g: 114.0 / 255.0,
                b: 128.0 / 255.0,
            },
            accent: Srgb {
                r: 59.0 / 255.0,
                g: 130.0 / 255.0,
                b: 246.0 / 255.0,
            },
            wash_start: Srgb {
                r: 249.0 / 255.0,
                g: 250.0 / 255.0,
                b: 251.0 / 255.0,
            },
            wash_end: Srgb {
                r: 243.0 / 255.0,
                g: 244.0 / 255.0,
                b: 246.0 / 255.0,
            },
        }
    }
}

/// Paints one frame of the field onto `surface`.
pub fn render(field: &PointField, theme: &Theme, surface: &mut dyn Surface) {
    surface.fill_wash(
        theme.wash_start.with_alpha(WASH_START_ALPHA),
        theme.wash_end.with_alpha(WASH_END_ALPHA),
    );
    draw_proximity_edges(field, theme, surface);
    draw_connection_lines(field, theme, surface);
    draw_points(field, theme, surface);
}

/// Perpendicular-bisector approximation of Voronoi edges.
///
/// For each pair closer than `EDGE_RANGE_FACTOR * min(W, H)`: a segment
/// through the pair midpoint, perpendicular to the joining line, extended
/// `min(200, dist / 2)` to each side. Coincident pairs have no defined
/// perpendicular and draw nothing.
fn draw_proximity_edges(field: &PointField, theme: &Theme, surface: &mut dyn Surface) {
    let points = field.points();
    let pointer = field.pointer();
    let opacity = field.params().opacity;
    let range = field.viewport().min_extent() * EDGE_RANGE_FACTOR;

    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let p1 = points[i].pos;
            let p2 = points[j].pos;
            let dist = p1.distance(p2);
            if dist >= range {
                continue;
            }

            let perp = DVec2::new(p2.y - p1.y, p1.x - p2.x);
            let perp_len = perp.length();
            if perp_len <= 0.0 {
                continue;
            }
            let unit = perp / perp_len;
            let half = EDGE_MAX_HALF_LENGTH.min(dist * 0.5);
            let mid = (p1 + p2) * 0.5;

            let fade = (1.0 - mid.distance(pointer) / EDGE_FADE_RANGE).max(EDGE_FADE_FLOOR);
            let color = theme
                .stroke
                .with_alpha(opacity * EDGE_ALPHA_SCALE * fade);
            surface.stroke_line(mid - unit * half, mid + unit * half, EDGE_LINE_WIDTH, color);
        }
    }
}

/// Straight segments between pairs closer than `LINK_RANGE`, fading with
/// the pointer's distance to the nearer endpoint.
fn draw_connection_lines(field: &PointField, theme: &Theme, surface: &mut dyn Surface) {
    let points = field.points();
    let pointer = field.pointer();
    let opacity = field.params().opacity;

    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let p1 = points[i].pos;
            let p2 = points[j].pos;
            if p1.distance(p2) >= LINK_RANGE {
                continue;
            }

            let pointer_dist = p1.distance(pointer).min(p2.distance(pointer));
            let fade = (1.0 - pointer_dist / LINK_FADE_RANGE).max(LINK_FADE_FLOOR);
            let color = theme
                .stroke
                .with_alpha(opacity * LINK_ALPHA_SCALE * fade);
            surface.stroke_line(p1, p2, LINK_LINE_WIDTH, color);
        }
    }
}

/// Filled circles for the points, scaled and brightened near the pointer,
/// with an accent glow inside `GLOW_RANGE`.
fn draw_points(field: &PointField, theme: &Theme, surface: &mut dyn Surface) {
    let pointer = field.pointer();
    let opacity = field.params().opacity;

    for point in field.points() {
        let dist = point.pos.distance(pointer);
        let scale = if dist < POINT_SCALE_RANGE {
            1.0 + (POINT_SCALE_RANGE - dist) / POINT_SCALE_RANGE
        } else {
            1.0
        };
        let alpha = if dist < POINT_ALPHA_RANGE {
            opacity * (1.5 + (POINT_ALPHA_RANGE - dist) / POINT_ALPHA_RANGE)
        } else {
            opacity * POINT_ALPHA_SCALE
        };

        surface.fill_circle(
            point.pos,
            POINT_RADIUS * scale,
            theme.stroke.with_alpha(alpha.min(1.0)),
        );

        if dist < GLOW_RANGE {
            let glow_alpha = (GLOW_RANGE - dist) / GLOW_RANGE * opacity * GLOW_ALPHA_SCALE;
            surface.fill_circle(
                point.pos,
                GLOW_RADIUS * scale,
                theme.accent.with_alpha(glow_alpha),
            );
        }
    }
}
