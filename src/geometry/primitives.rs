//! Primitive shape generators.
//!
//! Angles are fractions of π: `start = 0.5` means 90°. Arc direction is
//! controlled purely by argument order; `start > end` sweeps clockwise.

use std::f64::consts::PI;

use glam::{DVec2, dvec2};

use super::PointSeq;
use crate::errors::GeometryError;

/// `n` points evenly spaced in angle from `start·π` to `end·π`, both ends
/// included, each `radius` away from `center`.
///
/// `start == end` yields `n` coincident points. A non-positive radius is
/// rejected rather than producing a collapsed cluster.
pub fn arc(center: DVec2, radius: f64, start: f64, end: f64, n: usize) -> Result<PointSeq, GeometryError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GeometryError::degenerate("radius", radius));
    }
    if n < 2 {
        return Err(GeometryError::invalid("points", n as f64, "an arc needs at least two points"));
    }
    if !start.is_finite() || !end.is_finite() {
        let bad = if start.is_finite() { end } else { start };
        return Err(GeometryError::invalid("angle", bad, "arc angles must be finite"));
    }

    let (a0, a1) = (start * PI, end * PI);
    let step = (a1 - a0) / (n - 1) as f64;
    Ok((0..n)
        .map(|i| {
            // Pin the last sample to the exact end angle.
            let theta = if i == n - 1 { a1 } else { a0 + step * i as f64 };
            center + radius * dvec2(theta.cos(), theta.sin())
        })
        .collect())
}

/// A full circle of `DEFAULT_ARC_POINTS` points starting and ending on +x.
pub fn circle(center: DVec2, radius: f64) -> Result<PointSeq, GeometryError> {
    arc(center, radius, 0.0, 2.0, super::DEFAULT_ARC_POINTS)
}

/// Closed 5-point rectangle: (xmin,ymin) → (xmax,ymin) → (xmax,ymax) →
/// (xmin,ymax) → (xmin,ymin).
pub fn rectangle(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> PointSeq {
    PointSeq::from([
        (x_min, y_min),
        (x_max, y_min),
        (x_max, y_max),
        (x_min, y_max),
        (x_min, y_min),
    ])
}

/// A square of the given side centered on `center`, same winding as
/// [`rectangle`].
pub fn square(side: f64, center: DVec2) -> Result<PointSeq, GeometryError> {
    if !side.is_finite() || side <= 0.0 {
        return Err(GeometryError::degenerate("side_length", side));
    }
    let h = side / 2.0;
    Ok(rectangle(center.x - h, center.x + h, center.y - h, center.y + h))
}

/// Closed diamond: (-w/2,0) → (0,-h/2) → (w/2,0) → (0,h/2) → (-w/2,0),
/// offset by `center`.
pub fn diamond(width: f64, height: f64, center: DVec2) -> Result<PointSeq, GeometryError> {
    if !width.is_finite() || width <= 0.0 {
        return Err(GeometryError::degenerate("width", width));
    }
    if !height.is_finite() || height <= 0.0 {
        return Err(GeometryError::degenerate("height", height));
    }
    let (hw, hh) = (width / 2.0, height / 2.0);
    Ok(PointSeq::from([
        (center.x - hw, center.y),
        (center.x, center.y - hh),
        (center.x + hw, center.y),
        (center.x, center.y + hh),
        (center.x - hw, center.y),
    ]))
}
