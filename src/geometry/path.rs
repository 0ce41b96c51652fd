//! Stitching straight segments and arcs into one outline.
//!
//! Feature outlines are built as a run of fragments: a couple of explicit
//! corner points, an arc, a connector, a reversed arc. `PathBuilder` keeps
//! that sequence readable and shares one arc resolution across fragments.

use glam::DVec2;

use super::{DEFAULT_ARC_POINTS, PointSeq, primitives};
use crate::errors::GeometryError;

#[derive(Clone, Debug)]
pub struct PathBuilder {
    points: PointSeq,
    arc_points: usize,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::with_arc_points(DEFAULT_ARC_POINTS)
    }

    pub fn with_arc_points(arc_points: usize) -> Self {
        PathBuilder {
            points: PointSeq::new(),
            arc_points,
        }
    }

    /// Append a single vertex.
    pub fn point(mut self, x: f64, y: f64) -> Self {
        self.points.push(DVec2::new(x, y));
        self
    }

    /// Append several vertices in order.
    pub fn points<const N: usize>(mut self, pts: [(f64, f64); N]) -> Self {
        for (x, y) in pts {
            self.points.push(DVec2::new(x, y));
        }
        self
    }

    /// Append an already-built fragment.
    pub fn extend(mut self, fragment: &PointSeq) -> Self {
        self.points.extend_from(fragment);
        self
    }

    /// Append an arc from `start·π` to `end·π`.
    pub fn arc(mut self, center: DVec2, radius: f64, start: f64, end: f64) -> Result<Self, GeometryError> {
        let a = primitives::arc(center, radius, start, end, self.arc_points)?;
        self.points.extend_from(&a);
        Ok(self)
    }

    /// The path as traced so far, without closing it.
    pub fn finish(self) -> PointSeq {
        self.points
    }

    /// The path with its first point repeated at the end if needed.
    pub fn close(self) -> PointSeq {
        self.points.closed()
    }
}

/// A curved line of finite width: the outer arc from `start` to `end`, a
/// straight connector, then the inner arc from `end` back to `start`, closed
/// onto the first outer point.
///
/// `thickness` is measured inward from `outer_radius`.
pub fn band(
    center: DVec2,
    outer_radius: f64,
    thickness: f64,
    start: f64,
    end: f64,
    arc_points: usize,
) -> Result<PointSeq, GeometryError> {
    if !thickness.is_finite() || thickness <= 0.0 {
        return Err(GeometryError::degenerate("thickness", thickness));
    }
    let inner_radius = outer_radius - thickness;
    if inner_radius <= 0.0 {
        return Err(GeometryError::invalid(
            "thickness",
            thickness,
            format!("line thickness must be smaller than the radius {outer_radius}"),
        ));
    }
    Ok(PathBuilder::with_arc_points(arc_points)
        .arc(center, outer_radius, start, end)?
        .arc(center, inner_radius, end, start)?
        .close())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::EPSILON;
    use std::f64::consts::PI;

    #[test]
    fn builder_keeps_fragment_order() {
        let seq = PathBuilder::with_arc_points(3)
            .point(5.0, 0.0)
            .arc(DVec2::ZERO, 1.0, 0.0, 1.0)
            .unwrap()
            .point(-5.0, 0.0)
            .finish();
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.first(), Some(DVec2::new(5.0, 0.0)));
        assert_eq!(seq.last(), Some(DVec2::new(-5.0, 0.0)));
    }

    #[test]
    fn full_band_area_matches_annulus() {
        let (r, t) = (15.0, 2.0 / 12.0);
        let ring = band(DVec2::ZERO, r, t, 0.0, 2.0, 4000).unwrap();
        assert!(ring.is_closed(EPSILON));
        let expected = PI * (r * r - (r - t) * (r - t));
        assert!((ring.area() - expected).abs() / expected < 1e-3);
    }

    #[test]
    fn half_band_area_is_half_annulus() {
        let (r, t) = (6.0, 0.5);
        let ring = band(DVec2::ZERO, r, t, 0.5, 1.5, 2000).unwrap();
        let expected = PI * (r * r - (r - t) * (r - t)) / 2.0;
        assert!((ring.area() - expected).abs() / expected < 1e-3);
    }

    #[test]
    fn band_rejects_thickness_past_center() {
        let err = band(DVec2::ZERO, 1.0, 1.5, 0.0, 2.0, 100).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidParameters { ref parameter, .. } if parameter == "thickness"));
    }
}
