//! Point sequences and the pure functions that build and move them.
//!
//! - `primitives`: arcs, rectangles, squares, diamonds
//! - `transform`: reflect, rotate, translate, scale
//! - `path`: stitching fragments into one outline

pub mod path;
pub mod primitives;
pub mod transform;

pub use path::PathBuilder;
pub use primitives::{arc, circle, diamond, rectangle, square};
pub use transform::{RotationDir, reflect, rotate, scale, translate};

use glam::DVec2;

use crate::types::BBox;

/// Default number of points used to trace an arc.
pub const DEFAULT_ARC_POINTS: usize = 1000;

/// Tolerance used when deciding whether two coordinates coincide.
pub const EPSILON: f64 = 1e-9;

/// An ordered list of points in a feature's local coordinate system.
///
/// Order is significant: consecutive points are joined when drawn.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PointSeq(Vec<DVec2>);

impl PointSeq {
    pub fn new() -> Self {
        PointSeq(Vec::new())
    }

    pub fn with_capacity(n: usize) -> Self {
        PointSeq(Vec::with_capacity(n))
    }

    pub fn points(&self) -> &[DVec2] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<DVec2> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<DVec2> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<DVec2> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.0.iter().copied()
    }

    pub fn push(&mut self, p: DVec2) {
        self.0.push(p);
    }

    /// Append every point of `other` after the last point of `self`.
    pub fn extend_from(&mut self, other: &PointSeq) {
        self.0.extend_from_slice(&other.0);
    }

    /// Concatenate two sequences into a new one.
    pub fn concat(&self, other: &PointSeq) -> PointSeq {
        let mut out = PointSeq::with_capacity(self.len() + other.len());
        out.extend_from(self);
        out.extend_from(other);
        out
    }

    /// The same points traced in the opposite direction.
    pub fn reversed(&self) -> PointSeq {
        PointSeq(self.0.iter().rev().copied().collect())
    }

    /// Whether the last point coincides with the first within `tol`.
    pub fn is_closed(&self, tol: f64) -> bool {
        match (self.first(), self.last()) {
            (Some(a), Some(b)) if self.len() > 1 => a.distance(b) <= tol,
            _ => false,
        }
    }

    /// Append the first point if the path is not already closed.
    pub fn closed(mut self) -> PointSeq {
        if let Some(first) = self.first() {
            if !self.is_closed(EPSILON) {
                self.0.push(first);
            }
        }
        self
    }

    /// The original points followed by their mirror image.
    ///
    /// Both halves are kept; nothing is transformed in place.
    pub fn with_reflection(&self, over_x: bool, over_y: bool) -> PointSeq {
        self.concat(&reflect(self, over_x, over_y))
    }

    pub fn bbox(&self) -> BBox {
        let mut b = BBox::new();
        for p in self.iter() {
            b.expand_point(p);
        }
        b
    }

    /// Shoelace area. Positive when the outline winds counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        let pts = &self.0;
        if pts.len() < 3 {
            return 0.0;
        }
        let mut twice = 0.0;
        for i in 0..pts.len() {
            let a = pts[i];
            let b = pts[(i + 1) % pts.len()];
            twice += a.x * b.y - b.x * a.y;
        }
        twice / 2.0
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Pointwise comparison with an absolute tolerance.
    pub fn approx_eq(&self, other: &PointSeq, tol: f64) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a.abs_diff_eq(b, tol))
    }

    pub fn all_finite(&self) -> bool {
        self.0.iter().all(|p| p.is_finite())
    }
}

impl From<Vec<DVec2>> for PointSeq {
    fn from(v: Vec<DVec2>) -> Self {
        PointSeq(v)
    }
}

impl<const N: usize> From<[(f64, f64); N]> for PointSeq {
    fn from(pts: [(f64, f64); N]) -> Self {
        PointSeq(pts.iter().map(|&(x, y)| DVec2::new(x, y)).collect())
    }
}

impl FromIterator<DVec2> for PointSeq {
    fn from_iter<I: IntoIterator<Item = DVec2>>(iter: I) -> Self {
        PointSeq(iter.into_iter().collect())
    }
}

impl IntoIterator for PointSeq {
    type Item = DVec2;
    type IntoIter = std::vec::IntoIter<DVec2>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
