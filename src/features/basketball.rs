//! Basketball court markings.
//!
//! Features around a basket are drawn for the +x end in a frame whose origin
//! is the inside edge of that end line, with the court extending toward -x.
//! Their placement anchors them at (half length, 0) and mirrors them onto the
//! other end.

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};
use std::f64::consts::PI;

use super::{CourtSide, GeneratesCenteredShape, asin_fraction, non_negative, positive};
use crate::errors::GeometryError;
use crate::geometry::{PathBuilder, PointSeq, arc, path::band, rectangle};

#[enum_dispatch(GeneratesCenteredShape)]
#[derive(Debug, Clone, PartialEq)]
pub enum BasketballFeature {
    CourtConstraint,
    HalfCourt,
    CenterCircleOutline,
    CenterCircleFill,
    DivisionLine,
    EndLine,
    SideLine,
    CourtApron,
    ThreePointLine,
    TwoPointRange,
    FreeThrowLaneBoundary,
    Paint,
    FreeThrowCircleOutline,
    FreeThrowCircleDash,
    Block,
    RestrictedArc,
    Backboard,
    BasketRing,
    Net,
    DefensiveBoxMark,
    SidelineHash,
}

lift_into_feature!(BasketballFeature:
    CourtConstraint, HalfCourt, CenterCircleOutline, CenterCircleFill,
    DivisionLine, EndLine, SideLine, CourtApron, ThreePointLine, TwoPointRange,
    FreeThrowLaneBoundary, Paint, FreeThrowCircleOutline, FreeThrowCircleDash,
    Block, RestrictedArc, Backboard, BasketRing, Net, DefensiveBoxMark,
    SidelineHash,
);

/// Position of the basket and backboard relative to the end line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BasketPosition {
    /// End line to the center of the ring.
    pub basket_dist: f64,
    /// Center of the ring to the face of the backboard.
    pub ring_to_backboard: f64,
}

impl BasketPosition {
    pub fn basket_x(&self) -> f64 {
        -self.basket_dist
    }

    pub fn backboard_x(&self) -> f64 {
        -self.basket_dist + self.ring_to_backboard
    }

    fn check(&self) -> Result<(), GeometryError> {
        positive("basket_to_baseline_dist", self.basket_dist)?;
        non_negative("ring_center_to_backboard", self.ring_to_backboard)?;
        if self.ring_to_backboard > self.basket_dist {
            return Err(GeometryError::invalid(
                "ring_center_to_backboard",
                self.ring_to_backboard,
                "backboard would sit behind the end line",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Court outline
// ============================================================================

/// The playing area inside the boundary lines.
#[derive(Debug, Clone, PartialEq)]
pub struct CourtConstraint {
    pub length: f64,
    pub width: f64,
}

impl GeneratesCenteredShape for CourtConstraint {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let hl = positive("court_length", self.length)? / 2.0;
        let hw = positive("court_width", self.width)? / 2.0;
        Ok(rectangle(-hl, hl, -hw, hw))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HalfCourt {
    pub length: f64,
    pub width: f64,
    pub side: CourtSide,
}

impl GeneratesCenteredShape for HalfCourt {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let hl = positive("court_length", self.length)? / 2.0;
        let hw = positive("court_width", self.width)? / 2.0;
        Ok(match self.side {
            CourtSide::Offense => rectangle(0.0, hl, -hw, hw),
            CourtSide::Defense => rectangle(-hl, 0.0, -hw, hw),
        })
    }
}

/// The +x half of a center circle's outline.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterCircleOutline {
    pub radius: f64,
    pub thickness: f64,
}

impl GeneratesCenteredShape for CenterCircleOutline {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        band(DVec2::ZERO, self.radius, self.thickness, 0.5, -0.5, arc_points)
    }
}

/// The +x half of the area inside a center circle's outline.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterCircleFill {
    pub radius: f64,
    pub thickness: f64,
}

impl GeneratesCenteredShape for CenterCircleFill {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        let inner = positive("center_circle_radius", self.radius)? - self.thickness;
        Ok(arc(DVec2::ZERO, inner, 0.5, -0.5, arc_points)?.closed())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DivisionLine {
    pub court_width: f64,
    pub thickness: f64,
}

impl GeneratesCenteredShape for DivisionLine {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let hw = positive("court_width", self.court_width)? / 2.0;
        let ht = positive("line_thickness", self.thickness)? / 2.0;
        Ok(rectangle(-ht, ht, -hw, hw))
    }
}

/// The end line, outside the court, covering the corners where it meets the
/// side lines.
#[derive(Debug, Clone, PartialEq)]
pub struct EndLine {
    pub court_width: f64,
    pub thickness: f64,
}

impl GeneratesCenteredShape for EndLine {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let hw = positive("court_width", self.court_width)? / 2.0;
        let t = positive("line_thickness", self.thickness)?;
        Ok(rectangle(0.0, t, -hw - t, hw + t))
    }
}

/// The side line, outside the court. Anchored on the court's edge.
#[derive(Debug, Clone, PartialEq)]
pub struct SideLine {
    pub court_length: f64,
    pub thickness: f64,
}

impl GeneratesCenteredShape for SideLine {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let hl = positive("court_length", self.court_length)? / 2.0;
        let t = positive("line_thickness", self.thickness)?;
        Ok(rectangle(-hl - t, hl + t, 0.0, t))
    }
}

/// The +x half of the apron around the court.
#[derive(Debug, Clone, PartialEq)]
pub struct CourtApron {
    pub court_length: f64,
    pub court_width: f64,
    pub baseline_extension: f64,
    pub sideline_extension: f64,
}

impl GeneratesCenteredShape for CourtApron {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let hl = positive("court_length", self.court_length)? / 2.0;
        let hw = positive("court_width", self.court_width)? / 2.0;
        let be = non_negative("baseline_apron_extension", self.baseline_extension)?;
        let se = non_negative("sideline_apron_extension", self.sideline_extension)?;
        Ok(PointSeq::from([
            (0.0, hw + se),
            (hl + be, hw + se),
            (hl + be, -hw - se),
            (0.0, -hw - se),
            (0.0, -hw),
            (hl, -hw),
            (hl, hw),
            (0.0, hw),
            (0.0, hw + se),
        ]))
    }
}

// ============================================================================
// Three-point range
// ============================================================================

/// Shared geometry of the three-point line and the two-point range inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreePointArc {
    /// Distance from the basket to the outside edge of the arc.
    pub radius: f64,
    /// Distance from the court's center line to the outside edge of the
    /// straight corner segments.
    pub half_width: f64,
    pub basket_dist: f64,
    pub thickness: f64,
}

impl ThreePointArc {
    /// Outer and inner angular half-spans measured from the -x axis.
    fn thetas(&self) -> Result<(f64, f64), GeometryError> {
        let r = positive("three_point_arc_distance", self.radius)?;
        let t = positive("line_thickness", self.thickness)?;
        positive("basket_to_baseline_dist", self.basket_dist)?;
        let outer = asin_fraction("three_point_arc_width", self.half_width, r)?;
        let inner = asin_fraction("three_point_arc_width", self.half_width - t, r - t)?;
        Ok((outer, inner))
    }

    fn center(&self) -> DVec2 {
        dvec2(-self.basket_dist, 0.0)
    }
}

/// The three-point line: straight corner segments from the end line joined
/// by an arc around the basket.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreePointLine {
    pub arc: ThreePointArc,
}

impl GeneratesCenteredShape for ThreePointLine {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        let a = &self.arc;
        let (outer, inner) = a.thetas()?;
        let (hw, t) = (a.half_width, a.thickness);
        Ok(PathBuilder::with_arc_points(arc_points)
            .point(0.0, hw)
            .arc(a.center(), a.radius, 1.0 - outer, 1.0 + outer)?
            .points([(0.0, -hw), (0.0, -hw + t)])
            .arc(a.center(), a.radius - a.thickness, 1.0 + inner, 1.0 - inner)?
            .point(0.0, hw - t)
            .close())
    }
}

/// The area inside the three-point line.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoPointRange {
    pub arc: ThreePointArc,
}

impl GeneratesCenteredShape for TwoPointRange {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        let a = &self.arc;
        let (_, inner) = a.thetas()?;
        let edge = a.half_width - a.thickness;
        Ok(PathBuilder::with_arc_points(arc_points)
            .point(0.0, edge)
            .arc(a.center(), a.radius - a.thickness, 1.0 - inner, 1.0 + inner)?
            .point(0.0, -edge)
            .close())
    }
}

// ============================================================================
// Free-throw lane
// ============================================================================

/// The painted lane's outline, open at the end line.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeThrowLaneBoundary {
    pub lane_length: f64,
    pub lane_width: f64,
    pub thickness: f64,
}

impl GeneratesCenteredShape for FreeThrowLaneBoundary {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let len = positive("free_throw_lane_length", self.lane_length)?;
        let hw = positive("free_throw_lane_width", self.lane_width)? / 2.0;
        let t = positive("line_thickness", self.thickness)?;
        Ok(PointSeq::from([
            (0.0, hw),
            (-len, hw),
            (-len, -hw),
            (0.0, -hw),
            (0.0, -hw + t),
            (-len + t, -hw + t),
            (-len + t, hw - t),
            (0.0, hw - t),
            (0.0, hw),
        ]))
    }
}

/// The area inside the lane's outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub lane_length: f64,
    pub lane_width: f64,
    pub thickness: f64,
}

impl GeneratesCenteredShape for Paint {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let len = positive("free_throw_lane_length", self.lane_length)?;
        let hw = positive("free_throw_lane_width", self.lane_width)? / 2.0;
        let t = positive("line_thickness", self.thickness)?;
        Ok(rectangle(-len + t, 0.0, -hw + t, hw - t))
    }
}

/// The solid part of the free-throw circle, on the side away from the basket.
/// `extended_arc` is how far, along the arc, it continues past the free-throw
/// line on each side.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeThrowCircleOutline {
    pub radius: f64,
    pub thickness: f64,
    pub lane_length: f64,
    pub extended_arc: f64,
}

impl GeneratesCenteredShape for FreeThrowCircleOutline {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        let r = positive("free_throw_circle_radius", self.radius)?;
        let theta = non_negative("free_throw_circle_extended_arc", self.extended_arc)? / r / PI;
        let center = dvec2(-self.lane_length + self.thickness / 2.0, 0.0);
        band(center, r, self.thickness, 0.5 - theta, 1.5 + theta, arc_points)
    }
}

/// One dash of the free-throw circle inside the lane. Angles are fractions
/// of π measured around the circle's center.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeThrowCircleDash {
    pub radius: f64,
    pub thickness: f64,
    pub lane_length: f64,
    pub start: f64,
    pub end: f64,
}

impl GeneratesCenteredShape for FreeThrowCircleDash {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        let center = dvec2(-self.lane_length + self.thickness / 2.0, 0.0);
        band(center, self.radius, self.thickness, self.start, self.end, arc_points)
    }
}

/// A lane-space mark (block) along the free-throw lane.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub length: f64,
    pub width: f64,
}

impl GeneratesCenteredShape for Block {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let hl = positive("block_length", self.length)? / 2.0;
        let hw = positive("block_width", self.width)? / 2.0;
        Ok(rectangle(-hl, hl, -hw, hw))
    }
}

// ============================================================================
// Basket
// ============================================================================

/// The restricted-area arc under the basket, with its straight legs back to
/// the face of the backboard.
#[derive(Debug, Clone, PartialEq)]
pub struct RestrictedArc {
    /// Outer radius.
    pub radius: f64,
    pub thickness: f64,
    pub basket: BasketPosition,
}

impl GeneratesCenteredShape for RestrictedArc {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        self.basket.check()?;
        let r = positive("restricted_arc_radius", self.radius)?;
        let t = positive("line_thickness", self.thickness)?;
        let bf = self.basket.backboard_x();
        if t >= r {
            return Err(GeometryError::invalid("line_thickness", t, "line is thicker than the arc's radius"));
        }
        let c = dvec2(self.basket.basket_x(), 0.0);
        Ok(PathBuilder::with_arc_points(arc_points)
            .point(bf, r)
            .arc(c, r, 0.5, 1.5)?
            .points([(bf, -r), (bf, -r + t)])
            .arc(c, r - t, 1.5, 0.5)?
            .point(bf, r - t)
            .close())
    }
}

/// The backboard seen from above, its face toward the court.
#[derive(Debug, Clone, PartialEq)]
pub struct Backboard {
    pub width: f64,
    pub thickness: f64,
    pub basket: BasketPosition,
}

impl GeneratesCenteredShape for Backboard {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        self.basket.check()?;
        let hw = positive("backboard_face_size", self.width)? / 2.0;
        let t = positive("backboard_thickness", self.thickness)?;
        let face = self.basket.backboard_x();
        Ok(rectangle(face, face + t, -hw, hw))
    }
}

/// The ring and the bracket joining it to the backboard.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketRing {
    /// Inner radius of the ring.
    pub radius: f64,
    pub thickness: f64,
    pub extension_width: f64,
    pub basket: BasketPosition,
}

impl GeneratesCenteredShape for BasketRing {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        self.basket.check()?;
        let r = positive("basket_ring_radius", self.radius)?;
        let t = positive("basket_ring_thickness", self.thickness)?;
        let hew = positive("ring_extension_width", self.extension_width)? / 2.0;
        let bf = self.basket.backboard_x();
        let bc = self.basket.basket_x();

        let inner = asin_fraction("ring_extension_width", hew, r)?;
        let outer = asin_fraction("ring_extension_width", hew, r + t)?;
        let joint_x = bc + r * (inner * PI).cos();
        Ok(PathBuilder::with_arc_points(arc_points)
            .points([(bf, hew), (joint_x, hew)])
            .arc(dvec2(bc, 0.0), r + t, outer, 2.0 - outer)?
            .points([(joint_x, -hew), (bf, -hew)])
            .close())
    }
}

/// The net, drawn as the disk inside the ring.
#[derive(Debug, Clone, PartialEq)]
pub struct Net {
    pub radius: f64,
    pub basket: BasketPosition,
}

impl GeneratesCenteredShape for Net {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        self.basket.check()?;
        Ok(arc(dvec2(self.basket.basket_x(), 0.0), self.radius, 0.0, 2.0, arc_points)?.closed())
    }
}

// ============================================================================
// Hash marks
// ============================================================================

/// A short mark whose +x, -y corner sits on its anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct DefensiveBoxMark {
    pub length: f64,
    pub width: f64,
}

impl GeneratesCenteredShape for DefensiveBoxMark {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let l = positive("mark_length", self.length)?;
        let w = positive("mark_width", self.width)?;
        Ok(rectangle(-l, 0.0, 0.0, w))
    }
}

/// Which way a mark on the +y side line extends from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extension {
    /// Toward the middle of the court.
    #[default]
    Inward,
    /// Away from the court.
    Outward,
    /// Centered on the side line.
    Both,
}

/// A line perpendicular to the side line: coaches' boxes, substitution areas,
/// team bench areas and throw-in lines.
#[derive(Debug, Clone, PartialEq)]
pub struct SidelineHash {
    pub length: f64,
    pub thickness: f64,
    pub direction: Extension,
}

impl GeneratesCenteredShape for SidelineHash {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let l = positive("mark_length", self.length)?;
        let t = positive("line_thickness", self.thickness)?;
        Ok(match self.direction {
            Extension::Inward => rectangle(0.0, t, -l, 0.0),
            Extension::Outward => rectangle(0.0, t, 0.0, l),
            Extension::Both => rectangle(0.0, t, -l / 2.0, l / 2.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::EPSILON;

    // Odd, so symmetric arcs have a sample on their axis.
    const N: usize = 401;

    fn nba_arc() -> ThreePointArc {
        ThreePointArc {
            radius: 23.75,
            half_width: 22.0,
            basket_dist: 5.25,
            thickness: 2.0 / 12.0,
        }
    }

    fn nba_basket() -> BasketPosition {
        BasketPosition {
            basket_dist: 5.25,
            ring_to_backboard: 15.0 / 12.0,
        }
    }

    // ====== three-point tests ======

    #[test]
    fn three_point_line_reaches_top_of_key() {
        let line = ThreePointLine { arc: nba_arc() }.centered_shape(N).unwrap();
        let bb = line.bbox();
        assert!((bb.min.x - (-5.25 - 23.75)).abs() < 1e-9);
        assert_eq!(bb.max.x, 0.0);
        assert_eq!(bb.max.y, 22.0);
        assert!(line.is_closed(EPSILON));
    }

    #[test]
    fn corner_segment_meets_arc() {
        let line = ThreePointLine { arc: nba_arc() }.centered_shape(N).unwrap();
        // Second point is where the arc starts; it must be on the corner line.
        let joint = line.points()[1];
        assert!((joint.y - 22.0).abs() < 1e-9);
        let expected_x = -5.25 - (23.75f64 * 23.75 - 22.0 * 22.0).sqrt();
        assert!((joint.x - expected_x).abs() < 1e-9);
    }

    #[test]
    fn corner_wider_than_arc() {
        let arc = ThreePointArc {
            half_width: 25.0,
            ..nba_arc()
        };
        let err = ThreePointLine { arc }.centered_shape(N).unwrap_err();
        assert!(matches!(err, GeometryError::InvalidParameters { .. }));
    }

    #[test]
    fn two_point_range_inside_line() {
        let range = TwoPointRange { arc: nba_arc() }.centered_shape(N).unwrap();
        let line = ThreePointLine { arc: nba_arc() }.centered_shape(N).unwrap();
        assert!(range.bbox().min.x > line.bbox().min.x);
        assert!((range.bbox().max.y - (22.0 - 2.0 / 12.0)).abs() < 1e-9);
    }

    // ====== lane tests ======

    #[test]
    fn lane_boundary_and_paint() {
        let lane = FreeThrowLaneBoundary {
            lane_length: 19.0,
            lane_width: 16.0,
            thickness: 2.0 / 12.0,
        }
        .centered_shape(N)
        .unwrap();
        let paint = Paint {
            lane_length: 19.0,
            lane_width: 16.0,
            thickness: 2.0 / 12.0,
        }
        .centered_shape(N)
        .unwrap();
        assert_eq!(lane.bbox().min.x, -19.0);
        assert_eq!(lane.len(), 9);
        assert!((paint.bbox().width() - (19.0 - 2.0 / 12.0)).abs() < 1e-12);
    }

    #[test]
    fn free_throw_circle_faces_half_court() {
        let c = FreeThrowCircleOutline {
            radius: 6.0,
            thickness: 2.0 / 12.0,
            lane_length: 19.0,
            extended_arc: 0.0,
        }
        .centered_shape(N)
        .unwrap();
        let center_x = -19.0 + 1.0 / 12.0;
        assert!((c.bbox().min.x - (center_x - 6.0)).abs() < 1e-9);
        assert!((c.bbox().max.x - center_x).abs() < 1e-9);
    }

    // ====== basket tests ======

    #[test]
    fn restricted_arc_legs_reach_backboard() {
        let ra = RestrictedArc {
            radius: 4.0 + 2.0 / 12.0,
            thickness: 2.0 / 12.0,
            basket: nba_basket(),
        }
        .centered_shape(N)
        .unwrap();
        assert!((ra.bbox().max.x - (-4.0)).abs() < 1e-9);
        assert!((ra.bbox().min.x - (-5.25 - 4.0 - 2.0 / 12.0)).abs() < 1e-9);
    }

    #[test]
    fn ring_joins_backboard() {
        let ring = BasketRing {
            radius: 9.0 / 12.0,
            thickness: 2.0 / 12.0,
            extension_width: 7.0 / 12.0,
            basket: nba_basket(),
        }
        .centered_shape(N)
        .unwrap();
        let bb = ring.bbox();
        assert!((bb.max.x - (-4.0)).abs() < 1e-9);
        assert!((bb.min.x - (-5.25 - 11.0 / 12.0)).abs() < 1e-6);
        assert!(ring.is_closed(EPSILON));
    }

    #[test]
    fn backboard_behind_end_line() {
        let basket = BasketPosition {
            basket_dist: 1.0,
            ring_to_backboard: 2.0,
        };
        assert!(
            Backboard {
                width: 6.0,
                thickness: 0.3,
                basket,
            }
            .centered_shape(N)
            .is_err()
        );
    }

    // ====== hash mark tests ======

    #[test]
    fn sideline_hash_directions() {
        let base = SidelineHash {
            length: 3.0,
            thickness: 0.5,
            direction: Extension::Inward,
        };
        assert_eq!(base.centered_shape(N).unwrap().bbox().min.y, -3.0);
        let out = SidelineHash {
            direction: Extension::Outward,
            ..base.clone()
        };
        assert_eq!(out.centered_shape(N).unwrap().bbox().max.y, 3.0);
        let both = SidelineHash {
            direction: Extension::Both,
            ..base
        };
        assert_eq!(both.centered_shape(N).unwrap().bbox().max.y, 1.5);
    }
}
