//! Ice rink markings.
//!
//! Unless noted otherwise a feature is drawn for the +x half of the rink (or
//! for one quadrant) and mirrored by its placement. Features tied to the goal
//! are drawn for the -x end, facing +x, with the goal line's center at the
//! local origin.

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use super::{CourtSide, GeneratesCenteredShape, XJustify, asin_fraction, positive};
use crate::errors::GeometryError;
use crate::geometry::{PathBuilder, PointSeq, arc, path::band, rectangle, reflect};

#[enum_dispatch(GeneratesCenteredShape)]
#[derive(Debug, Clone, PartialEq)]
pub enum HockeyFeature {
    Boards,
    BoardsConstraint,
    NeutralZone,
    EndZone,
    RinkLine,
    GoalLine,
    CenterFaceoffCircle,
    FaceoffSpot,
    RingedFaceoffSpot,
    FaceoffSpotStripe,
    FaceoffLines,
    ZoneFaceoffCircle,
    RefereeCrease,
    GoalCreaseOutline,
    GoalCreaseFill,
    GoalFrame,
    GoalFill,
    GoalkeepersRestrictedArea,
}

lift_into_feature!(HockeyFeature:
    Boards, BoardsConstraint, NeutralZone, EndZone, RinkLine, GoalLine,
    CenterFaceoffCircle, FaceoffSpot, RingedFaceoffSpot, FaceoffSpotStripe,
    FaceoffLines, ZoneFaceoffCircle, RefereeCrease, GoalCreaseOutline,
    GoalCreaseFill, GoalFrame, GoalFill, GoalkeepersRestrictedArea,
);

/// Interior dimensions of the rink, shared by every feature that follows the
/// boards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RinkOutline {
    pub length: f64,
    pub width: f64,
    pub corner_radius: f64,
}

impl RinkOutline {
    /// Half length, half width and corner radius, checked.
    fn halves(&self) -> Result<(f64, f64, f64), GeometryError> {
        let hl = positive("rink_length", self.length)? / 2.0;
        let hw = positive("rink_width", self.width)? / 2.0;
        let r = positive("corner_radius", self.corner_radius)?;
        if r > hl.min(hw) {
            return Err(GeometryError::invalid(
                "corner_radius",
                r,
                "corner radius cannot exceed half the rink's width or length",
            ));
        }
        Ok((hl, hw, r))
    }

    /// Center of the +x, +y corner arc.
    pub fn corner_center(&self) -> DVec2 {
        dvec2(
            self.length / 2.0 - self.corner_radius,
            self.width / 2.0 - self.corner_radius,
        )
    }
}

/// Extent of a line of thickness `t` whose reference edge sits at x = 0.
pub(crate) fn line_span(edge: XJustify, t: f64) -> (f64, f64) {
    match edge {
        XJustify::Center => (-t / 2.0, t / 2.0),
        XJustify::Left => (0.0, t),
        XJustify::Right => (-t, 0.0),
    }
}

// ============================================================================
// Boards and ice regions
// ============================================================================

/// The +x half of the dasher boards: a band of `thickness` outside the ice
/// with rounded corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Boards {
    pub rink: RinkOutline,
    pub thickness: f64,
}

impl GeneratesCenteredShape for Boards {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        let (_, hw, r) = self.rink.halves()?;
        let t = positive("board_thickness", self.thickness)?;
        let c = self.rink.corner_center();
        Ok(PathBuilder::with_arc_points(arc_points)
            .point(0.0, hw)
            .arc(dvec2(c.x, c.y), r, 0.5, 0.0)?
            .arc(dvec2(c.x, -c.y), r, 0.0, -0.5)?
            .points([(0.0, -hw), (0.0, -hw - t)])
            .arc(dvec2(c.x, -c.y), r + t, -0.5, 0.0)?
            .arc(dvec2(c.x, c.y), r + t, 0.0, 0.5)?
            .point(0.0, hw + t)
            .close())
    }
}

/// The whole ice surface inside the boards. Used to clip other features.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardsConstraint {
    pub rink: RinkOutline,
}

impl GeneratesCenteredShape for BoardsConstraint {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        let (_, hw, r) = self.rink.halves()?;
        let c = self.rink.corner_center();
        Ok(PathBuilder::with_arc_points(arc_points)
            .point(0.0, hw)
            .arc(dvec2(c.x, c.y), r, 0.5, 0.0)?
            .arc(dvec2(c.x, -c.y), r, 0.0, -0.5)?
            .arc(dvec2(-c.x, -c.y), r, -0.5, -1.0)?
            .arc(dvec2(-c.x, c.y), r, 1.0, 0.5)?
            .close())
    }
}

/// Ice between the two zone lines.
#[derive(Debug, Clone, PartialEq)]
pub struct NeutralZone {
    pub rink: RinkOutline,
    pub length: f64,
}

impl GeneratesCenteredShape for NeutralZone {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let (_, hw, _) = self.rink.halves()?;
        let half = positive("nzone_length", self.length)? / 2.0;
        Ok(rectangle(-half, half, -hw, hw))
    }
}

/// Ice from a zone line to the end boards.
#[derive(Debug, Clone, PartialEq)]
pub struct EndZone {
    pub rink: RinkOutline,
    pub nzone_length: f64,
    pub side: CourtSide,
}

impl GeneratesCenteredShape for EndZone {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        let (hl, hw, r) = self.rink.halves()?;
        let x0 = positive("nzone_length", self.nzone_length)? / 2.0;
        if x0 >= hl {
            return Err(GeometryError::invalid(
                "nzone_length",
                self.nzone_length,
                "neutral zone must be shorter than the rink",
            ));
        }
        let c = self.rink.corner_center();
        let zone = PathBuilder::with_arc_points(arc_points)
            .point(x0, hw)
            .arc(dvec2(c.x, c.y), r, 0.5, 0.0)?
            .arc(dvec2(c.x, -c.y), r, 0.0, -0.5)?
            .point(x0, -hw)
            .close();
        Ok(match self.side {
            CourtSide::Offense => zone,
            CourtSide::Defense => reflect(&zone, false, true),
        })
    }
}

/// A line spanning the rink's width: the center line and zone lines.
#[derive(Debug, Clone, PartialEq)]
pub struct RinkLine {
    pub rink_width: f64,
    pub thickness: f64,
}

impl GeneratesCenteredShape for RinkLine {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let hw = positive("rink_width", self.rink_width)? / 2.0;
        let ht = positive("line_thickness", self.thickness)? / 2.0;
        Ok(rectangle(-ht, ht, -hw, hw))
    }
}

/// The +x goal line. Near the end boards it follows the corner arcs, so it
/// is traced in rink coordinates and then expressed relative to
/// `anchor_x`, the x position of its reference edge.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalLine {
    pub rink: RinkOutline,
    pub thickness: f64,
    pub anchor_x: f64,
    /// Which edge of the line sits on `anchor_x`.
    pub edge: XJustify,
}

impl GeneratesCenteredShape for GoalLine {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        let (hl, hw, r) = self.rink.halves()?;
        let t = positive("goal_line_thickness", self.thickness)?;
        let (lo, hi) = line_span(self.edge, t);
        let (x0, x1) = (self.anchor_x + lo, self.anchor_x + hi);
        if x1 > hl {
            return Err(GeometryError::invalid(
                "goal_line_dist",
                hl - self.anchor_x,
                "goal line would extend past the end boards",
            ));
        }

        let c = self.rink.corner_center();
        if x1 <= c.x {
            return Ok(rectangle(lo, hi, -hw, hw));
        }

        // A line straddling the start of the corner keeps its straight part
        // at full width up to the arc.
        let straddles = x0 < c.x;
        let t_start = if straddles {
            0.0
        } else {
            asin_fraction("goal_line_dist", x0 - c.x, r)?
        };
        let t_end = asin_fraction("goal_line_dist", x1 - c.x, r)?;
        let cx = c.x - self.anchor_x;
        let mut path = PathBuilder::with_arc_points(arc_points);
        if straddles {
            path = path.point(lo, hw);
        }
        path = path
            .arc(dvec2(cx, c.y), r, 0.5 - t_start, 0.5 - t_end)?
            .arc(dvec2(cx, -c.y), r, -0.5 + t_end, -0.5 + t_start)?;
        if straddles {
            path = path.point(lo, -hw);
        }
        Ok(path.close())
    }
}

// ============================================================================
// Faceoff markings
// ============================================================================

/// The -x half of the center ice faceoff circle.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterFaceoffCircle {
    pub radius: f64,
    pub thickness: f64,
}

impl GeneratesCenteredShape for CenterFaceoffCircle {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        band(DVec2::ZERO, self.radius, self.thickness, 0.5, 1.5, arc_points)
    }
}

/// A solid spot.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceoffSpot {
    pub radius: f64,
}

impl GeneratesCenteredShape for FaceoffSpot {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        Ok(arc(DVec2::ZERO, self.radius, 0.0, 2.0, arc_points)?.closed())
    }
}

/// The outer ring of a non-center faceoff spot, both halves.
#[derive(Debug, Clone, PartialEq)]
pub struct RingedFaceoffSpot {
    pub radius: f64,
    pub thickness: f64,
}

impl GeneratesCenteredShape for RingedFaceoffSpot {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        Ok(band(DVec2::ZERO, self.radius, self.thickness, 0.5, 1.5, arc_points)?.with_reflection(false, true))
    }
}

/// The colored stripe inside a ringed faceoff spot, leaving a gap of `gap`
/// on either side.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceoffSpotStripe {
    pub radius: f64,
    pub thickness: f64,
    pub gap: f64,
}

impl GeneratesCenteredShape for FaceoffSpotStripe {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        let inner = positive("spot_radius", self.radius)? - positive("spot_thickness", self.thickness)?;
        if inner <= 0.0 {
            return Err(GeometryError::invalid(
                "spot_thickness",
                self.thickness,
                "ring is thicker than the spot's radius",
            ));
        }
        let half_width = inner - self.gap;
        if half_width <= 0.0 {
            return Err(GeometryError::invalid("stripe_gap", self.gap, "gap leaves no room for the stripe"));
        }
        let theta = asin_fraction("stripe_gap", half_width, inner)?;
        Ok(PathBuilder::with_arc_points(arc_points)
            .arc(DVec2::ZERO, inner, 0.5 - theta, 0.5 + theta)?
            .arc(DVec2::ZERO, inner, 1.5 - theta, 1.5 + theta)?
            .close())
    }
}

/// One L-shaped marking next to a zone faceoff spot. Drawn for the upper
/// left of the spot, then flipped by its own `over_x` / `over_y` so the
/// four markings around one spot can share an anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceoffLines {
    pub dist_x: f64,
    pub dist_y: f64,
    pub length: f64,
    pub width: f64,
    pub thickness: f64,
    pub over_x: bool,
    pub over_y: bool,
}

impl GeneratesCenteredShape for FaceoffLines {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let t = positive("faceoff_line_thickness", self.thickness)?;
        let len = positive("faceoff_line_length", self.length)?;
        let w = positive("faceoff_line_width", self.width)?;
        let (dx, dy) = (self.dist_x, self.dist_y);
        let l = PointSeq::from([
            (-dx, dy),
            (-dx - len, dy),
            (-dx - len, dy + t),
            (-dx - t, dy + t),
            (-dx - t, dy + w),
            (-dx, dy + w),
            (-dx, dy),
        ]);
        Ok(reflect(&l, self.over_x, self.over_y))
    }
}

/// An end zone faceoff circle with its four hash marks.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneFaceoffCircle {
    pub radius: f64,
    pub thickness: f64,
    /// How far the hash marks stick out from the circle.
    pub hashmark_width: f64,
    /// Outer edge to outer edge spacing of a pair of hash marks.
    pub hashmark_ext_spacing: f64,
}

impl GeneratesCenteredShape for ZoneFaceoffCircle {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        let r = positive("faceoff_circle_radius", self.radius)?;
        let t = positive("faceoff_circle_thickness", self.thickness)?;
        let hm = positive("hashmark_width", self.hashmark_width)?;
        let ext = self.hashmark_ext_spacing / 2.0;
        let int = ext - t;
        if int < 0.0 {
            return Err(GeometryError::invalid(
                "hashmark_ext_spacing",
                self.hashmark_ext_spacing,
                "hash marks are closer together than their own thickness",
            ));
        }
        let theta1 = asin_fraction("hashmark_ext_spacing", ext, r)?;
        let theta2 = asin_fraction("hashmark_ext_spacing", int, r)?;

        let half = PathBuilder::with_arc_points(arc_points)
            .point(0.0, r)
            .arc(DVec2::ZERO, r, 0.5, 0.5 + theta2)?
            .points([(-int, r + hm), (-ext, r + hm)])
            .arc(DVec2::ZERO, r, 0.5 + theta1, 1.5 - theta1)?
            .points([(-ext, -r - hm), (-int, -r - hm)])
            .arc(DVec2::ZERO, r, 1.5 - theta2, 1.5)?
            .point(0.0, -r + t)
            .arc(DVec2::ZERO, r - t, 1.5, 0.5)?
            .point(0.0, r)
            .finish();
        Ok(half.with_reflection(false, true))
    }
}

/// The upper half of the referee's crease, anchored on the boards.
#[derive(Debug, Clone, PartialEq)]
pub struct RefereeCrease {
    pub radius: f64,
    pub thickness: f64,
}

impl GeneratesCenteredShape for RefereeCrease {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        band(DVec2::ZERO, self.radius, self.thickness, 0.0, 1.0, arc_points)
    }
}

// ============================================================================
// Goal area
// ============================================================================

/// Dimensions shared by the crease outline and its fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreaseShape {
    pub radius: f64,
    /// Line thickness of the outline.
    pub thickness: f64,
    /// Half-width of the crease's straight sides.
    pub half_width: f64,
    /// Length of the straight sides.
    pub length: f64,
    pub notch_dist: f64,
    pub notch_width: f64,
    /// Goal line thickness and which of its edges is the reference edge.
    pub goal_line_thickness: f64,
    pub goal_line_edge: XJustify,
}

impl CreaseShape {
    fn start_x(&self) -> f64 {
        line_span(self.goal_line_edge, self.goal_line_thickness).1
    }

    fn check(&self) -> Result<(), GeometryError> {
        positive("goal_crease_radius", self.radius)?;
        positive("goal_crease_thickness", self.thickness)?;
        positive("goal_crease_width", self.half_width)?;
        positive("goal_crease_length", self.length)?;
        if self.thickness >= self.half_width || self.thickness >= self.radius {
            return Err(GeometryError::invalid(
                "goal_crease_thickness",
                self.thickness,
                "crease line is thicker than the crease",
            ));
        }
        Ok(())
    }

    /// Angular half-spans of the outer and inner front arcs.
    fn thetas(&self) -> Result<(f64, f64), GeometryError> {
        let outer = asin_fraction("goal_crease_width", self.half_width, self.radius)?;
        let inner = asin_fraction(
            "goal_crease_width",
            self.half_width - self.thickness,
            self.radius - self.thickness,
        )?;
        Ok((outer, inner))
    }

    /// The inside edge of the outline: notches, then the inner front arc.
    fn inner_edge(&self, builder: PathBuilder) -> Result<PathBuilder, GeometryError> {
        let (w, t) = (self.half_width, self.thickness);
        let (nd, nw) = (self.notch_dist, self.notch_width);
        let sx = self.start_x();
        let (_, theta_inner) = self.thetas()?;
        let center = dvec2(sx, 0.0);
        Ok(builder
            .points([
                (sx, -w + t),
                (sx + nd, -w + t),
                (sx + nd, -w + t + nw),
                (sx + nd + t, -w + t + nw),
                (sx + nd + t, -w + t),
            ])
            .arc(center, self.radius - t, -theta_inner, theta_inner)?
            .points([
                (sx + nd + t, w - t),
                (sx + nd + t, w - t - nw),
                (sx + nd, w - t - nw),
                (sx + nd, w - t),
                (sx, w - t),
            ]))
    }
}

/// The crease's outline, including the notches.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalCreaseOutline {
    pub crease: CreaseShape,
}

impl GeneratesCenteredShape for GoalCreaseOutline {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        let c = &self.crease;
        c.check()?;
        let (theta_outer, _) = c.thetas()?;
        let sx = c.start_x();
        let w = c.half_width;
        let outer = PathBuilder::with_arc_points(arc_points)
            .points([(sx, w), (sx + c.length, w)])
            .arc(dvec2(sx, 0.0), c.radius, theta_outer, -theta_outer)?
            .points([(sx + c.length, -w), (sx, -w)]);
        Ok(c.inner_edge(outer)?.close())
    }
}

/// The colored interior of the crease.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalCreaseFill {
    pub crease: CreaseShape,
}

impl GeneratesCenteredShape for GoalCreaseFill {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        self.crease.check()?;
        Ok(self
            .crease
            .inner_edge(PathBuilder::with_arc_points(arc_points))?
            .close())
    }
}

/// Goal frame dimensions shared by the frame and the fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalShape {
    pub mouth_width: f64,
    pub post_diameter: f64,
    /// Radius of the rounded back corners of the frame.
    pub radius: f64,
    pub thickness: f64,
    /// How far the corner arcs' centers sit inside the posts.
    pub corner_offset: f64,
    /// Goal line thickness and reference edge; the posts straddle the line's
    /// middle.
    pub goal_line_thickness: f64,
    pub goal_line_edge: XJustify,
}

/// Angle, as a fraction of π, where the back corner arcs meet the side
/// of the frame.
const GOAL_CORNER_START: f64 = 1.0 / 3.0 + 1.0 / 16.0;

impl GoalShape {
    fn check(&self) -> Result<(f64, f64), GeometryError> {
        let half_mouth = positive("goal_mouth_width", self.mouth_width)? / 2.0;
        positive("goal_post_diameter", self.post_diameter)?;
        let r = positive("goal_frame_radius", self.radius)?;
        let t = positive("goal_frame_thickness", self.thickness)?;
        if t >= r {
            return Err(GeometryError::invalid(
                "goal_frame_thickness",
                t,
                "frame is thicker than its corner radius",
            ));
        }
        let (lo, hi) = line_span(self.goal_line_edge, self.goal_line_thickness);
        let start_x = (lo + hi) / 2.0 - t / 2.0;
        Ok((half_mouth, start_x))
    }

    fn inner_arcs(&self, builder: PathBuilder, half_mouth: f64) -> Result<PathBuilder, GeometryError> {
        let cx = -self.radius;
        let cy = half_mouth - self.corner_offset;
        let r = self.radius - self.thickness;
        builder
            .arc(dvec2(cx, -cy), r, -GOAL_CORNER_START, -1.0)?
            .arc(dvec2(cx, cy), r, 1.0, GOAL_CORNER_START)
    }
}

/// The goal frame seen from above, posts included.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalFrame {
    pub goal: GoalShape,
}

impl GeneratesCenteredShape for GoalFrame {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        let g = &self.goal;
        let (hm, sx) = g.check()?;
        let (cx, cy) = (-g.radius, hm - g.corner_offset);
        let pd = g.post_diameter;
        let outer = PathBuilder::with_arc_points(arc_points)
            .point(sx, hm + pd)
            .arc(dvec2(cx, cy), g.radius, GOAL_CORNER_START, 1.0)?
            .arc(dvec2(cx, -cy), g.radius, -1.0, -GOAL_CORNER_START)?
            .points([(sx, -hm - pd), (sx, -hm)]);
        Ok(g.inner_arcs(outer, hm)?.points([(sx, hm), (sx, hm + pd)]).close())
    }
}

/// The netting area inside the goal frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalFill {
    pub goal: GoalShape,
}

impl GeneratesCenteredShape for GoalFill {
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        let g = &self.goal;
        let (hm, sx) = g.check()?;
        let start = PathBuilder::with_arc_points(arc_points).point(sx, -hm);
        Ok(g.inner_arcs(start, hm)?.point(sx, hm).close())
    }
}

/// The trapezoid behind the goal line where a goaltender may play the puck.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalkeepersRestrictedArea {
    /// Width of the trapezoid at the end boards.
    pub long_base: f64,
    /// Width of the trapezoid at the goal line.
    pub short_base: f64,
    pub thickness: f64,
    /// Distance from the goal line to the end boards.
    pub depth: f64,
    pub goal_line_thickness: f64,
    pub goal_line_edge: XJustify,
}

impl GeneratesCenteredShape for GoalkeepersRestrictedArea {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let lb = positive("long_base_width", self.long_base)? / 2.0;
        let sb = positive("short_base_width", self.short_base)? / 2.0;
        let t = positive("restricted_area_thickness", self.thickness)?;
        let d = positive("goal_line_dist", self.depth)?;
        let (lo, hi) = line_span(self.goal_line_edge, self.goal_line_thickness);
        let mid = (lo + hi) / 2.0;
        let (left, right) = (mid - t / 2.0, mid + t / 2.0);
        Ok(PointSeq::from([
            (-d, lb),
            (right, sb),
            (right, -sb),
            (-d, -lb),
            (-d, -lb + t),
            (left, -sb + t),
            (left, sb - t),
            (-d, lb - t),
            (-d, lb),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::EPSILON;

    const N: usize = 200;

    fn nhl() -> RinkOutline {
        RinkOutline {
            length: 200.0,
            width: 85.0,
            corner_radius: 28.0,
        }
    }

    // ====== boards tests ======

    #[test]
    fn boards_hug_the_rink() {
        let b = Boards {
            rink: nhl(),
            thickness: 2.0 / 12.0,
        }
        .centered_shape(N)
        .unwrap();
        let bb = b.bbox();
        assert!((bb.max.x - (100.0 + 2.0 / 12.0)).abs() < 1e-9);
        assert!((bb.max.y - (42.5 + 2.0 / 12.0)).abs() < 1e-9);
        assert!(bb.min.x.abs() < 1e-9);
        assert!(b.is_closed(EPSILON));
    }

    #[test]
    fn constraint_spans_whole_rink() {
        let c = BoardsConstraint { rink: nhl() }.centered_shape(N).unwrap();
        let bb = c.bbox();
        assert!((bb.width() - 200.0).abs() < 1e-9);
        assert!((bb.height() - 85.0).abs() < 1e-9);
        // Rounded corners remove (4 - π)·r² from the rectangle.
        let expected = 200.0 * 85.0 - (4.0 - std::f64::consts::PI) * 28.0 * 28.0;
        assert!((c.area() - expected).abs() / expected < 1e-3);
    }

    #[test]
    fn corner_radius_too_big() {
        let rink = RinkOutline {
            corner_radius: 50.0,
            ..nhl()
        };
        assert!(matches!(
            BoardsConstraint { rink }.centered_shape(N),
            Err(GeometryError::InvalidParameters { .. })
        ));
    }

    // ====== goal line tests ======

    #[test]
    fn goal_line_follows_corner_arc() {
        let gl = GoalLine {
            rink: nhl(),
            thickness: 2.0 / 12.0,
            anchor_x: 89.0,
            edge: XJustify::Center,
        }
        .centered_shape(N)
        .unwrap();
        let bb = gl.bbox();
        assert!((bb.min.x + 1.0 / 12.0).abs() < 1e-9);
        assert!((bb.max.x - 1.0 / 12.0).abs() < 1e-9);
        // The corner arc pulls the line's ends in from the side boards.
        assert!(bb.max.y < 42.5 && bb.max.y > 30.0);
    }

    #[test]
    fn goal_line_is_rectangle_before_corner() {
        let gl = GoalLine {
            rink: nhl(),
            thickness: 1.0,
            anchor_x: 60.0,
            edge: XJustify::Right,
        }
        .centered_shape(N)
        .unwrap();
        assert_eq!(gl, rectangle(-1.0, 0.0, -42.5, 42.5));
    }

    #[test]
    fn goal_line_straddling_corner_start_stays_inside_boards() {
        let rink = nhl();
        let c = rink.corner_center();
        let gl = GoalLine {
            rink,
            thickness: 2.0,
            anchor_x: c.x,
            edge: XJustify::Center,
        }
        .centered_shape(N)
        .unwrap();
        let bb = gl.bbox();
        assert!((bb.min.x + 1.0).abs() < 1e-9);
        assert!((bb.max.x - 1.0).abs() < 1e-9);
        assert!((bb.max.y - 42.5).abs() < 1e-9);
        let r = rink.corner_radius;
        for p in gl.iter() {
            let x = p.x + c.x;
            if x > c.x {
                // Inside the rounded corner, not the square one.
                let corner = dvec2(x, p.y.abs()) - c;
                assert!(corner.length() <= r + 1e-9, "{p} outside the boards");
            }
        }
        // The far edge is pulled in by the arc.
        let far_y = gl
            .iter()
            .filter(|p| (p.x - 1.0).abs() < 1e-9)
            .map(|p| p.y.abs())
            .fold(0.0, f64::max);
        assert!(far_y < 42.5 && far_y > 42.0);
    }

    #[test]
    fn goal_line_past_boards() {
        let err = GoalLine {
            rink: nhl(),
            thickness: 1.0,
            anchor_x: 100.0,
            edge: XJustify::Center,
        }
        .centered_shape(N)
        .unwrap_err();
        assert!(matches!(err, GeometryError::InvalidParameters { .. }));
    }

    // ====== faceoff tests ======

    #[test]
    fn hash_marks_stick_out() {
        let c = ZoneFaceoffCircle {
            radius: 15.0,
            thickness: 2.0 / 12.0,
            hashmark_width: 2.0,
            hashmark_ext_spacing: 71.0 / 12.0,
        }
        .centered_shape(N)
        .unwrap();
        let bb = c.bbox();
        assert!((bb.max.y - 17.0).abs() < 1e-9);
        assert!((bb.min.y + 17.0).abs() < 1e-9);
        assert!((bb.max.x - 15.0).abs() < 1e-9);
    }

    #[test]
    fn hash_spacing_wider_than_circle() {
        let err = ZoneFaceoffCircle {
            radius: 2.0,
            thickness: 0.1,
            hashmark_width: 1.0,
            hashmark_ext_spacing: 6.0,
        }
        .centered_shape(N)
        .unwrap_err();
        assert!(
            matches!(err, GeometryError::InvalidParameters { ref parameter, .. } if parameter == "hashmark_ext_spacing")
        );
    }

    #[test]
    fn stripe_stays_inside_ring() {
        let s = FaceoffSpotStripe {
            radius: 1.0,
            thickness: 2.0 / 12.0,
            gap: 3.0 / 12.0,
        }
        .centered_shape(N)
        .unwrap();
        let inner = 1.0 - 2.0 / 12.0;
        assert!(s.iter().all(|p| p.length() <= inner + 1e-9));
        assert!((s.bbox().max.x - (inner - 3.0 / 12.0)).abs() < 1e-9);
    }

    #[test]
    fn faceoff_lines_flip_by_quadrant() {
        let base = FaceoffLines {
            dist_x: 2.0,
            dist_y: 0.75,
            length: 4.0,
            width: 3.0,
            thickness: 2.0 / 12.0,
            over_x: false,
            over_y: false,
        };
        let ul = base.centered_shape(N).unwrap().bbox();
        let lr = FaceoffLines {
            over_x: true,
            over_y: true,
            ..base
        }
        .centered_shape(N)
        .unwrap()
        .bbox();
        assert_eq!(ul.max.x, -2.0);
        assert_eq!(ul.min.y, 0.75);
        assert_eq!(lr.min.x, 2.0);
        assert_eq!(lr.max.y, -0.75);
    }

    // ====== goal area tests ======

    fn crease() -> CreaseShape {
        CreaseShape {
            radius: 6.0,
            thickness: 2.0 / 12.0,
            half_width: 4.0,
            length: 4.5,
            notch_dist: 4.0,
            notch_width: 5.0 / 12.0,
            goal_line_thickness: 2.0 / 12.0,
            goal_line_edge: XJustify::Center,
        }
    }

    #[test]
    fn crease_reaches_its_radius() {
        let c = GoalCreaseOutline { crease: crease() }.centered_shape(N).unwrap();
        let bb = c.bbox();
        assert!((bb.max.x - (1.0 / 12.0 + 6.0)).abs() < 1e-9);
        assert_eq!(bb.max.y, 4.0);
        assert_eq!(bb.min.x, 1.0 / 12.0);
    }

    #[test]
    fn crease_fill_inside_outline() {
        let outline = GoalCreaseOutline { crease: crease() }.centered_shape(N).unwrap();
        let fill = GoalCreaseFill { crease: crease() }.centered_shape(N).unwrap();
        assert!(outline.bbox().contains(fill.bbox().min));
        assert!(outline.bbox().contains(fill.bbox().max));
        assert!(fill.area() < outline.bbox().width() * outline.bbox().height());
    }

    #[test]
    fn crease_wider_than_radius() {
        let c = CreaseShape {
            half_width: 7.0,
            ..crease()
        };
        assert!(GoalCreaseOutline { crease: c }.centered_shape(N).is_err());
    }

    #[test]
    fn goal_frame_sits_behind_the_line() {
        let g = GoalShape {
            mouth_width: 6.0,
            post_diameter: 2.375 / 12.0,
            radius: 20.0 / 12.0,
            thickness: 1.9 / 12.0,
            corner_offset: 1.0,
            goal_line_thickness: 2.0 / 12.0,
            goal_line_edge: XJustify::Center,
        };
        let frame = GoalFrame { goal: g }.centered_shape(N).unwrap();
        let fill = GoalFill { goal: g }.centered_shape(N).unwrap();
        let fb = frame.bbox();
        assert!((fb.min.x + 40.0 / 12.0).abs() < 1e-9);
        assert!(fb.max.x < 0.0);
        assert!(frame.is_closed(EPSILON));
        assert!(fill.bbox().max.y <= fb.max.y);
    }

    #[test]
    fn restricted_area_reaches_end_boards() {
        let a = GoalkeepersRestrictedArea {
            long_base: 28.0,
            short_base: 22.0,
            thickness: 2.0 / 12.0,
            depth: 11.0,
            goal_line_thickness: 2.0 / 12.0,
            goal_line_edge: XJustify::Center,
        }
        .centered_shape(N)
        .unwrap();
        let bb = a.bbox();
        assert_eq!(bb.min.x, -11.0);
        assert_eq!(bb.max.y, 14.0);
        assert_eq!(a.len(), 9);
    }
}
