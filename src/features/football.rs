//! Football field markings.
//!
//! Features are drawn for the -x half of the field and mirrored onto the
//! other half by their placement. Yard lines are numbered from the goal line
//! they belong to, so the 10 yard line sits 40 yards from midfield.

use enum_dispatch::enum_dispatch;

use super::{GeneratesCenteredShape, positive};
use crate::errors::GeometryError;
use crate::geometry::{PointSeq, rectangle};

#[enum_dispatch(GeneratesCenteredShape)]
#[derive(Debug, Clone, PartialEq)]
pub enum FootballFeature {
    FieldBorder,
    FieldConstraint,
    CrossFieldLine,
    YardLine,
    HashMark,
    DirectionalArrow,
}

lift_into_feature!(FootballFeature:
    FieldBorder, FieldConstraint, CrossFieldLine, YardLine, HashMark, DirectionalArrow,
);

/// The -x half of the white border outside the end line and side lines.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBorder {
    /// End line to end line.
    pub length: f64,
    pub width: f64,
    pub border: f64,
}

impl GeneratesCenteredShape for FieldBorder {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let hl = positive("field_length", self.length)? / 2.0;
        let hw = positive("field_width", self.width)? / 2.0;
        let b = positive("border_thickness", self.border)?;
        Ok(PointSeq::from([
            (0.0, -hw),
            (-hl, -hw),
            (-hl, hw),
            (0.0, hw),
            (0.0, hw + b),
            (-hl - b, hw + b),
            (-hl - b, -hw - b),
            (0.0, -hw - b),
            (0.0, -hw),
        ]))
    }
}

/// The field of play and both end zones.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConstraint {
    pub length: f64,
    pub width: f64,
}

impl GeneratesCenteredShape for FieldConstraint {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let hl = positive("field_length", self.length)? / 2.0;
        let hw = positive("field_width", self.width)? / 2.0;
        Ok(rectangle(-hl, hl, -hw, hw))
    }
}

/// A straight line across the field, centered on its anchor. Used for the
/// goal lines and the try lines.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossFieldLine {
    pub span: f64,
    pub thickness: f64,
}

impl GeneratesCenteredShape for CrossFieldLine {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let hs = positive("line_length", self.span)? / 2.0;
        let ht = positive("line_thickness", self.thickness)? / 2.0;
        Ok(rectangle(-ht, ht, -hs, hs))
    }
}

/// A five-yard line with the short ticks that mark the inbound lines on
/// either side of it.
#[derive(Debug, Clone, PartialEq)]
pub struct YardLine {
    pub field_width: f64,
    pub thickness: f64,
    /// Gap left between the ends of the line and the side lines.
    pub sideline_gap: f64,
    /// Distance of the inbound lines from the long axis.
    pub inbound_y: f64,
    /// How far a tick sticks out from the line.
    pub tick_length: f64,
    pub tick_thickness: f64,
}

impl GeneratesCenteredShape for YardLine {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let h = positive("line_thickness", self.thickness)? / 2.0;
        let top = positive("field_width", self.field_width)? / 2.0 - self.sideline_gap;
        let hy = positive("inbound_line_dist", self.inbound_y)?;
        let e = positive("tick_length", self.tick_length)?;
        let s = positive("tick_thickness", self.tick_thickness)?;
        if hy + s >= top {
            return Err(GeometryError::invalid(
                "inbound_line_dist",
                hy,
                "inbound lines must lie inside the side lines",
            ));
        }
        Ok(PointSeq::from([
            (-h, -top),
            (-h, -hy),
            (-h - e, -hy),
            (-h - e, -hy + s),
            (-h, -hy + s),
            (-h, hy - s),
            (-h - e, hy - s),
            (-h - e, hy),
            (-h, hy),
            (-h, top),
            (h, top),
            (h, hy),
            (h + e, hy),
            (h + e, hy - s),
            (h, hy - s),
            (h, -hy + s),
            (h + e, -hy + s),
            (h + e, -hy),
            (h, -hy),
            (h, -top),
            (-h, -top),
        ]))
    }
}

/// A one-yard mark: a short line parallel to the yard lines.
#[derive(Debug, Clone, PartialEq)]
pub struct HashMark {
    pub length: f64,
    pub thickness: f64,
}

impl GeneratesCenteredShape for HashMark {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let hl = positive("hash_length", self.length)? / 2.0;
        let ht = positive("hash_thickness", self.thickness)? / 2.0;
        Ok(rectangle(-ht, ht, -hl, hl))
    }
}

/// An isosceles triangle next to a yard number, pointing toward -x.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionalArrow {
    pub base: f64,
    /// Length of each of the two equal sides.
    pub side: f64,
}

impl GeneratesCenteredShape for DirectionalArrow {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let hb = positive("arrow_base", self.base)? / 2.0;
        let side = positive("arrow_side", self.side)?;
        if side <= hb {
            return Err(GeometryError::invalid(
                "arrow_side",
                side,
                "arrow sides must be longer than half its base",
            ));
        }
        let depth = (side * side - hb * hb).sqrt();
        Ok(PointSeq::from([(0.0, hb), (0.0, -hb), (-depth, 0.0), (0.0, hb)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_surrounds_half_field() {
        let b = FieldBorder {
            length: 360.0,
            width: 160.0,
            border: 6.0,
        }
        .centered_shape(0)
        .unwrap();
        let bb = b.bbox();
        assert_eq!(bb.min.x, -186.0);
        assert_eq!(bb.max.y, 86.0);
        assert_eq!(b.len(), 9);
    }

    #[test]
    fn yard_line_has_ticks_on_both_sides() {
        let y = YardLine {
            field_width: 160.0,
            thickness: 4.0 / 12.0,
            sideline_gap: 4.0 / 12.0,
            inbound_y: 20.0,
            tick_length: 10.0 / 12.0,
            tick_thickness: 4.0 / 12.0,
        }
        .centered_shape(0)
        .unwrap();
        let bb = y.bbox();
        assert_eq!(y.len(), 21);
        assert!(y.is_closed(0.0));
        assert!((bb.width() - (4.0 / 12.0 + 20.0 / 12.0)).abs() < 1e-12);
        assert!((bb.max.y - (80.0 - 4.0 / 12.0)).abs() < 1e-12);
    }

    #[test]
    fn arrow_depth() {
        let a = DirectionalArrow {
            base: 1.5,
            side: 3.0,
        }
        .centered_shape(0)
        .unwrap();
        let depth = (9.0f64 - 0.5625).sqrt();
        assert!((a.bbox().min.x + depth).abs() < 1e-12);
    }
}
