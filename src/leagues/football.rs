//! American football fields.
//!
//! The origin is the middle of the 50 yard line. Lengths are in feet; yard
//! lines sit every three feet.

use std::fmt;
use std::str::FromStr;

use crate::errors::SurfaceError;
use crate::features::football::{CrossFieldLine, DirectionalArrow, FieldBorder, FieldConstraint, HashMark, YardLine};
use crate::features::{FeatureDescriptor, Placement, Style};
use crate::surface::{RangeTable, Sport, SurfaceBuilder};
use crate::types::{Color, Units};

const TURF: Color = Color::hex(0x196f0c);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FootballLeague {
    #[default]
    Ncaa,
}

impl FootballLeague {
    pub const ALL: [FootballLeague; 1] = [FootballLeague::Ncaa];

    pub fn params(self) -> FieldParams {
        FieldParams::default()
    }

    pub fn builder(self) -> SurfaceBuilder {
        self.params().builder(&self.to_string())
    }
}

impl fmt::Display for FootballLeague {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ncaa")
    }
}

impl FromStr for FootballLeague {
    type Err = SurfaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ncaa" => Ok(FootballLeague::Ncaa),
            _ => Err(SurfaceError::UnknownLeague {
                sport: "football",
                name: s.to_string(),
            }),
        }
    }
}

/// Field dimensions, in feet.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldParams {
    /// End line to end line, end zones included.
    pub length: f64,
    pub width: f64,
    pub border: f64,
    pub goal_line_thickness: f64,
    pub line_thickness: f64,
    /// Midfield to the near edge of each goal line.
    pub goal_line_x: f64,
    /// Midfield to the center of each try line.
    pub try_line_x: f64,
    pub try_line_length: f64,
    pub sideline_gap: f64,
    /// Long axis to the inbound lines.
    pub inbound_y: f64,
    pub tick_length: f64,
    pub hash_length: f64,
    pub arrow_base: f64,
    pub arrow_side: f64,
    /// Long axis to the center of each directional arrow.
    pub arrow_y: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        FieldParams {
            length: 360.0,
            width: 160.0,
            border: 6.0,
            goal_line_thickness: 8.0 / 12.0,
            line_thickness: 4.0 / 12.0,
            goal_line_x: 150.0,
            try_line_x: 141.0,
            try_line_length: 2.0,
            sideline_gap: 4.0 / 12.0,
            inbound_y: 20.0,
            tick_length: 10.0 / 12.0,
            hash_length: 2.0,
            arrow_base: 18.0 / 12.0,
            arrow_side: 3.0,
            arrow_y: 55.0,
        }
    }
}

/// x position of a yard line, numbered from the -x goal line.
fn yard_x(yard: u32) -> f64 {
    3.0 * (f64::from(yard) - 50.0)
}

impl FieldParams {
    pub fn ranges(&self) -> RangeTable {
        let hx = self.length / 2.0 + self.border + 1.0;
        let hy = self.width / 2.0 + self.border + 1.0;
        RangeTable::new((-hx, hx), (-hy, hy))
    }

    /// Every field feature with its default placement and colors.
    pub fn builder(&self, league: &str) -> SurfaceBuilder {
        let hw = self.width / 2.0;
        let t = self.line_thickness;
        let white = |z| Style::solid(Color::WHITE, z);

        let mut features = vec![
            FeatureDescriptor::new(
                "field_border",
                FieldBorder {
                    length: self.length,
                    width: self.width,
                    border: self.border,
                },
                Placement::default().mirrored_x(),
                white(10),
            )
            .unconstrained(),
            FeatureDescriptor::new(
                "goal_line",
                CrossFieldLine {
                    span: self.width,
                    thickness: self.goal_line_thickness,
                },
                Placement::at(-self.goal_line_x - self.goal_line_thickness / 2.0, 0.0).mirrored_x(),
                white(10),
            ),
            FeatureDescriptor::new(
                "try_line",
                CrossFieldLine {
                    span: self.try_line_length,
                    thickness: t,
                },
                Placement::at(-self.try_line_x, 0.0).mirrored_x(),
                white(10),
            ),
        ];

        let yard_line = YardLine {
            field_width: self.width,
            thickness: t,
            sideline_gap: self.sideline_gap,
            inbound_y: self.inbound_y,
            tick_length: self.tick_length,
            tick_thickness: t,
        };
        for yard in (5..=50).step_by(5) {
            let placement = Placement::at(yard_x(yard), 0.0);
            features.push(FeatureDescriptor::new(
                format!("yard_line_{yard}"),
                yard_line.clone(),
                if yard == 50 { placement } else { placement.mirrored_x() },
                white(10),
            ));
        }

        let hash = HashMark {
            length: self.hash_length,
            thickness: t,
        };
        for yard in (1..50).filter(|y| y % 5 != 0) {
            let x = yard_x(yard);
            features.push(FeatureDescriptor::new(
                format!("yard_line_{yard}_sideline_hash"),
                hash.clone(),
                Placement::at(x, -hw + self.sideline_gap + self.hash_length / 2.0).mirrored_xy(),
                white(10),
            ));
            features.push(FeatureDescriptor::new(
                format!("yard_line_{yard}_inbound_hash"),
                hash.clone(),
                Placement::at(x, -self.inbound_y - self.hash_length / 2.0).mirrored_xy(),
                white(10),
            ));
        }

        for yard in [10, 20, 30, 40] {
            features.push(FeatureDescriptor::new(
                format!("{yard}_arrow"),
                DirectionalArrow {
                    base: self.arrow_base,
                    side: self.arrow_side,
                },
                Placement::at(yard_x(yard) - 2.0 / 12.0 - 5.5, -self.arrow_y).mirrored_xy(),
                white(10),
            ));
        }

        let constraint = FeatureDescriptor::new(
            "field_constraint",
            FieldConstraint {
                length: self.length,
                width: self.width,
            },
            Placement::default(),
            Style::solid(TURF, 0),
        )
        .hidden();

        SurfaceBuilder::new(Sport::Football, league, Units::Feet, self.length, self.width)
            .constraint(constraint)
            .features(features)
            .ranges(self.ranges())
            .background(TURF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PointSeq;
    use glam::dvec2;

    #[test]
    fn field_builds() {
        let s = FootballLeague::Ncaa.builder().build().unwrap();
        let e = s.extent();
        assert_eq!(e.max.x, 186.0);
        assert_eq!(e.min.y, -86.0);
        assert!(s.contains(dvec2(180.0, 80.0)));
        assert!(!s.contains(dvec2(181.0, 0.0)));
    }

    #[test]
    fn yard_line_positions() {
        let s = FootballLeague::Ncaa.builder().build().unwrap();
        let ten = s.feature("yard_line_10").unwrap();
        assert_eq!(ten.copies().count(), 2);
        let first = PointSeq::from(ten.copies().next().unwrap().to_vec());
        assert!((first.bbox().center().x + 120.0).abs() < 1e-9);
        assert_eq!(s.feature("yard_line_50").unwrap().copies().count(), 1);
    }

    #[test]
    fn one_yard_hashes() {
        let s = FootballLeague::Ncaa.builder().build().unwrap();
        let sideline = s.features().iter().filter(|f| f.name.ends_with("_sideline_hash")).count();
        assert_eq!(sideline, 40);
        assert!(s.feature("yard_line_5_inbound_hash").is_none());
        let h = s.feature("yard_line_1_sideline_hash").unwrap().bbox();
        assert!((h.min.y - (-80.0 + 4.0 / 12.0)).abs() < 1e-9);
    }

    #[test]
    fn arrows_point_toward_goal() {
        let s = FootballLeague::Ncaa.builder().build().unwrap();
        let a = s.feature("10_arrow").unwrap().copies().next().unwrap().to_vec();
        let tip = a.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        assert!(tip < -120.0 - 2.0 / 12.0 - 5.5);
    }
}
