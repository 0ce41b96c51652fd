//! Basketball courts.
//!
//! The origin is center court. Every league draws the same base markings;
//! leagues then add their own lane spaces, sideline marks and alternate
//! lanes, some of them hidden by default.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::errors::SurfaceError;
use crate::features::basketball::{
    Backboard, BasketPosition, BasketRing, Block, CenterCircleFill, CenterCircleOutline, CourtApron, CourtConstraint,
    DefensiveBoxMark, DivisionLine, EndLine, Extension, FreeThrowCircleDash, FreeThrowCircleOutline,
    FreeThrowLaneBoundary, HalfCourt, Net, Paint, RestrictedArc, SideLine, SidelineHash, ThreePointArc,
    ThreePointLine, TwoPointRange,
};
use crate::features::{CourtSide, FeatureDescriptor, Placement, Style};
use crate::surface::{RangeTable, Sport, SurfaceBuilder};
use crate::types::{Color, Units};

const WOOD: Color = Color::hex(0xd2ab6f);
const LANE_BLUE: Color = Color::hex(0x1d428a);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BasketballLeague {
    #[default]
    Nba,
    Wnba,
    Ncaa,
    Fiba,
    Nfhs,
}

impl BasketballLeague {
    pub const ALL: [BasketballLeague; 5] = [
        BasketballLeague::Nba,
        BasketballLeague::Wnba,
        BasketballLeague::Ncaa,
        BasketballLeague::Fiba,
        BasketballLeague::Nfhs,
    ];

    pub fn params(self) -> CourtParams {
        match self {
            BasketballLeague::Nba => CourtParams::pro(23.75),
            BasketballLeague::Wnba => CourtParams::pro(22.0 + 1.75 / 12.0),
            BasketballLeague::Ncaa => CourtParams::ncaa(),
            BasketballLeague::Fiba => CourtParams::fiba(),
            BasketballLeague::Nfhs => CourtParams::nfhs(),
        }
    }

    pub fn builder(self) -> SurfaceBuilder {
        self.params().builder(&self.to_string())
    }
}

impl fmt::Display for BasketballLeague {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BasketballLeague::Nba => "nba",
            BasketballLeague::Wnba => "wnba",
            BasketballLeague::Ncaa => "ncaa",
            BasketballLeague::Fiba => "fiba",
            BasketballLeague::Nfhs => "nfhs",
        })
    }
}

impl FromStr for BasketballLeague {
    type Err = SurfaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nba" => Ok(BasketballLeague::Nba),
            "wnba" => Ok(BasketballLeague::Wnba),
            "ncaa" => Ok(BasketballLeague::Ncaa),
            "fiba" => Ok(BasketballLeague::Fiba),
            "nfhs" | "high school" => Ok(BasketballLeague::Nfhs),
            _ => Err(SurfaceError::UnknownLeague {
                sport: "basketball",
                name: s.to_string(),
            }),
        }
    }
}

/// A lane-space mark, positioned by the distance from the end line to its
/// center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockSpec {
    pub from_end: f64,
    pub length: f64,
}

/// A free-throw lane with its lane-space marks.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneMarks {
    /// Name prefix of an alternate lane; `None` for the league's own lane.
    pub prefix: Option<&'static str>,
    /// `None` uses the distance from the end line to the free-throw line.
    pub length: Option<f64>,
    pub width: f64,
    pub visible: bool,
    pub paint: Color,
    pub block_prefix: &'static str,
    /// Distance from the long axis to the center of each block.
    pub block_y: f64,
    pub block_width: f64,
    pub blocks: Vec<BlockSpec>,
    pub blocks_visible: bool,
}

/// A line perpendicular to the side line, positioned by the distance from
/// the end line to its far edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidelineMark {
    pub from_end: f64,
    pub length: f64,
    pub direction: Extension,
    /// Also draw it on the -y side line.
    pub both_sidelines: bool,
    pub visible: bool,
}

/// The small marks that show where a defender may stand in the lane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefensiveBox {
    pub baseline_mark_y: f64,
    pub painted_area_mark: bool,
}

/// Every dimension of a court, in `units`.
#[derive(Debug, Clone, PartialEq)]
pub struct CourtParams {
    pub units: Units,
    pub length: f64,
    pub width: f64,
    pub line_thickness: f64,
    pub basket: BasketPosition,
    pub backboard_width: f64,
    pub backboard_thickness: f64,
    pub apron_baseline: f64,
    pub apron_sideline: f64,
    pub center_circle_radius: f64,
    pub inner_center_circle_radius: Option<f64>,
    /// Side line to the outside edge of the corner three-point lines.
    pub corner_three_dist: f64,
    pub three_point_radius: f64,
    /// Face of the backboard to the free-throw line.
    pub free_throw_dist: f64,
    pub free_throw_circle_radius: f64,
    pub free_throw_extended_arc: f64,
    pub free_throw_dash_length: f64,
    pub free_throw_dashes: usize,
    pub restricted_arc_radius: Option<f64>,
    pub ring_radius: f64,
    pub ring_extension_width: f64,
    pub lanes: Vec<LaneMarks>,
    pub defensive_box: Option<DefensiveBox>,
    pub coaches_box: SidelineMark,
    /// Distance between the two substitution area marks.
    pub substitution_area_length: f64,
    pub substitution_area_visible: bool,
    pub team_bench_area: Option<SidelineMark>,
    pub throw_in_line: Option<SidelineMark>,
}

impl Default for CourtParams {
    /// The markings every league starts from, in feet.
    fn default() -> Self {
        CourtParams {
            units: Units::Feet,
            length: 94.0,
            width: 50.0,
            line_thickness: 2.0 / 12.0,
            basket: BasketPosition {
                basket_dist: 5.25,
                ring_to_backboard: 15.0 / 12.0,
            },
            backboard_width: 6.0,
            backboard_thickness: 4.0 / 12.0,
            apron_baseline: 8.0,
            apron_sideline: 5.0,
            center_circle_radius: 6.0,
            inner_center_circle_radius: None,
            corner_three_dist: 3.0,
            three_point_radius: 23.75,
            free_throw_dist: 15.0,
            free_throw_circle_radius: 6.0,
            free_throw_extended_arc: 0.0,
            free_throw_dash_length: 15.5 / 12.0,
            free_throw_dashes: 0,
            restricted_arc_radius: Some(4.0 + 2.0 / 12.0),
            ring_radius: 9.0 / 12.0,
            ring_extension_width: 7.0 / 12.0,
            lanes: vec![LaneMarks {
                prefix: None,
                length: None,
                width: 16.0,
                visible: true,
                paint: WOOD,
                block_prefix: "block",
                block_y: 0.0,
                block_width: 0.0,
                blocks: Vec::new(),
                blocks_visible: true,
            }],
            defensive_box: None,
            coaches_box: SidelineMark {
                from_end: 28.0,
                length: 3.0,
                direction: Extension::Inward,
                both_sidelines: true,
                visible: true,
            },
            substitution_area_length: 8.0 + 2.0 / 12.0,
            substitution_area_visible: true,
            team_bench_area: None,
            throw_in_line: None,
        }
    }
}

fn pro_lane(prefix: Option<&'static str>, visible: bool, paint: Color) -> LaneMarks {
    LaneMarks {
        prefix,
        length: prefix.map(|_| 19.0),
        width: 16.0,
        visible,
        paint,
        block_prefix: "pro_block",
        block_y: 8.0 + 3.0 / 12.0,
        block_width: 0.5,
        blocks: [7.0 - 1.0 / 12.0, 8.0 + 1.0 / 12.0, 11.0 - 1.0 / 12.0, 14.0 - 3.0 / 12.0]
            .into_iter()
            .map(|from_end| BlockSpec {
                from_end,
                length: 2.0 / 12.0,
            })
            .collect(),
        blocks_visible: visible,
    }
}

fn amateur_lane(prefix: Option<&'static str>, visible: bool, paint: Color) -> LaneMarks {
    LaneMarks {
        prefix,
        length: prefix.map(|_| 19.0),
        width: 12.0,
        visible,
        paint,
        block_prefix: "amateur_block",
        block_y: 6.0 + 4.0 / 12.0,
        block_width: 8.0 / 12.0,
        blocks: vec![
            BlockSpec {
                from_end: 7.5,
                length: 1.0,
            },
            BlockSpec {
                from_end: 11.0 + 1.0 / 12.0,
                length: 2.0 / 12.0,
            },
            BlockSpec {
                from_end: 14.0 + 3.0 / 12.0,
                length: 2.0 / 12.0,
            },
            BlockSpec {
                from_end: 17.0 - 3.0 / 12.0,
                length: 2.0 / 12.0,
            },
        ],
        blocks_visible: visible,
    }
}

impl CourtParams {
    /// NBA and WNBA courts, which differ only in the three-point distance.
    pub fn pro(three_point_radius: f64) -> Self {
        CourtParams {
            three_point_radius,
            free_throw_extended_arc: 12.29 / 12.0,
            free_throw_dashes: 6,
            inner_center_circle_radius: Some(2.0 - 2.0 / 12.0),
            lanes: vec![
                pro_lane(None, true, WOOD),
                amateur_lane(Some("amateur"), false, LANE_BLUE),
            ],
            defensive_box: Some(DefensiveBox {
                baseline_mark_y: 11.0,
                painted_area_mark: true,
            }),
            ..CourtParams::default()
        }
    }

    pub fn ncaa() -> Self {
        CourtParams {
            three_point_radius: 22.0 + 1.75 / 12.0,
            lanes: vec![amateur_lane(None, true, WOOD), pro_lane(Some("pro"), false, LANE_BLUE)],
            defensive_box: Some(DefensiveBox {
                baseline_mark_y: 9.0,
                painted_area_mark: false,
            }),
            coaches_box: SidelineMark {
                from_end: 38.0,
                length: 2.0,
                direction: Extension::Outward,
                both_sidelines: false,
                visible: true,
            },
            substitution_area_visible: false,
            team_bench_area: Some(SidelineMark {
                from_end: 28.0,
                length: 6.0 + 2.0 / 12.0,
                direction: Extension::Both,
                both_sidelines: false,
                visible: true,
            }),
            throw_in_line: Some(SidelineMark {
                from_end: 28.0,
                length: 2.0 / 12.0,
                direction: Extension::Inward,
                both_sidelines: false,
                visible: true,
            }),
            ..CourtParams::default()
        }
    }

    /// International dimensions, in meters.
    pub fn fiba() -> Self {
        let mut coaches_box = CourtParams::default().coaches_box;
        coaches_box.visible = false;
        CourtParams {
            units: Units::Meters,
            length: 28.0,
            width: 15.0,
            line_thickness: 0.05,
            basket: BasketPosition {
                basket_dist: 1.575,
                ring_to_backboard: 0.375,
            },
            backboard_width: 1.8,
            backboard_thickness: 0.05,
            apron_baseline: 6.0,
            apron_sideline: 5.0,
            center_circle_radius: 1.8,
            corner_three_dist: 0.9,
            three_point_radius: 6.75,
            free_throw_dist: 4.225,
            free_throw_circle_radius: 1.8,
            restricted_arc_radius: Some(1.3),
            ring_radius: 0.225,
            ring_extension_width: 0.126,
            lanes: vec![LaneMarks {
                prefix: None,
                length: None,
                width: 4.9,
                visible: true,
                paint: WOOD,
                block_prefix: "block",
                block_y: 2.5,
                block_width: 0.1,
                blocks: [(1.775, 0.05), (2.85, 0.4), (3.925, 0.05), (4.825, 0.05)]
                    .into_iter()
                    .map(|(from_end, length)| BlockSpec { from_end, length })
                    .collect(),
                blocks_visible: true,
            }],
            coaches_box,
            substitution_area_length: 10.0,
            substitution_area_visible: false,
            team_bench_area: Some(SidelineMark {
                from_end: 9.0,
                length: 2.0,
                direction: Extension::Outward,
                both_sidelines: false,
                visible: true,
            }),
            throw_in_line: Some(SidelineMark {
                from_end: 8.325,
                length: 0.15,
                direction: Extension::Inward,
                both_sidelines: false,
                visible: true,
            }),
            ..CourtParams::default()
        }
    }

    /// High school dimensions.
    pub fn nfhs() -> Self {
        let mut coaches_box = CourtParams::default().coaches_box;
        coaches_box.visible = false;
        CourtParams {
            length: 84.0,
            apron_baseline: 3.0,
            apron_sideline: 3.0,
            corner_three_dist: 5.25,
            three_point_radius: 19.75,
            restricted_arc_radius: None,
            lanes: vec![LaneMarks {
                prefix: None,
                length: None,
                width: 12.0,
                visible: true,
                paint: WOOD,
                block_prefix: "block",
                block_y: 6.0 + 4.0 / 12.0,
                block_width: 8.0 / 12.0,
                blocks: [7.0 + 11.0 / 12.0, 11.0 - 1.0 / 12.0, 14.25, 17.0 + 5.0 / 12.0]
                    .into_iter()
                    .map(|from_end| BlockSpec {
                        from_end,
                        length: 2.0 / 12.0,
                    })
                    .collect(),
                blocks_visible: true,
            }],
            coaches_box,
            substitution_area_visible: false,
            ..CourtParams::default()
        }
    }

    /// End line to the far edge of the free-throw line.
    pub fn lane_length(&self) -> f64 {
        self.basket.basket_dist - self.basket.ring_to_backboard + self.free_throw_dist
    }

    pub fn ranges(&self) -> RangeTable {
        let hx = self.length / 2.0 + self.apron_baseline + 1.0;
        let hy = self.width / 2.0 + self.apron_sideline + 1.0;
        RangeTable::new((-hx, hx), (-hy, hy))
    }

    /// Every court feature with its default placement and colors.
    pub fn builder(&self, league: &str) -> SurfaceBuilder {
        let hl = self.length / 2.0;
        let hw = self.width / 2.0;
        let t = self.line_thickness;
        let at_basket = Placement::at(hl, 0.0).mirrored_x();
        let line = |z| Style::solid(Color::BLACK, z);

        let mut features = vec![
            FeatureDescriptor::new(
                "offensive_half_court",
                HalfCourt {
                    length: self.length,
                    width: self.width,
                    side: CourtSide::Offense,
                },
                Placement::default(),
                Style::solid(WOOD, 0),
            )
            .unconstrained(),
            FeatureDescriptor::new(
                "defensive_half_court",
                HalfCourt {
                    length: self.length,
                    width: self.width,
                    side: CourtSide::Defense,
                },
                Placement::default(),
                Style::solid(WOOD, 0),
            )
            .unconstrained(),
        ];

        let mut circles = vec![("center_circle", self.center_circle_radius)];
        if let Some(r) = self.inner_center_circle_radius {
            circles.push(("inner_center_circle", r));
        }
        for (name, radius) in circles {
            features.push(FeatureDescriptor::new(
                format!("{name}_outline"),
                CenterCircleOutline { radius, thickness: t },
                Placement::default().mirrored_x(),
                line(10),
            ));
            features.push(FeatureDescriptor::new(
                format!("{name}_fill"),
                CenterCircleFill { radius, thickness: t },
                Placement::default().mirrored_x(),
                Style::solid(WOOD, 10),
            ));
        }

        features.extend([
            FeatureDescriptor::new(
                "division_line",
                DivisionLine {
                    court_width: self.width,
                    thickness: t,
                },
                Placement::default(),
                line(15),
            ),
            FeatureDescriptor::new(
                "end_line",
                EndLine {
                    court_width: self.width,
                    thickness: t,
                },
                at_basket,
                line(15),
            )
            .unconstrained(),
            FeatureDescriptor::new(
                "side_line",
                SideLine {
                    court_length: self.length,
                    thickness: t,
                },
                Placement::at(0.0, hw).mirrored_y(),
                line(15),
            )
            .unconstrained(),
            FeatureDescriptor::new(
                "court_apron",
                CourtApron {
                    court_length: self.length,
                    court_width: self.width,
                    baseline_extension: self.apron_baseline,
                    sideline_extension: self.apron_sideline,
                },
                Placement::default().mirrored_x(),
                Style::solid(WOOD, 10),
            )
            .unconstrained(),
        ]);

        let cb = self.coaches_box;
        let coaches = Placement::at(hl - cb.from_end - t, hw).mirrored_x();
        features.push(self.sideline_mark(
            "coaches_box",
            cb,
            if cb.both_sidelines { coaches.mirrored_y() } else { coaches },
        ));
        let sub = FeatureDescriptor::new(
            "substitution_area",
            SidelineHash {
                length: 4.0,
                thickness: t,
                direction: Extension::Outward,
            },
            Placement::at(self.substitution_area_length / 2.0, hw + t).mirrored_x(),
            line(16),
        )
        .unconstrained();
        features.push(if self.substitution_area_visible { sub } else { sub.hidden() });
        if let Some(m) = self.team_bench_area {
            features.push(self.sideline_mark(
                "team_bench_area",
                m,
                Placement::at(hl - m.from_end - t, hw).mirrored_x(),
            ));
        }
        if let Some(m) = self.throw_in_line {
            features.push(self.sideline_mark(
                "throw_in_line",
                m,
                Placement::at(hl - m.from_end - t, -hw - t).mirrored_x(),
            ));
        }

        let arc = ThreePointArc {
            radius: self.three_point_radius,
            half_width: hw - self.corner_three_dist,
            basket_dist: self.basket.basket_dist,
            thickness: t,
        };
        features.push(FeatureDescriptor::new(
            "three_point_line",
            ThreePointLine { arc },
            at_basket,
            line(10),
        ));
        features.push(FeatureDescriptor::new(
            "two_point_range",
            TwoPointRange { arc },
            at_basket,
            Style::solid(WOOD, 5),
        ));

        for lane in &self.lanes {
            self.push_lane(&mut features, lane);
        }

        let lane_length = self.lane_length();
        features.push(FeatureDescriptor::new(
            "free_throw_circle_outline",
            FreeThrowCircleOutline {
                radius: self.free_throw_circle_radius,
                thickness: t,
                lane_length,
                extended_arc: self.free_throw_extended_arc,
            },
            at_basket,
            line(15),
        ));
        let r = self.free_throw_circle_radius;
        let dash = self.free_throw_dash_length / r / PI;
        let mut start = 0.5 - (self.free_throw_extended_arc / r) / PI - dash;
        for i in 1..=self.free_throw_dashes {
            features.push(FeatureDescriptor::new(
                format!("free_throw_circle_dash_{i}"),
                FreeThrowCircleDash {
                    radius: r,
                    thickness: t,
                    lane_length,
                    start,
                    end: start - dash,
                },
                at_basket,
                line(15),
            ));
            start -= 2.0 * dash;
        }

        if let Some(b) = self.defensive_box {
            features.push(FeatureDescriptor::new(
                "defensive_box_baseline_mark",
                DefensiveBoxMark {
                    length: 0.5,
                    width: t,
                },
                Placement::at(hl, b.baseline_mark_y).mirrored_xy(),
                line(10),
            ));
            if b.painted_area_mark {
                features.push(FeatureDescriptor::new(
                    "defensive_box_painted_area_mark",
                    DefensiveBoxMark { length: t, width: 0.5 },
                    Placement::at(hl - 13.0, 4.5).mirrored_xy(),
                    line(10),
                ));
            }
        }

        if let Some(radius) = self.restricted_arc_radius {
            features.push(FeatureDescriptor::new(
                "restricted_arc",
                RestrictedArc {
                    radius,
                    thickness: t,
                    basket: self.basket,
                },
                at_basket,
                line(10),
            ));
        }
        features.extend([
            FeatureDescriptor::new(
                "backboard",
                Backboard {
                    width: self.backboard_width,
                    thickness: self.backboard_thickness,
                    basket: self.basket,
                },
                at_basket,
                line(15),
            ),
            FeatureDescriptor::new(
                "basket_ring",
                BasketRing {
                    radius: self.ring_radius,
                    thickness: t,
                    extension_width: self.ring_extension_width,
                    basket: self.basket,
                },
                at_basket,
                line(15),
            ),
            FeatureDescriptor::new(
                "net",
                Net {
                    radius: self.ring_radius,
                    basket: self.basket,
                },
                at_basket,
                Style::solid(Color::WHITE, 16),
            ),
        ]);

        let constraint = FeatureDescriptor::new(
            "court_constraint",
            CourtConstraint {
                length: self.length,
                width: self.width,
            },
            Placement::default(),
            Style::solid(WOOD, 0),
        )
        .hidden();

        SurfaceBuilder::new(Sport::Basketball, league, self.units, self.length, self.width)
            .constraint(constraint)
            .features(features)
            .ranges(self.ranges())
            .background(WOOD)
    }

    fn sideline_mark(&self, name: &str, m: SidelineMark, placement: Placement) -> FeatureDescriptor {
        let d = FeatureDescriptor::new(
            name,
            SidelineHash {
                length: m.length,
                thickness: self.line_thickness,
                direction: m.direction,
            },
            placement,
            Style::solid(Color::BLACK, 16),
        )
        .unconstrained();
        if m.visible { d } else { d.hidden() }
    }

    fn push_lane(&self, features: &mut Vec<FeatureDescriptor>, lane: &LaneMarks) {
        let hl = self.length / 2.0;
        let t = self.line_thickness;
        let lane_length = lane.length.unwrap_or_else(|| self.lane_length());
        let name = |base: &str| match lane.prefix {
            Some(p) => format!("{p}_{base}"),
            None => base.to_string(),
        };
        let show = |d: FeatureDescriptor, visible: bool| if visible { d } else { d.hidden() };

        features.push(show(
            FeatureDescriptor::new(
                name("free_throw_lane_boundary"),
                FreeThrowLaneBoundary {
                    lane_length,
                    lane_width: lane.width,
                    thickness: t,
                },
                Placement::at(hl, 0.0).mirrored_x(),
                Style::solid(Color::BLACK, 10),
            ),
            lane.visible,
        ));
        features.push(show(
            FeatureDescriptor::new(
                name("paint"),
                Paint {
                    lane_length,
                    lane_width: lane.width,
                    thickness: t,
                },
                Placement::at(hl, 0.0).mirrored_x(),
                Style::solid(lane.paint, 10),
            ),
            lane.visible,
        ));
        for (i, b) in lane.blocks.iter().enumerate() {
            features.push(show(
                FeatureDescriptor::new(
                    format!("{}_{}", lane.block_prefix, i + 1),
                    Block {
                        length: b.length,
                        width: lane.block_width,
                    },
                    Placement::at(hl - b.from_end, lane.block_y).mirrored_xy(),
                    Style::solid(Color::BLACK, 10),
                ),
                lane.blocks_visible,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn build(league: BasketballLeague) -> crate::surface::Surface {
        league.builder().arc_points(60).build().unwrap()
    }

    #[test]
    fn every_league_builds() {
        for league in BasketballLeague::ALL {
            let s = build(league);
            assert!(!s.extent().is_empty(), "{league}");
            assert!(s.feature("three_point_line").is_some(), "{league}");
        }
    }

    #[test]
    fn nba_lane_length() {
        assert!((CourtParams::pro(23.75).lane_length() - 19.0).abs() < 1e-12);
    }

    #[test]
    fn nba_extent_includes_apron() {
        let e = build(BasketballLeague::Nba).extent();
        assert!((e.max.x - 55.0).abs() < 1e-9);
        assert!((e.max.y - 30.0).abs() < 1e-9);
    }

    #[test]
    fn nba_free_throw_dashes() {
        let s = build(BasketballLeague::Nba);
        let dashes = s
            .features()
            .iter()
            .filter(|f| f.name.starts_with("free_throw_circle_dash_"))
            .count();
        assert_eq!(dashes, 6);
    }

    #[test]
    fn alternate_lanes_are_hidden() {
        let s = build(BasketballLeague::Nba);
        assert!(!s.feature("amateur_paint").unwrap().visible);
        assert!(s.feature("pro_block_1").unwrap().visible);
        let s = build(BasketballLeague::Ncaa);
        assert!(!s.feature("pro_paint").unwrap().visible);
        assert!(s.feature("amateur_block_4").unwrap().visible);
        assert!(s.feature("throw_in_line").is_some());
    }

    #[test]
    fn nfhs_has_no_restricted_arc() {
        let s = build(BasketballLeague::Nfhs);
        assert!(s.feature("restricted_arc").is_none());
        assert!(!s.feature("coaches_box").unwrap().visible);
    }

    #[test]
    fn fiba_is_metric() {
        let s = build(BasketballLeague::Fiba);
        assert_eq!(s.units(), Units::Meters);
        assert!(s.contains(dvec2(14.0, 7.5)));
        assert!(!s.contains(dvec2(14.1, 0.0)));
    }

    #[test]
    fn unknown_league() {
        assert!(matches!(
            "euroleague".parse::<BasketballLeague>(),
            Err(SurfaceError::UnknownLeague { sport: "basketball", .. })
        ));
    }
}
