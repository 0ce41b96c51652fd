//! Ice hockey rinks.
//!
//! Every league shares one layout; only the dimensions differ. The origin is
//! center ice with +x toward the offensive end.

use std::fmt;
use std::str::FromStr;

use crate::errors::SurfaceError;
use crate::features::hockey::{
    Boards, BoardsConstraint, CenterFaceoffCircle, CreaseShape, EndZone, FaceoffLines, FaceoffSpot,
    FaceoffSpotStripe, GoalCreaseFill, GoalCreaseOutline, GoalFill, GoalFrame, GoalLine, GoalShape,
    GoalkeepersRestrictedArea, NeutralZone, RefereeCrease, RingedFaceoffSpot, RinkLine, RinkOutline,
    ZoneFaceoffCircle,
};
use crate::features::{CourtSide, FeatureDescriptor, Placement, Style, XJustify};
use crate::surface::{DisplayRange, RangeTable, Sport, SurfaceBuilder};
use crate::types::{Color, Units};

const RED: Color = Color::hex(0xc8102e);
const BLUE: Color = Color::hex(0x0033a0);
const CREASE_BLUE: Color = Color::hex(0x41b6e6);
const NET_GRAY: Color = Color::hex(0xa5acaf);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HockeyLeague {
    #[default]
    Nhl,
    Nwhl,
    Ncaa,
    Iihf,
}

impl HockeyLeague {
    pub const ALL: [HockeyLeague; 4] = [HockeyLeague::Nhl, HockeyLeague::Nwhl, HockeyLeague::Ncaa, HockeyLeague::Iihf];

    pub fn params(self) -> RinkParams {
        match self {
            HockeyLeague::Nhl | HockeyLeague::Nwhl => RinkParams::default(),
            HockeyLeague::Ncaa => RinkParams {
                corner_radius: 20.0,
                restricted_area_visible: false,
                ..RinkParams::default()
            },
            HockeyLeague::Iihf => RinkParams::iihf(),
        }
    }

    pub fn builder(self) -> SurfaceBuilder {
        self.params().builder(&self.to_string())
    }
}

impl fmt::Display for HockeyLeague {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HockeyLeague::Nhl => "nhl",
            HockeyLeague::Nwhl => "nwhl",
            HockeyLeague::Ncaa => "ncaa",
            HockeyLeague::Iihf => "iihf",
        })
    }
}

impl FromStr for HockeyLeague {
    type Err = SurfaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nhl" => Ok(HockeyLeague::Nhl),
            "nwhl" | "phf" => Ok(HockeyLeague::Nwhl),
            "ncaa" => Ok(HockeyLeague::Ncaa),
            "iihf" => Ok(HockeyLeague::Iihf),
            _ => Err(SurfaceError::UnknownLeague {
                sport: "hockey",
                name: s.to_string(),
            }),
        }
    }
}

/// The four L-shaped markings around each end zone faceoff spot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceoffLineParams {
    /// Spot center to the inside edge of the lines parallel to the goal line.
    pub dist_x: f64,
    /// Spot center to the inside edge of the lines parallel to the boards.
    pub dist_y: f64,
    pub length: f64,
    pub width: f64,
}

/// Every dimension of a rink, in `units`.
#[derive(Debug, Clone, PartialEq)]
pub struct RinkParams {
    pub units: Units,
    pub length: f64,
    pub width: f64,
    pub nzone_length: f64,
    pub corner_radius: f64,
    pub board_thickness: f64,
    pub major_line_thickness: f64,
    pub minor_line_thickness: f64,
    /// End boards to the goal line's reference edge.
    pub goal_line_dist: f64,
    pub goal_line_edge: XJustify,
    pub faceoff_circle_radius: f64,
    pub center_spot_radius: f64,
    pub spot_radius: f64,
    pub spot_stripe_gap: f64,
    /// Zone faceoff circles sit this far from the end boards and side boards.
    pub zone_circle_x: f64,
    pub zone_circle_y: f64,
    pub hashmark_width: f64,
    pub hashmark_spacing: f64,
    pub faceoff_lines: FaceoffLineParams,
    /// Zone line to the neutral zone faceoff spots.
    pub nzone_spot_dist_x: f64,
    pub nzone_spot_y: f64,
    pub referee_crease_radius: f64,
    pub crease_radius: f64,
    pub crease_length: f64,
    pub crease_half_width: f64,
    pub crease_notch_dist: f64,
    pub crease_notch_width: f64,
    pub goal_mouth_width: f64,
    pub goal_post_diameter: f64,
    pub goal_frame_radius: f64,
    pub goal_frame_thickness: f64,
    pub goal_corner_offset: f64,
    pub restricted_area_long: f64,
    pub restricted_area_short: f64,
    pub restricted_area_visible: bool,
}

impl Default for RinkParams {
    /// NHL dimensions.
    fn default() -> Self {
        RinkParams {
            units: Units::Feet,
            length: 200.0,
            width: 85.0,
            nzone_length: 50.0,
            corner_radius: 28.0,
            board_thickness: 2.0 / 12.0,
            major_line_thickness: 1.0,
            minor_line_thickness: 2.0 / 12.0,
            goal_line_dist: 11.0,
            goal_line_edge: XJustify::Center,
            faceoff_circle_radius: 15.0,
            center_spot_radius: 0.5,
            spot_radius: 1.0,
            spot_stripe_gap: 3.0 / 12.0,
            zone_circle_x: 31.0,
            zone_circle_y: 20.5,
            hashmark_width: 2.0,
            hashmark_spacing: 71.0 / 12.0,
            faceoff_lines: FaceoffLineParams {
                dist_x: 2.0,
                dist_y: 9.0 / 12.0,
                length: 4.0,
                width: 3.0,
            },
            nzone_spot_dist_x: 5.0,
            nzone_spot_y: 22.0,
            referee_crease_radius: 10.0,
            crease_radius: 6.0,
            crease_length: 4.5,
            crease_half_width: 4.0,
            crease_notch_dist: 4.0,
            crease_notch_width: 5.0 / 12.0,
            goal_mouth_width: 6.0,
            goal_post_diameter: 2.375 / 12.0,
            goal_frame_radius: 20.0 / 12.0,
            goal_frame_thickness: 1.9 / 12.0,
            goal_corner_offset: 1.0,
            restricted_area_long: 28.0,
            restricted_area_short: 22.0,
            restricted_area_visible: true,
        }
    }
}

impl RinkParams {
    /// International dimensions, in meters.
    pub fn iihf() -> Self {
        RinkParams {
            units: Units::Meters,
            length: 60.0,
            width: 30.0,
            nzone_length: 14.28,
            corner_radius: 8.5,
            board_thickness: 0.05,
            major_line_thickness: 0.3,
            minor_line_thickness: 0.05,
            goal_line_dist: 4.0,
            goal_line_edge: XJustify::Right,
            faceoff_circle_radius: 4.5,
            center_spot_radius: 0.15,
            spot_radius: 0.3,
            spot_stripe_gap: 0.075,
            zone_circle_x: 10.0,
            zone_circle_y: 8.0,
            hashmark_width: 0.6,
            hashmark_spacing: 1.8,
            faceoff_lines: FaceoffLineParams {
                dist_x: 0.6,
                dist_y: 0.225,
                length: 1.2,
                width: 0.9,
            },
            nzone_spot_dist_x: 1.5,
            nzone_spot_y: 7.0,
            referee_crease_radius: 3.0,
            crease_radius: 1.83,
            crease_length: 1.37,
            crease_half_width: 1.22,
            crease_notch_dist: 1.32,
            crease_notch_width: 0.13,
            goal_mouth_width: 1.83,
            goal_post_diameter: 0.05,
            goal_frame_radius: 0.508,
            goal_frame_thickness: 0.1,
            goal_corner_offset: 0.3048,
            restricted_area_long: 8.53,
            restricted_area_short: 6.71,
            restricted_area_visible: false,
        }
    }

    fn rink(&self) -> RinkOutline {
        RinkOutline {
            length: self.length,
            width: self.width,
            corner_radius: self.corner_radius,
        }
    }

    fn crease(&self, edge: XJustify) -> CreaseShape {
        CreaseShape {
            radius: self.crease_radius,
            thickness: self.minor_line_thickness,
            half_width: self.crease_half_width,
            length: self.crease_length,
            notch_dist: self.crease_notch_dist,
            notch_width: self.crease_notch_width,
            goal_line_thickness: self.minor_line_thickness,
            goal_line_edge: edge,
        }
    }

    fn goal(&self, edge: XJustify) -> GoalShape {
        GoalShape {
            mouth_width: self.goal_mouth_width,
            post_diameter: self.goal_post_diameter,
            radius: self.goal_frame_radius,
            thickness: self.goal_frame_thickness,
            corner_offset: self.goal_corner_offset,
            goal_line_thickness: self.minor_line_thickness,
            goal_line_edge: edge,
        }
    }

    /// Display windows: the boards plus one unit of margin.
    pub fn ranges(&self) -> RangeTable {
        let half = self.length / 2.0 + self.board_thickness + 1.0;
        let half_w = self.width / 2.0 + self.board_thickness + 1.0;
        let hn = self.nzone_length / 2.0 + self.major_line_thickness + 1.0;
        RangeTable::new((-half, half), (-half_w, half_w))
            .with(DisplayRange::NeutralZone, (-hn, hn))
            .with(DisplayRange::OffensiveZone, (hn - 1.0, half))
            .with(DisplayRange::DefensiveZone, (-half, -hn + 1.0))
    }

    /// Every rink feature with its default placement and colors.
    pub fn builder(&self, league: &str) -> SurfaceBuilder {
        let hl = self.length / 2.0;
        let hw = self.width / 2.0;
        let minor = self.minor_line_thickness;
        let major = self.major_line_thickness;
        let goal_line_x = hl - self.goal_line_dist;
        // Goal-end features are drawn at the -x end, where the goal line's
        // reference edge is mirrored.
        let goal_edge = mirrored(self.goal_line_edge);
        let goal_anchor = Placement::at(-goal_line_x, 0.0).mirrored_x();
        let zone_spot = Placement::at(hl - self.zone_circle_x, hw - self.zone_circle_y).mirrored_xy();
        let nzone_spot = Placement::at(self.nzone_length / 2.0 - self.nzone_spot_dist_x, self.nzone_spot_y).mirrored_xy();

        let mut features = vec![
            FeatureDescriptor::new(
                "boards",
                Boards {
                    rink: self.rink(),
                    thickness: self.board_thickness,
                },
                Placement::default().mirrored_x(),
                Style::solid(Color::BLACK, 100),
            )
            .unconstrained(),
            FeatureDescriptor::new(
                "nzone",
                NeutralZone {
                    rink: self.rink(),
                    length: self.nzone_length,
                },
                Placement::default(),
                Style::solid(Color::WHITE, 1),
            ),
            FeatureDescriptor::new(
                "ozone",
                EndZone {
                    rink: self.rink(),
                    nzone_length: self.nzone_length,
                    side: CourtSide::Offense,
                },
                Placement::default(),
                Style::solid(Color::WHITE, 1),
            ),
            FeatureDescriptor::new(
                "dzone",
                EndZone {
                    rink: self.rink(),
                    nzone_length: self.nzone_length,
                    side: CourtSide::Defense,
                },
                Placement::default(),
                Style::solid(Color::WHITE, 1),
            ),
            FeatureDescriptor::new(
                "center_line",
                RinkLine {
                    rink_width: self.width,
                    thickness: major,
                },
                Placement::default(),
                Style::solid(RED, 10),
            ),
            FeatureDescriptor::new(
                "zone_line",
                RinkLine {
                    rink_width: self.width,
                    thickness: major,
                },
                Placement::at(self.nzone_length / 2.0 + major / 2.0, 0.0).mirrored_x(),
                Style::solid(BLUE, 10),
            ),
            FeatureDescriptor::new(
                "goal_line",
                GoalLine {
                    rink: self.rink(),
                    thickness: minor,
                    anchor_x: goal_line_x,
                    edge: self.goal_line_edge,
                },
                Placement::at(goal_line_x, 0.0).mirrored_x(),
                Style::solid(RED, 10),
            ),
        ];

        let restricted = FeatureDescriptor::new(
            "goalkeepers_restricted_area",
            GoalkeepersRestrictedArea {
                long_base: self.restricted_area_long,
                short_base: self.restricted_area_short,
                thickness: minor,
                depth: self.goal_line_dist,
                goal_line_thickness: minor,
                goal_line_edge: goal_edge,
            },
            goal_anchor,
            Style::solid(RED, 10),
        );
        features.push(if self.restricted_area_visible {
            restricted
        } else {
            restricted.hidden()
        });

        features.extend([
            FeatureDescriptor::new(
                "center_faceoff_circle",
                CenterFaceoffCircle {
                    radius: self.faceoff_circle_radius,
                    thickness: minor,
                },
                Placement::default().mirrored_x(),
                Style::solid(BLUE, 20),
            ),
            FeatureDescriptor::new(
                "ozone_dzone_faceoff_circle",
                ZoneFaceoffCircle {
                    radius: self.faceoff_circle_radius,
                    thickness: minor,
                    hashmark_width: self.hashmark_width,
                    hashmark_ext_spacing: self.hashmark_spacing,
                },
                zone_spot,
                Style::solid(RED, 10),
            ),
            FeatureDescriptor::new(
                "center_faceoff_spot",
                FaceoffSpot {
                    radius: self.center_spot_radius,
                },
                Placement::default(),
                Style::solid(BLUE, 20),
            ),
        ]);
        features.extend(self.ringed_spot("ozone_dzone", zone_spot));
        let lines = self.faceoff_lines;
        for (suffix, over_x, over_y) in [("ul", false, false), ("ll", true, false), ("lr", true, true), ("ur", false, true)] {
            features.push(FeatureDescriptor::new(
                format!("ozone_dzone_faceoff_line_{suffix}"),
                FaceoffLines {
                    dist_x: lines.dist_x,
                    dist_y: lines.dist_y,
                    length: lines.length,
                    width: lines.width,
                    thickness: minor,
                    over_x,
                    over_y,
                },
                zone_spot,
                Style::solid(RED, 10),
            ));
        }
        features.extend(self.ringed_spot("nzone", nzone_spot));

        features.extend([
            FeatureDescriptor::new(
                "referee_crease",
                RefereeCrease {
                    radius: self.referee_crease_radius,
                    thickness: minor,
                },
                Placement::at(0.0, -hw),
                Style::solid(RED, 20),
            ),
            FeatureDescriptor::new(
                "goal_crease_outline",
                GoalCreaseOutline {
                    crease: self.crease(goal_edge),
                },
                goal_anchor,
                Style::solid(RED, 10),
            ),
            FeatureDescriptor::new(
                "goal_crease_fill",
                GoalCreaseFill {
                    crease: self.crease(goal_edge),
                },
                goal_anchor,
                Style::solid(CREASE_BLUE, 9),
            ),
            FeatureDescriptor::new(
                "goal_frame",
                GoalFrame {
                    goal: self.goal(goal_edge),
                },
                goal_anchor,
                Style::solid(RED, 10),
            ),
            FeatureDescriptor::new(
                "goal_fill",
                GoalFill {
                    goal: self.goal(goal_edge),
                },
                goal_anchor,
                Style::solid(NET_GRAY, 10),
            ),
        ]);

        let constraint = FeatureDescriptor::new(
            "boards_constraint",
            BoardsConstraint { rink: self.rink() },
            Placement::default(),
            Style::solid(Color::WHITE, 0),
        )
        .hidden();

        SurfaceBuilder::new(Sport::Hockey, league, self.units, self.length, self.width)
            .constraint(constraint)
            .features(features)
            .ranges(self.ranges())
    }

    /// A non-center faceoff spot: its outer ring and its stripe.
    fn ringed_spot(&self, prefix: &str, placement: Placement) -> [FeatureDescriptor; 2] {
        [
            FeatureDescriptor::new(
                format!("{prefix}_faceoff_spot"),
                RingedFaceoffSpot {
                    radius: self.spot_radius,
                    thickness: self.minor_line_thickness,
                },
                placement,
                Style::solid(RED, 10),
            ),
            FeatureDescriptor::new(
                format!("{prefix}_faceoff_spot_stripe"),
                FaceoffSpotStripe {
                    radius: self.spot_radius,
                    thickness: self.minor_line_thickness,
                    gap: self.spot_stripe_gap,
                },
                placement,
                Style::solid(RED, 11),
            ),
        ]
    }
}

fn mirrored(edge: XJustify) -> XJustify {
    match edge {
        XJustify::Left => XJustify::Right,
        XJustify::Right => XJustify::Left,
        XJustify::Center => XJustify::Center,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn league_names_parse() {
        assert_eq!("NHL".parse::<HockeyLeague>().unwrap(), HockeyLeague::Nhl);
        assert_eq!(" iihf ".parse::<HockeyLeague>().unwrap(), HockeyLeague::Iihf);
        assert!(matches!(
            "khl".parse::<HockeyLeague>(),
            Err(SurfaceError::UnknownLeague { sport: "hockey", .. })
        ));
    }

    #[test]
    fn nhl_rink_builds() {
        let s = HockeyLeague::Nhl.builder().arc_points(50).build().unwrap();
        let e = s.extent();
        let edge = 100.0 + 2.0 / 12.0;
        assert!((e.max.x - edge).abs() < 1e-9);
        assert!((e.min.x + edge).abs() < 1e-9);
        assert!((e.max.y - (42.5 + 2.0 / 12.0)).abs() < 1e-9);
        assert!(s.contains(dvec2(0.0, 0.0)));
        assert!(!s.contains(dvec2(99.5, 42.0)));
    }

    #[test]
    fn ncaa_hides_restricted_area() {
        let s = HockeyLeague::Ncaa.builder().arc_points(50).build().unwrap();
        let trap = s.feature("goalkeepers_restricted_area").unwrap();
        assert!(!trap.visible);
        assert!(s.contains(dvec2(99.5, 42.0 - 20.0)));
    }

    #[test]
    fn iihf_is_metric() {
        let s = HockeyLeague::Iihf.builder().arc_points(50).build().unwrap();
        assert_eq!(s.units(), Units::Meters);
        assert!((s.extent().max.x - 30.05).abs() < 1e-9);
    }

    #[test]
    fn zone_windows() {
        let t = RinkParams::default().ranges();
        assert_eq!(t.x_window(DisplayRange::NeutralZone), (-27.0, 27.0));
        assert_eq!(t.x_window(DisplayRange::OffensiveZone).0, 26.0);
    }

    #[test]
    fn faceoff_lines_have_four_copies_per_marking() {
        let s = HockeyLeague::Nhl.builder().arc_points(20).build().unwrap();
        let f = s.feature("ozone_dzone_faceoff_line_ul").unwrap();
        assert_eq!(f.copies().count(), 4);
    }
}
