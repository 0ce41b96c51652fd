//! Baseball infields.
//!
//! The origin is the tip of home plate; +y points toward second base.
//! There is no constraint, so data is never masked and display ranges come
//! from the drawn features.

use std::f64::consts::FRAC_PI_4;
use std::fmt;
use std::str::FromStr;

use crate::errors::SurfaceError;
use crate::features::baseball::{Base, HomePlate};
use crate::features::{FeatureDescriptor, Placement, Style};
use crate::surface::{Sport, SurfaceBuilder};
use crate::types::{Color, Units};

const DIRT: Color = Color::hex(0x9b7653);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BaseballLeague {
    #[default]
    Mlb,
}

impl BaseballLeague {
    pub const ALL: [BaseballLeague; 1] = [BaseballLeague::Mlb];

    pub fn params(self) -> InfieldParams {
        InfieldParams::default()
    }

    pub fn builder(self) -> SurfaceBuilder {
        self.params().builder(&self.to_string())
    }
}

impl fmt::Display for BaseballLeague {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("mlb")
    }
}

impl FromStr for BaseballLeague {
    type Err = SurfaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mlb" => Ok(BaseballLeague::Mlb),
            _ => Err(SurfaceError::UnknownLeague {
                sport: "baseball",
                name: s.to_string(),
            }),
        }
    }
}

/// Infield dimensions, in feet.
#[derive(Debug, Clone, PartialEq)]
pub struct InfieldParams {
    pub home_plate_width: f64,
    pub base_side: f64,
    /// Home plate to first base.
    pub baseline_length: f64,
}

impl Default for InfieldParams {
    fn default() -> Self {
        InfieldParams {
            home_plate_width: 17.0 / 12.0,
            base_side: 15.0 / 12.0,
            baseline_length: 90.0,
        }
    }
}

impl InfieldParams {
    /// Home plate to second base.
    pub fn home_to_second(&self) -> f64 {
        2.0 * self.baseline_length * FRAC_PI_4.sin()
    }

    pub fn builder(&self, league: &str) -> SurfaceBuilder {
        let corner = self.baseline_length * FRAC_PI_4.cos();
        let second = self.home_to_second();
        let base = |name: &str, x: f64, y: f64| {
            FeatureDescriptor::new(
                name,
                Base { side: self.base_side },
                Placement::at(x, y),
                Style::solid(Color::WHITE, 10),
            )
        };
        let features = vec![
            FeatureDescriptor::new(
                "home_plate",
                HomePlate {
                    width: self.home_plate_width,
                },
                Placement::default(),
                Style::solid(Color::WHITE, 10),
            ),
            base("first_base", corner, second / 2.0),
            base("second_base", 0.0, second),
            base("third_base", -corner, second / 2.0),
        ];
        SurfaceBuilder::new(Sport::Baseball, league, Units::Feet, self.baseline_length, self.baseline_length)
            .features(features)
            .background(DIRT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DisplayRange;
    use glam::dvec2;

    #[test]
    fn bases_on_the_diamond() {
        let s = BaseballLeague::Mlb.builder().build().unwrap();
        let first = s.feature("first_base").unwrap().bbox().center();
        assert!((first - dvec2(63.6396, 63.6396)).length() < 1e-3);
        let second = s.feature("second_base").unwrap().bbox().center();
        assert!((second.y - 127.2792).abs() < 1e-3);
    }

    #[test]
    fn no_constraint_keeps_everything() {
        let s = BaseballLeague::Mlb.builder().build().unwrap();
        assert!(s.constraint().is_none());
        assert!(s.contains(dvec2(-500.0, 500.0)));
    }

    #[test]
    fn ranges_follow_extent() {
        let s = BaseballLeague::Mlb.builder().build().unwrap();
        let b = s.plot_limits(DisplayRange::Full, None, None);
        assert!((b.min.y - -1.0).abs() < 1e-9);
        assert!(b.max.y > 128.0);
    }
}
