//! Baseball infield markings. The origin is the tip of home plate and +y
//! points toward second base.

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use super::{GeneratesCenteredShape, positive};
use crate::errors::GeometryError;
use crate::geometry::{PointSeq, diamond};

#[enum_dispatch(GeneratesCenteredShape)]
#[derive(Debug, Clone, PartialEq)]
pub enum BaseballFeature {
    HomePlate,
    Base,
}

lift_into_feature!(BaseballFeature: HomePlate, Base);

/// Home plate: a square of side `width` with two corners cut off at 45°, the
/// point at the local origin.
#[derive(Debug, Clone, PartialEq)]
pub struct HomePlate {
    pub width: f64,
}

impl GeneratesCenteredShape for HomePlate {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let h = positive("home_plate_width", self.width)? / 2.0;
        Ok(PointSeq::from([
            (0.0, 0.0),
            (h, h),
            (h, 2.0 * h),
            (-h, 2.0 * h),
            (-h, h),
            (0.0, 0.0),
        ]))
    }
}

/// A square base turned 45° so its corners point along the base paths.
#[derive(Debug, Clone, PartialEq)]
pub struct Base {
    pub side: f64,
}

impl GeneratesCenteredShape for Base {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        let d = positive("base_side", self.side)? * std::f64::consts::SQRT_2;
        diamond(d, d, DVec2::ZERO)
    }
}
