//! Coordinate transforms. Every operator returns a new sequence; inputs are
//! never mutated. Rotation and scaling are about the origin, so translate to
//! the origin first when a different pivot is needed.
//!
//! Feature construction applies them in a fixed order: build centered at the
//! origin, reflect, rotate, then translate to the anchor.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use glam::{DMat2, DVec2};

use super::PointSeq;
use crate::errors::{GeometryError, ParseError};

/// Direction of a rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum RotationDir {
    #[default]
    Ccw,
    Cw,
}

impl FromStr for RotationDir {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ccw" | "counter" | "counterclockwise" | "anticlockwise" => Ok(RotationDir::Ccw),
            "cw" | "clockwise" => Ok(RotationDir::Cw),
            _ => Err(ParseError::UnknownRotation { value: s.trim().to_string() }),
        }
    }
}

impl fmt::Display for RotationDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RotationDir::Ccw => "ccw",
            RotationDir::Cw => "cw",
        })
    }
}

/// Negate y when `over_x`, negate x when `over_y`. Both together is a
/// 180° point reflection.
pub fn reflect(points: &PointSeq, over_x: bool, over_y: bool) -> PointSeq {
    let flip = DVec2::new(if over_y { -1.0 } else { 1.0 }, if over_x { -1.0 } else { 1.0 });
    points.iter().map(|p| p * flip).collect()
}

/// Rotate by `angle·π` about the origin; clockwise negates the angle.
pub fn rotate(points: &PointSeq, angle: f64, dir: RotationDir) -> PointSeq {
    let theta = match dir {
        RotationDir::Ccw => angle * PI,
        RotationDir::Cw => -angle * PI,
    };
    let m = DMat2::from_angle(theta);
    points.iter().map(|p| m * p).collect()
}

pub fn translate(points: &PointSeq, dx: f64, dy: f64) -> PointSeq {
    let d = DVec2::new(dx, dy);
    points.iter().map(|p| p + d).collect()
}

/// Uniform scale about the origin. A zero or non-finite factor is rejected.
pub fn scale(points: &PointSeq, factor: f64) -> Result<PointSeq, GeometryError> {
    if !factor.is_finite() || factor == 0.0 {
        return Err(GeometryError::degenerate("scale_factor", factor));
    }
    Ok(points.iter().map(|p| p * factor).collect())
}
