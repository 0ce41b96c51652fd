//! Small value types shared by the geometry, surface and render layers.
//!
//! Coordinates are plain `glam::DVec2` in the surface's linear unit. The
//! types here add validation at the edges: unit conversion, render scaling,
//! colors and bounding boxes.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;

use crate::errors::ParseError;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Reject NaN, infinite, zero and negative values.
pub fn check_positive(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else if val == 0.0 {
        Err(NumericError::Zero)
    } else if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

// ============================================================================
// Units
// ============================================================================

/// Linear unit a surface is measured in.
///
/// Only simple scale factors are supported; there is no notion of angle or
/// area units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Units {
    #[default]
    Feet,
    Meters,
}

impl Units {
    /// Meters per one of this unit.
    pub const fn meters(self) -> f64 {
        match self {
            Units::Feet => 0.3048,
            Units::Meters => 1.0,
        }
    }

    /// Scale factor that converts a length in `self` into `to`.
    pub fn factor_to(self, to: Units) -> f64 {
        if self == to {
            1.0
        } else {
            self.meters() / to.meters()
        }
    }

    /// Convert a single length from `self` into `to`.
    pub fn convert(self, value: f64, to: Units) -> f64 {
        value * self.factor_to(to)
    }

    pub const fn abbreviation(self) -> &'static str {
        match self {
            Units::Feet => "ft",
            Units::Meters => "m",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Units {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ft" | "foot" | "feet" => Ok(Units::Feet),
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Units::Meters),
            _ => Err(ParseError::UnknownUnit { value: s.trim().to_string() }),
        }
    }
}

// ============================================================================
// Render scaling
// ============================================================================

/// Convert surface units → px with a given scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scaler {
    pub px_per_unit: f64,
}

impl Scaler {
    /// Create a Scaler with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(px_per_unit: f64) -> Result<Self, NumericError> {
        check_positive(px_per_unit).map(|px_per_unit| Scaler { px_per_unit })
    }

    /// Convert a length in surface units to raw f64 pixels.
    #[inline]
    pub fn px(&self, len: f64) -> f64 {
        len * self.px_per_unit
    }

    /// Convert a point to pixel space, flipping y so that +y points up.
    pub fn to_svg(&self, p: DVec2, bounds: &BBox) -> DVec2 {
        DVec2::new(self.px(p.x - bounds.min.x), self.px(bounds.max.y - p.y))
    }
}

// ============================================================================
// Colors
// ============================================================================

/// A fill or stroke color: `#rrggbb` or no paint at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Rgb(u8, u8, u8),
    None,
}

impl Color {
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);

    /// Const-friendly hex constructor for palette tables.
    pub const fn hex(rgb: u32) -> Color {
        Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Color::None => f.write_str("none"),
        }
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("none") {
            return Ok(Color::None);
        }
        let invalid = || ParseError::InvalidColor { value: s.to_string() };
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(invalid)?;
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

// ============================================================================
// Bounding boxes
// ============================================================================

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl Default for BBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BBox {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        BBox {
            min: DVec2::splat(f64::MAX),
            max: DVec2::splat(f64::MIN),
        }
    }

    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        BBox {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point. Non-finite points are ignored.
    pub fn expand_point(&mut self, p: DVec2) {
        if !p.is_finite() {
            return;
        }
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand to include another box
    pub fn expand_bbox(&mut self, other: &BBox) {
        if other.is_empty() {
            return;
        }
        self.expand_point(other.min);
        self.expand_point(other.max);
    }

    /// Grow every side by `margin`
    pub fn inflate(&self, margin: f64) -> BBox {
        BBox {
            min: self.min - DVec2::splat(margin),
            max: self.max + DVec2::splat(margin),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) / 2.0
    }

    /// Inclusive containment test
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
