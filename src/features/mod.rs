//! Surface features: named markings built from primitives.
//!
//! Every concrete feature knows how to draw itself centered on its own local
//! origin ([`GeneratesCenteredShape`]). A [`FeatureDescriptor`] pairs that
//! shape with placement (anchor, justification, mirror copies) and
//! presentation (colors, draw order, visibility).
//!
//! Per-sport variants are grouped into one enum per sport and dispatched
//! statically.

use enum_dispatch::enum_dispatch;
use glam::DVec2;
use std::f64::consts::PI;

use crate::errors::GeometryError;
use crate::geometry::{PointSeq, reflect, translate};
use crate::types::{BBox, Color};

/// Anything that can trace its outline around a local origin.
#[enum_dispatch]
pub trait GeneratesCenteredShape {
    /// The outline, before any placement is applied. `arc_points` is the
    /// number of samples used for each arc fragment.
    fn centered_shape(&self, arc_points: usize) -> Result<PointSeq, GeometryError>;
}

/// `From<T> for Feature` for each concrete type of one sport's enum.
macro_rules! lift_into_feature {
    ($sport:ident: $($ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for crate::features::Feature {
                fn from(f: $ty) -> Self {
                    crate::features::Feature::from(<$sport>::from(f))
                }
            }
        )*
    };
}

pub mod baseball;
pub mod basketball;
pub mod football;
pub mod hockey;

pub use baseball::BaseballFeature;
pub use basketball::BasketballFeature;
pub use football::FootballFeature;
pub use hockey::HockeyFeature;

/// A feature of any sport.
#[enum_dispatch(GeneratesCenteredShape)]
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    Hockey(HockeyFeature),
    Basketball(BasketballFeature),
    Baseball(BaseballFeature),
    Football(FootballFeature),
    Custom(CustomOutline),
}

/// A caller-supplied outline, used as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomOutline {
    pub points: PointSeq,
}

impl GeneratesCenteredShape for CustomOutline {
    fn centered_shape(&self, _arc_points: usize) -> Result<PointSeq, GeometryError> {
        if self.points.len() < 2 {
            return Err(GeometryError::invalid(
                "points",
                self.points.len() as f64,
                "an outline needs at least two points",
            ));
        }
        if !self.points.all_finite() {
            return Err(GeometryError::invalid("points", f64::NAN, "outline contains non-finite coordinates"));
        }
        Ok(self.points.clone())
    }
}

// ============================================================================
// Placement
// ============================================================================

/// How the anchor relates to the shape's bounding box horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XJustify {
    #[default]
    Center,
    /// The shape's left edge sits on the anchor.
    Left,
    /// The shape's right edge sits on the anchor.
    Right,
}

/// How the anchor relates to the shape's bounding box vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YJustify {
    #[default]
    Center,
    /// The shape's top edge sits on the anchor.
    Top,
    /// The shape's bottom edge sits on the anchor.
    Bottom,
}

impl XJustify {
    /// Horizontal shift that puts the chosen edge of `bbox` on the local
    /// origin. `Center` leaves the shape where its generator put it.
    pub fn shift(self, bbox: &BBox) -> f64 {
        if bbox.is_empty() {
            return 0.0;
        }
        match self {
            XJustify::Center => 0.0,
            XJustify::Left => -bbox.min.x,
            XJustify::Right => -bbox.max.x,
        }
    }
}

impl YJustify {
    pub fn shift(self, bbox: &BBox) -> f64 {
        if bbox.is_empty() {
            return 0.0;
        }
        match self {
            YJustify::Center => 0.0,
            YJustify::Top => -bbox.max.y,
            YJustify::Bottom => -bbox.min.y,
        }
    }
}

/// Where a feature goes on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub anchor: DVec2,
    pub x_justify: XJustify,
    pub y_justify: YJustify,
    /// Also draw the mirror image across the y axis (x negated).
    pub reflect_x: bool,
    /// Also draw the mirror image across the x axis (y negated).
    pub reflect_y: bool,
}

impl Default for Placement {
    fn default() -> Self {
        Placement {
            anchor: DVec2::ZERO,
            x_justify: XJustify::Center,
            y_justify: YJustify::Center,
            reflect_x: false,
            reflect_y: false,
        }
    }
}

impl Placement {
    pub fn at(x: f64, y: f64) -> Self {
        Placement {
            anchor: DVec2::new(x, y),
            ..Default::default()
        }
    }

    pub fn mirrored_x(mut self) -> Self {
        self.reflect_x = true;
        self
    }

    pub fn mirrored_y(mut self) -> Self {
        self.reflect_y = true;
        self
    }

    pub fn mirrored_xy(self) -> Self {
        self.mirrored_x().mirrored_y()
    }

    pub fn justified(mut self, x: XJustify, y: YJustify) -> Self {
        self.x_justify = x;
        self.y_justify = y;
        self
    }

    /// How many copies [`Placement::apply`] emits: the original plus one per
    /// mirror image.
    pub fn copy_count(&self) -> usize {
        1 << (usize::from(self.reflect_x) + usize::from(self.reflect_y))
    }

    /// Place a centered outline on the surface.
    ///
    /// The outline is shifted for justification, then every requested mirror
    /// image is taken of the shape and of the anchor together before the
    /// translation, so copies land on the mirrored anchor. The original copy
    /// comes first, then the x mirror, then the y mirror(s).
    pub fn apply(&self, centered: &PointSeq) -> PointSeq {
        let b = centered.bbox();
        let justified = translate(centered, self.x_justify.shift(&b), self.y_justify.shift(&b));

        let mut flips = vec![(false, false)];
        if self.reflect_x {
            flips.push((false, true));
        }
        if self.reflect_y {
            let existing = flips.clone();
            flips.extend(existing.into_iter().map(|(_, over_y)| (true, over_y)));
        }

        let mut out = PointSeq::with_capacity(justified.len() * flips.len());
        for (over_x, over_y) in flips {
            let anchor = reflect(&PointSeq::from(vec![self.anchor]), over_x, over_y);
            let a = anchor.first().unwrap_or(self.anchor);
            out.extend_from(&translate(&reflect(&justified, over_x, over_y), a.x, a.y));
        }
        out
    }
}

// ============================================================================
// Presentation
// ============================================================================

/// Fill, outline and draw order. Presentation only; never affects geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub fill: Color,
    pub stroke: Color,
    pub z_order: i32,
}

impl Style {
    /// Same color for fill and outline.
    pub const fn solid(color: Color, z_order: i32) -> Self {
        Style {
            fill: color,
            stroke: color,
            z_order,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::solid(Color::BLACK, 10)
    }
}

// ============================================================================
// Descriptor
// ============================================================================

/// A named feature with its placement and presentation. Immutable once a
/// surface is built.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureDescriptor {
    pub name: String,
    pub feature: Feature,
    pub placement: Placement,
    pub style: Style,
    pub visible: bool,
    /// Whether drawing is clipped to the surface's constraint.
    pub is_constrained: bool,
}

impl FeatureDescriptor {
    pub fn new(name: impl Into<String>, feature: impl Into<Feature>, placement: Placement, style: Style) -> Self {
        FeatureDescriptor {
            name: name.into(),
            feature: feature.into(),
            placement,
            style,
            visible: true,
            is_constrained: true,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn unconstrained(mut self) -> Self {
        self.is_constrained = false;
        self
    }

    /// Generate the outline and place it in surface coordinates.
    pub fn resolve(&self, arc_points: usize) -> Result<PointSeq, GeometryError> {
        let centered = self.feature.centered_shape(arc_points)?;
        if !centered.all_finite() {
            return Err(GeometryError::invalid(
                "points",
                f64::NAN,
                "generated outline contains non-finite coordinates",
            ));
        }
        Ok(self.placement.apply(&centered))
    }
}

/// Per-feature changes applied on top of a league's defaults.
///
/// Every field is optional; a fresh value is built per call so nothing is
/// shared between surfaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureOverride {
    pub anchor: Option<DVec2>,
    pub x_justify: Option<XJustify>,
    pub y_justify: Option<YJustify>,
    pub reflect_x: Option<bool>,
    pub reflect_y: Option<bool>,
    pub visible: Option<bool>,
    pub is_constrained: Option<bool>,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub z_order: Option<i32>,
}

impl FeatureOverride {
    pub fn visible(visible: bool) -> Self {
        FeatureOverride {
            visible: Some(visible),
            ..Default::default()
        }
    }

    pub fn apply_to(&self, d: &mut FeatureDescriptor) {
        let p = &mut d.placement;
        if let Some(a) = self.anchor {
            p.anchor = a;
        }
        if let Some(j) = self.x_justify {
            p.x_justify = j;
        }
        if let Some(j) = self.y_justify {
            p.y_justify = j;
        }
        if let Some(r) = self.reflect_x {
            p.reflect_x = r;
        }
        if let Some(r) = self.reflect_y {
            p.reflect_y = r;
        }
        if let Some(v) = self.visible {
            d.visible = v;
        }
        if let Some(c) = self.is_constrained {
            d.is_constrained = c;
        }
        if let Some(c) = self.fill {
            d.style.fill = c;
        }
        if let Some(c) = self.stroke {
            d.style.stroke = c;
        }
        if let Some(z) = self.z_order {
            d.style.z_order = z;
        }
    }
}

// ============================================================================
// Helpers shared by the sport modules
// ============================================================================

/// `asin(opposite / radius) / π`, failing instead of producing NaN when the
/// ratio leaves [-1, 1].
pub(crate) fn asin_fraction(parameter: &str, opposite: f64, radius: f64) -> Result<f64, GeometryError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GeometryError::degenerate("radius", radius));
    }
    let ratio = opposite / radius;
    if !ratio.is_finite() || ratio.abs() > 1.0 {
        return Err(GeometryError::invalid(
            parameter,
            opposite,
            format!("exceeds the radius {radius} it is measured against"),
        ));
    }
    Ok(ratio.asin() / PI)
}

/// Reject zero, negative and non-finite lengths.
pub(crate) fn positive(parameter: &str, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::degenerate(parameter, value))
    }
}

/// Reject negative and non-finite lengths; zero is allowed.
pub(crate) fn non_negative(parameter: &str, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(GeometryError::degenerate(parameter, value))
    }
}

/// Which end of the surface a feature belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CourtSide {
    /// The +x end.
    #[default]
    Offense,
    /// The -x end.
    Defense,
}
