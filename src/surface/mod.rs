//! Surface composition.
//!
//! A [`SurfaceBuilder`] collects named feature descriptors and a constraint.
//! [`SurfaceBuilder::build`] resolves every descriptor to absolute
//! coordinates exactly once and hands back an immutable [`Surface`], which is
//! then queried for its drawable features, extent and display ranges.
//! Changing a parameter means building a new surface.

pub mod display;
pub mod validate;

pub use display::{AxisLimit, DisplayRange, RangeTable};
pub use validate::{DataOptions, ValidatedData};

use std::fmt;

use geo::{Intersects, LineString, Point, Polygon};
use glam::DVec2;

use crate::errors::{GeometryError, SurfaceError};
use crate::features::{FeatureDescriptor, FeatureOverride, Style};
use crate::geometry::{DEFAULT_ARC_POINTS, PointSeq, scale};
use crate::types::{BBox, Color, Units};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sport {
    Baseball,
    Basketball,
    Football,
    Hockey,
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sport::Baseball => "baseball",
            Sport::Basketball => "basketball",
            Sport::Football => "football",
            Sport::Hockey => "hockey",
        })
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Feature descriptors keyed by name, in registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureRegistry {
    entries: Vec<FeatureDescriptor>,
}

impl FeatureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor, replacing any existing one with the same name in
    /// place.
    pub fn insert(&mut self, descriptor: FeatureDescriptor) {
        match self.entries.iter_mut().find(|d| d.name == descriptor.name) {
            Some(slot) => *slot = descriptor,
            None => self.entries.push(descriptor),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FeatureDescriptor> {
        self.entries.iter().find(|d| d.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FeatureDescriptor> {
        self.entries.iter_mut().find(|d| d.name == name)
    }

    pub fn remove(&mut self, name: &str) -> Option<FeatureDescriptor> {
        let idx = self.entries.iter().position(|d| d.name == name)?;
        Some(self.entries.remove(idx))
    }

    /// Apply an override to the named feature.
    pub fn apply_override(&mut self, name: &str, change: &FeatureOverride) -> Result<(), SurfaceError> {
        let d = self.get_mut(name).ok_or_else(|| SurfaceError::UnknownFeature { name: name.to_string() })?;
        change.apply_to(d);
        Ok(())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|d| d.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<FeatureDescriptor> for FeatureRegistry {
    fn from_iter<I: IntoIterator<Item = FeatureDescriptor>>(iter: I) -> Self {
        let mut reg = FeatureRegistry::new();
        for d in iter {
            reg.insert(d);
        }
        reg
    }
}

// ============================================================================
// Resolved features
// ============================================================================

/// A feature in absolute surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFeature {
    pub name: String,
    pub points: PointSeq,
    pub style: Style,
    pub visible: bool,
    pub is_constrained: bool,
    copy_len: usize,
    bbox: BBox,
}

impl ResolvedFeature {
    fn new(d: &FeatureDescriptor, points: PointSeq) -> Self {
        let bbox = points.bbox();
        let copy_len = (points.len() / d.placement.copy_count()).max(1);
        ResolvedFeature {
            name: d.name.clone(),
            points,
            style: d.style,
            visible: d.visible,
            is_constrained: d.is_constrained,
            copy_len,
            bbox,
        }
    }

    pub fn bbox(&self) -> BBox {
        self.bbox
    }

    /// The original outline followed by each mirror copy, as separate
    /// paths.
    pub fn copies(&self) -> impl Iterator<Item = &[DVec2]> {
        self.points.points().chunks(self.copy_len)
    }

    fn scaled(&self, factor: f64) -> Result<Self, GeometryError> {
        let points = scale(&self.points, factor)?;
        Ok(ResolvedFeature {
            bbox: points.bbox(),
            points,
            ..self.clone()
        })
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Collects everything a surface needs before it is resolved.
#[derive(Debug, Clone)]
pub struct SurfaceBuilder {
    sport: Sport,
    league: String,
    units: Units,
    length: f64,
    width: f64,
    constraint: Option<FeatureDescriptor>,
    features: FeatureRegistry,
    ranges: Option<RangeTable>,
    shift: DVec2,
    arc_points: usize,
    background: Color,
}

impl SurfaceBuilder {
    pub fn new(sport: Sport, league: impl Into<String>, units: Units, length: f64, width: f64) -> Self {
        SurfaceBuilder {
            sport,
            league: league.into(),
            units,
            length,
            width,
            constraint: None,
            features: FeatureRegistry::new(),
            ranges: None,
            shift: DVec2::ZERO,
            arc_points: DEFAULT_ARC_POINTS,
            background: Color::WHITE,
        }
    }

    /// The polygon that bounds the legal playing area.
    pub fn constraint(mut self, descriptor: FeatureDescriptor) -> Self {
        self.constraint = Some(descriptor);
        self
    }

    pub fn feature(mut self, descriptor: FeatureDescriptor) -> Self {
        self.features.insert(descriptor);
        self
    }

    pub fn features(mut self, descriptors: impl IntoIterator<Item = FeatureDescriptor>) -> Self {
        for d in descriptors {
            self.features.insert(d);
        }
        self
    }

    /// Named display ranges. Without a table every range shows the extent.
    pub fn ranges(mut self, table: RangeTable) -> Self {
        self.ranges = Some(table);
        self
    }

    /// Where the surface's origin sits in the caller's data coordinates.
    pub fn shift(mut self, dx: f64, dy: f64) -> Self {
        self.shift = DVec2::new(dx, dy);
        self
    }

    pub fn arc_points(mut self, n: usize) -> Self {
        self.arc_points = n;
        self
    }

    /// Color painted behind every feature.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Change placement or presentation of a registered feature.
    pub fn override_feature(mut self, name: &str, change: &FeatureOverride) -> Result<Self, SurfaceError> {
        if let Some(c) = self.constraint.as_mut().filter(|c| c.name == name) {
            change.apply_to(c);
            return Ok(self);
        }
        self.features.apply_override(name, change)?;
        Ok(self)
    }

    pub fn registry(&self) -> &FeatureRegistry {
        &self.features
    }

    /// Resolve every descriptor. Fails on the first feature whose geometry
    /// cannot be generated, naming it.
    pub fn build(self) -> Result<Surface, SurfaceError> {
        crate::log::debug!(
            sport = %self.sport,
            league = %self.league,
            features = self.features.len(),
            "building surface"
        );
        if self.arc_points < 2 {
            return Err(GeometryError::invalid("arc_points", self.arc_points as f64, "arcs need at least two points").into());
        }

        let constraint = match &self.constraint {
            Some(d) => {
                let pts = d.resolve(self.arc_points).map_err(SurfaceError::in_feature(&d.name))?;
                Some(ResolvedFeature::new(d, pts))
            }
            None => None,
        };

        let mut extent = BBox::new();
        let mut features = Vec::with_capacity(self.features.len());
        for d in self.features.iter() {
            let pts = d.resolve(self.arc_points).map_err(SurfaceError::in_feature(&d.name))?;
            let resolved = ResolvedFeature::new(d, pts);
            if resolved.visible {
                extent.expand_bbox(&resolved.bbox);
            }
            crate::log::trace!(
                feature = %resolved.name,
                points = resolved.points.len(),
                visible = resolved.visible,
                "resolved feature"
            );
            features.push(resolved);
        }

        let constraint_polygon = constraint.as_ref().map(to_polygon);
        Ok(Surface {
            sport: self.sport,
            league: self.league,
            units: self.units,
            length: self.length,
            width: self.width,
            features,
            constraint,
            constraint_polygon,
            extent,
            ranges: self.ranges,
            shift: self.shift,
            background: self.background,
        })
    }
}

fn to_polygon(c: &ResolvedFeature) -> Polygon<f64> {
    let ring: Vec<(f64, f64)> = c.copies().next().unwrap_or_default().iter().map(|p| (p.x, p.y)).collect();
    Polygon::new(LineString::from(ring), vec![])
}

// ============================================================================
// Surface
// ============================================================================

/// A fully resolved playing surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    sport: Sport,
    league: String,
    units: Units,
    length: f64,
    width: f64,
    features: Vec<ResolvedFeature>,
    constraint: Option<ResolvedFeature>,
    constraint_polygon: Option<Polygon<f64>>,
    extent: BBox,
    ranges: Option<RangeTable>,
    shift: DVec2,
    background: Color,
}

impl Surface {
    pub fn sport(&self) -> Sport {
        self.sport
    }

    pub fn league(&self) -> &str {
        &self.league
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn shift(&self) -> DVec2 {
        self.shift
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Every feature, visible or not, in registration order.
    pub fn features(&self) -> &[ResolvedFeature] {
        &self.features
    }

    pub fn feature(&self, name: &str) -> Option<&ResolvedFeature> {
        self.features.iter().find(|f| f.name == name)
    }

    /// Visible features in draw order: ascending z-order, ties kept in
    /// registration order.
    pub fn drawable(&self) -> Vec<&ResolvedFeature> {
        let mut out: Vec<&ResolvedFeature> = self.features.iter().filter(|f| f.visible).collect();
        out.sort_by_key(|f| f.style.z_order);
        out
    }

    pub fn constraint(&self) -> Option<&ResolvedFeature> {
        self.constraint.as_ref()
    }

    /// Min/max over every visible feature other than the constraint.
    pub fn extent(&self) -> BBox {
        self.extent
    }

    pub fn ranges(&self) -> Option<&RangeTable> {
        self.ranges.as_ref()
    }

    /// Whether a point in surface coordinates lies inside the constraint.
    /// Points on the boundary count as inside; a surface without a
    /// constraint contains everything.
    pub fn contains(&self, p: DVec2) -> bool {
        match &self.constraint_polygon {
            Some(poly) => Point::new(p.x, p.y).intersects(poly),
            None => true,
        }
    }

    /// The same surface expressed in other units.
    pub fn converted(&self, units: Units) -> Result<Surface, SurfaceError> {
        let k = self.units.factor_to(units);
        if k == 1.0 {
            return Ok(self.clone());
        }
        let features = self
            .features
            .iter()
            .map(|f| f.scaled(k).map_err(SurfaceError::in_feature(&f.name)))
            .collect::<Result<Vec<_>, _>>()?;
        let constraint = self
            .constraint
            .as_ref()
            .map(|c| c.scaled(k).map_err(SurfaceError::in_feature(&c.name)))
            .transpose()?;
        let constraint_polygon = constraint.as_ref().map(to_polygon);
        let mut extent = BBox::new();
        if !self.extent.is_empty() {
            extent.expand_point(self.extent.min * k);
            extent.expand_point(self.extent.max * k);
        }
        Ok(Surface {
            sport: self.sport,
            league: self.league.clone(),
            units,
            length: self.length * k,
            width: self.width * k,
            features,
            constraint,
            constraint_polygon,
            extent,
            ranges: self.ranges.as_ref().map(|r| r.scaled(k)),
            shift: self.shift * k,
            background: self.background,
        })
    }

    /// The visible window for a display range, optionally narrowed by
    /// explicit limits given in data coordinates.
    pub fn plot_limits(&self, range: DisplayRange, xlim: Option<AxisLimit>, ylim: Option<AxisLimit>) -> BBox {
        let table = match &self.ranges {
            Some(t) => t.clone(),
            None => RangeTable::from_extent(&self.extent.inflate(1.0)),
        };
        table.limits(range, xlim, ylim, self.shift)
    }
}
