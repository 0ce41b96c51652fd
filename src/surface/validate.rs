//! Filtering data points against a surface before they are drawn on it.
//!
//! [`Surface::validate`] is a plain function from raw coordinate arrays to
//! the subset that should be plotted. Input is in data coordinates; output is
//! in surface coordinates.

use geo::{Intersects, Point};
use glam::DVec2;

use super::{AxisLimit, DisplayRange, Surface};
use crate::errors::GeometryError;

/// How data points are filtered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataOptions {
    /// Restrict points to a named window. `None` keeps the whole surface
    /// unless explicit limits are given.
    pub display_range: Option<DisplayRange>,
    pub xlim: Option<AxisLimit>,
    pub ylim: Option<AxisLimit>,
    /// Add a copy of every point mirrored across the long axis.
    pub symmetrize: bool,
    /// Keep points outside the surface's constraint.
    pub include_outside: bool,
}

/// Points that survived validation, in surface coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub values: Vec<f64>,
}

impl ValidatedData {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| DVec2::new(x, y))
    }
}

impl Surface {
    /// Shift, mirror and mask data points.
    ///
    /// Missing values default to 1. A point is dropped when any of its
    /// coordinates or its value is NaN, when it falls outside the requested
    /// window, or (unless `include_outside`) when it lies outside the
    /// constraint.
    pub fn validate(&self, x: &[f64], y: &[f64], values: Option<&[f64]>, opts: &DataOptions) -> Result<ValidatedData, GeometryError> {
        let shift = self.shift();
        let mut xs: Vec<f64> = x.iter().map(|v| v - shift.x).collect();
        let mut ys: Vec<f64> = y.iter().map(|v| v - shift.y).collect();
        let mut vs: Vec<f64> = match values {
            Some(v) => v.to_vec(),
            None => vec![1.0; x.len()],
        };

        if opts.symmetrize {
            xs.extend_from_within(..);
            let mirrored: Vec<f64> = ys.iter().map(|v| -v).collect();
            ys.extend(mirrored);
            vs.extend_from_within(..);
        }

        if ys.len() != xs.len() {
            return Err(GeometryError::MismatchedLength {
                what: "y coordinates",
                expected: xs.len(),
                found: ys.len(),
            });
        }
        if vs.len() != xs.len() {
            return Err(GeometryError::MismatchedLength {
                what: "values",
                expected: xs.len(),
                found: vs.len(),
            });
        }

        let window = if opts.display_range.is_some() || opts.xlim.is_some() || opts.ylim.is_some() {
            Some(self.plot_limits(opts.display_range.unwrap_or_default(), opts.xlim, opts.ylim))
        } else {
            None
        };
        let polygon = self.constraint_polygon.as_ref().filter(|_| !opts.include_outside);

        let mut out = ValidatedData::default();
        for ((px, py), v) in xs.into_iter().zip(ys).zip(vs) {
            if px.is_nan() || py.is_nan() || v.is_nan() {
                continue;
            }
            if window.is_some_and(|w| !w.contains(DVec2::new(px, py))) {
                continue;
            }
            if polygon.is_some_and(|poly| !Point::new(px, py).intersects(poly)) {
                continue;
            }
            out.x.push(px);
            out.y.push(py);
            out.values.push(v);
        }
        crate::log::debug!(input = x.len(), kept = out.len(), "validated data");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{CustomOutline, FeatureDescriptor, Placement, Style};
    use crate::geometry::rectangle;
    use crate::surface::{RangeTable, Sport, SurfaceBuilder};
    use crate::types::Units;

    fn surface() -> Surface {
        let field = |name: &str| {
            FeatureDescriptor::new(
                name,
                CustomOutline {
                    points: rectangle(-10.0, 10.0, -5.0, 5.0),
                },
                Placement::default(),
                Style::default(),
            )
        };
        SurfaceBuilder::new(Sport::Football, "test", Units::Feet, 20.0, 10.0)
            .constraint(field("constraint").hidden())
            .feature(field("outline"))
            .ranges(RangeTable::new((-11.0, 11.0), (-6.0, 6.0)))
            .shift(10.0, 5.0)
            .build()
            .unwrap()
    }

    #[test]
    fn shifts_into_surface_coordinates() {
        let d = surface()
            .validate(&[10.0, 12.0], &[5.0, 6.0], None, &DataOptions::default())
            .unwrap();
        assert_eq!(d.x, vec![0.0, 2.0]);
        assert_eq!(d.y, vec![0.0, 1.0]);
        assert_eq!(d.values, vec![1.0, 1.0]);
    }

    #[test]
    fn drops_points_outside_constraint() {
        let s = surface();
        let x = [10.0, 25.0];
        let y = [5.0, 5.0];
        assert_eq!(s.validate(&x, &y, None, &DataOptions::default()).unwrap().len(), 1);
        let opts = DataOptions {
            include_outside: true,
            ..Default::default()
        };
        assert_eq!(s.validate(&x, &y, None, &opts).unwrap().len(), 2);
    }

    #[test]
    fn drops_nan() {
        let d = surface()
            .validate(&[10.0, f64::NAN, 11.0], &[5.0, 5.0, 5.0], Some(&[1.0, 2.0, f64::NAN]), &DataOptions::default())
            .unwrap();
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn symmetrize_mirrors_about_long_axis() {
        let opts = DataOptions {
            symmetrize: true,
            ..Default::default()
        };
        let d = surface().validate(&[12.0], &[8.0], Some(&[3.0]), &opts).unwrap();
        assert_eq!(d.y, vec![3.0, -3.0]);
        assert_eq!(d.values, vec![3.0, 3.0]);
    }

    #[test]
    fn display_range_masks() {
        let opts = DataOptions {
            display_range: Some(DisplayRange::Offense),
            ..Default::default()
        };
        let d = surface().validate(&[5.0, 15.0], &[5.0, 5.0], None, &opts).unwrap();
        assert_eq!(d.x, vec![5.0]);
    }

    #[test]
    fn mismatched_lengths() {
        let err = surface()
            .validate(&[1.0, 2.0], &[1.0], None, &DataOptions::default())
            .unwrap_err();
        assert!(matches!(err, GeometryError::MismatchedLength { found: 1, .. }));
        let err = surface()
            .validate(&[1.0], &[1.0], Some(&[1.0, 2.0]), &DataOptions::default())
            .unwrap_err();
        assert!(matches!(err, GeometryError::MismatchedLength { what: "values", .. }));
    }
}
