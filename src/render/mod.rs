//! SVG rendering for built surfaces
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and settings
//! - `context`: RenderContext mapping surface coordinates onto the page
//! - `svg`: SVG generation

pub mod context;
pub mod defaults;
pub mod svg;

pub use context::RenderContext;

use crate::errors::RenderError;
use crate::surface::{AxisLimit, DisplayRange, Surface, ValidatedData};
use crate::types::Color;
use self::svg::{PointLayer, generate_svg};

/// How a surface is put on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub display_range: DisplayRange,
    pub xlim: Option<AxisLimit>,
    pub ylim: Option<AxisLimit>,
    /// Counter-clockwise rotation, as a fraction of π.
    pub rotation: f64,
    pub px_per_unit: f64,
    /// Empty space around the window, in px.
    pub margin: f64,
    pub stroke_width: f64,
    /// Paint the surface's background color behind the features.
    pub background: bool,
    pub point_color: Color,
    pub point_radius: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            display_range: DisplayRange::Full,
            xlim: None,
            ylim: None,
            rotation: 0.0,
            px_per_unit: defaults::PX_PER_UNIT,
            margin: defaults::MARGIN,
            stroke_width: defaults::STROKE_WIDTH,
            background: true,
            point_color: Color::BLACK,
            point_radius: defaults::POINT_RADIUS,
        }
    }
}

impl RenderOptions {
    /// Set the data point color from a `#rrggbb` string or `none`.
    pub fn with_point_color(mut self, color: &str) -> Result<Self, RenderError> {
        self.point_color = color.parse()?;
        Ok(self)
    }
}

/// Render a surface to an SVG string.
pub fn render(surface: &Surface, options: &RenderOptions) -> Result<String, RenderError> {
    render_inner(surface, options, None)
}

/// Render a surface with validated data points drawn on top.
pub fn render_with_points(
    surface: &Surface,
    options: &RenderOptions,
    data: &ValidatedData,
) -> Result<String, RenderError> {
    let layer = PointLayer {
        data,
        color: options.point_color,
        radius: options.point_radius,
    };
    render_inner(surface, options, Some(layer))
}

fn render_inner(
    surface: &Surface,
    options: &RenderOptions,
    points: Option<PointLayer<'_>>,
) -> Result<String, RenderError> {
    let window = surface.plot_limits(options.display_range, options.xlim, options.ylim);
    let ctx = RenderContext::new(window, options.rotation, options.px_per_unit, options.margin)?;
    Ok(generate_svg(surface, &ctx, options, points).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ParseError;
    use crate::leagues::{BaseballLeague, BasketballLeague, HockeyLeague};
    use crate::surface::DataOptions;

    #[test]
    fn renders_every_visible_feature() {
        let rink = HockeyLeague::Nhl.builder().build().unwrap();
        let out = render(&rink, &RenderOptions::default()).unwrap();
        assert!(out.starts_with("<svg"));
        for f in rink.drawable() {
            assert!(out.contains(&format!("class=\"{}\"", f.name)), "missing {}", f.name);
        }
    }

    #[test]
    fn hidden_features_are_not_drawn() {
        let court = BasketballLeague::Ncaa.builder().build().unwrap();
        let hidden: Vec<_> = court.features().iter().filter(|f| !f.visible).collect();
        assert!(!hidden.is_empty());
        let out = render(&court, &RenderOptions::default()).unwrap();
        for f in hidden {
            assert!(!out.contains(&format!("class=\"{}\"", f.name)), "drew {}", f.name);
        }
    }

    #[test]
    fn constrained_features_are_clipped() {
        let rink = HockeyLeague::Nhl.builder().build().unwrap();
        let out = render(&rink, &RenderOptions::default()).unwrap();
        assert!(out.contains("<clipPath"));
        assert!(out.contains("url(#surface-constraint)"));

        let infield = BaseballLeague::Mlb.builder().build().unwrap();
        let out = render(&infield, &RenderOptions::default()).unwrap();
        assert!(!out.contains("clip-path"));
    }

    #[test]
    fn page_size_follows_window() {
        let rink = HockeyLeague::Nhl.builder().build().unwrap();
        let opts = RenderOptions {
            display_range: DisplayRange::Offense,
            px_per_unit: 2.0,
            ..RenderOptions::default()
        };
        let out = render(&rink, &opts).unwrap();
        let window = rink.plot_limits(DisplayRange::Offense, None, None);
        assert_eq!(window.min.x, 0.0);
        assert!(out.contains(&format!("width=\"{}\"", super::svg::fmt_num(2.0 * window.width()))));
        assert!(out.contains(&format!("height=\"{}\"", super::svg::fmt_num(2.0 * window.height()))));
    }

    #[test]
    fn empty_window_is_an_error() {
        let rink = HockeyLeague::Nhl.builder().build().unwrap();
        let opts = RenderOptions {
            xlim: Some(AxisLimit::Between(5.0, 5.0)),
            ..RenderOptions::default()
        };
        assert_eq!(render(&rink, &opts), Err(RenderError::Empty));
    }

    #[test]
    fn points_are_drawn_as_circles() {
        let rink = HockeyLeague::Nhl.builder().build().unwrap();
        let data = rink
            .validate(&[0.0, 50.0, 500.0], &[0.0, 10.0, 0.0], None, &DataOptions::default())
            .unwrap();
        let opts = RenderOptions::default().with_point_color("#ff0000").unwrap();
        let out = render_with_points(&rink, &opts, &data).unwrap();
        assert_eq!(out.matches("<circle").count(), 2);
        assert!(out.contains("fill=\"#ff0000\""));
    }

    #[test]
    fn bad_point_color() {
        let err = RenderOptions::default().with_point_color("red").unwrap_err();
        assert_eq!(
            err,
            RenderError::InvalidColor(ParseError::InvalidColor { value: "red".into() })
        );
    }
}
