//! Parametric coordinate geometry for regulation sports surfaces.
//!
//! A surface is built from named features (lines, circles, creases, lanes,
//! bases) whose outlines are computed from a league's dimensions. The built
//! [`Surface`] answers geometric questions (extent, display windows, whether a
//! point lies inside the playing area) and renders to SVG.
//!
//! ```
//! use rinkline::{HockeyLeague, RenderOptions, render};
//!
//! let rink = HockeyLeague::Nhl.builder().build().unwrap();
//! assert!(rink.contains(glam::dvec2(0.0, 0.0)));
//! let svg = render(&rink, &RenderOptions::default()).unwrap();
//! assert!(svg.contains("center_line"));
//! ```

mod log;

pub mod errors;
pub mod features;
pub mod geometry;
pub mod leagues;
pub mod render;
pub mod surface;
pub mod types;

pub use errors::{GeometryError, ParseError, RenderError, SurfaceError};
pub use features::{FeatureDescriptor, FeatureOverride, Placement, Style, XJustify, YJustify};
pub use geometry::PointSeq;
pub use leagues::{BaseballLeague, BasketballLeague, FootballLeague, HockeyLeague};
pub use render::{RenderOptions, render, render_with_points};
pub use surface::{AxisLimit, DataOptions, DisplayRange, Sport, Surface, SurfaceBuilder, ValidatedData};
pub use types::{BBox, Color, Units};
