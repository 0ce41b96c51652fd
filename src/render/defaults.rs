//! Default render settings (pixel values are in output px)

/// Output pixels per surface unit.
pub const PX_PER_UNIT: f64 = 4.0;
pub const MARGIN: f64 = 0.0;
/// Outline width of every feature.
pub const STROKE_WIDTH: f64 = 0.5;
/// Radius of a data point marker.
pub const POINT_RADIUS: f64 = 2.0;
/// Significant figures kept for SVG attributes.
pub const SIG_FIGS: i32 = 6;
/// `id` of the clip path built from the surface's constraint.
pub const CLIP_ID: &str = "surface-constraint";
