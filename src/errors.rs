//! Error types with rich diagnostics using miette
//!
//! Geometry errors are raised where a shape is generated and know only the
//! offending parameter. The surface layer wraps them with the feature name.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

// ============================================================================
// Geometry Errors
// ============================================================================

/// Errors raised while generating a single shape
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid parameters: {parameter} = {value} ({detail})")]
    #[diagnostic(
        code(rinkline::geometry::invalid_parameters),
        help("check that line thicknesses and offsets are smaller than the radii they are measured against")
    )]
    InvalidParameters {
        parameter: String,
        value: f64,
        detail: String,
    },

    #[error("degenerate geometry: {parameter} must be positive, got {value}")]
    #[diagnostic(code(rinkline::geometry::degenerate))]
    DegenerateGeometry { parameter: String, value: f64 },

    #[error("mismatched lengths: expected {expected} {what}, found {found}")]
    #[diagnostic(code(rinkline::geometry::mismatched_length))]
    MismatchedLength {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

impl GeometryError {
    pub(crate) fn invalid(parameter: impl Into<String>, value: f64, detail: impl Into<String>) -> Self {
        GeometryError::InvalidParameters {
            parameter: parameter.into(),
            value,
            detail: detail.into(),
        }
    }

    pub(crate) fn degenerate(parameter: impl Into<String>, value: f64) -> Self {
        GeometryError::DegenerateGeometry {
            parameter: parameter.into(),
            value,
        }
    }
}

// ============================================================================
// Surface Errors
// ============================================================================

/// Errors raised while building or querying a surface
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("failed to build feature `{feature}`")]
    #[diagnostic(code(rinkline::surface::feature))]
    Feature {
        feature: String,
        #[source]
        #[diagnostic_source]
        source: GeometryError,
    },

    #[error("no feature named `{name}` on this surface")]
    #[diagnostic(
        code(rinkline::surface::unknown_feature),
        help("feature names are snake_case, e.g. `center_faceoff_circle`")
    )]
    UnknownFeature { name: String },

    #[error("unknown {sport} league: {name}")]
    #[diagnostic(code(rinkline::surface::unknown_league))]
    UnknownLeague { sport: &'static str, name: String },

    #[error("unknown display range: {name}")]
    #[diagnostic(
        code(rinkline::surface::unknown_display_range),
        help("try `full`, `offense`, `defense`, `nzone`, `ozone` or `dzone`")
    )]
    UnknownDisplayRange { name: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Geometry(#[from] GeometryError),
}

impl SurfaceError {
    pub(crate) fn in_feature(feature: &str) -> impl FnOnce(GeometryError) -> SurfaceError + '_ {
        move |source| SurfaceError::Feature {
            feature: feature.to_string(),
            source,
        }
    }
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors raised while parsing unit, rotation and color names
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("unknown unit `{value}`")]
    #[diagnostic(code(rinkline::parse::unit), help("use `ft` or `m`"))]
    UnknownUnit { value: String },

    #[error("unknown rotation direction `{value}`")]
    #[diagnostic(code(rinkline::parse::rotation), help("use `ccw` or `cw`"))]
    UnknownRotation { value: String },

    #[error("invalid color `{value}`")]
    #[diagnostic(
        code(rinkline::parse::color),
        help("colors are `#rrggbb` hex strings or `none`")
    )]
    InvalidColor { value: String },
}

// ============================================================================
// Render Errors
// ============================================================================

/// Errors raised while turning a surface into an SVG document
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("invalid render scale: {0}")]
    #[diagnostic(code(rinkline::render::invalid_scale))]
    InvalidScale(NumericError),

    #[error("invalid point color")]
    #[diagnostic(code(rinkline::render::invalid_color))]
    InvalidColor(
        #[from]
        #[diagnostic_source]
        ParseError,
    ),

    #[error("nothing to render: the selected display range is empty")]
    #[diagnostic(code(rinkline::render::empty))]
    Empty,
}
