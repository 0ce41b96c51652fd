//! Rendering context - the view window and the mapping into pixel space

use glam::DVec2;

use crate::errors::RenderError;
use crate::geometry::{PointSeq, RotationDir, rotate};
use crate::types::{BBox, Scaler};

/// Everything needed to place a surface point on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    pub scaler: Scaler,
    /// The visible window after rotation, in surface units, margin included.
    pub bounds: BBox,
    /// Counter-clockwise rotation, as a fraction of π.
    pub rotation: f64,
}

impl RenderContext {
    /// Build the context for a window given in surface coordinates.
    ///
    /// The rotated window's bounding box becomes the page, grown by
    /// `margin_px` on every side.
    pub fn new(window: BBox, rotation: f64, px_per_unit: f64, margin_px: f64) -> Result<Self, RenderError> {
        let scaler = Scaler::try_new(px_per_unit).map_err(RenderError::InvalidScale)?;
        if window.is_empty() || window.width() <= 0.0 || window.height() <= 0.0 {
            return Err(RenderError::Empty);
        }
        let corners = PointSeq::from([
            (window.min.x, window.min.y),
            (window.max.x, window.min.y),
            (window.max.x, window.max.y),
            (window.min.x, window.max.y),
        ]);
        let bounds = rotate(&corners, rotation, RotationDir::Ccw)
            .bbox()
            .inflate(margin_px.max(0.0) / px_per_unit);
        crate::log::debug!(
            min_x = bounds.min.x,
            min_y = bounds.min.y,
            max_x = bounds.max.x,
            max_y = bounds.max.y,
            "render bounds"
        );
        Ok(RenderContext {
            scaler,
            bounds,
            rotation,
        })
    }

    pub fn width_px(&self) -> f64 {
        self.scaler.px(self.bounds.width())
    }

    pub fn height_px(&self) -> f64 {
        self.scaler.px(self.bounds.height())
    }

    /// Rotate, then map into pixel space with +y up.
    pub fn to_px(&self, points: &[DVec2]) -> Vec<DVec2> {
        let seq: PointSeq = points.iter().copied().collect();
        let seq = if self.rotation == 0.0 {
            seq
        } else {
            rotate(&seq, self.rotation, RotationDir::Ccw)
        };
        seq.iter().map(|p| self.scaler.to_svg(p, &self.bounds)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn maps_corners_with_y_flip() {
        let w = BBox::from_corners(dvec2(-10.0, -5.0), dvec2(10.0, 5.0));
        let ctx = RenderContext::new(w, 0.0, 2.0, 0.0).unwrap();
        assert_eq!((ctx.width_px(), ctx.height_px()), (40.0, 20.0));
        let px = ctx.to_px(&[dvec2(-10.0, 5.0), dvec2(10.0, -5.0)]);
        assert_eq!(px, vec![dvec2(0.0, 0.0), dvec2(40.0, 20.0)]);
    }

    #[test]
    fn quarter_turn_swaps_page_dimensions() {
        let w = BBox::from_corners(dvec2(-10.0, -5.0), dvec2(10.0, 5.0));
        let ctx = RenderContext::new(w, 0.5, 1.0, 0.0).unwrap();
        assert!((ctx.width_px() - 10.0).abs() < 1e-9);
        assert!((ctx.height_px() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn margin_grows_page() {
        let w = BBox::from_corners(dvec2(0.0, 0.0), dvec2(10.0, 10.0));
        let ctx = RenderContext::new(w, 0.0, 2.0, 4.0).unwrap();
        assert_eq!(ctx.width_px(), 28.0);
    }

    #[test]
    fn rejects_bad_scale_and_empty_window() {
        let w = BBox::from_corners(dvec2(0.0, 0.0), dvec2(1.0, 1.0));
        assert!(matches!(
            RenderContext::new(w, 0.0, 0.0, 0.0),
            Err(RenderError::InvalidScale(_))
        ));
        assert_eq!(RenderContext::new(BBox::new(), 0.0, 1.0, 0.0), Err(RenderError::Empty));
    }
}
