//! SVG generation

use ::svg::Document;
use ::svg::node::element::{Circle, ClipPath, Definitions, Path, Rectangle};
use glam::DVec2;

use super::context::RenderContext;
use super::defaults;
use crate::geometry::EPSILON;
use crate::surface::{ResolvedFeature, Surface, ValidatedData};
use crate::types::Color;

/// Extra marks drawn on top of the surface.
#[derive(Debug, Clone, Copy)]
pub struct PointLayer<'a> {
    pub data: &'a ValidatedData,
    pub color: Color,
    pub radius: f64,
}

/// Build the document: background, clip path, features in draw order, then
/// any data points.
pub fn generate_svg(
    surface: &Surface,
    ctx: &RenderContext,
    options: &super::RenderOptions,
    points: Option<PointLayer<'_>>,
) -> Document {
    let (w, h) = (ctx.width_px(), ctx.height_px());
    let mut doc = Document::new()
        .set("width", fmt_num(w))
        .set("height", fmt_num(h))
        .set("viewBox", format!("0 0 {} {}", fmt_num(w), fmt_num(h)));

    if options.background {
        doc = doc.add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", fmt_num(w))
                .set("height", fmt_num(h))
                .set("fill", surface.background().to_string()),
        );
    }

    let clip = surface
        .constraint()
        .and_then(|c| c.copies().next())
        .filter(|outline| outline.len() > 2);
    if let Some(outline) = clip {
        let path = Path::new().set("d", path_data(&ctx.to_px(outline)));
        doc = doc.add(Definitions::new().add(ClipPath::new().set("id", defaults::CLIP_ID).add(path)));
    }

    let stroke_width = fmt_num(options.stroke_width);
    let drawable = surface.drawable();
    crate::log::debug!(features = drawable.len(), width = w, height = h, "generating svg");
    for feature in drawable {
        let clipped = clip.is_some() && feature.is_constrained;
        for path in feature_paths(feature, ctx, &stroke_width, clipped) {
            doc = doc.add(path);
        }
    }

    if let Some(layer) = points {
        let r = fmt_num(layer.radius);
        let fill = layer.color.to_string();
        let centers: Vec<DVec2> = layer.data.points().collect();
        for c in ctx.to_px(&centers) {
            doc = doc.add(
                Circle::new()
                    .set("cx", fmt_num(c.x))
                    .set("cy", fmt_num(c.y))
                    .set("r", r.as_str())
                    .set("fill", fill.as_str()),
            );
        }
    }

    doc
}

/// One `<path>` per mirror copy so copies are never joined by a stray edge.
fn feature_paths<'a>(
    feature: &'a ResolvedFeature,
    ctx: &'a RenderContext,
    stroke_width: &'a str,
    clipped: bool,
) -> impl Iterator<Item = Path> + 'a {
    feature.copies().filter(|c| c.len() > 1).map(move |copy| {
        let mut path = Path::new()
            .set("class", feature.name.as_str())
            .set("fill", feature.style.fill.to_string())
            .set("stroke", feature.style.stroke.to_string())
            .set("stroke-width", stroke_width)
            .set("d", path_data(&ctx.to_px(copy)));
        if clipped {
            path = path.set("clip-path", format!("url(#{})", defaults::CLIP_ID));
        }
        path
    })
}

/// `M` to the first point, `L` through the rest, `Z` when the outline
/// returns to where it started. Every coordinate goes through [`fmt_num`].
pub fn path_data(points: &[DVec2]) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };
    let closed = rest.last().is_some_and(|last| last.distance(*first) <= EPSILON);
    let body = if closed { &rest[..rest.len() - 1] } else { rest };
    let mut d = format!("M{},{}", fmt_num(first.x), fmt_num(first.y));
    if !body.is_empty() {
        d.push_str(" L");
        let coords: Vec<String> = body
            .iter()
            .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
            .collect();
        d.push_str(&coords.join(" "));
    }
    if closed {
        d.push_str(" Z");
    }
    d
}

/// Format a number with 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, defaults::SIG_FIGS)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    s.to_string()
}
