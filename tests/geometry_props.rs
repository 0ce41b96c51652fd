//! Property tests for the geometry primitives and transforms.

use glam::{DVec2, dvec2};
use proptest::prelude::*;
use rinkline::PointSeq;
use rinkline::features::{Placement, XJustify, YJustify};
use rinkline::geometry::{RotationDir, arc, reflect, rotate, scale, translate};
use rinkline::geometry::path::band;

const TOL: f64 = 1e-7;

fn coord() -> impl Strategy<Value = f64> {
    -500.0..500.0f64
}

fn points() -> impl Strategy<Value = PointSeq> {
    prop::collection::vec((coord(), coord()), 1..40)
        .prop_map(|v| v.into_iter().map(|(x, y)| dvec2(x, y)).collect())
}

proptest! {
    #[test]
    fn arc_points_lie_on_the_circle(
        cx in coord(),
        cy in coord(),
        r in 0.01..100.0f64,
        start in -2.0..2.0f64,
        end in -2.0..2.0f64,
        n in 2usize..200,
    ) {
        let center = dvec2(cx, cy);
        let pts = arc(center, r, start, end, n).unwrap();
        prop_assert_eq!(pts.len(), n);
        for p in pts.iter() {
            prop_assert!((p.distance(center) - r).abs() < TOL);
        }
        let first = pts.first().unwrap();
        let expected = center + r * DVec2::from_angle(start * std::f64::consts::PI);
        prop_assert!(first.distance(expected) < TOL);
    }

    #[test]
    fn non_positive_radius_is_rejected(r in -100.0..=0.0f64) {
        prop_assert!(arc(DVec2::ZERO, r, 0.0, 1.0, 10).is_err());
    }

    #[test]
    fn reflecting_twice_is_identity(pts in points(), over_x: bool, over_y: bool) {
        let back = reflect(&reflect(&pts, over_x, over_y), over_x, over_y);
        prop_assert!(back.approx_eq(&pts, 0.0));
    }

    #[test]
    fn rotation_round_trips_and_preserves_length(pts in points(), angle in -2.0..2.0f64) {
        let turned = rotate(&pts, angle, RotationDir::Ccw);
        for (a, b) in pts.iter().zip(turned.iter()) {
            prop_assert!((a.length() - b.length()).abs() < TOL * (1.0 + a.length()));
        }
        let back = rotate(&turned, angle, RotationDir::Cw);
        prop_assert!(back.approx_eq(&pts, 1e-6));
    }

    #[test]
    fn translation_moves_the_bbox(pts in points(), dx in coord(), dy in coord()) {
        let before = pts.bbox();
        let after = translate(&pts, dx, dy).bbox();
        prop_assert!((after.min - (before.min + dvec2(dx, dy))).length() < 1e-9);
        prop_assert!((after.width() - before.width()).abs() < 1e-9);
    }

    #[test]
    fn scaling_scales_area(pts in points(), k in 0.1..10.0f64) {
        let scaled = scale(&pts, k).unwrap();
        let expected = pts.area() * k * k;
        prop_assert!((scaled.area() - expected).abs() <= 1e-3 * k * k + 1e-9 * expected);
    }

    #[test]
    fn band_is_closed_and_ordered(
        r in 1.0..50.0f64,
        frac in 0.01..0.9f64,
        start in 0.0..1.0f64,
        sweep in 0.1..1.0f64,
    ) {
        let ring = band(DVec2::ZERO, r, r * frac, start, start + sweep, 32).unwrap();
        prop_assert!(ring.is_closed(1e-9));
        // Outer arc first, inner arc second.
        let pts = ring.points();
        prop_assert!((pts[0].length() - r).abs() < TOL);
        prop_assert!((pts[32].length() - r * (1.0 - frac)).abs() < TOL);
    }

    #[test]
    fn placement_copies_keep_the_original_first(
        x in coord(),
        y in coord(),
        rx: bool,
        ry: bool,
    ) {
        let shape = PointSeq::from([(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0)]);
        let mut placement = Placement::at(x, y).justified(XJustify::Left, YJustify::Center);
        placement.reflect_x = rx;
        placement.reflect_y = ry;
        let placed = placement.apply(&shape);
        prop_assert_eq!(placed.len(), shape.len() * placement.copy_count());
        let direct = Placement::at(x, y).justified(XJustify::Left, YJustify::Center).apply(&shape);
        prop_assert!(PointSeq::from_iter(placed.points()[..shape.len()].iter().copied()).approx_eq(&direct, 1e-9));
    }
}
