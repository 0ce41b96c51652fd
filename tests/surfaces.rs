//! End-to-end checks over every regulation surface.
//!
//! Run with `RUST_LOG=rinkline=trace cargo test --features tracing` to see
//! each feature as it resolves.

use glam::dvec2;
use rinkline::features::FeatureOverride;
use rinkline::leagues::{self, hockey::RinkParams};
use rinkline::{
    AxisLimit, DataOptions, DisplayRange, HockeyLeague, RenderOptions, Sport, SurfaceError, Units,
    render, render_with_points,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ====== preset tests ======

#[test]
fn every_league_builds_and_renders() {
    init_tracing();
    for (sport, league) in leagues::all() {
        let _span = tracing::debug_span!("surface", %sport, %league).entered();
        let surface = leagues::surface(sport, &league)
            .and_then(|b| b.build())
            .unwrap_or_else(|e| panic!("{sport} {league}: {e}"));
        assert!(!surface.extent().is_empty(), "{sport} {league}");
        for f in surface.features() {
            assert!(f.points.all_finite(), "{sport} {league} {}", f.name);
        }
        let svg = render(&surface, &RenderOptions::default()).unwrap();
        tracing::debug!(features = surface.features().len(), bytes = svg.len(), "rendered");
        assert!(svg.contains("<path"), "{sport} {league}");
    }
}

#[test]
fn league_listing() {
    let listing: Vec<String> = leagues::all()
        .into_iter()
        .map(|(sport, league)| format!("{sport} {league}"))
        .collect();
    insta::assert_snapshot!(listing.join("\n"), @r"
    baseball mlb
    basketball nba
    basketball wnba
    basketball ncaa
    basketball fiba
    basketball nfhs
    football ncaa
    hockey nhl
    hockey nwhl
    hockey ncaa
    hockey iihf
    ");
}

#[test]
fn league_names_are_case_insensitive() {
    assert!(leagues::surface(Sport::Basketball, " WNBA ").is_ok());
    assert!(matches!(
        leagues::surface(Sport::Hockey, "khl"),
        Err(SurfaceError::UnknownLeague { sport: "hockey", .. })
    ));
}

// ====== customization tests ======

#[test]
fn custom_dimensions_move_features() {
    let params = RinkParams {
        length: 180.0,
        ..RinkParams::default()
    };
    let rink = params.builder("short").build().unwrap();
    let half = 90.0 + params.board_thickness;
    assert!((rink.extent().max.x - half).abs() < 1e-9);
    assert!(rink.contains(dvec2(89.0, 0.0)));
    assert!(!rink.contains(dvec2(95.0, 0.0)));
}

#[test]
fn overrides_hide_and_restyle() {
    let builder = HockeyLeague::Nhl
        .builder()
        .override_feature("center_line", &FeatureOverride::visible(false))
        .unwrap();
    let rink = builder.build().unwrap();
    assert!(rink.drawable().iter().all(|f| f.name != "center_line"));

    let err = HockeyLeague::Nhl
        .builder()
        .override_feature("no_such_line", &FeatureOverride::visible(false))
        .unwrap_err();
    assert!(matches!(err, SurfaceError::UnknownFeature { .. }));
}

#[test]
fn metric_conversion_scales_everything() {
    let rink = HockeyLeague::Nhl.builder().build().unwrap();
    let metric = rink.converted(Units::Meters).unwrap();
    assert_eq!(metric.units(), Units::Meters);
    let k = Units::Feet.factor_to(Units::Meters);
    assert!((metric.extent().max.x - rink.extent().max.x * k).abs() < 1e-9);
    assert!((metric.length() - 200.0 * k).abs() < 1e-9);
    assert!(metric.contains(dvec2(0.0, 0.0)));
}

// ====== data tests ======

#[test]
fn data_is_masked_and_windowed() {
    let rink = HockeyLeague::Nhl.builder().build().unwrap();
    let xs = [-80.0, -10.0, 10.0, 80.0, 99.9];
    let ys = [0.0, 0.0, 0.0, 0.0, 42.4];
    let all = rink.validate(&xs, &ys, None, &DataOptions::default()).unwrap();
    // The last point sits in the rounded corner, outside the boards.
    assert_eq!(all.len(), 4);

    let offense = rink
        .validate(
            &xs,
            &ys,
            None,
            &DataOptions {
                display_range: Some(DisplayRange::Offense),
                ..DataOptions::default()
            },
        )
        .unwrap();
    assert_eq!(offense.x, vec![10.0, 80.0]);

    let explicit = rink
        .validate(
            &xs,
            &ys,
            None,
            &DataOptions {
                xlim: Some(AxisLimit::Between(-20.0, 20.0)),
                ..DataOptions::default()
            },
        )
        .unwrap();
    assert_eq!(explicit.len(), 2);
}

#[test]
fn points_render_over_the_surface() {
    let rink = HockeyLeague::Nhl.builder().build().unwrap();
    let data = rink
        .validate(&[0.0, 30.0], &[0.0, -20.0], Some(&[1.0, 2.0][..]), &DataOptions::default())
        .unwrap();
    let svg = render_with_points(&rink, &RenderOptions::default(), &data).unwrap();
    assert_eq!(svg.matches("<circle").count(), 2);
    // Circles come after every feature path.
    let last_path = svg.rfind("<path").unwrap();
    let first_circle = svg.find("<circle").unwrap();
    assert!(first_circle > last_path);
}

#[test]
fn rotated_render_is_portrait() {
    let rink = HockeyLeague::Nhl.builder().build().unwrap();
    let opts = RenderOptions {
        rotation: 0.5,
        px_per_unit: 1.0,
        ..RenderOptions::default()
    };
    let svg = render(&rink, &opts).unwrap();
    let window = rink.plot_limits(DisplayRange::Full, None, None);
    let attr = |name: &str| -> f64 {
        let start = svg.find(&format!("{name}=\"")).unwrap() + name.len() + 2;
        let end = start + svg[start..].find('"').unwrap();
        svg[start..end].parse().unwrap()
    };
    assert!((attr("width") - window.height()).abs() < 1e-3);
    assert!((attr("height") - window.width()).abs() < 1e-3);
}
