//! Named display windows and explicit plot limits.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;

use crate::errors::SurfaceError;
use crate::types::BBox;

/// A named region of a surface to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayRange {
    #[default]
    Full,
    /// The +x half.
    Offense,
    /// The -x half.
    Defense,
    NeutralZone,
    OffensiveZone,
    DefensiveZone,
}

impl DisplayRange {
    pub const ALL: [DisplayRange; 6] = [
        DisplayRange::Full,
        DisplayRange::Offense,
        DisplayRange::Defense,
        DisplayRange::NeutralZone,
        DisplayRange::OffensiveZone,
        DisplayRange::DefensiveZone,
    ];
}

impl fmt::Display for DisplayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DisplayRange::Full => "full",
            DisplayRange::Offense => "offense",
            DisplayRange::Defense => "defense",
            DisplayRange::NeutralZone => "nzone",
            DisplayRange::OffensiveZone => "ozone",
            DisplayRange::DefensiveZone => "dzone",
        })
    }
}

impl FromStr for DisplayRange {
    type Err = SurfaceError;

    /// Case, spaces, underscores and hyphens are ignored, so `Neutral Zone`,
    /// `neutral_zone` and `nzone` all name the same range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "full" => Ok(DisplayRange::Full),
            "offense" | "offence" => Ok(DisplayRange::Offense),
            "defense" | "defence" => Ok(DisplayRange::Defense),
            "nzone" | "neutral" | "neutralzone" => Ok(DisplayRange::NeutralZone),
            "ozone" | "offensivezone" | "attackingzone" => Ok(DisplayRange::OffensiveZone),
            "dzone" | "defensivezone" | "defendingzone" => Ok(DisplayRange::DefensiveZone),
            _ => Err(SurfaceError::UnknownDisplayRange { name: s.to_string() }),
        }
    }
}

/// An explicit limit along one axis, in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisLimit {
    /// Show everything from this value to the far end of the surface. A value
    /// past the far end shows the whole axis.
    From(f64),
    /// Show this interval. Reversed bounds are swapped.
    Between(f64, f64),
}

/// The windows a surface can be displayed in.
///
/// Ranges a sport does not define fall back to the full window. Every window
/// shares the full y range.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeTable {
    pub full_x: (f64, f64),
    pub full_y: (f64, f64),
    windows: Vec<(DisplayRange, (f64, f64))>,
}

impl RangeTable {
    /// A table whose halves split at x = 0.
    pub fn new(full_x: (f64, f64), full_y: (f64, f64)) -> Self {
        RangeTable {
            full_x,
            full_y,
            windows: vec![
                (DisplayRange::Offense, (0.0, full_x.1)),
                (DisplayRange::Defense, (full_x.0, 0.0)),
            ],
        }
    }

    /// Only the full window, taken from a bounding box.
    pub fn from_extent(extent: &BBox) -> Self {
        if extent.is_empty() {
            return RangeTable {
                full_x: (0.0, 0.0),
                full_y: (0.0, 0.0),
                windows: Vec::new(),
            };
        }
        RangeTable {
            full_x: (extent.min.x, extent.max.x),
            full_y: (extent.min.y, extent.max.y),
            windows: Vec::new(),
        }
    }

    /// Add or replace the x window of a range.
    pub fn with(mut self, range: DisplayRange, x: (f64, f64)) -> Self {
        match self.windows.iter_mut().find(|(r, _)| *r == range) {
            Some(slot) => slot.1 = x,
            None => self.windows.push((range, x)),
        }
        self
    }

    pub fn x_window(&self, range: DisplayRange) -> (f64, f64) {
        self.windows
            .iter()
            .find(|(r, _)| *r == range)
            .map_or(self.full_x, |(_, x)| *x)
    }

    pub(crate) fn scaled(&self, k: f64) -> Self {
        let s = |(a, b): (f64, f64)| (a * k, b * k);
        RangeTable {
            full_x: s(self.full_x),
            full_y: s(self.full_y),
            windows: self.windows.iter().map(|(r, x)| (*r, s(*x))).collect(),
        }
    }

    /// The plot window in surface coordinates.
    ///
    /// Explicit limits win over the named range and are shifted from data
    /// coordinates into surface coordinates first. The result never extends
    /// past the full window; if the requested limits miss the surface
    /// entirely the returned box is empty.
    pub fn limits(&self, range: DisplayRange, xlim: Option<AxisLimit>, ylim: Option<AxisLimit>, shift: DVec2) -> BBox {
        let x = axis(xlim, self.x_window(range), self.full_x, shift.x);
        let y = axis(ylim, self.full_y, self.full_y, shift.y);
        BBox {
            min: DVec2::new(x.0, y.0),
            max: DVec2::new(x.1, y.1),
        }
    }
}

fn axis(limit: Option<AxisLimit>, window: (f64, f64), full: (f64, f64), shift: f64) -> (f64, f64) {
    let (lo, hi) = match limit {
        None => window,
        Some(AxisLimit::Between(a, b)) => (a - shift, b - shift),
        Some(AxisLimit::From(v)) => {
            let v = v - shift;
            (if v >= full.1 { full.0 } else { v }, full.1)
        }
    };
    let (lo, hi) = if lo > hi { (hi, lo) } else { (lo, hi) };
    (lo.max(full.0), hi.min(full.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rink() -> RangeTable {
        RangeTable::new((-102.0, 102.0), (-44.0, 44.0))
            .with(DisplayRange::NeutralZone, (-28.0, 28.0))
            .with(DisplayRange::OffensiveZone, (27.0, 102.0))
    }

    // ====== parsing tests ======

    #[test]
    fn aliases_normalize() {
        for s in ["nzone", "Neutral Zone", "neutral_zone", "NEUTRAL"] {
            assert_eq!(s.parse::<DisplayRange>().unwrap(), DisplayRange::NeutralZone, "{s}");
        }
        assert_eq!("offence".parse::<DisplayRange>().unwrap(), DisplayRange::Offense);
        assert_eq!("Attacking Zone".parse::<DisplayRange>().unwrap(), DisplayRange::OffensiveZone);
        assert_eq!("defending-zone".parse::<DisplayRange>().unwrap(), DisplayRange::DefensiveZone);
    }

    #[test]
    fn unknown_range_is_an_error() {
        assert!(matches!(
            "upper deck".parse::<DisplayRange>(),
            Err(SurfaceError::UnknownDisplayRange { .. })
        ));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for r in DisplayRange::ALL {
            assert_eq!(r.to_string().parse::<DisplayRange>().unwrap(), r);
        }
    }

    // ====== limit tests ======

    #[test]
    fn named_windows() {
        let t = rink();
        let b = t.limits(DisplayRange::Offense, None, None, DVec2::ZERO);
        assert_eq!((b.min.x, b.max.x), (0.0, 102.0));
        assert_eq!((b.min.y, b.max.y), (-44.0, 44.0));
        let b = t.limits(DisplayRange::NeutralZone, None, None, DVec2::ZERO);
        assert_eq!((b.min.x, b.max.x), (-28.0, 28.0));
    }

    #[test]
    fn missing_window_falls_back_to_full() {
        let b = rink().limits(DisplayRange::DefensiveZone, None, None, DVec2::ZERO);
        assert_eq!((b.min.x, b.max.x), (-102.0, 102.0));
    }

    #[test]
    fn explicit_limits_are_shifted_swapped_and_clamped() {
        let shift = DVec2::new(100.0, 42.5);
        let b = rink().limits(
            DisplayRange::Full,
            Some(AxisLimit::Between(300.0, 50.0)),
            Some(AxisLimit::Between(0.0, 85.0)),
            shift,
        );
        assert_eq!((b.min.x, b.max.x), (-50.0, 102.0));
        assert_eq!((b.min.y, b.max.y), (-42.5, 42.5));
    }

    #[test]
    fn single_limit_past_the_end_shows_everything() {
        let t = rink();
        let b = t.limits(DisplayRange::Full, Some(AxisLimit::From(150.0)), None, DVec2::ZERO);
        assert_eq!((b.min.x, b.max.x), (-102.0, 102.0));
        let b = t.limits(DisplayRange::Full, Some(AxisLimit::From(25.0)), None, DVec2::ZERO);
        assert_eq!((b.min.x, b.max.x), (25.0, 102.0));
    }

    #[test]
    fn limits_outside_the_surface_are_empty() {
        let b = rink().limits(
            DisplayRange::Full,
            Some(AxisLimit::Between(200.0, 300.0)),
            None,
            DVec2::ZERO,
        );
        assert!(b.is_empty());
    }
}
