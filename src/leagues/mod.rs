//! Regulation surfaces.
//!
//! Each sport has a league enum and a parameter struct. The parameters hold
//! every dimension as a public field, so a caller can start from a league's
//! defaults, change what they need and build:
//!
//! ```
//! use rinkline::leagues::hockey::HockeyLeague;
//!
//! let mut params = HockeyLeague::Nhl.params();
//! params.corner_radius = 20.0;
//! let rink = params.builder("custom").build().unwrap();
//! assert_eq!(rink.league(), "custom");
//! ```

pub mod baseball;
pub mod basketball;
pub mod football;
pub mod hockey;

pub use baseball::BaseballLeague;
pub use basketball::BasketballLeague;
pub use football::FootballLeague;
pub use hockey::HockeyLeague;

use crate::errors::SurfaceError;
use crate::surface::{Sport, SurfaceBuilder};

/// Default features for a sport and league name. League names are
/// case-insensitive.
pub fn surface(sport: Sport, league: &str) -> Result<SurfaceBuilder, SurfaceError> {
    Ok(match sport {
        Sport::Baseball => league.parse::<BaseballLeague>()?.builder(),
        Sport::Basketball => league.parse::<BasketballLeague>()?.builder(),
        Sport::Football => league.parse::<FootballLeague>()?.builder(),
        Sport::Hockey => league.parse::<HockeyLeague>()?.builder(),
    })
}

/// Every league this crate knows, by sport.
pub fn all() -> Vec<(Sport, String)> {
    let mut out = Vec::new();
    out.extend(BaseballLeague::ALL.iter().map(|l| (Sport::Baseball, l.to_string())));
    out.extend(BasketballLeague::ALL.iter().map(|l| (Sport::Basketball, l.to_string())));
    out.extend(FootballLeague::ALL.iter().map(|l| (Sport::Football, l.to_string())));
    out.extend(HockeyLeague::ALL.iter().map(|l| (Sport::Hockey, l.to_string())));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_by_sport() {
        let b = surface(Sport::Hockey, "IIHF").unwrap();
        assert!(b.registry().get("goal_crease_outline").is_some());
        let err = surface(Sport::Football, "nfl").unwrap_err();
        assert_eq!(
            err,
            SurfaceError::UnknownLeague {
                sport: "football",
                name: "nfl".into()
            }
        );
    }

    #[test]
    fn lists_every_league() {
        assert_eq!(all().len(), 11);
    }
}
