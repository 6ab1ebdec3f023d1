//! A small analytic ephemeris.
//!
//! Computes where the Sun, the Moon, Jupiter and Saturn appear in the sky of
//! an observer on the Earth, and when they rise and set.
//!
//! Positions come from mean orbital elements plus the dominant periodic
//! perturbations, following Paul Schlyter's
//! ["How to compute planetary positions"](https://stjarnhimlen.se/comp/ppcomp.html).
//! Expect a few arcminutes of error for the Moon and the planets, and under an
//! arcminute for the Sun: plenty for pointing a pair of binoculars.
//!
//! ```
//! use almanac::{Almanac, Body, Site};
//! use chrono::{TimeZone, Utc};
//!
//! let site = Site { latitude: 0.7, longitude: -1.3, elevation: 20.0 };
//! let almanac = Almanac::default();
//! let at = Utc.with_ymd_and_hms(2020, 12, 21, 22, 30, 0).unwrap();
//! let jupiter = almanac.observe(Body::Jupiter, &site, at);
//! println!("Jupiter is {:.1}° up", jupiter.altitude.to_degrees());
//! ```

use std::fmt::Display;

use chrono::{DateTime, Duration, Utc};

pub mod coords;
pub mod horizon;
pub mod moon;
pub mod orbit;
pub mod planets;
pub mod riseset;
pub mod sidereal;
pub mod sun;
pub mod time;

pub use horizon::{Horizontal, Site};
pub use planets::Planet;
pub use riseset::Event;

use coords::Cartesian;
use time::Epoch;

/// Astronomical unit, in equatorial Earth radii.
const AU_IN_EARTH_RADII: f64 = 149_597_870.7 / 6_378.137;

/// A body the almanac can place on the sky.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Jupiter,
    Saturn,
}

impl Body {
    pub const ALL: [Body; 4] = [Body::Sun, Body::Moon, Body::Jupiter, Body::Saturn];
}

impl Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Sun => write!(f, "Sun"),
            Body::Moon => write!(f, "Moon"),
            Body::Jupiter => write!(f, "{}", Planet::Jupiter),
            Body::Saturn => write!(f, "{}", Planet::Saturn),
        }
    }
}

/// Settings for an [`Almanac`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct AlmanacSettings {
    /// Station pressure for refraction, hPa. Zero disables refraction.
    pub pressure_hpa: f64,
    /// Air temperature for refraction, °C.
    pub temperature_c: f64,
    /// How far ahead to look for rising and setting events.
    pub search_horizon: Duration,
}

impl Default for AlmanacSettings {
    fn default() -> Self {
        Self {
            pressure_hpa: 1010.0,
            temperature_c: 15.0,
            search_horizon: Duration::days(366),
        }
    }
}

/// Entry point for position and rise/set queries.
#[derive(Clone, Debug, Default)]
pub struct Almanac {
    settings: AlmanacSettings,
}

impl Almanac {
    pub fn new(settings: AlmanacSettings) -> Self {
        Almanac { settings }
    }

    pub fn settings(&self) -> &AlmanacSettings {
        &self.settings
    }

    /// Geocentric equatorial position of the body in Earth radii, equinox of
    /// date.
    pub fn geocentric(&self, body: Body, epoch: &Epoch) -> Cartesian {
        let d = epoch.day_number();
        let ecliptic = match body {
            Body::Sun => sun::geocentric(d).scale(AU_IN_EARTH_RADII),
            Body::Moon => moon::geocentric(d),
            Body::Jupiter => Planet::Jupiter.geocentric(d).scale(AU_IN_EARTH_RADII),
            Body::Saturn => Planet::Saturn.geocentric(d).scale(AU_IN_EARTH_RADII),
        };
        ecliptic.ecliptic_to_equatorial(coords::obliquity(d))
    }

    /// Topocentric altitude and azimuth without atmospheric refraction.
    pub fn geometric(&self, body: Body, site: &Site, at: DateTime<Utc>) -> Horizontal {
        let epoch = Epoch::from_utc(at);
        let lst = sidereal::local(epoch.ut, site.longitude);
        let topocentric = self.geocentric(body, &epoch) - site.geocentric(lst);
        horizon::to_horizontal(topocentric, site, lst)
    }

    /// Apparent altitude and azimuth: topocentric, with refraction.
    pub fn observe(&self, body: Body, site: &Site, at: DateTime<Utc>) -> Horizontal {
        let geometric = self.geometric(body, site, at);
        let lift = horizon::refraction(
            geometric.altitude,
            self.settings.pressure_hpa,
            self.settings.temperature_c,
        );
        tracing::trace!(
            %body,
            altitude = geometric.altitude.to_degrees(),
            azimuth = geometric.azimuth.to_degrees(),
            refraction = lift.to_degrees(),
            "observed"
        );
        Horizontal {
            altitude: geometric.altitude + lift,
            ..geometric
        }
    }

    /// Next time the body rises after `after`, if within the search horizon.
    pub fn next_rising(
        &self,
        body: Body,
        site: &Site,
        after: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        riseset::next_event(self, body, site, after, Event::Rising)
    }

    /// Next time the body sets after `after`, if within the search horizon.
    pub fn next_setting(
        &self,
        body: Body,
        site: &Site,
        after: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        riseset::next_event(self, body, site, after, Event::Setting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::f64::consts::PI;

    fn keyport() -> Site {
        Site {
            latitude: 40.373545f64.to_radians(),
            longitude: (-74.151494f64).to_radians(),
            elevation: 20.0,
        }
    }

    #[test]
    fn solstice_noon_sun() {
        // 2024-06-21 13:00 EDT, close to local apparent noon.
        let t = Utc.with_ymd_and_hms(2024, 6, 21, 17, 0, 0).unwrap();
        let sun = Almanac::default().observe(Body::Sun, &keyport(), t);
        // 90° - 40.37° + 23.44°
        assert!((sun.altitude.to_degrees() - 73.07).abs() < 0.1, "{sun:?}");
        assert!((sun.azimuth - PI).abs().to_degrees() < 3.0, "{sun:?}");
    }

    #[test]
    fn great_conjunction_at_dusk() {
        // 2020-12-21 17:30 EST: both planets low in the south-west.
        let t = Utc.with_ymd_and_hms(2020, 12, 21, 22, 30, 0).unwrap();
        let almanac = Almanac::default();
        let jupiter = almanac.observe(Body::Jupiter, &keyport(), t);
        let saturn = almanac.observe(Body::Saturn, &keyport(), t);
        // (altitude, azimuth) in degrees, apparent, to within 0.1°.
        for (planet, (alt, az)) in [(jupiter, (12.66, 228.63)), (saturn, (12.69, 228.73))] {
            assert!((planet.altitude.to_degrees() - alt).abs() < 0.1, "{planet:?}");
            assert!((planet.azimuth.to_degrees() - az).abs() < 0.1, "{planet:?}");
        }

        let sun = almanac.observe(Body::Sun, &keyport(), t);
        assert!(sun.altitude < 0.0);
        let moon = almanac.observe(Body::Moon, &keyport(), t);
        assert!(moon.is_above_horizon());
    }

    #[test]
    fn great_conjunction_closest_approach() {
        // The published minimum geocentric separation on 2020-12-21 was 6.1'.
        let almanac = Almanac::default();
        let start = Utc.with_ymd_and_hms(2020, 12, 21, 0, 0, 0).unwrap();
        let closest = (0..24 * 6)
            .map(|i| {
                let epoch = Epoch::from_utc(start + Duration::minutes(10 * i));
                let j = almanac.geocentric(Body::Jupiter, &epoch);
                let s = almanac.geocentric(Body::Saturn, &epoch);
                let cos = (j.x * s.x + j.y * s.y + j.z * s.z) / (j.radius() * s.radius());
                cos.clamp(-1.0, 1.0).acos().to_degrees() * 60.0
            })
            .fold(f64::INFINITY, f64::min);
        assert!((closest - 6.1).abs() < 1.0, "closest approach {closest}'");
    }

    #[test]
    fn refraction_lifts_but_does_not_move_sideways() {
        let t = Utc.with_ymd_and_hms(2024, 6, 21, 9, 30, 0).unwrap();
        let almanac = Almanac::default();
        let seen = almanac.observe(Body::Sun, &keyport(), t);
        let geometric = almanac.geometric(Body::Sun, &keyport(), t);
        assert!(seen.altitude > geometric.altitude);
        assert_eq!(seen.azimuth, geometric.azimuth);

        let vacuum = Almanac::new(AlmanacSettings {
            pressure_hpa: 0.0,
            ..AlmanacSettings::default()
        });
        assert_eq!(vacuum.observe(Body::Sun, &keyport(), t), geometric);
    }

    #[test]
    fn lunar_parallax_is_visible() {
        // The Moon's topocentric altitude is lower than its geocentric one by
        // up to ~1°; on the horizon the difference approaches the full parallax.
        let t = Utc.with_ymd_and_hms(2020, 12, 21, 22, 30, 0).unwrap();
        let almanac = Almanac::default();
        let site = keyport();
        let epoch = Epoch::from_utc(t);
        let lst = sidereal::local(epoch.ut, site.longitude);
        let geocentric =
            horizon::to_horizontal(almanac.geocentric(Body::Moon, &epoch), &site, lst);
        let topocentric = almanac.geometric(Body::Moon, &site, t);
        let drop = (geocentric.altitude - topocentric.altitude).to_degrees();
        assert!((0.3..1.1).contains(&drop), "parallax {drop}°");
    }

    #[test]
    fn body_names() {
        let names: Vec<String> = Body::ALL.iter().map(|b| b.to_string()).collect();
        assert_eq!(names, ["Sun", "Moon", "Jupiter", "Saturn"]);
    }
}
