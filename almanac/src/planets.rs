//! Heliocentric and geocentric positions of Jupiter and Saturn.
//!
//! Mean elements of date plus the mutual perturbations of the two planets,
//! the largest being the ~900 year "great inequality" (2Mj − 5Ms).

use std::fmt::Display;

use crate::coords::Cartesian;
use crate::orbit::Elements;
use crate::sun;

/// A planet this ephemeris knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Planet {
    Jupiter,
    Saturn,
}

impl Display for Planet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Planet::Jupiter => write!(f, "Jupiter"),
            Planet::Saturn => write!(f, "Saturn"),
        }
    }
}

impl Planet {
    /// Mean elements at day number `d`. Distances in AU.
    pub fn elements(self, d: f64) -> Elements {
        match self {
            Planet::Jupiter => Elements {
                node: 100.4542 + 2.76854e-5 * d,
                inclination: 1.3030 - 1.557e-7 * d,
                perihelion: 273.8777 + 1.64505e-5 * d,
                semi_major_axis: 5.20256,
                eccentricity: 0.048498 + 4.469e-9 * d,
                mean_anomaly: 19.8950 + 0.083_085_300_1 * d,
            },
            Planet::Saturn => Elements {
                node: 113.6634 + 2.38980e-5 * d,
                inclination: 2.4886 - 1.081e-7 * d,
                perihelion: 339.3939 + 2.97661e-5 * d,
                semi_major_axis: 9.55475,
                eccentricity: 0.055546 - 9.499e-9 * d,
                mean_anomaly: 316.9670 + 0.033_444_228_2 * d,
            },
        }
    }

    /// Corrections to heliocentric (longitude, latitude) in degrees.
    fn perturbations(self, d: f64) -> (f64, f64) {
        let mj = Planet::Jupiter.elements(d).mean_anomaly_rad();
        let ms = Planet::Saturn.elements(d).mean_anomaly_rad();
        let rad = f64::to_radians;
        match self {
            Planet::Jupiter => {
                let lon = -0.332 * (2.0 * mj - 5.0 * ms - rad(67.6)).sin()
                    - 0.056 * (2.0 * mj - 2.0 * ms + rad(21.0)).sin()
                    + 0.042 * (3.0 * mj - 5.0 * ms + rad(21.0)).sin()
                    - 0.036 * (mj - 2.0 * ms).sin()
                    + 0.022 * (mj - ms).cos()
                    + 0.023 * (2.0 * mj - 3.0 * ms + rad(52.0)).sin()
                    - 0.016 * (mj - 5.0 * ms - rad(69.0)).sin();
                (lon, 0.0)
            }
            Planet::Saturn => {
                let lon = 0.812 * (2.0 * mj - 5.0 * ms - rad(67.6)).sin()
                    - 0.229 * (2.0 * mj - 4.0 * ms - rad(2.0)).cos()
                    + 0.119 * (mj - 2.0 * ms - rad(3.0)).sin()
                    + 0.046 * (2.0 * mj - 6.0 * ms - rad(69.0)).sin()
                    + 0.014 * (mj - 3.0 * ms + rad(32.0)).sin();
                let lat = -0.020 * (2.0 * mj - 4.0 * ms - rad(2.0)).cos()
                    + 0.018 * (2.0 * mj - 6.0 * ms - rad(49.0)).sin();
                (lon, lat)
            }
        }
    }

    /// Heliocentric ecliptic position in AU, equinox of date.
    pub fn heliocentric(self, d: f64) -> Cartesian {
        let mean = self.elements(d).position();
        let (dlon, dlat) = self.perturbations(d);
        Cartesian::from_spherical(
            mean.longitude() + dlon.to_radians(),
            mean.latitude() + dlat.to_radians(),
            mean.radius(),
        )
    }

    /// Geocentric ecliptic position in AU, equinox of date.
    pub fn geocentric(self, d: f64) -> Cartesian {
        self.heliocentric(d) + sun::geocentric(d)
    }
}
