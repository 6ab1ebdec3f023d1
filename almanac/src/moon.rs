//! Geocentric position of the Moon.
//!
//! Mean elements plus the largest periodic terms of the lunar theory. Good to
//! a few arcminutes, which is well inside the topocentric parallax we correct
//! for afterwards.

use crate::coords::Cartesian;
use crate::orbit::Elements;
use crate::sun;

/// The Moon's mean orbit at day number `d`. Distances in Earth radii.
pub fn elements(d: f64) -> Elements {
    Elements {
        node: 125.1228 - 0.052_953_808_3 * d,
        inclination: 5.1454,
        perihelion: 318.0634 + 0.164_357_322_3 * d,
        semi_major_axis: 60.2666,
        eccentricity: 0.054900,
        mean_anomaly: 115.3654 + 13.064_992_950_9 * d,
    }
}

/// Fundamental arguments, radians.
struct Arguments {
    /// Moon's mean anomaly.
    mm: f64,
    /// Sun's mean anomaly.
    ms: f64,
    /// Mean elongation of the Moon from the Sun.
    d: f64,
    /// Moon's argument of latitude.
    f: f64,
}

impl Arguments {
    fn new(moon: &Elements, sun: &Elements) -> Self {
        let lm = moon.mean_longitude_rad();
        let ls = sun.mean_longitude_rad();
        Arguments {
            mm: moon.mean_anomaly_rad(),
            ms: sun.mean_anomaly_rad(),
            d: lm - ls,
            f: lm - moon.node.to_radians(),
        }
    }

    /// Perturbation in ecliptic longitude, degrees.
    fn longitude(&self) -> f64 {
        let Arguments { mm, ms, d, f } = *self;
        -1.274 * (mm - 2.0 * d).sin()
            + 0.658 * (2.0 * d).sin()
            - 0.186 * ms.sin()
            - 0.059 * (2.0 * mm - 2.0 * d).sin()
            - 0.057 * (mm - 2.0 * d + ms).sin()
            + 0.053 * (mm + 2.0 * d).sin()
            + 0.046 * (2.0 * d - ms).sin()
            + 0.041 * (mm - ms).sin()
            - 0.035 * d.sin()
            - 0.031 * (mm + ms).sin()
            - 0.015 * (2.0 * f - 2.0 * d).sin()
            + 0.011 * (mm - 4.0 * d).sin()
    }

    /// Perturbation in ecliptic latitude, degrees.
    fn latitude(&self) -> f64 {
        let Arguments { mm, d, f, .. } = *self;
        -0.173 * (f - 2.0 * d).sin()
            - 0.055 * (mm - f - 2.0 * d).sin()
            - 0.046 * (mm + f - 2.0 * d).sin()
            + 0.033 * (f + 2.0 * d).sin()
            + 0.017 * (2.0 * mm + f).sin()
    }

    /// Perturbation in distance, Earth radii.
    fn distance(&self) -> f64 {
        -0.58 * (self.mm - 2.0 * self.d).cos() - 0.46 * (2.0 * self.d).cos()
    }
}

/// Geocentric ecliptic position of the Moon in Earth radii, equinox of date.
pub fn geocentric(d: f64) -> Cartesian {
    let moon = elements(d);
    let mean = moon.position();
    let args = Arguments::new(&moon, &sun::elements(d));

    let longitude = mean.longitude() + args.longitude().to_radians();
    let latitude = mean.latitude() + args.latitude().to_radians();
    let radius = mean.radius() + args.distance();
    Cartesian::from_spherical(longitude, latitude, radius)
}
