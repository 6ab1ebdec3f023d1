//! Keplerian orbits from mean elements.
//!
//! Elements follow Paul Schlyter's "How to compute planetary positions":
//! angles in degrees, referred to the ecliptic and equinox of date, with a
//! linear rate per day since 2000 January 0.0.

use crate::coords::Cartesian;

/// Newton iterations for Kepler's equation; converges well below 1e-12 rad
/// for the eccentricities we use.
const KEPLER_ITERATIONS: usize = 8;

/// Osculating-style mean elements at one instant.
#[derive(Clone, Copy, Debug)]
pub struct Elements {
    /// Longitude of the ascending node, degrees.
    pub node: f64,
    /// Inclination to the ecliptic, degrees.
    pub inclination: f64,
    /// Argument of perihelion (perigee), degrees.
    pub perihelion: f64,
    /// Semi-major axis, in the body's distance unit.
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    /// Mean anomaly, degrees.
    pub mean_anomaly: f64,
}

impl Elements {
    /// Mean anomaly in radians, reduced to [0, 2π).
    pub fn mean_anomaly_rad(&self) -> f64 {
        self.mean_anomaly.to_radians().rem_euclid(std::f64::consts::TAU)
    }

    /// Mean longitude (node + argument of perihelion + mean anomaly), radians.
    pub fn mean_longitude_rad(&self) -> f64 {
        (self.node + self.perihelion + self.mean_anomaly)
            .to_radians()
            .rem_euclid(std::f64::consts::TAU)
    }

    /// Position in the orbit's reference frame (ecliptic of date).
    pub fn position(&self) -> Cartesian {
        let e = self.eccentricity;
        let a = self.semi_major_axis;
        let big_e = solve_kepler(self.mean_anomaly_rad(), e);

        let xv = a * (big_e.cos() - e);
        let yv = a * (1.0 - e * e).sqrt() * big_e.sin();
        let true_anomaly = yv.atan2(xv);
        let r = xv.hypot(yv);

        let node = self.node.to_radians();
        let incl = self.inclination.to_radians();
        let u = true_anomaly + self.perihelion.to_radians();
        let (sin_n, cos_n) = node.sin_cos();
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_i, cos_i) = incl.sin_cos();

        Cartesian {
            x: r * (cos_n * cos_u - sin_n * sin_u * cos_i),
            y: r * (sin_n * cos_u + cos_n * sin_u * cos_i),
            z: r * sin_u * sin_i,
        }
    }
}

/// Eccentric anomaly for the given mean anomaly (radians) and eccentricity.
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let m = mean_anomaly;
    let mut big_e = m + e * m.sin() * (1.0 + e * m.cos());
    for _ in 0..KEPLER_ITERATIONS {
        let delta = (big_e - e * big_e.sin() - m) / (1.0 - e * big_e.cos());
        big_e -= delta;
        if delta.abs() < 1e-14 {
            break;
        }
    }
    big_e
}
