//! Rectangular coordinates and the rotations between ecliptic and equator.

use std::ops::{Add, Sub};

/// A rectangular position. The frame and unit are given by context.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian { x, y, z }
    }

    /// Build from longitude and latitude (radians) and a distance.
    pub fn from_spherical(longitude: f64, latitude: f64, radius: f64) -> Self {
        let (sin_lon, cos_lon) = longitude.sin_cos();
        let (sin_lat, cos_lat) = latitude.sin_cos();
        Cartesian {
            x: radius * cos_lat * cos_lon,
            y: radius * cos_lat * sin_lon,
            z: radius * sin_lat,
        }
    }

    pub fn radius(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Longitude (or right ascension) in [0, 2π).
    pub fn longitude(&self) -> f64 {
        self.y.atan2(self.x).rem_euclid(std::f64::consts::TAU)
    }

    /// Latitude (or declination) in [-π/2, π/2].
    pub fn latitude(&self) -> f64 {
        self.z.atan2(self.x.hypot(self.y))
    }

    pub fn scale(self, k: f64) -> Self {
        Cartesian::new(self.x * k, self.y * k, self.z * k)
    }

    /// Rotate from ecliptic to equatorial axes, given the obliquity in radians.
    pub fn ecliptic_to_equatorial(self, obliquity: f64) -> Self {
        let (sin_e, cos_e) = obliquity.sin_cos();
        Cartesian {
            x: self.x,
            y: self.y * cos_e - self.z * sin_e,
            z: self.y * sin_e + self.z * cos_e,
        }
    }
}

impl Add for Cartesian {
    type Output = Cartesian;

    fn add(self, rhs: Cartesian) -> Cartesian {
        Cartesian::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Cartesian {
    type Output = Cartesian;

    fn sub(self, rhs: Cartesian) -> Cartesian {
        Cartesian::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Mean obliquity of the ecliptic, in radians, at the given day number.
pub fn obliquity(d: f64) -> f64 {
    (23.4393 - 3.563e-7 * d).to_radians()
}
