//! From geocentric equatorial positions to what an observer sees.

use std::f64::consts::{PI, TAU};

use crate::coords::Cartesian;

/// Equatorial radius of the reference ellipsoid, meters.
const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Flattening of the reference ellipsoid (WGS84).
const FLATTENING: f64 = 1.0 / 298.257_223_563;

/// Refraction is not modelled for true altitudes below this, in degrees.
const REFRACTION_FLOOR_DEG: f64 = -1.0;

/// A geodetic observing site.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Site {
    /// Geodetic latitude in radians, north positive.
    pub latitude: f64,
    /// Longitude in radians, east positive.
    pub longitude: f64,
    /// Height above the ellipsoid (~sea level), meters.
    pub elevation: f64,
}

impl Site {
    /// Geocentric position of the site in Earth radii, equatorial axes of
    /// date, for the given local sidereal time.
    pub fn geocentric(&self, lst: f64) -> Cartesian {
        let h = self.elevation / EARTH_RADIUS_M;
        let (sin_lat, cos_lat) = self.latitude.sin_cos();
        let u = ((1.0 - FLATTENING) * self.latitude.tan()).atan();
        let rho_sin = (1.0 - FLATTENING) * u.sin() + h * sin_lat;
        let rho_cos = u.cos() + h * cos_lat;
        let (sin_lst, cos_lst) = lst.sin_cos();
        Cartesian::new(rho_cos * cos_lst, rho_cos * sin_lst, rho_sin)
    }
}

/// A direction on the local sky.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Horizontal {
    /// Radians above the horizon; negative below.
    pub altitude: f64,
    /// Radians from North through East, in [0, 2π).
    pub azimuth: f64,
}

impl Horizontal {
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > 0.0
    }
}

/// Altitude and azimuth of a topocentric equatorial direction.
pub fn to_horizontal(equatorial: Cartesian, site: &Site, lst: f64) -> Horizontal {
    let hour_angle = lst - equatorial.longitude();
    let dec = equatorial.latitude();

    let (sin_ha, cos_ha) = hour_angle.sin_cos();
    let (sin_dec, cos_dec) = dec.sin_cos();
    let (sin_lat, cos_lat) = site.latitude.sin_cos();

    let x = cos_ha * cos_dec;
    let y = sin_ha * cos_dec;
    let z = sin_dec;

    let x_hor = x * sin_lat - z * cos_lat;
    let z_hor = x * cos_lat + z * sin_lat;

    Horizontal {
        altitude: z_hor.clamp(-1.0, 1.0).asin(),
        azimuth: (y.atan2(x_hor) + PI).rem_euclid(TAU),
    }
}

/// Atmospheric refraction for a true (airless) altitude, in radians.
///
/// Sæmundsson's formula, scaled for pressure (hPa) and temperature (°C).
pub fn refraction(altitude: f64, pressure_hpa: f64, temperature_c: f64) -> f64 {
    let h = altitude.to_degrees();
    if h < REFRACTION_FLOOR_DEG || pressure_hpa <= 0.0 {
        return 0.0;
    }
    let arcmin = 1.02 / (h + 10.3 / (h + 5.11)).to_radians().tan();
    let scale = (pressure_hpa / 1010.0) * (283.0 / (273.0 + temperature_c));
    (arcmin * scale / 60.0).to_radians()
}
