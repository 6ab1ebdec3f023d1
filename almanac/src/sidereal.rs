//! Sidereal time.
//!
//! GMST = ERA + polynomial, from the IERS Conventions (2010, eq. 5.15) and
//! Capitaine et al. (2003, table 2). Inputs are UT Julian days.

use std::f64::consts::{PI, TAU};

use crate::time::J2000_JD;

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle in [0, 2π).
pub fn earth_rotation_angle(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    (TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in [0, 2π).
pub fn gmst(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / 36525.0;
    let poly = 0.014506 + 4612.156534 * t + 1.3915817 * t * t - 0.00000044 * t.powi(3);
    (earth_rotation_angle(jd_ut) + poly * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local Sidereal Time for an east longitude in radians, in [0, 2π).
pub fn local(jd_ut: f64, longitude: f64) -> f64 {
    (gmst(jd_ut) + longitude).rem_euclid(TAU)
}
