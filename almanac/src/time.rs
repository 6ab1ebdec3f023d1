//! Time scales for the ephemeris.
//!
//! The body theories run on Terrestrial Time; the Earth's rotation runs on UT.
//! We treat UTC as UT (the difference is under a second) and estimate
//! ΔT = TT − UT from the Espenak & Meeus (2006) polynomials.

use chrono::{DateTime, Datelike, Utc};

/// Julian day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian day of the Unix epoch.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian day of 2000 January 0.0, the origin of the orbital element day count.
const DAY_ZERO_JD: f64 = 2_451_543.5;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian day (UT) of the given instant.
pub fn julian_day(t: DateTime<Utc>) -> f64 {
    let seconds = t.timestamp() as f64 + f64::from(t.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

/// Estimated TT − UT in seconds at the given decimal year.
pub fn delta_t(year: f64) -> f64 {
    let long_term = |y: f64| {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    };
    if (1941.0..1961.0).contains(&year) {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t * t / 233.0 + t.powi(3) / 2547.0
    } else if (1961.0..1986.0).contains(&year) {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t * t / 260.0 - t.powi(3) / 718.0
    } else if (1986.0..2005.0).contains(&year) {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if (2005.0..2050.0).contains(&year) {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t * t
    } else if (2050.0..2150.0).contains(&year) {
        long_term(year) - 0.5628 * (2150.0 - year)
    } else {
        long_term(year)
    }
}

/// An instant expressed on both time scales the ephemeris needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Epoch {
    /// Julian day, Universal Time.
    pub ut: f64,
    /// Julian day, Terrestrial Time.
    pub tt: f64,
}

impl Epoch {
    pub fn from_utc(t: DateTime<Utc>) -> Self {
        let ut = julian_day(t);
        let year = f64::from(t.year()) + (f64::from(t.ordinal0()) + 0.5) / 365.25;
        let tt = ut + delta_t(year) / SECONDS_PER_DAY;
        Epoch { ut, tt }
    }

    /// Days (TT) since 2000 January 0.0; the argument of the orbital elements.
    pub fn day_number(&self) -> f64 {
        self.tt - DAY_ZERO_JD
    }
}
