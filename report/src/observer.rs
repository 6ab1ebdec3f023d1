//! Where and when the sky is being looked at.

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::Error;

/// An observer on the Earth at a moment in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverContext {
    /// Geodetic latitude, radians; north positive.
    pub latitude_rad: f64,
    /// Longitude, radians; east positive.
    pub longitude_rad: f64,
    /// Height above sea level, metres.
    pub elevation_m: f64,
    pub timestamp_utc: DateTime<Utc>,
    /// Latitude in decimal degrees, exactly as given.
    pub latitude_deg: f64,
    /// Longitude in decimal degrees, exactly as given.
    pub longitude_deg: f64,
}

impl ObserverContext {
    /// Build a context from coordinates in decimal degrees.
    pub fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        elevation_m: f64,
        timestamp_utc: DateTime<Utc>,
    ) -> Self {
        ObserverContext {
            latitude_rad: latitude_deg.to_radians(),
            longitude_rad: longitude_deg.to_radians(),
            elevation_m,
            timestamp_utc,
            latitude_deg,
            longitude_deg,
        }
    }

    pub fn site(&self) -> almanac::Site {
        almanac::Site {
            latitude: self.latitude_rad,
            longitude: self.longitude_rad,
            elevation: self.elevation_m,
        }
    }
}

/// Look up an IANA time zone such as "US/Eastern" or "Europe/Berlin".
pub fn parse_timezone(name: &str) -> Result<Tz, Error> {
    name.parse::<Tz>().map_err(|_| Error::UnknownTimezone {
        name: name.to_owned(),
    })
}

/// Attach a time zone to a wall-clock time.
///
/// A wall-clock time repeated when clocks fall back resolves to its second
/// occurrence, in standard time. One skipped when clocks spring forward is
/// read with the offset in effect before the jump, so 02:30 on a spring-forward
/// night in New York becomes 03:30 daylight time.
pub fn localize(tz: Tz, wall: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&wall) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(earliest, latest) => {
            tracing::info!(%wall, %earliest, %latest, "ambiguous local time, using the later");
            latest
        }
        LocalResult::None => {
            let before = tz.offset_from_utc_datetime(&(wall - Duration::days(1))).fix();
            let utc = wall - Duration::seconds(i64::from(before.local_minus_utc()));
            let t = utc.and_utc().with_timezone(&tz);
            tracing::warn!(%wall, resolved = %t, "local time skipped by a clock change");
            t
        }
    }
}
