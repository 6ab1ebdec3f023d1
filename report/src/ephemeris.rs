//! Types for locating bodies in an observer's sky.

use chrono::{DateTime, Utc};

pub use almanac::{Body, Horizontal};

use crate::observer::ObserverContext;

/// A type that can place bodies on an observer's sky.
pub trait Ephemeris {
    /// Apparent altitude and azimuth of `body` at the observer's time.
    fn position(&self, observer: &ObserverContext, body: Body) -> Horizontal;

    /// The next time `body` rises after the observer's time, if any.
    fn next_rising(&self, observer: &ObserverContext, body: Body) -> Option<DateTime<Utc>>;

    /// The next time `body` sets after the observer's time, if any.
    fn next_setting(&self, observer: &ObserverContext, body: Body) -> Option<DateTime<Utc>>;
}

impl Ephemeris for almanac::Almanac {
    fn position(&self, observer: &ObserverContext, body: Body) -> Horizontal {
        self.observe(body, &observer.site(), observer.timestamp_utc)
    }

    fn next_rising(&self, observer: &ObserverContext, body: Body) -> Option<DateTime<Utc>> {
        almanac::Almanac::next_rising(self, body, &observer.site(), observer.timestamp_utc)
    }

    fn next_setting(&self, observer: &ObserverContext, body: Body) -> Option<DateTime<Utc>> {
        almanac::Almanac::next_setting(self, body, &observer.site(), observer.timestamp_utc)
    }
}

/// Fake ephemeris: reports the same sky whatever the observer.
#[derive(Clone, Debug, Default)]
pub struct FakeEphemeris {
    pub sun: Horizontal,
    pub moon: Horizontal,
    pub jupiter: Horizontal,
    pub saturn: Horizontal,
    pub rising: Option<DateTime<Utc>>,
    pub setting: Option<DateTime<Utc>>,
}

impl Ephemeris for FakeEphemeris {
    fn position(&self, _observer: &ObserverContext, body: Body) -> Horizontal {
        match body {
            Body::Sun => self.sun,
            Body::Moon => self.moon,
            Body::Jupiter => self.jupiter,
            Body::Saturn => self.saturn,
        }
    }

    fn next_rising(&self, _observer: &ObserverContext, _body: Body) -> Option<DateTime<Utc>> {
        self.rising
    }

    fn next_setting(&self, _observer: &ObserverContext, _body: Body) -> Option<DateTime<Utc>> {
        self.setting
    }
}
