//! Rising and setting times.
//!
//! A body rises or sets when the geometric altitude of its centre, as seen
//! from the site, crosses its standard altitude: the horizon lowered by
//! refraction (34') and, for the Sun and Moon, by their semidiameter.
//!
//! We march forward from the starting instant in fixed steps until the
//! altitude changes sign relative to that threshold, then bisect the step.
//! The march bounds the search; a body that stays up (or down) for longer
//! than the search horizon has no next event.

use chrono::{DateTime, Duration, SubsecRound, Utc};

use crate::{Almanac, Body, Site};

/// Coarse search step, seconds. Shorter than any interval a body spends above
/// or below the horizon away from the polar circles.
const STEP_SECONDS: i64 = 20 * 60;

/// Bisection stops once the bracket is narrower than this, seconds.
const TOLERANCE_SECONDS: f64 = 0.05;

/// Refraction at the horizon, arcminutes.
const HORIZON_REFRACTION_ARCMIN: f64 = 34.0;

/// Which horizon crossing to look for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Rising,
    Setting,
}

/// Geometric altitude of the body's centre at the moment of apparent rise or
/// set, in radians.
pub fn standard_altitude(body: Body) -> f64 {
    let arcmin = match body {
        Body::Sun => HORIZON_REFRACTION_ARCMIN + 16.0,
        Body::Moon => HORIZON_REFRACTION_ARCMIN + 15.5,
        Body::Jupiter | Body::Saturn => HORIZON_REFRACTION_ARCMIN,
    };
    -(arcmin / 60.0).to_radians()
}

/// The first `event` for `body` strictly after `after`, to the nearest second.
///
/// The altitude is sampled every 20 minutes, so a rise and set that both fall
/// between two samples go unseen. This only happens where the body barely
/// grazes its standard altitude, as the Sun does for a few days at the edge of
/// polar night; the search then reports the next crossing that spans a sample.
pub fn next_event(
    almanac: &Almanac,
    body: Body,
    site: &Site,
    after: DateTime<Utc>,
    event: Event,
) -> Option<DateTime<Utc>> {
    let h0 = standard_altitude(body);
    let at = |seconds: f64| after + Duration::milliseconds((seconds * 1000.0).round() as i64);
    let height = |seconds: f64| almanac.geometric(body, site, at(seconds)).altitude - h0;
    let crossed = |before: f64, now: f64| match event {
        Event::Rising => before < 0.0 && now >= 0.0,
        Event::Setting => before >= 0.0 && now < 0.0,
    };

    let steps = almanac.settings().search_horizon.num_seconds() / STEP_SECONDS;
    let mut lo = 0.0;
    let mut h_lo = height(lo);
    for step in 1..=steps {
        let hi = (step * STEP_SECONDS) as f64;
        let h_hi = height(hi);
        if crossed(h_lo, h_hi) {
            let t = bisect(lo, hi, |s| crossed(h_lo, height(s)));
            let found = at(t).round_subsecs(0);
            tracing::debug!(%body, ?event, %found, "found horizon crossing");
            return Some(found);
        }
        lo = hi;
        h_lo = h_hi;
    }
    tracing::debug!(%body, ?event, %after, "no horizon crossing within search horizon");
    None
}

/// Narrow `[lo, hi]` around the point where `past` turns true; `past(hi)` is
/// known to hold and `past(lo)` not to.
fn bisect(mut lo: f64, mut hi: f64, past: impl Fn(f64) -> bool) -> f64 {
    while hi - lo > TOLERANCE_SECONDS {
        let mid = 0.5 * (lo + hi);
        if past(mid) {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    hi
}
