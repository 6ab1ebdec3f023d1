//! Where are the Sun, Moon, Jupiter and Saturn in my sky?
//!
//! Resolves an observer's local date, time and time zone to an instant, asks
//! an [`Ephemeris`] where each body appears, and prints a short plain-text
//! report.

use std::io::Write;

use chrono::{NaiveDateTime, Utc};

pub mod args;
pub mod ephemeris;
mod error;
pub mod format;
pub mod observer;

pub use error::Error;

use args::Args;
use ephemeris::Ephemeris;
use format::SkyReport;
use observer::ObserverContext;

/// Produce the report for `args` and write it to `out`.
///
/// `now` is the current local wall-clock time, used for whichever of the date
/// and time the arguments leave out.
pub fn run(
    args: &Args,
    ephemeris: &impl Ephemeris,
    now: NaiveDateTime,
    out: &mut impl Write,
) -> Result<(), Error> {
    let tz = observer::parse_timezone(&args.timezone)?;
    let wall = args.wall_clock(now)?;
    let local = observer::localize(tz, wall);
    let observer = ObserverContext::new(
        args.latitude,
        args.longitude,
        args.elevation,
        local.with_timezone(&Utc),
    );
    tracing::info!(
        %local,
        utc = %observer.timestamp_utc,
        latitude = args.latitude,
        longitude = args.longitude,
        elevation = args.elevation,
        "computing report"
    );

    let report = SkyReport::compute(ephemeris, &observer, tz);
    write!(out, "{report}")?;
    out.flush()?;
    Ok(())
}
