//! Command-line arguments.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::Parser;

use crate::Error;

const EPILOG: &str = "Computes the local coordinates (altitude and azimuth) of the Sun, \
the Moon, Jupiter and Saturn for the given date and time. Altitude is degrees above the \
horizon and azimuth is degrees eastwards from North. Locate North by finding Polaris, \
the pole star.";

const TIME_FORMAT: &str = "%H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Parser, Clone, Debug)]
#[command(name = "report", version, about = "Where the Sun, Moon, Jupiter and Saturn are in your sky", after_help = EPILOG)]
pub struct Args {
    /// East longitude of the observer in decimal degrees. West is negative.
    #[arg(short = 'x', long, default_value_t = -74.151494, allow_negative_numbers = true)]
    pub longitude: f64,

    /// North latitude of the observer in decimal degrees. South is negative.
    #[arg(short = 'y', long, default_value_t = 40.373545, allow_negative_numbers = true)]
    pub latitude: f64,

    /// The local time zone of the observer, as an IANA name.
    #[arg(short = 't', long, default_value = "US/Eastern")]
    pub timezone: String,

    /// Elevation in metres above sea level.
    #[arg(short = 'e', long, default_value_t = 20.0, allow_negative_numbers = true)]
    pub elevation: f64,

    /// Log more detail to stderr; repeat for more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Local time for the calculation, as HH:MM:SS. Defaults to the current time.
    pub time: Option<String>,

    /// Local date for the calculation, as YYYY-MM-DD. Defaults to the current date.
    pub date: Option<String>,
}

impl Args {
    /// The requested local wall-clock time, filling gaps from `now`.
    pub fn wall_clock(&self, now: NaiveDateTime) -> Result<NaiveDateTime, Error> {
        let time = match &self.time {
            Some(s) => NaiveTime::parse_from_str(s, TIME_FORMAT).map_err(|source| {
                Error::InvalidTime {
                    input: s.clone(),
                    source,
                }
            })?,
            None => now.time(),
        };
        let date = match &self.date {
            Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|source| {
                Error::InvalidDate {
                    input: s.clone(),
                    source,
                }
            })?,
            None => now.date(),
        };
        Ok(date.and_time(time))
    }

    /// Maximum level for stderr logging.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
