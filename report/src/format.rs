//! The printed sky report.

use std::f64::consts::PI;
use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::ephemeris::{Body, Ephemeris, Horizontal};
use crate::observer::ObserverContext;

/// Everything the report says, resolved to the observer's time zone.
#[derive(Clone, Debug)]
pub struct SkyReport {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    pub elevation_m: f64,
    pub local_time: DateTime<Tz>,
    pub sun: Horizontal,
    pub moon: Horizontal,
    pub jupiter: Horizontal,
    pub saturn: Horizontal,
    pub sunset: Option<DateTime<Tz>>,
    /// Only looked up while the Sun is down.
    pub sunrise: Option<DateTime<Tz>>,
}

impl SkyReport {
    pub fn compute(ephemeris: &impl Ephemeris, observer: &ObserverContext, tz: Tz) -> Self {
        let local = |t: DateTime<Utc>| t.with_timezone(&tz);
        let sun = ephemeris.position(observer, Body::Sun);
        let sunrise = if sun.is_above_horizon() {
            None
        } else {
            ephemeris.next_rising(observer, Body::Sun).map(local)
        };
        SkyReport {
            longitude_deg: observer.longitude_deg,
            latitude_deg: observer.latitude_deg,
            elevation_m: observer.elevation_m,
            local_time: local(observer.timestamp_utc),
            sun,
            moon: ephemeris.position(observer, Body::Moon),
            jupiter: ephemeris.position(observer, Body::Jupiter),
            saturn: ephemeris.position(observer, Body::Saturn),
            sunset: ephemeris.next_setting(observer, Body::Sun).map(local),
            sunrise,
        }
    }
}

impl Display for SkyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Calculation of the location of Jupiter and Saturn for an observer at \
             {:.4}° {}, {:.4}° {}, {:.4} m above sea level.",
            self.longitude_deg.abs(),
            east_west(self.longitude_deg),
            self.latitude_deg.abs(),
            north_south(self.latitude_deg),
            self.elevation_m,
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Computed for local time {}.",
            self.local_time.format("%Y-%m-%d %H:%M:%S")
        )?;

        if self.sun.altitude > 0.0 {
            let (azimuth, side) = azimuth_offset(self.sun.azimuth);
            writeln!(
                f,
                "The Sun is currently above the horizon, with light at {:.2} %, at {:.2}° {}.",
                light_percent(self.sun.altitude),
                azimuth,
                side,
            )?;
        }
        if let Some(set) = self.sunset {
            writeln!(f, "The Sun will set at {}.", set.format("%H:%M:%S"))?;
        }
        if self.sun.altitude <= 0.0 {
            match self.sunrise {
                Some(rise) => writeln!(f, "The Sun will rise at {}.", rise.format("%H:%M:%S"))?,
                None => writeln!(f, "The Sun will not rise within the search horizon.")?,
            }
        }

        if self.moon.altitude > 0.0 {
            writeln!(
                f,
                "The Moon is currently above the horizon, with light at {:.2} %.",
                light_percent(self.moon.altitude),
            )?;
        }

        for (name, planet) in [("Jupiter", self.jupiter), ("Saturn", self.saturn)] {
            if planet.altitude > 0.0 {
                let (azimuth, side) = azimuth_offset(planet.azimuth);
                writeln!(
                    f,
                    "{name} is {:.2}° above the horizon, {:.2}° {}.",
                    planet.altitude.to_degrees(),
                    azimuth,
                    side,
                )?;
            }
        }

        writeln!(f, "Done.")
    }
}

/// Percentage of full overhead light for a body at `altitude` radians.
pub fn light_percent(altitude: f64) -> f64 {
    altitude.sin().max(0.0) * 100.0
}

/// Azimuth folded onto `[0°, 180°]`, labelled E for the eastern half of the
/// sky and W for the western; exactly 180° is S.
pub fn azimuth_offset(azimuth: f64) -> (f64, char) {
    if azimuth > PI {
        ((azimuth - PI) * 180.0 / PI, 'W')
    } else if azimuth < PI {
        (azimuth * 180.0 / PI, 'E')
    } else {
        (180.0, 'S')
    }
}

fn east_west(longitude: f64) -> char {
    if longitude > 0.0 {
        'E'
    } else {
        'W'
    }
}

fn north_south(latitude: f64) -> char {
    if latitude > 0.0 {
        'N'
    } else {
        'S'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::FakeEphemeris;
    use chrono::TimeZone;

    fn sky(altitude_deg: f64, azimuth_deg: f64) -> Horizontal {
        Horizontal {
            altitude: altitude_deg.to_radians(),
            azimuth: azimuth_deg.to_radians(),
        }
    }

    fn eastern() -> Tz {
        "US/Eastern".parse().unwrap()
    }

    fn observer(lat: f64, lon: f64) -> ObserverContext {
        let at = Utc.with_ymd_and_hms(2020, 12, 21, 22, 30, 0).unwrap();
        ObserverContext::new(lat, lon, 20.0, at)
    }

    #[test]
    fn evening_report() {
        let eph = FakeEphemeris {
            sun: sky(-10.0, 240.0),
            moon: sky(30.0, 170.0),
            jupiter: sky(12.5, 228.75),
            saturn: sky(-5.0, 230.0),
            rising: Some(Utc.with_ymd_and_hms(2020, 12, 22, 12, 16, 50).unwrap()),
            setting: Some(Utc.with_ymd_and_hms(2020, 12, 22, 21, 34, 15).unwrap()),
        };
        let report = SkyReport::compute(&eph, &observer(40.5, -74.25), eastern());
        let lines: Vec<String> = report.to_string().lines().map(String::from).collect();
        assert_eq!(
            lines,
            [
                "Calculation of the location of Jupiter and Saturn for an observer at \
                 74.2500° W, 40.5000° N, 20.0000 m above sea level.",
                "",
                "Computed for local time 2020-12-21 17:30:00.",
                "The Sun will set at 16:34:15.",
                "The Sun will rise at 07:16:50.",
                "The Moon is currently above the horizon, with light at 50.00 %.",
                "Jupiter is 12.50° above the horizon, 48.75° W.",
                "Done.",
            ]
        );
    }

    #[test]
    fn daytime_report() {
        let eph = FakeEphemeris {
            sun: sky(30.0, 150.0),
            moon: sky(-20.0, 0.0),
            jupiter: sky(45.0, 90.0),
            saturn: sky(20.0, 200.0),
            rising: Some(Utc.with_ymd_and_hms(2020, 12, 22, 12, 16, 50).unwrap()),
            setting: Some(Utc.with_ymd_and_hms(2020, 12, 21, 23, 0, 0).unwrap()),
        };
        let report = SkyReport::compute(&eph, &observer(-33.25, 151.5), eastern());
        assert_eq!(report.sunrise, None);

        let text = report.to_string();
        assert!(text.starts_with(
            "Calculation of the location of Jupiter and Saturn for an observer at \
             151.5000° E, 33.2500° S, 20.0000 m above sea level.\n\n"
        ));
        assert!(text.contains(
            "The Sun is currently above the horizon, with light at 50.00 %, at 150.00° E.\n"
        ));
        assert!(text.contains("The Sun will set at 18:00:00.\n"));
        assert!(!text.contains("rise"));
        assert!(!text.contains("Moon"));
        assert!(text.contains("Jupiter is 45.00° above the horizon, 90.00° E.\n"));
        assert!(text.contains("Saturn is 20.00° above the horizon, 20.00° W.\n"));
        assert!(text.ends_with("Done.\n"));
    }

    #[test]
    fn missing_events() {
        let eph = FakeEphemeris {
            sun: sky(-30.0, 0.0),
            ..Default::default()
        };
        let text = SkyReport::compute(&eph, &observer(78.2, 15.6), eastern()).to_string();
        assert!(!text.contains("will set"));
        assert!(text.contains("The Sun will not rise within the search horizon.\n"));
    }

    #[test]
    fn zero_coordinates_are_west_and_south() {
        let eph = FakeEphemeris::default();
        let text = SkyReport::compute(&eph, &observer(0.0, 0.0), eastern()).to_string();
        assert!(text.contains("at 0.0000° W, 0.0000° S, "), "{text}");
    }

    #[test]
    fn light() {
        assert_eq!(light_percent(0.0), 0.0);
        assert_eq!(light_percent(-0.3), 0.0);
        assert!((light_percent(PI / 2.0) - 100.0).abs() < 1e-12);
        assert!((light_percent(30f64.to_radians()) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn azimuth_folding() {
        let (deg, side) = azimuth_offset(PI / 2.0);
        assert!((deg - 90.0).abs() < 1e-9);
        assert_eq!(side, 'E');

        let (deg, side) = azimuth_offset(1.5 * PI);
        assert!((deg - 90.0).abs() < 1e-9);
        assert_eq!(side, 'W');

        assert_eq!(azimuth_offset(PI), (180.0, 'S'));
        assert_eq!(azimuth_offset(0.0), (0.0, 'E'));
    }

    #[test]
    fn great_conjunction_from_keyport() {
        let almanac = almanac::Almanac::default();
        let text = SkyReport::compute(&almanac, &observer(40.373545, -74.151494), eastern())
            .to_string();

        assert!(text.contains("Computed for local time 2020-12-21 17:30:00.\n"));
        assert!(!text.contains("The Sun is currently above the horizon"));
        assert!(text.contains("The Sun will set at 16:3"), "{text}");
        assert!(text.contains("The Sun will rise at 07:1"), "{text}");
        assert!(text.contains("The Moon is currently above the horizon"));
        // Low in the south-west; apparent (altitude, folded azimuth) in degrees.
        for (name, alt, az) in [("Jupiter", 12.66, 48.63), ("Saturn", 12.69, 48.73)] {
            let line = text
                .lines()
                .find(|l| l.starts_with(name))
                .unwrap_or_else(|| panic!("no {name} line in {text}"));
            let rest = line.strip_prefix(&format!("{name} is ")).unwrap();
            let (shown_alt, rest) = rest.split_once("° above the horizon, ").unwrap();
            let shown_az = rest.strip_suffix("° W.").expect("western sky");
            let shown_alt: f64 = shown_alt.parse().unwrap();
            let shown_az: f64 = shown_az.parse().unwrap();
            assert!((shown_alt - alt).abs() < 0.1, "{line}");
            assert!((shown_az - az).abs() < 0.1, "{line}");
        }
    }
}
