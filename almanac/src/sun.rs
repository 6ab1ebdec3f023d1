//! Geocentric position of the Sun.

use crate::coords::Cartesian;
use crate::orbit::Elements;

/// The Sun's apparent orbit around the Earth, at day number `d`.
pub fn elements(d: f64) -> Elements {
    Elements {
        node: 0.0,
        inclination: 0.0,
        perihelion: 282.9404 + 4.70935e-5 * d,
        semi_major_axis: 1.0,
        eccentricity: 0.016709 - 1.151e-9 * d,
        mean_anomaly: 356.0470 + 0.985_600_258_5 * d,
    }
}

/// Geocentric ecliptic position of the Sun in AU, equinox of date.
pub fn geocentric(d: f64) -> Cartesian {
    elements(d).position()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992 October 13.0 TD: true longitude 199.90988°, R = 0.99766 AU.
        let d = 2_448_908.5 - 2_451_543.5;
        let sun = geocentric(d);
        assert!((sun.longitude().to_degrees() - 199.90988).abs() < 0.01);
        assert!((sun.radius() - 0.99766).abs() < 1e-4);
        assert_eq!(sun.z, 0.0);
    }

    #[test]
    fn distance_stays_near_one_au() {
        for d in (0..366).step_by(15) {
            let r = geocentric(f64::from(d) + 8000.0).radius();
            assert!((0.983..1.017).contains(&r), "day {d}: {r} AU");
        }
    }
}
