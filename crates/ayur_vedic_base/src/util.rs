//! Shared angle utilities for chart calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Angular separation between two ecliptic longitudes, folded to [0, 180].
pub fn angular_separation(lon_a: f64, lon_b: f64) -> f64 {
    let diff = (normalize_360(lon_a) - normalize_360(lon_b)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Relative house of `target_house` counted from `source_house` (both 1-12).
///
/// Returns 1-12: 1 = same house, 2 = next house, etc.
pub fn house_from(source_house: u8, target_house: u8) -> u8 {
    ((target_house as i16 - source_house as i16 + 12) % 12) as u8 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_positive() {
        assert!((normalize_360(123.5) - 123.5).abs() < 1e-15);
    }

    #[test]
    fn normalize_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
    }

    #[test]
    fn separation_simple() {
        assert!((angular_separation(100.0, 95.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn separation_folds_beyond_180() {
        assert!((angular_separation(10.0, 350.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn separation_symmetric() {
        assert!((angular_separation(40.0, 200.0) - angular_separation(200.0, 40.0)).abs() < 1e-12);
    }

    #[test]
    fn house_from_same() {
        assert_eq!(house_from(3, 3), 1);
    }

    #[test]
    fn house_from_wraps() {
        assert_eq!(house_from(11, 2), 4);
        assert_eq!(house_from(1, 12), 12);
    }
}
