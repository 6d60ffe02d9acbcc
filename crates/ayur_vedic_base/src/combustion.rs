//! Combustion: weakening from close angular proximity to the Sun.
//!
//! Each graha has a fixed orb; Mercury and Venus use a tighter orb when
//! retrograde. The Sun itself and the nodes are never combust.
//!
//! Clean-room implementation from standard jyotish combustion orbs.

use crate::chart::Chart;
use crate::graha::Graha;
use crate::util::angular_separation;

/// Combustion orb in degrees for a graha, given its motion.
///
/// `None` for Surya, Rahu, and Ketu, which cannot be combust.
pub const fn combustion_orb(graha: Graha, retrograde: bool) -> Option<f64> {
    match graha {
        Graha::Chandra => Some(12.0),
        Graha::Mangal => Some(17.0),
        Graha::Buddh => Some(if retrograde { 12.0 } else { 14.0 }),
        Graha::Guru => Some(11.0),
        Graha::Shukra => Some(if retrograde { 8.0 } else { 10.0 }),
        Graha::Shani => Some(15.0),
        Graha::Surya | Graha::Rahu | Graha::Ketu => None,
    }
}

/// Is the graha combust in this chart?
///
/// Separation from the Sun is folded to [0, 180] and compared inclusively
/// against the orb. False when either position is missing.
pub fn is_combust(chart: &Chart, graha: Graha) -> bool {
    let Some(pos) = chart.position(graha) else {
        return false;
    };
    let Some(orb) = combustion_orb(graha, pos.retrograde) else {
        return false;
    };
    let Some(sun) = chart.position(Graha::Surya) else {
        return false;
    };
    angular_separation(sun.longitude, pos.longitude) <= orb
}
