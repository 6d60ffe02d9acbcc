//! Chart snapshot types: per-graha positions and the natal chart.
//!
//! Positions are supplied by an external ephemeris/divisional-chart
//! subsystem; this crate only derives rashi and degree-in-sign from the
//! sidereal longitude. All types are immutable value objects.

use crate::graha::Graha;
use crate::rashi::{Rashi, degree_in_rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// Kendra (angular) houses: 1, 4, 7, 10.
pub const KENDRA_HOUSES: [u8; 4] = [1, 4, 7, 10];

/// Trikona (trine) houses: 5, 9. House 1 is counted as kendra.
pub const TRIKONA_HOUSES: [u8; 2] = [5, 9];

/// Dusthana (adverse) houses: 6, 8, 12.
pub const DUSTHANA_HOUSES: [u8; 3] = [6, 8, 12];

/// Wealth houses: 2, 11.
pub const WEALTH_HOUSES: [u8; 2] = [2, 11];

/// Classification of a house number for scoring purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HouseClass {
    Kendra,
    Trikona,
    Dusthana,
    Wealth,
    Other,
}

/// Classify a house (1-12). Kendra takes precedence for house 1.
pub const fn house_class(house: u8) -> HouseClass {
    match house {
        1 | 4 | 7 | 10 => HouseClass::Kendra,
        5 | 9 => HouseClass::Trikona,
        6 | 8 | 12 => HouseClass::Dusthana,
        2 | 11 => HouseClass::Wealth,
        _ => HouseClass::Other,
    }
}

/// Position snapshot for a single graha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPosition {
    /// The graha.
    pub graha: Graha,
    /// Sidereal ecliptic longitude in [0, 360).
    pub longitude: f64,
    /// Rashi derived from the longitude.
    pub rashi: Rashi,
    /// Degree within the rashi, [0, 30).
    pub degree_in_rashi: f64,
    /// House placement (1-12), supplied by the chart provider.
    pub house: u8,
    /// Retrograde motion flag.
    pub retrograde: bool,
}

impl PlanetPosition {
    /// Build a position from externally supplied longitude/house/motion.
    ///
    /// The longitude is normalized to [0, 360); rashi and degree-in-rashi
    /// are derived from it.
    pub fn new(graha: Graha, sidereal_lon_deg: f64, house: u8, retrograde: bool) -> Self {
        let longitude = normalize_360(sidereal_lon_deg);
        Self {
            graha,
            longitude,
            rashi: rashi_from_longitude(longitude),
            degree_in_rashi: degree_in_rashi(longitude),
            house,
            retrograde,
        }
    }
}

/// Immutable natal chart snapshot: ascendant plus up to 9 graha positions.
///
/// A graha missing from the input simply has no entry; every consumer of
/// this type degrades to a documented neutral default in that case rather
/// than erroring.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    /// Ascendant sidereal longitude in [0, 360).
    pub ascendant_longitude: f64,
    /// Ascendant rashi derived from the longitude.
    pub ascendant: Rashi,
    /// Positions indexed by `Graha::index()`.
    positions: [Option<PlanetPosition>; 9],
}

impl Chart {
    /// Build a chart from an ascendant longitude and any subset of
    /// graha positions. A duplicated graha keeps the last entry.
    pub fn new(ascendant_lon_deg: f64, positions: &[PlanetPosition]) -> Self {
        let ascendant_longitude = normalize_360(ascendant_lon_deg);
        let mut slots: [Option<PlanetPosition>; 9] = [None; 9];
        for pos in positions {
            slots[pos.graha.index() as usize] = Some(*pos);
        }
        Self {
            ascendant_longitude,
            ascendant: rashi_from_longitude(ascendant_longitude),
            positions: slots,
        }
    }

    /// Position of a graha, if present in the snapshot.
    pub fn position(&self, graha: Graha) -> Option<&PlanetPosition> {
        self.positions[graha.index() as usize].as_ref()
    }

    /// House of a graha, if present.
    pub fn house_of(&self, graha: Graha) -> Option<u8> {
        self.position(graha).map(|p| p.house)
    }

    /// All present positions, in traditional graha order.
    pub fn positions(&self) -> impl Iterator<Item = &PlanetPosition> {
        self.positions.iter().filter_map(|p| p.as_ref())
    }

    /// All present positions occupying the given house (1-12).
    pub fn in_house(&self, house: u8) -> impl Iterator<Item = &PlanetPosition> {
        self.positions().filter(move |p| p.house == house)
    }
}
