//! Rashi (zodiac sign) enum, longitude mapping, and element triplicity.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each.
//! Given a sidereal longitude, we identify which rashi the point falls in
//! and the degree within that sign.
//!
//! Clean-room implementation from universal Vedic convention:
//! 12 rashis of 30 deg each, starting from Mesha (Aries) at 0 deg.

use crate::util::normalize_360;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Element (triplicity) of a rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tattva {
    /// Fire: Mesha, Simha, Dhanu.
    Agni,
    /// Earth: Vrishabha, Kanya, Makara.
    Prithvi,
    /// Air: Mithuna, Tula, Kumbha.
    Vayu,
    /// Water: Karka, Vrischika, Meena.
    Jala,
}

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Element triplicity of the rashi.
    pub const fn tattva(self) -> Tattva {
        match self {
            Self::Mesha | Self::Simha | Self::Dhanu => Tattva::Agni,
            Self::Vrishabha | Self::Kanya | Self::Makara => Tattva::Prithvi,
            Self::Mithuna | Self::Tula | Self::Kumbha => Tattva::Vayu,
            Self::Karka | Self::Vrischika | Self::Meena => Tattva::Jala,
        }
    }
}

/// Determine rashi from sidereal ecliptic longitude.
///
/// Each rashi spans exactly 30 degrees: Mesha = [0, 30), Vrishabha = [30, 60), etc.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> Rashi {
    let lon = normalize_360(sidereal_lon_deg);
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let idx = ((lon / 30.0).floor() as u8).min(11);
    ALL_RASHIS[idx as usize]
}

/// Degree within the sign, [0, 30), from sidereal longitude.
pub fn degree_in_rashi(sidereal_lon_deg: f64) -> f64 {
    let lon = normalize_360(sidereal_lon_deg);
    lon - (rashi_from_longitude(lon).index() as f64) * 30.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rashis_count() {
        assert_eq!(ALL_RASHIS.len(), 12);
    }

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
        }
    }

    #[test]
    fn rashi_names_nonempty() {
        for r in ALL_RASHIS {
            assert!(!r.name().is_empty());
            assert!(!r.western_name().is_empty());
        }
    }

    #[test]
    fn rashi_all_boundaries() {
        for i in 0..12u8 {
            let lon = i as f64 * 30.0;
            assert_eq!(rashi_from_longitude(lon).index(), i, "boundary at {lon}");
        }
    }

    #[test]
    fn rashi_mid_sign() {
        assert_eq!(rashi_from_longitude(45.5), Rashi::Vrishabha);
        assert!((degree_in_rashi(45.5) - 15.5).abs() < 1e-10);
    }

    #[test]
    fn rashi_wrap_around() {
        assert_eq!(rashi_from_longitude(365.0), Rashi::Mesha);
        assert!((degree_in_rashi(365.0) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn rashi_negative() {
        assert_eq!(rashi_from_longitude(-10.0), Rashi::Meena); // 350 deg
        assert!((degree_in_rashi(-10.0) - 20.0).abs() < 1e-10);
    }

    #[test]
    fn tattva_triplicities() {
        for r in [Rashi::Mesha, Rashi::Simha, Rashi::Dhanu] {
            assert_eq!(r.tattva(), Tattva::Agni);
        }
        for r in [Rashi::Vrishabha, Rashi::Kanya, Rashi::Makara] {
            assert_eq!(r.tattva(), Tattva::Prithvi);
        }
        for r in [Rashi::Mithuna, Rashi::Tula, Rashi::Kumbha] {
            assert_eq!(r.tattva(), Tattva::Vayu);
        }
        for r in [Rashi::Karka, Rashi::Vrischika, Rashi::Meena] {
            assert_eq!(r.tattva(), Tattva::Jala);
        }
    }
}
