//! Vedic planet (graha) enum, lordship, and natural benefic/malefic nature.
//!
//! The 9 grahas form the foundation of every dignity and strength lookup.
//! Each rashi has a planetary lord, which is a universal Vedic convention.
//!
//! Clean-room implementation from standard Vedic jyotish texts (BPHS).

use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Natural malefics, in the candidate order used for Rudra selection:
/// Shani, Mangal, Rahu, Ketu, Surya.
pub const NATURAL_MALEFICS: [Graha; 5] = [
    Graha::Shani,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Ketu,
    Graha::Surya,
];

/// Natural benefics, in the candidate order used for Brahma selection:
/// Guru, Shukra, Buddh, Chandra. Moon and Mercury are conditional in
/// conjunction analysis (see `affliction`), unconditional here.
pub const NATURAL_BENEFICS: [Graha; 4] =
    [Graha::Guru, Graha::Shukra, Graha::Buddh, Graha::Chandra];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Natural malefic classification (Sun counted malefic for
    /// conjunction/Rudra purposes).
    pub const fn is_natural_malefic(self) -> bool {
        matches!(
            self,
            Self::Surya | Self::Mangal | Self::Shani | Self::Rahu | Self::Ketu
        )
    }

    /// True for the lunar nodes.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }
}

/// Get the planetary lord of a rashi.
///
/// Standard Vedic lordship assignment (BPHS, universal convention):
/// - Mesha/Vrischika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Compute the n-th rashi from a given rashi (1-based offset).
///
/// `nth_rashi_from(r, 1)` = r itself, `nth_rashi_from(r, 8)` = the 8th sign
/// counted inclusively (used for the Maheshwara lookup).
pub const fn nth_rashi_from(rashi: Rashi, offset: u8) -> Rashi {
    let idx = (rashi.index() as u16 + offset as u16 - 1) % 12;
    crate::rashi::ALL_RASHIS[idx as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_grahas_count() {
        assert_eq!(ALL_GRAHAS.len(), 9);
    }

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn graha_names_nonempty() {
        for g in ALL_GRAHAS {
            assert!(!g.name().is_empty());
            assert!(!g.english_name().is_empty());
        }
    }

    #[test]
    fn malefic_set_matches_predicate() {
        for g in NATURAL_MALEFICS {
            assert!(g.is_natural_malefic(), "{} should be malefic", g.name());
        }
        for g in NATURAL_BENEFICS {
            assert!(!g.is_natural_malefic(), "{} should be benefic", g.name());
        }
    }

    #[test]
    fn nodes_flagged() {
        assert!(Graha::Rahu.is_node());
        assert!(Graha::Ketu.is_node());
        assert!(!Graha::Shani.is_node());
    }

    #[test]
    fn rashi_lordship_dual_ruled() {
        assert_eq!(rashi_lord(Rashi::Mesha), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrischika), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrishabha), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Tula), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Mithuna), Graha::Buddh);
        assert_eq!(rashi_lord(Rashi::Kanya), Graha::Buddh);
        assert_eq!(rashi_lord(Rashi::Dhanu), Graha::Guru);
        assert_eq!(rashi_lord(Rashi::Meena), Graha::Guru);
        assert_eq!(rashi_lord(Rashi::Makara), Graha::Shani);
        assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
    }

    #[test]
    fn rashi_lordship_luminaries() {
        assert_eq!(rashi_lord(Rashi::Simha), Graha::Surya);
        assert_eq!(rashi_lord(Rashi::Karka), Graha::Chandra);
    }

    #[test]
    fn nth_rashi_same() {
        assert_eq!(nth_rashi_from(Rashi::Mesha, 1), Rashi::Mesha);
    }

    #[test]
    fn nth_rashi_eighth() {
        // 8th from Mesha is Vrischika
        assert_eq!(nth_rashi_from(Rashi::Mesha, 8), Rashi::Vrischika);
        // 8th from Vrischika wraps to Mithuna
        assert_eq!(nth_rashi_from(Rashi::Vrischika, 8), Rashi::Mithuna);
    }

    #[test]
    fn nth_rashi_wrap() {
        assert_eq!(nth_rashi_from(Rashi::Meena, 2), Rashi::Mesha);
    }
}
