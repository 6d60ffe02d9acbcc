//! Graha dignity tables and five-fold relationship (maitri) system.
//!
//! Fixed per-graha tables for exaltation, debilitation, moolatrikona, and
//! own signs, covering all 9 grahas including the node assignments used in
//! remedy doctrine (Rahu exalted in Vrishabha, Ketu in Vrischika). "Deep"
//! exaltation/debilitation means within 1 degree of the exact classical
//! degree and scales downstream score adjustments.
//!
//! Clean-room implementation from BPHS (Brihat Parashara Hora Shastra).

use crate::chart::Chart;
use crate::graha::{Graha, rashi_lord};
use crate::rashi::Rashi;

/// Orb around the exact classical degree that counts as "deep" dignity.
pub const DEEP_DIGNITY_ORB: f64 = 1.0;

/// Exaltation rashi and exact degree within it.
///
/// BPHS: Sun 10 Mesha, Moon 3 Vrishabha, Mars 28 Makara, Mercury 15 Kanya,
/// Jupiter 5 Karka, Venus 27 Meena, Saturn 20 Tula. Node assignments per
/// the remedy-doctrine convention: Rahu 20 Vrishabha, Ketu 20 Vrischika.
pub const fn exaltation(graha: Graha) -> (Rashi, f64) {
    match graha {
        Graha::Surya => (Rashi::Mesha, 10.0),
        Graha::Chandra => (Rashi::Vrishabha, 3.0),
        Graha::Mangal => (Rashi::Makara, 28.0),
        Graha::Buddh => (Rashi::Kanya, 15.0),
        Graha::Guru => (Rashi::Karka, 5.0),
        Graha::Shukra => (Rashi::Meena, 27.0),
        Graha::Shani => (Rashi::Tula, 20.0),
        Graha::Rahu => (Rashi::Vrishabha, 20.0),
        Graha::Ketu => (Rashi::Vrischika, 20.0),
    }
}

/// Debilitation rashi and exact degree (opposite the exaltation).
pub const fn debilitation(graha: Graha) -> (Rashi, f64) {
    match graha {
        Graha::Surya => (Rashi::Tula, 10.0),
        Graha::Chandra => (Rashi::Vrischika, 3.0),
        Graha::Mangal => (Rashi::Karka, 28.0),
        Graha::Buddh => (Rashi::Meena, 15.0),
        Graha::Guru => (Rashi::Makara, 5.0),
        Graha::Shukra => (Rashi::Kanya, 27.0),
        Graha::Shani => (Rashi::Mesha, 20.0),
        Graha::Rahu => (Rashi::Vrischika, 20.0),
        Graha::Ketu => (Rashi::Vrishabha, 20.0),
    }
}

/// Moolatrikona rashi with inclusive degree range within it.
pub const fn moolatrikona(graha: Graha) -> (Rashi, f64, f64) {
    match graha {
        Graha::Surya => (Rashi::Simha, 0.0, 20.0),
        Graha::Chandra => (Rashi::Vrishabha, 3.0, 27.0),
        Graha::Mangal => (Rashi::Mesha, 0.0, 12.0),
        Graha::Buddh => (Rashi::Kanya, 15.0, 20.0),
        Graha::Guru => (Rashi::Dhanu, 0.0, 10.0),
        Graha::Shukra => (Rashi::Tula, 0.0, 15.0),
        Graha::Shani => (Rashi::Kumbha, 0.0, 20.0),
        Graha::Rahu => (Rashi::Kanya, 0.0, 30.0),
        Graha::Ketu => (Rashi::Meena, 0.0, 30.0),
    }
}

/// Own-sign rashis for each graha.
pub const fn own_signs(graha: Graha) -> &'static [Rashi] {
    match graha {
        Graha::Surya => &[Rashi::Simha],
        Graha::Chandra => &[Rashi::Karka],
        Graha::Mangal => &[Rashi::Mesha, Rashi::Vrischika],
        Graha::Buddh => &[Rashi::Mithuna, Rashi::Kanya],
        Graha::Guru => &[Rashi::Dhanu, Rashi::Meena],
        Graha::Shukra => &[Rashi::Vrishabha, Rashi::Tula],
        Graha::Shani => &[Rashi::Makara, Rashi::Kumbha],
        Graha::Rahu => &[Rashi::Kumbha],
        Graha::Ketu => &[Rashi::Vrischika],
    }
}

/// Is the graha exalted in this rashi?
pub const fn is_exalted(graha: Graha, rashi: Rashi) -> bool {
    exaltation(graha).0 as u8 == rashi as u8
}

/// Is the graha debilitated in this rashi?
pub const fn is_debilitated(graha: Graha, rashi: Rashi) -> bool {
    debilitation(graha).0 as u8 == rashi as u8
}

/// Deep exaltation: exalted and within [`DEEP_DIGNITY_ORB`] of the exact degree.
pub fn is_deeply_exalted(graha: Graha, rashi: Rashi, degree_in_rashi: f64) -> bool {
    let (ex_rashi, ex_deg) = exaltation(graha);
    ex_rashi == rashi && (degree_in_rashi - ex_deg).abs() <= DEEP_DIGNITY_ORB
}

/// Deep debilitation: debilitated and within [`DEEP_DIGNITY_ORB`] of the exact degree.
pub fn is_deeply_debilitated(graha: Graha, rashi: Rashi, degree_in_rashi: f64) -> bool {
    let (deb_rashi, deb_deg) = debilitation(graha);
    deb_rashi == rashi && (degree_in_rashi - deb_deg).abs() <= DEEP_DIGNITY_ORB
}

/// Is the rashi one of the graha's own signs?
pub fn is_own_sign(graha: Graha, rashi: Rashi) -> bool {
    own_signs(graha).contains(&rashi)
}

/// Does the position fall in the graha's moolatrikona range (inclusive)?
pub fn is_in_moolatrikona(graha: Graha, rashi: Rashi, degree_in_rashi: f64) -> bool {
    let (mt_rashi, start, end) = moolatrikona(graha);
    mt_rashi == rashi && degree_in_rashi >= start && degree_in_rashi <= end
}

// ---------------------------------------------------------------------------
// Five-fold relationship (maitri)
// ---------------------------------------------------------------------------

/// Five-fold graha relationship.
///
/// Natural lookup alone yields Mitra/Sama/Shatru; the Adhi variants arise
/// when the temporal (house-distance) relationship agrees with the natural
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maitri {
    AdhiMitra,
    Mitra,
    Sama,
    Shatru,
    AdhiShatru,
}

impl Maitri {
    pub const fn name(self) -> &'static str {
        match self {
            Self::AdhiMitra => "AdhiMitra",
            Self::Mitra => "Mitra",
            Self::Sama => "Sama",
            Self::Shatru => "Shatru",
            Self::AdhiShatru => "AdhiShatru",
        }
    }

    /// Friendly (Mitra or AdhiMitra)?
    pub const fn is_friendly(self) -> bool {
        matches!(self, Self::Mitra | Self::AdhiMitra)
    }

    /// Inimical (Shatru or AdhiShatru)?
    pub const fn is_inimical(self) -> bool {
        matches!(self, Self::Shatru | Self::AdhiShatru)
    }
}

/// Natural friends per graha (BPHS table extended with node rows).
const fn natural_friends(graha: Graha) -> &'static [Graha] {
    match graha {
        Graha::Surya => &[Graha::Chandra, Graha::Mangal, Graha::Guru],
        Graha::Chandra => &[Graha::Surya, Graha::Buddh],
        Graha::Mangal => &[Graha::Surya, Graha::Chandra, Graha::Guru],
        Graha::Buddh => &[Graha::Surya, Graha::Shukra],
        Graha::Guru => &[Graha::Surya, Graha::Chandra, Graha::Mangal],
        Graha::Shukra => &[Graha::Buddh, Graha::Shani],
        Graha::Shani => &[Graha::Buddh, Graha::Shukra],
        Graha::Rahu => &[Graha::Buddh, Graha::Shukra, Graha::Shani],
        Graha::Ketu => &[Graha::Mangal, Graha::Shukra, Graha::Shani],
    }
}

/// Natural enemies per graha (BPHS table extended with node rows).
/// The Moon has no natural enemies.
const fn natural_enemies(graha: Graha) -> &'static [Graha] {
    match graha {
        Graha::Surya => &[Graha::Shani, Graha::Shukra],
        Graha::Chandra => &[],
        Graha::Mangal => &[Graha::Buddh],
        Graha::Buddh => &[Graha::Chandra],
        Graha::Guru => &[Graha::Buddh, Graha::Shukra],
        Graha::Shukra => &[Graha::Surya, Graha::Chandra],
        Graha::Shani => &[Graha::Surya, Graha::Chandra, Graha::Mangal],
        Graha::Rahu => &[Graha::Surya, Graha::Chandra, Graha::Mangal],
        Graha::Ketu => &[Graha::Surya, Graha::Chandra],
    }
}

/// Natural (naisargika) relationship between two grahas.
///
/// Friend/enemy rows are directional (a's table is consulted), everything
/// else including self-pairings is Sama.
pub fn natural_maitri(graha: Graha, other: Graha) -> Maitri {
    if natural_friends(graha).contains(&other) {
        Maitri::Mitra
    } else if natural_enemies(graha).contains(&other) {
        Maitri::Shatru
    } else {
        Maitri::Sama
    }
}

/// Compound relationship: natural maitri sharpened by the temporal
/// (house-distance) relationship within a chart.
///
/// Temporal friend when the absolute house difference is 0-4 or 10-12,
/// temporal enemy when 5-9. Natural friend + temporal friend = AdhiMitra;
/// natural enemy + temporal enemy = AdhiShatru. Falls back to the natural
/// relationship when either position is missing.
pub fn compound_maitri(graha: Graha, other: Graha, chart: &Chart) -> Maitri {
    let natural = natural_maitri(graha, other);
    let (Some(a), Some(b)) = (chart.position(graha), chart.position(other)) else {
        return natural;
    };
    let house_diff = (a.house as i16 - b.house as i16).unsigned_abs() as u8;
    let temporal_friend = matches!(house_diff, 0..=4 | 10..=12);

    match (natural, temporal_friend) {
        (Maitri::Mitra, true) => Maitri::AdhiMitra,
        (Maitri::Shatru, false) => Maitri::AdhiShatru,
        // Friendship (natural or temporal) is checked before enmity, so a
        // natural enemy sharing a temporal-friend axis lands on Mitra.
        (Maitri::Mitra, false) | (_, true) => Maitri::Mitra,
        _ => Maitri::Shatru,
    }
}

/// Aggregated dignity facts for a graha at a given position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DignityFacts {
    pub exalted: bool,
    pub deeply_exalted: bool,
    pub debilitated: bool,
    pub deeply_debilitated: bool,
    pub own_sign: bool,
    pub moolatrikona: bool,
    /// Natural relationship with the rashi lord.
    pub lord_maitri: Maitri,
}

/// Derive all dignity facts for a graha in a rashi at a degree within it.
pub fn dignity_facts(graha: Graha, rashi: Rashi, degree_in_rashi: f64) -> DignityFacts {
    DignityFacts {
        exalted: is_exalted(graha, rashi),
        deeply_exalted: is_deeply_exalted(graha, rashi, degree_in_rashi),
        debilitated: is_debilitated(graha, rashi),
        deeply_debilitated: is_deeply_debilitated(graha, rashi, degree_in_rashi),
        own_sign: is_own_sign(graha, rashi),
        moolatrikona: is_in_moolatrikona(graha, rashi, degree_in_rashi),
        lord_maitri: natural_maitri(graha, rashi_lord(rashi)),
    }
}
