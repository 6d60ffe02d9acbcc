//! TriMurti significators: Rudra, secondary Rudra, Brahma, Maheshwara.
//!
//! Rudra and Brahma are selected by scoring fixed candidate lists; ties
//! keep the earliest candidate in list order, which makes selection
//! deterministic. Maheshwara is a direct lookup with no scoring: the
//! lord of the 8th sign from the Ascendant.
//!
//! Clean-room implementation of the Jaimini trimurti doctrine.

use ayur_vedic_base::chart::{Chart, DUSTHANA_HOUSES, KENDRA_HOUSES};
use ayur_vedic_base::dignity;
use ayur_vedic_base::drishti::{benefic_aspect_count, malefic_aspect_count};
use ayur_vedic_base::graha::{Graha, NATURAL_BENEFICS, NATURAL_MALEFICS, nth_rashi_from, rashi_lord};
use ayur_vedic_base::rashi::Rashi;

/// The primary malefic significator. Always present: selection falls
/// back to the first candidate when no malefic has a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rudra {
    pub graha: Graha,
    /// Occupied rashi, when the graha has a position.
    pub rashi: Option<Rashi>,
    /// Normalized malefic strength in [0, 1].
    pub strength: f64,
}

/// The protective benefic significator, absent when no candidate sits
/// in a trine-or-lagna house.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brahma {
    pub graha: Graha,
    pub rashi: Rashi,
    /// Normalized protective strength in [0, 1].
    pub strength: f64,
}

/// Lord of the 8th sign from the Ascendant; a lookup, not a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Maheshwara {
    pub graha: Graha,
    /// Occupied rashi, when placed in the chart.
    pub rashi: Option<Rashi>,
    /// Occupied house, when placed in the chart.
    pub house: Option<u8>,
}

/// Secondary Rudra: strongest remaining malefic, if any is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondaryRudra {
    pub graha: Graha,
    pub rashi: Option<Rashi>,
}

/// Combined TriMurti analysis for one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriMurti {
    pub rudra: Rudra,
    pub secondary_rudra: Option<SecondaryRudra>,
    pub brahma: Option<Brahma>,
    pub maheshwara: Maheshwara,
}

/// Fixed malefic weight per Rudra candidate.
const fn rudra_graha_weight(graha: Graha) -> f64 {
    match graha {
        Graha::Shani => 25.0,
        Graha::Mangal => 22.0,
        Graha::Rahu => 20.0,
        Graha::Ketu => 18.0,
        Graha::Surya => 15.0,
        _ => 10.0,
    }
}

const fn rudra_house_weight(house: u8) -> f64 {
    match house {
        6 | 8 | 12 => 30.0,
        2 | 7 => 25.0,
        3 => 15.0,
        _ => 0.0,
    }
}

/// Select Rudra over the malefic candidates.
///
/// Total: first candidate in [`NATURAL_MALEFICS`] order with the
/// strictly highest score wins; an empty chart yields the first
/// candidate at zero strength.
pub fn find_rudra(chart: &Chart) -> Rudra {
    let mut best = Rudra {
        graha: NATURAL_MALEFICS[0],
        rashi: None,
        strength: 0.0,
    };
    let mut max = 0.0;
    for graha in NATURAL_MALEFICS {
        let Some(pos) = chart.position(graha) else {
            continue;
        };
        let mut score = rudra_house_weight(pos.house) + rudra_graha_weight(graha);
        if dignity::is_debilitated(graha, pos.rashi) {
            score += 20.0;
        }
        if pos.retrograde {
            score += 10.0;
        }
        score += malefic_aspect_count(chart, graha) as f64 * 5.0;
        if score > max {
            max = score;
            best = Rudra {
                graha,
                rashi: Some(pos.rashi),
                strength: (score / 100.0).clamp(0.0, 1.0),
            };
        }
    }
    best
}

/// Select the secondary Rudra among the remaining malefics (the Sun is
/// never secondary).
///
/// Dusthana placement and retrograde motion weigh in; `None` when no
/// remaining candidate is placed in the chart.
pub fn find_secondary_rudra(chart: &Chart, primary: Graha) -> Option<SecondaryRudra> {
    let mut best: Option<(SecondaryRudra, f64)> = None;
    for graha in [Graha::Shani, Graha::Mangal, Graha::Rahu, Graha::Ketu] {
        if graha == primary {
            continue;
        }
        let Some(pos) = chart.position(graha) else {
            continue;
        };
        let mut score = 0.0;
        if DUSTHANA_HOUSES.contains(&pos.house) {
            score += 20.0;
        }
        if pos.retrograde {
            score += 10.0;
        }
        let candidate = SecondaryRudra {
            graha,
            rashi: Some(pos.rashi),
        };
        match best {
            Some((_, best_score)) if best_score >= score => {}
            _ => best = Some((candidate, score)),
        }
    }
    best.map(|(secondary, _)| secondary)
}

/// Select Brahma over the benefic candidates restricted to houses 1, 5,
/// and 9. `None` when no candidate qualifies.
pub fn find_brahma(chart: &Chart) -> Option<Brahma> {
    let mut best: Option<Brahma> = None;
    let mut max = 0.0;
    for graha in NATURAL_BENEFICS {
        let Some(pos) = chart.position(graha) else {
            continue;
        };
        if !matches!(pos.house, 1 | 5 | 9) {
            continue;
        }
        let mut score = 50.0;
        if dignity::is_exalted(graha, pos.rashi) {
            score += 30.0;
        }
        if dignity::is_own_sign(graha, pos.rashi) {
            score += 20.0;
        }
        score += benefic_aspect_count(chart, graha) as f64 * 5.0;
        if KENDRA_HOUSES.contains(&pos.house) {
            score += 10.0;
        }
        if score > max {
            max = score;
            best = Some(Brahma {
                graha,
                rashi: pos.rashi,
                strength: (score / 100.0).clamp(0.0, 1.0),
            });
        }
    }
    best
}

/// Maheshwara: lord of the 8th sign from the Ascendant.
pub fn find_maheshwara(chart: &Chart, lagna: Rashi) -> Maheshwara {
    let graha = rashi_lord(nth_rashi_from(lagna, 8));
    let pos = chart.position(graha);
    Maheshwara {
        graha,
        rashi: pos.map(|p| p.rashi),
        house: pos.map(|p| p.house),
    }
}

/// Full TriMurti analysis for a chart.
pub fn analyze_trimurti(chart: &Chart, lagna: Rashi) -> TriMurti {
    let rudra = find_rudra(chart);
    TriMurti {
        rudra,
        secondary_rudra: find_secondary_rudra(chart, rudra.graha),
        brahma: find_brahma(chart),
        maheshwara: find_maheshwara(chart, lagna),
    }
}
