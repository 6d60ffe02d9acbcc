//! Per-graha strength scoring and six-tier classification.
//!
//! Starts from a baseline of 50 and applies a fixed, ordered list of
//! additive signals (dignity, houses, motion, combustion, conjunctions,
//! drishti, sensitive degrees, yogakaraka, paksha), then clamps to
//! [0, 100]. All findings are emitted as structured [`StrengthFactor`]
//! keys; display text is the presentation layer's job.
//!
//! Clean-room implementation of classical graha bala heuristics.

use ayur_vedic_base::chart::{Chart, HouseClass, KENDRA_HOUSES, PlanetPosition, house_class};
use ayur_vedic_base::dignity;
use ayur_vedic_base::graha::{Graha, rashi_lord};
use ayur_vedic_base::rashi::Rashi;
use ayur_vedic_base::{affliction, combustion, drishti};

/// Baseline score before any signal applies.
pub const BASELINE_SCORE: f64 = 50.0;

/// Six-tier strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthTier {
    VeryStrong,
    Strong,
    Moderate,
    Weak,
    VeryWeak,
    Afflicted,
}

impl StrengthTier {
    /// Tier from a clamped score.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => Self::VeryStrong,
            s if s >= 65.0 => Self::Strong,
            s if s >= 45.0 => Self::Moderate,
            s if s >= 30.0 => Self::Weak,
            s if s >= 15.0 => Self::VeryWeak,
            _ => Self::Afflicted,
        }
    }

    /// Severity rank, 0 (very strong) through 5 (afflicted).
    pub const fn severity(self) -> u8 {
        match self {
            Self::VeryStrong => 0,
            Self::Strong => 1,
            Self::Moderate => 2,
            Self::Weak => 3,
            Self::VeryWeak => 4,
            Self::Afflicted => 5,
        }
    }
}

/// Semantic key for one scoring observation.
///
/// Resolved to display text by a `Localizer`; the engine never carries
/// language strings.
#[derive(Debug, Clone, PartialEq)]
pub enum StrengthFactor {
    DeeplyExalted { rashi: Rashi, degree: f64 },
    Exalted { rashi: Rashi },
    DeeplyDebilitated { rashi: Rashi, degree: f64 },
    Debilitated { rashi: Rashi },
    NeechaBhanga,
    OwnSign { rashi: Rashi },
    Moolatrikona,
    FriendSign { lord: Graha },
    EnemySign { lord: Graha },
    KendraHouse { house: u8 },
    TrikonaHouse { house: u8 },
    DusthanaHouse { house: u8 },
    WealthHouse { house: u8 },
    RetrogradeStrong,
    RetrogradeReview,
    RetrogradeInternalized,
    Combust { severe: bool },
    ConjunctMalefics { grahas: Vec<Graha> },
    ConjunctBenefics { grahas: Vec<Graha> },
    JupiterDrishti,
    SaturnDrishti,
    Gandanta,
    MrityuBhaga,
    PushkaraNavamsha,
    Yogakaraka { lagna: Rashi },
    MoonDark,
    MoonBright,
}

/// Full strength analysis for one graha in one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetaryAnalysis {
    pub graha: Graha,
    /// Clamped score in [0, 100].
    pub score: f64,
    pub tier: StrengthTier,
    /// Position snapshot; `None` when the graha is absent from the chart.
    pub position: Option<PlanetPosition>,
    pub issues: Vec<StrengthFactor>,
    pub positives: Vec<StrengthFactor>,
    pub needs_remedy: bool,
    pub exalted: bool,
    pub debilitated: bool,
    pub own_sign: bool,
    pub moolatrikona: bool,
    pub friendly_sign: bool,
    pub enemy_sign: bool,
    pub neutral_sign: bool,
    pub neecha_bhanga: bool,
    pub combust: bool,
    pub gandanta: bool,
    pub mrityu_bhaga: bool,
    pub pushkara_navamsha: bool,
    pub functional_benefic: bool,
    pub functional_malefic: bool,
    pub yogakaraka: bool,
    pub aspecting: Vec<Graha>,
    pub aspected_by_benefics: bool,
    pub aspected_by_malefics: bool,
    /// Score normalized to [0, 1].
    pub normalized_strength: f64,
}

impl PlanetaryAnalysis {
    /// Neutral default for a graha absent from the chart.
    fn neutral(graha: Graha) -> Self {
        Self {
            graha,
            score: BASELINE_SCORE,
            tier: StrengthTier::Moderate,
            position: None,
            issues: Vec::new(),
            positives: Vec::new(),
            needs_remedy: false,
            exalted: false,
            debilitated: false,
            own_sign: false,
            moolatrikona: false,
            friendly_sign: false,
            enemy_sign: false,
            neutral_sign: true,
            neecha_bhanga: false,
            combust: false,
            gandanta: false,
            mrityu_bhaga: false,
            pushkara_navamsha: false,
            functional_benefic: false,
            functional_malefic: false,
            yogakaraka: false,
            aspecting: Vec::new(),
            aspected_by_benefics: false,
            aspected_by_malefics: false,
            normalized_strength: 0.5,
        }
    }
}

/// Yogakaraka graha for a lagna, where one exists.
///
/// The graha ruling both a kendra and a trikona from that lagna.
pub const fn yogakaraka_for_lagna(lagna: Rashi) -> Option<Graha> {
    match lagna {
        Rashi::Mesha | Rashi::Vrishabha | Rashi::Tula => Some(Graha::Shani),
        Rashi::Karka | Rashi::Simha => Some(Graha::Mangal),
        Rashi::Vrischika => Some(Graha::Chandra),
        Rashi::Makara | Rashi::Kumbha => Some(Graha::Shukra),
        _ => None,
    }
}

/// Is the graha a functional benefic for the given lagna?
pub const fn is_functional_benefic(graha: Graha, lagna: Rashi) -> bool {
    let set: &[Graha] = match lagna {
        Rashi::Mesha => &[Graha::Surya, Graha::Mangal, Graha::Guru],
        Rashi::Vrishabha => &[Graha::Shani, Graha::Buddh, Graha::Shukra],
        Rashi::Mithuna => &[Graha::Shukra, Graha::Shani],
        Rashi::Karka => &[Graha::Mangal, Graha::Guru, Graha::Chandra],
        Rashi::Simha => &[Graha::Mangal, Graha::Guru, Graha::Surya],
        Rashi::Kanya => &[Graha::Buddh, Graha::Shukra],
        Rashi::Tula => &[Graha::Shani, Graha::Buddh, Graha::Shukra],
        Rashi::Vrischika => &[Graha::Guru, Graha::Chandra, Graha::Surya],
        Rashi::Dhanu => &[Graha::Surya, Graha::Mangal, Graha::Guru],
        Rashi::Makara => &[Graha::Shukra, Graha::Buddh, Graha::Shani],
        Rashi::Kumbha => &[Graha::Shukra, Graha::Shani],
        Rashi::Meena => &[Graha::Mangal, Graha::Chandra, Graha::Guru],
    };
    contains_graha(set, graha)
}

/// Is the graha a functional malefic for the given lagna?
pub const fn is_functional_malefic(graha: Graha, lagna: Rashi) -> bool {
    let set: &[Graha] = match lagna {
        Rashi::Mesha => &[Graha::Buddh, Graha::Shani],
        Rashi::Vrishabha => &[Graha::Guru, Graha::Mangal],
        Rashi::Mithuna => &[Graha::Mangal, Graha::Guru],
        Rashi::Karka => &[Graha::Shani, Graha::Buddh],
        Rashi::Simha => &[Graha::Shani, Graha::Buddh],
        Rashi::Kanya => &[Graha::Mangal, Graha::Chandra],
        Rashi::Tula => &[Graha::Mangal, Graha::Guru, Graha::Surya],
        Rashi::Vrischika => &[Graha::Shukra, Graha::Buddh],
        Rashi::Dhanu => &[Graha::Shukra, Graha::Shani],
        Rashi::Makara => &[Graha::Mangal, Graha::Guru, Graha::Chandra],
        Rashi::Kumbha => &[Graha::Mangal, Graha::Guru, Graha::Chandra],
        Rashi::Meena => &[Graha::Shani, Graha::Shukra, Graha::Surya, Graha::Buddh],
    };
    contains_graha(set, graha)
}

const fn contains_graha(set: &[Graha], graha: Graha) -> bool {
    let mut i = 0;
    while i < set.len() {
        if set[i] as u8 == graha as u8 {
            return true;
        }
        i += 1;
    }
    false
}

/// Neecha-bhanga (debilitation cancellation) check.
///
/// Holds when any of: the debilitation-sign lord sits in a kendra from
/// the Ascendant or the Moon; the exaltation-sign lord shares the
/// debilitated graha's house; any exalted graha shares that house.
/// Missing Moon degrades the Moon-kendra test to house 1.
pub fn has_neecha_bhanga(chart: &Chart, graha: Graha) -> bool {
    let (deb_rashi, _) = dignity::debilitation(graha);
    let (ex_rashi, _) = dignity::exaltation(graha);
    let deb_lord = rashi_lord(deb_rashi);
    let ex_lord = rashi_lord(ex_rashi);
    let moon_house = chart.house_of(Graha::Chandra).unwrap_or(1);

    if let Some(deb_lord_pos) = chart.position(deb_lord) {
        let from_moon = ((deb_lord_pos.house as i16 - moon_house as i16 + 12) % 12) as u8 + 1;
        if KENDRA_HOUSES.contains(&deb_lord_pos.house) || KENDRA_HOUSES.contains(&from_moon) {
            return true;
        }
    }

    let Some(pos) = chart.position(graha) else {
        return false;
    };
    if chart.house_of(ex_lord) == Some(pos.house) {
        return true;
    }
    chart
        .in_house(pos.house)
        .any(|p| dignity::is_exalted(p.graha, p.rashi))
}

/// Analyze one graha's strength in a chart.
///
/// A graha absent from the chart yields the neutral default, never an
/// error.
pub fn analyze_graha(chart: &Chart, graha: Graha, lagna: Rashi) -> PlanetaryAnalysis {
    let Some(pos) = chart.position(graha).copied() else {
        return PlanetaryAnalysis::neutral(graha);
    };

    let mut issues: Vec<StrengthFactor> = Vec::new();
    let mut positives: Vec<StrengthFactor> = Vec::new();
    let mut score = BASELINE_SCORE;

    let rashi = pos.rashi;
    let degree = pos.degree_in_rashi;

    let debilitated = dignity::is_debilitated(graha, rashi);
    let exalted = dignity::is_exalted(graha, rashi);

    if debilitated {
        if dignity::is_deeply_debilitated(graha, rashi, degree) {
            issues.push(StrengthFactor::DeeplyDebilitated { rashi, degree });
            score -= 35.0;
        } else {
            issues.push(StrengthFactor::Debilitated { rashi });
            score -= 25.0;
        }
    }

    if exalted {
        if dignity::is_deeply_exalted(graha, rashi, degree) {
            positives.push(StrengthFactor::DeeplyExalted { rashi, degree });
            score += 35.0;
        } else {
            positives.push(StrengthFactor::Exalted { rashi });
            score += 25.0;
        }
    }

    let neecha_bhanga = debilitated && has_neecha_bhanga(chart, graha);
    if neecha_bhanga {
        positives.push(StrengthFactor::NeechaBhanga);
        score += 20.0;
    }

    let own_sign = dignity::is_own_sign(graha, rashi);
    if own_sign {
        positives.push(StrengthFactor::OwnSign { rashi });
        score += 15.0;
    }

    let moolatrikona = dignity::is_in_moolatrikona(graha, rashi, degree);
    if moolatrikona && !own_sign {
        positives.push(StrengthFactor::Moolatrikona);
        score += 12.0;
    }

    let lord = rashi_lord(rashi);
    let maitri = dignity::natural_maitri(graha, lord);
    let friendly_sign = maitri.is_friendly();
    let enemy_sign = maitri.is_inimical();
    let neutral_sign = !friendly_sign && !enemy_sign;

    if friendly_sign && !own_sign && !exalted {
        positives.push(StrengthFactor::FriendSign { lord });
        score += 8.0;
    }
    if enemy_sign && !debilitated {
        issues.push(StrengthFactor::EnemySign { lord });
        score -= 10.0;
    }

    match house_class(pos.house) {
        HouseClass::Kendra => {
            positives.push(StrengthFactor::KendraHouse { house: pos.house });
            score += 10.0;
        }
        HouseClass::Trikona => {
            positives.push(StrengthFactor::TrikonaHouse { house: pos.house });
            score += 10.0;
        }
        HouseClass::Dusthana => {
            issues.push(StrengthFactor::DusthanaHouse { house: pos.house });
            score -= 15.0;
        }
        HouseClass::Wealth => {
            positives.push(StrengthFactor::WealthHouse { house: pos.house });
            score += 5.0;
        }
        HouseClass::Other => {}
    }

    if pos.retrograde {
        match graha {
            Graha::Shani | Graha::Guru => {
                positives.push(StrengthFactor::RetrogradeStrong);
                score += 5.0;
            }
            Graha::Buddh => {
                // Noted as an issue without a score change.
                issues.push(StrengthFactor::RetrogradeReview);
            }
            Graha::Mangal | Graha::Shukra => {
                issues.push(StrengthFactor::RetrogradeInternalized);
                score -= 5.0;
            }
            _ => {}
        }
    }

    let combust = combustion::is_combust(chart, graha);
    if combust {
        let severe = graha == Graha::Chandra;
        issues.push(StrengthFactor::Combust { severe });
        score -= if severe { 25.0 } else { 20.0 };
    }

    let malefic_conjuncts = affliction::malefic_conjuncts(chart, graha);
    if !malefic_conjuncts.is_empty() {
        score -= malefic_conjuncts.len() as f64 * 7.0;
        issues.push(StrengthFactor::ConjunctMalefics {
            grahas: malefic_conjuncts,
        });
    }

    let benefic_conjuncts = affliction::benefic_conjuncts(chart, graha);
    if !benefic_conjuncts.is_empty() {
        score += benefic_conjuncts.len() as f64 * 5.0;
        positives.push(StrengthFactor::ConjunctBenefics {
            grahas: benefic_conjuncts,
        });
    }

    let aspecting = drishti::aspecting_grahas(chart, graha);
    let aspected_by_benefics = aspecting
        .iter()
        .any(|g| matches!(g, Graha::Guru | Graha::Shukra));
    let aspected_by_malefics = aspecting
        .iter()
        .any(|g| matches!(g, Graha::Shani | Graha::Mangal | Graha::Rahu | Graha::Ketu));

    if aspecting.contains(&Graha::Guru) {
        positives.push(StrengthFactor::JupiterDrishti);
        score += 8.0;
    }
    if aspecting.contains(&Graha::Shani) {
        issues.push(StrengthFactor::SaturnDrishti);
        score -= 5.0;
    }

    let gandanta = affliction::is_gandanta(rashi, degree);
    if gandanta {
        issues.push(StrengthFactor::Gandanta);
        score -= 12.0;
    }

    let mrityu_bhaga = affliction::is_in_mrityu_bhaga(graha, rashi, degree);
    if mrityu_bhaga {
        issues.push(StrengthFactor::MrityuBhaga);
        score -= 8.0;
    }

    let pushkara_navamsha = affliction::is_pushkara_navamsha(rashi, degree);
    if pushkara_navamsha {
        positives.push(StrengthFactor::PushkaraNavamsha);
        score += 5.0;
    }

    let functional_benefic = is_functional_benefic(graha, lagna);
    let functional_malefic = is_functional_malefic(graha, lagna);

    let yogakaraka = yogakaraka_for_lagna(lagna) == Some(graha);
    if yogakaraka {
        positives.push(StrengthFactor::Yogakaraka { lagna });
        score += 10.0;
    }

    if graha == Graha::Chandra {
        let brightness = affliction::paksha_brightness(chart);
        if brightness < 0.0 {
            issues.push(StrengthFactor::MoonDark);
            score += brightness;
        } else if brightness > 0.0 {
            positives.push(StrengthFactor::MoonBright);
            score += brightness;
        }
    }

    let score = score.clamp(0.0, 100.0);
    let tier = StrengthTier::from_score(score);
    let needs_remedy =
        tier.severity() >= 3 || issues.len() >= 2 || debilitated || combust || gandanta;

    PlanetaryAnalysis {
        graha,
        score,
        tier,
        position: Some(pos),
        issues,
        positives,
        needs_remedy,
        exalted,
        debilitated,
        own_sign,
        moolatrikona,
        friendly_sign,
        enemy_sign,
        neutral_sign,
        neecha_bhanga,
        combust,
        gandanta,
        mrityu_bhaga,
        pushkara_navamsha,
        functional_benefic,
        functional_malefic,
        yogakaraka,
        aspecting,
        aspected_by_benefics,
        aspected_by_malefics,
        normalized_strength: score / 100.0,
    }
}
