//! Longevity rule engine: five classical rule groups folded by weight.
//!
//! Each group is a pure evaluator over the chart (and TriMurti) that
//! appends weighted [`RuleApplication`] records plus unweighted
//! supporting/challenging factors. The audit trail preserves evaluation
//! order and is never deduplicated; the final category is a pure
//! function of the summed weights.
//!
//! Clean-room implementation of BPHS ayurdaya rules and the Jaimini
//! trimurti chapter.

use ayur_vedic_base::chart::{Chart, HouseClass, house_class};
use ayur_vedic_base::dignity;
use ayur_vedic_base::graha::{Graha, nth_rashi_from, rashi_lord};
use ayur_vedic_base::rashi::Rashi;

use crate::trimurti::TriMurti;

/// Houses weighed in the benefic/malefic balance rule.
pub const LONGEVITY_HOUSES: [u8; 3] = [1, 8, 10];

/// Longevity category from the summed rule weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LongevityCategory {
    Balarishta,
    Alpayu,
    Madhyayu,
    Poornayu,
    /// Classical fifth category; not produced by the weight thresholds.
    Amitayu,
}

impl LongevityCategory {
    pub const fn years_range(self) -> &'static str {
        match self {
            Self::Balarishta => "0-8",
            Self::Alpayu => "8-32",
            Self::Madhyayu => "32-70",
            Self::Poornayu => "70-100",
            Self::Amitayu => "100+",
        }
    }
}

/// Category thresholds over the total rule weight.
pub fn category_for_total(total_weight: f64) -> LongevityCategory {
    match total_weight {
        w if w >= 50.0 => LongevityCategory::Poornayu,
        w if w >= 20.0 => LongevityCategory::Madhyayu,
        w if w >= -10.0 => LongevityCategory::Alpayu,
        _ => LongevityCategory::Balarishta,
    }
}

/// Identity of a weighted classical rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleId {
    LagnaLordExaltation,
    LagnaLordOwnSign,
    LagnaLordDebilitation,
    LagnaLordInKendra,
    LagnaLordInTrikona,
    LagnaLordInDusthana,
    EighthLordInKendra,
    EighthLordInTrikona,
    EighthLordInDusthana,
    SaturnExalted,
    SaturnOwnSign,
    SaturnDebilitated,
    StrongBrahma,
    PowerfulRudra,
    ModerateRudra,
    BeneficDominance,
    MaleficDominance,
}

/// Classical source the rule cites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SutraReference {
    BphsAyurdaya,
    BphsChapter45,
    BphsChapter46,
    BphsChapter47,
    JaiminiSutras24,
    BphsGeneral,
}

/// Per-house benefic/malefic tally for the balance rule observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HouseTally {
    pub house: u8,
    pub benefics: u8,
    pub malefics: u8,
}

/// Structured observation attached to a fired rule; display text is the
/// presentation layer's concern.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleObservation {
    GrahaInRashi { graha: Graha, rashi: Rashi },
    GrahaInHouse { graha: Graha, house: u8 },
    SignificatorStrength { graha: Graha, percent: u8 },
    HouseTallies { tallies: Vec<HouseTally> },
}

/// One fired rule in the audit trail.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleApplication {
    pub rule: RuleId,
    pub reference: SutraReference,
    pub observation: RuleObservation,
    pub weight: f64,
}

/// Unweighted supporting/challenging observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongevityFactor {
    LagnaLordExalted(Graha),
    LagnaLordOwnSign(Graha),
    LagnaLordDebilitated(Graha),
    LagnaLordInKendra(u8),
    LagnaLordInTrikona(u8),
    LagnaLordInDusthana(u8),
    EighthLordExalted(Graha),
    EighthLordDebilitated(Graha),
    EighthLordInKendra(u8),
    EighthLordInTrikona(u8),
    EighthLordInDusthana(u8),
    SaturnExalted,
    SaturnOwnSign(Rashi),
    SaturnDebilitated,
    SaturnInKendra(u8),
    SaturnInTrikona(u8),
    SaturnInDusthana(u8),
    StrongBrahma(Graha),
    PowerfulRudra(Graha),
    StrongRudra(Graha),
    BeneficDominance(u8),
    MaleficDominance(u8),
}

/// Full longevity assessment with ordered audit trail.
#[derive(Debug, Clone, PartialEq)]
pub struct LongevityAssessment {
    pub category: LongevityCategory,
    pub total_weight: f64,
    pub supporting: Vec<LongevityFactor>,
    pub challenging: Vec<LongevityFactor>,
    /// Fired rules in evaluation order; append-only, never reordered.
    pub rules: Vec<RuleApplication>,
}

struct Evaluation {
    rules: Vec<RuleApplication>,
    supporting: Vec<LongevityFactor>,
    challenging: Vec<LongevityFactor>,
}

impl Evaluation {
    fn new() -> Self {
        Self {
            rules: Vec::new(),
            supporting: Vec::new(),
            challenging: Vec::new(),
        }
    }
}

/// Rule group 1: Lagna lord dignity and placement.
fn evaluate_lagna_lord(chart: &Chart, lagna: Rashi, out: &mut Evaluation) {
    let lord = rashi_lord(lagna);
    let Some(pos) = chart.position(lord) else {
        return;
    };

    if dignity::is_exalted(lord, pos.rashi) {
        out.supporting.push(LongevityFactor::LagnaLordExalted(lord));
        out.rules.push(RuleApplication {
            rule: RuleId::LagnaLordExaltation,
            reference: SutraReference::BphsAyurdaya,
            observation: RuleObservation::GrahaInRashi {
                graha: lord,
                rashi: pos.rashi,
            },
            weight: 20.0,
        });
    } else if dignity::is_own_sign(lord, pos.rashi) {
        out.supporting.push(LongevityFactor::LagnaLordOwnSign(lord));
        out.rules.push(RuleApplication {
            rule: RuleId::LagnaLordOwnSign,
            reference: SutraReference::BphsAyurdaya,
            observation: RuleObservation::GrahaInRashi {
                graha: lord,
                rashi: pos.rashi,
            },
            weight: 15.0,
        });
    } else if dignity::is_debilitated(lord, pos.rashi) {
        out.challenging
            .push(LongevityFactor::LagnaLordDebilitated(lord));
        out.rules.push(RuleApplication {
            rule: RuleId::LagnaLordDebilitation,
            reference: SutraReference::BphsAyurdaya,
            observation: RuleObservation::GrahaInRashi {
                graha: lord,
                rashi: pos.rashi,
            },
            weight: -18.0,
        });
    }

    match house_class(pos.house) {
        HouseClass::Kendra => {
            out.supporting
                .push(LongevityFactor::LagnaLordInKendra(pos.house));
            out.rules.push(RuleApplication {
                rule: RuleId::LagnaLordInKendra,
                reference: SutraReference::BphsChapter45,
                observation: RuleObservation::GrahaInHouse {
                    graha: lord,
                    house: pos.house,
                },
                weight: 12.0,
            });
        }
        HouseClass::Trikona => {
            out.supporting
                .push(LongevityFactor::LagnaLordInTrikona(pos.house));
            out.rules.push(RuleApplication {
                rule: RuleId::LagnaLordInTrikona,
                reference: SutraReference::BphsChapter45,
                observation: RuleObservation::GrahaInHouse {
                    graha: lord,
                    house: pos.house,
                },
                weight: 10.0,
            });
        }
        HouseClass::Dusthana => {
            out.challenging
                .push(LongevityFactor::LagnaLordInDusthana(pos.house));
            out.rules.push(RuleApplication {
                rule: RuleId::LagnaLordInDusthana,
                reference: SutraReference::BphsChapter45,
                observation: RuleObservation::GrahaInHouse {
                    graha: lord,
                    house: pos.house,
                },
                weight: -15.0,
            });
        }
        _ => {}
    }
}

/// Rule group 2: 8th lord (ayur bhava) dignity and placement.
///
/// Dignity alone contributes factors without weight; only the house
/// placement carries weight.
fn evaluate_eighth_lord(chart: &Chart, lagna: Rashi, out: &mut Evaluation) {
    let lord = rashi_lord(nth_rashi_from(lagna, 8));
    let Some(pos) = chart.position(lord) else {
        return;
    };

    if dignity::is_exalted(lord, pos.rashi) {
        out.supporting.push(LongevityFactor::EighthLordExalted(lord));
    } else if dignity::is_debilitated(lord, pos.rashi) {
        out.challenging
            .push(LongevityFactor::EighthLordDebilitated(lord));
    }

    match house_class(pos.house) {
        HouseClass::Kendra => {
            out.supporting
                .push(LongevityFactor::EighthLordInKendra(pos.house));
            out.rules.push(RuleApplication {
                rule: RuleId::EighthLordInKendra,
                reference: SutraReference::BphsChapter46,
                observation: RuleObservation::GrahaInHouse {
                    graha: lord,
                    house: pos.house,
                },
                weight: 15.0,
            });
        }
        HouseClass::Trikona => {
            out.supporting
                .push(LongevityFactor::EighthLordInTrikona(pos.house));
            out.rules.push(RuleApplication {
                rule: RuleId::EighthLordInTrikona,
                reference: SutraReference::BphsChapter46,
                observation: RuleObservation::GrahaInHouse {
                    graha: lord,
                    house: pos.house,
                },
                weight: 10.0,
            });
        }
        HouseClass::Dusthana => {
            out.challenging
                .push(LongevityFactor::EighthLordInDusthana(pos.house));
            out.rules.push(RuleApplication {
                rule: RuleId::EighthLordInDusthana,
                reference: SutraReference::BphsChapter46,
                observation: RuleObservation::GrahaInHouse {
                    graha: lord,
                    house: pos.house,
                },
                weight: -15.0,
            });
        }
        _ => {}
    }
}

/// Rule group 3: Saturn as ayushkaraka. House placement contributes
/// factors only; dignity carries the weight.
fn evaluate_saturn(chart: &Chart, out: &mut Evaluation) {
    let Some(pos) = chart.position(Graha::Shani) else {
        return;
    };

    if dignity::is_exalted(Graha::Shani, pos.rashi) {
        out.supporting.push(LongevityFactor::SaturnExalted);
        out.rules.push(RuleApplication {
            rule: RuleId::SaturnExalted,
            reference: SutraReference::BphsChapter47,
            observation: RuleObservation::GrahaInRashi {
                graha: Graha::Shani,
                rashi: pos.rashi,
            },
            weight: 18.0,
        });
    } else if dignity::is_own_sign(Graha::Shani, pos.rashi) {
        out.supporting
            .push(LongevityFactor::SaturnOwnSign(pos.rashi));
        out.rules.push(RuleApplication {
            rule: RuleId::SaturnOwnSign,
            reference: SutraReference::BphsChapter47,
            observation: RuleObservation::GrahaInRashi {
                graha: Graha::Shani,
                rashi: pos.rashi,
            },
            weight: 15.0,
        });
    } else if dignity::is_debilitated(Graha::Shani, pos.rashi) {
        out.challenging.push(LongevityFactor::SaturnDebilitated);
        out.rules.push(RuleApplication {
            rule: RuleId::SaturnDebilitated,
            reference: SutraReference::BphsChapter47,
            observation: RuleObservation::GrahaInRashi {
                graha: Graha::Shani,
                rashi: pos.rashi,
            },
            weight: -18.0,
        });
    }

    match house_class(pos.house) {
        HouseClass::Kendra => out.supporting.push(LongevityFactor::SaturnInKendra(pos.house)),
        HouseClass::Trikona => out.supporting.push(LongevityFactor::SaturnInTrikona(pos.house)),
        HouseClass::Dusthana => {
            out.challenging.push(LongevityFactor::SaturnInDusthana(pos.house));
        }
        _ => {}
    }
}

/// Rule group 4: TriMurti strengths.
fn evaluate_trimurti_rules(trimurti: &TriMurti, out: &mut Evaluation) {
    if let Some(brahma) = trimurti.brahma.filter(|b| b.strength > 0.6) {
        out.supporting.push(LongevityFactor::StrongBrahma(brahma.graha));
        out.rules.push(RuleApplication {
            rule: RuleId::StrongBrahma,
            reference: SutraReference::JaiminiSutras24,
            observation: RuleObservation::SignificatorStrength {
                graha: brahma.graha,
                percent: (brahma.strength * 100.0).round() as u8,
            },
            weight: 12.0,
        });
    }

    let rudra = trimurti.rudra;
    if rudra.strength > 0.7 {
        out.challenging.push(LongevityFactor::PowerfulRudra(rudra.graha));
        out.rules.push(RuleApplication {
            rule: RuleId::PowerfulRudra,
            reference: SutraReference::JaiminiSutras24,
            observation: RuleObservation::SignificatorStrength {
                graha: rudra.graha,
                percent: (rudra.strength * 100.0).round() as u8,
            },
            weight: -20.0,
        });
    } else if rudra.strength > 0.5 {
        out.challenging.push(LongevityFactor::StrongRudra(rudra.graha));
        out.rules.push(RuleApplication {
            rule: RuleId::ModerateRudra,
            reference: SutraReference::JaiminiSutras24,
            observation: RuleObservation::SignificatorStrength {
                graha: rudra.graha,
                percent: (rudra.strength * 100.0).round() as u8,
            },
            weight: -12.0,
        });
    }
}

/// Rule group 5: benefic/malefic balance over houses 1, 8, and 10.
fn evaluate_benefic_balance(chart: &Chart, out: &mut Evaluation) {
    let mut benefic_count = 0u8;
    let mut malefic_count = 0u8;
    let mut tallies = Vec::new();

    for house in LONGEVITY_HOUSES {
        let mut benefics = 0u8;
        let mut malefics = 0u8;
        for pos in chart.in_house(house) {
            if pos.graha.is_natural_malefic() {
                malefics += 1;
            } else {
                benefics += 1;
            }
        }
        benefic_count += benefics;
        malefic_count += malefics;
        if benefics > 0 || malefics > 0 {
            tallies.push(HouseTally {
                house,
                benefics,
                malefics,
            });
        }
    }

    let total = benefic_count + malefic_count;
    let benefic_ratio = if total > 0 {
        f64::from(benefic_count) / f64::from(total)
    } else {
        0.5
    };

    if benefic_ratio >= 0.7 {
        out.supporting.push(LongevityFactor::BeneficDominance(
            (benefic_ratio * 100.0).round() as u8,
        ));
        out.rules.push(RuleApplication {
            rule: RuleId::BeneficDominance,
            reference: SutraReference::BphsGeneral,
            observation: RuleObservation::HouseTallies { tallies },
            weight: 10.0,
        });
    } else if benefic_ratio <= 0.3 {
        out.challenging.push(LongevityFactor::MaleficDominance(
            ((1.0 - benefic_ratio) * 100.0).round() as u8,
        ));
        out.rules.push(RuleApplication {
            rule: RuleId::MaleficDominance,
            reference: SutraReference::BphsGeneral,
            observation: RuleObservation::HouseTallies { tallies },
            weight: -10.0,
        });
    }
}

/// Run all five rule groups in fixed order and fold the weights.
pub fn assess_longevity(chart: &Chart, trimurti: &TriMurti, lagna: Rashi) -> LongevityAssessment {
    let mut out = Evaluation::new();

    evaluate_lagna_lord(chart, lagna, &mut out);
    evaluate_eighth_lord(chart, lagna, &mut out);
    evaluate_saturn(chart, &mut out);
    evaluate_trimurti_rules(trimurti, &mut out);
    evaluate_benefic_balance(chart, &mut out);

    let total_weight: f64 = out.rules.iter().map(|r| r.weight).sum();

    LongevityAssessment {
        category: category_for_total(total_weight),
        total_weight,
        supporting: out.supporting,
        challenging: out.challenging,
        rules: out.rules,
    }
}
