//! English rendering of the engine's semantic keys.

use ayur_engine::locale::{Localizer, ReportLabel};
use ayur_engine::{
    LongevityCategory, LongevityFactor, RuleId, RuleObservation, StrengthFactor, StrengthTier,
    SutraReference,
};
use ayur_vedic_base::{Graha, Rashi};

/// English locale using English planet and Western sign names.
pub struct EnglishLocale;

impl Localizer for EnglishLocale {
    fn graha(&self, graha: Graha) -> String {
        graha.english_name().to_string()
    }

    fn rashi(&self, rashi: Rashi) -> String {
        rashi.western_name().to_string()
    }

    fn label(&self, label: ReportLabel) -> String {
        match label {
            ReportLabel::LongevityTitle => "Longevity Assessment (Shoola Dasha)",
            ReportLabel::FinalCategory => "Final Longevity Category",
            ReportLabel::EstimatedRange => "Estimated Range",
            ReportLabel::YearsUnit => "years",
            ReportLabel::RulesApplied => "Rules Applied",
            ReportLabel::Reference => "Reference",
            ReportLabel::Observation => "Observation",
            ReportLabel::Result => "Result",
            ReportLabel::SupportingFactors => "Supporting Factors",
            ReportLabel::ChallengingFactors => "Challenging Factors",
            ReportLabel::None => "None",
        }
        .to_string()
    }

    fn strength_tier(&self, tier: StrengthTier) -> String {
        match tier {
            StrengthTier::VeryStrong => "Very Strong",
            StrengthTier::Strong => "Strong",
            StrengthTier::Moderate => "Moderate",
            StrengthTier::Weak => "Weak",
            StrengthTier::VeryWeak => "Very Weak",
            StrengthTier::Afflicted => "Afflicted",
        }
        .to_string()
    }

    fn strength_factor(&self, factor: &StrengthFactor) -> String {
        match factor {
            StrengthFactor::DeeplyExalted { rashi, degree } => {
                format!("Deeply exalted in {} at {degree:.1} deg", self.rashi(*rashi))
            }
            StrengthFactor::Exalted { rashi } => format!("Exalted in {}", self.rashi(*rashi)),
            StrengthFactor::DeeplyDebilitated { rashi, degree } => {
                format!(
                    "Deeply debilitated in {} at {degree:.1} deg",
                    self.rashi(*rashi)
                )
            }
            StrengthFactor::Debilitated { rashi } => {
                format!("Debilitated in {}", self.rashi(*rashi))
            }
            StrengthFactor::NeechaBhanga => "Debilitation cancelled (neecha bhanga)".to_string(),
            StrengthFactor::OwnSign { rashi } => format!("In own sign {}", self.rashi(*rashi)),
            StrengthFactor::Moolatrikona => "In moolatrikona degrees".to_string(),
            StrengthFactor::FriendSign { lord } => {
                format!("In a friendly sign (lord {})", self.graha(*lord))
            }
            StrengthFactor::EnemySign { lord } => {
                format!("In an inimical sign (lord {})", self.graha(*lord))
            }
            StrengthFactor::KendraHouse { house } => format!("In kendra (house {house})"),
            StrengthFactor::TrikonaHouse { house } => format!("In trikona (house {house})"),
            StrengthFactor::DusthanaHouse { house } => format!("In dusthana (house {house})"),
            StrengthFactor::WealthHouse { house } => format!("In wealth house {house}"),
            StrengthFactor::RetrogradeStrong => "Retrograde (strengthened)".to_string(),
            StrengthFactor::RetrogradeReview => {
                "Retrograde (significations need review)".to_string()
            }
            StrengthFactor::RetrogradeInternalized => {
                "Retrograde (energy internalized)".to_string()
            }
            StrengthFactor::Combust { severe: true } => "Severely combust".to_string(),
            StrengthFactor::Combust { severe: false } => "Combust".to_string(),
            StrengthFactor::ConjunctMalefics { grahas } => {
                format!("Conjunct malefics: {}", self.graha_list(grahas))
            }
            StrengthFactor::ConjunctBenefics { grahas } => {
                format!("Conjunct benefics: {}", self.graha_list(grahas))
            }
            StrengthFactor::JupiterDrishti => "Receives Jupiter's drishti".to_string(),
            StrengthFactor::SaturnDrishti => "Receives Saturn's drishti".to_string(),
            StrengthFactor::Gandanta => "In gandanta degrees".to_string(),
            StrengthFactor::MrityuBhaga => "Near mrityu bhaga degree".to_string(),
            StrengthFactor::PushkaraNavamsha => "In pushkara navamsha".to_string(),
            StrengthFactor::Yogakaraka { lagna } => {
                format!("Yogakaraka for {} lagna", self.rashi(*lagna))
            }
            StrengthFactor::MoonDark => "Moon in dark paksha".to_string(),
            StrengthFactor::MoonBright => "Moon in bright paksha".to_string(),
        }
    }

    fn longevity_category(&self, category: LongevityCategory) -> String {
        match category {
            LongevityCategory::Balarishta => "BALARISHTA (Infant Affliction)",
            LongevityCategory::Alpayu => "ALPAYU (Short Life)",
            LongevityCategory::Madhyayu => "MADHYAYU (Medium Life)",
            LongevityCategory::Poornayu => "POORNAYU (Full Life)",
            LongevityCategory::Amitayu => "AMITAYU (Exceptional Longevity)",
        }
        .to_string()
    }

    fn rule_name(&self, rule: RuleId) -> String {
        match rule {
            RuleId::LagnaLordExaltation => "Lagna Lord Exaltation",
            RuleId::LagnaLordOwnSign => "Lagna Lord in Own Sign",
            RuleId::LagnaLordDebilitation => "Lagna Lord Debilitation",
            RuleId::LagnaLordInKendra => "Lagna Lord in Kendra",
            RuleId::LagnaLordInTrikona => "Lagna Lord in Trikona",
            RuleId::LagnaLordInDusthana => "Lagna Lord in Dusthana",
            RuleId::EighthLordInKendra => "8th Lord in Kendra",
            RuleId::EighthLordInTrikona => "8th Lord in Trikona",
            RuleId::EighthLordInDusthana => "8th Lord in Dusthana",
            RuleId::SaturnExalted => "Saturn Exalted",
            RuleId::SaturnOwnSign => "Saturn in Own Sign",
            RuleId::SaturnDebilitated => "Saturn Debilitated",
            RuleId::StrongBrahma => "Strong Brahma",
            RuleId::PowerfulRudra => "Powerful Rudra",
            RuleId::ModerateRudra => "Moderately Strong Rudra",
            RuleId::BeneficDominance => "Benefic Dominance in Longevity Houses",
            RuleId::MaleficDominance => "Malefic Dominance in Longevity Houses",
        }
        .to_string()
    }

    fn sutra_reference(&self, reference: SutraReference) -> String {
        match reference {
            SutraReference::BphsAyurdaya => "BPHS Ayurdaya Chapter",
            SutraReference::BphsChapter45 => "BPHS Chapter 45",
            SutraReference::BphsChapter46 => "BPHS Chapter 46",
            SutraReference::BphsChapter47 => "BPHS Chapter 47",
            SutraReference::JaiminiSutras24 => "Jaimini Sutras 2.4",
            SutraReference::BphsGeneral => "BPHS General Principles",
        }
        .to_string()
    }

    fn rule_observation(&self, observation: &RuleObservation) -> String {
        match observation {
            RuleObservation::GrahaInRashi { graha, rashi } => {
                format!("{} in {}", self.graha(*graha), self.rashi(*rashi))
            }
            RuleObservation::GrahaInHouse { graha, house } => {
                format!("{} in house {house}", self.graha(*graha))
            }
            RuleObservation::SignificatorStrength { graha, percent } => {
                format!("{} at {percent}% strength", self.graha(*graha))
            }
            RuleObservation::HouseTallies { tallies } => {
                let parts: Vec<String> = tallies
                    .iter()
                    .map(|t| {
                        format!(
                            "house {}: {} benefic(s), {} malefic(s)",
                            t.house, t.benefics, t.malefics
                        )
                    })
                    .collect();
                parts.join("; ")
            }
        }
    }

    fn longevity_factor(&self, factor: &LongevityFactor) -> String {
        match factor {
            LongevityFactor::LagnaLordExalted(g) => {
                format!("Lagna lord {} exalted", self.graha(*g))
            }
            LongevityFactor::LagnaLordOwnSign(g) => {
                format!("Lagna lord {} in own sign", self.graha(*g))
            }
            LongevityFactor::LagnaLordDebilitated(g) => {
                format!("Lagna lord {} debilitated", self.graha(*g))
            }
            LongevityFactor::LagnaLordInKendra(h) => {
                format!("Lagna lord in kendra (house {h})")
            }
            LongevityFactor::LagnaLordInTrikona(h) => {
                format!("Lagna lord in trikona (house {h})")
            }
            LongevityFactor::LagnaLordInDusthana(h) => {
                format!("Lagna lord in dusthana (house {h})")
            }
            LongevityFactor::EighthLordExalted(g) => {
                format!("8th lord {} exalted", self.graha(*g))
            }
            LongevityFactor::EighthLordDebilitated(g) => {
                format!("8th lord {} debilitated", self.graha(*g))
            }
            LongevityFactor::EighthLordInKendra(h) => {
                format!("8th lord in kendra (house {h})")
            }
            LongevityFactor::EighthLordInTrikona(h) => {
                format!("8th lord in trikona (house {h})")
            }
            LongevityFactor::EighthLordInDusthana(h) => {
                format!("8th lord in dusthana (house {h})")
            }
            LongevityFactor::SaturnExalted => "Saturn exalted".to_string(),
            LongevityFactor::SaturnOwnSign(r) => {
                format!("Saturn in own sign {}", self.rashi(*r))
            }
            LongevityFactor::SaturnDebilitated => "Saturn debilitated".to_string(),
            LongevityFactor::SaturnInKendra(h) => format!("Saturn in kendra (house {h})"),
            LongevityFactor::SaturnInTrikona(h) => format!("Saturn in trikona (house {h})"),
            LongevityFactor::SaturnInDusthana(h) => format!("Saturn in dusthana (house {h})"),
            LongevityFactor::StrongBrahma(g) => format!("Strong Brahma ({})", self.graha(*g)),
            LongevityFactor::PowerfulRudra(g) => format!("Powerful Rudra ({})", self.graha(*g)),
            LongevityFactor::StrongRudra(g) => format!("Strong Rudra ({})", self.graha(*g)),
            LongevityFactor::BeneficDominance(p) => {
                format!("Benefic dominance over longevity houses ({p}%)")
            }
            LongevityFactor::MaleficDominance(p) => {
                format!("Malefic dominance over longevity houses ({p}%)")
            }
        }
    }
}

impl EnglishLocale {
    fn graha_list(&self, grahas: &[Graha]) -> String {
        let names: Vec<String> = grahas.iter().map(|g| self.graha(*g)).collect();
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_text_uses_english_names() {
        let locale = EnglishLocale;
        let text = locale.strength_factor(&StrengthFactor::DeeplyExalted {
            rashi: Rashi::Tula,
            degree: 20.0,
        });
        assert_eq!(text, "Deeply exalted in Libra at 20.0 deg");
    }

    #[test]
    fn conjunct_list_is_comma_joined() {
        let locale = EnglishLocale;
        let text = locale.strength_factor(&StrengthFactor::ConjunctMalefics {
            grahas: vec![Graha::Shani, Graha::Mangal],
        });
        assert_eq!(text, "Conjunct malefics: Saturn, Mars");
    }

    #[test]
    fn house_tallies_join_with_semicolons() {
        let locale = EnglishLocale;
        let text = locale.rule_observation(&RuleObservation::HouseTallies {
            tallies: vec![
                ayur_engine::HouseTally {
                    house: 1,
                    benefics: 2,
                    malefics: 0,
                },
                ayur_engine::HouseTally {
                    house: 10,
                    benefics: 1,
                    malefics: 1,
                },
            ],
        });
        assert_eq!(
            text,
            "house 1: 2 benefic(s), 0 malefic(s); house 10: 1 benefic(s), 1 malefic(s)"
        );
    }
}
