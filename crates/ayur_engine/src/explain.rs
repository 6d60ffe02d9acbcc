//! Deterministic text rendering of a longevity assessment.
//!
//! All wording comes from the [`Localizer`]; this module only fixes the
//! section layout so the same assessment renders identically across
//! runs regardless of language.

use std::fmt::Write;

use crate::locale::{Localizer, ReportLabel};
use crate::longevity::LongevityAssessment;

/// Render the full sectioned report: category header, estimated range,
/// numbered rule trail, then supporting and challenging factor bullets.
pub fn render_longevity_report(assessment: &LongevityAssessment, locale: &dyn Localizer) -> String {
    let mut out = String::new();

    let title = locale.label(ReportLabel::LongevityTitle);
    let _ = writeln!(out, "=== {title} ===");
    let _ = writeln!(
        out,
        "{}: {}",
        locale.label(ReportLabel::FinalCategory),
        locale.longevity_category(assessment.category)
    );
    let _ = writeln!(
        out,
        "{}: {} {}",
        locale.label(ReportLabel::EstimatedRange),
        assessment.category.years_range(),
        locale.label(ReportLabel::YearsUnit)
    );

    if !assessment.rules.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}:", locale.label(ReportLabel::RulesApplied));
        for (idx, rule) in assessment.rules.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", idx + 1, locale.rule_name(rule.rule));
            let _ = writeln!(
                out,
                "   {}: {}",
                locale.label(ReportLabel::Reference),
                locale.sutra_reference(rule.reference)
            );
            let _ = writeln!(
                out,
                "   {}: {}",
                locale.label(ReportLabel::Observation),
                locale.rule_observation(&rule.observation)
            );
            let _ = writeln!(
                out,
                "   {}: {:+.0}",
                locale.label(ReportLabel::Result),
                rule.weight
            );
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}:", locale.label(ReportLabel::SupportingFactors));
    if assessment.supporting.is_empty() {
        let _ = writeln!(out, "- {}", locale.label(ReportLabel::None));
    }
    for factor in &assessment.supporting {
        let _ = writeln!(out, "- {}", locale.longevity_factor(factor));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}:", locale.label(ReportLabel::ChallengingFactors));
    if assessment.challenging.is_empty() {
        let _ = writeln!(out, "- {}", locale.label(ReportLabel::None));
    }
    for factor in &assessment.challenging {
        let _ = writeln!(out, "- {}", locale.longevity_factor(factor));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::longevity::{
        LongevityCategory, LongevityFactor, RuleApplication, RuleId, RuleObservation,
        SutraReference,
    };
    use crate::strength::{StrengthFactor, StrengthTier};
    use ayur_vedic_base::graha::Graha;
    use ayur_vedic_base::rashi::Rashi;

    /// Key-echoing locale; good enough to pin the layout.
    struct DebugLocale;

    impl Localizer for DebugLocale {
        fn graha(&self, graha: Graha) -> String {
            graha.name().to_string()
        }

        fn rashi(&self, rashi: Rashi) -> String {
            rashi.name().to_string()
        }

        fn label(&self, label: ReportLabel) -> String {
            format!("{label:?}")
        }

        fn strength_tier(&self, tier: StrengthTier) -> String {
            format!("{tier:?}")
        }

        fn strength_factor(&self, factor: &StrengthFactor) -> String {
            format!("{factor:?}")
        }

        fn longevity_category(&self, category: LongevityCategory) -> String {
            format!("{category:?}")
        }

        fn rule_name(&self, rule: RuleId) -> String {
            format!("{rule:?}")
        }

        fn sutra_reference(&self, reference: SutraReference) -> String {
            format!("{reference:?}")
        }

        fn rule_observation(&self, observation: &RuleObservation) -> String {
            format!("{observation:?}")
        }

        fn longevity_factor(&self, factor: &LongevityFactor) -> String {
            format!("{factor:?}")
        }
    }

    fn sample_assessment() -> LongevityAssessment {
        LongevityAssessment {
            category: LongevityCategory::Madhyayu,
            total_weight: 32.0,
            supporting: vec![LongevityFactor::LagnaLordExalted(Graha::Mangal)],
            challenging: vec![],
            rules: vec![
                RuleApplication {
                    rule: RuleId::LagnaLordExaltation,
                    reference: SutraReference::BphsAyurdaya,
                    observation: RuleObservation::GrahaInRashi {
                        graha: Graha::Mangal,
                        rashi: Rashi::Makara,
                    },
                    weight: 20.0,
                },
                RuleApplication {
                    rule: RuleId::LagnaLordInKendra,
                    reference: SutraReference::BphsChapter45,
                    observation: RuleObservation::GrahaInHouse {
                        graha: Graha::Mangal,
                        house: 10,
                    },
                    weight: 12.0,
                },
            ],
        }
    }

    #[test]
    fn report_has_expected_sections() {
        let report = render_longevity_report(&sample_assessment(), &DebugLocale);
        assert!(report.starts_with("=== LongevityTitle ==="));
        assert!(report.contains("FinalCategory: Madhyayu"));
        assert!(report.contains("EstimatedRange: 32-70 YearsUnit"));
        assert!(report.contains("1. LagnaLordExaltation"));
        assert!(report.contains("2. LagnaLordInKendra"));
        assert!(report.contains("Result: +20"));
        assert!(report.contains("Result: +12"));
        assert!(report.contains("SupportingFactors:"));
        assert!(report.contains("ChallengingFactors:"));
    }

    #[test]
    fn negative_weights_keep_sign() {
        let mut assessment = sample_assessment();
        assessment.rules[0].weight = -18.0;
        let report = render_longevity_report(&assessment, &DebugLocale);
        assert!(report.contains("Result: -18"));
    }

    #[test]
    fn empty_factor_lists_render_placeholder() {
        let mut assessment = sample_assessment();
        assessment.supporting.clear();
        let report = render_longevity_report(&assessment, &DebugLocale);
        assert!(report.contains("SupportingFactors:\n- None"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let assessment = sample_assessment();
        let a = render_longevity_report(&assessment, &DebugLocale);
        let b = render_longevity_report(&assessment, &DebugLocale);
        assert_eq!(a, b);
    }
}
