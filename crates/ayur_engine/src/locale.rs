//! Presentation-language seam.
//!
//! The analysis types carry semantic keys only; turning them into
//! human-readable text is the caller's job through [`Localizer`]. The
//! engine itself ships no display strings, so reports can be rendered
//! in any language without touching the rule evaluators.

use ayur_vedic_base::graha::Graha;
use ayur_vedic_base::rashi::Rashi;

use crate::longevity::{
    LongevityCategory, LongevityFactor, RuleId, RuleObservation, SutraReference,
};
use crate::strength::{StrengthFactor, StrengthTier};

/// Fixed labels used by the report renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLabel {
    LongevityTitle,
    FinalCategory,
    EstimatedRange,
    YearsUnit,
    RulesApplied,
    Reference,
    Observation,
    Result,
    SupportingFactors,
    ChallengingFactors,
    None,
}

/// Resolves semantic analysis keys into display text.
pub trait Localizer {
    fn graha(&self, graha: Graha) -> String;

    fn rashi(&self, rashi: Rashi) -> String;

    fn label(&self, label: ReportLabel) -> String;

    fn strength_tier(&self, tier: StrengthTier) -> String;

    fn strength_factor(&self, factor: &StrengthFactor) -> String;

    fn longevity_category(&self, category: LongevityCategory) -> String;

    fn rule_name(&self, rule: RuleId) -> String;

    fn sutra_reference(&self, reference: SutraReference) -> String;

    fn rule_observation(&self, observation: &RuleObservation) -> String;

    fn longevity_factor(&self, factor: &LongevityFactor) -> String;
}
