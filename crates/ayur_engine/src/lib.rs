//! Classical chart analysis over the base jyotish primitives.
//!
//! This crate provides:
//! - Per-graha strength scoring with a six-tier classification and a
//!   full factor audit trail
//! - TriMurti significator selection (Rudra, secondary Rudra, Brahma,
//!   Maheshwara)
//! - Longevity assessment from five weighted rule groups with cited
//!   classical references
//! - A locale seam and deterministic report renderer, so all display
//!   text stays outside the evaluators
//!
//! Every analysis is a pure function of a [`Chart`](ayur_vedic_base::Chart)
//! snapshot and the lagna; missing grahas degrade to neutral results.

pub mod explain;
pub mod locale;
pub mod longevity;
pub mod strength;
pub mod trimurti;

pub use explain::render_longevity_report;
pub use locale::{Localizer, ReportLabel};
pub use longevity::{
    HouseTally, LONGEVITY_HOUSES, LongevityAssessment, LongevityCategory, LongevityFactor,
    RuleApplication, RuleId, RuleObservation, SutraReference, assess_longevity, category_for_total,
};
pub use strength::{
    BASELINE_SCORE, PlanetaryAnalysis, StrengthFactor, StrengthTier, analyze_graha,
    has_neecha_bhanga, is_functional_benefic, is_functional_malefic, yogakaraka_for_lagna,
};
pub use trimurti::{
    Brahma, Maheshwara, Rudra, SecondaryRudra, TriMurti, analyze_trimurti, find_brahma,
    find_maheshwara, find_rudra, find_secondary_rudra,
};
