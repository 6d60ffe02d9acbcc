//! Golden-value integration tests for the analysis pipeline.
//!
//! Exercises strength scoring, TriMurti selection, longevity rules, and
//! report rendering end to end over hand-built chart snapshots.

use ayur_engine::locale::{Localizer, ReportLabel};
use ayur_engine::{
    LongevityCategory, LongevityFactor, RuleId, RuleObservation, StrengthFactor, StrengthTier,
    SutraReference, analyze_graha, analyze_trimurti, assess_longevity, render_longevity_report,
};
use ayur_vedic_base::{Chart, Graha, PlanetPosition, Rashi};

fn pos(graha: Graha, lon: f64, house: u8) -> PlanetPosition {
    PlanetPosition::new(graha, lon, house, false)
}

fn full_chart() -> Chart {
    Chart::new(215.0, &[
        pos(Graha::Surya, 95.0, 9),
        pos(Graha::Chandra, 210.0, 1),
        pos(Graha::Mangal, 120.0, 10),
        PlanetPosition::new(Graha::Buddh, 100.0, 9, true),
        pos(Graha::Guru, 155.0, 11),
        pos(Graha::Shukra, 60.0, 8),
        PlanetPosition::new(Graha::Shani, 200.0, 12, true),
        pos(Graha::Rahu, 30.0, 7),
        pos(Graha::Ketu, 210.0, 1),
    ])
}

struct KeyLocale;

impl Localizer for KeyLocale {
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

// ===== Strength scoring =====

#[test]
fn saturn_deep_exaltation_golden() {
    // Saturn at Tula 20.0 exactly: deep exaltation (+35) plus pushkara
    // navamsha (+5) over the 50 baseline, house 3 contributes nothing.
    let chart = Chart::new(0.0, &[pos(Graha::Shani, 200.0, 3)]);
    let analysis = analyze_graha(&chart, Graha::Shani, Rashi::Mithuna);
    assert!(analysis.exalted);
    assert!((analysis.score - 90.0).abs() < 1e-9);
    assert_eq!(analysis.tier, StrengthTier::VeryStrong);
    assert!(
        analysis
            .positives
            .iter()
            .any(|f| matches!(f, StrengthFactor::DeeplyExalted { .. }))
    );
}

#[test]
fn combust_moon_golden() {
    // Sun 95, Moon 100: 5 deg separation within the 12 deg lunar orb.
    // Moon own-sign Karka (+15), combust (-25), dark paksha (-10),
    // conjunct the Sun (-7): 23.
    let chart = Chart::new(0.0, &[
        pos(Graha::Surya, 95.0, 3),
        pos(Graha::Chandra, 100.0, 3),
    ]);
    let analysis = analyze_graha(&chart, Graha::Chandra, Rashi::Simha);
    assert!(analysis.combust);
    assert!((analysis.score - 23.0).abs() < 1e-9);
    assert!(analysis.needs_remedy);
    assert!(
        analysis
            .issues
            .contains(&StrengthFactor::Combust { severe: true })
    );
}

#[test]
fn scorpio_lagna_moon_is_yogakaraka() {
    // Moon in Mesha 15 deg, house 3: no other signal fires, so the
    // yogakaraka bonus is the whole delta over baseline.
    let chart = Chart::new(0.0, &[pos(Graha::Chandra, 15.0, 3)]);
    let analysis = analyze_graha(&chart, Graha::Chandra, Rashi::Vrischika);
    assert!(analysis.yogakaraka);
    assert!((analysis.score - 60.0).abs() < 1e-9);
    assert!(
        analysis
            .positives
            .contains(&StrengthFactor::Yogakaraka { lagna: Rashi::Vrischika })
    );
}

#[test]
fn scores_stay_in_bounds_across_longitudes() {
    let mut lon = 0.0;
    while lon < 360.0 {
        let chart = Chart::new(0.0, &[
            pos(Graha::Surya, lon, 8),
            PlanetPosition::new(Graha::Shani, lon + 3.0, 8, true),
            pos(Graha::Mangal, lon + 5.0, 8),
        ]);
        for graha in [Graha::Surya, Graha::Shani, Graha::Mangal] {
            let analysis = analyze_graha(&chart, graha, Rashi::Karka);
            assert!((0.0..=100.0).contains(&analysis.score), "lon {lon}");
            assert!((0.0..=1.0).contains(&analysis.normalized_strength));
        }
        lon += 7.5;
    }
}

#[test]
fn missing_graha_is_neutral_everywhere() {
    let chart = Chart::new(0.0, &[]);
    let analysis = analyze_graha(&chart, Graha::Guru, Rashi::Mesha);
    assert!((analysis.score - 50.0).abs() < 1e-9);
    assert_eq!(analysis.tier, StrengthTier::Moderate);
    assert!(analysis.issues.is_empty() && analysis.positives.is_empty());
    assert!(!analysis.needs_remedy);
}

// ===== TriMurti =====

#[test]
fn trimurti_is_total_and_deterministic() {
    let chart = full_chart();
    let a = analyze_trimurti(&chart, Rashi::Vrischika);
    let b = analyze_trimurti(&chart, Rashi::Vrischika);
    assert_eq!(a.rudra.graha, b.rudra.graha);
    assert_eq!(a.maheshwara.graha, b.maheshwara.graha);
    // Maheshwara is a pure lookup: 8th from Vrischika is Mithuna.
    assert_eq!(a.maheshwara.graha, Graha::Buddh);
}

#[test]
fn empty_chart_trimurti_defaults() {
    let trimurti = analyze_trimurti(&Chart::new(0.0, &[]), Rashi::Mesha);
    assert_eq!(trimurti.rudra.graha, Graha::Shani);
    assert_eq!(trimurti.rudra.rashi, None);
    assert!((trimurti.rudra.strength - 0.0).abs() < 1e-12);
    assert!(trimurti.brahma.is_none());
    assert!(trimurti.secondary_rudra.is_none());
}

// ===== Longevity =====

#[test]
fn zero_weight_chart_is_alpayu() {
    let chart = Chart::new(0.0, &[]);
    let trimurti = analyze_trimurti(&chart, Rashi::Mesha);
    let assessment = assess_longevity(&chart, &trimurti, Rashi::Mesha);
    assert!(assessment.rules.is_empty());
    assert_eq!(assessment.category, LongevityCategory::Alpayu);
}

#[test]
fn strong_lagna_lord_chart_reaches_poornayu() {
    // Lagna Mesha: Mangal (both lagna and 8th lord) exalted in Makara,
    // house 10 (kendra), Saturn own-sign Kumbha in house 11.
    // Weights: 20 + 12 + 15 (8th lord kendra) + 15 (Saturn own) = 62.
    let chart = Chart::new(0.0, &[
        pos(Graha::Mangal, 275.0, 10),
        pos(Graha::Shani, 310.0, 11),
        pos(Graha::Guru, 10.0, 1),
        pos(Graha::Shukra, 15.0, 1),
        pos(Graha::Chandra, 100.0, 4),
    ]);
    let trimurti = analyze_trimurti(&chart, Rashi::Mesha);
    let assessment = assess_longevity(&chart, &trimurti, Rashi::Mesha);
    assert!((assessment.total_weight - 62.0).abs() < 1e-9);
    assert_eq!(assessment.category, LongevityCategory::Poornayu);
    assert!(
        assessment
            .supporting
            .contains(&LongevityFactor::LagnaLordExalted(Graha::Mangal))
    );
}

#[test]
fn afflicted_chart_drops_to_balarishta() {
    // Lagna Karka: lord Chandra debilitated in Vrischika, house 8.
    // Saturn debilitated in Mesha, house 6, retrograde: powerful Rudra.
    let chart = Chart::new(0.0, &[
        pos(Graha::Chandra, 213.0, 8),
        PlanetPosition::new(Graha::Shani, 10.0, 6, true),
        pos(Graha::Mangal, 40.0, 8),
    ]);
    let trimurti = analyze_trimurti(&chart, Rashi::Karka);
    let assessment = assess_longevity(&chart, &trimurti, Rashi::Karka);
    assert!(assessment.total_weight < -10.0);
    assert_eq!(assessment.category, LongevityCategory::Balarishta);
    assert!(
        assessment
            .rules
            .iter()
            .any(|r| r.rule == RuleId::PowerfulRudra)
    );
}

// ===== Report rendering =====

#[test]
fn report_renders_full_pipeline_output() {
    let chart = full_chart();
    let lagna = Rashi::Vrischika;
    let trimurti = analyze_trimurti(&chart, lagna);
    let assessment = assess_longevity(&chart, &trimurti, lagna);
    let report = render_longevity_report(&assessment, &KeyLocale);

    assert!(report.starts_with("=== LongevityTitle ==="));
    assert!(report.contains(&format!("{:?}", assessment.category)));
    assert!(report.contains(assessment.category.years_range()));
    for (idx, rule) in assessment.rules.iter().enumerate() {
        assert!(report.contains(&format!("{}. {:?}", idx + 1, rule.rule)));
    }
}
