//! Foundational jyotish lookup tables and chart primitives.
//!
//! This crate provides:
//! - Graha and rashi enums with lordship and triplicity tables
//! - Chart snapshot types (per-graha position, houses)
//! - Dignity classification (exaltation, debilitation, own sign,
//!   moolatrikona, five-fold maitri)
//! - Combustion, drishti (special aspects), and sensitive-degree
//!   detectors (gandanta, mrityu bhaga, pushkara, tithi/paksha)
//!
//! All implementations are clean-room, derived from BPHS and standard
//! public jyotish references. Everything is a pure function over
//! immutable inputs; missing chart data degrades to neutral results
//! rather than errors.

pub mod affliction;
pub mod chart;
pub mod combustion;
pub mod dignity;
pub mod drishti;
pub mod graha;
pub mod rashi;
pub mod util;

pub use affliction::{
    GANDANTA_FIRE_TO, GANDANTA_WATER_FROM, MRITYU_BHAGA_ORB, benefic_conjuncts, is_gandanta,
    is_in_mrityu_bhaga, is_pushkara_navamsha, malefic_conjuncts, mrityu_bhaga_degree,
    paksha_brightness, tithi,
};
pub use chart::{
    Chart, DUSTHANA_HOUSES, HouseClass, KENDRA_HOUSES, PlanetPosition, TRIKONA_HOUSES,
    WEALTH_HOUSES, house_class,
};
pub use combustion::{combustion_orb, is_combust};
pub use dignity::{
    DEEP_DIGNITY_ORB, DignityFacts, Maitri, compound_maitri, debilitation, dignity_facts,
    exaltation, is_debilitated, is_deeply_debilitated, is_deeply_exalted, is_exalted,
    is_in_moolatrikona, is_own_sign, moolatrikona, natural_maitri, own_signs,
};
pub use drishti::{
    aspecting_grahas, benefic_aspect_count, casts_drishti, drishti_offsets, malefic_aspect_count,
};
pub use graha::{
    ALL_GRAHAS, Graha, NATURAL_BENEFICS, NATURAL_MALEFICS, SAPTA_GRAHAS, nth_rashi_from,
    rashi_lord,
};
pub use rashi::{ALL_RASHIS, Rashi, Tattva, degree_in_rashi, rashi_from_longitude};
pub use util::{angular_separation, house_from, normalize_360};
