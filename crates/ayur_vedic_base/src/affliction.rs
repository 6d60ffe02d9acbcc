//! Sensitive-degree afflictions and supports: gandanta, mrityu bhaga,
//! pushkara navamsha, lunar tithi/paksha brightness, and house
//! co-occupancy (conjunction) sets.
//!
//! Clean-room implementation from classical jyotish sources.

use crate::chart::Chart;
use crate::graha::Graha;
use crate::rashi::{Rashi, Tattva};

/// Degrees from the end of a water sign that count as gandanta.
pub const GANDANTA_WATER_FROM: f64 = 26.40;

/// Degrees from the start of a fire sign that count as gandanta.
pub const GANDANTA_FIRE_TO: f64 = 3.20;

/// Orb around a mrityu bhaga degree.
pub const MRITYU_BHAGA_ORB: f64 = 1.0;

/// Navamsha span in degrees used for the pushkara index.
const NAVAMSHA_SPAN: f64 = 3.333333;

/// Gandanta: the junction band where a water sign ends and a fire sign
/// begins (Karka/Simha, Vrischika/Dhanu, Meena/Mesha).
pub fn is_gandanta(rashi: Rashi, degree_in_rashi: f64) -> bool {
    match rashi.tattva() {
        Tattva::Jala => degree_in_rashi >= GANDANTA_WATER_FROM,
        Tattva::Agni => degree_in_rashi <= GANDANTA_FIRE_TO,
        _ => false,
    }
}

/// Mrityu bhaga (vulnerable) degree for a graha in a rashi.
///
/// Classical table covers the 7 sapta grahas only; `None` for the nodes.
pub const fn mrityu_bhaga_degree(rashi: Rashi, graha: Graha) -> Option<f64> {
    let degrees: [f64; 7] = match rashi {
        Rashi::Mesha => [20.0, 26.0, 19.0, 15.0, 18.0, 28.0, 10.0],
        Rashi::Vrishabha => [9.0, 12.0, 28.0, 14.0, 20.0, 15.0, 23.0],
        Rashi::Mithuna => [12.0, 13.0, 25.0, 13.0, 19.0, 13.0, 22.0],
        Rashi::Karka => [6.0, 25.0, 23.0, 12.0, 10.0, 6.0, 21.0],
        Rashi::Simha => [8.0, 24.0, 23.0, 11.0, 9.0, 4.0, 20.0],
        Rashi::Kanya => [24.0, 11.0, 22.0, 10.0, 8.0, 1.0, 19.0],
        Rashi::Tula => [17.0, 26.0, 21.0, 9.0, 11.0, 29.0, 18.0],
        Rashi::Vrischika => [22.0, 27.0, 20.0, 8.0, 12.0, 5.0, 17.0],
        Rashi::Dhanu => [21.0, 6.0, 10.0, 7.0, 20.0, 8.0, 16.0],
        Rashi::Makara => [16.0, 25.0, 11.0, 6.0, 22.0, 14.0, 15.0],
        Rashi::Kumbha => [15.0, 5.0, 12.0, 5.0, 2.0, 20.0, 14.0],
        Rashi::Meena => [10.0, 12.0, 13.0, 4.0, 1.0, 26.0, 13.0],
    };
    // Columns in traditional order: Surya, Chandra, Mangal, Buddh, Guru,
    // Shukra, Shani.
    match graha {
        Graha::Rahu | Graha::Ketu => None,
        _ => Some(degrees[graha.index() as usize]),
    }
}

/// Is the graha within [`MRITYU_BHAGA_ORB`] of its mrityu bhaga degree?
pub fn is_in_mrityu_bhaga(graha: Graha, rashi: Rashi, degree_in_rashi: f64) -> bool {
    match mrityu_bhaga_degree(rashi, graha) {
        Some(deg) => (degree_in_rashi - deg).abs() <= MRITYU_BHAGA_ORB,
        None => false,
    }
}

/// Pushkara navamsha: the navamsha index (0-8) falls in the auspicious
/// set for the sign's element.
pub fn is_pushkara_navamsha(rashi: Rashi, degree_in_rashi: f64) -> bool {
    let index = (degree_in_rashi / NAVAMSHA_SPAN) as u8;
    let allowed: &[u8] = match rashi.tattva() {
        Tattva::Agni | Tattva::Jala => &[2, 5, 8],
        Tattva::Prithvi => &[1, 4, 7],
        Tattva::Vayu => &[0, 3, 6],
    };
    allowed.contains(&index)
}

/// Lunar tithi (1-30) from the Moon-Sun elongation.
///
/// `None` when either luminary is missing from the chart.
pub fn tithi(chart: &Chart) -> Option<u8> {
    let sun = chart.position(Graha::Surya)?;
    let moon = chart.position(Graha::Chandra)?;
    let mut diff = moon.longitude - sun.longitude;
    if diff < 0.0 {
        diff += 360.0;
    }
    Some((diff / 12.0) as u8 + 1)
}

/// Signed Moon brightness term from the tithi, in 5-tithi buckets.
///
/// Dark just after new moon, peaking after full moon; 0 when either
/// luminary is missing.
pub fn paksha_brightness(chart: &Chart) -> f64 {
    match tithi(chart) {
        Some(1..=5) => -10.0,
        Some(6..=10) => -5.0,
        Some(11..=15) => 5.0,
        Some(16..=20) => 10.0,
        Some(21..=25) => 5.0,
        Some(26..=30) => -5.0,
        _ => 0.0,
    }
}

/// Malefic grahas sharing the given graha's house (Shani, Mangal, Rahu,
/// Ketu, Surya), in traditional order. Empty when the graha is missing.
pub fn malefic_conjuncts(chart: &Chart, graha: Graha) -> Vec<Graha> {
    let Some(pos) = chart.position(graha) else {
        return Vec::new();
    };
    chart
        .in_house(pos.house)
        .filter(|p| p.graha != graha && p.graha.is_natural_malefic())
        .map(|p| p.graha)
        .collect()
}

/// Benefic grahas sharing the given graha's house, in traditional order.
///
/// Guru and Shukra always count; the Moon counts only in its bright
/// half (paksha brightness > 0); Mercury counts only when its own house
/// holds at least as many benefic as malefic co-occupants.
pub fn benefic_conjuncts(chart: &Chart, graha: Graha) -> Vec<Graha> {
    let Some(pos) = chart.position(graha) else {
        return Vec::new();
    };
    let moon_benefic =
        chart.position(Graha::Chandra).is_some() && paksha_brightness(chart) > 0.0;
    let mercury_benefic = chart
        .position(Graha::Buddh)
        .is_some_and(|mercury| {
            let co_occupants: Vec<Graha> = chart
                .in_house(mercury.house)
                .filter(|p| p.graha != Graha::Buddh)
                .map(|p| p.graha)
                .collect();
            let malefics = co_occupants
                .iter()
                .filter(|g| {
                    matches!(g, Graha::Shani | Graha::Mangal | Graha::Rahu | Graha::Ketu)
                })
                .count();
            let benefics = co_occupants
                .iter()
                .filter(|g| matches!(g, Graha::Guru | Graha::Shukra))
                .count();
            benefics >= malefics
        });

    chart
        .in_house(pos.house)
        .filter(|p| p.graha != graha)
        .filter(|p| match p.graha {
            Graha::Guru | Graha::Shukra => true,
            Graha::Chandra => moon_benefic,
            Graha::Buddh => mercury_benefic,
            _ => false,
        })
        .map(|p| p.graha)
        .collect()
}
