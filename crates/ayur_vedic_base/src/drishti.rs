//! Graha drishti (special aspects) by house distance.
//!
//! The aspect reaches the house at offset (target - source + 12) mod 12
//! from the aspecting graha. Mars, Jupiter, Saturn, and the nodes carry
//! special offsets in addition to or instead of the universal 7th-house
//! aspect.
//!
//! Clean-room implementation from BPHS graha drishti rules.

use crate::chart::Chart;
use crate::graha::Graha;

/// House offsets at which a graha casts its drishti.
pub const fn drishti_offsets(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Mangal => &[4, 7, 8],
        Graha::Guru | Graha::Rahu | Graha::Ketu => &[5, 7, 9],
        Graha::Shani => &[3, 7, 10],
        _ => &[7],
    }
}

/// Does a graha in `source_house` aspect `target_house`?
pub fn casts_drishti(graha: Graha, source_house: u8, target_house: u8) -> bool {
    let offset = ((target_house as i16 - source_house as i16 + 12) % 12) as u8;
    drishti_offsets(graha).contains(&offset)
}

/// All grahas in the chart casting drishti onto the given graha's house.
///
/// The target graha itself is excluded. Empty when the target has no
/// position.
pub fn aspecting_grahas(chart: &Chart, target: Graha) -> Vec<Graha> {
    let Some(target_pos) = chart.position(target) else {
        return Vec::new();
    };
    chart
        .positions()
        .filter(|p| p.graha != target)
        .filter(|p| casts_drishti(p.graha, p.house, target_pos.house))
        .map(|p| p.graha)
        .collect()
}

/// Count of malefic drishtis (Shani, Mangal, Rahu, Ketu) on the graha.
pub fn malefic_aspect_count(chart: &Chart, target: Graha) -> usize {
    aspecting_grahas(chart, target)
        .iter()
        .filter(|g| {
            matches!(g, Graha::Shani | Graha::Mangal | Graha::Rahu | Graha::Ketu)
        })
        .count()
}

/// Count of benefic drishtis (Guru, Shukra, Buddh) on the graha.
pub fn benefic_aspect_count(chart: &Chart, target: Graha) -> usize {
    aspecting_grahas(chart, target)
        .iter()
        .filter(|g| matches!(g, Graha::Guru | Graha::Shukra | Graha::Buddh))
        .count()
}
