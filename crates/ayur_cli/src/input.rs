//! Chart construction from command-line position specs.
//!
//! A position spec is `name=longitude` with an optional `,r` suffix for
//! retrograde motion, e.g. `saturn=200.0` or `mercury=100.5,r`. Houses
//! are derived whole-sign from the ascendant longitude.

use ayur_vedic_base::{Chart, Graha, PlanetPosition, rashi_from_longitude};

/// One parsed `name=lon[,r]` argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSpec {
    pub graha: Graha,
    pub lon: f64,
    pub retrograde: bool,
}

/// Parse a graha by Sanskrit or English name, case-insensitive.
pub fn parse_graha(s: &str) -> Option<Graha> {
    match s.to_lowercase().as_str() {
        "sun" | "surya" => Some(Graha::Surya),
        "moon" | "chandra" => Some(Graha::Chandra),
        "mars" | "mangal" => Some(Graha::Mangal),
        "mercury" | "buddh" => Some(Graha::Buddh),
        "jupiter" | "guru" => Some(Graha::Guru),
        "venus" | "shukra" => Some(Graha::Shukra),
        "saturn" | "shani" => Some(Graha::Shani),
        "rahu" => Some(Graha::Rahu),
        "ketu" => Some(Graha::Ketu),
        _ => None,
    }
}

/// Parse one position spec.
pub fn parse_position(s: &str) -> Result<PositionSpec, String> {
    let (name, rest) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid position '{s}': expected name=lon[,r]"))?;
    let graha =
        parse_graha(name).ok_or_else(|| format!("Invalid graha name '{name}' in '{s}'"))?;

    let (lon_str, retrograde) = match rest.strip_suffix(",r").or_else(|| rest.strip_suffix(",R")) {
        Some(lon_str) => (lon_str, true),
        None => (rest, false),
    };
    let lon: f64 = lon_str
        .parse()
        .map_err(|_| format!("Invalid longitude '{lon_str}' in '{s}'"))?;
    if !lon.is_finite() {
        return Err(format!("Invalid longitude '{lon_str}' in '{s}'"));
    }

    Ok(PositionSpec {
        graha,
        lon,
        retrograde,
    })
}

/// Whole-sign house of a longitude relative to the ascendant sign.
pub fn whole_sign_house(asc_lon: f64, lon: f64) -> u8 {
    let asc_idx = rashi_from_longitude(asc_lon).index() as i16;
    let idx = rashi_from_longitude(lon).index() as i16;
    ((idx - asc_idx + 12) % 12) as u8 + 1
}

/// Build a chart snapshot from the ascendant and position specs.
///
/// Rejects duplicate grahas; an empty spec list yields an empty chart.
pub fn build_chart(asc_lon: f64, specs: &[String]) -> Result<Chart, String> {
    let mut positions: Vec<PlanetPosition> = Vec::with_capacity(specs.len());
    for spec in specs {
        let parsed = parse_position(spec)?;
        if positions.iter().any(|p| p.graha == parsed.graha) {
            return Err(format!("Duplicate graha in positions: {}", parsed.graha.name()));
        }
        positions.push(PlanetPosition::new(
            parsed.graha,
            parsed.lon,
            whole_sign_house(asc_lon, parsed.lon),
            parsed.retrograde,
        ));
    }
    Ok(Chart::new(asc_lon, &positions))
}
