use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

use crate::data::model::Outcome;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            to_color32(rgb)
        })
        .collect()
}

fn to_color32(rgb: Srgb) -> Color32 {
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// ---------------------------------------------------------------------------
// Outcome colours
// ---------------------------------------------------------------------------

const VIRIDIS_LOW: (u8, u8, u8) = (0x44, 0x01, 0x54);
const VIRIDIS_HIGH: (u8, u8, u8) = (0xfd, 0xe7, 0x25);

/// Colour along the viridis end points for a class value in `0.0..=1.0`,
/// mixed in linear RGB.
pub fn class_color(t: f32) -> Color32 {
    let endpoint = |(r, g, b): (u8, u8, u8)| -> LinSrgb {
        Srgb::new(r, g, b).into_format::<f32>().into_linear()
    };
    let mixed = endpoint(VIRIDIS_LOW).mix(endpoint(VIRIDIS_HIGH), t.clamp(0.0, 1.0));
    to_color32(Srgb::from_linear(mixed))
}

pub fn outcome_color(outcome: Outcome) -> Color32 {
    class_color(outcome.class() as f32)
}

// ---------------------------------------------------------------------------
// Color mapping: launch site → Color32
// ---------------------------------------------------------------------------

/// Maps launch sites to distinct colours.
#[derive(Debug, Clone)]
pub struct SiteColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl SiteColorMap {
    /// Build a colour map from the dataset's distinct sites.
    pub fn new(sites: &[String]) -> Self {
        let mapping = sites
            .iter()
            .cloned()
            .zip(generate_palette(sites.len()))
            .collect();

        SiteColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a given site.
    pub fn color_for(&self, site: &str) -> Color32 {
        self.mapping
            .get(site)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_colors() {
        let colors = generate_palette(4);
        assert_eq!(colors.len(), 4);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn outcome_colors_hit_viridis_end_points() {
        assert_eq!(outcome_color(Outcome::Failure), Color32::from_rgb(0x44, 0x01, 0x54));
        assert_eq!(outcome_color(Outcome::Success), Color32::from_rgb(0xfd, 0xe7, 0x25));
    }

    #[test]
    fn unknown_site_falls_back_to_gray() {
        let map = SiteColorMap::new(&["A".to_string(), "B".to_string()]);
        assert_ne!(map.color_for("A"), map.color_for("B"));
        assert_eq!(map.color_for("Z"), Color32::GRAY);
    }
}
