use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

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
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: species label → Color32
// ---------------------------------------------------------------------------

/// Maps each unique species label to a stable, distinct colour.
/// Presentation only; records without a species fall back to the default.
#[derive(Debug, Clone, Default)]
pub struct SpeciesColors {
    mapping: BTreeMap<String, Color32>,
}

impl SpeciesColors {
    /// Build a colour map from the table's unique species labels.
    pub fn new(species_values: &BTreeSet<String>) -> Self {
        let palette = generate_palette(species_values.len());
        let mapping = species_values
            .iter()
            .zip(palette)
            .map(|(s, c)| (s.clone(), c))
            .collect();
        SpeciesColors { mapping }
    }

    /// Look up the colour for a species label; `None` gets the fallback.
    pub fn color_for(&self, species: Option<&str>) -> Color32 {
        species
            .and_then(|s| self.mapping.get(s))
            .copied()
            .unwrap_or(Color32::LIGHT_BLUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_colors_are_distinct() {
        let palette = generate_palette(3);
        assert_eq!(palette.len(), 3);
        assert_ne!(palette[0], palette[1]);
        assert_ne!(palette[1], palette[2]);
    }

    #[test]
    fn species_map_is_stable_and_has_fallback() {
        let species: BTreeSet<String> = ["Sun Star", "Common Starfish"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let colors = SpeciesColors::new(&species);
        assert_eq!(
            colors.color_for(Some("Sun Star")),
            colors.color_for(Some("Sun Star"))
        );
        assert_eq!(colors.color_for(None), Color32::LIGHT_BLUE);
        assert_eq!(colors.color_for(Some("unknown")), Color32::LIGHT_BLUE);
    }
}
