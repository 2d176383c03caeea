//! Session-scoped noun → color assignments.
//!
//! # Responsibility
//! - Hand out one color per noun and remember it for the session.
//! - Keep every issued color distinct from every other issued color.
//!
//! # Invariants
//! - An assignment never changes and is never evicted, even after the noun
//!   stops repeating; only [`ColorAssignments::reset`] clears it.
//! - Generation is deterministic: the same nouns assigned in the same order
//!   get the same colors in every session.
//! - Generation always terminates. The palette holds 360 hues for each of
//!   five lightness tiers; past that the seeded color is reused.

use crate::config::HighlightConfig;
use crate::model::color::HslColor;
use log::warn;
use std::collections::{BTreeMap, HashMap, HashSet};

const HUE_COUNT: u16 = 360;
// Coprime with 360 so probing visits every hue once.
const HUE_STRIDE: u16 = 137;
const LIGHTNESS_TIERS: [i16; 5] = [0, -15, 15, -25, 25];

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Noun → color map plus the set of colors already issued.
#[derive(Debug, Clone)]
pub struct ColorAssignments {
    assigned: HashMap<String, HslColor>,
    issued: HashSet<HslColor>,
    saturation: u8,
    lightness: u8,
}

impl Default for ColorAssignments {
    fn default() -> Self {
        Self::new(&HighlightConfig::default())
    }
}

impl ColorAssignments {
    pub fn new(config: &HighlightConfig) -> Self {
        Self {
            assigned: HashMap::new(),
            issued: HashSet::new(),
            saturation: config.saturation,
            lightness: config.lightness,
        }
    }

    /// Returns the noun's color, generating and recording one on first use.
    pub fn color_for(&mut self, noun: &str) -> HslColor {
        if let Some(color) = self.assigned.get(noun) {
            return *color;
        }

        let color = self.next_free_color(noun);
        self.assigned.insert(noun.to_string(), color);
        self.issued.insert(color);
        color
    }

    /// Colors every noun in `nouns` and returns just that subset.
    pub fn assign_all<I, S>(&mut self, nouns: I) -> BTreeMap<String, HslColor>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        nouns
            .into_iter()
            .map(|noun| {
                let noun = noun.as_ref();
                (noun.to_string(), self.color_for(noun))
            })
            .collect()
    }

    pub fn get(&self, noun: &str) -> Option<HslColor> {
        self.assigned.get(noun).copied()
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Whether `color` has been handed out to any noun.
    pub fn is_issued(&self, color: &HslColor) -> bool {
        self.issued.contains(color)
    }

    /// Forgets every assignment and issued color.
    pub fn reset(&mut self) {
        self.assigned.clear();
        self.issued.clear();
    }

    fn next_free_color(&self, noun: &str) -> HslColor {
        let seed = seed_hue(noun);

        for offset in LIGHTNESS_TIERS {
            let lightness = (i16::from(self.lightness) + offset).clamp(0, 100) as u8;
            for step in 0..HUE_COUNT {
                let hue = ((u32::from(seed) + u32::from(step) * u32::from(HUE_STRIDE))
                    % u32::from(HUE_COUNT)) as u16;
                let candidate = HslColor::new(hue, self.saturation, lightness);
                if !self.issued.contains(&candidate) {
                    return candidate;
                }
            }
        }

        warn!(
            "event=color_assign module=highlight status=degraded error_code=palette_exhausted issued={}",
            self.issued.len()
        );
        HslColor::new(seed, self.saturation, self.lightness)
    }
}

/// Stable starting hue for a noun (FNV-1a over its UTF-8 bytes).
fn seed_hue(noun: &str) -> u16 {
    let hash = noun.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    });
    (hash % u64::from(HUE_COUNT)) as u16
}

#[cfg(test)]
mod tests {
    use super::{seed_hue, ColorAssignments};
    use crate::config::HighlightConfig;
    use std::collections::HashSet;

    #[test]
    fn assignment_is_stable_once_made() {
        let mut colors = ColorAssignments::default();
        let first = colors.color_for("cat");
        colors.color_for("dog");
        colors.color_for("mat");
        assert_eq!(colors.color_for("cat"), first);
        assert_eq!(colors.get("cat"), Some(first));
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn generation_is_deterministic_across_sessions() {
        let mut left = ColorAssignments::default();
        let mut right = ColorAssignments::default();
        for noun in ["cat", "mat", "river bank", "dog's"] {
            assert_eq!(left.color_for(noun), right.color_for(noun));
        }
    }

    #[test]
    fn issued_colors_are_unique() {
        let mut colors = ColorAssignments::default();
        let issued: HashSet<_> = (0..500)
            .map(|i| colors.color_for(&format!("noun{i}")))
            .collect();
        assert_eq!(issued.len(), 500);
    }

    #[test]
    fn full_palette_is_unique_and_overflow_still_terminates() {
        let mut colors = ColorAssignments::default();
        let palette: HashSet<_> = (0..1800)
            .map(|i| colors.color_for(&format!("n{i}")))
            .collect();
        assert_eq!(palette.len(), 1800);

        let overflow = colors.color_for("one more");
        assert!(palette.contains(&overflow));
        assert_eq!(colors.len(), 1801);
    }

    #[test]
    fn colors_use_configured_saturation_and_base_lightness() {
        let config = HighlightConfig {
            saturation: 80,
            lightness: 40,
            ..HighlightConfig::default()
        };
        let mut colors = ColorAssignments::new(&config);
        let color = colors.color_for("cat");
        assert_eq!(color.saturation, 80);
        assert_eq!(color.lightness, 40);
        assert_eq!(color.hue, seed_hue("cat"));
    }

    #[test]
    fn assign_all_returns_only_the_requested_subset() {
        let mut colors = ColorAssignments::default();
        colors.color_for("stale");
        let active = colors.assign_all(["cat", "mat"]);
        assert_eq!(active.len(), 2);
        assert!(!active.contains_key("stale"));
        assert!(colors.get("stale").is_some());
    }

    #[test]
    fn reset_forgets_everything() {
        let mut colors = ColorAssignments::default();
        let color = colors.color_for("cat");
        colors.reset();
        assert!(colors.is_empty());
        assert!(!colors.is_issued(&color));
    }
}
