//! HSL color value used for noun highlights.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A color in hue/saturation/lightness form.
///
/// Two colors are the same issued color only when all three components match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HslColor {
    /// Degrees, `0..360`.
    pub hue: u16,
    /// Percent.
    pub saturation: u8,
    /// Percent.
    pub lightness: u8,
}

impl HslColor {
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue: hue % 360,
            saturation: saturation.min(100),
            lightness: lightness.min(100),
        }
    }

    /// Inline CSS declaration applied to a highlight span.
    pub fn css_declaration(&self) -> String {
        format!("color: {self};")
    }
}

impl Display for HslColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}
