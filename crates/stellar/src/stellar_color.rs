use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// RGB color of a star as drawn on the galaxy map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct StellarColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// The fixed star palette, indexed by a single stream draw
pub const STAR_PALETTE: [StellarColor; 5] = [
    StellarColor::new(247, 210, 35),
    StellarColor::new(53, 218, 247),
    StellarColor::new(247, 146, 53),
    StellarColor::new(240, 219, 218),
    StellarColor::new(54, 77, 231),
];

impl StellarColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Palette entry for `index`, wrapping out-of-range indices
    pub fn from_palette(index: usize) -> Self {
        STAR_PALETTE[index % STAR_PALETTE.len()]
    }

    /// Position of this color in [`STAR_PALETTE`], if it is a palette color
    pub fn palette_index(&self) -> Option<usize> {
        STAR_PALETTE.iter().position(|c| c == self)
    }

    /// Returns the color as a hex string (e.g., "#F7D223")
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for StellarColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}
