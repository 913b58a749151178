#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Opaque rendering identity of a body. The simulation never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct BodyColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BodyColor {
    /// Creates a color from its red, green and blue channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Teal used for the first body (#17A2B8)
    pub const fn teal() -> Self {
        Self::new(0x17, 0xA2, 0xB8)
    }

    /// Orange used for the second body (#FD7E14)
    pub const fn orange() -> Self {
        Self::new(0xFD, 0x7E, 0x14)
    }

    /// Formats the color as `#RRGGBB`
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for BodyColor {
    fn default() -> Self {
        Self::teal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_colors_format_as_hex() {
        assert_eq!(BodyColor::teal().to_hex(), "#17A2B8");
        assert_eq!(BodyColor::orange().to_hex(), "#FD7E14");
    }
}
