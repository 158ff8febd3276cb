//! RGB colors with name and hex parsing.

use std::str::FromStr;

use image::Rgba;

/// RGB color with values in 0..=255. Opacity is carried separately by the
/// style fields that use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const GREEN: Self = Self::new(0, 128, 0);

    /// Convert to an RGBA pixel with the given opacity in [0, 1].
    pub fn with_alpha(self, alpha: f32) -> Rgba<u8> {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba([self.r, self.g, self.b, a])
    }

    /// Fully opaque RGBA pixel.
    pub fn opaque(self) -> Rgba<u8> {
        self.with_alpha(1.0)
    }
}

impl FromStr for Color {
    type Err = String;

    /// Accepts a few CSS-style names and `#rrggbb` hex.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            "green" => return Ok(Self::GREEN),
            "red" => return Ok(Self::new(255, 0, 0)),
            "blue" => return Ok(Self::new(0, 0, 255)),
            "yellow" => return Ok(Self::new(255, 255, 0)),
            "orange" => return Ok(Self::new(255, 165, 0)),
            "gray" | "grey" => return Ok(Self::new(128, 128, 128)),
            _ => {}
        }
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            let r = u8::from_str_radix(&hex[0..2], 16).unwrap();
            let g = u8::from_str_radix(&hex[2..4], 16).unwrap();
            let b = u8::from_str_radix(&hex[4..6], 16).unwrap();
            return Ok(Self::new(r, g, b));
        }
        Err(format!("unknown color: {s} (use a color name or #rrggbb)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_hex() {
        assert_eq!("white".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("Green".parse::<Color>().unwrap(), Color::GREEN);
        assert_eq!("#ff8000".parse::<Color>().unwrap(), Color::new(255, 128, 0));
        assert_eq!("102030".parse::<Color>().unwrap(), Color::new(16, 32, 48));
        assert!("chartreuse-ish".parse::<Color>().is_err());
    }

    #[test]
    fn alpha_scales_to_bytes() {
        assert_eq!(Color::WHITE.with_alpha(0.5), Rgba([255, 255, 255, 128]));
        assert_eq!(Color::BLACK.opaque(), Rgba([0, 0, 0, 255]));
    }
}
