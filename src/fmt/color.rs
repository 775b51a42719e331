//! 24-bit ANSI colors for console level tags.

use crate::level::Level;

/// An RGB foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Built-in levels from most to least severe; a level takes the first entry at or below it.
const PALETTE: &[(Level, Color)] = &[
    (Level::FATAL, Color::new(255, 121, 198)),
    (Level::ERROR, Color::new(255, 85, 85)),
    (Level::WARN, Color::new(241, 250, 140)),
    (Level::INFO, Color::new(80, 250, 123)),
    (Level::VERBOSE, Color::new(139, 233, 253)),
    (Level::DEBUG, Color::new(189, 147, 249)),
];

const BELOW_DEBUG: Color = Color::new(98, 114, 164);

impl Color {
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` (the `#` is optional). `None` for anything else.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let rgb = u32::from_str_radix(digits, 16).ok()?;
        let [_, r, g, b] = rgb.to_be_bytes();
        Some(Self::new(r, g, b))
    }

    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Default color for `level`.
    #[must_use]
    pub fn for_level(level: Level) -> Self {
        PALETTE
            .iter()
            .find(|(floor, _)| level >= *floor)
            .map_or(BELOW_DEBUG, |&(_, color)| color)
    }
}

#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    format!("{}{text}{}", color.fg_ansi(), Color::RESET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_needs_six_hex_digits() {
        assert_eq!(Color::from_hex("#ffb86c"), Some(Color::new(0xff, 0xb8, 0x6c)));
        assert_eq!(Color::from_hex("0a0b0c"), Some(Color::new(10, 11, 12)));
        assert_eq!(Color::from_hex("#fff"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex("#+f0000"), None);
    }

    #[test]
    fn custom_levels_take_the_nearest_lower_color() {
        let between = Level::custom(450, "NOTICE");
        assert_eq!(Color::for_level(between), Color::for_level(Level::INFO));
        assert_eq!(Color::for_level(Level::DEBUG2), BELOW_DEBUG);
        assert_ne!(Color::for_level(Level::FATAL), Color::for_level(Level::ERROR));
    }
}
