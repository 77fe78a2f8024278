//! Hex color parsing and formatting for the `#RRGGBB` strings the tool
//! state carries.

use crate::error::ColorParseError;

/// Color new strokes are painted with until the user picks another one.
pub const DEFAULT_COLOR: &str = "#000000";

/// Background of the ink surface. The eraser paints with this color rather
/// than removing pixels.
pub const BACKGROUND_COLOR: &str = "#FFFFFF";

/// Parses a `#RRGGBB` string into its three channel bytes.
pub fn parse_hex(hex: &str) -> Result<[u8; 3], ColorParseError> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| ColorParseError::Malformed(hex.to_owned()))?;

    if digits.len() != 6 || !digits.is_ascii() {
        return Err(ColorParseError::Malformed(hex.to_owned()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| ColorParseError::Malformed(hex.to_owned()))
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Formats channel bytes as an uppercase `#RRGGBB` string.
pub fn format_hex(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}
