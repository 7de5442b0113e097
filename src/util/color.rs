// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Color parsing utilities.
//!
//! Theme colors are stored as hex strings in the catalog data; this
//! module converts them to egui colors for rendering.

use egui::Color32;

/// Parse a `#rrggbb` hex string into an egui color.
///
/// Malformed strings fall back to `fallback` rather than erroring; a bad
/// theme color is a cosmetic problem, not a failure.
pub fn parse_hex(hex: &str, fallback: Color32) -> Color32 {
    let digits = match hex.strip_prefix('#') {
        Some(d) if d.len() == 6 && d.is_ascii() => d,
        _ => return fallback,
    };

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => Color32::from_rgb(r, g, b),
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(parse_hex("#fafafa", Color32::BLACK), Color32::from_rgb(0xfa, 0xfa, 0xfa));
        assert_eq!(parse_hex("#2d5a27", Color32::BLACK), Color32::from_rgb(0x2d, 0x5a, 0x27));
        assert_eq!(parse_hex("#000000", Color32::WHITE), Color32::from_rgb(0, 0, 0));
    }

    #[test]
    fn malformed_strings_use_fallback() {
        for bad in ["", "#fff", "fafafa", "#gggggg", "#fafafa00"] {
            assert_eq!(parse_hex(bad, Color32::RED), Color32::RED);
        }
    }
}
