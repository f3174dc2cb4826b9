//! Hex color decoding and the mapping from a color to dye target attributes.

use crate::domain::model::{Reflect, Rgb, TargetColor};
use crate::utils::error::{Result, ShapeError};

/// Blue/red average above green by more than this counts as a cold reflect.
const COLD_TONE_THRESHOLD: f64 = 30.0;

/// Brightness units per level on the 1-10 scale.
const BRIGHTNESS_PER_LEVEL: f64 = 25.5;

/// Parses `#rrggbb` or `rrggbb`, case-insensitive.
pub fn parse_hex(input: &str) -> Result<Rgb> {
    let trimmed = input.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if hex.len() != 6 {
        return Err(ShapeError::InvalidColorError {
            input: input.to_string(),
            reason: format!("expected 6 hex digits, got {}", hex.len()),
        });
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ShapeError::InvalidColorError {
            input: input.to_string(),
            reason: "contains non-hex characters".to_string(),
        });
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|e| ShapeError::InvalidColorError {
            input: input.to_string(),
            reason: e.to_string(),
        })
    };

    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Derives the target level and reflect from a decoded color.
pub fn target_from_rgb(rgb: Rgb) -> TargetColor {
    let r = f64::from(rgb.r);
    let g = f64::from(rgb.g);
    let b = f64::from(rgb.b);

    let cold_tone_index = (b + r) / 2.0 - g;
    let target_reflect = if cold_tone_index > COLD_TONE_THRESHOLD {
        Reflect::Cold
    } else {
        Reflect::Warm
    };

    let brightness = (r + g + b) / 3.0;
    let target_level = (brightness / BRIGHTNESS_PER_LEVEL).round().clamp(1.0, 10.0) as u8;

    TargetColor {
        target_level,
        target_reflect,
    }
}

pub fn get_target_color(input: &str) -> Result<TargetColor> {
    let rgb = parse_hex(input)?;
    let target = target_from_rgb(rgb);
    tracing::debug!(
        "Color {} -> level {}, reflect {}",
        input,
        target.target_level,
        target.target_reflect
    );
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dream_purple_fixture() {
        // (234 + 147) / 2 - 51 = 139.5; (147 + 51 + 234) / 3 = 144 -> 5.65
        let target = get_target_color("#9333ea").unwrap();
        assert_eq!(target.target_level, 6);
        assert_eq!(target.target_reflect, Reflect::Cold);
    }

    #[test]
    fn test_catalog_fixtures() {
        let cases = [
            ("#3b82f6", 6, Reflect::Warm), // index 22.5 stays warm
            ("#d1d5db", 8, Reflect::Warm),
            ("#ef4444", 5, Reflect::Cold),
            ("#14b8a6", 5, Reflect::Warm),
            ("#f59e0b", 5, Reflect::Warm),
        ];
        for (hex, level, reflect) in cases {
            let target = get_target_color(hex).unwrap();
            assert_eq!(target.target_level, level, "level for {}", hex);
            assert_eq!(target.target_reflect, reflect, "reflect for {}", hex);
        }
    }

    #[test]
    fn test_cold_threshold_is_exclusive() {
        assert_eq!(
            target_from_rgb(Rgb::new(0, 0, 60)).target_reflect,
            Reflect::Warm
        );
        assert_eq!(
            target_from_rgb(Rgb::new(0, 0, 62)).target_reflect,
            Reflect::Cold
        );
    }

    #[test]
    fn test_level_is_clamped() {
        assert_eq!(target_from_rgb(Rgb::new(0, 0, 0)).target_level, 1);
        assert_eq!(target_from_rgb(Rgb::new(255, 255, 255)).target_level, 10);
    }

    #[test]
    fn test_parse_hex_accepts_variants() {
        assert_eq!(parse_hex("9333EA").unwrap(), Rgb::new(147, 51, 234));
        assert_eq!(parse_hex("  #9333ea ").unwrap(), Rgb::new(147, 51, 234));
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        for bad in ["", "#", "#fff", "#9333ea00", "#93z3ea", "#９３３ea"] {
            assert!(
                matches!(parse_hex(bad), Err(ShapeError::InvalidColorError { .. })),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_rgb_to_hex_pads() {
        assert_eq!(rgb_to_hex(147, 51, 234), "#9333ea");
        assert_eq!(rgb_to_hex(0, 5, 255), "#0005ff");
    }
}
