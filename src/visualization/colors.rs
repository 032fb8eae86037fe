//! Colour token parsing

use bevy::prelude::*;

use crate::config::MapStyle;
use crate::core::point::PointColor;

/// Used when a colour token is not valid hex.
pub const FALLBACK_COLOR: Color = Color::WHITE;

pub fn parse_color(token: &PointColor) -> Color {
    match Srgba::hex(token.as_str()) {
        Ok(srgba) => srgba.into(),
        Err(_) => FALLBACK_COLOR,
    }
}

pub fn globe_base_color(style: MapStyle) -> Color {
    match style {
        MapStyle::Satellite => Color::srgb(0.05, 0.18, 0.38),
        MapStyle::Dark => Color::srgb(0.04, 0.05, 0.07),
        MapStyle::Light => Color::srgb(0.82, 0.85, 0.88),
    }
}

pub fn graticule_color(style: MapStyle) -> Color {
    match style {
        MapStyle::Light => Color::srgba(0.2, 0.25, 0.3, 0.5),
        _ => Color::srgba(0.6, 0.8, 1.0, 0.25),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::topology::CENTROID_COLOR;

    #[test]
    fn test_parse_color_hex() {
        let color = parse_color(&PointColor::new("#ff0000"));
        let srgba = color.to_srgba();
        assert!((srgba.red - 1.0).abs() < 1e-6);
        assert!(srgba.green.abs() < 1e-6);
        assert!(srgba.blue.abs() < 1e-6);
    }

    #[test]
    fn test_parse_color_centroid_highlight() {
        let color = parse_color(&PointColor::new(CENTROID_COLOR));
        assert_ne!(color, FALLBACK_COLOR);
    }

    #[test]
    fn test_parse_color_invalid_falls_back() {
        assert_eq!(parse_color(&PointColor::new("teal-ish")), FALLBACK_COLOR);
    }
}
