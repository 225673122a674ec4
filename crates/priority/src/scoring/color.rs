//! Blue-to-red colour scale for scores.

use palette::Srgb;

/// Colour at score 0 (#005DAA)
pub const LOW_PRIORITY_COLOR: Srgb<u8> = Srgb::new(0, 93, 170);

/// Colour at score 1 (#EF3E42)
pub const HIGH_PRIORITY_COLOR: Srgb<u8> = Srgb::new(239, 62, 66);

fn lerp_channel(start: u8, end: u8, t: f64) -> u8 {
    let value = start as f64 + (end as f64 - start as f64) * t;
    value.round().clamp(0.0, 255.0) as u8
}

/// Interpolate between the low and high priority colours.
///
/// The score is clamped to [0, 1] first; NaN maps to the low end. Unlike the
/// composite score itself, the colour never leaves the scale.
pub fn color_for(score: f64) -> Srgb<u8> {
    let t = if score.is_nan() { 0.0 } else { score.clamp(0.0, 1.0) };

    Srgb::new(
        lerp_channel(LOW_PRIORITY_COLOR.red, HIGH_PRIORITY_COLOR.red, t),
        lerp_channel(LOW_PRIORITY_COLOR.green, HIGH_PRIORITY_COLOR.green, t),
        lerp_channel(LOW_PRIORITY_COLOR.blue, HIGH_PRIORITY_COLOR.blue, t),
    )
}

/// CSS functional notation, e.g. `rgb(0, 93, 170)`
pub fn css_rgb(color: Srgb<u8>) -> String {
    format!("rgb({}, {}, {})", color.red, color.green, color.blue)
}

/// Hex notation, e.g. `#005DAA`
pub fn hex(color: Srgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", color.red, color.green, color.blue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(color_for(0.0), Srgb::new(0, 93, 170));
        assert_eq!(color_for(1.0), Srgb::new(239, 62, 66));
        assert_eq!(css_rgb(color_for(0.0)), "rgb(0, 93, 170)");
        assert_eq!(css_rgb(color_for(1.0)), "rgb(239, 62, 66)");
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(color_for(1.7), color_for(1.0));
        assert_eq!(color_for(42.0), color_for(1.0));
        assert_eq!(color_for(-0.3), color_for(0.0));
        assert_eq!(color_for(f64::NEG_INFINITY), color_for(0.0));
        assert_eq!(color_for(f64::NAN), color_for(0.0));
    }

    #[test]
    fn test_midpoint_rounds_per_channel() {
        // 0 + 239 * 0.5 = 119.5, 93 - 31 * 0.5 = 77.5, 170 - 104 * 0.5 = 118
        assert_eq!(color_for(0.5), Srgb::new(120, 78, 118));
    }

    #[test]
    fn test_hex() {
        assert_eq!(hex(LOW_PRIORITY_COLOR), "#005DAA");
        assert_eq!(hex(HIGH_PRIORITY_COLOR), "#EF3E42");
    }
}
