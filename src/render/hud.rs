// render/hud.rs

use crate::render::painter::{rgb, rgba, Color, Painter};

const BAR_HEIGHT: f32 = 4.0;
const BACKGROUND: Color = rgba(0, 0, 0, 153);
const GREEN: Color = rgb(34, 197, 94);
const AMBER: Color = rgb(245, 158, 11);
const RED: Color = rgb(239, 68, 68);

/// Fraction of max health remaining. A zero or negative max reads as an
/// empty bar rather than dividing into NaN.
pub fn health_fraction(health: f32, max_health: f32) -> f32 {
    if max_health <= 0.0 {
        0.0
    } else {
        (health / max_health).clamp(0.0, 1.0)
    }
}

/// Three readable tiers instead of a gradient. The boundary value belongs to
/// the lower tier: exactly 60% is amber, exactly 30% is red.
pub fn tier_color(fraction: f32) -> Color {
    if fraction > 0.6 {
        GREEN
    } else if fraction > 0.3 {
        AMBER
    } else {
        RED
    }
}

/// Status bar centered on `x`, shared by NPCs and harvestable entities.
pub fn draw_health_bar(
    painter: &mut Painter,
    x: f32,
    y: f32,
    health: f32,
    max_health: f32,
    width: f32,
) {
    let fraction = health_fraction(health, max_health);
    let left = x - width / 2.0;
    painter.fill_rect(left, y, width, BAR_HEIGHT, BACKGROUND);
    let filled = fraction * width;
    if filled > 0.0 {
        painter.fill_rect(left, y, filled, BAR_HEIGHT, tier_color(fraction));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_health_is_full_width_and_green() {
        assert_eq!(health_fraction(100.0, 100.0), 1.0);
        assert_eq!(tier_color(1.0), GREEN);
    }

    #[test]
    fn zero_health_is_zero_width() {
        assert_eq!(health_fraction(0.0, 100.0), 0.0);
    }

    #[test]
    fn zero_max_health_never_produces_nan() {
        let f = health_fraction(50.0, 0.0);
        assert_eq!(f, 0.0);
        assert!((f * 40.0).is_finite());
    }

    #[test]
    fn half_health_is_half_width_and_amber() {
        let f = health_fraction(50.0, 100.0);
        assert_eq!(f, 0.5);
        assert_eq!(tier_color(f), AMBER);
    }

    #[test]
    fn tier_boundaries_belong_to_the_lower_tier() {
        assert_eq!(tier_color(0.61), GREEN);
        assert_eq!(tier_color(0.6), AMBER);
        assert_eq!(tier_color(0.31), AMBER);
        assert_eq!(tier_color(0.3), RED);
        assert_eq!(tier_color(0.0), RED);
    }

    #[test]
    fn drawing_a_zero_max_bar_does_not_panic() {
        use crate::render::painter::Frame;
        let mut frame = Frame::new();
        frame.resize(64, 16);
        let mut p = Painter::new(&mut frame);
        draw_health_bar(&mut p, 32.0, 4.0, 10.0, 0.0, 40.0);
    }
}
