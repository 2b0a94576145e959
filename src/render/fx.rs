// render/fx.rs
//
// Screen- and world-space overlay effects. Everything here is a pure
// function of (state, wall-clock time): ripples and weather streaks derive
// their motion from time arithmetic instead of stateful particles, so a
// frame is reproducible from its inputs.

use glam::Vec2;

use crate::render::painter::{rgb, with_alpha, Color, Painter};
use crate::settings::GameSettings;
use crate::state::{Player, Weather, WeatherKind};

const RIPPLE: Color = rgb(200, 240, 255);
const VIGNETTE: Color = rgb(180, 0, 0);
const STREAK: Color = rgb(200, 220, 255);
const NIGHT: Color = rgb(0, 5, 30);

const RIPPLE_PERIOD_S: f64 = 1.5;

/// Three expanding rings around the swimmer, phase-offset by half a second.
/// Radius and fade both come from time modulo the period.
pub fn draw_swim_ripples(p: &mut Painter, center: Vec2, now_ms: f64) {
    for i in 0..3 {
        let t = ((now_ms / 1000.0 + i as f64 * 0.5) % RIPPLE_PERIOD_S) as f32;
        let r = t * 40.0;
        if r <= 0.0 {
            continue;
        }
        let alpha = (1.0 - t / RIPPLE_PERIOD_S as f32) * 0.5;
        p.stroke_ellipse(center.x, center.y, r, r * 0.5, 2.0, with_alpha(RIPPLE, alpha));
    }
}

/// Pulsing red edge vignette while a vital stat is critical.
pub fn draw_critical_vignette(p: &mut Painter, player: &Player, width: f32, height: f32, now_ms: f64) {
    let critical = player.health < 25.0 || player.hunger < 15.0 || player.thirst < 15.0;
    if !critical {
        return;
    }
    let base = if player.health < 25.0 { 0.3 } else { 0.15 };
    let intensity = base + (((now_ms / 200.0).sin() + 1.0) * 0.1) as f32;
    p.radial_overlay(
        width / 2.0,
        height / 2.0,
        width / 4.0,
        width / 0.8,
        VIGNETTE,
        intensity,
    );
}

/// Diagonal precipitation streaks. Position is a pseudo-periodic function of
/// (index, time): the prime strides spread streaks across the screen and the
/// time terms shear them downward, so no per-streak state exists.
pub fn draw_weather_streaks(
    p: &mut Painter,
    weather: &Weather,
    settings: &GameSettings,
    width: f32,
    height: f32,
    now_ms: f64,
) {
    if weather.kind == WeatherKind::Clear || !settings.weather_enabled {
        return;
    }
    let count = settings.graphics_quality.streak_count();
    let color = with_alpha(STREAK, 0.3 * weather.intensity.clamp(0.0, 1.0));
    for i in 0..count {
        let x = ((i as f64 * 137.0 + now_ms * 1.5) % width as f64) as f32;
        let y = ((i as f64 * 211.0 + now_ms * 5.0) % height as f64) as f32;
        p.line(Vec2::new(x, y), Vec2::new(x - 3.0, y + 15.0), 1.0, color);
    }
}

/// Ambient darkness: zero at noon (720), deepest at midnight, quadratic in
/// between.
pub fn draw_day_night_tint(p: &mut Painter, day_time: f32) {
    let day_factor = ((day_time - 720.0).abs() / 720.0).powi(2);
    let alpha = day_factor * 0.45;
    if alpha > 0.0 {
        p.fill_screen(with_alpha(NIGHT, alpha));
    }
}

/// Vertical bob offset for the player model; faster and deeper while
/// swimming.
pub fn bob_offset(settings: &GameSettings, velocity: f32, swimming: bool, now_ms: f64) -> f32 {
    if !settings.camera_bob || velocity <= 0.1 {
        return 0.0;
    }
    let (freq, amp) = if swimming { (100.0, 6.0) } else { (150.0, 4.0) };
    ((now_ms / freq).sin() * amp) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::painter::Frame;

    fn dark_frame(w: u32, h: u32) -> Frame {
        let mut f = Frame::new();
        f.resize(w, h);
        f.clear(rgb(100, 100, 100));
        f
    }

    #[test]
    fn noon_applies_no_tint_and_midnight_darkens() {
        let mut f = dark_frame(8, 8);
        let mut p = Painter::new(&mut f);
        draw_day_night_tint(&mut p, 720.0);
        assert_eq!(f.pixel(4, 4), rgb(100, 100, 100));

        let mut p = Painter::new(&mut f);
        draw_day_night_tint(&mut p, 0.0);
        let px = f.pixel(4, 4);
        assert!(px[0] < 100 && px[1] < 100, "midnight should darken: {px:?}");
    }

    #[test]
    fn vignette_only_fires_when_a_vital_is_critical() {
        let healthy = Player::default();
        let mut f = dark_frame(16, 16);
        let mut p = Painter::new(&mut f);
        draw_critical_vignette(&mut p, &healthy, 16.0, 16.0, 0.0);
        assert_eq!(f.pixel(0, 0), rgb(100, 100, 100));

        let starving = Player {
            hunger: 5.0,
            ..Player::default()
        };
        let mut p = Painter::new(&mut f);
        draw_critical_vignette(&mut p, &starving, 16.0, 16.0, 0.0);
        let corner = f.pixel(0, 0);
        assert!(corner[0] > 100, "corner should redden: {corner:?}");
    }

    #[test]
    fn streaks_are_deterministic_in_time() {
        let settings = GameSettings::default();
        let weather = Weather {
            kind: WeatherKind::Rain,
            intensity: 1.0,
        };
        let render = || {
            let mut f = dark_frame(64, 64);
            let mut p = Painter::new(&mut f);
            draw_weather_streaks(&mut p, &weather, &settings, 64.0, 64.0, 12345.0);
            f.data().to_vec()
        };
        assert_eq!(render(), render());
    }

    #[test]
    fn clear_weather_draws_no_streaks() {
        let settings = GameSettings::default();
        let mut f = dark_frame(32, 32);
        let mut p = Painter::new(&mut f);
        draw_weather_streaks(&mut p, &Weather::clear(), &settings, 32.0, 32.0, 999.0);
        for y in 0..32 {
            for x in 0..32 {
                assert_eq!(f.pixel(x, y), rgb(100, 100, 100));
            }
        }
    }

    #[test]
    fn bob_requires_movement_and_the_toggle() {
        let mut settings = GameSettings::default();
        assert_eq!(bob_offset(&settings, 0.0, false, 500.0), 0.0);
        assert_ne!(bob_offset(&settings, 5.5, false, 500.0), 0.0);
        settings.camera_bob = false;
        assert_eq!(bob_offset(&settings, 5.5, false, 500.0), 0.0);
    }
}
