// render/scene.rs
//
// Frame compositor: turns one game-state snapshot into one finished RGBA
// frame, in a fixed layer order. Owns the only cross-frame mutable pieces,
// the terrain raster cache and the frame buffer itself.

use glam::Vec2;

use crate::render::actors::{
    draw_building_part, draw_entity, draw_npc, draw_player, npc_bar_layout, PlayerPose,
};
use crate::render::camera::Camera;
use crate::render::fx::{
    bob_offset, draw_critical_vignette, draw_day_night_tint, draw_swim_ripples,
    draw_weather_streaks,
};
use crate::render::hud::draw_health_bar;
use crate::render::painter::{Frame, Painter};
use crate::render::terrain::TerrainBuffer;
use crate::state::{FrameInput, GameState};

pub struct SceneRenderer {
    terrain: TerrainBuffer,
    frame: Frame,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self {
            terrain: TerrainBuffer::new(),
            frame: Frame::new(),
        }
    }

    /// Last rendered frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Rasterize one frame. `now_ms` drives every time-based effect; the
    /// caller owns the clock, which keeps frames reproducible under test.
    pub fn render(
        &mut self,
        state: &GameState,
        input: &FrameInput,
        width: u32,
        height: u32,
        now_ms: f64,
    ) -> &Frame {
        let (width, height) = (width.max(1), height.max(1));
        self.frame.resize(width, height);
        let (w, h) = (width as f32, height as f32);

        let settings = &state.settings;
        let camera = Camera::new(settings.fov, Vec2::new(w, h), state.player.pos);
        let view_distance = settings.view_distance;

        // Terrain base layer, then stretch over the whole frame.
        self.terrain
            .update(&camera, settings.terrain_resolution_factor());
        self.terrain.blit_into(&mut self.frame);

        let mut p = Painter::new(&mut self.frame);

        // World-space pass under the camera transform.
        p.save();
        p.translate(w / 2.0, h / 2.0);
        p.scale(camera.zoom);
        p.translate(-state.player.pos.x, -state.player.pos.y);

        for ent in &state.entities {
            if camera.in_view(ent.pos, view_distance) {
                draw_entity(&mut p, ent);
            }
        }

        for part in &state.building_parts {
            if camera.in_view(part.pos, view_distance) {
                draw_building_part(&mut p, part);
            }
        }

        // NPCs always show status, damaged or not.
        for npc in &state.npcs {
            if !camera.in_view(npc.pos, view_distance) {
                continue;
            }
            draw_npc(&mut p, npc);
            let (bar_width, bar_dy) = npc_bar_layout(npc.kind);
            draw_health_bar(
                &mut p,
                npc.pos.x,
                npc.pos.y + bar_dy,
                npc.health,
                npc.max_health,
                bar_width,
            );
        }

        if input.swimming {
            draw_swim_ripples(&mut p, state.player.pos, now_ms);
        }

        p.restore();

        // The camera is locked to the player, so the player draws in screen
        // space at the exact viewport center.
        let active_icon = state
            .active_item(input.active_item.as_deref())
            .map(|item| item.icon);
        let pose = PlayerPose {
            crouching: state.player.crouching,
            rotation: state.player.rotation,
            swing: input.swing_progress,
            item: active_icon,
            bob_offset: bob_offset(settings, input.velocity, input.swimming, now_ms),
            swimming: input.swimming,
        };
        draw_player(&mut p, Vec2::new(w / 2.0, h / 2.0), &pose);

        // Screen-space overlays, back to front.
        draw_critical_vignette(&mut p, &state.player, w, h, now_ms);
        draw_weather_streaks(&mut p, &state.weather, settings, w, h, now_ms);
        draw_day_night_tint(&mut p, state.day_time);

        &self.frame
    }
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameSettings;
    use crate::state::{Entity, EntityKind, Item, ItemIcon, Npc, NpcKind, Weather, WeatherKind};

    fn synthetic_state() -> GameState {
        let mut state = GameState::new(GameSettings::default());
        state.entities.push(Entity {
            pos: state.player.pos + Vec2::new(60.0, 0.0),
            kind: EntityKind::Tree,
            health: 40.0,
            max_health: 100.0,
        });
        state.npcs.push(Npc {
            pos: state.player.pos + Vec2::new(-80.0, 30.0),
            rotation: 1.0,
            kind: NpcKind::Bear,
            health: 80.0,
            max_health: 100.0,
        });
        state.inventory.push(Item {
            id: "hatchet".into(),
            name: "Stone Hatchet".into(),
            icon: ItemIcon::Hatchet,
            durability: 100.0,
            max_durability: 100.0,
        });
        state.weather = Weather {
            kind: WeatherKind::Rain,
            intensity: 0.8,
        };
        state
    }

    #[test]
    fn a_full_frame_renders_opaque() {
        let state = synthetic_state();
        let input = FrameInput {
            active_item: Some("hatchet".into()),
            swing_progress: 0.5,
            velocity: 5.5,
            swimming: false,
        };
        let mut scene = SceneRenderer::new();
        let frame = scene.render(&state, &input, 160, 120, 1234.0);
        assert_eq!((frame.width(), frame.height()), (160, 120));
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                assert_eq!(frame.pixel(x, y)[3], 255);
            }
        }
    }

    #[test]
    fn identical_inputs_produce_identical_frames() {
        let state = synthetic_state();
        let input = FrameInput::default();
        let mut a = SceneRenderer::new();
        let mut b = SceneRenderer::new();
        let fa = a.render(&state, &input, 96, 64, 777.0).data().to_vec();
        let fb = b.render(&state, &input, 96, 64, 777.0).data().to_vec();
        assert_eq!(fa, fb);
    }

    #[test]
    fn swimming_suppresses_nothing_and_renders() {
        let mut state = synthetic_state();
        state.player.health = 10.0;
        let input = FrameInput {
            swimming: true,
            velocity: 3.0,
            ..FrameInput::default()
        };
        let mut scene = SceneRenderer::new();
        let frame = scene.render(&state, &input, 80, 60, 2500.0);
        assert_eq!(frame.pixel(40, 30)[3], 255);
    }

    #[test]
    fn a_zero_max_health_npc_does_not_poison_the_frame() {
        let mut state = synthetic_state();
        state.npcs.push(Npc {
            pos: state.player.pos + Vec2::new(20.0, 20.0),
            rotation: 0.0,
            kind: NpcKind::Chicken,
            health: 0.0,
            max_health: 0.0,
        });
        let mut scene = SceneRenderer::new();
        scene.render(&state, &FrameInput::default(), 64, 64, 10.0);
    }
}
