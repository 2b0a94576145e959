// src/demo.rs
//
// A self-contained host so the binary shows a living scene: a seeded world
// scatter, a trivial walk/attack loop and a drifting day/weather clock. None
// of this is simulation the renderer depends on; it exists only to feed the
// snapshot boundary.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use winit::keyboard::KeyCode;

use crate::advisor::{fetch_hint, CannedHints, HintRequest};
use crate::app::GameHost;
use crate::render::terrain::{height_at, WATER_LEVEL};
use crate::settings::GameSettings;
use crate::state::{
    BuildingKind, BuildingPart, Entity, EntityKind, FrameInput, GameState, Item, ItemIcon, Npc,
    NpcKind, Weather, WeatherKind, DAY_LENGTH_MINUTES, MAP_SIZE,
};

const WORLD_SEED: u64 = 0x5272_5354_4544;
const RESOURCE_COUNT: usize = 500;
const NPC_COUNT: usize = 48;
/// World units per second at the original 5.5-per-tick, 60-tick pace.
const WALK_SPEED: f32 = 5.5 * 60.0;
/// Game minutes that pass per real second.
const CLOCK_RATE: f32 = 2.4;
const HINT_INTERVAL_S: f32 = 45.0;

pub struct DemoGame {
    state: GameState,
    move_keys: [bool; 4],
    swing: f32,
    active_item: Option<String>,
    hints: CannedHints,
    hint_cooldown: f32,
    last_hint: String,
    weather_clock: f32,
}

impl DemoGame {
    pub fn new(settings: GameSettings) -> Self {
        let mut state = GameState::new(settings);
        let mut rng = SmallRng::seed_from_u64(WORLD_SEED);

        scatter_resources(&mut state, &mut rng);
        scatter_npcs(&mut state, &mut rng);
        place_camp(&mut state);

        state.inventory = vec![
            Item {
                id: "rock_tool".into(),
                name: "Rock".into(),
                icon: ItemIcon::Rock,
                durability: 50.0,
                max_durability: 50.0,
            },
            Item {
                id: "hatchet".into(),
                name: "Stone Hatchet".into(),
                icon: ItemIcon::Hatchet,
                durability: 100.0,
                max_durability: 100.0,
            },
            Item {
                id: "pickaxe".into(),
                name: "Stone Pickaxe".into(),
                icon: ItemIcon::Pickaxe,
                durability: 100.0,
                max_durability: 100.0,
            },
            Item {
                id: "torch".into(),
                name: "Torch".into(),
                icon: ItemIcon::Torch,
                durability: 80.0,
                max_durability: 80.0,
            },
        ];

        Self {
            state,
            move_keys: [false; 4],
            swing: 0.0,
            active_item: Some("rock_tool".into()),
            hints: CannedHints,
            hint_cooldown: 5.0,
            last_hint: String::new(),
            weather_clock: 0.0,
        }
    }

    pub fn last_hint(&self) -> &str {
        &self.last_hint
    }

    fn move_direction(&self) -> Vec2 {
        let [up, down, left, right] = self.move_keys;
        let mut dir = Vec2::ZERO;
        if up {
            dir.y -= 1.0;
        }
        if down {
            dir.y += 1.0;
        }
        if left {
            dir.x -= 1.0;
        }
        if right {
            dir.x += 1.0;
        }
        if dir == Vec2::ZERO {
            dir
        } else {
            dir.normalize()
        }
    }

    fn swimming(&self) -> bool {
        let p = self.state.player.pos;
        height_at(p.x, p.y) < WATER_LEVEL
    }
}

impl GameHost for DemoGame {
    fn title(&self) -> &str {
        "RUSTED"
    }

    fn update(&mut self, dt: f32) {
        let dir = self.move_direction();
        if dir != Vec2::ZERO {
            let speed = if self.swimming() {
                WALK_SPEED * 0.5
            } else {
                WALK_SPEED
            };
            let player = &mut self.state.player;
            player.pos = (player.pos + dir * speed * dt)
                .clamp(Vec2::ZERO, Vec2::splat(MAP_SIZE));
            player.rotation = dir.y.atan2(dir.x);
        }

        self.swing = (self.swing - dt * 3.0).max(0.0);

        self.state.day_time = (self.state.day_time + dt * CLOCK_RATE) % DAY_LENGTH_MINUTES;

        // Weather drifts on a slow cycle: clear, then rain that ramps up and
        // back down.
        self.weather_clock = (self.weather_clock + dt) % 180.0;
        self.state.weather = if self.weather_clock < 90.0 {
            Weather::clear()
        } else {
            let ramp = 1.0 - ((self.weather_clock - 135.0).abs() / 45.0);
            Weather {
                kind: WeatherKind::Rain,
                intensity: ramp.clamp(0.0, 1.0),
            }
        };

        self.hint_cooldown -= dt;
        if self.hint_cooldown <= 0.0 {
            self.hint_cooldown = HINT_INTERVAL_S;
            let req = HintRequest::for_player(&self.state.player);
            self.last_hint = fetch_hint(&mut self.hints, &req);
            log::info!("{}", self.last_hint);
        }
    }

    fn state(&self) -> &GameState {
        &self.state
    }

    fn frame_input(&self) -> FrameInput {
        FrameInput {
            active_item: self.active_item.clone(),
            swing_progress: self.swing,
            velocity: if self.move_direction() == Vec2::ZERO {
                0.0
            } else {
                5.5
            },
            swimming: self.swimming(),
        }
    }

    fn on_action(&mut self, _x: f64, _y: f64) {
        self.swing = 1.0;
    }

    fn on_key(&mut self, key: KeyCode, pressed: bool) {
        match key {
            KeyCode::KeyW | KeyCode::ArrowUp => self.move_keys[0] = pressed,
            KeyCode::KeyS | KeyCode::ArrowDown => self.move_keys[1] = pressed,
            KeyCode::KeyA | KeyCode::ArrowLeft => self.move_keys[2] = pressed,
            KeyCode::KeyD | KeyCode::ArrowRight => self.move_keys[3] = pressed,
            KeyCode::KeyC if pressed => {
                self.state.player.crouching = !self.state.player.crouching;
            }
            KeyCode::Digit1 if pressed => self.active_item = Some("rock_tool".into()),
            KeyCode::Digit2 if pressed => self.active_item = Some("hatchet".into()),
            KeyCode::Digit3 if pressed => self.active_item = Some("pickaxe".into()),
            KeyCode::Digit4 if pressed => self.active_item = Some("torch".into()),
            _ => {}
        }
    }
}

/// Random position on dry land near the map interior.
fn land_position(rng: &mut SmallRng) -> Option<Vec2> {
    for _ in 0..32 {
        let pos = Vec2::new(
            rng.gen_range(MAP_SIZE * 0.1..MAP_SIZE * 0.9),
            rng.gen_range(MAP_SIZE * 0.1..MAP_SIZE * 0.9),
        );
        if height_at(pos.x, pos.y) > 0.22 {
            return Some(pos);
        }
    }
    None
}

fn scatter_resources(state: &mut GameState, rng: &mut SmallRng) {
    for _ in 0..RESOURCE_COUNT {
        let Some(pos) = land_position(rng) else {
            continue;
        };
        let h = height_at(pos.x, pos.y);
        let kind = match rng.gen_range(0..10) {
            // Trees favor the higher forest band.
            0..=4 if h > 0.45 => EntityKind::Tree,
            0..=4 => EntityKind::GroundWood,
            5..=7 => EntityKind::Rock,
            8 => EntityKind::GroundWood,
            _ => EntityKind::GroundStone,
        };
        let max_health = match kind {
            EntityKind::Tree => 100.0,
            EntityKind::Rock => 150.0,
            _ => 1.0,
        };
        state.entities.push(Entity {
            pos,
            kind,
            health: max_health,
            max_health,
        });
    }
    log::info!("Scattered {} resource nodes", state.entities.len());
}

fn scatter_npcs(state: &mut GameState, rng: &mut SmallRng) {
    for _ in 0..NPC_COUNT {
        let Some(pos) = land_position(rng) else {
            continue;
        };
        let (kind, max_health) = match rng.gen_range(0..10) {
            0..=1 => (NpcKind::Bear, 250.0),
            2..=4 => (NpcKind::Wolf, 120.0),
            5..=7 => (NpcKind::Boar, 80.0),
            _ => (NpcKind::Chicken, 20.0),
        };
        state.npcs.push(Npc {
            pos,
            rotation: rng.gen_range(0.0..std::f32::consts::TAU),
            kind,
            health: max_health,
            max_health,
        });
    }
    log::info!("Spawned {} animals", state.npcs.len());
}

/// A small starter camp next to spawn so buildings are on screen.
fn place_camp(state: &mut GameState) {
    let spawn = state.player.pos;
    state.building_parts.push(BuildingPart {
        pos: spawn + Vec2::new(200.0, -150.0),
        kind: BuildingKind::Foundation,
    });
    state.building_parts.push(BuildingPart {
        pos: spawn + Vec2::new(200.0, -195.0),
        kind: BuildingKind::Wall,
    });
    state.building_parts.push(BuildingPart {
        pos: spawn + Vec2::new(290.0, -150.0),
        kind: BuildingKind::Wall,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worldgen_is_deterministic() {
        let a = DemoGame::new(GameSettings::default());
        let b = DemoGame::new(GameSettings::default());
        assert_eq!(a.state.entities.len(), b.state.entities.len());
        assert_eq!(a.state.npcs.len(), b.state.npcs.len());
        if let (Some(ea), Some(eb)) = (a.state.entities.first(), b.state.entities.first()) {
            assert_eq!(ea.pos, eb.pos);
        }
    }

    #[test]
    fn resources_land_on_dry_ground() {
        let game = DemoGame::new(GameSettings::default());
        for ent in &game.state.entities {
            assert!(height_at(ent.pos.x, ent.pos.y) > WATER_LEVEL);
        }
    }

    #[test]
    fn the_clock_wraps_at_a_full_day() {
        let mut game = DemoGame::new(GameSettings::default());
        game.state.day_time = DAY_LENGTH_MINUTES - 0.1;
        game.update(1.0);
        assert!(game.state.day_time < DAY_LENGTH_MINUTES);
        assert!(game.state.day_time >= 0.0);
    }

    #[test]
    fn a_swing_decays_back_to_rest() {
        let mut game = DemoGame::new(GameSettings::default());
        game.on_action(10.0, 10.0);
        assert_eq!(game.frame_input().swing_progress, 1.0);
        game.update(1.0);
        assert_eq!(game.frame_input().swing_progress, 0.0);
    }
}
