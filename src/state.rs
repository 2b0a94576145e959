// src/state.rs
//
// The game-state snapshot the renderer consumes. The renderer only ever
// borrows these immutably; ownership and mutation live with the host
// (simulation, AI, input) outside the render core.

use glam::Vec2;

use crate::settings::GameSettings;

/// Side length of the square world, in world units.
pub const MAP_SIZE: f32 = 12000.0;

/// Minutes in a full day cycle; noon is 720.
pub const DAY_LENGTH_MINUTES: f32 = 1440.0;

#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub rotation: f32,
    pub health: f32,
    pub hunger: f32,
    pub thirst: f32,
    pub crouching: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::splat(MAP_SIZE / 2.0),
            rotation: 0.0,
            health: 100.0,
            hunger: 100.0,
            thirst: 100.0,
            crouching: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Tree,
    Rock,
    GroundWood,
    GroundStone,
}

/// Harvestable node or dropped resource. Static until external logic depletes
/// and removes it.
#[derive(Debug, Clone)]
pub struct Entity {
    pub pos: Vec2,
    pub kind: EntityKind,
    pub health: f32,
    pub max_health: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NpcKind {
    Bear,
    Wolf,
    Boar,
    Chicken,
}

#[derive(Debug, Clone)]
pub struct Npc {
    pub pos: Vec2,
    pub rotation: f32,
    pub kind: NpcKind,
    pub health: f32,
    pub max_health: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingKind {
    Foundation,
    Wall,
}

/// Grid-aligned placed structure; immutable once placed, drawn unrotated.
#[derive(Debug, Clone)]
pub struct BuildingPart {
    pub pos: Vec2,
    pub kind: BuildingKind,
}

/// Procedural glyph for a held item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemIcon {
    Rock,
    Hatchet,
    Pickaxe,
    Torch,
}

#[derive(Debug, Clone)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub icon: ItemIcon,
    pub durability: f32,
    pub max_durability: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherKind {
    Clear,
    Rain,
    Storm,
}

#[derive(Debug, Clone)]
pub struct Weather {
    pub kind: WeatherKind,
    /// Streak density/opacity scale in [0, 1].
    pub intensity: f32,
}

impl Weather {
    pub fn clear() -> Self {
        Self {
            kind: WeatherKind::Clear,
            intensity: 0.0,
        }
    }
}

/// Read-only snapshot handed to the renderer every frame.
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Player,
    pub entities: Vec<Entity>,
    pub building_parts: Vec<BuildingPart>,
    pub npcs: Vec<Npc>,
    /// Clock value in minutes, [0, 1440).
    pub day_time: f32,
    pub weather: Weather,
    pub inventory: Vec<Item>,
    pub settings: GameSettings,
}

impl GameState {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            player: Player::default(),
            entities: Vec::new(),
            building_parts: Vec::new(),
            npcs: Vec::new(),
            day_time: 720.0,
            weather: Weather::clear(),
            inventory: Vec::new(),
            settings,
        }
    }

    pub fn active_item(&self, id: Option<&str>) -> Option<&Item> {
        let id = id?;
        self.inventory.iter().find(|item| item.id == id)
    }
}

/// Input/animation scalars that accompany the state snapshot but live outside
/// the simulation proper.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub active_item: Option<String>,
    /// Attack animation progress, 0..1.
    pub swing_progress: f32,
    pub velocity: f32,
    pub swimming: bool,
}
