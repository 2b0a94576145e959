// render/actors.rs
//
// Procedural vector sprites. Every routine is a pure draw over the painter:
// translate to the actor, rotate to its heading, lay down a fixed shape
// composition, restore. Species/kind dispatch is a closed enum match; there
// is no shared sprite state beyond the ground-shadow helper.

use glam::Vec2;

use crate::render::hud::draw_health_bar;
use crate::render::painter::{rgb, rgba, Color, Painter};
use crate::state::{BuildingKind, BuildingPart, Entity, EntityKind, ItemIcon, Npc, NpcKind};

const BLACK: Color = rgb(0, 0, 0);
const SKIN: Color = rgb(241, 194, 125);
const SHIRT: Color = rgb(51, 65, 85);
const PLAYER_SHADOW: Color = rgba(0, 0, 0, 77);
const GROUND_SHADOW: Color = rgba(0, 0, 0, 51);
const WOOD: Color = rgb(63, 43, 29);

#[derive(Debug, Clone, Default)]
pub struct PlayerPose {
    pub crouching: bool,
    pub rotation: f32,
    /// Attack animation progress, 0..1; amplified on the weapon arm only.
    pub swing: f32,
    pub item: Option<ItemIcon>,
    /// Vertical bob from movement; the shadow stays pinned to the ground.
    pub bob_offset: f32,
    pub swimming: bool,
}

pub fn draw_player(p: &mut Painter, pos: Vec2, pose: &PlayerPose) {
    p.save();
    // Sit lower in the water while swimming.
    let immersion = if pose.swimming { 10.0 } else { 0.0 };
    p.translate(pos.x, pos.y + pose.bob_offset + immersion);
    p.rotate(pose.rotation);

    if !pose.swimming {
        let rx = if pose.crouching { 14.0 } else { 18.0 };
        p.fill_ellipse(0.0, -pose.bob_offset, rx, 12.0, PLAYER_SHADOW);
    }

    let (rx, ry) = if pose.crouching {
        (20.0, 15.0)
    } else {
        (18.0, 18.0)
    };
    p.fill_ellipse(0.0, 0.0, rx, ry, SHIRT);

    draw_arm(p, pose, true);
    draw_arm(p, pose, false);

    let head_x = if pose.crouching { 5.0 } else { 0.0 };
    p.fill_circle(head_x, 0.0, 11.0, SKIN);

    // Eyes face forward along +x; mouth is a short bar past them.
    p.fill_circle(head_x + 5.0, -3.0, 1.5, BLACK);
    p.fill_circle(head_x + 5.0, 3.0, 1.5, BLACK);
    p.line(
        Vec2::new(head_x + 8.0, -2.0),
        Vec2::new(head_x + 8.0, 2.0),
        1.0,
        BLACK,
    );

    p.restore();
}

fn draw_arm(p: &mut Painter, pose: &PlayerPose, right: bool) {
    p.save();
    let angle = match (pose.crouching, right) {
        (true, true) => -0.15,
        (true, false) => 0.15,
        (false, true) => -0.5,
        (false, false) => 0.5,
    };
    let pull_in = if pose.crouching { -4.0 } else { 0.0 };
    p.rotate(angle);
    p.fill_rect(16.0 + pull_in, if right { -4.0 } else { -8.0 }, 10.0, 8.0, SKIN);

    if right {
        if let Some(icon) = pose.item {
            p.save();
            p.translate(22.0 + pull_in, 0.0);
            p.rotate(pose.swing * 2.5);
            draw_item_icon(p, icon);
            p.restore();
        }
    }
    p.restore();
}

/// Held-item glyph drawn around the hand origin.
fn draw_item_icon(p: &mut Painter, icon: ItemIcon) {
    const HANDLE: Color = rgb(120, 80, 40);
    const STONE: Color = rgb(130, 130, 140);
    const FLAME: Color = rgb(251, 191, 36);
    match icon {
        ItemIcon::Rock => {
            p.fill_circle(4.0, 0.0, 8.0, STONE);
            p.fill_circle(1.0, -3.0, 3.0, rgb(170, 170, 180));
        }
        ItemIcon::Hatchet => {
            p.fill_rect(0.0, -2.0, 14.0, 4.0, HANDLE);
            p.fill_triangle(
                Vec2::new(12.0, -8.0),
                Vec2::new(20.0, 0.0),
                Vec2::new(12.0, 6.0),
                STONE,
            );
        }
        ItemIcon::Pickaxe => {
            p.fill_rect(0.0, -2.0, 14.0, 4.0, HANDLE);
            p.fill_triangle(
                Vec2::new(10.0, -9.0),
                Vec2::new(20.0, 0.0),
                Vec2::new(14.0, 0.0),
                STONE,
            );
            p.fill_triangle(
                Vec2::new(10.0, 9.0),
                Vec2::new(20.0, 0.0),
                Vec2::new(14.0, 0.0),
                STONE,
            );
        }
        ItemIcon::Torch => {
            p.fill_rect(0.0, -1.5, 12.0, 3.0, HANDLE);
            p.fill_circle(14.0, 0.0, 4.0, FLAME);
            p.fill_circle(15.0, 0.0, 2.0, rgb(254, 240, 138));
        }
    }
}

/// Shared translate/rotate/shadow step for organic actors, then the
/// species-specific body.
fn with_ground_shadow(p: &mut Painter, pos: Vec2, rotation: f32, body: impl FnOnce(&mut Painter)) {
    p.save();
    p.translate(pos.x, pos.y);
    p.rotate(rotation);
    p.fill_ellipse(0.0, 0.0, 15.0, 10.0, GROUND_SHADOW);
    body(p);
    p.restore();
}

pub fn draw_npc(p: &mut Painter, npc: &Npc) {
    with_ground_shadow(p, npc.pos, npc.rotation, |p| match npc.kind {
        NpcKind::Bear => draw_bear(p),
        NpcKind::Wolf => draw_wolf(p),
        NpcKind::Boar => draw_boar(p),
        NpcKind::Chicken => draw_chicken(p),
    });
}

fn draw_bear(p: &mut Painter) {
    const FUR: Color = rgb(69, 26, 3);
    p.fill_ellipse(0.0, 0.0, 24.0, 18.0, FUR);
    p.fill_ellipse(20.0, 0.0, 10.0, 8.0, FUR);
    p.fill_circle(24.0, -6.0, 4.0, FUR);
    p.fill_circle(24.0, 6.0, 4.0, FUR);
    p.fill_rect(25.0, -3.0, 2.0, 2.0, BLACK);
    p.fill_rect(25.0, 2.0, 2.0, 2.0, BLACK);
}

fn draw_wolf(p: &mut Painter) {
    const PELT: Color = rgb(100, 116, 139);
    const EYES: Color = rgb(250, 204, 21);
    p.fill_ellipse(0.0, 0.0, 20.0, 10.0, PELT);
    p.fill_ellipse(-18.0, 0.0, 12.0, 4.0, PELT);
    p.fill_ellipse(18.0, 0.0, 8.0, 6.0, PELT);
    p.fill_triangle(
        Vec2::new(20.0, -5.0),
        Vec2::new(26.0, -9.0),
        Vec2::new(24.0, -2.0),
        PELT,
    );
    p.fill_triangle(
        Vec2::new(20.0, 5.0),
        Vec2::new(26.0, 9.0),
        Vec2::new(24.0, 2.0),
        PELT,
    );
    p.fill_rect(22.0, -2.0, 2.0, 2.0, EYES);
    p.fill_rect(22.0, 1.0, 2.0, 2.0, EYES);
}

fn draw_boar(p: &mut Painter) {
    const HIDE: Color = rgb(39, 27, 18);
    const TUSK: Color = rgb(255, 255, 255);
    p.fill_ellipse(0.0, 0.0, 18.0, 14.0, HIDE);
    p.fill_ellipse(14.0, 0.0, 8.0, 10.0, HIDE);
    p.line(Vec2::new(18.0, -6.0), Vec2::new(24.0, -9.0), 2.0, TUSK);
    p.line(Vec2::new(18.0, 6.0), Vec2::new(24.0, 9.0), 2.0, TUSK);
}

fn draw_chicken(p: &mut Painter) {
    const FEATHERS: Color = rgb(255, 255, 255);
    const COMB: Color = rgb(239, 68, 68);
    const BEAK: Color = rgb(251, 191, 36);
    p.fill_ellipse(0.0, 0.0, 8.0, 6.0, FEATHERS);
    p.fill_triangle(
        Vec2::new(-6.0, -4.0),
        Vec2::new(-10.0, 0.0),
        Vec2::new(-6.0, 4.0),
        FEATHERS,
    );
    p.fill_circle(6.0, 0.0, 4.0, FEATHERS);
    p.fill_circle(6.0, -4.0, 2.0, COMB);
    p.fill_triangle(
        Vec2::new(9.0, -2.0),
        Vec2::new(13.0, 0.0),
        Vec2::new(9.0, 2.0),
        BEAK,
    );
}

/// Health-bar placement per species; bears are big, chickens are small.
pub fn npc_bar_layout(kind: NpcKind) -> (f32, f32) {
    match kind {
        NpcKind::Bear => (50.0, -40.0),
        NpcKind::Chicken => (20.0, -15.0),
        NpcKind::Wolf | NpcKind::Boar => (40.0, -30.0),
    }
}

pub fn draw_entity(p: &mut Painter, ent: &Entity) {
    let (x, y) = (ent.pos.x, ent.pos.y);
    match ent.kind {
        EntityKind::Tree => {
            p.fill_rect(x - 5.0, y - 8.0, 10.0, 14.0, rgb(45, 26, 10));
            p.fill_triangle(
                Vec2::new(x, y - 50.0),
                Vec2::new(x - 30.0, y),
                Vec2::new(x + 30.0, y),
                rgb(6, 78, 59),
            );
            if ent.health < ent.max_health {
                draw_health_bar(p, x, y - 60.0, ent.health, ent.max_health, 40.0);
            }
        }
        EntityKind::Rock => {
            p.fill_circle(x, y, 15.0, rgb(82, 82, 91));
            if ent.health < ent.max_health {
                draw_health_bar(p, x, y - 25.0, ent.health, ent.max_health, 30.0);
            }
        }
        EntityKind::GroundWood => {
            p.fill_rect(x - 10.0, y - 2.0, 20.0, 4.0, WOOD);
        }
        EntityKind::GroundStone => {
            p.fill_circle(x, y, 5.0, rgb(100, 116, 139));
        }
    }
}

/// Buildings are grid-aligned: axis-aligned fills, rotation never applied.
pub fn draw_building_part(p: &mut Painter, part: &BuildingPart) {
    let (x, y) = (part.pos.x, part.pos.y);
    match part.kind {
        BuildingKind::Foundation => p.fill_rect(x - 45.0, y - 45.0, 90.0, 90.0, WOOD),
        BuildingKind::Wall => p.fill_rect(x - 45.0, y - 5.0, 90.0, 10.0, WOOD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::painter::Frame;

    fn painted<F: FnOnce(&mut Painter)>(draw: F) -> Frame {
        let mut frame = Frame::new();
        frame.resize(128, 128);
        frame.clear(rgb(0, 0, 0));
        let mut p = Painter::new(&mut frame);
        p.translate(64.0, 64.0);
        draw(&mut p);
        frame
    }

    fn touched_pixels(frame: &Frame) -> usize {
        let mut n = 0;
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                if frame.pixel(x, y) != rgb(0, 0, 0) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn every_species_draws_something() {
        for kind in [NpcKind::Bear, NpcKind::Wolf, NpcKind::Boar, NpcKind::Chicken] {
            let npc = Npc {
                pos: glam::Vec2::ZERO,
                rotation: 0.0,
                kind,
                health: 50.0,
                max_health: 100.0,
            };
            let frame = painted(|p| draw_npc(p, &npc));
            assert!(touched_pixels(&frame) > 20, "{kind:?} drew nothing");
        }
    }

    #[test]
    fn undamaged_tree_has_no_health_bar() {
        let tree = |health| Entity {
            pos: glam::Vec2::ZERO,
            kind: EntityKind::Tree,
            health,
            max_health: 100.0,
        };
        let healthy = painted(|p| draw_entity(p, &tree(100.0)));
        let damaged = painted(|p| draw_entity(p, &tree(40.0)));
        // The bar sits above the canopy at y = -60; only the damaged tree
        // may touch that row.
        let bar_row = 64 - 59;
        let row_touched = |f: &Frame| (0..f.width()).any(|x| f.pixel(x, bar_row) != rgb(0, 0, 0));
        assert!(!row_touched(&healthy));
        assert!(row_touched(&damaged));
    }

    #[test]
    fn crouching_shifts_the_head_forward() {
        let pose = |crouching| PlayerPose {
            crouching,
            ..PlayerPose::default()
        };
        let standing = painted(|p| draw_player(p, glam::Vec2::ZERO, &pose(false)));
        let crouched = painted(|p| draw_player(p, glam::Vec2::ZERO, &pose(true)));
        assert!(touched_pixels(&standing) > 100);
        assert!(touched_pixels(&crouched) > 100);
        // Head circle is skin-colored; crouching moves its center +5 in x.
        assert_eq!(standing.pixel(64, 64), SKIN);
        assert_eq!(crouched.pixel(64 + 14, 64), SKIN);
    }

    #[test]
    fn rotation_does_not_panic_and_still_draws() {
        let npc = Npc {
            pos: glam::Vec2::ZERO,
            rotation: 2.3,
            kind: NpcKind::Wolf,
            health: 10.0,
            max_health: 100.0,
        };
        let frame = painted(|p| draw_npc(p, &npc));
        assert!(touched_pixels(&frame) > 20);
    }
}
