// render/terrain.rs
//
// Procedural ground. `height_at`/`biome_color` are pure functions of world
// coordinates so terrain never needs persistent state; the raster buffer
// below is a pure cache over them, sized down from the viewport to amortize
// the per-pixel sampling cost.

use glam::Vec2;

use crate::render::camera::Camera;
use crate::render::painter::Frame;
use crate::state::MAP_SIZE;

pub type Rgb = [u8; 3];

const DEEP_WATER: Rgb = [20, 18, 55];
const WATER: Rgb = [45, 75, 140];
const SAND: Rgb = [170, 140, 100];
const DIRT: Rgb = [215, 185, 135];
const GRASS: Rgb = [110, 180, 40];
const FOREST: Rgb = [20, 45, 20];
const SNOW: Rgb = [245, 250, 255];

/// Elevation at a world coordinate: radial falloff from the map center with
/// three sinusoidal terms breaking up the symmetry into rolling terrain.
/// Roughly [0, 1] across the island, dipping below 0 toward the rim.
pub fn height_at(x: f32, y: f32) -> f32 {
    let center = MAP_SIZE / 2.0;
    let dist = ((x - center).powi(2) + (y - center).powi(2)).sqrt();
    let mut h = 1.0 - dist / (MAP_SIZE * 0.48);
    h += (x / 1200.0).sin() * 0.1 + (y / 1200.0).cos() * 0.1;
    h += (x / 400.0 + y / 500.0).sin() * 0.05;
    h
}

/// Water line: heights below this read as swimmable water.
pub const WATER_LEVEL: f32 = 0.14;

fn lerp_rgb(a: Rgb, b: Rgb, f: f32) -> Rgb {
    let f = f.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * f).round() as u8;
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
}

/// Banded elevation-to-color ramp. Each band interpolates between its two
/// anchor colors by the normalized position inside the band, so the ramp is
/// continuous across band edges. Heights outside [0, 1] clamp to the nearest
/// anchor.
pub fn biome_color(h: f32) -> Rgb {
    if h < 0.08 {
        lerp_rgb(DEEP_WATER, WATER, h / 0.08)
    } else if h < 0.14 {
        lerp_rgb(WATER, SAND, (h - 0.08) / 0.06)
    } else if h < 0.22 {
        lerp_rgb(SAND, DIRT, (h - 0.14) / 0.08)
    } else if h < 0.45 {
        lerp_rgb(DIRT, GRASS, (h - 0.22) / 0.23)
    } else if h < 0.75 {
        lerp_rgb(GRASS, FOREST, (h - 0.45) / 0.30)
    } else {
        lerp_rgb(FOREST, SNOW, (h - 0.75) / 0.25)
    }
}

/// Low-resolution off-screen terrain raster, repopulated every frame and
/// stretched over the full viewport. Resolution is the quality/performance
/// knob; the backing store is reallocated only when the target dimensions
/// actually change.
pub struct TerrainBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl TerrainBuffer {
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Resample the height field for the current camera at `factor` times the
    /// viewport resolution.
    pub fn update(&mut self, camera: &Camera, factor: f32) {
        let factor = factor.clamp(0.01, 1.0);
        let w = (camera.viewport.x * factor).ceil().max(1.0) as u32;
        let h = (camera.viewport.y * factor).ceil().max(1.0) as u32;
        if w != self.width || h != self.height {
            log::debug!("terrain buffer {}x{} -> {}x{}", self.width, self.height, w, h);
            self.width = w;
            self.height = h;
            self.pixels = vec![0; (w as usize) * (h as usize) * 4];
        }

        let mut idx = 0;
        for j in 0..h {
            for i in 0..w {
                let screen = Vec2::new(i as f32 / factor, j as f32 / factor);
                let world = camera.screen_to_world(screen);
                let c = biome_color(height_at(world.x, world.y));
                self.pixels[idx] = c[0];
                self.pixels[idx + 1] = c[1];
                self.pixels[idx + 2] = c[2];
                self.pixels[idx + 3] = 255;
                idx += 4;
            }
        }
    }

    /// Nearest-neighbor stretch over the whole frame. Terrain is the base
    /// layer, so this is a straight overwrite, no blending.
    pub fn blit_into(&self, frame: &mut Frame) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let (fw, fh) = (frame.width() as usize, frame.height() as usize);
        let (sw, sh) = (self.width as usize, self.height as usize);
        let dst = frame.data_mut();
        for y in 0..fh {
            let sy = (y * sh / fh).min(sh - 1);
            let src_row = sy * sw * 4;
            let dst_row = y * fw * 4;
            for x in 0..fw {
                let sx = (x * sw / fw).min(sw - 1);
                let s = src_row + sx * 4;
                let d = dst_row + x * 4;
                dst[d..d + 4].copy_from_slice(&self.pixels[s..s + 4]);
            }
        }
    }
}

impl Default for TerrainBuffer {
    fn default() -> Self {
        Self::new()
    }
}
