// render/camera.rs

use glam::Vec2;

/// Field of view at which the world renders 1:1.
pub const BASE_FOV: f32 = 90.0;

/// World-to-screen transform for a camera locked onto the player, plus the
/// visibility test used to cull actors before drawing.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub viewport: Vec2,
    pub focus: Vec2,
    pub zoom: f32,
}

impl Camera {
    pub fn new(fov: f32, viewport: Vec2, focus: Vec2) -> Self {
        Self {
            viewport,
            focus,
            zoom: fov / BASE_FOV,
        }
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        self.viewport * 0.5 + (world - self.focus) * self.zoom
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.focus + (screen - self.viewport * 0.5) / self.zoom
    }

    /// Squared world-space visibility radius. Zooming in tightens the radius
    /// to match what is actually on screen.
    pub fn view_radius_sq(&self, view_distance: f32) -> f32 {
        let r = view_distance / self.zoom;
        r * r
    }

    /// Squared-distance culling test; no square root per actor. A point at
    /// exactly the view radius is culled.
    pub fn in_view(&self, pos: Vec2, view_distance: f32) -> bool {
        pos.distance_squared(self.focus) < self.view_radius_sq(view_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_world_and_screen() {
        let cam = Camera::new(110.0, Vec2::new(1280.0, 720.0), Vec2::new(432.0, -77.5));
        let world = Vec2::new(510.25, 12.0);
        let back = cam.screen_to_world(cam.world_to_screen(world));
        assert!((back - world).length() < 1e-3, "{back:?} vs {world:?}");
    }

    #[test]
    fn focus_lands_on_viewport_center() {
        let cam = Camera::new(90.0, Vec2::new(800.0, 600.0), Vec2::new(123.0, 456.0));
        assert_eq!(cam.world_to_screen(cam.focus), Vec2::new(400.0, 300.0));
    }
}
