// render/painter.rs
//
// CPU raster substrate for the sprite and overlay routines. All drawing goes
// through an affine transform stack (save/restore/translate/rotate/scale) so
// the world-space pass can reuse the same fill primitives as screen-space
// overlays. Fills are alpha-blended src-over; the frame itself stays opaque.

use glam::{Affine2, Vec2};

pub type Color = [u8; 4];

pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    [r, g, b, 255]
}

pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
    [r, g, b, a]
}

/// Replace a color's alpha with `alpha` in [0, 1].
pub fn with_alpha(c: Color, alpha: f32) -> Color {
    [c[0], c[1], c[2], (alpha.clamp(0.0, 1.0) * 255.0) as u8]
}

/// Full-resolution RGBA8 frame. Reallocated only when dimensions change.
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
        }
    }

    /// Returns true when the backing store was reallocated.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if self.width == width && self.height == height {
            return false;
        }
        self.width = width;
        self.height = height;
        self.data = vec![0; (width as usize) * (height as usize) * 4];
        true
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn clear(&mut self, color: Color) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    #[inline]
    fn blend(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let a = color[3] as u32;
        if a == 0 {
            return;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 4;
        if a == 255 {
            self.data[idx] = color[0];
            self.data[idx + 1] = color[1];
            self.data[idx + 2] = color[2];
            self.data[idx + 3] = 255;
            return;
        }
        let inv = 255 - a;
        for c in 0..3 {
            let src = color[c] as u32;
            let dst = self.data[idx + c] as u32;
            self.data[idx + c] = ((src * a + dst * inv + 127) / 255) as u8;
        }
        self.data[idx + 3] = 255;
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Painter<'a> {
    frame: &'a mut Frame,
    transform: Affine2,
    stack: Vec<Affine2>,
}

impl<'a> Painter<'a> {
    pub fn new(frame: &'a mut Frame) -> Self {
        Self {
            frame,
            transform: Affine2::IDENTITY,
            stack: Vec::new(),
        }
    }

    pub fn save(&mut self) {
        self.stack.push(self.transform);
    }

    pub fn restore(&mut self) {
        if let Some(t) = self.stack.pop() {
            self.transform = t;
        }
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.transform = self.transform * Affine2::from_translation(Vec2::new(x, y));
    }

    pub fn rotate(&mut self, radians: f32) {
        self.transform = self.transform * Affine2::from_angle(radians);
    }

    pub fn scale(&mut self, factor: f32) {
        self.transform = self.transform * Affine2::from_scale(Vec2::splat(factor));
    }

    /// Uniform scale currently applied by the transform, used to keep stroke
    /// widths consistent with filled geometry under camera zoom.
    fn transform_scale(&self) -> f32 {
        self.transform.matrix2.determinant().abs().sqrt()
    }

    /// Rasterize a shape given its local-space bounding corners and an
    /// inside predicate evaluated in local space. Pixels are tested at
    /// their centers through the inverse transform, so arbitrary
    /// rotation/scale fall out of the same path.
    fn fill_local(&mut self, corners: [Vec2; 4], color: Color, inside: impl Fn(Vec2) -> bool) {
        let inv = self.transform.inverse();
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for corner in corners {
            let p = self.transform.transform_point2(corner);
            min = min.min(p);
            max = max.max(p);
        }
        if !min.x.is_finite() || !min.y.is_finite() || !max.x.is_finite() || !max.y.is_finite() {
            return;
        }

        let x0 = (min.x.floor() as i64).max(0);
        let y0 = (min.y.floor() as i64).max(0);
        let x1 = (max.x.ceil() as i64).min(self.frame.width as i64);
        let y1 = (max.y.ceil() as i64).min(self.frame.height as i64);

        for py in y0..y1 {
            for px in x0..x1 {
                let center = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                if inside(inv.transform_point2(center)) {
                    self.frame.blend(px, py, color);
                }
            }
        }
    }

    /// Axis-aligned rect in local space, top-left anchored like the sprite
    /// geometry expects.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let corners = [
            Vec2::new(x, y),
            Vec2::new(x + w, y),
            Vec2::new(x, y + h),
            Vec2::new(x + w, y + h),
        ];
        self.fill_local(corners, color, move |p| {
            p.x >= x && p.x < x + w && p.y >= y && p.y < y + h
        });
    }

    pub fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: Color) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let corners = [
            Vec2::new(cx - rx, cy - ry),
            Vec2::new(cx + rx, cy - ry),
            Vec2::new(cx - rx, cy + ry),
            Vec2::new(cx + rx, cy + ry),
        ];
        self.fill_local(corners, color, move |p| {
            let dx = (p.x - cx) / rx;
            let dy = (p.y - cy) / ry;
            dx * dx + dy * dy <= 1.0
        });
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color) {
        self.fill_ellipse(cx, cy, r, r, color);
    }

    pub fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        let corners = [a, b, c, a];
        self.fill_local(corners, color, move |p| {
            let d1 = edge(p, a, b);
            let d2 = edge(p, b, c);
            let d3 = edge(p, c, a);
            let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
            let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
            !(has_neg && has_pos)
        });
    }

    pub fn line(&mut self, a: Vec2, b: Vec2, width: f32, color: Color) {
        let sa = self.transform.transform_point2(a);
        let sb = self.transform.transform_point2(b);
        let half = (width * self.transform_scale()).max(1.0) * 0.5;

        let min = sa.min(sb) - Vec2::splat(half + 1.0);
        let max = sa.max(sb) + Vec2::splat(half + 1.0);
        let x0 = (min.x.floor() as i64).max(0);
        let y0 = (min.y.floor() as i64).max(0);
        let x1 = (max.x.ceil() as i64).min(self.frame.width as i64);
        let y1 = (max.y.ceil() as i64).min(self.frame.height as i64);

        for py in y0..y1 {
            for px in x0..x1 {
                let p = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                if segment_distance_sq(p, sa, sb) <= half * half {
                    self.frame.blend(px, py, color);
                }
            }
        }
    }

    /// Elliptical ring, used by the swim ripples.
    pub fn stroke_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, width: f32, color: Color) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let half = (width * 0.5).max(0.5);
        let (orx, ory) = (rx + half, ry + half);
        let (irx, iry) = ((rx - half).max(0.0), (ry - half).max(0.0));
        let corners = [
            Vec2::new(cx - orx, cy - ory),
            Vec2::new(cx + orx, cy - ory),
            Vec2::new(cx - orx, cy + ory),
            Vec2::new(cx + orx, cy + ory),
        ];
        self.fill_local(corners, color, move |p| {
            let dx = p.x - cx;
            let dy = p.y - cy;
            let outer = (dx / orx).powi(2) + (dy / ory).powi(2) <= 1.0;
            let inner = irx > 0.0
                && iry > 0.0
                && (dx / irx).powi(2) + (dy / iry).powi(2) <= 1.0;
            outer && !inner
        });
    }

    /// Tint the whole frame, ignoring the transform. Screen-space overlay.
    pub fn fill_screen(&mut self, color: Color) {
        let (w, h) = (self.frame.width as i64, self.frame.height as i64);
        for py in 0..h {
            for px in 0..w {
                self.frame.blend(px, py, color);
            }
        }
    }

    /// Screen-space radial overlay: fully transparent inside `r_inner`,
    /// ramping linearly to `max_alpha` of `color` at `r_outer` and beyond.
    pub fn radial_overlay(
        &mut self,
        cx: f32,
        cy: f32,
        r_inner: f32,
        r_outer: f32,
        color: Color,
        max_alpha: f32,
    ) {
        if r_outer <= r_inner {
            return;
        }
        let (w, h) = (self.frame.width as i64, self.frame.height as i64);
        for py in 0..h {
            for px in 0..w {
                let dx = px as f32 + 0.5 - cx;
                let dy = py as f32 + 0.5 - cy;
                let d = (dx * dx + dy * dy).sqrt();
                let t = ((d - r_inner) / (r_outer - r_inner)).clamp(0.0, 1.0);
                if t > 0.0 {
                    self.frame.blend(px, py, with_alpha(color, t * max_alpha));
                }
            }
        }
    }
}

#[inline]
fn edge(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}

fn segment_distance_sq(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return (p - a).length_squared();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    (p - (a + ab * t)).length_squared()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(w: u32, h: u32) -> Frame {
        let mut f = Frame::new();
        f.resize(w, h);
        f.clear(rgb(0, 0, 0));
        f
    }

    #[test]
    fn resize_reallocates_only_on_change() {
        let mut f = Frame::new();
        assert!(f.resize(8, 8));
        assert!(!f.resize(8, 8));
        assert!(f.resize(8, 9));
    }

    #[test]
    fn opaque_fill_writes_exact_color() {
        let mut f = frame(8, 8);
        let mut p = Painter::new(&mut f);
        p.fill_rect(2.0, 2.0, 4.0, 4.0, rgb(10, 20, 30));
        assert_eq!(f.pixel(3, 3), rgb(10, 20, 30));
        assert_eq!(f.pixel(0, 0), rgb(0, 0, 0));
    }

    #[test]
    fn zero_alpha_fill_is_a_no_op() {
        let mut f = frame(4, 4);
        let mut p = Painter::new(&mut f);
        p.fill_rect(0.0, 0.0, 4.0, 4.0, rgba(255, 255, 255, 0));
        assert_eq!(f.pixel(1, 1), rgb(0, 0, 0));
    }

    #[test]
    fn out_of_bounds_draws_are_clipped() {
        let mut f = frame(4, 4);
        let mut p = Painter::new(&mut f);
        p.fill_rect(-100.0, -100.0, 50.0, 50.0, rgb(255, 0, 0));
        p.fill_circle(1000.0, 1000.0, 10.0, rgb(255, 0, 0));
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(f.pixel(x, y), rgb(0, 0, 0));
            }
        }
    }

    #[test]
    fn translate_moves_fills() {
        let mut f = frame(8, 8);
        let mut p = Painter::new(&mut f);
        p.save();
        p.translate(4.0, 4.0);
        p.fill_rect(0.0, 0.0, 2.0, 2.0, rgb(1, 2, 3));
        p.restore();
        assert_eq!(f.pixel(5, 5), rgb(1, 2, 3));
        assert_eq!(f.pixel(1, 1), rgb(0, 0, 0));
    }

    #[test]
    fn restore_pops_transform() {
        let mut f = frame(8, 8);
        let mut p = Painter::new(&mut f);
        p.save();
        p.translate(100.0, 100.0);
        p.restore();
        p.fill_rect(0.0, 0.0, 2.0, 2.0, rgb(9, 9, 9));
        assert_eq!(f.pixel(0, 0), rgb(9, 9, 9));
    }

    #[test]
    fn half_alpha_blends_toward_source() {
        let mut f = frame(2, 2);
        let mut p = Painter::new(&mut f);
        p.fill_rect(0.0, 0.0, 2.0, 2.0, rgba(200, 200, 200, 128));
        let px = f.pixel(0, 0);
        assert!(px[0] > 90 && px[0] < 110, "got {:?}", px);
        assert_eq!(px[3], 255);
    }
}
