//! RGBA8 drawing surface.
//!
//! Strokes are rasterized as distance-coverage capsules (round caps), so the
//! output is a pure function of the inputs: identical draw sequences yield
//! identical pixels.

use crate::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blend {
    /// Source-over with the given alpha.
    Alpha,
    /// Channel-wise saturating add, scaled by the given alpha.
    Additive,
}

pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        let mut c = Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        };
        c.resize(width, height);
        c
    }

    /// Reallocates and clears. Dimensions are kept at least 1x1.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.pixels = vec![0; self.width * self.height * 4];
        self.clear();
    }

    pub fn clear(&mut self) {
        for px in self.pixels.chunks_exact_mut(4) {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            px[3] = 255;
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn blend_px(&mut self, x: usize, y: usize, color: Rgb, alpha: f32, blend: Blend) {
        let i = (y * self.width + x) * 4;
        let px = &mut self.pixels[i..i + 4];
        let a = alpha.clamp(0.0, 1.0);
        match blend {
            Blend::Alpha => {
                px[0] = (px[0] as f32 * (1.0 - a) + color.r as f32 * a).round() as u8;
                px[1] = (px[1] as f32 * (1.0 - a) + color.g as f32 * a).round() as u8;
                px[2] = (px[2] as f32 * (1.0 - a) + color.b as f32 * a).round() as u8;
            }
            Blend::Additive => {
                px[0] = px[0].saturating_add((color.r as f32 * a).round() as u8);
                px[1] = px[1].saturating_add((color.g as f32 * a).round() as u8);
                px[2] = px[2].saturating_add((color.b as f32 * a).round() as u8);
            }
        }
        px[3] = 255;
    }

    /// Opaque axis-aligned fill, clipped to the surface.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        if w <= 0 || h <= 0 {
            return;
        }
        let x0 = x.max(0) as usize;
        let y0 = y.max(0) as usize;
        let x1 = x.saturating_add(w).clamp(0, self.width as i32) as usize;
        let y1 = y.saturating_add(h).clamp(0, self.height as i32) as usize;
        for yy in y0..y1 {
            for xx in x0..x1 {
                let i = (yy * self.width + xx) * 4;
                self.pixels[i] = color.r;
                self.pixels[i + 1] = color.g;
                self.pixels[i + 2] = color.b;
                self.pixels[i + 3] = 255;
            }
        }
    }

    /// Antialiased disk. `radius` is kept visible for subpixel widths.
    pub fn stamp_dot(&mut self, x: f32, y: f32, radius: f32, color: Rgb, alpha: f32, blend: Blend) {
        self.stroke_capsule(x, y, x, y, radius, color, alpha, blend);
    }

    /// Antialiased stroke with round caps, `width` in pixels.
    #[allow(clippy::too_many_arguments)]
    pub fn stroke_segment(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        width: f32,
        color: Rgb,
        alpha: f32,
        blend: Blend,
    ) {
        self.stroke_capsule(x0, y0, x1, y1, width / 2.0, color, alpha, blend);
    }

    #[allow(clippy::too_many_arguments)]
    fn stroke_capsule(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        radius: f32,
        color: Rgb,
        alpha: f32,
        blend: Blend,
    ) {
        if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
            return;
        }
        let r = radius.max(0.3);
        let min_x = (x0.min(x1) - r - 1.0).floor().max(0.0) as usize;
        let min_y = (y0.min(y1) - r - 1.0).floor().max(0.0) as usize;
        let max_x = ((x0.max(x1) + r + 1.0).ceil() as i64).clamp(0, self.width as i64) as usize;
        let max_y = ((y0.max(y1) + r + 1.0).ceil() as i64).clamp(0, self.height as i64) as usize;
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        let sx = x1 - x0;
        let sy = y1 - y0;
        let len_sq = sx * sx + sy * sy;

        for py in min_y..max_y {
            for px in min_x..max_x {
                let cx = px as f32 + 0.5;
                let cy = py as f32 + 0.5;
                // Distance from the pixel center to the segment.
                let t = if len_sq > 0.0 {
                    (((cx - x0) * sx + (cy - y0) * sy) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let dx = cx - (x0 + t * sx);
                let dy = cy - (y0 + t * sy);
                let dist = (dx * dx + dy * dy).sqrt();
                let coverage = (r + 0.5 - dist).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend_px(px, py, color, alpha * coverage, blend);
                }
            }
        }
    }
}
