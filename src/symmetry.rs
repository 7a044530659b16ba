//! Kaleidoscopic point replication: N rotational copies about the canvas
//! center, each followed by its 180° point reflection, so every logical
//! draw fans out into exactly 2N draws.

use std::f32::consts::TAU;

#[derive(Debug, Clone, Copy)]
pub struct Kaleidoscope {
    steps: u32,
    cx: f32,
    cy: f32,
}

impl Kaleidoscope {
    pub fn new(symmetry: u32, width: f32, height: f32) -> Self {
        Self {
            steps: symmetry.max(1),
            cx: width / 2.0,
            cy: height / 2.0,
        }
    }

    /// Invokes `draw` 2N times: rotated copy, then its mirror through the
    /// center.
    pub fn for_each_point(&self, x: f32, y: f32, mut draw: impl FnMut(f32, f32)) {
        let dx = x - self.cx;
        let dy = y - self.cy;
        for i in 0..self.steps {
            let angle = i as f32 * TAU / self.steps as f32;
            let (sin, cos) = angle.sin_cos();
            let rx = cos * dx - sin * dy + self.cx;
            let ry = sin * dx + cos * dy + self.cy;
            draw(rx, ry);
            draw(2.0 * self.cx - rx, 2.0 * self.cy - ry);
        }
    }

    /// Segment variant: both endpoints go through the same rotation and
    /// mirror, preserving the segment under each copy. 2N invocations.
    pub fn for_each_segment(
        &self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        mut draw: impl FnMut(f32, f32, f32, f32),
    ) {
        let ax = x0 - self.cx;
        let ay = y0 - self.cy;
        let bx = x1 - self.cx;
        let by = y1 - self.cy;
        for i in 0..self.steps {
            let angle = i as f32 * TAU / self.steps as f32;
            let (sin, cos) = angle.sin_cos();
            let rax = cos * ax - sin * ay + self.cx;
            let ray = sin * ax + cos * ay + self.cy;
            let rbx = cos * bx - sin * by + self.cx;
            let rby = sin * bx + cos * by + self.cy;
            draw(rax, ray, rbx, rby);
            draw(
                2.0 * self.cx - rax,
                2.0 * self.cy - ray,
                2.0 * self.cx - rbx,
                2.0 * self.cy - rby,
            );
        }
    }
}
