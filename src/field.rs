//! Seeded closed-form flow field.
//!
//! The constants are drawn once from the frame RNG and fixed for the frame;
//! evaluation is pure, so the field is smooth in x, y and t.

use crate::rng::Rng;
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy)]
pub struct FlowField {
    ax: f32,
    ay: f32,
    bx: f32,
    by: f32,
    cx: f32,
    cy: f32,
    k: f32,
}

impl FlowField {
    /// Draws seven constants from the RNG, in a fixed order: two phase
    /// offsets, two integer frequencies in [1,4], two more phase offsets,
    /// one integer frequency in [2,7].
    pub fn new(rng: &mut Rng) -> Self {
        let ax = (rng.next() * TAU) as f32;
        let ay = (rng.next() * TAU) as f32;
        let bx = 1.0 + (rng.next() * 4.0).floor() as f32;
        let by = 1.0 + (rng.next() * 4.0).floor() as f32;
        let cx = (rng.next() * TAU) as f32;
        let cy = (rng.next() * TAU) as f32;
        let k = 2.0 + (rng.next() * 6.0).floor() as f32;
        Self {
            ax,
            ay,
            bx,
            by,
            cx,
            cy,
            k,
        }
    }

    /// Field vector at a scaled position and time.
    pub fn eval(&self, x: f32, y: f32, t: f32) -> (f32, f32) {
        let u = (x * self.bx + t * 0.2 + self.ax).sin() + (y * self.by - t * 0.2 + self.ay).cos();
        let v = (x * self.k + t * 0.15 + self.cx).cos() - (y * self.k - t * 0.15 + self.cy).sin();
        (u, v)
    }
}
