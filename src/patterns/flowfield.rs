//! Flow-field tracer: persistent particles advected through a seeded
//! trigonometric field, leaving short additive strokes.
//!
//! The particle buffer is the one piece of cross-frame state in the system:
//! the RNG is rebuilt every frame (re-deriving the same field for a given
//! seed), while positions accumulate here so the trails actually travel.

use crate::canvas::{Blend, Canvas};
use crate::color::mix_colors;
use crate::field::FlowField;
use crate::palette::palette_or;
use crate::patterns::{FrameCtx, Pattern};
use crate::symmetry::Kaleidoscope;

const STEPS_PER_FRAME: usize = 12;

#[derive(Default)]
pub struct FlowFieldPattern {
    positions: Vec<(f32, f32)>,
    seeded_for: Option<(usize, usize, usize)>,
}

impl FlowFieldPattern {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current particle positions, always inside [0,w) x [0,h).
    pub fn positions(&self) -> &[(f32, f32)] {
        &self.positions
    }

    /// Deterministic index-derived placement; re-run whenever the particle
    /// count or canvas size changes.
    fn ensure_seeded(&mut self, count: usize, w: usize, h: usize) {
        let key = (count, w, h);
        if self.seeded_for == Some(key) {
            return;
        }
        self.positions.clear();
        self.positions.reserve(count);
        for i in 0..count {
            let x = (i.wrapping_mul(9973) % w.max(1)) as f32;
            let y = (i.wrapping_mul(7919) % h.max(1)) as f32;
            self.positions.push((x, y));
        }
        self.seeded_for = Some(key);
    }
}

/// Toroidal wrap into [0, max).
fn wrap(v: f32, max: f32) -> f32 {
    if max <= 0.0 {
        return 0.0;
    }
    let r = v.rem_euclid(max);
    // rem_euclid of a tiny negative value can round up to `max` itself.
    if r >= max { 0.0 } else { r }
}

impl Pattern for FlowFieldPattern {
    fn name(&self) -> &'static str {
        "flowfield"
    }

    fn render(&mut self, ctx: &mut FrameCtx<'_>, canvas: &mut Canvas) {
        let p = ctx.params;
        let colors = palette_or(&p.palette, "ocean");
        self.ensure_seeded(p.particles, ctx.w as usize, ctx.h as usize);

        let field = FlowField::new(ctx.rng);
        let sym = Kaleidoscope::new(p.symmetry, ctx.w, ctx.h);
        let field_time = ctx.time * 0.02;

        for step in 0..STEPS_PER_FRAME {
            for i in 0..self.positions.len() {
                let (x, y) = self.positions[i];
                let (u, v) = field.eval(x * 0.01, y * 0.01, field_time);
                let nx = x + u.cos() * p.speed;
                let ny = y + v.sin() * p.speed;

                let ca = colors[i % colors.len()];
                let cb = colors[(i + step + 1) % colors.len()];
                let blend_t = (((i + step) as f32 * 0.002 + ctx.time * 0.03).sin() + 1.0) / 2.0;
                let color = mix_colors(ca, cb, blend_t);

                sym.for_each_segment(x, y, nx, ny, |ax, ay, bx, by| {
                    canvas.stroke_segment(ax, ay, bx, by, p.line_width, color, 1.0, Blend::Additive);
                });

                self.positions[i] = (wrap(nx, ctx.w), wrap(ny, ctx.h));
            }
        }
    }

    fn on_resize(&mut self, _w: usize, _h: usize) {
        // Force a reseed against the new dimensions on the next frame.
        self.seeded_for = None;
    }
}
