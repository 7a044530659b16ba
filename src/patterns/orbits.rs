//! Orbit swarm: particles on slowly precessing circular paths around the
//! canvas center, drawn as additive dots through the kaleidoscope.

use crate::canvas::{Blend, Canvas};
use crate::color::mix_colors;
use crate::palette::palette_or;
use crate::patterns::{FrameCtx, Pattern};
use crate::symmetry::Kaleidoscope;

pub struct OrbitsPattern;

impl Pattern for OrbitsPattern {
    fn name(&self) -> &'static str {
        "orbits"
    }

    fn render(&mut self, ctx: &mut FrameCtx<'_>, canvas: &mut Canvas) {
        let p = ctx.params;
        let colors = palette_or(&p.palette, "neon");
        let cx = ctx.w / 2.0;
        let cy = ctx.h / 2.0;
        let radius_bound = ctx.w.min(ctx.h) * 0.45;
        let speed = p.speed;
        let sym = Kaleidoscope::new(p.symmetry, ctx.w, ctx.h);

        for i in 0..p.particles {
            let fi = i as f32;
            let t = ctx.time + fi * 0.0002;
            let angle = t * speed * 0.6 + fi * 0.001 * (1.0 + speed);
            // Radius oscillates between 25% and 95% of the bound.
            let r = radius_bound * (0.25 + 0.7 * (fi * 0.017 + speed).sin().abs());
            let x = cx + r * angle.cos();
            let y = cy + r * (angle * 1.003 + (fi * 0.03).sin()).sin();

            let ca = colors[i % colors.len()];
            let cb = colors[(i + 1) % colors.len()];
            let blend_t = ((fi * 0.01 + ctx.time * 0.02).sin() + 1.0) / 2.0;
            let color = mix_colors(ca, cb, blend_t);

            sym.for_each_point(x, y, |sx, sy| {
                canvas.stamp_dot(sx, sy, p.line_width / 2.0, color, 1.0, Blend::Additive);
            });
        }
    }
}
