//! Tiled mosaic: a fixed grid of cells pulsing between adjacent palette
//! entries, with a sparkle overlay of kaleidoscoped translucent dots.

use crate::canvas::{Blend, Canvas};
use crate::color::{mix_colors, WHITE};
use crate::palette::palette_or;
use crate::patterns::{FrameCtx, Pattern};
use crate::symmetry::Kaleidoscope;

const GRID_COLS: usize = 22;
const GRID_ROWS: usize = 14;
const SPARKLE_DOTS: usize = 300;

pub struct TilesPattern;

impl Pattern for TilesPattern {
    fn name(&self) -> &'static str {
        "tiles"
    }

    fn render(&mut self, ctx: &mut FrameCtx<'_>, canvas: &mut Canvas) {
        let p = ctx.params;
        let colors = palette_or(&p.palette, "pastel");
        let cell_w = ctx.w / GRID_COLS as f32;
        let cell_h = ctx.h / GRID_ROWS as f32;

        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let idx = row * GRID_COLS + col;
                let phase = ((ctx.time * 0.01 + idx as f32 * 0.3).sin() + 1.0) / 2.0;
                let color = mix_colors(
                    colors[idx % colors.len()],
                    colors[(idx + 1) % colors.len()],
                    phase,
                );
                canvas.fill_rect(
                    (col as f32 * cell_w).round() as i32,
                    (row as f32 * cell_h).round() as i32,
                    cell_w.ceil() as i32,
                    cell_h.ceil() as i32,
                    color,
                );
            }
        }

        // Sparkle texture on top of the opaque fill.
        let sym = Kaleidoscope::new(p.symmetry, ctx.w, ctx.h);
        let radius = (p.line_width * 0.6).max(0.4);
        for _ in 0..SPARKLE_DOTS {
            let x = (ctx.rng.next() as f32) * ctx.w;
            let y = (ctx.rng.next() as f32) * ctx.h;
            sym.for_each_point(x, y, |sx, sy| {
                canvas.stamp_dot(sx, sy, radius, WHITE, 0.25, Blend::Alpha);
            });
        }
    }
}
