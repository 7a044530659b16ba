mod ascii;
mod halfblock;

pub use ascii::AsciiRenderer;
pub use halfblock::HalfBlockRenderer;

use std::io::Write;

pub struct Frame<'a> {
    pub term_cols: u16,
    pub visual_rows: u16,
    pub pixel_width: usize,
    pub pixel_height: usize,
    pub pixels_rgba: &'a [u8],
    pub hud: &'a str,
    pub hud_rows: u16,
    pub sync_updates: bool,
}

pub trait Renderer {
    fn name(&self) -> &'static str;
    /// Pixels per terminal cell (x, y); the canvas is sized by this.
    fn pixel_scale(&self) -> (usize, usize);
    fn render(&mut self, frame: &Frame<'_>, out: &mut dyn Write) -> anyhow::Result<()>;
}

pub(crate) fn write_fg_rgb(out: &mut dyn Write, r: u8, g: u8, b: u8) -> anyhow::Result<()> {
    write!(out, "\x1b[38;2;{};{};{}m", r, g, b)?;
    Ok(())
}

pub(crate) fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    // Rec. 601 integer approximation.
    ((r as u32 * 77 + g as u32 * 150 + b as u32 * 29) >> 8) as u8
}

/// Common preamble for the text renderers: validates the pixel buffer
/// against the terminal geometry and homes the cursor. Returns None when
/// the frame should be skipped (mismatched sizes are tolerated, not fatal;
/// resize events settle within a frame).
pub(crate) fn frame_begin(
    frame: &Frame<'_>,
    px_w_mul: usize,
    px_h_mul: usize,
    out: &mut dyn Write,
) -> anyhow::Result<Option<(usize, usize)>> {
    let cols = frame.term_cols as usize;
    let rows = frame.visual_rows as usize;
    if cols == 0 || rows == 0 {
        return Ok(None);
    }
    if frame.pixel_width != cols * px_w_mul || frame.pixel_height != rows * px_h_mul {
        return Ok(None);
    }
    let need = frame.pixel_width * frame.pixel_height * 4;
    if frame.pixels_rgba.len() < need {
        return Ok(None);
    }

    if frame.sync_updates {
        out.write_all(b"\x1b[?2026h")?;
    }
    // Home, reset attributes, disable autowrap while painting full rows.
    out.write_all(b"\x1b[H\x1b[0m\x1b[?7l")?;
    Ok(Some((cols, rows)))
}

/// Common epilogue: HUD rows, autowrap restore, sync release, flush.
pub(crate) fn frame_end(
    frame: &Frame<'_>,
    cols: usize,
    visual_rows: usize,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let mut hud_lines = frame.hud.lines();
    for i in 0..(frame.hud_rows as usize) {
        write!(out, "\x1b[{};1H\x1b[0m\x1b[2K", visual_rows + i + 1)?;
        if let Some(mut line) = hud_lines.next() {
            if line.len() > cols {
                let mut end = cols;
                while end > 0 && !line.is_char_boundary(end) {
                    end -= 1;
                }
                line = &line[..end];
            }
            write!(out, "{line}")?;
        }
    }

    out.write_all(b"\x1b[?7h")?;
    if frame.sync_updates {
        out.write_all(b"\x1b[?2026l")?;
    }
    out.flush()?;
    Ok(())
}
