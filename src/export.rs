//! PNG export of the current canvas.

use crate::canvas::Canvas;
use anyhow::{Context, Result};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::path::Path;

/// `art_<pattern>_<seed>.png`, with seed characters that are awkward in
/// filenames replaced by `-`.
pub fn export_filename(pattern: &str, seed: &str) -> String {
    let safe_seed: String = seed
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("art_{pattern}_{safe_seed}.png")
}

pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            canvas.pixels(),
            canvas.width() as u32,
            canvas.height() as u32,
            ExtendedColorType::Rgba8,
        )
        .context("encode png")?;
    Ok(out)
}

pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
    }
    let bytes = encode_png(canvas)?;
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}
