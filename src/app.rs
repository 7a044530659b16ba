//! Interactive terminal front-end: key handling, frame pacing, HUD,
//! gallery save/restore and PNG export around the render-loop session.

use crate::config::{Config, RendererMode};
use crate::export::{encode_png, export_filename, write_png};
use crate::gallery::{gallery_storage_path, Gallery, GalleryEntry};
use crate::palette;
use crate::params::{parse_deep_link, Params};
use crate::patterns::PatternKind;
use crate::render::{AsciiRenderer, Frame, HalfBlockRenderer, Renderer};
use crate::scene::Scene;
use crate::terminal::TerminalGuard;
use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

pub fn run(cfg: Config) -> anyhow::Result<()> {
    let _term = TerminalGuard::new()?;
    let mut out = BufWriter::new(TerminalGuard::stdout());

    let mut renderer: Box<dyn Renderer> = match cfg.renderer {
        RendererMode::HalfBlock => Box::new(HalfBlockRenderer::new()),
        RendererMode::Ascii => Box::new(AsciiRenderer::new()),
    };
    let (px_w_mul, px_h_mul) = renderer.pixel_scale();

    let gallery_path = cfg
        .gallery
        .as_ref()
        .map(PathBuf::from)
        .or_else(gallery_storage_path);
    let mut gallery = Gallery::load(gallery_path.as_deref());

    let mut last_size = crossterm::terminal::size().context("get terminal size")?;
    if last_size.0 < 4 || last_size.1 < 2 {
        return Err(anyhow::anyhow!(
            "terminal too small (need at least 4x2, got {}x{})",
            last_size.0,
            last_size.1
        ));
    }

    let mut show_hud = true;
    let mut hud_rows: u16 = 1;
    let visual_rows = last_size.1.saturating_sub(hud_rows).max(1);

    let params = params_from_config(&cfg);
    let animate = params.animate;
    let mut scene = Scene::new(
        last_size.0 as usize * px_w_mul,
        visual_rows as usize * px_h_mul,
        params,
    );
    if animate {
        scene.start();
    } else {
        scene.render_once();
    }

    let mut fps = FpsCounter::new();
    let mut dirty = false;

    loop {
        let now = Instant::now();

        // Drain input (non-blocking).
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(k) if k.kind != KeyEventKind::Release => {
                    let outcome = handle_key(
                        k.code,
                        k.modifiers,
                        &mut scene,
                        &mut gallery,
                        gallery_path.as_deref(),
                        &cfg.export_dir,
                        &mut show_hud,
                    );
                    match outcome {
                        KeyOutcome::Quit => return Ok(()),
                        KeyOutcome::Changed => dirty = true,
                        KeyOutcome::None => {}
                    }
                }
                Event::Resize(c, r) => {
                    last_size = (c, r);
                    resize_scene(&mut scene, last_size, px_w_mul, px_h_mul, hud_rows);
                    dirty = true;
                }
                _ => {}
            }
        }

        // Some terminals drop resize events; check once per frame.
        let sz = crossterm::terminal::size()?;
        if sz != last_size {
            last_size = sz;
            resize_scene(&mut scene, last_size, px_w_mul, px_h_mul, hud_rows);
            dirty = true;
        }

        // The HUD row comes out of the visual area, so toggling it
        // changes the canvas height.
        let new_hud_rows: u16 = if show_hud { 1 } else { 0 };
        if new_hud_rows != hud_rows {
            hud_rows = new_hud_rows;
            resize_scene(&mut scene, last_size, px_w_mul, px_h_mul, hud_rows);
            dirty = true;
        }

        if scene.running() {
            scene.tick(now);
            dirty = false;
        } else if dirty {
            scene.render_once();
            dirty = false;
        }

        fps.tick();

        let hud = if show_hud {
            build_hud(scene.params(), gallery.len(), fps.fps())
        } else {
            String::new()
        };

        let visual_rows = last_size.1.saturating_sub(hud_rows).max(1);
        let frame = Frame {
            term_cols: last_size.0,
            visual_rows,
            pixel_width: scene.canvas().width(),
            pixel_height: scene.canvas().height(),
            pixels_rgba: scene.canvas().pixels(),
            hud: &hud,
            hud_rows,
            sync_updates: cfg.sync_updates,
        };
        renderer.render(&frame, &mut out)?;

        // Frame pacing.
        let target = Duration::from_secs_f32(1.0 / cfg.fps.max(1) as f32);
        let elapsed = now.elapsed();
        if elapsed < target {
            std::thread::sleep(target - elapsed);
        }
    }
}

pub fn params_from_config(cfg: &Config) -> Params {
    let mut params = Params {
        pattern: cfg.pattern.clone(),
        seed: String::new(),
        symmetry: cfg.symmetry.max(1),
        particles: cfg.particles,
        speed: cfg.speed.max(0.1),
        line_width: cfg.line_width.max(0.1),
        palette: cfg.palette.clone(),
        animate: cfg.animate,
    };
    params.set_seed(cfg.seed.as_deref().unwrap_or(""));
    if let Some(link) = &cfg.link {
        params.apply_deep_link(&parse_deep_link(link));
    }
    params
}

fn resize_scene(
    scene: &mut Scene,
    size: (u16, u16),
    px_w_mul: usize,
    px_h_mul: usize,
    hud_rows: u16,
) {
    let (cols, rows) = size;
    let visual_rows = rows.saturating_sub(hud_rows).max(1);
    scene.resize(cols as usize * px_w_mul, visual_rows as usize * px_h_mul);
}

enum KeyOutcome {
    Quit,
    /// A parameter changed; re-render if the loop is not animating.
    Changed,
    None,
}

fn handle_key(
    code: KeyCode,
    mods: KeyModifiers,
    scene: &mut Scene,
    gallery: &mut Gallery,
    gallery_path: Option<&std::path::Path>,
    export_dir: &str,
    show_hud: &mut bool,
) -> KeyOutcome {
    if mods.contains(KeyModifiers::CONTROL) && matches!(code, KeyCode::Char('c')) {
        return KeyOutcome::Quit;
    }

    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => KeyOutcome::Quit,
        KeyCode::Char(' ') => {
            if scene.running() {
                scene.params_mut().animate = false;
                scene.stop();
            } else {
                scene.params_mut().animate = true;
                scene.start();
            }
            KeyOutcome::None
        }
        KeyCode::Enter | KeyCode::Char('d') => {
            scene.params_mut().animate = false;
            scene.render_once();
            KeyOutcome::None
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            scene.params_mut().randomize_seed();
            KeyOutcome::Changed
        }
        KeyCode::Char('p') | KeyCode::Char('P') => {
            let forward = matches!(code, KeyCode::Char('p'));
            let cur = PatternKind::from_key(&scene.params().pattern).unwrap_or(PatternKind::Orbits);
            scene.params_mut().pattern = cur.next(forward).key().to_string();
            KeyOutcome::Changed
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            let forward = matches!(code, KeyCode::Char('c'));
            let next = palette::next_key(&scene.params().palette, forward);
            scene.params_mut().palette = next.to_string();
            KeyOutcome::Changed
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let p = scene.params_mut();
            p.symmetry = (p.symmetry + 1).min(32);
            KeyOutcome::Changed
        }
        KeyCode::Char('-') => {
            let p = scene.params_mut();
            p.symmetry = p.symmetry.saturating_sub(1).max(1);
            KeyOutcome::Changed
        }
        KeyCode::Char(']') => {
            let p = scene.params_mut();
            p.particles = (p.particles + 100).min(5000);
            KeyOutcome::Changed
        }
        KeyCode::Char('[') => {
            let p = scene.params_mut();
            p.particles = p.particles.saturating_sub(100).max(1);
            KeyOutcome::Changed
        }
        KeyCode::Char('.') => {
            let p = scene.params_mut();
            p.speed = (p.speed + 0.1).min(8.0);
            KeyOutcome::Changed
        }
        KeyCode::Char(',') => {
            let p = scene.params_mut();
            p.speed = (p.speed - 0.1).max(0.1);
            KeyOutcome::Changed
        }
        KeyCode::Char('>') => {
            let p = scene.params_mut();
            p.line_width = (p.line_width + 0.1).min(8.0);
            KeyOutcome::Changed
        }
        KeyCode::Char('<') => {
            let p = scene.params_mut();
            p.line_width = (p.line_width - 0.1).max(0.1);
            KeyOutcome::Changed
        }
        KeyCode::Char('x') | KeyCode::Char('X') => {
            scene.stop();
            scene.clear();
            KeyOutcome::None
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            save_render(scene, gallery, gallery_path, export_dir);
            KeyOutcome::None
        }
        KeyCode::Char('i') | KeyCode::Char('I') => {
            *show_hud = !*show_hud;
            KeyOutcome::None
        }
        KeyCode::Char(c @ '1'..='8') => {
            let slot = c as usize - '1' as usize;
            if let Some(entry) = gallery.entries().get(slot) {
                let seed = entry.seed.clone();
                let pattern = entry.pattern.clone();
                let pal = entry.palette.clone();
                let p = scene.params_mut();
                p.set_seed(&seed);
                p.pattern = pattern;
                p.palette = pal;
                KeyOutcome::Changed
            } else {
                KeyOutcome::None
            }
        }
        _ => KeyOutcome::None,
    }
}

/// Snapshot the canvas into the gallery and drop a PNG beside it.
/// Persistence failures are logged and otherwise ignored; the prior
/// gallery file stays intact.
fn save_render(
    scene: &Scene,
    gallery: &mut Gallery,
    gallery_path: Option<&std::path::Path>,
    export_dir: &str,
) {
    let Ok(png) = encode_png(scene.canvas()) else {
        return;
    };
    let params = scene.params();
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    gallery.add(GalleryEntry {
        seed: params.seed.clone(),
        pattern: params.pattern.clone(),
        palette: params.palette.clone(),
        ts,
        png,
    });
    if let Err(err) = gallery.save(gallery_path) {
        log::warn!("gallery save failed: {err}");
    }

    let path = PathBuf::from(export_dir).join(export_filename(&params.pattern, &params.seed));
    if let Err(err) = write_png(scene.canvas(), &path) {
        log::warn!("png export failed: {err:#}");
    }
}

fn build_hud(params: &Params, gallery_len: usize, fps: f32) -> String {
    format!(
        "{} | seed {} | {} | sym {} | n {} | spd {:.1} | lw {:.1} | {} | gallery {}/8 | {:.0} fps | q quit  space anim  d draw  r seed  p pattern  c palette  s save",
        params.pattern,
        params.seed,
        params.palette,
        params.symmetry,
        params.particles,
        params.speed,
        params.line_width,
        if params.animate { "anim" } else { "still" },
        gallery_len,
        fps,
    )
}

struct FpsCounter {
    frames: u32,
    window_start: Instant,
    fps: f32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            frames: 0,
            window_start: Instant::now(),
            fps: 0.0,
        }
    }

    fn tick(&mut self) {
        self.frames += 1;
        let elapsed = self.window_start.elapsed().as_secs_f32();
        if elapsed >= 1.0 {
            self.fps = self.frames as f32 / elapsed;
            self.frames = 0;
            self.window_start = Instant::now();
        }
    }

    fn fps(&self) -> f32 {
        self.fps
    }
}
