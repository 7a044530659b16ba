//! Offline frame exporter: renders a run of animation frames to
//! numbered PNG files without touching the terminal.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use artloom::export::write_png;
use artloom::params::Params;
use artloom::scene::Scene;

#[derive(Parser, Debug)]
#[command(name = "export_frames", about = "Render animation frames to PNG files")]
struct Cli {
    /// Output directory for the numbered frames
    #[arg(long, default_value = "frames")]
    out: PathBuf,

    /// Frame width in pixels
    #[arg(long, default_value_t = 640)]
    width: usize,

    /// Frame height in pixels
    #[arg(long, default_value_t = 360)]
    height: usize,

    /// Number of frames to render
    #[arg(long, default_value_t = 120)]
    frames: usize,

    /// Playback rate the frame times are spaced for
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Pattern key (orbits, flowfield, tiles)
    #[arg(long, default_value = "orbits")]
    pattern: String,

    /// Seed string; omit for a random seed
    #[arg(long)]
    seed: Option<String>,

    /// Palette key
    #[arg(long, default_value = "neon")]
    palette: String,

    /// Kaleidoscope segment count
    #[arg(long, default_value_t = 6)]
    symmetry: u32,

    /// Particle count
    #[arg(long, default_value_t = 800)]
    particles: usize,

    /// Animation speed multiplier
    #[arg(long, default_value_t = 1.6)]
    speed: f32,

    /// Stroke width in pixels
    #[arg(long, default_value_t = 1.2)]
    line_width: f32,
}

fn validate(cli: &Cli) -> Result<()> {
    if cli.width == 0 || cli.height == 0 {
        bail!("frame size must be nonzero, got {}x{}", cli.width, cli.height);
    }
    if cli.frames == 0 {
        bail!("--frames must be at least 1");
    }
    if cli.fps == 0 {
        bail!("--fps must be at least 1");
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    validate(&cli)?;

    let mut params = Params {
        pattern: cli.pattern.clone(),
        seed: String::new(),
        symmetry: cli.symmetry.max(1),
        particles: cli.particles,
        speed: cli.speed.max(0.1),
        line_width: cli.line_width.max(0.1),
        palette: cli.palette.clone(),
        animate: false,
    };
    params.set_seed(cli.seed.as_deref().unwrap_or(""));

    let seed = params.seed.clone();
    let mut scene = Scene::new(cli.width, cli.height, params);

    std::fs::create_dir_all(&cli.out)
        .with_context(|| format!("create output dir {}", cli.out.display()))?;

    // Frame times are in 60 Hz units, so a run at --fps 30 spaces
    // them two units apart.
    let step = 60.0 / cli.fps as f32;
    for i in 0..cli.frames {
        scene.render_frame(i as f32 * step);
        let path = cli.out.join(format!("frame_{i:05}.png"));
        write_png(scene.canvas(), &path)
            .with_context(|| format!("write {}", path.display()))?;
    }

    println!(
        "wrote {} frames ({}x{}, seed {}) to {}",
        cli.frames,
        cli.width,
        cli.height,
        seed,
        cli.out.display()
    );
    Ok(())
}
