use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "artloom",
    version,
    about = "Deterministic generative-art renderer for the terminal (seeded orbits, flow fields, mosaics)"
)]
pub struct Config {
    /// Pattern key: orbits, flowfield, tiles. Unknown keys render as orbits.
    #[arg(long, default_value = "orbits")]
    pub pattern: String,

    /// Seed (any string). Omitted or empty: a random numeric seed is drawn.
    #[arg(long)]
    pub seed: Option<String>,

    #[arg(long, default_value_t = 6)]
    pub symmetry: u32,

    #[arg(long, default_value_t = 800)]
    pub particles: usize,

    #[arg(long, default_value_t = 1.6)]
    pub speed: f32,

    #[arg(long, default_value_t = 1.2)]
    pub line_width: f32,

    /// Palette key; unknown keys fall back to the pattern's default palette.
    #[arg(long, default_value = "neon")]
    pub palette: String,

    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub animate: bool,

    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    #[arg(long, value_enum, default_value_t = RendererMode::HalfBlock)]
    pub renderer: RendererMode,

    /// Query-style startup overrides, e.g. "seed=42&pattern=tiles&palette=ocean".
    #[arg(long)]
    pub link: Option<String>,

    /// Gallery file override (default: XDG data dir).
    #[arg(long)]
    pub gallery: Option<String>,

    /// Directory for exported PNGs.
    #[arg(long, default_value = ".")]
    pub export_dir: String,

    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub sync_updates: bool,

    #[arg(long, default_value_t = false)]
    pub list_palettes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RendererMode {
    #[value(
        name = "half-block",
        alias = "halfblock",
        alias = "half_block",
        alias = "hb"
    )]
    HalfBlock,
    #[value(alias = "ansi", alias = "text")]
    Ascii,
}
