mod flowfield;
mod orbits;
mod tiles;

pub use flowfield::FlowFieldPattern;
pub use orbits::OrbitsPattern;
pub use tiles::TilesPattern;

use crate::canvas::Canvas;
use crate::params::Params;
use crate::rng::Rng;

/// Everything a generator sees for one frame. The RNG is rebuilt from the
/// seed each frame; any state that must survive frames lives inside the
/// pattern itself.
pub struct FrameCtx<'a> {
    pub rng: &'a mut Rng,
    pub w: f32,
    pub h: f32,
    pub time: f32,
    pub params: &'a Params,
}

pub trait Pattern {
    fn name(&self) -> &'static str;
    fn render(&mut self, ctx: &mut FrameCtx<'_>, canvas: &mut Canvas);
    fn on_resize(&mut self, _w: usize, _h: usize) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Orbits,
    FlowField,
    Tiles,
}

impl PatternKind {
    /// Unknown keys map to `None`; callers fall back to Orbits.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "orbits" => Some(Self::Orbits),
            "flowfield" => Some(Self::FlowField),
            "tiles" => Some(Self::Tiles),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Orbits => "orbits",
            Self::FlowField => "flowfield",
            Self::Tiles => "tiles",
        }
    }

    pub const fn all() -> [Self; 3] {
        [Self::Orbits, Self::FlowField, Self::Tiles]
    }

    pub fn next(self, forward: bool) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|k| *k == self).unwrap_or(0);
        let next = if forward {
            (idx + 1) % all.len()
        } else {
            (idx + all.len() - 1) % all.len()
        };
        all[next]
    }
}
