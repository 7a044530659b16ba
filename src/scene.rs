//! Render-loop session: owns the parameter set, the canvas, and the
//! per-pattern state bank.
//!
//! Scheduling is cooperative. The host drives `tick` at its frame cadence;
//! `stop` makes `tick` a no-op immediately, and `start` always stops first
//! so two loops never race on the same surface. Each frame rebuilds the RNG
//! from the current seed, so a frame's draws are a function of (seed, time)
//! alone; the only state that crosses frames is the flow-field particle
//! buffer and the accumulated pixels themselves.

use crate::canvas::Canvas;
use crate::params::Params;
use crate::patterns::{
    FlowFieldPattern, FrameCtx, OrbitsPattern, Pattern, PatternKind, TilesPattern,
};
use crate::rng::Rng;
use std::time::Instant;

/// One frame unit is one frame at the 60 Hz reference rate.
const MS_PER_FRAME_UNIT: f64 = 1000.0 / 60.0;

pub struct Scene {
    params: Params,
    canvas: Canvas,
    orbits: OrbitsPattern,
    flowfield: FlowFieldPattern,
    tiles: TilesPattern,
    origin: Option<Instant>,
    running: bool,
}

impl Scene {
    pub fn new(width: usize, height: usize, params: Params) -> Self {
        Self {
            params,
            canvas: Canvas::new(width, height),
            orbits: OrbitsPattern,
            flowfield: FlowFieldPattern::new(),
            tiles: TilesPattern,
            origin: None,
            running: false,
        }
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn flowfield(&self) -> &FlowFieldPattern {
        &self.flowfield
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.canvas.resize(width, height);
        self.orbits.on_resize(width, height);
        self.flowfield.on_resize(width, height);
        self.tiles.on_resize(width, height);
    }

    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    /// Enter continuous mode. Any prior loop is stopped first.
    pub fn start(&mut self) {
        self.stop();
        self.running = true;
    }

    /// Leave continuous mode; no further `tick` renders until `start`.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// Continuous-mode step. The first ticked frame records the time
    /// origin; elapsed wall time is normalized to 60 Hz frame units.
    pub fn tick(&mut self, now: Instant) {
        if !self.running {
            return;
        }
        let time = self.frame_time(now);
        self.render_frame(time);
    }

    /// Single-shot render at the current elapsed time. Stops any loop;
    /// starting one again is an explicit action.
    pub fn render_once(&mut self) {
        self.stop();
        let time = self.frame_time(Instant::now());
        self.render_frame(time);
    }

    fn frame_time(&mut self, now: Instant) -> f32 {
        let origin = *self.origin.get_or_insert(now);
        (now.duration_since(origin).as_secs_f64() * 1000.0 / MS_PER_FRAME_UNIT) as f32
    }

    /// Renders one frame at an explicit time: fresh RNG from the seed, then
    /// dispatch on the pattern key. Unknown keys draw orbits.
    pub fn render_frame(&mut self, time: f32) {
        let mut rng = Rng::from_seed(&self.params.seed);
        let mut ctx = FrameCtx {
            rng: &mut rng,
            w: self.canvas.width() as f32,
            h: self.canvas.height() as f32,
            time,
            params: &self.params,
        };
        match PatternKind::from_key(&self.params.pattern).unwrap_or(PatternKind::Orbits) {
            PatternKind::Orbits => self.orbits.render(&mut ctx, &mut self.canvas),
            PatternKind::FlowField => self.flowfield.render(&mut ctx, &mut self.canvas),
            PatternKind::Tiles => self.tiles.render(&mut ctx, &mut self.canvas),
        }
    }
}
