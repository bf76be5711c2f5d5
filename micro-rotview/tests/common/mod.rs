#![allow(dead_code)]

use core::cell::Cell;
use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;
use micro_rotview::{Clock, Paint, Surface};

pub const SURFACE_WIDTH: f32 = 120.0;
pub const SURFACE_HEIGHT: f32 = 360.0;

/// Clock the test moves by hand.
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Surface that keeps a tally of what was drawn.
#[derive(Default)]
pub struct RecordingSurface {
    pub clears: Vec<Rgb888>,
    pub lines: Vec<([f32; 4], Paint)>,
    pub rotations: Vec<f32>,
    pub depth: usize,
    pub max_depth: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.clears.clear();
        self.lines.clear();
        self.rotations.clear();
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn width(&self) -> f32 {
        SURFACE_WIDTH
    }

    fn height(&self) -> f32 {
        SURFACE_HEIGHT
    }

    fn clear(&mut self, color: Rgb888) -> Result<(), Infallible> {
        self.clears.push(color);
        Ok(())
    }

    fn save(&mut self) -> Result<(), Infallible> {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        Ok(())
    }

    fn restore(&mut self) -> Result<(), Infallible> {
        assert!(self.depth > 0, "restore without save");
        self.depth -= 1;
        Ok(())
    }

    fn rotate(&mut self, degrees: f32) {
        self.rotations.push(degrees);
    }

    fn translate(&mut self, _dx: f32, _dy: f32) {}

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, paint: &Paint) -> Result<(), Infallible> {
        self.lines.push(([x1, y1, x2, y2], *paint));
        Ok(())
    }
}
