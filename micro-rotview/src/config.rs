use embedded_graphics::pixelcolor::Rgb888;

// --- Display Config ---
pub const NODES: usize = 5; // Vertical positions in the stack
pub const LINES: u32 = 4; // Nested squares drawn per node

// --- Animation Config ---
pub const FRAME_DELAY_MS: u64 = 50; // Pause between two animation ticks

// --- Style Config ---
pub const SWEEP_DEG: f32 = 90.0; // Full rotation of a square once scaled in
pub const STROKE_FACTOR: f32 = 90.0; // Stroke width = min(w, h) / STROKE_FACTOR
pub const SIZE_FACTOR: f32 = 2.9; // Square size = node gap / SIZE_FACTOR
pub const FORE_COLOR: Rgb888 = Rgb888::new(0x1A, 0x23, 0x7E);
pub const BACK_COLOR: Rgb888 = Rgb888::new(0xBD, 0xBD, 0xBD);

/// Tunables of the rotating square stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    pub nodes: usize,
    pub lines: u32,
    pub frame_delay_ms: u64,
    pub sweep_deg: f32,
    pub stroke_factor: f32,
    pub size_factor: f32,
    pub fore_color: Rgb888,
    pub back_color: Rgb888,
}

impl ViewConfig {
    pub const fn new() -> Self {
        Self {
            nodes: NODES,
            lines: LINES,
            frame_delay_ms: FRAME_DELAY_MS,
            sweep_deg: SWEEP_DEG,
            stroke_factor: STROKE_FACTOR,
            size_factor: SIZE_FACTOR,
            fore_color: FORE_COLOR,
            back_color: BACK_COLOR,
        }
    }

    pub fn with_nodes(mut self, nodes: usize) -> Self {
        self.nodes = nodes;
        self
    }

    pub fn with_frame_delay_ms(mut self, frame_delay_ms: u64) -> Self {
        self.frame_delay_ms = frame_delay_ms;
        self
    }

    /// Clamps the counts to at least one so the chain and the squares are never empty.
    pub fn sanitized(mut self) -> Self {
        self.nodes = self.nodes.max(1);
        self.lines = self.lines.max(1);
        self
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new()
    }
}
