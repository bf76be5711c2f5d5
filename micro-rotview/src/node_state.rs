#[allow(unused_imports)]
use micromath::F32Ext;

use crate::scale_math::step_delta;

/// Animation state of a single node.
///
/// A node rests at `prev_scale` (0 or 1). While `dir` is non-zero it moves
/// one unit of scale toward `prev_scale + dir`, a little every tick, and
/// settles there.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeState {
    /// The currently displayed scale.
    pub scale: f32,
    /// -1, 0 or 1. Zero means idle.
    pub dir: f32,
    /// The scale committed by the last settle.
    pub prev_scale: f32,
}

impl NodeState {
    pub const fn new() -> Self {
        Self {
            scale: 0.0,
            dir: 0.0,
            prev_scale: 0.0,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.dir == 0.0
    }

    /// Advances the scale by one tick.
    ///
    /// Once the node has travelled more than one unit from `prev_scale` it
    /// snaps to `prev_scale + dir`, goes idle and `on_settle` receives the
    /// new resting scale.
    pub fn update<F>(&mut self, lines: u32, on_settle: F)
    where
        F: FnOnce(f32),
    {
        self.scale += step_delta(self.scale, self.dir, lines, lines);
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + self.dir;
            self.dir = 0.0;
            self.prev_scale = self.scale;
            on_settle(self.prev_scale);
        }
    }

    /// Starts moving away from the resting scale, if the node is idle.
    ///
    /// A node resting at 0 heads up, one resting at 1 heads down. Calls while
    /// an animation is in flight leave the state untouched and skip `on_start`.
    pub fn start_updating<F>(&mut self, on_start: F)
    where
        F: FnOnce(),
    {
        if self.is_idle() {
            self.dir = 1.0 - 2.0 * self.prev_scale;
            on_start();
        }
    }
}
