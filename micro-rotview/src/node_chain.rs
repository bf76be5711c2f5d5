use alloc::{vec, vec::Vec};

use crate::canvas::{Paint, Surface};
use crate::node_state::NodeState;
use crate::square_drawer::SquareDrawer;

/// Which neighbor the chain hands over to after a settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// The fixed stack of nodes plus the cursor that decides which one animates.
///
/// Nodes live in one vector indexed `0..len`; `current` is an index into it.
/// Only the current node ever animates. When it settles the cursor moves to
/// its neighbor in `direction`, and at either end the direction flips while
/// the cursor stays put, so the sweep ping-pongs across the stack forever.
pub struct NodeChain {
    nodes: Vec<NodeState>,
    current: usize,
    direction: Direction,
    lines: u32,
}

impl NodeChain {
    /// Builds a chain of `num_nodes` idle nodes (at least one), each animating `lines` squares.
    pub fn new(num_nodes: usize, lines: u32) -> Self {
        Self {
            nodes: vec![NodeState::new(); num_nodes.max(1)],
            current: 0,
            direction: Direction::Forward,
            lines: lines.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: `new` keeps at least one node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn node(&self, index: usize) -> Option<&NodeState> {
        self.nodes.get(index)
    }

    /// All nodes in stack order, for drawing.
    pub fn nodes(&self) -> impl Iterator<Item = (usize, &NodeState)> {
        self.nodes.iter().enumerate()
    }

    /// Neighbor of the current node in `direction`.
    ///
    /// Past either end `on_boundary` runs and the current index comes back.
    pub fn get_next<F>(&self, direction: Direction, on_boundary: F) -> usize
    where
        F: FnOnce(),
    {
        let neighbor = match direction {
            Direction::Backward => self.current.checked_sub(1),
            Direction::Forward => Some(self.current + 1).filter(|&i| i < self.nodes.len()),
        };
        match neighbor {
            Some(index) => index,
            None => {
                on_boundary();
                self.current
            }
        }
    }

    /// Ticks the current node. On settle the cursor advances (flipping at the
    /// ends) and `on_settle` receives the settled node's index and scale.
    pub fn update<F>(&mut self, on_settle: F)
    where
        F: FnOnce(usize, f32),
    {
        let index = self.current;
        let mut settled = None;
        self.nodes[index].update(self.lines, |scale| settled = Some(scale));

        if let Some(scale) = settled {
            let mut at_boundary = false;
            let next = self.get_next(self.direction, || at_boundary = true);
            if at_boundary {
                self.direction = self.direction.reversed();
                viz_log!("NodeChain: node {} at end of chain, reversing", index);
            }
            self.current = next;
            viz_log!("NodeChain: node {} settled at {}, next node {}", index, scale, next);
            on_settle(index, scale);
        }
    }

    /// Draws every node, top to bottom, at its current scale.
    pub fn draw<S: Surface>(
        &self,
        surface: &mut S,
        drawer: &SquareDrawer,
        paint: &mut Paint,
    ) -> Result<(), S::Error> {
        for (i, node) in self.nodes() {
            drawer.draw_node(surface, i, node.scale, paint)?;
        }
        Ok(())
    }

    /// Asks the current node to start animating; `on_start` runs only if it was idle.
    pub fn start_updating<F>(&mut self, on_start: F)
    where
        F: FnOnce(),
    {
        self.nodes[self.current].start_updating(on_start);
    }
}
