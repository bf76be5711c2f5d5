use embedded_graphics::pixelcolor::Rgb888;

use crate::canvas::{Paint, Surface};
use crate::config::ViewConfig;
use crate::scale_math::segment_progress;

/// Turns node scales into line calls.
///
/// A node's scale is split in two halves: the first half grows the square
/// outlines, the second half rotates the nested squares one after another
/// by up to `sweep_deg`.
pub struct SquareDrawer {
    nodes: usize,
    lines: u32,
    sweep_deg: f32,
    stroke_factor: f32,
    size_factor: f32,
    fore_color: Rgb888,
}

impl SquareDrawer {
    /// Expects a config that went through [`ViewConfig::sanitized`].
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            nodes: config.nodes,
            lines: config.lines,
            sweep_deg: config.sweep_deg,
            stroke_factor: config.stroke_factor,
            size_factor: config.size_factor,
            fore_color: config.fore_color,
        }
    }

    /// Distance between two node centers on a surface `height` tall.
    pub fn node_gap(&self, height: f32) -> f32 {
        height / (self.nodes + 1) as f32
    }

    pub fn stroke_width(&self, width: f32, height: f32) -> u32 {
        ((width.min(height) / self.stroke_factor) as u32).max(1)
    }

    /// Draws node `i` at `scale`, centered horizontally at its slot in the stack.
    pub fn draw_node<S: Surface>(
        &self,
        surface: &mut S,
        i: usize,
        scale: f32,
        paint: &mut Paint,
    ) -> Result<(), S::Error> {
        let sc1 = segment_progress(scale, 0, 2);
        let sc2 = segment_progress(scale, 1, 2);
        let w = surface.width();
        let h = surface.height();
        let gap = self.node_gap(h);
        let size = gap / self.size_factor;
        paint.color = self.fore_color;
        paint.stroke_width = self.stroke_width(w, h);

        surface.save()?;
        surface.translate(w / 2.0, gap * (i + 1) as f32);
        for j in 0..self.lines {
            self.draw_square(surface, j, sc1, sc2, size, paint)?;
        }
        surface.restore()
    }

    fn draw_square<S: Surface>(
        &self,
        surface: &mut S,
        i: u32,
        sc1: f32,
        sc2: f32,
        size: f32,
        paint: &Paint,
    ) -> Result<(), S::Error> {
        let x_gap = size / self.lines as f32;
        surface.save()?;
        surface.rotate(self.sweep_deg * segment_progress(sc2, i, self.lines));
        for j in 0..2u32 {
            let y = x_gap * (1.0 - 2.0 * j as f32) * segment_progress(sc1, j, self.lines);
            surface.draw_line(-x_gap, y, x_gap, y, paint)?;
            surface.draw_line(-x_gap, 0.0, -x_gap, y, paint)?;
            surface.draw_line(x_gap, 0.0, x_gap, y, paint)?;
        }
        surface.restore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::convert::Infallible;
    use embedded_graphics::prelude::RgbColor;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Op {
        Save,
        Restore,
        Rotate(f32),
        Translate(f32, f32),
        Line([f32; 4]),
    }

    struct Recorder {
        ops: Vec<Op>,
    }

    impl Surface for Recorder {
        type Error = Infallible;

        fn width(&self) -> f32 {
            120.0
        }
        fn height(&self) -> f32 {
            300.0
        }
        fn clear(&mut self, _color: Rgb888) -> Result<(), Infallible> {
            Ok(())
        }
        fn save(&mut self) -> Result<(), Infallible> {
            self.ops.push(Op::Save);
            Ok(())
        }
        fn restore(&mut self) -> Result<(), Infallible> {
            self.ops.push(Op::Restore);
            Ok(())
        }
        fn rotate(&mut self, degrees: f32) {
            self.ops.push(Op::Rotate(degrees));
        }
        fn translate(&mut self, dx: f32, dy: f32) {
            self.ops.push(Op::Translate(dx, dy));
        }
        fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, _paint: &Paint) -> Result<(), Infallible> {
            self.ops.push(Op::Line([x1, y1, x2, y2]));
            Ok(())
        }
    }

    fn record(i: usize, scale: f32) -> (Vec<Op>, Paint) {
        let drawer = SquareDrawer::new(&ViewConfig::default());
        let mut surface = Recorder { ops: Vec::new() };
        let mut paint = Paint::new(Rgb888::RED, 7);
        drawer.draw_node(&mut surface, i, scale, &mut paint).unwrap();
        (surface.ops, paint)
    }

    #[test]
    fn test_node_is_placed_in_its_slot() {
        let (ops, paint) = record(2, 0.0);
        assert_eq!(ops[0], Op::Save);
        // 300 / 6 = 50 per slot, node 2 sits in the third.
        assert_eq!(ops[1], Op::Translate(60.0, 150.0));
        assert_eq!(ops.last(), Some(&Op::Restore));
        assert_eq!(paint.color, crate::config::FORE_COLOR);
        assert_eq!(paint.stroke_width, 1);
    }

    #[test]
    fn test_each_square_emits_six_lines() {
        let (ops, _) = record(0, 0.3);
        let lines = ops.iter().filter(|op| matches!(op, Op::Line(_))).count();
        assert_eq!(lines, 4 * 6);
        let saves = ops.iter().filter(|op| **op == Op::Save).count();
        let restores = ops.iter().filter(|op| **op == Op::Restore).count();
        assert_eq!(saves, 5);
        assert_eq!(restores, 5);
    }

    #[test]
    fn test_resting_node_is_flat_and_unrotated() {
        let (ops, _) = record(0, 0.0);
        for op in ops {
            match op {
                Op::Rotate(deg) => assert_eq!(deg, 0.0),
                Op::Line([_, y1, _, y2]) => {
                    assert_eq!(y1, 0.0);
                    assert_eq!(y2, 0.0);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_fully_scaled_node_rotates_first_square_fully() {
        let (ops, _) = record(0, 1.0);
        let rotations: Vec<f32> = ops
            .iter()
            .filter_map(|op| match op {
                Op::Rotate(deg) => Some(*deg),
                _ => None,
            })
            .collect();
        assert_eq!(rotations.len(), 4);
        assert_eq!(rotations[0], 90.0);
        assert_eq!(rotations[3], 90.0);
    }
}
