use core::f32::consts::PI;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::Point,
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
};
use heapless::Vec;

#[allow(unused_imports)]
use micromath::F32Ext;

use crate::config::FORE_COLOR;

/// Deepest nesting of `save` calls a [`Canvas`] accepts.
pub const SAVE_DEPTH: usize = 8;

/// Stroke settings for line drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Rgb888,
    pub stroke_width: u32,
}

impl Paint {
    pub const fn new(color: Rgb888, stroke_width: u32) -> Self {
        Self {
            color,
            stroke_width,
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::new(FORE_COLOR, 1)
    }
}

/// What the view needs from a drawing surface: lines under a transform stack.
pub trait Surface {
    type Error;

    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn clear(&mut self, color: Rgb888) -> Result<(), Self::Error>;
    fn save(&mut self) -> Result<(), Self::Error>;
    fn restore(&mut self) -> Result<(), Self::Error>;
    /// Rotates clockwise by `degrees` about the current origin.
    fn rotate(&mut self, degrees: f32);
    fn translate(&mut self, dx: f32, dy: f32);
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, paint: &Paint)
        -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub enum CanvasError<E> {
    /// The underlying draw target failed.
    Draw(E),
    /// `save` nested deeper than [`SAVE_DEPTH`].
    StackOverflow,
    /// `restore` without a matching `save`.
    StackUnderflow,
}

/// 2D affine map `(x, y) -> (a x + c y + e, b x + d y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Transform {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Transform {
    const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    fn translate(&mut self, dx: f32, dy: f32) {
        self.e += self.a * dx + self.c * dy;
        self.f += self.b * dx + self.d * dy;
    }

    fn rotate(&mut self, degrees: f32) {
        let rad = degrees * PI / 180.0;
        let (sin, cos) = (rad.sin(), rad.cos());
        let (a, b, c, d) = (self.a, self.b, self.c, self.d);
        self.a = a * cos + c * sin;
        self.b = b * cos + d * sin;
        self.c = c * cos - a * sin;
        self.d = d * cos - b * sin;
    }

    fn apply(&self, x: f32, y: f32) -> Point {
        let tx = self.a * x + self.c * y + self.e;
        let ty = self.b * x + self.d * y + self.f;
        Point::new(tx.round() as i32, ty.round() as i32)
    }
}

/// [`Surface`] over any `embedded-graphics` RGB target.
pub struct Canvas<'a, D> {
    target: &'a mut D,
    transform: Transform,
    saved: Vec<Transform, SAVE_DEPTH>,
}

impl<'a, D> Canvas<'a, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self {
            target,
            transform: Transform::IDENTITY,
            saved: Vec::new(),
        }
    }

    /// Where the point `(x, y)` lands on the target under the current transform.
    pub fn map_point(&self, x: f32, y: f32) -> Point {
        self.transform.apply(x, y)
    }

    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }
}

impl<D> Surface for Canvas<'_, D>
where
    D: DrawTarget<Color = Rgb888>,
{
    type Error = CanvasError<D::Error>;

    fn width(&self) -> f32 {
        self.target.bounding_box().size.width as f32
    }

    fn height(&self) -> f32 {
        self.target.bounding_box().size.height as f32
    }

    fn clear(&mut self, color: Rgb888) -> Result<(), Self::Error> {
        self.target.clear(color).map_err(CanvasError::Draw)
    }

    fn save(&mut self) -> Result<(), Self::Error> {
        self.saved
            .push(self.transform)
            .map_err(|_| CanvasError::StackOverflow)
    }

    fn restore(&mut self) -> Result<(), Self::Error> {
        self.transform = self.saved.pop().ok_or(CanvasError::StackUnderflow)?;
        Ok(())
    }

    fn rotate(&mut self, degrees: f32) {
        self.transform.rotate(degrees);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform.translate(dx, dy);
    }

    fn draw_line(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        paint: &Paint,
    ) -> Result<(), Self::Error> {
        let start = self.transform.apply(x1, y1);
        let end = self.transform.apply(x2, y2);
        Line::new(start, end)
            .into_styled(PrimitiveStyle::with_stroke(paint.color, paint.stroke_width))
            .draw(self.target)
            .map_err(CanvasError::Draw)
    }
}
