//! Drawing surfaces and the redraw routine that feeds them.

use crate::catalog::Function;
use crate::plot::{to_curve, Domain, PlotCurve, PlotPoint, Viewport};

/// Something the plot can be drawn on.
///
/// Coordinates are pixels with the origin at the top-left corner.
pub trait Surface {
    /// Current drawable size.
    fn size(&self) -> Viewport;

    /// Remove everything drawn so far.
    fn clear(&mut self);

    /// Draw a straight segment between two points.
    fn draw_segment(&mut self, from: PlotPoint, to: PlotPoint);

    /// Draw an axis-aligned rectangle outline between two corners.
    fn draw_rectangle(&mut self, x1: u32, y1: u32, x2: u32, y2: u32);
}

/// A shape recorded by [`ShapeBuffer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Curve segment.
    Segment(PlotPoint, PlotPoint),
    /// Border outline, corners inclusive.
    Rectangle {
        /// Left column.
        x1: u32,
        /// Top row.
        y1: u32,
        /// Right column.
        x2: u32,
        /// Bottom row.
        y2: u32,
    },
}

/// Surface that keeps the shapes drawn on it for later painting.
#[derive(Debug, Clone, Default)]
pub struct ShapeBuffer {
    size: Viewport,
    shapes: Vec<Shape>,
}

impl ShapeBuffer {
    /// Create an empty buffer of the given size.
    pub fn new(size: Viewport) -> Self {
        Self {
            size,
            shapes: Vec::new(),
        }
    }

    /// Change the size. Shapes already drawn are kept.
    pub fn resize(&mut self, size: Viewport) {
        self.size = size;
    }

    /// Shapes in drawing order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of curve segments recorded.
    pub fn segment_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::Segment(..)))
            .count()
    }
}

impl Surface for ShapeBuffer {
    fn size(&self) -> Viewport {
        self.size
    }

    fn clear(&mut self) {
        self.shapes.clear();
    }

    fn draw_segment(&mut self, from: PlotPoint, to: PlotPoint) {
        self.shapes.push(Shape::Segment(from, to));
    }

    fn draw_rectangle(&mut self, x1: u32, y1: u32, x2: u32, y2: u32) {
        self.shapes.push(Shape::Rectangle { x1, y1, x2, y2 });
    }
}

/// Clear `surface` and draw the border and the curve of `function` over
/// `domain`.
///
/// An undrawable surface is left blank. Returns the curve that was drawn.
pub fn render<S: Surface + ?Sized>(surface: &mut S, function: Function, domain: Domain) -> PlotCurve {
    surface.clear();

    let viewport = surface.size();
    if let Err(e) = viewport.check() {
        tracing::debug!("Skipping redraw: {}", e);
        return PlotCurve::default();
    }

    surface.draw_rectangle(1, 1, viewport.width - 2, viewport.height - 2);

    let curve = to_curve(function, domain, viewport);
    for (from, to) in curve.segments() {
        surface.draw_segment(from, to);
    }
    curve
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_border_then_segments() {
        let mut buf = ShapeBuffer::new(Viewport::new(7, 103));
        let curve = render(&mut buf, Function::Square, Domain::default());

        assert_eq!(curve.len(), 5);
        assert_eq!(
            buf.shapes()[0],
            Shape::Rectangle {
                x1: 1,
                y1: 1,
                x2: 5,
                y2: 101
            }
        );
        assert_eq!(buf.segment_count(), 4);
        assert_eq!(
            buf.shapes()[1],
            Shape::Segment(
                PlotPoint { column: 1, row: 0.0 },
                PlotPoint {
                    column: 2,
                    row: 75.0
                }
            )
        );
    }

    #[test]
    fn undrawable_surface_stays_blank() {
        let mut buf = ShapeBuffer::new(Viewport::new(40, 20));
        render(&mut buf, Function::Sin, Domain::default());
        assert!(!buf.shapes().is_empty());

        buf.resize(Viewport::new(2, 20));
        let curve = render(&mut buf, Function::Sin, Domain::default());
        assert!(curve.is_empty());
        assert!(buf.shapes().is_empty());

        buf.resize(Viewport::new(40, 2));
        render(&mut buf, Function::Sin, Domain::default());
        assert!(buf.shapes().is_empty());
    }

    #[test]
    fn single_sample_draws_border_only() {
        let mut buf = ShapeBuffer::new(Viewport::new(3, 10));
        let curve = render(&mut buf, Function::Cos, Domain::default());
        assert_eq!(curve.len(), 1);
        assert_eq!(buf.shapes().len(), 1);
        assert_eq!(buf.segment_count(), 0);
    }

    #[test]
    fn redraw_replaces_previous_shapes() {
        let mut buf = ShapeBuffer::new(Viewport::new(30, 30));
        render(&mut buf, Function::Exp, Domain::default());
        render(&mut buf, Function::Exp, Domain::new(0.0, 1.0));
        assert_eq!(buf.segment_count(), 27);
    }
}
