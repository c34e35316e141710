//! Plot canvas rendering.

use super::formatters::format_axis_label;
use super::ThemeColors;
use crate::app::App;
use crate::plot::Viewport;
use crate::surface::Shape;
use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Context, Line, Rectangle},
        Block, Borders,
    },
    Frame,
};

/// Braille dots per terminal cell, horizontally.
const DOTS_PER_COLUMN: u32 = 2;
/// Braille dots per terminal cell, vertically.
const DOTS_PER_ROW: u32 = 4;

/// Size of the canvas in dots for a terminal area.
pub(super) fn viewport_for(area: Rect) -> Viewport {
    Viewport::new(
        u32::from(area.width) * DOTS_PER_COLUMN,
        u32::from(area.height) * DOTS_PER_ROW,
    )
}

/// Draw the plot, resizing the app's viewport first if the area changed.
pub(super) fn draw_plot(f: &mut Frame<'_>, app: &mut App, area: Rect, colors: &ThemeColors) {
    let title = format!(
        " {}  x ∈ [{}, {}] ",
        app.function.name(),
        format_axis_label(app.domain.start),
        format_axis_label(app.domain.end)
    );
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(colors.heading))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let viewport = viewport_for(inner);
    if viewport != app.viewport() {
        app.resize(viewport);
    }

    // Canvas y grows upwards, plot rows grow downwards.
    let top = f64::from(viewport.height.saturating_sub(1));
    let right = f64::from(viewport.width.saturating_sub(1));
    let shapes = app.scene.shapes();

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(colors.bg)
        .x_bounds([0.0, right])
        .y_bounds([0.0, top])
        .paint(|ctx| {
            for shape in shapes {
                paint_shape(ctx, shape, top, colors);
            }
        });

    f.render_widget(canvas, inner);
}

fn paint_shape(ctx: &mut Context<'_>, shape: &Shape, top: f64, colors: &ThemeColors) {
    match *shape {
        Shape::Segment(from, to) => ctx.draw(&Line::new(
            f64::from(from.column),
            top - from.row,
            f64::from(to.column),
            top - to.row,
            colors.curve,
        )),
        Shape::Rectangle { x1, y1, x2, y2 } => ctx.draw(&Rectangle {
            x: f64::from(x1),
            y: top - f64::from(y2),
            width: f64::from(x2.saturating_sub(x1)),
            height: f64::from(y2.saturating_sub(y1)),
            color: colors.frame,
        }),
    }
}
