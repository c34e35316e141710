//! User interface rendering.

mod controls;
mod formatters;
mod keymap_bar;
mod plot_view;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Plot, controls, status bar, key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(app.layout.controls_height()),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    plot_view::draw_plot(f, app, chunks[0], &colors);
    controls::draw_controls(f, app, chunks[1], &colors);
    status_bar::draw_status(f, chunks[2], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[3], app.focus, &colors);
}
