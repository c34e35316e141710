//! Function list and domain fields below the plot.

use super::ThemeColors;
use crate::app::{App, Focus};
use crate::catalog::Function;
use crate::input::TextField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draw the `from` field, the function list and the `to` field side by side.
pub(super) fn draw_controls(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let field_width = app.layout.field_width + 2;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(field_width),
            Constraint::Min(app.layout.list_min_width),
            Constraint::Length(field_width),
        ])
        .split(area);

    draw_field(f, columns[0], "from", &app.from, app.focus == Focus::From, colors);
    draw_function_list(f, app, columns[1], colors);
    draw_field(f, columns[2], "to", &app.to, app.focus == Focus::To, colors);
}

fn border_style(focused: bool, colors: &ThemeColors) -> Style {
    if focused {
        Style::default().fg(colors.focus)
    } else {
        Style::default().fg(colors.border)
    }
}

fn draw_function_list(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let items: Vec<ListItem<'_>> = Function::ALL
        .iter()
        .map(|&function| {
            let marker = if function == app.function { "● " } else { "  " };
            ListItem::new(Line::from(format!("{}{}", marker, function.name())))
                .style(Style::default().fg(colors.text))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" functions ")
                .borders(Borders::ALL)
                .border_style(border_style(app.focus == Focus::List, colors))
                .style(Style::default().bg(colors.bg)),
        )
        .highlight_style(
            Style::default()
                .fg(colors.cursor_fg)
                .bg(colors.cursor_bg)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default().with_selected(Some(app.list_cursor));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_field(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    field: &TextField,
    focused: bool,
    colors: &ThemeColors,
) {
    // Center a three-row field vertically in the control row.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    let area = rows[1];

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style(focused, colors))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);

    let visible = usize::from(inner.width.saturating_sub(1));
    let column = field.cursor_column();
    let offset = column.saturating_sub(visible);

    let paragraph = Paragraph::new(field.text())
        .style(Style::default().fg(colors.text))
        .scroll((0, u16::try_from(offset).unwrap_or(u16::MAX)))
        .block(block);
    f.render_widget(paragraph, area);

    if focused && inner.width > 0 && inner.height > 0 {
        let x = inner.x + u16::try_from(column - offset).unwrap_or(0);
        f.set_cursor_position((x, inner.y));
    }
}
