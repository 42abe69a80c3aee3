//! Audit log view (main panel)
//!
//! Read-only table of audit entries, newest first.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::tui::app::{App, FocusedPanel};

/// Render the audit log view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { Color::Cyan } else { Color::White };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" Audit Logs ({}) ", app.dir.audit.len()));

    let widths = [
        Constraint::Length(20), // Timestamp
        Constraint::Length(12), // Actor
        Constraint::Min(30),    // Action
    ];

    let header = Row::new(vec![
        Cell::from("Timestamp").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Actor").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Action").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = app
        .dir
        .audit
        .entries()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.timestamp_display()),
                Cell::from(entry.actor.clone()),
                Cell::from(entry.action.clone()),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = TableState::default();
    if is_focused && !app.dir.audit.is_empty() {
        state.select(Some(app.audit_scroll.min(app.dir.audit.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
