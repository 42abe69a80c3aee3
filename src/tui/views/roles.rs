//! Roles view (main panel)
//!
//! Roles table with one checkbox column per permission in the fixed
//! vocabulary, plus the active permission filter.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::models::Permission;
use crate::tui::app::{App, FocusedPanel};

/// Render the roles view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { Color::Cyan } else { Color::White };

    let roles = app.visible_roles();

    let filter_label = if app.role_filter.is_empty() {
        " filter: none ".to_string()
    } else {
        let names: Vec<String> = app
            .role_filter
            .permissions
            .iter()
            .map(|p| p.to_string())
            .collect();
        format!(" filter: {} ", names.join("+"))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" Roles ({}) ", roles.len()))
        .title_bottom(filter_label);

    let widths = [
        Constraint::Length(14), // Role Name
        Constraint::Min(24),    // Description
        Constraint::Length(8),  // Read
        Constraint::Length(8),  // Write
        Constraint::Length(8),  // Delete
    ];

    let mut header_cells = vec![
        Cell::from("Role Name").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Description").style(Style::default().add_modifier(Modifier::BOLD)),
    ];
    for permission in Permission::ALL {
        header_cells.push(
            Cell::from(permission.to_string()).style(Style::default().add_modifier(Modifier::BOLD)),
        );
    }
    let header = Row::new(header_cells)
        .style(Style::default().fg(Color::Yellow))
        .height(1);

    let rows: Vec<Row> = roles
        .iter()
        .map(|role| {
            let mut cells = vec![
                Cell::from(role.name.clone()),
                Cell::from(role.description.clone()),
            ];
            for permission in Permission::ALL {
                let cell = if role.has_permission(permission) {
                    Cell::from("[x]").style(Style::default().fg(Color::Green))
                } else {
                    Cell::from("[ ]").style(Style::default().fg(Color::DarkGray))
                };
                cells.push(cell);
            }
            Row::new(cells)
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = TableState::default();
    if is_focused && !roles.is_empty() {
        state.select(Some(app.selected_role_index.min(roles.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
