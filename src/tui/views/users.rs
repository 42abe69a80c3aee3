//! Users view (main panel)
//!
//! Search/filter bar plus the filtered users table.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::{App, FocusedPanel, InputMode};

/// Render the users view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search / filter bar
            Constraint::Min(3),    // Table
        ])
        .split(area);

    render_filter_bar(frame, app, chunks[0]);
    render_user_table(frame, app, chunks[1]);
}

fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let searching = app.input_mode == InputMode::Search;
    let border_color = if searching { Color::Yellow } else { Color::White };

    let role_label = match &app.user_filter.role {
        Some(role) => format!(" role: {} ", role),
        None => " role: all ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Search ")
        .title_bottom(Line::from(Span::styled(
            role_label,
            Style::default().fg(Color::Magenta),
        )));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(app.search_input.as_line(searching)),
        inner,
    );
}

fn render_user_table(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let border_color = if is_focused { Color::Cyan } else { Color::White };

    let users = app.visible_users();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" Users ({}) ", users.len()));

    let widths = [
        Constraint::Length(20), // Name
        Constraint::Length(26), // Email
        Constraint::Min(20),    // Roles
        Constraint::Length(10), // Status
    ];

    let header = Row::new(vec![
        Cell::from("Name").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Email").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Roles").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Status").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let rows: Vec<Row> = users
        .iter()
        .map(|user| {
            let status_style = match user.status {
                crate::models::UserStatus::Active => Style::default().fg(Color::Green),
                crate::models::UserStatus::Inactive => Style::default().fg(Color::Red),
            };
            Row::new(vec![
                Cell::from(user.name.clone()),
                Cell::from(user.email.clone()),
                Cell::from(user.roles.join(", ")),
                Cell::from(user.status.to_string()).style(status_style),
            ])
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
    if is_focused && !users.is_empty() {
        state.select(Some(app.selected_user_index.min(users.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut state);
}
