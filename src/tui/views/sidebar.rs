//! Sidebar view
//!
//! View switcher between user management, role management, and the audit
//! log, with record counts.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::tui::app::{ActiveView, App, FocusedPanel};

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;
    let border_color = if is_focused { Color::Cyan } else { Color::White };

    let block = Block::default()
        .title(" RBAC Console ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let items: Vec<ListItem> = ActiveView::ALL
        .iter()
        .map(|view| {
            let count = match view {
                ActiveView::Users => app.dir.users.len(),
                ActiveView::Roles => app.dir.roles.len(),
                ActiveView::Audit => app.dir.audit.len(),
            };
            let active = *view == app.active_view;
            let marker = if active { "> " } else { "  " };
            let style = if active {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}{} ({})", marker, view.title(), count),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    if is_focused {
        state.select(Some(app.sidebar_index));
    }

    frame.render_stateful_widget(list, area, &mut state);
}
