//! Status bar
//!
//! One-line bar with the actor name and context-sensitive key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let hints = if app.input_mode == InputMode::Search {
        "type to search | Enter/Esc: done"
    } else {
        match app.active_view {
            ActiveView::Users => {
                "a: add  e: edit  d: delete  r: roles  /: search  f: filter  ?: help  q: quit"
            }
            ActiveView::Roles => {
                "a: add  e: edit  d: delete  1/2/3: toggle perm  !/@/#: filter  ?: help  q: quit"
            }
            ActiveView::Audit => "j/k: scroll  ?: help  q: quit",
        }
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.settings.actor),
            Style::default().bg(Color::Cyan).fg(Color::Black),
        ),
        Span::raw(" "),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
