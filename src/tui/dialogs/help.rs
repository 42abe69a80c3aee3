//! Help dialog
//!
//! Key reference overlay.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect_fixed;

/// Render the help overlay
pub fn render(frame: &mut Frame) {
    let area = centered_rect_fixed(58, 21, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", k), Style::default().fg(Color::Yellow)),
            Span::raw(desc),
        ])
    };

    let lines = vec![
        Line::from(Span::styled("Global", Style::default().add_modifier(Modifier::BOLD))),
        key("q", "Quit"),
        key("Tab", "Switch between sidebar and main panel"),
        key("j/k, Up/Down", "Move selection"),
        key("?", "This help"),
        Line::from(""),
        Line::from(Span::styled("Users", Style::default().add_modifier(Modifier::BOLD))),
        key("a", "Add user    e: edit    d: delete (confirm)"),
        key("r", "Assign roles inline"),
        key("/", "Search by name or email"),
        key("f", "Cycle role filter    c: clear filters"),
        Line::from(""),
        Line::from(Span::styled("Roles", Style::default().add_modifier(Modifier::BOLD))),
        key("a", "Add role    e: edit    d: delete (confirm)"),
        key("1/2/3", "Toggle Read/Write/Delete on selected role"),
        key("!/@/#", "Filter by Read/Write/Delete    c: clear"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
