//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: sidebar, main panel, status bar,
//! plus helpers for centering dialogs.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Sidebar area (view switcher)
    pub sidebar: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(24), // Sidebar (fixed width)
                Constraint::Min(40),    // Main content
            ])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// A rect centered in `area` sized as a percentage of it
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// A rect of fixed size centered in `area`, clamped to fit
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_regions() {
        let layout = AppLayout::new(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.sidebar.width, 24);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.main.x, 24);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = centered_rect_fixed(50, 20, area);
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
    }
}
