//! Inline role assignment dialog
//!
//! Checklist over the role store for one user. Each toggle is applied to
//! the store immediately, mirroring an inline multi-select.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{User, UserId};
use crate::tui::layout::centered_rect_fixed;

/// State for the role assignment dialog
#[derive(Debug, Clone, Default)]
pub struct AssignRolesState {
    /// User whose roles are being edited
    pub user_id: Option<UserId>,

    /// Name shown in the title
    pub user_name: String,

    /// Role names offered in the checklist
    pub role_options: Vec<String>,

    /// Which of `role_options` are held
    pub selected: Vec<bool>,

    /// Cursor within the checklist
    pub cursor: usize,
}

impl AssignRolesState {
    /// Build the checklist for a user against the current role store
    pub fn from_user(user: &User, role_options: Vec<String>) -> Self {
        let selected = role_options.iter().map(|name| user.has_role(name)).collect();
        Self {
            user_id: Some(user.id),
            user_name: user.name.clone(),
            role_options,
            selected,
            cursor: 0,
        }
    }

    /// Move the cursor up
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor down
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.role_options.len() {
            self.cursor += 1;
        }
    }

    /// Flip the checkbox under the cursor
    pub fn toggle_at_cursor(&mut self) {
        if let Some(checked) = self.selected.get_mut(self.cursor) {
            *checked = !*checked;
        }
    }

    /// The role names currently checked
    pub fn chosen_roles(&self) -> Vec<String> {
        self.role_options
            .iter()
            .zip(&self.selected)
            .filter(|(_, checked)| **checked)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

/// Render the role assignment dialog
pub fn render(frame: &mut Frame, state: &AssignRolesState) {
    let height = 5 + state.role_options.len() as u16;
    let area = centered_rect_fixed(44, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Roles: {} ", state.user_name))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = state
        .role_options
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let checked = state.selected.get(i).copied().unwrap_or(false);
            let marker = if checked { "[x] " } else { "[ ] " };
            let style = if i == state.cursor {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{}{}", marker, name), style))
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Space: toggle (applies immediately)  Esc: close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserStatus;

    fn options() -> Vec<String> {
        vec!["Admin".to_string(), "Editor".to_string(), "Viewer".to_string()]
    }

    #[test]
    fn test_from_user_marks_held_roles() {
        let user = User::new(
            UserId::new(2),
            "Jane Smith",
            "jane@example.com",
            vec!["Editor".to_string(), "Viewer".to_string()],
            UserStatus::Inactive,
        );
        let state = AssignRolesState::from_user(&user, options());

        assert_eq!(state.user_id, Some(UserId::new(2)));
        assert_eq!(state.selected, vec![false, true, true]);
        assert_eq!(state.chosen_roles(), vec!["Editor", "Viewer"]);
    }

    #[test]
    fn test_toggle_and_cursor_bounds() {
        let user = User::new(
            UserId::new(1),
            "John Doe",
            "john@example.com",
            vec!["Admin".to_string()],
            UserStatus::Active,
        );
        let mut state = AssignRolesState::from_user(&user, options());

        state.toggle_at_cursor();
        assert!(state.chosen_roles().is_empty());

        state.cursor_down();
        state.cursor_down();
        state.cursor_down();
        assert_eq!(state.cursor, 2);
        state.toggle_at_cursor();
        assert_eq!(state.chosen_roles(), vec!["Viewer"]);
    }
}
