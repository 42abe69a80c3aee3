//! Role form dialog
//!
//! Modal form for adding or editing a role: name, description, and a
//! checklist over the fixed permission vocabulary.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Permission, Role, RoleId};
use crate::services::{NewRole, RoleUpdate};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the role form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleField {
    #[default]
    Name,
    Description,
    Permissions,
}

impl RoleField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Description => Self::Permissions,
            Self::Permissions => Self::Name,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Permissions,
            Self::Description => Self::Name,
            Self::Permissions => Self::Description,
        }
    }
}

/// State for the role form dialog
#[derive(Debug, Clone, Default)]
pub struct RoleFormState {
    /// Currently focused field
    pub focused_field: RoleField,

    /// Name input
    pub name_input: TextInput,

    /// Description input
    pub description_input: TextInput,

    /// Which of [`Permission::ALL`] are checked
    pub selected_permissions: Vec<bool>,

    /// Cursor within the permission checklist
    pub permission_cursor: usize,

    /// Whether this is an edit (vs a new role)
    pub is_edit: bool,

    /// Role being edited (if editing)
    pub editing_role_id: Option<RoleId>,

    /// Validation message to display
    pub error_message: Option<String>,
}

impl RoleFormState {
    /// Fresh form for creating a role
    pub fn new() -> Self {
        Self {
            name_input: TextInput::new().placeholder("Enter role name"),
            description_input: TextInput::new().placeholder("Enter description"),
            selected_permissions: vec![false; Permission::ALL.len()],
            ..Default::default()
        }
    }

    /// Form pre-populated from an existing role
    pub fn from_role(role: &Role) -> Self {
        let selected_permissions = Permission::ALL
            .iter()
            .map(|p| role.has_permission(*p))
            .collect();
        Self {
            focused_field: RoleField::Name,
            name_input: TextInput::new().content(&role.name),
            description_input: TextInput::new().content(&role.description),
            selected_permissions,
            permission_cursor: 0,
            is_edit: true,
            editing_role_id: Some(role.id),
            error_message: None,
        }
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Get the currently focused text input (if applicable)
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            RoleField::Name => Some(&mut self.name_input),
            RoleField::Description => Some(&mut self.description_input),
            RoleField::Permissions => None,
        }
    }

    /// Move the permission checklist cursor
    pub fn permission_cursor_up(&mut self) {
        self.permission_cursor = self.permission_cursor.saturating_sub(1);
    }

    /// Move the permission checklist cursor
    pub fn permission_cursor_down(&mut self) {
        if self.permission_cursor + 1 < Permission::ALL.len() {
            self.permission_cursor += 1;
        }
    }

    /// Flip the checkbox under the cursor
    pub fn toggle_permission_at_cursor(&mut self) {
        if let Some(checked) = self.selected_permissions.get_mut(self.permission_cursor) {
            *checked = !*checked;
        }
    }

    /// The permissions currently checked
    pub fn chosen_permissions(&self) -> Vec<Permission> {
        Permission::ALL
            .iter()
            .zip(&self.selected_permissions)
            .filter(|(_, checked)| **checked)
            .map(|(p, _)| *p)
            .collect()
    }

    /// Validate the buffer, focusing the offending field on failure
    pub fn validate(&mut self) -> bool {
        let (field, message) = if self.name_input.value().trim().is_empty() {
            (RoleField::Name, "Please enter the role name")
        } else if self.description_input.value().trim().is_empty() {
            (RoleField::Description, "Please enter the description")
        } else {
            self.error_message = None;
            return true;
        };

        self.focused_field = field;
        self.error_message = Some(message.to_string());
        false
    }

    /// Buffer contents as creation fields
    pub fn to_new_role(&self) -> NewRole {
        NewRole {
            name: self.name_input.value().trim().to_string(),
            description: self.description_input.value().trim().to_string(),
            permissions: self.chosen_permissions(),
        }
    }

    /// Buffer contents as an update patch (the form edits every field)
    pub fn to_update(&self) -> RoleUpdate {
        RoleUpdate {
            name: Some(self.name_input.value().trim().to_string()),
            description: Some(self.description_input.value().trim().to_string()),
            permissions: Some(self.chosen_permissions()),
        }
    }
}

/// Render the role form dialog
pub fn render(frame: &mut Frame, form: &RoleFormState) {
    let area = centered_rect_fixed(52, 14, frame.area());
    frame.render_widget(Clear, area);

    let title = if form.is_edit { " Edit Role " } else { " Add Role " };
    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Name
            Constraint::Length(2), // Description
            Constraint::Length(1), // Permissions label
            Constraint::Length(Permission::ALL.len() as u16),
            Constraint::Length(1), // Error
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let label = |text: &'static str, focused: bool| {
        let style = if focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        Line::from(Span::styled(text, style))
    };

    let name_focused = form.focused_field == RoleField::Name;
    frame.render_widget(
        Paragraph::new(vec![
            label("Role Name", name_focused),
            form.name_input.as_line(name_focused),
        ]),
        rows[0],
    );

    let desc_focused = form.focused_field == RoleField::Description;
    frame.render_widget(
        Paragraph::new(vec![
            label("Description", desc_focused),
            form.description_input.as_line(desc_focused),
        ]),
        rows[1],
    );

    let perms_focused = form.focused_field == RoleField::Permissions;
    frame.render_widget(Paragraph::new(label("Permissions", perms_focused)), rows[2]);

    let permission_lines: Vec<Line> = Permission::ALL
        .iter()
        .enumerate()
        .map(|(i, permission)| {
            let checked = form.selected_permissions.get(i).copied().unwrap_or(false);
            let marker = if checked { "[x] " } else { "[ ] " };
            let style = if perms_focused && i == form.permission_cursor {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{}{}", marker, permission), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(permission_lines), rows[3]);

    if let Some(message) = &form.error_message {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Red),
            ))),
            rows[4],
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Tab: next field  Space: toggle  Enter: save  Esc: cancel",
            Style::default().fg(Color::DarkGray),
        ))),
        rows[5],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_form_is_blank() {
        let form = RoleFormState::new();
        assert!(!form.is_edit);
        assert_eq!(form.selected_permissions, vec![false, false, false]);
        assert!(form.chosen_permissions().is_empty());
    }

    #[test]
    fn test_from_role_prepopulates() {
        let role = Role::new(
            RoleId::new(2),
            "Editor",
            "Can edit content but cannot delete",
            vec![Permission::Read, Permission::Write],
        );
        let form = RoleFormState::from_role(&role);

        assert!(form.is_edit);
        assert_eq!(form.editing_role_id, Some(RoleId::new(2)));
        assert_eq!(form.name_input.value(), "Editor");
        assert_eq!(form.selected_permissions, vec![true, true, false]);
        assert_eq!(
            form.chosen_permissions(),
            vec![Permission::Read, Permission::Write]
        );
    }

    #[test]
    fn test_validation_messages() {
        let mut form = RoleFormState::new();
        assert!(!form.validate());
        assert_eq!(form.focused_field, RoleField::Name);

        form.name_input = TextInput::new().content("Moderator");
        assert!(!form.validate());
        assert_eq!(form.focused_field, RoleField::Description);

        form.description_input = TextInput::new().content("Reviews content");
        assert!(form.validate());
        assert!(form.error_message.is_none());
    }

    #[test]
    fn test_permission_checklist() {
        let mut form = RoleFormState::new();
        form.toggle_permission_at_cursor();
        form.permission_cursor_down();
        form.permission_cursor_down();
        form.toggle_permission_at_cursor();
        assert_eq!(
            form.chosen_permissions(),
            vec![Permission::Read, Permission::Delete]
        );

        // Cursor clamps at the end of the vocabulary.
        form.permission_cursor_down();
        assert_eq!(form.permission_cursor, 2);
    }

    #[test]
    fn test_to_new_role() {
        let mut form = RoleFormState::new();
        form.name_input = TextInput::new().content(" Moderator ");
        form.description_input = TextInput::new().content("Reviews content");
        form.toggle_permission_at_cursor();

        let new = form.to_new_role();
        assert_eq!(new.name, "Moderator");
        assert_eq!(new.permissions, vec![Permission::Read]);
    }
}
