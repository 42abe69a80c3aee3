//! User form dialog
//!
//! Modal form for adding or editing a user: name, email, role checklist and
//! status toggle, with Tab navigation and per-field validation. The form
//! buffer is transient; it materializes into the store only on submit.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::user::is_valid_email;
use crate::models::{User, UserId, UserStatus};
use crate::services::{NewUser, UserUpdate};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the user form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserField {
    #[default]
    Name,
    Email,
    Roles,
    Status,
}

impl UserField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Roles,
            Self::Roles => Self::Status,
            Self::Status => Self::Name,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Status,
            Self::Email => Self::Name,
            Self::Roles => Self::Email,
            Self::Status => Self::Roles,
        }
    }
}

/// State for the user form dialog
#[derive(Debug, Clone, Default)]
pub struct UserFormState {
    /// Currently focused field
    pub focused_field: UserField,

    /// Name input
    pub name_input: TextInput,

    /// Email input
    pub email_input: TextInput,

    /// Role names offered in the checklist (from the role store)
    pub role_options: Vec<String>,

    /// Which of `role_options` are checked
    pub selected_roles: Vec<bool>,

    /// Cursor within the role checklist
    pub role_cursor: usize,

    /// Chosen status
    pub status: UserStatus,

    /// Whether this is an edit (vs a new user)
    pub is_edit: bool,

    /// User being edited (if editing)
    pub editing_user_id: Option<UserId>,

    /// Validation message to display
    pub error_message: Option<String>,
}

impl UserFormState {
    /// Fresh form for creating a user
    pub fn new(role_options: Vec<String>) -> Self {
        let selected_roles = vec![false; role_options.len()];
        Self {
            name_input: TextInput::new().placeholder("Enter name"),
            email_input: TextInput::new().placeholder("Enter email"),
            role_options,
            selected_roles,
            ..Default::default()
        }
    }

    /// Form pre-populated from an existing user
    pub fn from_user(user: &User, role_options: Vec<String>) -> Self {
        let selected_roles = role_options
            .iter()
            .map(|name| user.has_role(name))
            .collect();
        Self {
            focused_field: UserField::Name,
            name_input: TextInput::new().content(&user.name),
            email_input: TextInput::new().content(&user.email),
            role_options,
            selected_roles,
            role_cursor: 0,
            status: user.status,
            is_edit: true,
            editing_user_id: Some(user.id),
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
            UserField::Name => Some(&mut self.name_input),
            UserField::Email => Some(&mut self.email_input),
            _ => None,
        }
    }

    /// Move the role checklist cursor
    pub fn role_cursor_up(&mut self) {
        self.role_cursor = self.role_cursor.saturating_sub(1);
    }

    /// Move the role checklist cursor
    pub fn role_cursor_down(&mut self) {
        if self.role_cursor + 1 < self.role_options.len() {
            self.role_cursor += 1;
        }
    }

    /// Flip the checkbox under the cursor
    pub fn toggle_role_at_cursor(&mut self) {
        if let Some(checked) = self.selected_roles.get_mut(self.role_cursor) {
            *checked = !*checked;
        }
    }

    /// The role names currently checked
    pub fn chosen_roles(&self) -> Vec<String> {
        self.role_options
            .iter()
            .zip(&self.selected_roles)
            .filter(|(_, checked)| **checked)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Validate the buffer, focusing the offending field on failure.
    /// Mirrors the store-side rules so errors land next to the field.
    pub fn validate(&mut self) -> bool {
        let (field, message) = if self.name_input.value().trim().is_empty() {
            (UserField::Name, "Please enter the user's name")
        } else if self.email_input.value().trim().is_empty() {
            (UserField::Email, "Please enter the user's email")
        } else if !is_valid_email(self.email_input.value().trim()) {
            (UserField::Email, "Please enter a valid email")
        } else if self.chosen_roles().is_empty() {
            (UserField::Roles, "Please select at least one role")
        } else {
            self.error_message = None;
            return true;
        };

        self.focused_field = field;
        self.error_message = Some(message.to_string());
        false
    }

    /// Buffer contents as creation fields
    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            name: self.name_input.value().trim().to_string(),
            email: self.email_input.value().trim().to_string(),
            roles: self.chosen_roles(),
            status: self.status,
        }
    }

    /// Buffer contents as an update patch (the form edits every field)
    pub fn to_update(&self) -> UserUpdate {
        UserUpdate {
            name: Some(self.name_input.value().trim().to_string()),
            email: Some(self.email_input.value().trim().to_string()),
            roles: Some(self.chosen_roles()),
            status: Some(self.status),
        }
    }
}

/// Render the user form dialog
pub fn render(frame: &mut Frame, form: &UserFormState) {
    let height = 13 + form.role_options.len() as u16;
    let area = centered_rect_fixed(52, height, frame.area());
    frame.render_widget(Clear, area);

    let title = if form.is_edit { " Edit User " } else { " Add User " };
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
            Constraint::Length(2), // Email
            Constraint::Length(1), // Roles label
            Constraint::Length(form.role_options.len() as u16),
            Constraint::Length(2), // Status
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

    let name_focused = form.focused_field == UserField::Name;
    frame.render_widget(
        Paragraph::new(vec![label("Name", name_focused), form.name_input.as_line(name_focused)]),
        rows[0],
    );

    let email_focused = form.focused_field == UserField::Email;
    frame.render_widget(
        Paragraph::new(vec![
            label("Email", email_focused),
            form.email_input.as_line(email_focused),
        ]),
        rows[1],
    );

    let roles_focused = form.focused_field == UserField::Roles;
    frame.render_widget(Paragraph::new(label("Roles", roles_focused)), rows[2]);

    let role_lines: Vec<Line> = form
        .role_options
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let checked = form.selected_roles.get(i).copied().unwrap_or(false);
            let marker = if checked { "[x] " } else { "[ ] " };
            let style = if roles_focused && i == form.role_cursor {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{}{}", marker, name), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(role_lines), rows[3]);

    let status_focused = form.focused_field == UserField::Status;
    frame.render_widget(
        Paragraph::new(vec![
            label("Status", status_focused),
            Line::from(Span::styled(
                format!("< {} >", form.status),
                if form.status == UserStatus::Active {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::Red)
                },
            )),
        ]),
        rows[4],
    );

    if let Some(message) = &form.error_message {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Red),
            ))),
            rows[5],
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Tab: next field  Space: toggle  Enter: save  Esc: cancel",
            Style::default().fg(Color::DarkGray),
        ))),
        rows[6],
    );
}
