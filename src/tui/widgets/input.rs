//! Text input widget
//!
//! A single-line text input with cursor support, used by the form dialogs
//! and the user search bar.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// A simple text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position (byte offset; input is ASCII-oriented form data)
    pub cursor: usize,
    /// Placeholder text shown while empty
    pub placeholder: String,
}

impl TextInput {
    /// Create a new empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set content, moving the cursor to the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self.cursor = self.content.len();
        self
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor one character left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            let prev = self.content[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev;
        }
    }

    /// Move cursor one character right
    pub fn move_right(&mut self) {
        if self.cursor < self.content.len() {
            let next = self.content[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor += next;
        }
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Render as a line, drawing a block cursor when focused
    pub fn as_line(&self, focused: bool) -> Line<'_> {
        if self.content.is_empty() && !focused {
            return Line::from(Span::styled(
                self.placeholder.as_str(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        if !focused {
            return Line::from(self.content.as_str());
        }

        let (before, rest) = self.content.split_at(self.cursor);
        let mut chars = rest.chars();
        let at_cursor = chars.next().map(String::from).unwrap_or_else(|| " ".into());
        let after: &str = chars.as_str();

        Line::from(vec![
            Span::raw(before),
            Span::styled(
                at_cursor,
                Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::raw(after),
        ])
    }
}
