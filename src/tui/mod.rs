//! Terminal user interface
//!
//! An interactive console for user and role administration built on
//! ratatui: list views with filters, modal forms for data entry,
//! confirmation dialogs for deletes, and an audit log view.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
