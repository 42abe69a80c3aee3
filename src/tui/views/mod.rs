//! TUI views
//!
//! The main views (users, roles, audit log), the sidebar, the status bar,
//! and dialog dispatch.

pub mod audit;
pub mod roles;
pub mod sidebar;
pub mod status_bar;
pub mod users;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    match app.active_view {
        ActiveView::Users => users::render(frame, app, layout.main),
        ActiveView::Roles => roles::render(frame, app, layout.main),
        ActiveView::Audit => audit::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    if let Some(notification) = app.notifications.current() {
        let area = toast_area(frame);
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

/// Render the active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::None => {}
        ActiveDialog::UserForm => dialogs::user_form::render(frame, &app.user_form),
        ActiveDialog::RoleForm => dialogs::role_form::render(frame, &app.role_form),
        ActiveDialog::AssignRoles => dialogs::assign_roles::render(frame, &app.assign_roles),
        ActiveDialog::ConfirmDeleteUser(_) => {
            dialogs::confirm::render(frame, "Are you sure you want to delete this user?");
        }
        ActiveDialog::ConfirmDeleteRole(_) => {
            dialogs::confirm::render(frame, "Are you sure you want to delete this role?");
        }
        ActiveDialog::Help => dialogs::help::render(frame),
    }
}

/// Toast position: top-right corner
fn toast_area(frame: &Frame) -> ratatui::layout::Rect {
    let area = frame.area();
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(40)])
        .split(vertical[0]);
    horizontal[1]
}
