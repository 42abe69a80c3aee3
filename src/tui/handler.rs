//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state, and maps user intents onto the user/role services.
//! Destructive actions pass through a confirmation dialog before any store
//! call is made.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::{Permission, RoleId, UserId};
use crate::services::{RoleService, UserService};

use super::app::{ActiveDialog, ActiveView, App, FocusedPanel, InputMode};
use super::dialogs::{AssignRolesState, RoleFormState, UserFormState};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) => Ok(()),
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Search => handle_search_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Tab => {
            app.toggle_panel_focus();
            return Ok(());
        }
        _ => {}
    }

    match app.focused_panel {
        FocusedPanel::Sidebar => handle_sidebar_key(app, key),
        FocusedPanel::Main => handle_main_panel_key(app, key),
    }
}

/// Handle keys when the sidebar is focused
fn handle_sidebar_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(ActiveView::ALL.len()),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Enter => {
            let view = ActiveView::ALL[app.sidebar_index];
            app.switch_view(view);
            app.focused_panel = FocusedPanel::Main;
        }
        _ => {}
    }
    Ok(())
}

/// Handle keys when the main panel is focused
fn handle_main_panel_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_view {
        ActiveView::Users => handle_users_key(app, key),
        ActiveView::Roles => handle_roles_key(app, key),
        ActiveView::Audit => {
            match key.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    let max = app.dir.audit.len();
                    app.move_down(max);
                }
                KeyCode::Char('k') | KeyCode::Up => app.move_up(),
                _ => {}
            }
            Ok(())
        }
    }
}

/// Keys for the users view
fn handle_users_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let max = app.visible_users().len();
            app.move_down(max);
        }
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
        }
        KeyCode::Char('f') => {
            app.cycle_role_filter();
        }
        KeyCode::Char('c') => {
            app.user_filter.search.clear();
            app.user_filter.role = None;
            app.search_input.clear();
            app.clamp_selection();
        }

        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.user_form = UserFormState::new(app.dir.roles.names());
            app.open_dialog(ActiveDialog::UserForm);
        }
        KeyCode::Char('e') => {
            if let Some(id) = app.selected_user_id() {
                // Lookup cannot fail while the id comes from the live view.
                if let Some(user) = app.dir.users.get(id) {
                    app.user_form = UserFormState::from_user(user, app.dir.roles.names());
                    app.open_dialog(ActiveDialog::UserForm);
                }
            }
        }
        KeyCode::Char('r') => {
            if let Some(id) = app.selected_user_id() {
                if let Some(user) = app.dir.users.get(id) {
                    app.assign_roles = AssignRolesState::from_user(user, app.dir.roles.names());
                    app.open_dialog(ActiveDialog::AssignRoles);
                }
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = app.selected_user_id() {
                app.open_dialog(ActiveDialog::ConfirmDeleteUser(id));
            }
        }
        _ => {}
    }
    Ok(())
}

/// Keys for the roles view
fn handle_roles_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let max = app.visible_roles().len();
            app.move_down(max);
        }
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        // Toggle a permission on the selected role
        KeyCode::Char('1') => toggle_selected_permission(app, Permission::Read),
        KeyCode::Char('2') => toggle_selected_permission(app, Permission::Write),
        KeyCode::Char('3') => toggle_selected_permission(app, Permission::Delete),

        // Toggle the permission filter (shifted digits)
        KeyCode::Char('!') => {
            app.role_filter.toggle(Permission::Read);
            app.clamp_selection();
        }
        KeyCode::Char('@') => {
            app.role_filter.toggle(Permission::Write);
            app.clamp_selection();
        }
        KeyCode::Char('#') => {
            app.role_filter.toggle(Permission::Delete);
            app.clamp_selection();
        }
        KeyCode::Char('c') => {
            app.role_filter.permissions.clear();
            app.clamp_selection();
        }

        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.role_form = RoleFormState::new();
            app.open_dialog(ActiveDialog::RoleForm);
        }
        KeyCode::Char('e') => {
            if let Some(id) = app.selected_role_id() {
                if let Some(role) = app.dir.roles.get(id) {
                    app.role_form = RoleFormState::from_role(role);
                    app.open_dialog(ActiveDialog::RoleForm);
                }
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = app.selected_role_id() {
                app.open_dialog(ActiveDialog::ConfirmDeleteRole(id));
            }
        }
        _ => {}
    }
    Ok(())
}

/// Toggle `permission` on the role under the cursor
fn toggle_selected_permission(app: &mut App, permission: Permission) {
    let Some(id) = app.selected_role_id() else {
        return;
    };
    let actor = app.settings.actor.clone();
    match RoleService::new(&mut app.dir, actor).toggle_permission(id, permission) {
        Ok(_) => app.notify_success("Permissions updated successfully"),
        Err(e) => app.notify_error(e.to_string()),
    }
}

/// Handle keys while the search bar is active
fn handle_search_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            app.search_input.backspace();
            app.user_filter.search = app.search_input.value().to_string();
            app.clamp_selection();
        }
        KeyCode::Left => app.search_input.move_left(),
        KeyCode::Right => app.search_input.move_right(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input.insert(c);
            app.user_filter.search = app.search_input.value().to_string();
            app.clamp_selection();
        }
        _ => {}
    }
    Ok(())
}

/// Route keys to the active dialog
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog.clone() {
        ActiveDialog::None => Ok(()),
        ActiveDialog::Help => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter) {
                app.close_dialog();
            }
            Ok(())
        }
        ActiveDialog::ConfirmDeleteUser(id) => handle_confirm_delete_user(app, key, id),
        ActiveDialog::ConfirmDeleteRole(id) => handle_confirm_delete_role(app, key, id),
        ActiveDialog::UserForm => handle_user_form_key(app, key),
        ActiveDialog::RoleForm => handle_role_form_key(app, key),
        ActiveDialog::AssignRoles => handle_assign_roles_key(app, key),
    }
}

/// Confirmation gate for user deletion
fn handle_confirm_delete_user(app: &mut App, key: KeyEvent, id: UserId) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.close_dialog();
            let actor = app.settings.actor.clone();
            match UserService::new(&mut app.dir, actor).delete(id) {
                Ok(_) => app.notify_success("User deleted successfully"),
                Err(e) => app.notify_error(e.to_string()),
            }
            app.clamp_selection();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
        _ => {}
    }
    Ok(())
}

/// Confirmation gate for role deletion
fn handle_confirm_delete_role(app: &mut App, key: KeyEvent, id: RoleId) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.close_dialog();
            let actor = app.settings.actor.clone();
            match RoleService::new(&mut app.dir, actor).delete(id) {
                Ok(_) => app.notify_success("Role deleted successfully"),
                Err(e) => app.notify_error(e.to_string()),
            }
            app.clamp_selection();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
        _ => {}
    }
    Ok(())
}

/// Keys for the user form dialog
fn handle_user_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    use super::dialogs::UserField;

    match key.code {
        KeyCode::Esc => {
            // Cancel: discard the buffer, no store mutation, no audit entry.
            app.close_dialog();
            return Ok(());
        }
        KeyCode::Tab => {
            app.user_form.next_field();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.user_form.prev_field();
            return Ok(());
        }
        KeyCode::Enter => {
            submit_user_form(app);
            return Ok(());
        }
        _ => {}
    }

    match app.user_form.focused_field {
        UserField::Roles => match key.code {
            KeyCode::Char(' ') => app.user_form.toggle_role_at_cursor(),
            KeyCode::Char('j') | KeyCode::Down => app.user_form.role_cursor_down(),
            KeyCode::Char('k') | KeyCode::Up => app.user_form.role_cursor_up(),
            _ => {}
        },
        UserField::Status => {
            if matches!(
                key.code,
                KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right
            ) {
                app.user_form.status = app.user_form.status.toggled();
            }
        }
        _ => {
            if let Some(input) = app.user_form.focused_input() {
                match key.code {
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        input.insert(c);
                    }
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    _ => {}
                }
            }
        }
    }
    Ok(())
}

/// Submit the user form: create or update depending on mode.
/// On validation failure the session stays open with the error shown.
fn submit_user_form(app: &mut App) {
    if !app.user_form.validate() {
        return;
    }

    let actor = app.settings.actor.clone();
    let result = match app.user_form.editing_user_id {
        Some(id) => {
            let patch = app.user_form.to_update();
            UserService::new(&mut app.dir, actor).update(id, patch)
        }
        None => {
            let new = app.user_form.to_new_user();
            UserService::new(&mut app.dir, actor).create(new)
        }
    };

    match result {
        Ok(_) => {
            let message = if app.user_form.is_edit {
                "User updated successfully"
            } else {
                "User added successfully"
            };
            app.close_dialog();
            app.notify_success(message);
            app.clamp_selection();
        }
        Err(e) => {
            if e.is_validation() {
                app.user_form.error_message = Some(e.to_string());
            } else {
                app.close_dialog();
                app.notify_error(e.to_string());
            }
        }
    }
}

/// Keys for the role form dialog
fn handle_role_form_key(app: &mut App, key: KeyEvent) -> Result<()> {
    use super::dialogs::RoleField;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return Ok(());
        }
        KeyCode::Tab => {
            app.role_form.next_field();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.role_form.prev_field();
            return Ok(());
        }
        KeyCode::Enter => {
            submit_role_form(app);
            return Ok(());
        }
        _ => {}
    }

    if app.role_form.focused_field == RoleField::Permissions {
        match key.code {
            KeyCode::Char(' ') => app.role_form.toggle_permission_at_cursor(),
            KeyCode::Char('j') | KeyCode::Down => app.role_form.permission_cursor_down(),
            KeyCode::Char('k') | KeyCode::Up => app.role_form.permission_cursor_up(),
            _ => {}
        }
    } else if let Some(input) = app.role_form.focused_input() {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            _ => {}
        }
    }
    Ok(())
}

/// Submit the role form: create or update depending on mode
fn submit_role_form(app: &mut App) {
    if !app.role_form.validate() {
        return;
    }

    let actor = app.settings.actor.clone();
    let result = match app.role_form.editing_role_id {
        Some(id) => {
            let patch = app.role_form.to_update();
            RoleService::new(&mut app.dir, actor).update(id, patch)
        }
        None => {
            let new = app.role_form.to_new_role();
            RoleService::new(&mut app.dir, actor).create(new)
        }
    };

    match result {
        Ok(_) => {
            let message = if app.role_form.is_edit {
                "Role updated successfully"
            } else {
                "Role created successfully"
            };
            app.close_dialog();
            app.notify_success(message);
            app.clamp_selection();
        }
        Err(e) => {
            if e.is_validation() {
                app.role_form.error_message = Some(e.to_string());
            } else {
                app.close_dialog();
                app.notify_error(e.to_string());
            }
        }
    }
}

/// Keys for the inline role assignment dialog; toggles apply immediately
fn handle_assign_roles_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.close_dialog();
        }
        KeyCode::Char('j') | KeyCode::Down => app.assign_roles.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.assign_roles.cursor_up(),
        KeyCode::Char(' ') => {
            app.assign_roles.toggle_at_cursor();
            let Some(id) = app.assign_roles.user_id else {
                return Ok(());
            };
            let roles = app.assign_roles.chosen_roles();
            let actor = app.settings.actor.clone();
            match UserService::new(&mut app.dir, actor).set_roles(id, roles) {
                Ok(_) => app.notify_success("Roles updated successfully"),
                Err(e) => {
                    app.close_dialog();
                    app.notify_error(e.to_string());
                }
            }
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::store::Directory;

    fn app() -> App {
        let mut app = App::new(Directory::with_sample_data(), Settings::default());
        app.focused_panel = FocusedPanel::Main;
        app
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        handle_event(&mut app, press(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = app();
        handle_event(&mut app, press(KeyCode::Char('d'))).unwrap();
        assert_eq!(
            app.active_dialog,
            ActiveDialog::ConfirmDeleteUser(UserId::new(1))
        );
        // Nothing deleted, nothing audited until confirmed.
        assert_eq!(app.dir.users.len(), 2);
        assert!(app.dir.audit.is_empty());

        handle_event(&mut app, press(KeyCode::Char('n'))).unwrap();
        assert!(!app.has_dialog());
        assert_eq!(app.dir.users.len(), 2);
    }

    #[test]
    fn test_confirmed_delete_mutates_and_audits() {
        let mut app = app();
        handle_event(&mut app, press(KeyCode::Char('d'))).unwrap();
        handle_event(&mut app, press(KeyCode::Char('y'))).unwrap();

        assert_eq!(app.dir.users.len(), 1);
        assert_eq!(app.dir.audit.len(), 1);
        assert!(app
            .dir
            .audit
            .latest()
            .unwrap()
            .action
            .contains("John Doe"));
        assert_eq!(
            app.notifications.current().unwrap().message,
            "User deleted successfully"
        );
    }

    #[test]
    fn test_form_cancel_discards_without_mutation() {
        let mut app = app();
        handle_event(&mut app, press(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::UserForm);

        handle_event(&mut app, press(KeyCode::Char('Z'))).unwrap();
        handle_event(&mut app, press(KeyCode::Esc)).unwrap();

        assert!(!app.has_dialog());
        assert_eq!(app.dir.users.len(), 2);
        assert!(app.dir.audit.is_empty());
    }

    #[test]
    fn test_submit_invalid_form_keeps_session_open() {
        let mut app = app();
        handle_event(&mut app, press(KeyCode::Char('a'))).unwrap();
        handle_event(&mut app, press(KeyCode::Enter)).unwrap();

        assert_eq!(app.active_dialog, ActiveDialog::UserForm);
        assert!(app.user_form.error_message.is_some());
        assert_eq!(app.dir.users.len(), 2);
    }

    #[test]
    fn test_toggle_permission_key() {
        let mut app = app();
        app.switch_view(ActiveView::Roles);
        handle_event(&mut app, press(KeyCode::Char('2'))).unwrap();

        let admin = app.dir.roles.get(RoleId::new(1)).unwrap();
        assert!(!admin.has_permission(Permission::Write));
        assert_eq!(app.dir.audit.len(), 1);
    }

    #[test]
    fn test_search_mode_updates_filter_live() {
        let mut app = app();
        handle_event(&mut app, press(KeyCode::Char('/'))).unwrap();
        assert_eq!(app.input_mode, InputMode::Search);

        for c in "jane".chars() {
            handle_event(&mut app, press(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(app.user_filter.search, "jane");
        assert_eq!(app.visible_users().len(), 1);

        handle_event(&mut app, press(KeyCode::Enter)).unwrap();
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_assign_roles_applies_immediately() {
        let mut app = app();
        handle_event(&mut app, press(KeyCode::Char('r'))).unwrap();
        assert_eq!(app.active_dialog, ActiveDialog::AssignRoles);

        // John holds Admin; toggling the first row drops it.
        handle_event(&mut app, press(KeyCode::Char(' '))).unwrap();
        let john = app.dir.users.get(UserId::new(1)).unwrap();
        assert!(john.roles.is_empty());
        assert_eq!(app.dir.audit.len(), 1);

        handle_event(&mut app, press(KeyCode::Esc)).unwrap();
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_tick_expires_notifications() {
        let mut app = app();
        let mut toast = crate::tui::widgets::Notification::success("done");
        toast.duration_secs = 0;
        app.notifications.push(toast);

        handle_event(&mut app, Event::Tick).unwrap();
        assert!(app.notifications.is_empty());
    }
}
