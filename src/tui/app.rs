//! Application state for the TUI
//!
//! The App struct owns the session's Directory and everything needed for
//! rendering and handling events.

use crate::config::Settings;
use crate::models::{filter_roles, filter_users, Role, RoleFilter, RoleId, User, UserFilter, UserId};
use crate::store::Directory;

use super::dialogs::{AssignRolesState, RoleFormState, UserFormState};
use super::widgets::{Notification, NotificationQueue, TextInput};

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Users,
    Roles,
    Audit,
}

impl ActiveView {
    /// Views in sidebar order
    pub const ALL: [ActiveView; 3] = [Self::Users, Self::Roles, Self::Audit];

    /// Sidebar label
    pub fn title(&self) -> &'static str {
        match self {
            Self::Users => "User Management",
            Self::Roles => "Role Management",
            Self::Audit => "Audit Logs",
        }
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Keystrokes go into the user search bar
    Search,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    UserForm,
    RoleForm,
    AssignRoles,
    ConfirmDeleteUser(UserId),
    ConfirmDeleteRole(RoleId),
    Help,
}

/// Main application state
pub struct App {
    /// All session records and the audit trail
    pub dir: Directory,

    /// Runtime settings
    pub settings: Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the sidebar
    pub sidebar_index: usize,

    /// Selected row in the users table (index into the filtered view)
    pub selected_user_index: usize,

    /// Selected row in the roles table (index into the filtered view)
    pub selected_role_index: usize,

    /// Scroll offset for the audit table
    pub audit_scroll: usize,

    /// Users table criteria
    pub user_filter: UserFilter,

    /// Roles table criteria
    pub role_filter: RoleFilter,

    /// Search bar buffer (mirrored into `user_filter.search`)
    pub search_input: TextInput,

    /// User form state (edit session)
    pub user_form: UserFormState,

    /// Role form state (edit session)
    pub role_form: RoleFormState,

    /// Inline role assignment state
    pub assign_roles: AssignRolesState,

    /// Pending toast notifications
    pub notifications: NotificationQueue,
}

impl App {
    /// Create a new App instance owning the session directory
    pub fn new(dir: Directory, settings: Settings) -> Self {
        Self {
            dir,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            sidebar_index: 0,
            selected_user_index: 0,
            selected_role_index: 0,
            audit_scroll: 0,
            user_filter: UserFilter::default(),
            role_filter: RoleFilter::default(),
            search_input: TextInput::new().placeholder("Search by name or email"),
            user_form: UserFormState::default(),
            role_form: RoleFormState::default(),
            assign_roles: AssignRolesState::default(),
            notifications: NotificationQueue::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Queue a success toast
    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notifications.push(Notification::success(message));
    }

    /// Queue an error toast
    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notifications.push(Notification::error(message));
    }

    /// Users passing the current criteria, recomputed on demand
    pub fn visible_users(&self) -> Vec<&User> {
        filter_users(self.dir.users.list(), &self.user_filter)
    }

    /// Roles passing the current criteria, recomputed on demand
    pub fn visible_roles(&self) -> Vec<&Role> {
        filter_roles(self.dir.roles.list(), &self.role_filter)
    }

    /// Id of the user under the table cursor, if any
    pub fn selected_user_id(&self) -> Option<UserId> {
        self.visible_users()
            .get(self.selected_user_index)
            .map(|u| u.id)
    }

    /// Id of the role under the table cursor, if any
    pub fn selected_role_id(&self) -> Option<RoleId> {
        self.visible_roles()
            .get(self.selected_role_index)
            .map(|r| r.id)
    }

    /// Switch to a different view, resetting selection state
    pub fn switch_view(&mut self, view: ActiveView) {
        self.active_view = view;
        self.selected_user_index = 0;
        self.selected_role_index = 0;
        self.audit_scroll = 0;
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    /// Open a dialog. Form dialogs expect their state prepared by the caller.
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog, discarding any form buffer
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Move selection up in the focused list
    pub fn move_up(&mut self) {
        match self.focused_panel {
            FocusedPanel::Sidebar => {
                self.sidebar_index = self.sidebar_index.saturating_sub(1);
            }
            FocusedPanel::Main => match self.active_view {
                ActiveView::Users => {
                    self.selected_user_index = self.selected_user_index.saturating_sub(1);
                }
                ActiveView::Roles => {
                    self.selected_role_index = self.selected_role_index.saturating_sub(1);
                }
                ActiveView::Audit => {
                    self.audit_scroll = self.audit_scroll.saturating_sub(1);
                }
            },
        }
    }

    /// Move selection down in the focused list, clamped to `max` rows
    pub fn move_down(&mut self, max: usize) {
        match self.focused_panel {
            FocusedPanel::Sidebar => {
                if self.sidebar_index < ActiveView::ALL.len() - 1 {
                    self.sidebar_index += 1;
                }
            }
            FocusedPanel::Main => match self.active_view {
                ActiveView::Users => {
                    if self.selected_user_index < max.saturating_sub(1) {
                        self.selected_user_index += 1;
                    }
                }
                ActiveView::Roles => {
                    if self.selected_role_index < max.saturating_sub(1) {
                        self.selected_role_index += 1;
                    }
                }
                ActiveView::Audit => {
                    if self.audit_scroll < max.saturating_sub(1) {
                        self.audit_scroll += 1;
                    }
                }
            },
        }
    }

    /// Keep table cursors inside the current filtered views
    pub fn clamp_selection(&mut self) {
        let users = self.visible_users().len();
        if self.selected_user_index >= users {
            self.selected_user_index = users.saturating_sub(1);
        }
        let roles = self.visible_roles().len();
        if self.selected_role_index >= roles {
            self.selected_role_index = roles.saturating_sub(1);
        }
    }

    /// Cycle the users role filter through None -> each role -> None
    pub fn cycle_role_filter(&mut self) {
        let names = self.dir.roles.names();
        let next = match &self.user_filter.role {
            None => names.first().cloned(),
            Some(current) => {
                let position = names.iter().position(|n| n == current);
                match position {
                    Some(i) if i + 1 < names.len() => Some(names[i + 1].clone()),
                    _ => None,
                }
            }
        };
        self.user_filter.role = next;
        self.clamp_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Permission;

    fn sample_app() -> App {
        App::new(Directory::with_sample_data(), Settings::default())
    }

    #[test]
    fn test_initial_state() {
        let app = sample_app();
        assert_eq!(app.active_view, ActiveView::Users);
        assert_eq!(app.focused_panel, FocusedPanel::Sidebar);
        assert!(!app.has_dialog());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_visible_users_tracks_filter() {
        let mut app = sample_app();
        assert_eq!(app.visible_users().len(), 2);

        app.user_filter.search = "jane".to_string();
        let visible = app.visible_users();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Jane Smith");
    }

    #[test]
    fn test_selected_ids_follow_filtered_view() {
        let mut app = sample_app();
        app.user_filter.search = "jane".to_string();
        assert_eq!(app.selected_user_id(), Some(UserId::new(2)));

        app.user_filter.search = "no such user".to_string();
        assert_eq!(app.selected_user_id(), None);
    }

    #[test]
    fn test_move_down_clamps_to_rows() {
        let mut app = sample_app();
        app.focused_panel = FocusedPanel::Main;
        app.move_down(2);
        app.move_down(2);
        app.move_down(2);
        assert_eq!(app.selected_user_index, 1);
        app.move_up();
        assert_eq!(app.selected_user_index, 0);
    }

    #[test]
    fn test_cycle_role_filter_wraps_to_none() {
        let mut app = sample_app();
        assert!(app.user_filter.role.is_none());
        app.cycle_role_filter();
        assert_eq!(app.user_filter.role.as_deref(), Some("Admin"));
        app.cycle_role_filter();
        app.cycle_role_filter();
        assert_eq!(app.user_filter.role.as_deref(), Some("Viewer"));
        app.cycle_role_filter();
        assert!(app.user_filter.role.is_none());
    }

    #[test]
    fn test_clamp_selection_after_filter_change() {
        let mut app = sample_app();
        app.focused_panel = FocusedPanel::Main;
        app.move_down(2);
        assert_eq!(app.selected_user_index, 1);

        app.role_filter.toggle(Permission::Delete);
        app.user_filter.search = "jane".to_string();
        app.clamp_selection();
        assert_eq!(app.selected_user_index, 0);
    }

    #[test]
    fn test_dialog_lifecycle() {
        let mut app = sample_app();
        app.open_dialog(ActiveDialog::Help);
        assert!(app.has_dialog());
        app.close_dialog();
        assert!(!app.has_dialog());
    }
}
