//! Modal dialogs
//!
//! The user and role forms are the edit sessions: transient buffers that
//! materialize into the stores on submit and are discarded on cancel. The
//! confirm dialog gates destructive actions.

pub mod assign_roles;
pub mod confirm;
pub mod help;
pub mod role_form;
pub mod user_form;

pub use assign_roles::AssignRolesState;
pub use role_form::{RoleField, RoleFormState};
pub use user_form::{UserField, UserFormState};
