//! UI Components
//!
//! This module contains the console's pages and overlays:
//! - `login`: Tenant selection
//! - `config_list`: Config list with reload, add and remove actions
//! - `add_dialog`: Add config modal with regional and assigned targeting
//! - `config_detail`: Detail slide-over for one entry
//! - `toasts`: Notification overlay

mod add_dialog;
mod config_detail;
mod config_list;
mod login;
mod toasts;

pub use add_dialog::AddConfigDialog;
pub use config_detail::ConfigDetailPanel;
pub use config_list::ConfigListPage;
pub use login::LoginPage;
pub use toasts::Toasts;
