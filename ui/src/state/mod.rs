//! Global State Management
//!
//! This module manages the application state shared through Leptos context:
//! - The tenant session
//! - On-screen notifications
//! - The config API gateway

mod notifications;
mod session;

pub use notifications::*;
pub use session::Session;

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::client::{BrowserApi, ConfigApi, FetchTransport};
use crate::config::UiConfig;

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Current tenant session
    pub session: RwSignal<Session>,

    /// Toasts on screen
    pub notifications: RwSignal<NotificationCenter>,

    /// Gateway to the config API
    pub api: BrowserApi,

    /// Settings the client was started with
    pub config: UiConfig,
}

impl AppState {
    /// Create the app state for the given configuration
    pub fn new(config: UiConfig) -> Self {
        Self {
            session: create_rw_signal(Session::new(config.default_tenant.clone())),
            notifications: create_rw_signal(NotificationCenter::new()),
            api: ConfigApi::new(FetchTransport::new(&config.api_base)),
            config,
        }
    }

    /// Snapshot of the session for a backend call
    pub fn current_session(&self) -> Session {
        self.session.get_untracked()
    }

    pub fn login(&self, tenant_id: &str) {
        tracing::info!(tenant = tenant_id, "Logging in");
        self.session.update(|s| s.login(tenant_id));
    }

    /// Show a toast; non-persistent ones are dismissed after the configured timeout
    pub fn notify(&self, notification: Notification) {
        let persistent = notification.is_persistent();
        let mut id = 0;
        self.notifications.update(|center| id = center.push(notification));

        if !persistent {
            let notifications = self.notifications;
            Timeout::new(self.config.toast_timeout_ms, move || {
                notifications.update(|center| center.dismiss(id));
            })
            .forget();
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.notifications.update(|center| center.dismiss(id));
    }
}
