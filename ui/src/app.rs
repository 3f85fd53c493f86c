//! Root Application Component
//!
//! This module contains the main App component that sets up:
//! - Client configuration and global state providers
//! - Routing between the login and list pages
//! - The toast overlay

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::components::{ConfigListPage, LoginPage, Toasts};
use crate::config::UiConfig;
use crate::state::AppState;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = UiConfig::from_window();
    tracing::debug!(api_base = %config.api_base, tenant = %config.default_tenant, "Starting console");

    // Initialize global state
    let app_state = AppState::new(config);
    provide_context(app_state);

    view! {
        <Title text="Telegraf Homebase" />
        <Router>
            <main class="min-h-screen flex flex-col bg-theme-bg text-theme">
                <Routes>
                    <Route path="/list" view=ConfigListPage />

                    // Anything else lands on tenant login
                    <Route path="/*any" view=LoginPage />
                </Routes>
            </main>
            <Toasts />
        </Router>
    }
}
