//! Tenant login page

use leptos::*;
use leptos_router::use_navigate;

use crate::state::AppState;

/// Tenant selection; logging in opens the config list
#[component]
pub fn LoginPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let navigate = use_navigate();

    let (tenant, set_tenant) = create_signal(app_state.current_session().current_tenant().to_string());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        app_state.login(&tenant.get_untracked());
        navigate("/list", Default::default());
    };

    view! {
        <div class="min-h-screen flex items-center justify-center p-6">
            <form
                class="bg-theme-surface rounded-xl w-[380px] shadow-xl border border-theme-border"
                on:submit=on_submit
            >
                <div class="p-4 border-b border-theme-border">
                    <h1 class="text-lg font-semibold text-theme">"Telegraf Homebase"</h1>
                    <p class="text-sm text-theme-secondary mt-1">"Choose the tenant whose inputs you want to manage"</p>
                </div>

                <div class="p-4 space-y-1">
                    <label class="text-sm text-theme-secondary">"Tenant ID"</label>
                    <input
                        type="text"
                        class="w-full px-3 py-2 rounded-lg bg-theme-bg border border-theme-border text-sm text-theme focus:outline-none focus:ring-2 focus:ring-accent focus:border-transparent"
                        prop:value=move || tenant.get()
                        on:input=move |e| set_tenant.set(event_target_value(&e))
                    />
                </div>

                <div class="p-4 border-t border-theme-border flex justify-end">
                    <button type="submit" class="btn-primary">"Login"</button>
                </div>
            </form>
        </div>
    }
}
