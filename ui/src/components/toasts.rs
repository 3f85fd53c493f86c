//! Toast notifications overlay

use leptos::*;

use crate::state::{AppState, Toast};

/// Stack of toasts in the bottom-right corner
///
/// Errors carry a close button and stay until it is used.
#[component]
pub fn Toasts() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let notifications = app_state.notifications;

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-[360px]">
            <For
                each=move || notifications.with(|center| center.toasts().to_vec())
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let app_state = app_state.clone();
                    let id = toast.id;
                    let is_error = toast.notification.is_error();
                    let class = if is_error {
                        "p-3 rounded-lg border shadow-xl text-sm bg-red-500/10 border-red-500/30 text-red-400 flex items-start justify-between gap-3"
                    } else {
                        "p-3 rounded-lg border shadow-xl text-sm bg-theme-surface border-theme-border text-theme"
                    };

                    view! {
                        <div class=class role="status">
                            <span class="break-words">{toast.notification.message}</span>
                            {is_error.then(|| view! {
                                <button
                                    class="text-xs font-medium hover:text-red-300 flex-shrink-0"
                                    on:click=move |_| app_state.dismiss(id)
                                >
                                    "Close"
                                </button>
                            })}
                        </div>
                    }
                }
            />
        </div>
    }
}
