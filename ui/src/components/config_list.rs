//! Config list page

use std::rc::Rc;

use homebase_shared::ConfigEntry;
use leptos::*;

use super::{AddConfigDialog, ConfigDetailPanel};
use crate::client::BrowserApi;
use crate::controller::{AddOutcome, ListController, ListView};
use crate::state::{AppState, Notification};

/// List view backed by Leptos signals
#[derive(Clone)]
pub struct SignalListView {
    configs: RwSignal<Vec<ConfigEntry>>,
    app_state: AppState,
}

impl ListView for SignalListView {
    fn show_configs(&self, configs: Vec<ConfigEntry>) {
        self.configs.set(configs);
    }

    fn notify(&self, notification: Notification) {
        self.app_state.notify(notification);
    }
}

pub(super) type PageController = Rc<ListController<BrowserApi, SignalListView>>;

/// The tenant's managed inputs with add, remove and detail actions
#[component]
pub fn ConfigListPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let configs = create_rw_signal(Vec::<ConfigEntry>::new());
    let (show_add, set_show_add) = create_signal(false);
    let (details, set_details) = create_signal(Option::<ConfigEntry>::None);

    let controller: PageController = Rc::new(ListController::new(
        app_state.api.clone(),
        SignalListView {
            configs,
            app_state: app_state.clone(),
        },
    ));

    // Initial load, no toast
    {
        let controller = controller.clone();
        let session = app_state.current_session();
        spawn_local(async move {
            controller.activate(&session).await;
        });
    }

    let reload = {
        let controller = controller.clone();
        let app_state = app_state.clone();
        move |_: ev::MouseEvent| {
            let controller = controller.clone();
            let session = app_state.current_session();
            spawn_local(async move {
                controller.reload(&session).await;
            });
        }
    };

    let on_add_done = {
        let controller = controller.clone();
        let app_state = app_state.clone();
        move |outcome: AddOutcome| {
            set_show_add.set(false);
            let controller = controller.clone();
            let session = app_state.current_session();
            spawn_local(async move {
                controller.complete_add(&session, outcome).await;
            });
        }
    };

    let session = app_state.session;
    let tenant = move || session.with(|s| s.current_tenant().to_string());

    view! {
        <div class="flex-1 overflow-auto p-6">
            <div class="max-w-7xl mx-auto">
                <div class="flex items-center justify-between mb-6">
                    <div>
                        <h1 class="text-2xl font-bold text-theme">"Configs"</h1>
                        <p class="text-theme-secondary mt-1">
                            "Managed telegraf inputs for tenant "
                            <code class="bg-theme-surface px-1.5 py-0.5 rounded font-mono">{tenant}</code>
                        </p>
                    </div>
                    <div class="flex items-center gap-3">
                        <a href="/" class="btn-secondary">"Switch tenant"</a>
                        <button class="btn-secondary" on:click=reload>"Reload"</button>
                        <button class="btn-primary" on:click=move |_| set_show_add.set(true)>"+ Add"</button>
                    </div>
                </div>

                {
                    let controller = controller.clone();
                    move || {
                        let list = configs.get();
                        if list.is_empty() {
                            view! {
                                <div class="bg-theme-surface rounded-xl border border-theme-border p-8 text-center">
                                    <p class="text-theme-secondary">"No configs yet"</p>
                                    <p class="text-sm mt-2 text-theme-muted">"Add a regional or tag-assigned input to get started"</p>
                                </div>
                            }.into_view()
                        } else {
                            let controller = controller.clone();
                            view! {
                                <ConfigTable configs=list controller=controller on_details=set_details />
                            }.into_view()
                        }
                    }
                }
            </div>

            {
                let controller = controller.clone();
                move || show_add.get().then(|| view! {
                    <AddConfigDialog controller=controller.clone() on_done=on_add_done.clone() />
                })
            }

            {move || details.get().map(|entry| view! {
                <ConfigDetailPanel entry=entry on_close=move |_| set_details.set(None) />
            })}
        </div>
    }
}

#[component]
fn ConfigTable(
    configs: Vec<ConfigEntry>,
    controller: PageController,
    on_details: WriteSignal<Option<ConfigEntry>>,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();

    view! {
        <div class="bg-theme-surface rounded-xl border border-theme-border overflow-hidden">
            <table class="w-full text-sm">
                <thead class="bg-theme-bg text-theme-secondary text-left">
                    <tr>
                        <th class="px-4 py-2 font-medium">"Title"</th>
                        <th class="px-4 py-2 font-medium">"Target"</th>
                        <th class="px-4 py-2 font-medium">"ID"</th>
                        <th class="px-4 py-2"></th>
                    </tr>
                </thead>
                <tbody>
                    {configs.into_iter().map(|entry| {
                        let title = entry.title.clone().unwrap_or_default();
                        let target = entry.target_label();
                        let target_kind = if entry.is_assigned() { "Tags" } else { "Region" };
                        let id = entry.id.clone();

                        let inspect = {
                            let controller = controller.clone();
                            let app_state = app_state.clone();
                            let entry = entry.clone();
                            move |_: ev::MouseEvent| {
                                let controller = controller.clone();
                                let session = app_state.current_session();
                                let entry = entry.clone();
                                spawn_local(async move {
                                    if let Some(found) = controller.inspect(&session, &entry).await {
                                        on_details.set(Some(found));
                                    }
                                });
                            }
                        };

                        let remove = {
                            let controller = controller.clone();
                            let app_state = app_state.clone();
                            move |_: ev::MouseEvent| {
                                let controller = controller.clone();
                                let session = app_state.current_session();
                                let entry = entry.clone();
                                spawn_local(async move {
                                    controller.remove(&session, &entry).await;
                                });
                            }
                        };

                        view! {
                            <tr class="border-t border-theme-border hover:bg-theme-surface-hover">
                                <td class="px-4 py-2 text-theme">{title}</td>
                                <td class="px-4 py-2">
                                    <span class="text-xs text-theme-muted mr-2">{target_kind}</span>
                                    <code class="font-mono text-theme-secondary">{target}</code>
                                </td>
                                <td class="px-4 py-2">
                                    <code class="font-mono text-xs text-theme-muted">{id}</code>
                                </td>
                                <td class="px-4 py-2 text-right whitespace-nowrap">
                                    <button class="text-accent hover:text-accent/80 mr-3" on:click=inspect>"Details"</button>
                                    <button class="text-red-400 hover:text-red-300" on:click=remove>"Remove"</button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
