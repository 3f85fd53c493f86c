//! Add config dialog

use homebase_shared::{Region, EXAMPLE_TEMPLATES};
use leptos::*;

use super::config_list::PageController;
use crate::controller::{AddFlow, AddOutcome, TargetMode};
use crate::state::AppState;

const INPUT_CLASS: &str = "w-full px-3 py-2 rounded-lg bg-theme-bg border border-theme-border text-sm text-theme focus:outline-none focus:ring-2 focus:ring-accent focus:border-transparent";

/// Modal collecting a new input and its target
///
/// Closes through `on_done` with either the submitted request or a cancellation.
#[component]
pub fn AddConfigDialog(
    controller: PageController,
    #[prop(into)] on_done: Callback<AddOutcome>,
) -> impl IntoView {
    let app_state = expect_context::<AppState>();
    let flow = create_rw_signal(AddFlow::new());

    // The tag catalog is fetched every time assigned mode is entered
    let select_mode = move |mode: TargetMode| {
        let mut request = None;
        flow.update(|f| request = f.select_mode(mode));
        let Some(request) = request else {
            return;
        };

        let controller = controller.clone();
        let session = app_state.current_session();
        spawn_local(async move {
            if let Some(catalog) = controller.load_tag_catalog(&session).await {
                flow.update(|f| {
                    f.receive_tag_catalog(request, catalog);
                });
            }
        });
    };

    let is_assigned = move || flow.with(|f| f.mode() == TargetMode::Assigned);

    view! {
        <div class="fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center z-40">
            <div class="bg-theme-surface rounded-xl w-[640px] max-h-[90vh] flex flex-col shadow-xl border border-theme-border">
                <div class="flex items-center justify-between p-4 border-b border-theme-border">
                    <h2 class="text-lg font-semibold text-theme">"Add Config"</h2>
                    <button
                        class="p-1.5 hover:bg-theme-surface-hover rounded-lg text-theme-secondary hover:text-theme transition-colors"
                        on:click=move |_| on_done.call(flow.get_untracked().cancel())
                    >
                        "✕"
                    </button>
                </div>

                // Target mode tabs
                <div class="flex gap-1 px-4 pt-3 border-b border-theme-border">
                    {TargetMode::ALL.into_iter().map(|mode| {
                        let select_mode = select_mode.clone();
                        view! {
                            <button
                                class=move || {
                                    let base = "px-3 py-2 text-sm border-b-2 -mb-px transition-colors";
                                    if flow.with(|f| f.mode() == mode) {
                                        format!("{} border-accent text-accent", base)
                                    } else {
                                        format!("{} border-transparent text-theme-secondary hover:text-theme", base)
                                    }
                                }
                                on:click=move |_| select_mode(mode)
                            >
                                {mode.label()}
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                </div>

                <div class="p-4 space-y-4 overflow-y-auto custom-scrollbar">
                    {move || if is_assigned() {
                        view! { <AssignedTargetFields flow=flow /> }.into_view()
                    } else {
                        view! { <RegionField flow=flow /> }.into_view()
                    }}

                    <div class="space-y-1">
                        <label class="text-sm text-theme-secondary">"Title"</label>
                        <input
                            type="text"
                            class=INPUT_CLASS
                            placeholder="e.g., Website check"
                            prop:value=move || flow.with(|f| f.title().to_string())
                            on:input=move |e| flow.update(|f| f.set_title(event_target_value(&e)))
                        />
                    </div>

                    <div class="space-y-2">
                        <label class="text-sm text-theme-secondary">"Examples"</label>
                        <div class="flex flex-wrap gap-2">
                            {EXAMPLE_TEMPLATES.iter().map(|template| {
                                let name = template.name;
                                view! {
                                    <button
                                        class=move || {
                                            let base = "px-2 py-1 text-xs rounded border transition-colors";
                                            if flow.with(|f| f.example() == Some(name)) {
                                                format!("{} border-accent text-accent bg-accent/10", base)
                                            } else {
                                                format!("{} border-theme-border text-theme-secondary hover:text-theme", base)
                                            }
                                        }
                                        on:click=move |_| flow.update(|f| { f.select_example(name); })
                                    >
                                        {name}
                                    </button>
                                }
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div class="space-y-1">
                        <label class="text-sm text-theme-secondary">"Telegraf input"</label>
                        <textarea
                            class=format!("{} font-mono resize-y", INPUT_CLASS)
                            rows="10"
                            spellcheck="false"
                            prop:value=move || flow.with(|f| f.text().to_string())
                            on:input=move |e| flow.update(|f| f.set_text(event_target_value(&e)))
                        />
                    </div>
                </div>

                <div class="p-4 border-t border-theme-border flex justify-end gap-3">
                    <button
                        class="btn-secondary"
                        on:click=move |_| on_done.call(flow.get_untracked().cancel())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="btn-primary"
                        on:click=move |_| on_done.call(flow.get_untracked().submit())
                    >
                        "Add"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Region picker for regional mode
#[component]
fn RegionField(flow: RwSignal<AddFlow>) -> impl IntoView {
    view! {
        <div class="space-y-1">
            <label class="text-sm text-theme-secondary">"Region"</label>
            <select
                class=INPUT_CLASS
                on:change=move |e| {
                    if let Ok(region) = event_target_value(&e).parse::<Region>() {
                        flow.update(|f| f.set_region(region));
                    }
                }
            >
                {Region::ALL.into_iter().map(|region| view! {
                    <option
                        value=region.as_str()
                        selected=move || flow.with(|f| f.region() == region)
                    >
                        {region.as_str()}
                    </option>
                }).collect::<Vec<_>>()}
            </select>
        </div>
    }
}

/// Tag accumulation for assigned mode
#[component]
fn AssignedTargetFields(flow: RwSignal<AddFlow>) -> impl IntoView {
    let tags = move || {
        flow.with(|f| {
            f.assignment_tags()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<Vec<_>>()
        })
    };
    let available_names = move || {
        flow.with(|f| {
            f.available_tag_names()
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        })
    };
    let suggested_values = move || flow.with(|f| f.suggested_values().to_vec());

    view! {
        <div class="space-y-2">
            <label class="text-sm text-theme-secondary">"Assignment tags"</label>

            <div class="flex flex-wrap gap-2">
                {move || {
                    let current = tags();
                    if current.is_empty() {
                        view! {
                            <span class="text-xs text-theme-muted">"No tags yet; the input will match no agents until one is added"</span>
                        }.into_view()
                    } else {
                        current.into_iter().map(|(name, value)| {
                            let label = format!("{}={}", name, value);
                            view! {
                                <span class="inline-flex items-center gap-1 px-2 py-0.5 text-xs rounded border border-theme-border bg-theme-bg text-theme">
                                    <code class="font-mono">{label}</code>
                                    <button
                                        class="text-theme-muted hover:text-red-400"
                                        on:click=move |_| flow.update(|f| f.remove_tag(&name))
                                    >
                                        "✕"
                                    </button>
                                </span>
                            }
                        }).collect_view()
                    }
                }}
            </div>

            <div class="flex gap-2">
                <input
                    type="text"
                    list="homebase-tag-names"
                    class=INPUT_CLASS
                    placeholder="Tag name"
                    prop:value=move || flow.with(|f| f.pending_tag_name().to_string())
                    on:input=move |e| flow.update(|f| f.set_pending_tag_name(event_target_value(&e)))
                />
                <datalist id="homebase-tag-names">
                    {move || available_names().into_iter().map(|name| view! {
                        <option value=name />
                    }).collect_view()}
                </datalist>

                <input
                    type="text"
                    list="homebase-tag-values"
                    class=INPUT_CLASS
                    placeholder="Tag value"
                    prop:value=move || flow.with(|f| f.pending_tag_value().to_string())
                    on:input=move |e| flow.update(|f| f.set_pending_tag_value(event_target_value(&e)))
                />
                <datalist id="homebase-tag-values">
                    {move || suggested_values().into_iter().map(|value| view! {
                        <option value=value />
                    }).collect_view()}
                </datalist>

                <button
                    class="btn-secondary text-sm flex-shrink-0 disabled:opacity-50"
                    disabled=move || flow.with(|f| f.pending_tag_name().is_empty())
                    on:click=move |_| flow.update(|f| { f.add_pending_tag(); })
                >
                    "Add tag"
                </button>
            </div>
        </div>
    }
}
