//! Config entry detail panel

use homebase_shared::ConfigEntry;
use leptos::*;

/// Slide-over showing one entry's input text and placement
#[component]
pub fn ConfigDetailPanel(
    entry: ConfigEntry,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let title = entry.title.clone().unwrap_or_else(|| entry.id.clone());
    let text = entry.effective_text();
    let target_heading = if entry.is_assigned() { "Assignment tags" } else { "Region" };
    let target = entry.target_label();

    let facts = [
        ("ID", Some(entry.id.clone())),
        ("Running on", entry.running_on.clone()),
        ("Assigned to", entry.assigned_to.clone()),
        ("Group", entry.group_id.clone()),
    ];

    view! {
        <div class="fixed inset-y-0 right-0 w-[520px] bg-theme-surface border-l border-theme-border shadow-xl z-30 flex flex-col">
            <div class="flex items-center justify-between p-4 border-b border-theme-border">
                <h2 class="text-lg font-semibold text-theme truncate">{title}</h2>
                <button
                    class="p-1.5 hover:bg-theme-surface-hover rounded-lg text-theme-secondary hover:text-theme transition-colors"
                    on:click=move |_| on_close.call(())
                >
                    "✕"
                </button>
            </div>

            <div class="flex-1 overflow-y-auto p-4 space-y-4 custom-scrollbar">
                <div class="p-3 bg-theme-bg rounded-lg border border-theme-border">
                    <div class="text-sm text-theme-secondary">{target_heading}</div>
                    <code class="font-mono text-theme">{target}</code>
                </div>

                <dl class="grid grid-cols-[auto_1fr] gap-x-4 gap-y-1 text-sm">
                    {facts.into_iter().filter_map(|(label, value)| value.map(|value| view! {
                        <>
                            <dt class="text-theme-secondary">{label}</dt>
                            <dd class="font-mono text-theme">{value}</dd>
                        </>
                    })).collect_view()}
                </dl>

                <div class="space-y-1">
                    <div class="text-sm text-theme-secondary">"Telegraf input"</div>
                    <pre class="p-3 bg-theme-bg rounded-lg border border-theme-border text-xs font-mono text-theme whitespace-pre-wrap">{text}</pre>
                </div>
            </div>
        </div>
    }
}
