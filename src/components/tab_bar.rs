//! Top tab bar; the only source of view transitions.

use leptos::prelude::*;

use crate::state::view::{Tab, ViewState};

/// Tab controls for the five top-level views. Marks the active tab and
/// reports explicit user selections through `on_select`.
#[component]
pub fn TabBar(on_select: Callback<Tab>) -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();

    view! {
        <nav class="tab-bar">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let is_active = move || view.get().active == tab;
                    view! {
                        <button
                            class="tab-bar__tab"
                            class=("tab-bar__tab--active", is_active)
                            on:click=move |_| on_select.run(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
