//! Root application component and the tab router.
//!
//! The router owns the single visible pane and the tab-active indicator:
//! activating a tab clears the pane, shows the loading placeholder, and
//! spawns that tab's fetch. Completions pass back through the activation
//! generation so a late response for an abandoned tab is dropped instead
//! of overwriting the pane. Any fetch failure becomes a generic error
//! card; the interface always stays interactive.

use std::future::Future;

use leptos::prelude::*;

use crate::components::admin_panel::AdminPanel;
use crate::components::document_list::DocumentList;
use crate::components::faq_list::FaqList;
use crate::components::lead_form::LeadForm;
use crate::components::project_grid::ProjectGrid;
use crate::components::tab_bar::TabBar;
use crate::components::user_line::UserLine;
use crate::net::api;
use crate::state::identity::Identity;
use crate::state::view::{Pane, Tab, ViewState};

/// Root application component.
///
/// Reads the host identity once, provides the shared contexts, and wires
/// the tab bar to the view pane.
#[component]
pub fn App() -> impl IntoView {
    let identity = Identity::from_host();
    provide_context(identity);

    let view = RwSignal::new(ViewState::default());
    provide_context(view);

    // Initial activation; every later one comes from an explicit click.
    load_tab(view, Tab::default());

    let on_select = Callback::new(move |tab: Tab| load_tab(view, tab));

    view! {
        <div class="app">
            <UserLine/>
            <TabBar on_select=on_select/>
            <main class="app__pane">{move || pane_view(view)}</main>
        </div>
    }
}

/// Activate a tab and, for content tabs, spawn its fetch.
fn load_tab(view: RwSignal<ViewState>, tab: Tab) {
    let Some(generation) = view.try_update(|state| state.activate(tab)) else {
        return;
    };

    match tab {
        Tab::Faq => spawn_content_load(view, generation, async {
            api::fetch_faq().await.map(Pane::Faq)
        }),
        Tab::Docs => spawn_content_load(view, generation, async {
            api::fetch_documents().await.map(Pane::Documents)
        }),
        Tab::Projects => spawn_content_load(view, generation, async {
            api::fetch_projects().await.map(Pane::Projects)
        }),
        // These panes resolved synchronously in `activate`; the lead form
        // and admin panel run their own request cycles.
        Tab::Lead | Tab::Admin => {}
    }
}

/// Run a content fetch and resolve it against the activation generation.
///
/// A stale resolution is discarded: the pane already belongs to a newer
/// activation.
fn spawn_content_load<F>(view: RwSignal<ViewState>, generation: u64, fetch: F)
where
    F: Future<Output = Result<Pane, api::RequestError>> + 'static,
{
    leptos::task::spawn_local(async move {
        let pane = match fetch.await {
            Ok(pane) => pane,
            Err(err) => Pane::Error(err.to_string()),
        };
        let applied = view
            .try_update(|state| state.resolve(generation, pane))
            .unwrap_or(false);
        if !applied {
            leptos::logging::warn!("dropping late response for stale activation {generation}");
        }
    });
}

/// Render the pane for the current view state.
fn pane_view(view: RwSignal<ViewState>) -> impl IntoView {
    match view.get().pane {
        Pane::Loading => view! { <LoadingCard/> }.into_any(),
        Pane::Faq(items) => view! { <FaqList items=items/> }.into_any(),
        Pane::Documents(items) => view! { <DocumentList items=items/> }.into_any(),
        Pane::Projects(items) => view! { <ProjectGrid items=items/> }.into_any(),
        Pane::LeadForm => view! { <LeadForm/> }.into_any(),
        Pane::Admin => view! { <AdminPanel/> }.into_any(),
        Pane::Error(message) => view! { <ErrorCard message=message/> }.into_any(),
    }
}

/// Placeholder card shown while a tab's content is being fetched.
#[component]
fn LoadingCard() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__title">"Loading..."</div>
            <div class="card__muted">"Fetching data from the API"</div>
        </div>
    }
}

/// Generic failure card for a tab load.
#[component]
fn ErrorCard(message: String) -> impl IntoView {
    view! {
        <div class="card card--error">
            <div class="card__title">"Error"</div>
            <div class="card__muted">{message}</div>
        </div>
    }
}
