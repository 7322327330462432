//! Admin panel: lead triage table, per-row status mutation, CSV export.
//!
//! Each activation ends in one of two expected outcomes: the lead table,
//! or an access-restricted card when the backend refuses the listing.
//! A successful status mutation reloads the whole panel from the backend
//! instead of patching the row locally, so the table always shows server
//! state. Failures of sub-actions land in a dismissible notice and leave
//! the table untouched.

#[cfg(test)]
#[path = "admin_panel_test.rs"]
mod admin_panel_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{LEAD_STATUSES, Lead, status_badge};
use crate::state::identity::Identity;
use crate::util::download;

const EXPORT_FILENAME: &str = "leads.csv";

/// Outcome of one panel activation.
#[derive(Clone, Debug, PartialEq)]
enum AdminPane {
    Loading,
    Ready(Vec<Lead>),
    /// Expected refusal: the backend denied the listing. Carries the raw
    /// error text for display.
    Restricted(String),
}

/// Admin view. Outside the host the privileged fetch is disabled and only
/// the intro renders; the backend remains the sole authority on who is an
/// admin.
#[component]
pub fn AdminPanel() -> impl IntoView {
    let identity = expect_context::<Identity>();
    let authenticated = identity.is_authenticated();

    let pane = RwSignal::new(AdminPane::Loading);
    let notice = RwSignal::new(None::<String>);

    let load = {
        let identity = identity.clone();
        move || {
            let identity = identity.clone();
            pane.set(AdminPane::Loading);
            leptos::task::spawn_local(async move {
                match api::fetch_admin_leads(&identity).await {
                    Ok(leads) => pane.set(AdminPane::Ready(leads)),
                    Err(err) => pane.set(AdminPane::Restricted(err.to_string())),
                }
            });
        }
    };

    if authenticated {
        load();
    }
    let reload = Callback::new(move |()| load());

    let on_export = {
        let identity = identity.clone();
        Callback::new(move |()| {
            let identity = identity.clone();
            leptos::task::spawn_local(async move {
                let saved = match api::export_leads_csv(&identity).await {
                    Ok(bytes) => download::save_bytes(&bytes, EXPORT_FILENAME, "text/csv"),
                    Err(err) => Err(err.to_string()),
                };
                if let Err(message) = saved {
                    notice.set(Some(format!("Export failed: {message}")));
                }
            });
        })
    };

    view! {
        <div class="grid admin-panel">
            <AdminIntro authenticated=authenticated/>
            {move || {
                notice
                    .get()
                    .map(|message| {
                        view! {
                            <div class="admin-panel__notice">
                                <span>{message}</span>
                                <button class="btn" on:click=move |_| notice.set(None)>
                                    "Dismiss"
                                </button>
                            </div>
                        }
                    })
            }}
            <Show when=move || authenticated>
                {move || match pane.get() {
                    AdminPane::Loading => {
                        view! {
                            <div class="card">
                                <div class="card__muted">"Loading leads..."</div>
                            </div>
                        }
                            .into_any()
                    }
                    AdminPane::Restricted(message) => {
                        view! { <RestrictedCard message=message/> }.into_any()
                    }
                    AdminPane::Ready(leads) => {
                        view! { <LeadTable leads=leads reload=reload notice=notice on_export=on_export/> }
                            .into_any()
                    }
                }}
            </Show>
        </div>
    }
}

/// Intro card explaining what the panel demonstrates.
#[component]
fn AdminIntro(authenticated: bool) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card__title">"Admin"</div>
            <div class="card__muted">
                "Lead triage: authorization, statuses, CSV export. Whether this session is an admin is decided by the backend."
            </div>
            {(!authenticated)
                .then(|| {
                    view! {
                        <div class="card__muted">"Open through Telegram to authenticate."</div>
                    }
                })}
        </div>
    }
}

/// Expected-outcome card for a refused listing.
#[component]
fn RestrictedCard(message: String) -> impl IntoView {
    view! {
        <div class="card card--error">
            <div class="card__title">"Access restricted"</div>
            <div class="card__muted">
                "The server refused the admin listing (this account is likely not an admin)."
            </div>
            <div class="card__muted">{format!("Error text: {message}")}</div>
        </div>
    }
}

/// Lead table card with the export action.
#[component]
fn LeadTable(
    leads: Vec<Lead>,
    reload: Callback<()>,
    notice: RwSignal<Option<String>>,
    on_export: Callback<()>,
) -> impl IntoView {
    let count = leads.len();

    view! {
        <div class="card">
            <div class="card__title">{format!("Leads ({count})")}</div>
            // Inert anchor: the handler fetches and saves; it never
            // navigates away from the panel.
            <a
                class="btn btn--primary admin-panel__export"
                href="#"
                on:click=move |ev| {
                    ev.prevent_default();
                    on_export.run(());
                }
            >
                "Export CSV"
            </a>
            <div class="admin-panel__scroll">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Type"</th>
                            <th>"Contact"</th>
                            <th>"Details"</th>
                            <th>"Status"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {leads
                            .into_iter()
                            .map(|lead| view! { <LeadRow lead=lead reload=reload notice=notice/> })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// One lead row with a closed status selector.
#[component]
fn LeadRow(lead: Lead, reload: Callback<()>, notice: RwSignal<Option<String>>) -> impl IntoView {
    let identity = expect_context::<Identity>();

    let id = lead.id;
    let lead_type = lead.lead_type.clone();
    let contact = contact_cell(&lead);
    let details = details_cell(&lead);
    let badge = status_badge(&lead.status).to_owned();
    let current = lead.status.clone();
    let options = status_options(&lead.status);

    let selected = RwSignal::new(lead.status.clone());

    let on_save = move |_| {
        let identity = identity.clone();
        let status = selected.get();
        leptos::task::spawn_local(async move {
            match api::update_lead_status(&identity, id, &status).await {
                // Reload the whole panel so the table reflects backend
                // state rather than a local guess.
                Ok(()) => reload.run(()),
                Err(err) => notice.set(Some(format!("Status update failed: {err}"))),
            }
        });
    };

    view! {
        <tr>
            <td>{id.to_string()}</td>
            <td>{lead_type}</td>
            <td class="admin-panel__cell">{contact}</td>
            <td class="admin-panel__cell">{details}</td>
            <td>
                <span class="badge badge--status">{badge}</span>
            </td>
            <td>
                <div class="admin-panel__actions">
                    <select
                        class="input input--select"
                        on:change=move |ev| selected.set(event_target_value(&ev))
                    >
                        {options
                            .into_iter()
                            .map(|status| {
                                let is_current = status == current;
                                view! {
                                    <option value=status.clone() selected=is_current>
                                        {status.clone()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="btn" on:click=on_save>
                        "Save"
                    </button>
                </div>
            </td>
        </tr>
    }
}

/// Contact column text: name over phone, absent parts left blank.
fn contact_cell(lead: &Lead) -> String {
    format!(
        "{}\n{}",
        lead.name.as_deref().unwrap_or_default(),
        lead.phone.as_deref().unwrap_or_default()
    )
}

/// Details column text: city, work type, budget.
fn details_cell(lead: &Lead) -> String {
    format!(
        "{}\n{}\n{}",
        lead.city.as_deref().unwrap_or_default(),
        lead.work_type.as_deref().unwrap_or_default(),
        lead.budget.as_deref().unwrap_or_default()
    )
}

/// Selector options: the known statuses, plus the row's current value when
/// the backend returned something outside the set, so the row stays
/// editable under forward-compatible statuses.
fn status_options(current: &str) -> Vec<String> {
    let mut options: Vec<String> = LEAD_STATUSES.iter().map(|s| (*s).to_owned()).collect();
    if !LEAD_STATUSES.contains(&current) {
        options.push(current.to_owned());
    }
    options
}
