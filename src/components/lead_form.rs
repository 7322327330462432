//! Lead submission flow: free-text form, authenticated submit,
//! confirmation or inline error.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{CreatedLead, NewLead};
use crate::state::identity::Identity;

/// Service-request form.
///
/// Renders even without a host token — the backend is the authority on
/// rejecting unauthenticated submissions — but warns up front that the
/// submission needs the Telegram context. On success the pane content is
/// replaced by a confirmation card; on failure the form stays usable with
/// the error shown inline.
#[component]
pub fn LeadForm() -> impl IntoView {
    let identity = expect_context::<Identity>();

    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let work_type = RwSignal::new(String::new());
    let budget = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let submitted = RwSignal::new(None::<CreatedLead>);
    let error = RwSignal::new(None::<String>);

    let host_note = (!identity.is_authenticated()).then(|| {
        view! {
            <div class="card card--notice">
                <div class="card__title">"Heads up"</div>
                <div class="card__muted">
                    "Submitting a request only works inside Telegram: the backend checks the WebApp authorization data."
                </div>
            </div>
        }
    });

    let on_submit = {
        let identity = identity.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            error.set(None);

            let payload = NewLead::from_form(
                &name.get(),
                &phone.get(),
                &city.get(),
                &work_type.get(),
                &budget.get(),
                &description.get(),
            );
            let identity = identity.clone();
            leptos::task::spawn_local(async move {
                match api::submit_lead(&identity, &payload).await {
                    Ok(created) => submitted.set(Some(created)),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
    };

    view! {
        <div class="grid">
            {host_note}
            <Show
                when=move || submitted.get().is_none()
                fallback=move || {
                    submitted
                        .get()
                        .map(|created| {
                            view! {
                                <div class="card">
                                    <div class="card__title">"Done"</div>
                                    <div class="card__muted">
                                        {format!("Request #{} created. Status: {}.", created.id, created.status)}
                                    </div>
                                </div>
                            }
                        })
                }
            >
                <div class="card lead-form">
                    <div class="card__title">"Request a renovation / contractor match"</div>
                    <div class="lead-form__row">
                        <input
                            class="input"
                            placeholder="Name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <input
                            class="input"
                            placeholder="Phone"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="lead-form__row">
                        <input
                            class="input"
                            placeholder="City"
                            prop:value=move || city.get()
                            on:input=move |ev| city.set(event_target_value(&ev))
                        />
                        <input
                            class="input"
                            placeholder="Type of work (e.g. tiling, wiring)"
                            prop:value=move || work_type.get()
                            on:input=move |ev| work_type.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="lead-form__row">
                        <input
                            class="input"
                            placeholder="Budget (e.g. up to 500 000)"
                            prop:value=move || budget.get()
                            on:input=move |ev| budget.set(event_target_value(&ev))
                        />
                    </div>
                    <textarea
                        class="input lead-form__description"
                        placeholder="Briefly describe the job"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    {move || {
                        error
                            .get()
                            .map(|message| view! { <div class="lead-form__error">{message}</div> })
                    }}
                    <div class="lead-form__actions">
                        <button class="btn btn--primary" on:click=on_submit.clone()>
                            "Send request"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
