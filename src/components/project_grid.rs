//! Project portfolio renderer.

use leptos::prelude::*;

use crate::net::types::ProjectItem;

/// One card per project: title, optional description, optional image note.
#[component]
pub fn ProjectGrid(items: Vec<ProjectItem>) -> impl IntoView {
    view! {
        <div class="grid">
            {items
                .into_iter()
                .map(|item| {
                    let image_note = item.image.map(|image| {
                        view! { <div class="card__muted card__muted--small">{format!("Image: {image}")}</div> }
                    });
                    view! {
                        <div class="card">
                            <div class="card__title">{item.title}</div>
                            <div class="card__muted">{item.description.unwrap_or_default()}</div>
                            {image_note}
                            <div class="card__footer">
                                <span class="badge">"Live data from the showcase site"</span>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
