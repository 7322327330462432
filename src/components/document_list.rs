//! Document renderer: title cards with download links.

use leptos::prelude::*;

use crate::net::types::DocumentItem;

/// One card per document with an external download link.
#[component]
pub fn DocumentList(items: Vec<DocumentItem>) -> impl IntoView {
    view! {
        <div class="grid">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <div class="card">
                            <div class="card__title">{item.title}</div>
                            <a class="btn btn--primary" href=item.url target="_blank" rel="noopener">
                                "Download PDF"
                            </a>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
