//! FAQ renderer: fetched entries in, card grid out.

use leptos::prelude::*;

use crate::net::types::FaqItem;

/// One card per FAQ entry, in response order.
#[component]
pub fn FaqList(items: Vec<FaqItem>) -> impl IntoView {
    view! {
        <div class="grid">
            {items
                .into_iter()
                .map(|item| {
                    view! {
                        <div class="card">
                            <div class="card__title">{item.question}</div>
                            <div class="card__muted card__muted--prewrap">{item.answer}</div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
