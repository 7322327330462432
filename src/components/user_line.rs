//! Header line showing who the host says we are.

use leptos::prelude::*;

use crate::state::identity::Identity;

/// One-line session summary: the host user's display name, or a hint that
/// the app was opened outside the host and submission will not work.
#[component]
pub fn UserLine() -> impl IntoView {
    let identity = expect_context::<Identity>();

    let text = if identity.is_authenticated() {
        match identity.display_name {
            Some(name) => format!("You: {name}"),
            None => "Telegram WebApp".to_owned(),
        }
    } else {
        "Opened in a browser (open through Telegram to submit a request)".to_owned()
    };

    view! { <div class="user-line">{text}</div> }
}
