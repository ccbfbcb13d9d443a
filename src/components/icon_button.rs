//! Icon Button Component
//!
//! Trash-can button used for row deletion.

use leptos::prelude::*;

#[component]
pub fn IconButton(
    on_click: impl Fn() + Copy + 'static,
    #[prop(optional, into)] title: String,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="icon-button"
            title=title
            on:click=move |ev| {
                ev.stop_propagation();
                on_click();
            }
        >
            "🗑"
        </button>
    }
}
